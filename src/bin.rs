//! This is the compdb_gen package's primary binary executable's source code.

use std::env;
use std::process;

// project specific modules/crates
use compdb_gen::run::main as run_main;

/// This takes the CLI arguments and passes them to [`compdb_gen::run::main`],
/// then translates the outcome into the process exit code.
///
/// Process termination happens here and nowhere else; the pipeline itself
/// only ever returns.
pub fn main() {
    match run_main(env::args().collect::<Vec<String>>()) {
        Ok(()) => {}
        Err(error) => {
            log::error!("{error}");
            process::exit(1);
        }
    }
}
