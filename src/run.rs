//! This module drives the whole conversion: it parses the command line,
//! loads the configuration, builds one database entry per source file and
//! writes the result.

use std::env;
use std::path::Path;

// non-std crates
use log::{set_max_level, LevelFilter};

// project specific modules/crates
use crate::cli::get_arg_parser;
use crate::database::{make_unit, write_database};
use crate::error::{Error, Result};
use crate::logger;
use crate::properties::load_properties;

/// This is the backend entry point for the console application.
///
/// The list of `args` is passed in from the binary driver in `bin.rs`, so
/// its first element is the executable name. On success exactly one info
/// line naming the output file is printed; every failure is returned to
/// the driver, which reports it and decides the process exit code.
///
/// The stages run strictly in sequence: load, extract, build, write. The
/// first failing stage aborts the run, and the output file is not touched
/// before the write stage is reached.
pub fn main(args: Vec<String>) -> Result<()> {
    let arg_parser = get_arg_parser();
    let args = arg_parser.get_matches_from(args);

    logger::init().ok();
    let verbosity = args.get_one::<String>("verbosity").unwrap().as_str() == "debug";
    set_max_level(if verbosity {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    });

    let properties_path = args.get_one::<String>("directory").unwrap();
    let output_path = args.get_one::<String>("output").unwrap();
    let sources = args
        .get_many::<String>("files")
        .unwrap()
        .map(|s| s.as_str())
        .collect::<Vec<_>>();

    let properties = load_properties(Path::new(properties_path))?;
    let configuration = properties.first_configuration()?;
    if let Some(name) = &configuration.name {
        log::debug!("Using configuration {name}");
    }
    let settings = configuration.resolve()?;

    let working_dir = env::current_dir().map_err(Error::CurrentDir)?;
    let units = sources
        .iter()
        .map(|source| make_unit(&working_dir, &settings, source))
        .collect::<Vec<_>>();
    log::debug!("Built {} compile command(s)", units.len());

    write_database(&units, Path::new(output_path))?;
    log::info!("{output_path} has been generated.");
    Ok(())
}
