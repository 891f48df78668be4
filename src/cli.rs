//! This module holds the Command Line Interface design.

// non-std crates
use clap::{Arg, Command};

/// Builds and returns the Command Line Interface's argument parsing object.
pub fn get_arg_parser() -> Command {
    Command::new("compdb-gen")
        .arg(
            Arg::new("files")
                .required(true)
                .num_args(1..)
                .long_help(
                    "The source file(s) to generate compile commands for.
One database entry is emitted per file, in the order the files
are given here.
",
                ),
        )
        .arg(
            Arg::new("directory")
                .long("directory")
                .short('d')
                .default_value(".vscode/c_cpp_properties.json")
                .long_help(
                    "The path to the c_cpp_properties.json file to read.

- Line comments (``//``) and block comments (``/* */``) in the
  file are tolerated.
- Only the first entry of the ``configurations`` list is used.
",
                ),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .default_value("./compile_commands.json")
                .long_help(
                    "The path that the generated compile_commands.json is written to.
The parent directory must already exist; it is not created.
",
                ),
        )
        .arg(
            Arg::new("verbosity")
                .long("verbosity")
                .short('v')
                .default_value("info")
                .value_parser(["debug", "info"])
                .long_help(
                    "This controls the verbosity of the log output.
This option does not affect the content of the generated database.
",
                ),
        )
}
