//! This module holds the compilation database model and the functionality
//! to assemble and write database entries.

use std::fs;
use std::io;
use std::path::Path;

// non-std crates
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;

// project specific modules/crates
use crate::error::{Error, Result};
use crate::properties::CompileSettings;

/// A translation unit of a JSON compilation database.
#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct CompilationUnit {
    /// The working directory of the compilation.
    pub directory: String,

    /// The full compiler invocation for the translation unit.
    pub command: String,

    /// The file path of the translation unit.
    pub file: String,
}

/// Assembles the compiler invocation for one source file.
///
/// The tokens are emitted in a fixed order: the compiler path, one `-I`
/// flag per include path, one `-D` flag per define, the `--std=` flag
/// (always present, even when the standard is empty), `-c`, and the source
/// file path. Include paths and defines keep the order they have in the
/// configuration; nothing is sorted or deduplicated.
pub fn assemble_command(settings: &CompileSettings, source_file: &str) -> String {
    let mut tokens =
        Vec::with_capacity(settings.include_paths.len() + settings.defines.len() + 4);
    tokens.push(settings.compiler_path.clone());
    tokens.extend(settings.include_paths.iter().map(|path| format!("-I{path}")));
    tokens.extend(settings.defines.iter().map(|define| format!("-D{define}")));
    tokens.push(format!("--std={}", settings.standard));
    tokens.push(String::from("-c"));
    tokens.push(source_file.to_string());
    tokens.join(" ")
}

/// Builds the database entry for one source file.
///
/// `directory` is the working directory the invocation is relative to; the
/// caller resolves it once and passes it in.
pub fn make_unit(
    directory: &Path,
    settings: &CompileSettings,
    source_file: &str,
) -> CompilationUnit {
    CompilationUnit {
        directory: directory.to_string_lossy().to_string(),
        command: assemble_command(settings, source_file),
        file: source_file.to_string(),
    }
}

/// Serializes the given units and writes them to `path`.
///
/// The output is indented with 4 spaces so that regenerated databases diff
/// cleanly under version control. The file is only touched once the whole
/// database has been serialized.
pub fn write_database(units: &[CompilationUnit], path: &Path) -> Result<()> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    units.serialize(&mut serializer).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source: io::Error::new(io::ErrorKind::InvalidData, source),
    })?;
    fs::write(path, buffer).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })
}
