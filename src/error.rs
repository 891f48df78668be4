//! Error types for compdb-gen.

use std::io;
use std::path::PathBuf;

// non-std crates
use thiserror::Error;

/// Result type for compdb-gen operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while generating a compilation database.
///
/// Every variant is terminal for the run; the binary driver reports it and
/// exits non-zero.
#[derive(Error, Debug)]
pub enum Error {
    /// The c_cpp_properties.json file does not exist.
    #[error("The file {} does not exist.", .path.display())]
    NotFound {
        /// The missing input path.
        path: PathBuf,
    },

    /// The c_cpp_properties.json file exists but could not be read.
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        /// The unreadable input path.
        path: PathBuf,
        /// The underlying filesystem error.
        source: io::Error,
    },

    /// The configuration content is not valid JSON after comment removal.
    #[error("Failed to decode JSON from {}: {source}", .path.display())]
    Parse {
        /// The input path that held the malformed content.
        path: PathBuf,
        /// The underlying parser error.
        source: serde_json::Error,
    },

    /// The configuration document does not carry a required field.
    #[error("Invalid configuration: {0}")]
    Schema(String),

    /// The current working directory could not be determined.
    #[error("Failed to get current working directory: {0}")]
    CurrentDir(io::Error),

    /// The compilation database could not be written.
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        /// The output path that could not be written.
        path: PathBuf,
        /// The underlying filesystem error.
        source: io::Error,
    },
}
