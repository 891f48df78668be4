//! The root module for the compdb_gen package when compiled as a library.
//! This module mainly holds the declarations of this package's other modules.

// project specific modules/crates
pub mod cli;
pub mod comments;
pub mod database;
pub mod error;
pub mod logger;
pub mod properties;
pub mod run;
