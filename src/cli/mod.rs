//! CLI module for csvql
//!
//! Thin terminal surface over the engine: argument parsing, output
//! rendering, and error-to-exit-code mapping. The library itself never
//! terminates the process.

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::run;
pub use errors::{CliError, CliResult};
