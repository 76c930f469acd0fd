//! CLI argument definitions using clap
//!
//! Usage:
//! - csvql query "SELECT name FROM packages WHERE id = 1" --dir ./data
//! - csvql query "SELECT * FROM packages" --json

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// csvql - SQL SELECT queries over delimited text files
#[derive(Parser, Debug)]
#[command(name = "csvql")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run a query against the files in a directory
    Query {
        /// The SQL query text
        query: String,

        /// Directory holding the source files
        #[arg(long, default_value = ".")]
        dir: PathBuf,

        /// Emit the result envelope as JSON instead of a table
        #[arg(long)]
        json: bool,

        /// Enable debug diagnostics on stderr
        #[arg(long)]
        verbose: bool,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_query_command() {
        let cli =
            Cli::try_parse_from(["csvql", "query", "SELECT * FROM t", "--dir", "/data"]).unwrap();
        match cli.command {
            Command::Query {
                query, dir, json, ..
            } => {
                assert_eq!(query, "SELECT * FROM t");
                assert_eq!(dir, PathBuf::from("/data"));
                assert!(!json);
            }
        }
    }

    #[test]
    fn test_dir_defaults_to_current() {
        let cli = Cli::try_parse_from(["csvql", "query", "SELECT * FROM t"]).unwrap();
        match cli.command {
            Command::Query { dir, .. } => assert_eq!(dir, PathBuf::from(".")),
        }
    }
}
