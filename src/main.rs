//! csvql CLI entry point
//!
//! Minimal entrypoint: parse arguments, dispatch via cli::run, print the
//! error to stderr, exit non-zero on failure. All logic lives in the
//! library modules.

use csvql::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
