//! csvql - a strict, streaming SQL SELECT engine for delimited text files
//!
//! One query, one file, one pass: `engine::run_query` parses a restricted
//! SQL SELECT, streams the named `.csv` file row by row, and returns a
//! paginated, projected result envelope.

pub mod cli;
pub mod engine;
pub mod logging;
pub mod parser;
pub mod reader;
