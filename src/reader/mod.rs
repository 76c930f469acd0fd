//! Row source for delimited text files
//!
//! Produces a lazy, finite, forward-only sequence of records. The engine
//! treats the first record as the header and validates every later record
//! against it.

mod delimited;
mod errors;

pub use delimited::DelimitedReader;
pub use errors::{ReaderError, ReaderResult};
