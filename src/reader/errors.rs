//! Row source error types

use std::path::PathBuf;
use thiserror::Error;

/// Result type for row source operations
pub type ReaderResult<T> = Result<T, ReaderError>;

/// Errors raised while reading a delimited source file
#[derive(Debug, Error)]
pub enum ReaderError {
    /// Source file does not exist
    #[error("source file not found: {0}")]
    NotFound(PathBuf),

    /// I/O failure while opening or reading the source
    #[error("failed to read source: {0}")]
    Io(#[from] std::io::Error),
}
