//! Engine error types
//!
//! Every variant is fatal: the query that raised it returns no partial
//! results. Expected per-row exclusions (a non-matching row, a row whose
//! field is not a parseable version) are not errors and never appear here.

use std::path::PathBuf;
use thiserror::Error;

use crate::parser::ParseError;
use crate::reader::ReaderError;

/// Result type for engine operations
pub type EngineResult<T> = Result<T, EngineError>;

/// Fatal query-evaluation errors
#[derive(Debug, Error)]
pub enum EngineError {
    /// Top-level statement is not a SELECT
    #[error("unsupported query type: {0}")]
    UnsupportedQuery(String),

    /// Predicate references an operator outside the supported set
    #[error("unsupported operator: {0}")]
    UnsupportedOperator(String),

    /// A data row's field count differs from the header's
    #[error("row shape mismatch on line {line}: expected {expected} fields, found {found}")]
    RowShapeMismatch {
        /// 1-based line number, counting the header as line 1
        line: usize,
        expected: usize,
        found: usize,
    },

    /// The version operator's literal is not a valid range
    #[error("invalid version range operand: '{0}'")]
    InvalidVersionOperand(String),

    /// A LIKE pattern produced an unbuildable match expression
    #[error("invalid pattern: {0}")]
    InvalidPattern(String),

    /// Source file contained no header row
    #[error("source file has no header row: {0}")]
    MissingHeader(PathBuf),

    /// Query text failed to parse
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Row source failure (missing file, read error)
    #[error(transparent)]
    Source(#[from] ReaderError),
}
