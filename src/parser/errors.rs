//! Parser error types

use thiserror::Error;

/// Result type for parse operations
pub type ParseResult<T> = Result<T, ParseError>;

/// Errors raised while turning query text into an expression tree
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ParseError {
    /// Query string contained no tokens
    #[error("empty query")]
    Empty,

    /// A character the lexer does not recognize
    #[error("unexpected character '{ch}' at byte {position}")]
    UnexpectedChar { ch: char, position: usize },

    /// A quoted string with no closing quote
    #[error("unterminated string literal starting at byte {0}")]
    UnterminatedString(usize),

    /// A numeric literal that does not fit a 64-bit integer
    #[error("invalid number literal '{0}'")]
    InvalidNumber(String),

    /// Query ended where more input was required
    #[error("unexpected end of query, expected {0}")]
    UnexpectedEof(String),

    /// A token other than the one the grammar requires
    #[error("unexpected token '{found}', expected {expected}")]
    UnexpectedToken { found: String, expected: String },
}
