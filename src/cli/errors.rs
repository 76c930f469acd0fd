//! CLI-specific error types

use thiserror::Error;

use crate::engine::EngineError;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors surfaced to the terminal user
#[derive(Debug, Error)]
pub enum CliError {
    /// Query evaluation failed
    #[error("{0}")]
    Query(#[from] EngineError),

    /// Writing output failed
    #[error("output error: {0}")]
    Output(#[from] std::io::Error),

    /// Serializing the JSON envelope failed
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
