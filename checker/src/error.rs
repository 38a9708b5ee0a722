//! Checker error types
//!
//! Only setup can fail a run: configuration, loading the reference records
//! and building the HTTP session. Individual lookups never surface here.

use thiserror::Error;
use shared::SharedError;

/// Result type for checker operations
pub type CheckerResult<T> = Result<T, CheckerError>;

/// Checker error types
#[derive(Error, Debug)]
pub enum CheckerError {
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Record source error: {message}")]
    RecordSourceError { message: String },

    #[error("HTTP client error: {message}")]
    HttpClientError { message: String },

    #[error("Shared component error: {0}")]
    SharedError(#[from] SharedError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}
