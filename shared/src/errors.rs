//! Shared error types for the acceptance checker

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SharedError {
    #[error("Invalid birthday for record {record_id}: {value}")]
    InvalidBirthday { record_id: i64, value: String },

    #[error("Invalid record: {message}")]
    InvalidRecord { message: String },
}

pub type SharedResult<T> = Result<T, SharedError>;

/// Why a single lookup did not produce a usable response.
///
/// The `Display` text is the human-readable reason shown in reports.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupFailure {
    /// Connection refused, DNS failure, broken connection
    #[error("transport error: {message}")]
    Transport { message: String },

    /// The call exceeded its total-duration budget
    #[error("timeout")]
    Timeout,

    /// The service answered with a non-success status
    #[error("HTTP status {status}: {message}")]
    HttpStatus { status: u16, message: String },

    /// Success status but the body is not a JSON array of entries with an `id`
    #[error("malformed response: {message}")]
    MalformedResponse { message: String },

    /// The lookup never reached the network
    #[error("dispatch error: {message}")]
    Dispatch { message: String },
}

impl LookupFailure {
    pub fn reason(&self) -> String {
        self.to_string()
    }
}
