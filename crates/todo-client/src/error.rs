//! Client Errors
//!
//! Errors are internal to the client: public operations reduce them to
//! an [`Operation`] failure message stored in the list state.

use std::fmt;

/// Common result type for API calls
pub type ApiResult<T> = Result<T, ApiError>;

/// API-level errors
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The request never produced a response
    Network(String),
    /// The server answered with a non-2xx status
    Status(u16),
    /// The response body did not match the expected envelope
    Decode(String),
    /// Rejected before sending
    InvalidInput(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "Network error: {}", msg),
            ApiError::Status(code) => write!(f, "Unexpected HTTP status {}", code),
            ApiError::Decode(msg) => write!(f, "Decode error: {}", msg),
            ApiError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}

/// Storage-level errors
#[derive(Debug, Clone, PartialEq)]
pub enum StorageError {
    Unavailable,
    Backend(String),
    Io(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Unavailable => write!(f, "Storage unavailable"),
            StorageError::Backend(msg) => write!(f, "Storage backend error: {}", msg),
            StorageError::Io(msg) => write!(f, "Storage I/O error: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<std::io::Error> for StorageError {
    fn from(e: std::io::Error) -> Self {
        StorageError::Io(e.to_string())
    }
}

/// Client operations, each with its own user-facing failure message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    FetchAll,
    FetchOne,
    Create,
    Update,
    Delete,
}

impl Operation {
    pub fn failure_message(&self) -> &'static str {
        match self {
            Operation::FetchAll => "Failed to fetch TODOs",
            Operation::FetchOne => "Failed to fetch TODO",
            Operation::Create => "Failed to create TODO",
            Operation::Update => "Failed to update TODO",
            Operation::Delete => "Failed to delete TODO",
        }
    }
}
