//! Error types for the ctfile crate.

use thiserror::Error;

/// Errors that can occur when talking to the ctfile web API.
#[derive(Error, Debug)]
pub enum CtfileError {
    #[error("Unexpected status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Not a file: {0}")]
    NotAFile(String),

    #[error("Not authenticated: set a pubcookie first")]
    NotAuthenticated,

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid client configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid share link or ID: {0}")]
    InvalidShareLink(String),
}

impl From<serde_json::Error> for CtfileError {
    fn from(err: serde_json::Error) -> Self {
        CtfileError::MalformedResponse(err.to_string())
    }
}

/// Result type alias for CtfileError.
pub type Result<T> = std::result::Result<T, CtfileError>;
