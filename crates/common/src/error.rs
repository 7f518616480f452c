//! Common error types for token construction and inspection.

use thiserror::Error;

/// Errors that can occur while encoding or decoding compact tokens
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// Header or claims could not be serialized to / parsed from JSON
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A segment is not valid base64url-no-padding text
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Token is not three non-empty dot-separated segments
    #[error("Malformed token")]
    MalformedToken,
}

impl From<serde_json::Error> for TokenError {
    fn from(err: serde_json::Error) -> Self {
        TokenError::Serialization(err.to_string())
    }
}

impl From<base64::DecodeError> for TokenError {
    fn from(err: base64::DecodeError) -> Self {
        TokenError::Encoding(err.to_string())
    }
}

/// Result type alias using `TokenError`
pub type Result<T> = std::result::Result<T, TokenError>;
