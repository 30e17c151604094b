/*
[INPUT]:  Error sources (HTTP, API, serialization, session, validation)
[OUTPUT]: Structured error types with context
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the portal client
#[derive(Error, Debug)]
pub enum PortalError {
    /// HTTP request failed (transport-level)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error response
    #[error("API error (status {code}): {message}")]
    Api { code: u16, message: String },

    /// Session cookie is missing, expired, or rejected by the backend
    #[error("session is missing or expired, please sign in again")]
    Unauthorized,

    /// Response body did not match the expected shape
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// Input rejected client-side before any network call
    #[error("validation failed: {0}")]
    Validation(String),

    /// Serialization/deserialization failed
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl PortalError {
    /// Check if the error means the session must be re-established
    pub fn is_auth_error(&self) -> bool {
        matches!(self, PortalError::Unauthorized)
    }

    /// Check if the error is a client-side validation rejection
    pub fn is_validation(&self) -> bool {
        matches!(self, PortalError::Validation(_))
    }

    /// Check if the error means the response shape was malformed
    pub fn is_invalid_response(&self) -> bool {
        matches!(self, PortalError::InvalidResponse(_))
    }

    /// Create an API error from status code and message
    pub fn api_error(status: StatusCode, message: impl Into<String>) -> Self {
        PortalError::Api {
            code: status.as_u16(),
            message: message.into(),
        }
    }
}

/// Result type alias for portal operations
pub type Result<T> = std::result::Result<T, PortalError>;
