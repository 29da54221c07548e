//! Client error types

use shared::AppError;
use thiserror::Error;

/// Transport-level client error
///
/// `Api` carries the structured error the server reported; the remaining
/// variants cover transport failures and responses that could not be
/// classified from the body alone.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed (connection, timeout, protocol)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Structured error reported by the server
    #[error("API error: {0}")]
    Api(AppError),

    /// Authentication required (401 without a parsable body)
    #[error("Authentication required")]
    Unauthorized,

    /// Permission denied (403 without a parsable body)
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Resource not found (404 without a parsable body)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Request rejected (400 without a parsable body)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Conflict (409 without a parsable body)
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Unclassified server error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// Whether the failure happened before any server response, so no order
    /// lines can have been persisted and a retry is safe.
    pub fn is_network(&self) -> bool {
        match self {
            ClientError::Http(e) => e.is_timeout() || e.is_connect() || e.is_request(),
            _ => false,
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
