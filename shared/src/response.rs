//! API response envelope
//!
//! Every remote endpoint wraps its payload in the same structure:
//!
//! ```json
//! { "success": true, "data": { ... } }
//! { "success": false, "error": "Guest not found", "code": 3001 }
//! ```

use crate::error::{AppError, ErrorCode};
use serde::{Deserialize, Serialize};

/// Unified API response envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the request succeeded
    pub success: bool,
    /// Response payload (present on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Human-readable error message (present on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Structured error code (present on failure when the backend knows it)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,
    /// Number of records created/affected (batch endpoints)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
}

impl<T> ApiResponse<T> {
    /// Create a success response with data
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            code: None,
            count: None,
        }
    }

    /// Create an error response from an AppError
    pub fn error(err: &AppError) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(err.message.clone()),
            code: Some(err.code.code()),
            count: None,
        }
    }

    /// Unwrap the envelope into a payload or an [`AppError`].
    ///
    /// A failure envelope keeps its structured code when the value is known;
    /// otherwise the message is carried under [`ErrorCode::Unknown`]. An
    /// envelope claiming success without a payload is an invalid response.
    pub fn into_result(self) -> Result<T, AppError> {
        if self.success {
            return self.data.ok_or_else(|| {
                AppError::internal("Response claimed success but carried no data")
            });
        }
        let message = self
            .error
            .unwrap_or_else(|| "Unknown server error".to_string());
        let code = self
            .code
            .and_then(|c| ErrorCode::try_from(c).ok())
            .unwrap_or(ErrorCode::Unknown);
        Err(AppError::with_message(code, message))
    }
}
