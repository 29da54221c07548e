//! Error types and structured error details

use super::category::ErrorCategory;
use super::codes::ErrorCode;
use http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Application error with structured error code and details
///
/// The primary error type shared between the remote service contract and the
/// client crates:
/// - Standardized error codes via [`ErrorCode`]
/// - Human-readable messages
/// - Optional structured details for diagnostics
#[derive(Debug, Clone, Serialize, Deserialize, Error)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details (field-level errors, context, etc.)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
            details: None,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Add a detail entry to this error
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Get the HTTP status code for this error
    pub fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }

    /// Get the category for this error
    pub fn category(&self) -> ErrorCategory {
        self.code.category()
    }

    /// Log this error through tracing at a severity matching its category.
    ///
    /// System-category errors log at `error`, everything else at `warn`.
    pub fn log(&self) {
        if self.category() == ErrorCategory::System {
            tracing::error!(code = %self.code, message = %self.message, "system error");
        } else {
            tracing::warn!(code = %self.code, message = %self.message, "request rejected");
        }
    }

    // ==================== Convenience constructors ====================

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, msg)
    }

    /// Create a not found error
    pub fn not_found(resource: impl Into<String>) -> Self {
        let r = resource.into();
        Self::with_message(ErrorCode::NotFound, format!("{} not found", r))
            .with_detail("resource", r)
    }

    /// Create an invalid request error
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InvalidRequest, msg)
    }

    /// Create an inactive-guest error
    pub fn guest_inactive() -> Self {
        Self::new(ErrorCode::GuestInactive)
    }

    /// Create an insufficient-stock error naming the product
    pub fn insufficient_stock(product: impl Into<String>, available: i32) -> Self {
        let p = product.into();
        Self::with_message(
            ErrorCode::InsufficientStock,
            format!("Insufficient stock for {}. Available: {}", p, available),
        )
        .with_detail("product", p)
        .with_detail("available", available)
    }

    /// Create a spending-limit error
    pub fn spending_limit_exceeded(available: impl Into<String>) -> Self {
        let a = available.into();
        Self::with_message(
            ErrorCode::SpendingLimitExceeded,
            format!("Day pass spending limit exceeded. Available: {}", a),
        )
        .with_detail("available", a)
    }

    /// Create a manager-authorization-required error
    pub fn manager_required() -> Self {
        Self::new(ErrorCode::ManagerRequired)
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InternalError, msg)
    }

    /// Create a network error
    pub fn network(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::NetworkError, msg)
    }
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;
