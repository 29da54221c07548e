//! Client-side error taxonomy
//!
//! Transport failures are classified into the handful of situations an
//! operator can actually act on. Server messages are sniffed only where the
//! structured code is missing, mirroring how the backend words its
//! rejections; anything unclassifiable keeps its original detail under
//! [`PosError::Unexpected`].

use lagoa_client::ClientError;
use rust_decimal::Decimal;
use shared::error::{AppError, ErrorCategory, ErrorCode};
use thiserror::Error;

/// Operator-facing error taxonomy
#[derive(Debug, Error)]
pub enum PosError {
    /// Lookup miss; re-prompt for identification
    #[error("{0}")]
    NotFound(String),

    /// Requested quantity exceeds live stock
    #[error("{message}")]
    InsufficientStock {
        /// Offending product, when the server message names one
        product: Option<String>,
        message: String,
    },

    /// Day-pass limit breached; terminal for this flow, route to the front desk
    #[error("{message}")]
    SpendingLimitExceeded {
        /// Remaining headroom, when known
        available: Option<Decimal>,
        message: String,
    },

    /// Manager PIN missing, rejected, or insufficient permission; re-prompt
    #[error("{0}")]
    Unauthorized(String),

    /// Manual tier requires a manager PIN before anything is sent
    #[error("Manager PIN is required for manual orders")]
    ManagerPinRequired,

    /// Guest deactivated or replaced since selection; re-resolve before retry
    #[error("{0}")]
    GuestInactive(String),

    /// No server response; nothing was committed, retry is safe
    #[error("Network error: {0}")]
    Network(String),

    /// Rejected locally before any network call
    #[error("{0}")]
    Validation(String),

    /// Wristband already bound to an active guest (check-in)
    #[error("{0}")]
    WristbandInUse(String),

    /// Illegal room status transition, rejected locally
    #[error("Room cannot move from {from:?} to {to:?}")]
    RoomState {
        from: shared::models::RoomStatus,
        to: shared::models::RoomStatus,
    },

    /// Anything else, with the original diagnostics preserved
    #[error("{0}")]
    Unexpected(AppError),
}

impl PosError {
    /// Whether the operator may simply retry (nothing was committed).
    pub fn is_retryable(&self) -> bool {
        matches!(self, PosError::Network(_))
    }

    /// Whether the flow must stop and hand the guest to a human escalation
    /// point instead of retrying.
    pub fn requires_escalation(&self) -> bool {
        matches!(self, PosError::SpendingLimitExceeded { .. })
    }

    fn from_app_error(err: AppError) -> Self {
        let detail = |err: &AppError, key: &str| -> Option<String> {
            err.details
                .as_ref()
                .and_then(|d| d.get(key))
                .and_then(|v| v.as_str().map(str::to_string))
        };
        match err.code {
            ErrorCode::NotFound
            | ErrorCode::GuestNotFound
            | ErrorCode::WristbandNotFound
            | ErrorCode::ProductNotFound
            | ErrorCode::OrderNotFound
            | ErrorCode::RoomNotFound
            | ErrorCode::RoomHasNoOccupant
            | ErrorCode::StaffNotFound => PosError::NotFound(err.message),

            ErrorCode::GuestInactive => PosError::GuestInactive(err.message),

            ErrorCode::InsufficientStock | ErrorCode::ProductOutOfStock => {
                let product =
                    detail(&err, "product").or_else(|| extract_product_name(&err.message));
                PosError::InsufficientStock {
                    product,
                    message: err.message,
                }
            }

            ErrorCode::SpendingLimitExceeded => {
                let available = detail(&err, "available").and_then(|a| a.parse().ok());
                PosError::SpendingLimitExceeded {
                    available,
                    message: err.message,
                }
            }

            ErrorCode::WristbandInUse => PosError::WristbandInUse(err.message),

            ErrorCode::InvalidRoomTransition | ErrorCode::RoomNotFree | ErrorCode::RoomOccupied => {
                PosError::Validation(err.message)
            }

            ErrorCode::OrderNotCancellable | ErrorCode::OrderAlreadyCancelled => {
                PosError::Validation(err.message)
            }

            ErrorCode::ValidationFailed
            | ErrorCode::InvalidRequest
            | ErrorCode::InvalidFormat
            | ErrorCode::RequiredField
            | ErrorCode::ValueOutOfRange
            | ErrorCode::AlreadyExists
            | ErrorCode::GuestAmbiguous
            | ErrorCode::OrderEmpty
            | ErrorCode::SettlementRequired
            | ErrorCode::SettlementInvalidMethod => PosError::Validation(err.message),

            ErrorCode::NetworkError | ErrorCode::TimeoutError => PosError::Network(err.message),

            _ => match err.category() {
                ErrorCategory::Auth | ErrorCategory::Permission => {
                    PosError::Unauthorized(err.message)
                }
                _ => PosError::Unexpected(err),
            },
        }
    }
}

impl From<ClientError> for PosError {
    fn from(err: ClientError) -> Self {
        if err.is_network() {
            return PosError::Network(err.to_string());
        }
        match err {
            ClientError::Api(app) => PosError::from_app_error(app),
            ClientError::Unauthorized => {
                PosError::Unauthorized("Operator is not authenticated".to_string())
            }
            // A bare 403 is either the day-pass limit or a rejected manager
            // PIN; the backend wording tells them apart.
            ClientError::Forbidden(text) => {
                let lower = text.to_lowercase();
                if lower.contains("limit") || lower.contains("day pass") || lower.contains("day use")
                {
                    PosError::SpendingLimitExceeded {
                        available: None,
                        message: text,
                    }
                } else {
                    PosError::Unauthorized(text)
                }
            }
            ClientError::NotFound(text) => PosError::NotFound(text),
            // A bare 400 on submission is almost always a stock rejection.
            ClientError::Validation(text) => {
                let lower = text.to_lowercase();
                if lower.contains("stock") {
                    PosError::InsufficientStock {
                        product: extract_product_name(&text),
                        message: text,
                    }
                } else {
                    PosError::Validation(text)
                }
            }
            ClientError::Conflict(text) => PosError::WristbandInUse(text),
            ClientError::Http(e) => PosError::Unexpected(AppError::internal(e.to_string())),
            ClientError::InvalidResponse(text) | ClientError::Internal(text) => {
                PosError::Unexpected(AppError::internal(text))
            }
            ClientError::Serialization(e) => PosError::Unexpected(AppError::internal(e.to_string())),
        }
    }
}

/// Pull the product name out of a stock rejection message.
///
/// Recognizes the backend's two phrasings: "Insufficient stock for X." and
/// "X is out of stock".
pub(crate) fn extract_product_name(message: &str) -> Option<String> {
    let lower = message.to_lowercase();

    if let Some(idx) = lower.find("stock for ") {
        let rest = &message[idx + "stock for ".len()..];
        let end = rest.find(['.', ',', '\n']).unwrap_or(rest.len());
        let name = rest[..end].trim();
        if !name.is_empty() {
            return Some(name.to_string());
        }
    }

    if let Some(idx) = lower.find(" is out of stock") {
        let name = message[..idx].trim();
        if !name.is_empty() {
            return Some(name.to_string());
        }
    }

    None
}

/// Result type for core operations
pub type PosResult<T> = Result<T, PosError>;
