//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            // Success
            Self::Success => StatusCode::OK,

            // 404 Not Found
            Self::NotFound
            | Self::GuestNotFound
            | Self::WristbandNotFound
            | Self::OrderNotFound
            | Self::ProductNotFound
            | Self::RoomNotFound
            | Self::RoomHasNoOccupant
            | Self::StaffNotFound => StatusCode::NOT_FOUND,

            // 409 Conflict
            Self::AlreadyExists
            | Self::WristbandInUse
            | Self::OrderAlreadyCancelled
            | Self::RoomOccupied
            | Self::RoomNotFree
            | Self::InvalidRoomTransition => StatusCode::CONFLICT,

            // 401 Unauthorized
            Self::NotAuthenticated
            | Self::InvalidCredentials
            | Self::PinInvalid
            | Self::AccountDisabled => StatusCode::UNAUTHORIZED,

            // 403 Forbidden (manager override failures and the day-pass
            // spending limit both surface as 403 in the backend contract)
            Self::PermissionDenied
            | Self::ManagerRequired
            | Self::ManagerPinRejected
            | Self::SpendingLimitExceeded
            | Self::GuestInactive
            | Self::StaffInactive => StatusCode::FORBIDDEN,

            // 503 Service Unavailable (transient errors, client can retry)
            Self::NetworkError | Self::TimeoutError => StatusCode::SERVICE_UNAVAILABLE,

            // 500 Internal Server Error
            Self::InternalError | Self::DatabaseError | Self::ConfigError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }

            // 400 Bad Request (default for validation/business errors)
            _ => StatusCode::BAD_REQUEST,
        }
    }
}
