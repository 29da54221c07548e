//! Unified error codes for the Lagoa client
//!
//! Error codes are shared between the remote service and every terminal
//! frontend, organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 3xxx: Guest errors
//! - 4xxx: Order errors
//! - 5xxx: Settlement errors
//! - 6xxx: Product errors
//! - 7xxx: Room errors
//! - 8xxx: Staff errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility with the backend contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 1xxx: Auth ====================
    /// Operator is not authenticated
    NotAuthenticated = 1001,
    /// Invalid credentials
    InvalidCredentials = 1002,
    /// PIN is malformed (must be 4 digits)
    PinInvalid = 1003,
    /// Staff account is disabled
    AccountDisabled = 1004,

    // ==================== 2xxx: Permission ====================
    /// Permission denied
    PermissionDenied = 2001,
    /// Manager authorization required
    ManagerRequired = 2002,
    /// Manager PIN rejected
    ManagerPinRejected = 2003,

    // ==================== 3xxx: Guest ====================
    /// Guest not found
    GuestNotFound = 3001,
    /// Guest is no longer active
    GuestInactive = 3002,
    /// No guest bound to this wristband
    WristbandNotFound = 3003,
    /// Wristband is already bound to an active guest
    WristbandInUse = 3004,
    /// Day-pass spending limit exceeded
    SpendingLimitExceeded = 3005,
    /// More than one active guest matched
    GuestAmbiguous = 3006,

    // ==================== 4xxx: Order ====================
    /// Order not found
    OrderNotFound = 4001,
    /// Order is not in a cancellable state
    OrderNotCancellable = 4002,
    /// Order has already been cancelled
    OrderAlreadyCancelled = 4003,
    /// Order has no line items
    OrderEmpty = 4004,

    // ==================== 5xxx: Settlement ====================
    /// A settlement method is required
    SettlementRequired = 5001,
    /// Invalid settlement method
    SettlementInvalidMethod = 5002,
    /// Settlement processing failed
    SettlementFailed = 5003,

    // ==================== 6xxx: Product ====================
    /// Product not found
    ProductNotFound = 6001,
    /// Product has invalid price
    ProductInvalidPrice = 6002,
    /// Product is out of stock
    ProductOutOfStock = 6003,
    /// Requested quantity exceeds live stock
    InsufficientStock = 6004,
    /// Product is not listed for sale
    ProductNotVisible = 6005,

    // ==================== 7xxx: Room ====================
    /// Room not found
    RoomNotFound = 7001,
    /// Room is occupied
    RoomOccupied = 7002,
    /// Room is not free for check-in
    RoomNotFree = 7003,
    /// Requested room status transition is not allowed
    InvalidRoomTransition = 7004,
    /// Room has no active occupant
    RoomHasNoOccupant = 7005,

    // ==================== 8xxx: Staff ====================
    /// Staff member not found
    StaffNotFound = 8001,
    /// Staff member is inactive
    StaffInactive = 8002,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
    /// Network error
    NetworkError = 9003,
    /// Operation timeout
    TimeoutError = 9004,
    /// Configuration error
    ConfigError = 9005,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Auth
            ErrorCode::NotAuthenticated => "Operator is not authenticated",
            ErrorCode::InvalidCredentials => "Invalid credentials",
            ErrorCode::PinInvalid => "PIN must be exactly 4 digits",
            ErrorCode::AccountDisabled => "Staff account is disabled",

            // Permission
            ErrorCode::PermissionDenied => "Permission denied",
            ErrorCode::ManagerRequired => "Manager authorization is required",
            ErrorCode::ManagerPinRejected => "Manager PIN was rejected",

            // Guest
            ErrorCode::GuestNotFound => "Guest not found",
            ErrorCode::GuestInactive => "Guest is no longer active",
            ErrorCode::WristbandNotFound => "No guest is bound to this wristband",
            ErrorCode::WristbandInUse => "Wristband is already in use by an active guest",
            ErrorCode::SpendingLimitExceeded => "Day-pass spending limit exceeded",
            ErrorCode::GuestAmbiguous => "More than one active guest matched",

            // Order
            ErrorCode::OrderNotFound => "Order not found",
            ErrorCode::OrderNotCancellable => "Order is not in a cancellable state",
            ErrorCode::OrderAlreadyCancelled => "Order has already been cancelled",
            ErrorCode::OrderEmpty => "Order has no line items",

            // Settlement
            ErrorCode::SettlementRequired => "A settlement method is required",
            ErrorCode::SettlementInvalidMethod => "Invalid settlement method",
            ErrorCode::SettlementFailed => "Settlement processing failed",

            // Product
            ErrorCode::ProductNotFound => "Product not found",
            ErrorCode::ProductInvalidPrice => "Product has invalid price",
            ErrorCode::ProductOutOfStock => "Product is out of stock",
            ErrorCode::InsufficientStock => "Requested quantity exceeds available stock",
            ErrorCode::ProductNotVisible => "Product is not listed for sale",

            // Room
            ErrorCode::RoomNotFound => "Room not found",
            ErrorCode::RoomOccupied => "Room is occupied",
            ErrorCode::RoomNotFree => "Room is not free for check-in",
            ErrorCode::InvalidRoomTransition => "Room status transition is not allowed",
            ErrorCode::RoomHasNoOccupant => "Room has no active occupant",

            // Staff
            ErrorCode::StaffNotFound => "Staff member not found",
            ErrorCode::StaffInactive => "Staff member is inactive",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::DatabaseError => "Database error",
            ErrorCode::NetworkError => "Network error",
            ErrorCode::TimeoutError => "Operation timed out",
            ErrorCode::ConfigError => "Configuration error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Auth
            1001 => Ok(ErrorCode::NotAuthenticated),
            1002 => Ok(ErrorCode::InvalidCredentials),
            1003 => Ok(ErrorCode::PinInvalid),
            1004 => Ok(ErrorCode::AccountDisabled),

            // Permission
            2001 => Ok(ErrorCode::PermissionDenied),
            2002 => Ok(ErrorCode::ManagerRequired),
            2003 => Ok(ErrorCode::ManagerPinRejected),

            // Guest
            3001 => Ok(ErrorCode::GuestNotFound),
            3002 => Ok(ErrorCode::GuestInactive),
            3003 => Ok(ErrorCode::WristbandNotFound),
            3004 => Ok(ErrorCode::WristbandInUse),
            3005 => Ok(ErrorCode::SpendingLimitExceeded),
            3006 => Ok(ErrorCode::GuestAmbiguous),

            // Order
            4001 => Ok(ErrorCode::OrderNotFound),
            4002 => Ok(ErrorCode::OrderNotCancellable),
            4003 => Ok(ErrorCode::OrderAlreadyCancelled),
            4004 => Ok(ErrorCode::OrderEmpty),

            // Settlement
            5001 => Ok(ErrorCode::SettlementRequired),
            5002 => Ok(ErrorCode::SettlementInvalidMethod),
            5003 => Ok(ErrorCode::SettlementFailed),

            // Product
            6001 => Ok(ErrorCode::ProductNotFound),
            6002 => Ok(ErrorCode::ProductInvalidPrice),
            6003 => Ok(ErrorCode::ProductOutOfStock),
            6004 => Ok(ErrorCode::InsufficientStock),
            6005 => Ok(ErrorCode::ProductNotVisible),

            // Room
            7001 => Ok(ErrorCode::RoomNotFound),
            7002 => Ok(ErrorCode::RoomOccupied),
            7003 => Ok(ErrorCode::RoomNotFree),
            7004 => Ok(ErrorCode::InvalidRoomTransition),
            7005 => Ok(ErrorCode::RoomHasNoOccupant),

            // Staff
            8001 => Ok(ErrorCode::StaffNotFound),
            8002 => Ok(ErrorCode::StaffInactive),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::DatabaseError),
            9003 => Ok(ErrorCode::NetworkError),
            9004 => Ok(ErrorCode::TimeoutError),
            9005 => Ok(ErrorCode::ConfigError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.code(), self.message())
    }
}
