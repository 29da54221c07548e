//! Common types for the shared crate

use rust_decimal::Decimal;

/// Monetary amount in the venue currency
pub type Money = Decimal;

/// Guest identifier
pub type GuestId = i64;

/// Product identifier
pub type ProductId = i64;

/// Order line identifier
pub type OrderId = i64;

/// Room identifier
pub type RoomId = i64;

/// Staff identifier
pub type StaffId = i64;
