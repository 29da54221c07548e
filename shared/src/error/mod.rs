//! Unified error system for the Lagoa client
//!
//! This module provides:
//! - [`ErrorCode`]: standardized error codes shared with the backend contract
//! - [`ErrorCategory`]: classification of errors by domain
//! - [`AppError`]: rich error type with codes, messages, and details
//!
//! # Error Code Ranges
//!
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
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! let err = AppError::new(ErrorCode::GuestInactive);
//! assert_eq!(err.http_status(), shared::http::StatusCode::FORBIDDEN);
//!
//! let err = AppError::insufficient_stock("Sunscreen", 2);
//! assert!(err.message.contains("Sunscreen"));
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult};
