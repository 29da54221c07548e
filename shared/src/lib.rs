//! Shared types for the Lagoa guest-billing client
//!
//! Common types used across the workspace: domain models, the unified
//! error system, the API response envelope, and request payloads.

pub mod error;
pub mod models;
pub mod request;
pub mod response;
pub mod types;

// Re-exports
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
pub use response::ApiResponse;
