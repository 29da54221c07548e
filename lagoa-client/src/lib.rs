//! Lagoa Client - HTTP transport for the guest-billing service
//!
//! Provides the network client used by every terminal: configuration, the
//! [`HttpClient`] trait seam, its reqwest-backed implementation, and typed
//! endpoint wrappers for guests, products, orders, rooms and staff.

pub mod api;
pub mod config;
pub mod error;
pub mod http;

pub use api::LagoaApi;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::{HttpClient, NetworkHttpClient};

// Re-export shared types for convenience
pub use shared::ApiResponse;
