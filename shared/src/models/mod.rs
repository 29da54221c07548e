//! Data models
//!
//! Shared between the remote service contract and the terminal clients.
//! All IDs are `i64`; money is `rust_decimal::Decimal`; wire field names are
//! camelCase and enum variants SCREAMING_SNAKE_CASE.

pub mod guest;
pub mod order;
pub mod product;
pub mod room;
pub mod settlement;
pub mod staff;

// Re-exports
pub use guest::*;
pub use order::*;
pub use product::*;
pub use room::*;
pub use settlement::*;
pub use staff::*;
