//! Order Model
//!
//! A batch submission persists one record per cart line; each record then
//! moves through the kitchen/bar pipeline independently.

use crate::models::{guest::Guest, product::Product};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Order line status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,
    Preparing,
    Ready,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// Only lines that have not reached the guest may be cancelled, and
    /// cancellation always requires manager authorization.
    pub fn is_cancellable(&self) -> bool {
        matches!(self, Self::Pending | Self::Preparing | Self::Ready)
    }

    /// Wire name, as used in query parameters.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Preparing => "PREPARING",
            Self::Ready => "READY",
            Self::Delivered => "DELIVERED",
            Self::Cancelled => "CANCELLED",
        }
    }
}

/// One persisted order line
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRecord {
    pub id: i64,
    pub guest_id: i64,
    pub product_id: i64,
    pub status: OrderStatus,
    /// Line amount at commit time (unit price x quantity)
    pub amount: Decimal,
    pub created_at: DateTime<Utc>,
    /// Expanded guest record (list endpoints)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guest: Option<Guest>,
    /// Expanded product record (list endpoints)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<Product>,
}

/// One line of a batch submission
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineInput {
    pub product_id: i64,
    pub quantity: u32,
}
