//! Request payloads for the remote service
//!
//! Wire bodies for the money-moving endpoints. Field names are camelCase to
//! match the backend contract; absent optional fields are omitted entirely.

use crate::models::{OrderLineInput, OrderStatus, RoomStatus, SettlementMethod};
use serde::{Deserialize, Serialize};

/// Order batch submission body
///
/// Exactly one of `wristband_uid` (wristband tier) or `guest_id` +
/// `manager_pin` (manual tier) identifies the account; the submitting staff
/// member's own PIN travels as the `X-Staff-Pin` header, not in the body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderBatchRequest {
    pub items: Vec<OrderLineInput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wristband_uid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guest_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manager_pin: Option<String>,
    /// Submitting staff member id, for attribution
    #[serde(skip_serializing_if = "Option::is_none")]
    pub staff_id: Option<i64>,
}

/// Checkout body: close the account with a settlement method
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    pub settlement_method: SettlementMethod,
}

/// Order cancellation body (DELETE /api/orders/{id})
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelOrderRequest {
    pub manager_pin: String,
}

/// Room status update body (PATCH /api/rooms/{id}/status)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomStatusUpdate {
    pub status: RoomStatus,
}

/// Staff authentication body
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffAuthRequest {
    pub pin: String,
}

/// Order listing filters, rendered as query parameters
#[derive(Debug, Clone, Default)]
pub struct OrderListQuery {
    pub status: Option<OrderStatus>,
    pub guest_id: Option<i64>,
    pub staff_id: Option<i64>,
    /// Restrict to recent orders (backend-defined window)
    pub recent: Option<bool>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl OrderListQuery {
    /// Filter on a single guest's orders
    pub fn for_guest(guest_id: i64) -> Self {
        Self {
            guest_id: Some(guest_id),
            ..Self::default()
        }
    }
}
