//! Guest Model

use crate::models::settlement::SettlementMethod;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Guest billing classification
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GuestKind {
    /// Overnight guest billed to a room
    Regular,
    /// Day visitor with a hard spending limit
    DayPass,
    /// VIP, open-ended tab
    Vip,
}

impl GuestKind {
    /// Wire name, also used on printed statements.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Regular => "REGULAR",
            Self::DayPass => "DAY_PASS",
            Self::Vip => "VIP",
        }
    }
}

/// Guest entity
///
/// `current_debt` is owned by the remote ledger and already accounts for any
/// entry deposit; clients display it, they never re-derive it. `active` flips
/// to false at checkout and the record is kept for history.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guest {
    pub id: i64,
    pub kind: GuestKind,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<String>,
    /// Room number, when the guest is billed to a room
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room: Option<String>,
    pub wristband_uid: String,
    /// Hard spending cap; only meaningful for day-pass guests
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spending_limit: Option<Decimal>,
    pub current_debt: Decimal,
    /// Day rate / entry amount recorded at check-in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry_fee: Option<Decimal>,
    pub active: bool,
}

impl Guest {
    /// Remaining headroom under the spending limit, if one applies.
    pub fn available_limit(&self) -> Option<Decimal> {
        match (self.kind, self.spending_limit) {
            (GuestKind::DayPass, Some(limit)) => Some(limit - self.current_debt),
            _ => None,
        }
    }

    /// Whether charging `amount` on top of the current debt stays within the
    /// spending limit. Guests without a limit always fit.
    pub fn fits_within_limit(&self, amount: Decimal) -> bool {
        match (self.kind, self.spending_limit) {
            (GuestKind::DayPass, Some(limit)) => self.current_debt + amount <= limit,
            _ => true,
        }
    }
}

/// Check-in payload (guest creation)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GuestCheckIn {
    pub kind: GuestKind,
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "Email is malformed"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<String>,
    /// Room number (display), sent alongside `room_id`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room: Option<String>,
    /// Room id, required for regular guests
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_id: Option<i64>,
    #[validate(length(min = 1, message = "Wristband UID is required"))]
    pub wristband_uid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spending_limit: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry_fee: Option<Decimal>,
    pub paid_on_entry: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settlement_method: Option<SettlementMethod>,
}
