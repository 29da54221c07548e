//! Room Model
//!
//! Room status lifecycle:
//!
//! ```text
//! FREE ──check-in──▶ OCCUPIED ──checkout──▶ CLEANING ──confirmed──▶ FREE
//!   │                                                                ▲
//!   └──blocked──▶ MAINTENANCE ──released────────────────────────────┘
//! ```
//!
//! `OCCUPIED` never transitions by direct operator action; the server drives
//! it from check-in and checkout.

use serde::{Deserialize, Serialize};

/// Room status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoomStatus {
    Free,
    Occupied,
    Cleaning,
    Maintenance,
}

impl RoomStatus {
    /// Whether an operator-requested transition from `self` to `target` is
    /// legal. Transitions in and out of `Occupied` are server-driven and
    /// therefore never legal as direct requests.
    pub fn can_transition_to(&self, target: RoomStatus) -> bool {
        matches!(
            (self, target),
            (RoomStatus::Cleaning, RoomStatus::Free)
                | (RoomStatus::Free, RoomStatus::Maintenance)
                | (RoomStatus::Maintenance, RoomStatus::Free)
        )
    }

    /// Whether a governance operator gets a status-changing action for a room
    /// in this state. Occupied rooms only yield occupant detail.
    pub fn is_actionable(&self) -> bool {
        !matches!(self, RoomStatus::Occupied)
    }

    /// Whether the room may be selected for a new check-in.
    pub fn is_selectable_for_check_in(&self) -> bool {
        matches!(self, RoomStatus::Free)
    }
}

/// Current occupant reference carried on occupied rooms
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomOccupant {
    pub id: i64,
    pub name: String,
}

/// Room entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: i64,
    pub number: String,
    pub status: RoomStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occupant: Option<RoomOccupant>,
}
