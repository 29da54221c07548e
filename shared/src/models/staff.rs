//! Staff Model

use serde::{Deserialize, Serialize};

/// Staff role
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Waiter,
    Manager,
    Admin,
    Cleaner,
}

/// Staff member entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Staff {
    pub id: i64,
    pub name: String,
    /// 4-digit terminal PIN, echoed back on authentication so the terminal
    /// can attach it to order submissions for attribution
    pub pin: String,
    pub role: Role,
    pub active: bool,
}

impl Staff {
    /// Roles allowed to grant manager overrides.
    pub fn can_authorize_override(&self) -> bool {
        matches!(self.role, Role::Manager | Role::Admin)
    }
}
