//! Settlement Method

use serde::{Deserialize, Serialize};

/// How a balance is settled (checkout or paid-on-entry check-in)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SettlementMethod {
    Cash,
    Pix,
    Credit,
    Debit,
}

impl SettlementMethod {
    /// All selectable methods, in display order.
    pub const ALL: [SettlementMethod; 4] = [
        SettlementMethod::Cash,
        SettlementMethod::Pix,
        SettlementMethod::Credit,
        SettlementMethod::Debit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Cash => "Cash",
            Self::Pix => "Pix",
            Self::Credit => "Credit card",
            Self::Debit => "Debit card",
        }
    }
}
