//! Product Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Product entity
///
/// `stock` is authoritative on the server; clients treat their copy as a
/// snapshot and must refresh it before any commit decision. `visible` gates
/// new cart additions only — a line queued before a product was delisted is
/// still revalidated by live stock.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: Decimal,
    pub stock: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Fulfillment sector (e.g. "KITCHEN", "POOL_BAR")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sector: Option<String>,
    /// Whether the product may be newly added to a cart
    #[serde(default = "default_visible")]
    pub visible: bool,
}

fn default_visible() -> bool {
    true
}

impl Product {
    /// Whether `quantity` units can be served from the last-known stock.
    pub fn has_stock_for(&self, quantity: u32) -> bool {
        quantity as i64 <= self.stock as i64
    }
}
