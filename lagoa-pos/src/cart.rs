//! Cart
//!
//! Client-held collection of (product, quantity) pairs, one line per product.
//! Quantities are bounded by the last-known stock on the way up and floored
//! at 1 on the way down; removal is its own action. The cart survives every
//! rejected submission untouched and is cleared only on commit.

use crate::error::{PosError, PosResult};
use rust_decimal::Decimal;
use shared::models::{OrderLineInput, Product};

/// One cart line
#[derive(Debug, Clone)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
}

impl CartLine {
    /// Line total at the last-known unit price.
    pub fn line_total(&self) -> Decimal {
        self.product.price * Decimal::from(self.quantity)
    }
}

/// Client-held cart, scoped to one operator session
#[derive(Debug, Clone, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Sum of all line totals at last-known prices.
    pub fn total(&self) -> Decimal {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Total unit count across all lines.
    pub fn total_quantity(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    pub fn quantity_of(&self, product_id: i64) -> u32 {
        self.lines
            .iter()
            .find(|l| l.product.id == product_id)
            .map(|l| l.quantity)
            .unwrap_or(0)
    }

    /// Add one unit of a product, merging into an existing line.
    ///
    /// Only visible products may be newly added; an existing line keeps
    /// accepting increments even if the product was delisted meanwhile.
    pub fn add(&mut self, product: Product) -> PosResult<()> {
        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product.id) {
            if !product.has_stock_for(line.quantity + 1) {
                return Err(PosError::InsufficientStock {
                    message: format!(
                        "Only {} unit(s) of {} available",
                        product.stock, product.name
                    ),
                    product: Some(product.name),
                });
            }
            line.product = product;
            line.quantity += 1;
            return Ok(());
        }

        if !product.visible {
            return Err(PosError::Validation(format!(
                "{} is not listed for sale",
                product.name
            )));
        }
        if !product.has_stock_for(1) {
            return Err(PosError::InsufficientStock {
                message: format!("{} is out of stock", product.name),
                product: Some(product.name),
            });
        }
        self.lines.push(CartLine {
            product,
            quantity: 1,
        });
        Ok(())
    }

    /// Increment a line by one, bounded by last-known stock.
    pub fn increment(&mut self, product_id: i64) -> PosResult<()> {
        let line = self
            .lines
            .iter_mut()
            .find(|l| l.product.id == product_id)
            .ok_or_else(|| PosError::NotFound("Product is not in the cart".to_string()))?;
        if !line.product.has_stock_for(line.quantity + 1) {
            return Err(PosError::InsufficientStock {
                product: Some(line.product.name.clone()),
                message: format!(
                    "Only {} unit(s) of {} available",
                    line.product.stock, line.product.name
                ),
            });
        }
        line.quantity += 1;
        Ok(())
    }

    /// Decrement a line by one, floored at 1. Returns whether anything changed.
    pub fn decrement(&mut self, product_id: i64) -> bool {
        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product_id)
            && line.quantity > 1
        {
            line.quantity -= 1;
            return true;
        }
        false
    }

    /// Remove a line entirely. Returns whether it existed.
    pub fn remove(&mut self, product_id: i64) -> bool {
        let before = self.lines.len();
        self.lines.retain(|l| l.product.id != product_id);
        self.lines.len() != before
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Fold freshly fetched product data (stock, price, visibility) into the
    /// queued lines. Quantities are untouched; lines whose product is absent
    /// from `fresh` keep their stale copy for the validator to flag.
    pub fn merge_refreshed(&mut self, fresh: &[Product]) {
        for line in &mut self.lines {
            if let Some(update) = fresh.iter().find(|p| p.id == line.product.id) {
                line.product = update.clone();
            }
        }
    }

    /// Wire form of the cart for a batch submission.
    pub fn to_line_inputs(&self) -> Vec<OrderLineInput> {
        self.lines
            .iter()
            .map(|l| OrderLineInput {
                product_id: l.product.id,
                quantity: l.quantity,
            })
            .collect()
    }
}
