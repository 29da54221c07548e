//! Guest spend summary
//!
//! Plain-text consumption statement handed to the guest at the counter.
//! Groups the order history per product with a grand total. Explicitly not a
//! fiscal document.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use shared::models::{Guest, OrderRecord};

const WIDTH: usize = 40;

/// Render a spend summary for a guest from their order history.
///
/// Cancelled lines are excluded. `now` is passed in so statements are
/// reproducible in tests.
pub fn spend_summary(guest: &Guest, orders: &[OrderRecord], now: DateTime<Utc>) -> String {
    // Group per product, preserving first-seen order.
    let mut groups: Vec<(String, u32, Decimal)> = Vec::new();
    let mut total = Decimal::ZERO;
    for order in orders {
        if order.status == shared::models::OrderStatus::Cancelled {
            continue;
        }
        let name = order
            .product
            .as_ref()
            .map(|p| p.name.clone())
            .unwrap_or_else(|| format!("Product #{}", order.product_id));
        total += order.amount;
        match groups.iter_mut().find(|(n, _, _)| *n == name) {
            Some((_, count, subtotal)) => {
                *count += 1;
                *subtotal += order.amount;
            }
            None => groups.push((name, 1, order.amount)),
        }
    }

    let thick = "=".repeat(WIDTH);
    let thin = "-".repeat(WIDTH);

    let mut text = String::new();
    text.push_str(&thick);
    text.push_str("\n            SPEND SUMMARY\n");
    text.push_str(&thick);
    text.push('\n');
    text.push_str(&format!("Date: {}\n", now.format("%d/%m/%Y %H:%M")));
    text.push_str(&thin);
    text.push('\n');
    text.push_str(&format!("Guest: {}\n", guest.name));
    text.push_str(&format!("Type: {}\n", guest.kind.as_str()));
    if let Some(room) = &guest.room {
        text.push_str(&format!("Room: {room}\n"));
    }
    if let Some(document) = &guest.document {
        text.push_str(&format!("Document: {document}\n"));
    }
    text.push_str(&format!("Wristband: {}\n", guest.wristband_uid));
    text.push_str(&thin);
    text.push_str("\nITEMS:\n");
    text.push_str(&thin);
    text.push('\n');

    for (name, count, subtotal) in &groups {
        text.push_str(&format!("{count}x {name}\n"));
        text.push_str(&format!("   Subtotal: R$ {subtotal:.2}\n\n"));
    }

    text.push_str(&thin);
    text.push('\n');
    text.push_str(&format!("TOTAL: R$ {total:.2}\n"));
    text.push_str(&thick);
    text.push('\n');
    text.push_str("\nThis is not a fiscal receipt.\nIt is a consumption summary only.\n");
    text
}
