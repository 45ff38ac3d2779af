//! Checkout summary types.
//!
//! Checkout is a confirmation stub: the cart is summarized and emptied, and
//! no order record is persisted anywhere. Payment processing lives outside
//! this system entirely.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use storefront_core::ProductId;

/// One summarized order line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub product_id: ProductId,
    pub title: String,
    pub quantity: u32,
    /// `price × quantity` at the moment of checkout.
    pub subtotal: Decimal,
}

/// Snapshot of the cart at the moment the order was confirmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub lines: Vec<OrderLine>,
    pub total: Decimal,
}
