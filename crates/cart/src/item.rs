//! Cart line item.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use storefront_core::Product;

/// One cart line: a product and how many units of it.
///
/// Invariant: `quantity >= 1` and at most one line per product id exists in
/// a cart. The store removes a line rather than ever letting its quantity
/// reach zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub product: Product,
    pub quantity: u32,
}

impl CartItem {
    pub fn new(product: Product, quantity: u32) -> Self {
        Self { product, quantity }
    }

    /// `price × quantity` for this line, exact.
    pub fn subtotal(&self) -> Decimal {
        self.product.price * Decimal::from(self.quantity)
    }
}
