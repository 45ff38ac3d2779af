//! The authoritative cart store.

use rust_decimal::Decimal;

use storefront_core::{DomainError, DomainResult, Product, ProductId, Signal, SubscriptionId};
use storefront_storage::KeyValueStore;

use crate::checkout::{OrderLine, OrderSummary};
use crate::item::CartItem;

/// Fixed byte-store key the serialized cart lives under.
pub const CART_KEY: &str = "shopping_cart";

/// Owns the cart line items and their derived views.
///
/// Every mutation writes the full cart through to the byte store under
/// [`CART_KEY`] immediately after the in-memory change, then notifies
/// subscribers synchronously. Derived values (`total`, `item_count`,
/// `contains`) are computed from the live item list on every read — there
/// is no cache to go stale.
#[derive(Debug)]
pub struct CartStore<S> {
    items: Vec<CartItem>,
    storage: S,
    cart_signal: Signal<Vec<CartItem>>,
}

impl<S: KeyValueStore> CartStore<S> {
    /// Restore the cart from `storage`.
    ///
    /// A missing key yields an empty cart. A present but undecodable value
    /// is discarded with a warning — never a fault. A decodable value with
    /// invalid lines (zero quantity, duplicate product id) is repaired on
    /// the way in.
    pub fn new(storage: S) -> Self {
        let items = match storage.read(CART_KEY) {
            None => Vec::new(),
            Some(bytes) => match serde_json::from_slice::<Vec<CartItem>>(&bytes) {
                Ok(raw) => sanitize(raw),
                Err(err) => {
                    tracing::warn!("discarding malformed persisted cart: {err}");
                    Vec::new()
                }
            },
        };

        Self {
            items,
            storage,
            cart_signal: Signal::new(),
        }
    }

    /// Add `quantity` units of `product`.
    ///
    /// If a line for the same product id exists its quantity is incremented;
    /// otherwise a new line is appended. A requested quantity of zero is
    /// clamped to one unit — the UI's quantity prompt defaults unparseable
    /// input to 1, and the store upholds the never-below-one invariant
    /// regardless of the caller.
    pub fn add_item(&mut self, product: Product, quantity: u32) {
        let quantity = quantity.max(1);
        match self.items.iter_mut().find(|i| i.product.id == product.id) {
            Some(item) => item.quantity = item.quantity.saturating_add(quantity),
            None => self.items.push(CartItem::new(product, quantity)),
        }
        self.after_mutation();
    }

    /// Delete the line for `product_id`; no-op if absent.
    pub fn remove_item(&mut self, product_id: ProductId) {
        self.items.retain(|i| i.product.id != product_id);
        self.after_mutation();
    }

    /// Set the quantity of an existing line.
    ///
    /// Zero removes the line (same resulting state as [`Self::remove_item`]).
    /// An absent product id is left alone — this never creates a line.
    pub fn set_quantity(&mut self, product_id: ProductId, quantity: u32) {
        if quantity == 0 {
            self.remove_item(product_id);
            return;
        }

        if let Some(item) = self.items.iter_mut().find(|i| i.product.id == product_id) {
            item.quantity = quantity;
            self.after_mutation();
        }
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.items.clear();
        self.after_mutation();
    }

    /// Sum of `price × quantity` over all lines, exact.
    pub fn total(&self) -> Decimal {
        self.items
            .iter()
            .fold(Decimal::ZERO, |acc, item| acc + item.subtotal())
    }

    /// Sum of all line quantities (not the number of distinct products).
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    pub fn contains(&self, product_id: ProductId) -> bool {
        self.items.iter().any(|i| i.product.id == product_id)
    }

    /// Current lines, in order of first addition.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// `price × quantity` for one line, if present.
    pub fn subtotal(&self, product_id: ProductId) -> Option<Decimal> {
        self.items
            .iter()
            .find(|i| i.product.id == product_id)
            .map(CartItem::subtotal)
    }

    /// Confirm the order: summarize the cart, then empty it.
    ///
    /// Fails on an empty cart. The summary is returned to the caller only;
    /// no order record is persisted (checkout is a stub by design).
    pub fn checkout(&mut self) -> DomainResult<OrderSummary> {
        if self.items.is_empty() {
            return Err(DomainError::validation(
                "cannot check out an empty cart",
            ));
        }

        let summary = OrderSummary {
            lines: self
                .items
                .iter()
                .map(|item| OrderLine {
                    product_id: item.product.id,
                    title: item.product.title.clone(),
                    quantity: item.quantity,
                    subtotal: item.subtotal(),
                })
                .collect(),
            total: self.total(),
        };

        tracing::info!(total = %summary.total, lines = summary.lines.len(), "order confirmed");
        self.clear();
        Ok(summary)
    }

    /// Observe the item list. The callback receives the full list after
    /// each mutation, in mutation order.
    pub fn subscribe(&mut self, callback: impl FnMut(&Vec<CartItem>) + 'static) -> SubscriptionId {
        self.cart_signal.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.cart_signal.unsubscribe(id)
    }

    /// Write-through persist, then notify. Runs after every mutation.
    fn after_mutation(&mut self) {
        match serde_json::to_vec(&self.items) {
            Ok(bytes) => self.storage.write(CART_KEY, &bytes),
            Err(err) => tracing::error!("failed to serialize cart for persistence: {err}"),
        }
        self.cart_signal.emit(&self.items);
    }
}

/// Repair a decoded persisted cart: drop zero-quantity lines and merge
/// duplicate product ids, preserving first-seen order.
fn sanitize(raw: Vec<CartItem>) -> Vec<CartItem> {
    let mut items: Vec<CartItem> = Vec::with_capacity(raw.len());
    for entry in raw {
        if entry.quantity == 0 {
            tracing::warn!(product_id = %entry.product.id, "dropping zero-quantity persisted cart line");
            continue;
        }
        match items.iter_mut().find(|i| i.product.id == entry.product.id) {
            Some(existing) => {
                tracing::warn!(product_id = %entry.product.id, "merging duplicate persisted cart line");
                existing.quantity = existing.quantity.saturating_add(entry.quantity);
            }
            None => items.push(entry),
        }
    }
    items
}
