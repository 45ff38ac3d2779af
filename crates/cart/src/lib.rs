//! Cart domain module.
//!
//! The authoritative in-memory shopping cart: line items keyed by product
//! id, derived totals/counts/membership, write-through persistence to an
//! abstract byte store, and a synchronous observable item list.

pub mod checkout;
pub mod item;
pub mod store;

pub use checkout::{OrderLine, OrderSummary};
pub use item::CartItem;
pub use store::{CartStore, CART_KEY};
