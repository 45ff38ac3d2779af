//! `storefront-core` — shared domain building blocks.
//!
//! This crate contains **pure domain** types and primitives (no IO, no
//! presentation concerns): the catalog data model, the domain error
//! taxonomy, and the synchronous observer primitive the stores expose
//! their state through.

pub mod error;
pub mod product;
pub mod signal;

pub use error::{DomainError, DomainResult};
pub use product::{Category, Product, ProductId, Rating};
pub use signal::{Signal, SubscriptionId};
