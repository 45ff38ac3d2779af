//! Catalog domain module.
//!
//! Pure state management for the product catalog: the last-fetched products
//! and categories plus a deterministic filtered view over them. Fetching is
//! the [`source::CatalogSource`] collaborator's job — nothing in here does
//! IO, and nothing in here can fail.

pub mod category;
pub mod source;
pub mod store;

pub use category::{adapt_categories, display_name, ALL_CATEGORY, ALL_CATEGORY_LABEL};
pub use source::{CatalogError, CatalogSource, FixedSource};
pub use store::CatalogStore;
