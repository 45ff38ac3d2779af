//! Catalog data model.
//!
//! These types mirror what the external catalog source returns, already
//! deserialized. They are immutable once fetched; the stores only ever
//! replace them wholesale.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Product identifier, assigned by the external catalog source.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u64);

impl ProductId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Aggregated customer rating as supplied by the catalog source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rating {
    /// Average rating, 0 to 5.
    pub rate: Decimal,
    /// Number of ratings the average is built from.
    pub count: u32,
}

/// A catalog product.
///
/// `price` is an exact decimal — money never goes through floating point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub description: String,
    /// Unit price, non-negative.
    pub price: Decimal,
    /// Category name, matching [`Category::name`].
    pub category: String,
    /// Image URI.
    pub image: String,
    pub rating: Rating,
}

/// A product category: canonical name plus human label.
///
/// Recreated on every catalog load, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub display_name: String,
}

impl Category {
    pub fn new(name: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            display_name: display_name.into(),
        }
    }
}
