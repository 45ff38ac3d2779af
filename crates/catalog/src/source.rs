//! External catalog source collaborator.

use thiserror::Error;

use storefront_core::Product;

/// Failure fetching from the remote catalog.
///
/// Entirely the collaborator's concern: the caller reports it to the user
/// and simply does not feed the stores until data is available.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("catalog source unavailable: {0}")]
    Unavailable(String),
}

/// The remote catalog, already deserialized into domain shapes.
///
/// Implementations own the network work. Category identifiers come back raw
/// and are adapted into [`storefront_core::Category`] values via
/// [`crate::category::adapt_categories`] before reaching the store.
pub trait CatalogSource {
    fn fetch_all_products(&self) -> Result<Vec<Product>, CatalogError>;

    /// Products belonging to one category (exact name match).
    fn fetch_products_by_category(&self, category: &str) -> Result<Vec<Product>, CatalogError>;

    /// Raw category identifiers, in the source's order.
    fn fetch_categories(&self) -> Result<Vec<String>, CatalogError>;
}

/// In-memory catalog source for tests and demos.
#[derive(Debug, Clone, Default)]
pub struct FixedSource {
    products: Vec<Product>,
}

impl FixedSource {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }
}

impl CatalogSource for FixedSource {
    fn fetch_all_products(&self) -> Result<Vec<Product>, CatalogError> {
        Ok(self.products.clone())
    }

    fn fetch_products_by_category(&self, category: &str) -> Result<Vec<Product>, CatalogError> {
        Ok(self
            .products
            .iter()
            .filter(|p| p.category == category)
            .cloned()
            .collect())
    }

    fn fetch_categories(&self) -> Result<Vec<String>, CatalogError> {
        // Distinct category names in first-seen order.
        let mut names: Vec<String> = Vec::new();
        for product in &self.products {
            if !names.iter().any(|n| n == &product.category) {
                names.push(product.category.clone());
            }
        }
        Ok(names)
    }
}
