//! Catalog store: last-fetched catalog data plus its filtered view.

use storefront_core::{Category, Product, Signal, SubscriptionId};

use crate::category::{ALL_CATEGORY, ALL_CATEGORY_LABEL};

/// Holds the catalog as last fetched and computes the filtered view.
///
/// Filtering is deterministic, order-preserving and case-insensitive:
/// category exact-match and free-text substring search compose as logical
/// AND. Recomputation happens synchronously inside every `set_*` call, and
/// subscribers of the filtered view are notified before the call returns.
#[derive(Debug)]
pub struct CatalogStore {
    products: Vec<Product>,
    categories: Vec<Category>,
    active_category: String,
    search_term: String,
    filtered: Vec<Product>,
    filtered_signal: Signal<Vec<Product>>,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
            categories: Vec::new(),
            active_category: ALL_CATEGORY.to_string(),
            search_term: String::new(),
            filtered: Vec::new(),
            filtered_signal: Signal::new(),
        }
    }

    /// Replace the full product list.
    ///
    /// Any active category/search state is reapplied to the new list; with
    /// no filter active this resets the filtered view to the full list.
    pub fn set_products(&mut self, products: Vec<Product>) {
        self.products = products;
        self.refresh();
    }

    /// Replace the category list.
    ///
    /// The synthetic `all` category is prepended before the list is exposed;
    /// the caller's input is not mutated.
    pub fn set_categories(&mut self, categories: &[Category]) {
        let mut list = Vec::with_capacity(categories.len() + 1);
        list.push(Category::new(ALL_CATEGORY, ALL_CATEGORY_LABEL));
        list.extend_from_slice(categories);
        self.categories = list;
    }

    /// Set the active category; `"all"` means no category restriction.
    pub fn set_category_filter(&mut self, name: &str) {
        self.active_category = name.to_string();
        self.refresh();
    }

    /// Set the free-text filter; blank text (after trimming) means no
    /// text restriction.
    pub fn set_search_term(&mut self, text: &str) {
        self.search_term = text.to_string();
        self.refresh();
    }

    pub fn filtered_products(&self) -> &[Product] {
        &self.filtered
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Exposed category list, `all` first.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn active_category(&self) -> &str {
        &self.active_category
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Human label for a category name, resolved through the loaded
    /// category list; unknown names fall back to the raw name.
    pub fn display_name_for<'a>(&'a self, name: &'a str) -> &'a str {
        self.categories
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.display_name.as_str())
            .unwrap_or(name)
    }

    /// Observe the filtered view. The callback receives the recomputed list
    /// after every `set_products`/`set_category_filter`/`set_search_term`.
    pub fn subscribe_filtered(
        &mut self,
        callback: impl FnMut(&Vec<Product>) + 'static,
    ) -> SubscriptionId {
        self.filtered_signal.subscribe(callback)
    }

    pub fn unsubscribe_filtered(&mut self, id: SubscriptionId) -> bool {
        self.filtered_signal.unsubscribe(id)
    }

    fn refresh(&mut self) {
        // Recompute from scratch; the lists involved are screen-sized.
        let mut filtered: Vec<Product> = self.products.clone();

        if self.active_category != ALL_CATEGORY {
            filtered.retain(|p| p.category == self.active_category);
        }

        let term = self.search_term.trim().to_lowercase();
        if !term.is_empty() {
            filtered.retain(|p| {
                p.title.to_lowercase().contains(&term)
                    || p.description.to_lowercase().contains(&term)
                    || p.category.to_lowercase().contains(&term)
            });
        }

        tracing::debug!(
            category = %self.active_category,
            matched = filtered.len(),
            of = self.products.len(),
            "recomputed filtered catalog view"
        );

        self.filtered = filtered;
        self.filtered_signal.emit(&self.filtered);
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::cell::RefCell;
    use std::rc::Rc;
    use storefront_core::{ProductId, Rating};

    fn product(id: u64, title: &str, description: &str, category: &str) -> Product {
        Product {
            id: ProductId::new(id),
            title: title.to_string(),
            description: description.to_string(),
            price: Decimal::new(1999, 2),
            category: category.to_string(),
            image: format!("https://example.test/{id}.jpg"),
            rating: Rating {
                rate: Decimal::new(42, 1),
                count: 7,
            },
        }
    }

    /// Five products across two categories, per the shared test fixture.
    fn catalog() -> Vec<Product> {
        vec![
            product(1, "Smartphone X10", "A pocket phone", "electronics"),
            product(2, "Laptop Pro", "A portable computer", "electronics"),
            product(3, "Wireless Headphones", "Over-ear audio", "electronics"),
            product(4, "Gold Ring", "18k gold", "jewelery"),
            product(5, "Phone Charm", "Hangs off a phone", "jewelery"),
        ]
    }

    fn ids(products: &[Product]) -> Vec<u64> {
        products.iter().map(|p| p.id.0).collect()
    }

    #[test]
    fn new_store_has_empty_views() {
        let store = CatalogStore::new();
        assert!(store.products().is_empty());
        assert!(store.filtered_products().is_empty());
        assert_eq!(store.active_category(), "all");
    }

    #[test]
    fn set_products_without_filter_exposes_full_list_in_order() {
        let mut store = CatalogStore::new();
        store.set_products(catalog());
        assert_eq!(ids(store.filtered_products()), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn category_filter_retains_exact_matches_only() {
        let mut store = CatalogStore::new();
        store.set_products(catalog());
        store.set_category_filter("jewelery");
        assert_eq!(ids(store.filtered_products()), vec![4, 5]);
    }

    #[test]
    fn search_matches_title_description_and_category_case_insensitively() {
        let mut store = CatalogStore::new();
        store.set_products(catalog());

        // Title.
        store.set_search_term("LAPTOP");
        assert_eq!(ids(store.filtered_products()), vec![2]);

        // Description.
        store.set_search_term("over-ear");
        assert_eq!(ids(store.filtered_products()), vec![3]);

        // Category field.
        store.set_search_term("JEWELERY");
        assert_eq!(ids(store.filtered_products()), vec![4, 5]);
    }

    #[test]
    fn category_and_search_compose_as_and() {
        let mut store = CatalogStore::new();
        store.set_products(catalog());

        store.set_category_filter("electronics");
        store.set_search_term("phone");
        // "Phone Charm" matches the text but not the category.
        assert_eq!(ids(store.filtered_products()), vec![1, 3]);

        // Clearing the search restores the category-only set.
        store.set_search_term("");
        assert_eq!(ids(store.filtered_products()), vec![1, 2, 3]);

        // "all" restores the full catalog regardless of search term.
        store.set_search_term("phone");
        store.set_category_filter("all");
        assert_eq!(ids(store.filtered_products()), vec![1, 3, 5]);
        store.set_search_term("");
        assert_eq!(ids(store.filtered_products()), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn blank_search_term_is_no_restriction() {
        let mut store = CatalogStore::new();
        store.set_products(catalog());
        store.set_search_term("   ");
        assert_eq!(ids(store.filtered_products()), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn set_products_reapplies_active_filter() {
        let mut store = CatalogStore::new();
        store.set_products(catalog());
        store.set_category_filter("electronics");

        // A refreshed fetch with one extra jewelery product.
        let mut refetched = catalog();
        refetched.push(product(6, "Silver Necklace", "Sterling", "jewelery"));
        store.set_products(refetched);

        assert_eq!(ids(store.filtered_products()), vec![1, 2, 3]);
    }

    #[test]
    fn set_categories_prepends_all_without_mutating_input() {
        let mut store = CatalogStore::new();
        let fetched = vec![
            Category::new("electronics", "Electrónicos"),
            Category::new("jewelery", "Joyería"),
        ];

        store.set_categories(&fetched);

        assert_eq!(store.categories().len(), 3);
        assert_eq!(store.categories()[0], Category::new("all", "Todos"));
        assert_eq!(store.categories()[1].name, "electronics");
        // Caller's list untouched.
        assert_eq!(fetched.len(), 2);
    }

    #[test]
    fn display_name_resolves_through_loaded_categories() {
        let mut store = CatalogStore::new();
        store.set_categories(&[Category::new("electronics", "Electrónicos")]);

        assert_eq!(store.display_name_for("electronics"), "Electrónicos");
        assert_eq!(store.display_name_for("all"), "Todos");
        assert_eq!(store.display_name_for("garden"), "garden");
    }

    #[test]
    fn filtered_view_notifies_subscribers_on_every_set() {
        let mut store = CatalogStore::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let seen_cb = Rc::clone(&seen);
        let sub = store.subscribe_filtered(move |products| {
            seen_cb.borrow_mut().push(products.len());
        });

        store.set_products(catalog());
        store.set_category_filter("jewelery");
        store.set_search_term("ring");
        assert_eq!(*seen.borrow(), vec![5, 2, 1]);

        assert!(store.unsubscribe_filtered(sub));
        store.set_search_term("");
        assert_eq!(*seen.borrow(), vec![5, 2, 1]);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn arb_products() -> impl Strategy<Value = Vec<Product>> {
            proptest::collection::vec(
                (
                    1u64..100,
                    "[a-z ]{0,12}",
                    "[a-z ]{0,12}",
                    prop_oneof![Just("electronics"), Just("jewelery"), Just("books")],
                ),
                0..20,
            )
            .prop_map(|entries| {
                entries
                    .into_iter()
                    .map(|(id, title, description, category)| {
                        product(id, &title, &description, category)
                    })
                    .collect()
            })
        }

        proptest! {
            /// Property: the filtered view is an order-preserving subset of
            /// the product list, and every retained product satisfies both
            /// predicates.
            #[test]
            fn filtered_view_is_an_and_filtered_subsequence(
                products in arb_products(),
                category in prop_oneof![Just("all"), Just("electronics"), Just("books")],
                term in "[a-z ]{0,6}",
            ) {
                let mut store = CatalogStore::new();
                store.set_products(products.clone());
                store.set_category_filter(category);
                store.set_search_term(&term);

                let wanted = term.trim().to_lowercase();
                let expected: Vec<Product> = products
                    .into_iter()
                    .filter(|p| category == "all" || p.category == category)
                    .filter(|p| {
                        wanted.is_empty()
                            || p.title.to_lowercase().contains(&wanted)
                            || p.description.to_lowercase().contains(&wanted)
                            || p.category.to_lowercase().contains(&wanted)
                    })
                    .collect();

                prop_assert_eq!(store.filtered_products(), expected.as_slice());
            }

            /// Property: refiltering with the same inputs is idempotent.
            #[test]
            fn refresh_is_idempotent(products in arb_products(), term in "[a-z]{0,6}") {
                let mut store = CatalogStore::new();
                store.set_products(products);
                store.set_search_term(&term);
                let first: Vec<Product> = store.filtered_products().to_vec();
                store.set_search_term(&term);
                prop_assert_eq!(store.filtered_products(), first.as_slice());
            }
        }
    }
}
