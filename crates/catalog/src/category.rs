//! Category naming.

use storefront_core::Category;

/// Name of the synthetic category meaning "no category restriction".
pub const ALL_CATEGORY: &str = "all";

/// Display label of the synthetic category (the application ships in
/// Spanish, so the labels below follow suit).
pub const ALL_CATEGORY_LABEL: &str = "Todos";

/// Human label for a raw category identifier from the catalog source.
///
/// Unmapped identifiers pass through unchanged.
pub fn display_name(category: &str) -> &str {
    match category {
        "electronics" => "Electrónicos",
        "jewelery" => "Joyería",
        "men's clothing" => "Ropa Hombre",
        "women's clothing" => "Ropa Mujer",
        other => other,
    }
}

/// Adapt raw category identifiers from the catalog source into `Category`
/// values with resolved display names.
pub fn adapt_categories(raw: &[String]) -> Vec<Category> {
    raw.iter()
        .map(|name| Category::new(name.clone(), display_name(name)))
        .collect()
}
