//! # Catalog Filtering
//!
//! Keyword filtering over the in-memory product list.
//!
//! The keyword is always treated as a case-insensitive literal
//! substring of the product name, never compiled as a pattern, so the
//! filter has no failure mode: whatever the cashier types either
//! matches or it doesn't.

use crate::types::Product;

/// Filters products by a keyword.
///
/// An empty (or all-whitespace) keyword returns the full catalog
/// unfiltered, in the original order.
///
/// ## Example
/// ```rust
/// use tally_core::catalog::filter_products;
/// use tally_core::types::Product;
///
/// let products = vec![Product {
///     id: "p1".into(),
///     name: "Es Teh Manis".into(),
///     price_minor: 5_000,
///     image: String::new(),
///     option: None,
/// }];
///
/// assert_eq!(filter_products(&products, "teh").len(), 1);
/// assert_eq!(filter_products(&products, "kopi").len(), 0);
/// assert_eq!(filter_products(&products, "").len(), 1);
/// ```
pub fn filter_products<'a>(products: &'a [Product], keyword: &str) -> Vec<&'a Product> {
    let keyword = keyword.trim().to_lowercase();
    if keyword.is_empty() {
        return products.iter().collect();
    }

    products
        .iter()
        .filter(|p| p.name.to_lowercase().contains(&keyword))
        .collect()
}
