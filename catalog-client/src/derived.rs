//! Derived view engine
//!
//! Pure functions from store snapshots (plus filter/selection state) to the
//! values a front-end renders. Nothing here holds state; views call these
//! again whenever a collection, the filter, the search term, or the
//! selection changes.

use shared::models::{Category, Product};

/// Category filter value meaning "all categories"
pub const NO_CATEGORY_FILTER: i64 = 0;

/// Label shown when a category id does not resolve
pub const UNKNOWN_CATEGORY: &str = "Unknown";

/// Maximum number of related products on a detail view
pub const RELATED_PRODUCTS_LIMIT: usize = 4;

const CURRENCY_SYMBOL: &str = "₺";
const THOUSANDS_SEPARATOR: char = '.';
const DECIMAL_SEPARATOR: char = ',';

/// Products matching the category filter AND the search term
///
/// - category: equality on `category_id`, skipped for [`NO_CATEGORY_FILTER`]
/// - search: trimmed, case-insensitive substring of name or description,
///   skipped when blank
pub fn apply_filters(products: &[Product], category_filter: i64, search_term: &str) -> Vec<Product> {
    let search = search_term.trim().to_lowercase();

    products
        .iter()
        .filter(|p| category_filter == NO_CATEGORY_FILTER || p.category_id == category_filter)
        .filter(|p| {
            search.is_empty()
                || p.product_name.to_lowercase().contains(&search)
                || p.description.to_lowercase().contains(&search)
        })
        .cloned()
        .collect()
}

/// Category name for an id, or [`UNKNOWN_CATEGORY`]
pub fn resolve_category_name(category_id: i64, categories: &[Category]) -> &str {
    categories
        .iter()
        .find(|c| c.id == category_id)
        .map(|c| c.category_name.as_str())
        .unwrap_or(UNKNOWN_CATEGORY)
}

/// First [`RELATED_PRODUCTS_LIMIT`] products in `category_id`, excluding `exclude_id`
pub fn related_products(products: &[Product], category_id: i64, exclude_id: i64) -> Vec<Product> {
    products
        .iter()
        .filter(|p| p.category_id == category_id && p.id != exclude_id)
        .take(RELATED_PRODUCTS_LIMIT)
        .cloned()
        .collect()
}

/// Format an amount as Turkish lira (tr-TR), e.g. `1234.5` -> `₺1.234,50`
pub fn format_price(amount: f64) -> String {
    // f64::round rounds half away from zero
    let cents = (amount * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();

    format!(
        "{}{}{}{}{:02}",
        sign,
        CURRENCY_SYMBOL,
        group_thousands(cents / 100),
        DECIMAL_SEPARATOR,
        cents % 100
    )
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(THOUSANDS_SEPARATOR);
        }
        grouped.push(ch);
    }
    grouped
}
