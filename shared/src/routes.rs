//! Client route table
//!
//! | Path | Route |
//! |------|-------|
//! | `/` | [`Route::Home`] |
//! | `/categories` | [`Route::Categories`] |
//! | `/products` | [`Route::Products`] |
//! | `/products/:id` | [`Route::ProductDetail`] |
//!
//! Every other path redirects to [`Route::Home`].

use std::fmt;

/// A navigable client location
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Category/product overview
    Home,
    Categories,
    Products,
    /// Product detail. Holds the raw `:id` segment; the detail view parses it.
    ProductDetail(String),
}

impl Route {
    /// Detail route for a known product id
    pub fn product_detail(id: i64) -> Self {
        Self::ProductDetail(id.to_string())
    }

    /// Resolve a path, redirecting unmatched paths to [`Route::Home`]
    pub fn parse(path: &str) -> Self {
        let path = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Self::Home,
            ["categories"] => Self::Categories,
            ["products"] => Self::Products,
            ["products", id] => Self::ProductDetail((*id).to_string()),
            _ => {
                tracing::debug!(path, "Unmatched route, redirecting to root");
                Self::Home
            }
        }
    }

    /// Canonical path for this route
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Categories => "/categories".to_string(),
            Self::Products => "/products".to_string(),
            Self::ProductDetail(id) => format!("/products/{}", id),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
