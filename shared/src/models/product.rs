//! Product Model

use serde::{Deserialize, Serialize};

/// Product entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub product_name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    /// Category reference (0 = unset)
    pub category_id: i64,
    /// Denormalized display name, never authoritative
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,
}

/// Create product payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCreate {
    pub product_name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    pub category_id: i64,
}

impl ProductCreate {
    pub fn new(
        product_name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        category_id: i64,
    ) -> Self {
        Self {
            product_name: product_name.into(),
            description: description.into(),
            price,
            category_id,
        }
    }
}

/// Update product payload (full replacement, carries the id)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductUpdate {
    pub id: i64,
    pub product_name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    pub category_id: i64,
}

impl From<&Product> for ProductUpdate {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            product_name: product.product_name.clone(),
            description: product.description.clone(),
            price: product.price,
            category_id: product.category_id,
        }
    }
}
