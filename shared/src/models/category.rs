//! Category Model

use serde::{Deserialize, Serialize};

/// Category entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Server-assigned, immutable once created
    pub id: i64,
    pub category_name: String,
    #[serde(default)]
    pub description: String,
}

/// Create category payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCreate {
    pub category_name: String,
    #[serde(default)]
    pub description: String,
}

impl CategoryCreate {
    pub fn new(category_name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            category_name: category_name.into(),
            description: description.into(),
        }
    }
}

/// Update category payload (full replacement, carries the id)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryUpdate {
    pub id: i64,
    pub category_name: String,
    #[serde(default)]
    pub description: String,
}

impl From<&Category> for CategoryUpdate {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id,
            category_name: category.category_name.clone(),
            description: category.description.clone(),
        }
    }
}
