//! Category Repository

use std::sync::Arc;

use shared::models::{Category, CategoryCreate, CategoryUpdate};

use super::Repository;
use crate::client::HttpClient;
use crate::{ClientError, ClientResult};

const BASE_PATH: &str = "/api/Category";
const SOFT_DELETE_PATH: &str = "/api/Category/softDelete";

pub struct CategoryRepository<H> {
    client: Arc<H>,
}

impl<H> Clone for CategoryRepository<H> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
        }
    }
}

impl<H: HttpClient> CategoryRepository<H> {
    pub fn new(client: Arc<H>) -> Self {
        Self { client }
    }
}

impl<H: HttpClient> Repository<Category, CategoryCreate, CategoryUpdate> for CategoryRepository<H> {
    async fn find_all(&self) -> ClientResult<Vec<Category>> {
        let categories: Vec<Category> = self
            .client
            .get(BASE_PATH)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to load categories"))?;
        tracing::debug!(count = categories.len(), "Loaded categories");
        Ok(categories)
    }

    async fn find_by_id(&self, id: i64) -> ClientResult<Category> {
        let category: Option<Category> = self
            .client
            .get(&format!("{}/{}", BASE_PATH, id))
            .await
            .inspect_err(|e| tracing::error!(category_id = id, error = %e, "Failed to load category"))?;
        category.ok_or_else(|| ClientError::NotFound(format!("Category {} not found", id)))
    }

    async fn create(&self, data: &CategoryCreate) -> ClientResult<String> {
        let message = self
            .client
            .post(BASE_PATH, data)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to create category"))?;
        tracing::debug!(%message, "Category created");
        Ok(message)
    }

    async fn update(&self, data: &CategoryUpdate) -> ClientResult<String> {
        let message = self
            .client
            .put(BASE_PATH, data)
            .await
            .inspect_err(|e| tracing::error!(category_id = data.id, error = %e, "Failed to update category"))?;
        tracing::debug!(category_id = data.id, %message, "Category updated");
        Ok(message)
    }

    /// Soft delete; the server tombstones the row, the client treats it as gone
    async fn delete(&self, id: i64) -> ClientResult<String> {
        let message = self
            .client
            .delete_with_body(SOFT_DELETE_PATH, &id)
            .await
            .inspect_err(|e| tracing::error!(category_id = id, error = %e, "Failed to delete category"))?;
        tracing::debug!(category_id = id, %message, "Category deleted");
        Ok(message)
    }
}
