//! Product Repository

use std::sync::Arc;

use shared::models::{Product, ProductCreate, ProductUpdate};

use super::Repository;
use crate::client::HttpClient;
use crate::{ClientError, ClientResult};

const BASE_PATH: &str = "/api/Product";

pub struct ProductRepository<H> {
    client: Arc<H>,
}

impl<H> Clone for ProductRepository<H> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
        }
    }
}

impl<H: HttpClient> ProductRepository<H> {
    pub fn new(client: Arc<H>) -> Self {
        Self { client }
    }

    /// Products in one category, as filtered by the server
    pub async fn find_by_category(&self, category_id: i64) -> ClientResult<Vec<Product>> {
        let products: Vec<Product> = self
            .client
            .get(&format!("{}/category/{}", BASE_PATH, category_id))
            .await
            .inspect_err(|e| tracing::error!(category_id, error = %e, "Failed to load products by category"))?;
        tracing::debug!(category_id, count = products.len(), "Loaded products by category");
        Ok(products)
    }
}

impl<H: HttpClient> Repository<Product, ProductCreate, ProductUpdate> for ProductRepository<H> {
    async fn find_all(&self) -> ClientResult<Vec<Product>> {
        let products: Vec<Product> = self
            .client
            .get(BASE_PATH)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to load products"))?;
        tracing::debug!(count = products.len(), "Loaded products");
        Ok(products)
    }

    async fn find_by_id(&self, id: i64) -> ClientResult<Product> {
        let product: Option<Product> = self
            .client
            .get(&format!("{}/{}", BASE_PATH, id))
            .await
            .inspect_err(|e| tracing::error!(product_id = id, error = %e, "Failed to load product"))?;
        product.ok_or_else(|| ClientError::NotFound(format!("Product {} not found", id)))
    }

    async fn create(&self, data: &ProductCreate) -> ClientResult<String> {
        let message = self
            .client
            .post(BASE_PATH, data)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to create product"))?;
        tracing::debug!(%message, "Product created");
        Ok(message)
    }

    async fn update(&self, data: &ProductUpdate) -> ClientResult<String> {
        let message = self
            .client
            .put(BASE_PATH, data)
            .await
            .inspect_err(|e| tracing::error!(product_id = data.id, error = %e, "Failed to update product"))?;
        tracing::debug!(product_id = data.id, %message, "Product updated");
        Ok(message)
    }

    async fn delete(&self, id: i64) -> ClientResult<String> {
        let message = self
            .client
            .delete_with_body(BASE_PATH, &id)
            .await
            .inspect_err(|e| tracing::error!(product_id = id, error = %e, "Failed to delete product"))?;
        tracing::debug!(product_id = id, %message, "Product deleted");
        Ok(message)
    }
}
