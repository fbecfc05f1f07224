//! Product detail view: one product, its category, related products

use std::sync::Arc;

use shared::Route;
use shared::models::{Category, Product};
use tokio::sync::broadcast;

use super::{CommandOutcome, CommandPhase, StoreEvent, ViewStatus};
use crate::client::HttpClient;
use crate::derived::{self, NO_CATEGORY_FILTER};
use crate::repository::{CategoryRepository, ProductRepository, Repository};
use crate::ErrorKind;

const INVALID_ID: &str = "Invalid product id";
const NOT_FOUND: &str = "Product not found";
const LOAD_FAILED: &str = "Failed to load product details";
const DELETE_FAILED: &str = "Failed to delete product";

pub struct ProductDetailView<H> {
    products_repo: ProductRepository<H>,
    categories_repo: CategoryRepository<H>,
    product_id: Option<i64>,
    product: Option<Product>,
    category: Option<Category>,
    related: Vec<Product>,
    status: ViewStatus,
}

impl<H: HttpClient> ProductDetailView<H> {
    pub fn new(client: Arc<H>) -> Self {
        Self {
            products_repo: ProductRepository::new(Arc::clone(&client)),
            categories_repo: CategoryRepository::new(client),
            product_id: None,
            product: None,
            category: None,
            related: Vec::new(),
            status: ViewStatus::new(),
        }
    }

    pub fn product_id(&self) -> Option<i64> {
        self.product_id
    }

    pub fn product(&self) -> Option<&Product> {
        self.product.as_ref()
    }

    pub fn category(&self) -> Option<&Category> {
        self.category.as_ref()
    }

    /// Up to four other products from the same category
    pub fn related_products(&self) -> &[Product] {
        &self.related
    }

    pub fn status(&self) -> &ViewStatus {
        &self.status
    }

    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.status.subscribe()
    }

    pub fn category_name(&self) -> &str {
        let category_id = self
            .product
            .as_ref()
            .map_or(NO_CATEGORY_FILTER, |p| p.category_id);
        derived::resolve_category_name(category_id, self.category.as_slice())
    }

    pub fn format_price(&self, price: f64) -> String {
        derived::format_price(price)
    }

    // ========== Loading ==========

    /// Load from the raw `:id` route segment
    pub async fn load_from_param(&mut self, param: &str) -> bool {
        match param.trim().parse::<i64>() {
            Ok(id) => self.load(id).await,
            Err(_) => {
                tracing::warn!(param, "Rejected product id from route");
                self.status.set_error(INVALID_ID);
                false
            }
        }
    }

    /// Load a product, then its category and related products
    ///
    /// Related products are best effort: a failure there is logged and
    /// leaves the list empty.
    pub async fn load(&mut self, id: i64) -> bool {
        let _loading = self.status.enter_loading();
        self.status.clear_messages();

        if self.product_id != Some(id) {
            self.clear();
        }
        self.product_id = Some(id);

        let product = match self.products_repo.find_by_id(id).await {
            Ok(product) => product,
            Err(e) => {
                let message = if e.kind() == ErrorKind::NotFound {
                    NOT_FOUND
                } else {
                    LOAD_FAILED
                };
                self.status.set_error(message);
                return false;
            }
        };
        let category_id = product.category_id;
        self.product = Some(product);
        self.status.emit(StoreEvent::ProductsReplaced);

        if category_id == NO_CATEGORY_FILTER {
            return true;
        }

        match self.categories_repo.find_by_id(category_id).await {
            Ok(category) => {
                self.category = Some(category);
                self.status.emit(StoreEvent::CategoriesReplaced);
            }
            Err(_) => {
                self.status.set_error(LOAD_FAILED);
                return false;
            }
        }

        self.load_related(category_id, id).await;
        true
    }

    async fn load_related(&mut self, category_id: i64, product_id: i64) {
        match self.products_repo.find_all().await {
            Ok(products) => {
                self.related = derived::related_products(&products, category_id, product_id);
                self.status.emit(StoreEvent::ProductsReplaced);
            }
            Err(e) => {
                tracing::warn!(error = %e, "Related products unavailable");
            }
        }
    }

    fn clear(&mut self) {
        self.product = None;
        self.category = None;
        self.related.clear();
    }

    // ========== Commands ==========

    /// Delete the displayed product and leave the page
    pub async fn delete(&mut self, confirmed: bool) -> CommandOutcome {
        let Some(id) = self.product.as_ref().map(|p| p.id) else {
            return CommandOutcome::Cancelled;
        };
        if !confirmed {
            tracing::debug!(product_id = id, "Delete not confirmed");
            return CommandOutcome::Cancelled;
        }
        self.status.clear_messages();

        let _loading = self.status.enter_loading();
        self.status.set_phase(CommandPhase::Submitting);
        if self.products_repo.delete(id).await.is_err() {
            return self.status.fail(DELETE_FAILED);
        }

        // The entity no longer exists; nothing here to refresh
        self.clear();
        self.product_id = None;
        self.status.emit(StoreEvent::ProductsReplaced);
        self.status.set_notice("Product deleted");
        self.status.set_phase(CommandPhase::Idle);
        tracing::info!(product_id = id, "Product deleted");
        CommandOutcome::NavigateTo(Route::Products)
    }

    /// Where to go to edit the displayed product
    ///
    /// The product list view opens the editor with `ProductView::begin_edit`.
    pub fn edit_route(&self) -> Option<(Route, i64)> {
        self.product.as_ref().map(|p| (Route::Products, p.id))
    }

    /// Navigation target for another (e.g. related) product
    pub fn view_product(&self, id: i64) -> Route {
        Route::product_detail(id)
    }
}
