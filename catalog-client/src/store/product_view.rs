//! Product list view: products + categories, filtering, commands

use std::sync::Arc;

use shared::Route;
use shared::models::{Category, Product, ProductCreate, ProductUpdate};
use tokio::sync::broadcast;

use super::{CommandOutcome, CommandPhase, StoreEvent, ViewStatus};
use crate::client::HttpClient;
use crate::derived::{self, NO_CATEGORY_FILTER};
use crate::repository::{CategoryRepository, EntityKind, ProductRepository, Repository};
use crate::{ClientResult, validation};

const LOAD_FAILED: &str = "Failed to load catalog data";
const PRODUCTS_LOAD_FAILED: &str = "Failed to load products";
const CATEGORIES_LOAD_FAILED: &str = "Failed to load categories";
const ADD_FAILED: &str = "Failed to add product";
const UPDATE_FAILED: &str = "Failed to update product";
const DELETE_FAILED: &str = "Failed to delete product";

/// Product management view
///
/// Holds both collections (categories feed the filter and the name
/// lookup) and keeps `filtered` equal to
/// `apply_filters(products, category_filter, search_term)` at all times.
pub struct ProductView<H> {
    products_repo: ProductRepository<H>,
    categories_repo: CategoryRepository<H>,
    products: Vec<Product>,
    categories: Vec<Category>,
    filtered: Vec<Product>,
    category_filter: i64,
    search_term: String,
    selected: Option<Product>,
    draft: ProductCreate,
    status: ViewStatus,
}

impl<H: HttpClient> ProductView<H> {
    pub fn new(client: Arc<H>) -> Self {
        Self {
            products_repo: ProductRepository::new(Arc::clone(&client)),
            categories_repo: CategoryRepository::new(client),
            products: Vec::new(),
            categories: Vec::new(),
            filtered: Vec::new(),
            category_filter: NO_CATEGORY_FILTER,
            search_term: String::new(),
            selected: None,
            draft: ProductCreate::default(),
            status: ViewStatus::new(),
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Products after category filter and search
    pub fn filtered_products(&self) -> &[Product] {
        &self.filtered
    }

    pub fn category_filter(&self) -> i64 {
        self.category_filter
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn selected(&self) -> Option<&Product> {
        self.selected.as_ref()
    }

    pub fn draft(&self) -> &ProductCreate {
        &self.draft
    }

    pub fn status(&self) -> &ViewStatus {
        &self.status
    }

    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.status.subscribe()
    }

    // ========== Derived ==========

    /// Display name for a category id, never the denormalized product field
    pub fn category_name(&self, category_id: i64) -> &str {
        derived::resolve_category_name(category_id, &self.categories)
    }

    pub fn format_price(&self, price: f64) -> String {
        derived::format_price(price)
    }

    fn recompute(&mut self) {
        self.filtered = derived::apply_filters(&self.products, self.category_filter, &self.search_term);
    }

    fn replace_products(&mut self, products: Vec<Product>) {
        self.products = products;
        self.recompute();
        self.status.emit(StoreEvent::ProductsReplaced);
    }

    fn replace_categories(&mut self, categories: Vec<Category>) {
        self.categories = categories;
        self.status.emit(StoreEvent::CategoriesReplaced);
    }

    // ========== Loading ==========

    /// Initial load when the view opens
    pub async fn init(&mut self) {
        self.load_all().await;
    }

    /// Fetch categories and products concurrently
    ///
    /// Commits only when both succeed; otherwise neither snapshot changes.
    pub async fn load_all(&mut self) -> bool {
        let _loading = self.status.enter_loading();
        self.status.clear_messages();

        let fetched = tokio::try_join!(
            self.categories_repo.find_all(),
            self.products_repo.find_all()
        );
        match fetched {
            Ok((categories, products)) => {
                self.replace_categories(categories);
                self.replace_products(products);
                true
            }
            Err(e) => {
                tracing::error!(error = %e, "Initial catalog load failed");
                self.status.set_error(LOAD_FAILED);
                false
            }
        }
    }

    pub async fn load_products(&mut self) -> bool {
        let _loading = self.status.enter_loading();
        self.status.clear_messages();
        if self.refresh_after_write(EntityKind::Product).await.is_err() {
            self.status.set_error(PRODUCTS_LOAD_FAILED);
            return false;
        }
        true
    }

    pub async fn load_categories(&mut self) -> bool {
        let _loading = self.status.enter_loading();
        self.status.clear_messages();
        if self.refresh_after_write(EntityKind::Category).await.is_err() {
            self.status.set_error(CATEGORIES_LOAD_FAILED);
            return false;
        }
        true
    }

    /// Replace the affected snapshot in full with the server's list
    pub async fn refresh_after_write(&mut self, kind: EntityKind) -> ClientResult<()> {
        match kind {
            EntityKind::Product => {
                let products = self.products_repo.find_all().await?;
                self.replace_products(products);
            }
            EntityKind::Category => {
                let categories = self.categories_repo.find_all().await?;
                self.replace_categories(categories);
            }
        }
        Ok(())
    }

    // ========== Filters ==========

    pub fn set_category_filter(&mut self, category_id: i64) {
        self.category_filter = category_id;
        self.recompute();
        self.status.emit(StoreEvent::FilterChanged);
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.recompute();
        self.status.emit(StoreEvent::SearchChanged);
    }

    pub fn clear_filters(&mut self) {
        self.set_category_filter(NO_CATEGORY_FILTER);
        self.set_search_term("");
    }

    // ========== Draft ==========

    pub fn edit_draft(&mut self, edit: impl FnOnce(&mut ProductCreate)) {
        edit(&mut self.draft);
        self.status.emit(StoreEvent::DraftChanged);
    }

    // ========== Commands ==========

    /// Create a product from the draft
    pub async fn add_product(&mut self) -> CommandOutcome {
        self.status.clear_messages();
        self.status.set_phase(CommandPhase::Validating);
        if let Err(e) = validation::validate_product_draft(&self.draft) {
            return self.status.reject(&e);
        }

        let _loading = self.status.enter_loading();
        self.status.set_phase(CommandPhase::Submitting);
        if self.products_repo.create(&self.draft).await.is_err() {
            return self.status.fail(ADD_FAILED);
        }

        self.draft = ProductCreate::default();
        self.status.emit(StoreEvent::DraftChanged);
        self.finish_write("Product added").await
    }

    /// Start editing a copy of the product with `id`
    pub fn begin_edit(&mut self, id: i64) -> bool {
        let Some(product) = self.products.iter().find(|p| p.id == id) else {
            tracing::warn!(product_id = id, "Cannot edit unknown product");
            return false;
        };
        self.selected = Some(product.clone());
        self.status.emit(StoreEvent::SelectionChanged);
        true
    }

    /// Mutate the selection only; the list is untouched
    pub fn edit_selection(&mut self, edit: impl FnOnce(&mut Product)) {
        if let Some(selected) = self.selected.as_mut() {
            edit(selected);
            self.status.emit(StoreEvent::SelectionChanged);
        }
    }

    /// Submit the selection as a full update
    ///
    /// On failure the selection is kept so the user can retry.
    pub async fn update_product(&mut self) -> CommandOutcome {
        let Some(selected) = self.selected.as_ref() else {
            return CommandOutcome::Cancelled;
        };
        self.status.clear_messages();
        self.status.set_phase(CommandPhase::Validating);
        if let Err(e) = validation::validate_product(
            &selected.product_name,
            &selected.description,
            selected.price,
            selected.category_id,
        ) {
            return self.status.reject(&e);
        }
        let payload = ProductUpdate::from(selected);

        let _loading = self.status.enter_loading();
        self.status.set_phase(CommandPhase::Submitting);
        if self.products_repo.update(&payload).await.is_err() {
            return self.status.fail(UPDATE_FAILED);
        }

        self.selected = None;
        self.status.emit(StoreEvent::SelectionChanged);
        self.finish_write("Product updated").await
    }

    pub fn cancel_edit(&mut self) {
        if self.selected.take().is_some() {
            self.status.emit(StoreEvent::SelectionChanged);
        }
    }

    /// Delete a product; without confirmation nothing is sent
    pub async fn delete_product(&mut self, id: i64, confirmed: bool) -> CommandOutcome {
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

        if self.selected.as_ref().is_some_and(|p| p.id == id) {
            self.cancel_edit();
        }
        self.finish_write("Product deleted").await
    }

    /// Navigation target for a product's detail page
    pub fn detail_route(&self, id: i64) -> Route {
        Route::product_detail(id)
    }

    async fn finish_write(&mut self, notice: &str) -> CommandOutcome {
        self.status.set_phase(CommandPhase::Refreshing);
        if self.refresh_after_write(EntityKind::Product).await.is_err() {
            self.status.set_error(PRODUCTS_LOAD_FAILED);
        }
        self.status.set_notice(notice);
        self.status.set_phase(CommandPhase::Idle);
        tracing::info!("{}", notice);
        CommandOutcome::Completed
    }
}
