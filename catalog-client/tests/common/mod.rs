// catalog-client/tests/common/mod.rs
// In-memory fake catalog API served through OneshotHttpClient

#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{delete, get};
use axum::{Json, Router};
use catalog_client::{
    Category, CategoryCreate, CategoryUpdate, OneshotHttpClient, Product, ProductCreate,
    ProductUpdate,
};

type Shared = Arc<Mutex<FakeCatalog>>;
type ApiResult<T> = Result<T, (StatusCode, String)>;

/// Server-side state of the fake catalog
#[derive(Debug, Default)]
pub struct FakeCatalog {
    pub categories: Vec<Category>,
    pub products: Vec<Product>,
    /// Soft-deleted category ids
    pub tombstones: HashSet<i64>,
    /// Every request received, as "METHOD /path"
    pub requests: Vec<String>,
    /// Requests ("METHOD /path") that answer 500
    pub failing: HashSet<String>,
    next_id: i64,
}

impl FakeCatalog {
    fn record(&mut self, key: String) -> ApiResult<()> {
        let failing = self.failing.contains(&key);
        self.requests.push(key);
        if failing {
            return Err((StatusCode::INTERNAL_SERVER_ERROR, "Injected failure".into()));
        }
        Ok(())
    }

    fn assign_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn live_categories(&self) -> Vec<Category> {
        self.categories
            .iter()
            .filter(|c| !self.tombstones.contains(&c.id))
            .cloned()
            .collect()
    }
}

pub struct TestServer {
    pub state: Shared,
    pub client: Arc<OneshotHttpClient>,
}

impl TestServer {
    pub fn empty() -> Self {
        init_tracing();
        let state: Shared = Arc::new(Mutex::new(FakeCatalog {
            next_id: 100,
            ..Default::default()
        }));
        let client = Arc::new(OneshotHttpClient::new(router(state.clone())));
        Self { state, client }
    }

    /// Two categories and seven products
    pub fn seeded() -> Self {
        let server = Self::empty();
        server.with_state(|s| {
            s.categories = vec![
                category(3, "Sweets", "Chocolate and candy"),
                category(4, "Dairy", "Milk products"),
            ];
            s.products = vec![
                product(1, 3, "Chocolate Bar", "Dark cocoa", 25.0),
                product(2, 3, "Milk", "Whole milk", 12.5),
                product(3, 4, "Chocolate Milk", "", 18.0),
                product(5, 3, "Cookies", "Butter", 30.0),
                product(6, 3, "Candy", "", 5.0),
                product(7, 3, "Gum", "", 2.5),
                product(8, 3, "Toffee", "", 7.0),
            ];
        });
        server
    }

    pub fn with_state<R>(&self, f: impl FnOnce(&mut FakeCatalog) -> R) -> R {
        let mut guard = self.state.lock().unwrap();
        f(&mut guard)
    }

    /// Make `"METHOD /path"` answer 500 until [`TestServer::recover`]
    pub fn fail(&self, request: &str) {
        self.with_state(|s| s.failing.insert(request.to_string()));
    }

    pub fn recover(&self, request: &str) {
        self.with_state(|s| s.failing.remove(request));
    }

    pub fn requests(&self) -> Vec<String> {
        self.with_state(|s| s.requests.clone())
    }

    pub fn clear_requests(&self) {
        self.with_state(|s| s.requests.clear());
    }

    /// Number of POST/PUT/DELETE requests received
    pub fn write_count(&self) -> usize {
        self.requests()
            .iter()
            .filter(|r| !r.starts_with("GET "))
            .count()
    }
}

pub fn category(id: i64, name: &str, description: &str) -> Category {
    Category {
        id,
        category_name: name.to_string(),
        description: description.to_string(),
    }
}

pub fn product(id: i64, category_id: i64, name: &str, description: &str, price: f64) -> Product {
    Product {
        id,
        product_name: name.to_string(),
        description: description.to_string(),
        price,
        category_id,
        category_name: None,
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("catalog_client=debug")
        .with_test_writer()
        .try_init();
}

fn router(state: Shared) -> Router {
    Router::new()
        .route(
            "/api/Category",
            get(list_categories).post(create_category).put(update_category),
        )
        .route("/api/Category/softDelete", delete(soft_delete_category))
        .route("/api/Category/{id}", get(get_category))
        .route(
            "/api/Product",
            get(list_products)
                .post(create_product)
                .put(update_product)
                .delete(delete_product),
        )
        .route("/api/Product/category/{id}", get(products_by_category))
        .route("/api/Product/{id}", get(get_product))
        .with_state(state)
}

fn bad_request(message: &str) -> (StatusCode, String) {
    (StatusCode::BAD_REQUEST, message.to_string())
}

fn not_found(message: &str) -> (StatusCode, String) {
    (StatusCode::NOT_FOUND, message.to_string())
}

// ========== Category handlers ==========

async fn list_categories(State(state): State<Shared>) -> ApiResult<Json<Vec<Category>>> {
    let mut s = state.lock().unwrap();
    s.record("GET /api/Category".into())?;
    Ok(Json(s.live_categories()))
}

async fn get_category(
    State(state): State<Shared>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Category>> {
    let mut s = state.lock().unwrap();
    s.record(format!("GET /api/Category/{}", id))?;
    s.live_categories()
        .into_iter()
        .find(|c| c.id == id)
        .map(Json)
        .ok_or_else(|| not_found("Category not found"))
}

async fn create_category(
    State(state): State<Shared>,
    Json(data): Json<CategoryCreate>,
) -> ApiResult<String> {
    let mut s = state.lock().unwrap();
    s.record("POST /api/Category".into())?;
    if data.category_name.trim().is_empty() {
        return Err(bad_request("CategoryName is required"));
    }
    let id = s.assign_id();
    s.categories
        .push(category(id, &data.category_name, &data.description));
    Ok("Category added successfully".into())
}

async fn update_category(
    State(state): State<Shared>,
    Json(data): Json<CategoryUpdate>,
) -> ApiResult<String> {
    let mut s = state.lock().unwrap();
    s.record("PUT /api/Category".into())?;
    let tombstoned = s.tombstones.contains(&data.id);
    let Some(existing) = s
        .categories
        .iter_mut()
        .find(|c| c.id == data.id && !tombstoned)
    else {
        return Err(bad_request("Unknown category"));
    };
    existing.category_name = data.category_name;
    existing.description = data.description;
    Ok("Category updated successfully".into())
}

async fn soft_delete_category(
    State(state): State<Shared>,
    Json(id): Json<i64>,
) -> ApiResult<String> {
    let mut s = state.lock().unwrap();
    s.record("DELETE /api/Category/softDelete".into())?;
    s.tombstones.insert(id);
    Ok("Category deleted successfully".into())
}

// ========== Product handlers ==========

async fn list_products(State(state): State<Shared>) -> ApiResult<Json<Vec<Product>>> {
    let mut s = state.lock().unwrap();
    s.record("GET /api/Product".into())?;
    Ok(Json(s.products.clone()))
}

async fn get_product(State(state): State<Shared>, Path(id): Path<i64>) -> ApiResult<Json<Product>> {
    let mut s = state.lock().unwrap();
    s.record(format!("GET /api/Product/{}", id))?;
    s.products
        .iter()
        .find(|p| p.id == id)
        .cloned()
        .map(Json)
        .ok_or_else(|| not_found("Product not found"))
}

async fn products_by_category(
    State(state): State<Shared>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Vec<Product>>> {
    let mut s = state.lock().unwrap();
    s.record(format!("GET /api/Product/category/{}", id))?;
    Ok(Json(
        s.products
            .iter()
            .filter(|p| p.category_id == id)
            .cloned()
            .collect(),
    ))
}

async fn create_product(
    State(state): State<Shared>,
    Json(data): Json<ProductCreate>,
) -> ApiResult<String> {
    let mut s = state.lock().unwrap();
    s.record("POST /api/Product".into())?;
    if data.product_name.trim().is_empty() {
        return Err(bad_request("ProductName is required"));
    }
    let id = s.assign_id();
    s.products.push(product(
        id,
        data.category_id,
        &data.product_name,
        &data.description,
        data.price,
    ));
    Ok("Product added successfully".into())
}

async fn update_product(
    State(state): State<Shared>,
    Json(data): Json<ProductUpdate>,
) -> ApiResult<String> {
    let mut s = state.lock().unwrap();
    s.record("PUT /api/Product".into())?;
    let Some(existing) = s.products.iter_mut().find(|p| p.id == data.id) else {
        return Err(bad_request("Unknown product"));
    };
    existing.product_name = data.product_name;
    existing.description = data.description;
    existing.price = data.price;
    existing.category_id = data.category_id;
    Ok("Product updated successfully".into())
}

async fn delete_product(State(state): State<Shared>, Json(id): Json<i64>) -> ApiResult<String> {
    let mut s = state.lock().unwrap();
    s.record("DELETE /api/Product".into())?;
    s.products.retain(|p| p.id != id);
    Ok("Product deleted successfully".into())
}
