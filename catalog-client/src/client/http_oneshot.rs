// catalog-client/src/client/http_oneshot.rs
// Oneshot HTTP client - in-memory calls into an axum Router
//
// Requires the "in-process" feature

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use http::Request;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tower::ServiceExt;

use crate::{ClientError, ClientResult};

use super::http::{HttpClient, decode_json, status_error};

/// Oneshot HTTP client (in-memory calls)
///
/// Drives a `Router` through tower's `oneshot`, so a catalog API served in
/// the same process can be used without a socket.
///
/// # Example
///
/// ```ignore
/// use axum::Router;
/// use catalog_client::OneshotHttpClient;
///
/// let router: Router = build_catalog_api().with_state(state);
/// let client = OneshotHttpClient::new(router);
///
/// let categories: Vec<Category> = client.get("/api/Category").await?;
/// ```
#[derive(Debug, Clone)]
pub struct OneshotHttpClient {
    router: Router,
}

impl OneshotHttpClient {
    /// `router` must already have its state attached
    pub fn new(router: Router) -> Self {
        Self { router }
    }

    fn build_request(&self, method: http::Method, path: &str) -> ClientResult<Request<Body>> {
        Request::builder()
            .method(method)
            .uri(path)
            .body(Body::empty())
            .map_err(|e| ClientError::Internal(format!("Failed to build request: {}", e)))
    }

    fn build_request_with_body<B: Serialize>(
        &self,
        method: http::Method,
        path: &str,
        body: &B,
    ) -> ClientResult<Request<Body>> {
        let body_bytes = serde_json::to_vec(body)?;

        Request::builder()
            .method(method)
            .uri(path)
            .header(http::header::CONTENT_TYPE, "application/json")
            .body(Body::from(body_bytes))
            .map_err(|e| ClientError::Internal(format!("Failed to build request: {}", e)))
    }

    /// Execute the request and return the body text of a successful response
    async fn execute(&self, request: Request<Body>) -> ClientResult<String> {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .map_err(|e| ClientError::Internal(format!("Oneshot call failed: {}", e)))?;

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .map_err(|e| ClientError::Internal(format!("Failed to read body: {}", e)))?;
        let text = String::from_utf8_lossy(&body_bytes).to_string();

        if !status.is_success() {
            return Err(status_error(status, text));
        }
        Ok(text)
    }
}

#[async_trait]
impl HttpClient for OneshotHttpClient {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let request = self.build_request(http::Method::GET, path)?;
        let text = self.execute(request).await?;
        decode_json(&text)
    }

    async fn post<B: Serialize + Sync>(&self, path: &str, body: &B) -> ClientResult<String> {
        let request = self.build_request_with_body(http::Method::POST, path, body)?;
        self.execute(request).await
    }

    async fn put<B: Serialize + Sync>(&self, path: &str, body: &B) -> ClientResult<String> {
        let request = self.build_request_with_body(http::Method::PUT, path, body)?;
        self.execute(request).await
    }

    async fn delete_with_body<B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<String> {
        let request = self.build_request_with_body(http::Method::DELETE, path, body)?;
        self.execute(request).await
    }
}
