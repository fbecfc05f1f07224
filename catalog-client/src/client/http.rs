// catalog-client/src/client/http.rs
// HTTP client - network transport to the catalog API

use crate::{ClientConfig, ClientError, ClientResult};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Remote catalog gateway
///
/// Reads decode JSON bodies. Writes return the server's plain-text
/// confirmation verbatim; it is never parsed.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T>;
    async fn post<B: Serialize + Sync>(&self, path: &str, body: &B) -> ClientResult<String>;
    async fn put<B: Serialize + Sync>(&self, path: &str, body: &B) -> ClientResult<String>;
    async fn delete_with_body<B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<String>;
}

/// Map a non-success status to the client error taxonomy
pub(crate) fn status_error(status: StatusCode, text: String) -> ClientError {
    match status {
        StatusCode::NOT_FOUND => ClientError::NotFound(text),
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => ClientError::Validation(text),
        _ => ClientError::Internal(format!("{}: {}", status, text)),
    }
}

/// Decode a JSON read body. An empty body decodes as `null`.
pub(crate) fn decode_json<T: DeserializeOwned>(text: &str) -> ClientResult<T> {
    let text = if text.trim().is_empty() { "null" } else { text };
    serde_json::from_str(text)
        .map_err(|e| ClientError::InvalidResponse(format!("JSON parse error: {}", e)))
}

/// Network HTTP client
#[derive(Debug, Clone)]
pub struct NetworkHttpClient {
    client: Client,
    base_url: String,
}

impl NetworkHttpClient {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn read_text(response: reqwest::Response) -> ClientResult<String> {
        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(status_error(status, text));
        }
        Ok(text)
    }
}

#[async_trait]
impl HttpClient for NetworkHttpClient {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.client.get(self.url(path)).send().await?;
        let text = Self::read_text(response).await?;
        decode_json(&text)
    }

    async fn post<B: Serialize + Sync>(&self, path: &str, body: &B) -> ClientResult<String> {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        Self::read_text(response).await
    }

    async fn put<B: Serialize + Sync>(&self, path: &str, body: &B) -> ClientResult<String> {
        let response = self.client.put(self.url(path)).json(body).send().await?;
        Self::read_text(response).await
    }

    async fn delete_with_body<B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<String> {
        // .json() also sets Content-Type: application/json
        let response = self.client.delete(self.url(path)).json(body).send().await?;
        Self::read_text(response).await
    }
}
