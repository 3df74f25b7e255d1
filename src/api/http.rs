//! Shared HTTP transport for every resource client.
//!
//! One `reqwest::Client` configured at startup: base URL from the
//! environment, JSON headers, no cookie store, fixed request timeout.
//! Failures are logged once here and handed back to the caller as-is.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::config::ApiConfig;

/// Configured REST transport. Cloning shares the connection pool.
#[derive(Debug, Clone)]
pub struct HttpClient {
    base_url: String,
    client: reqwest::Client,
    timeout_secs: u64,
}

impl HttpClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ApiError::Client(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
            timeout_secs: config.timeout_secs,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    // ── Verbs ───────────────────────────────────────────────

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let request = self.client.get(self.url(path)).query(query);
        let response = self.send(Method::GET, path, request).await?;
        self.decode(Method::GET, path, response).await
    }

    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = self.client.post(self.url(path)).json(body);
        let response = self.send(Method::POST, path, request).await?;
        self.decode(Method::POST, path, response).await
    }

    pub async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = self.client.put(self.url(path)).json(body);
        let response = self.send(Method::PUT, path, request).await?;
        self.decode(Method::PUT, path, response).await
    }

    /// PATCH with query parameters and no body.
    pub async fn patch<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let request = self.client.patch(self.url(path)).query(query);
        let response = self.send(Method::PATCH, path, request).await?;
        self.decode(Method::PATCH, path, response).await
    }

    /// DELETE; any response body is ignored.
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let request = self.client.delete(self.url(path));
        self.send(Method::DELETE, path, request).await?;
        Ok(())
    }

    // ── Shared plumbing ─────────────────────────────────────

    async fn send(
        &self,
        method: Method,
        path: &str,
        request: RequestBuilder,
    ) -> Result<Response, ApiError> {
        tracing::debug!(%method, path, "API request");

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                let err = ApiError::from_reqwest(e, &self.base_url, self.timeout_secs);
                tracing::error!(%method, path, error = %err, "API Error");
                return Err(err);
            }
        };

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(%method, path, status = status.as_u16(), body, "API Error");
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        response: Response,
    ) -> Result<T, ApiError> {
        response.json::<T>().await.map_err(|e| {
            let err = ApiError::Decode(e.to_string());
            tracing::error!(%method, path, error = %err, "API Error");
            err
        })
    }
}
