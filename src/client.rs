//! HTTP client for the DIME creator-search API.
//!
//! The entry point is [`DimeClient`], built via [`DimeClientBuilder`]. Each
//! method performs exactly one network round trip; there are no retries,
//! caching, or request deduplication.

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use std::sync::Arc;
use tracing::debug;
use url::Url;

use crate::error::{DimeError, DimeResult};
use crate::models::*;

const SEARCH_PATH: &str = "/api/v1/search/";
const SIMILAR_PATH: &str = "/api/v1/search/similar";
const CATEGORY_PATH: &str = "/api/v1/search/category";
const USERNAME_PATH: &str = "/api/v1/search/username";
// Deliberately outside the versioned prefix, and exempt from the
// success-flag check applied to the search endpoints.
const HEALTH_PATH: &str = "/health";

/// Fallback message when the backend reports failure without details.
const UNKNOWN_API_ERROR: &str = "Unknown API error";

// ---------------------------------------------------------------------------
// Internal shared state
// ---------------------------------------------------------------------------

#[derive(Debug)]
struct ClientInner {
    http: reqwest::Client,
    base_url: Url,
}

impl ClientInner {
    /// Build the full URL for an API path.
    fn url(&self, path: &str) -> DimeResult<Url> {
        self.base_url.join(path).map_err(DimeError::UrlParseError)
    }

    /// Execute a POST with a JSON body and unwrap the response envelope.
    async fn post_envelope<B, T>(&self, path: &str, body: &B) -> DimeResult<T>
    where
        B: serde::Serialize,
        T: serde::de::DeserializeOwned,
    {
        let url = self.url(path)?;
        debug!(%url, "POST");
        let resp = self.http.post(url).json(body).send().await?;
        Self::handle_envelope(resp).await
    }

    /// Execute a GET and unwrap the response envelope.
    async fn get_envelope<T: serde::de::DeserializeOwned>(&self, url: Url) -> DimeResult<T> {
        debug!(%url, "GET");
        let resp = self.http.get(url).send().await?;
        Self::handle_envelope(resp).await
    }

    /// Normalize a search-endpoint response.
    ///
    /// Non-2xx statuses become [`DimeError::ApiError`]; 2xx bodies whose
    /// `success` flag is false (or missing) become [`DimeError::BackendError`]
    /// with the server's `error` message when it supplies one.
    async fn handle_envelope<T: serde::de::DeserializeOwned>(
        resp: reqwest::Response,
    ) -> DimeResult<T> {
        let status = resp.status();
        if !status.is_success() {
            return Err(DimeError::ApiError {
                status: status.as_u16(),
                message: status.canonical_reason().unwrap_or("unknown").to_string(),
            });
        }

        let body: serde_json::Value = resp.json().await?;
        match body.get("success").and_then(serde_json::Value::as_bool) {
            Some(true) => Ok(serde_json::from_value(body)?),
            _ => {
                let message = body
                    .get("error")
                    .and_then(serde_json::Value::as_str)
                    .unwrap_or(UNKNOWN_API_ERROR)
                    .to_string();
                Err(DimeError::BackendError(message))
            }
        }
    }
}

// ---------------------------------------------------------------------------
// DimeClient
// ---------------------------------------------------------------------------

/// Async client for the DIME creator-search API.
///
/// Use [`DimeClient::builder`] to create an instance:
///
/// ```rust,no_run
/// use dime_sdk::{DimeClient, SearchRequest, SearchMethod};
///
/// # async fn example() -> Result<(), dime_sdk::DimeError> {
/// let client = DimeClient::builder("http://localhost:8000").build()?;
///
/// let resp = client
///     .search(SearchRequest::new("vegan bakers").method(SearchMethod::Hybrid))
///     .await?;
/// println!("{} creators found", resp.count);
/// # Ok(())
/// # }
/// ```
///
/// The client is cheap to clone and safe to use concurrently; each call
/// suspends the calling task until its single request resolves.
#[derive(Debug, Clone)]
pub struct DimeClient {
    inner: Arc<ClientInner>,
}

impl DimeClient {
    /// Start building a new client against a server base URL.
    pub fn builder(base_url: &str) -> DimeClientBuilder {
        DimeClientBuilder {
            base_url: base_url.to_string(),
            timeout_secs: 30,
        }
    }

    /// Run a creator search for a free-text query.
    pub async fn search(&self, req: SearchRequest) -> DimeResult<SearchResponse> {
        self.inner.post_envelope(SEARCH_PATH, &req).await
    }

    /// Find creators similar to a reference account.
    pub async fn search_similar(&self, req: SimilarSearchRequest) -> DimeResult<SearchResponse> {
        self.inner.post_envelope(SIMILAR_PATH, &req).await
    }

    /// Browse creators within a business category.
    pub async fn search_by_category(
        &self,
        req: CategorySearchRequest,
    ) -> DimeResult<SearchResponse> {
        self.inner.post_envelope(CATEGORY_PATH, &req).await
    }

    /// Look up a single creator by account handle.
    ///
    /// The handle is trimmed and any leading `@` characters are stripped
    /// before the lookup; an empty remainder fails with
    /// [`DimeError::InvalidArgument`] without touching the network. The
    /// sanitized handle is percent-encoded into the request path.
    pub async fn creator_by_username(&self, username: &str) -> DimeResult<Creator> {
        let sanitized = username.trim().trim_start_matches('@');
        if sanitized.is_empty() {
            return Err(DimeError::InvalidArgument("username is required".into()));
        }

        let mut url = self.inner.url(USERNAME_PATH)?;
        url.path_segments_mut()
            .map_err(|_| DimeError::ConfigError("base URL cannot be a base".into()))?
            .pop_if_empty()
            .push(sanitized);

        let resp: UsernameSearchResponse = self.inner.get_envelope(url).await?;
        Ok(resp.result)
    }

    /// Check server health.
    ///
    /// The health endpoint has no `success` envelope; a 2xx body is returned
    /// as-is and a non-2xx status fails with [`DimeError::ApiError`].
    pub async fn health(&self) -> DimeResult<HealthStatus> {
        let url = self.inner.url(HEALTH_PATH)?;
        debug!(%url, "GET");
        let resp = self.inner.http.get(url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(DimeError::ApiError {
                status: status.as_u16(),
                message: status.canonical_reason().unwrap_or("unknown").to_string(),
            });
        }
        Ok(resp.json().await?)
    }
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Builder for [`DimeClient`].
pub struct DimeClientBuilder {
    base_url: String,
    timeout_secs: u64,
}

impl DimeClientBuilder {
    /// Set the request timeout in seconds (default: 30).
    pub fn timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Build the client.
    pub fn build(self) -> DimeResult<DimeClient> {
        let base_url: Url = self
            .base_url
            .parse()
            .map_err(|e: url::ParseError| DimeError::ConfigError(e.to_string()))?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(self.timeout_secs))
            .build()?;

        Ok(DimeClient {
            inner: Arc::new(ClientInner { http, base_url }),
        })
    }
}
