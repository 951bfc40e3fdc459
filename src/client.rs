//! HTTP transport for the Notebase API.
//!
//! One method per endpoint, each a single request/response round trip.
//! Errors surface immediately: there is no local retry and no rate-limit
//! handling beyond what the underlying HTTP client provides.

use std::time::{Duration, Instant};

use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::auth::AuthProvider;
use crate::error::{NotebaseLinkError, Result};
use crate::models::{
    AppendBlocksRequest, CollectionMeta, CreateRowRequest, ErrorDetail, Page, QueryRequest,
    RemoteRow, SearchRequest, SearchResult, UpdateRowRequest,
};

/// API version sent with every request.
pub const DEFAULT_API_VERSION: &str = "2024-05-01";

const API_VERSION_HEADER: &str = "Notebase-Version";

/// Client for the Notebase HTTP API.
///
/// Use [`NotebaseLinkClient::builder`] to construct instances. The client
/// is cheap to clone; clones share one pooled HTTP connection.
///
/// # Examples
///
/// ```rust,no_run
/// use notebase_link::NotebaseLinkClient;
///
/// # fn example() -> notebase_link::Result<()> {
/// let client = NotebaseLinkClient::builder()
///     .base_url("https://api.notebase.example")
///     .bearer_token("secret_abc123")
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct NotebaseLinkClient {
    base_url: String,
    http_client: reqwest::Client,
    auth: AuthProvider,
    api_version: String,
}

impl NotebaseLinkClient {
    /// Create a new builder for configuring the client.
    pub fn builder() -> NotebaseLinkClientBuilder {
        NotebaseLinkClientBuilder::new()
    }

    /// The configured base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Search for collections visible to the current credentials.
    pub async fn search(&self, request: &SearchRequest) -> Result<Page<SearchResult>> {
        let url = format!("{}/v1/search", self.base_url);
        self.post_json("search", &url, request).await
    }

    /// Fetch collection metadata (including the property schema).
    pub async fn retrieve_collection(&self, collection_id: &str) -> Result<CollectionMeta> {
        let url = format!("{}/v1/collections/{}", self.base_url, collection_id);
        self.get_json("retrieve_collection", &url).await
    }

    /// Run one page of a row query against a collection.
    pub async fn query_collection(
        &self,
        collection_id: &str,
        request: &QueryRequest,
    ) -> Result<Page<RemoteRow>> {
        let url = format!("{}/v1/collections/{}/query", self.base_url, collection_id);
        self.post_json("query_collection", &url, request).await
    }

    /// Fetch one row by id.
    pub async fn get_row(&self, row_id: &str) -> Result<RemoteRow> {
        let url = format!("{}/v1/pages/{}", self.base_url, row_id);
        self.get_json("get_row", &url).await
    }

    /// Create a row.
    pub async fn create_row(&self, request: &CreateRowRequest) -> Result<RemoteRow> {
        let url = format!("{}/v1/pages", self.base_url);
        self.post_json("create_row", &url, request).await
    }

    /// Update a row's properties or archive it.
    pub async fn update_row(&self, row_id: &str, request: &UpdateRowRequest) -> Result<RemoteRow> {
        let url = format!("{}/v1/pages/{}", self.base_url, row_id);
        self.patch_json("update_row", &url, request).await
    }

    /// List one page of a page's block children.
    pub async fn list_block_children(
        &self,
        page_id: &str,
        start_cursor: Option<&str>,
    ) -> Result<Page<JsonValue>> {
        let mut url = format!("{}/v1/blocks/{}/children", self.base_url, page_id);
        if let Some(cursor) = start_cursor {
            url.push_str("?start_cursor=");
            url.push_str(cursor);
        }
        self.get_json("list_block_children", &url).await
    }

    /// Append block children to a page.
    pub async fn append_block_children(
        &self,
        page_id: &str,
        request: &AppendBlocksRequest,
    ) -> Result<Page<JsonValue>> {
        let url = format!("{}/v1/blocks/{}/children", self.base_url, page_id);
        self.patch_json("append_block_children", &url, request)
            .await
    }

    async fn get_json<T: DeserializeOwned>(&self, operation: &'static str, url: &str) -> Result<T> {
        let request = self.http_client.get(url);
        self.dispatch(operation, url, request).await
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        operation: &'static str,
        url: &str,
        body: &B,
    ) -> Result<T> {
        let request = self.http_client.post(url).json(body);
        self.dispatch(operation, url, request).await
    }

    async fn patch_json<B: Serialize, T: DeserializeOwned>(
        &self,
        operation: &'static str,
        url: &str,
        body: &B,
    ) -> Result<T> {
        let request = self.http_client.patch(url).json(body);
        self.dispatch(operation, url, request).await
    }

    /// Shared request path: auth + version headers, status check,
    /// error-body parsing.
    async fn dispatch<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        url: &str,
        request: reqwest::RequestBuilder,
    ) -> Result<T> {
        let request = self
            .auth
            .apply_to_request(request)
            .header(API_VERSION_HEADER, self.api_version.as_str());

        debug!("[HTTP] {} -> {}", operation, url);
        let start = Instant::now();
        let response = request.send().await?;
        let status = response.status();
        debug!(
            "[HTTP] {} responded: status={} duration_ms={}",
            operation,
            status,
            start.elapsed().as_millis()
        );

        if status.is_success() {
            return Ok(response.json::<T>().await?);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        let message = match serde_json::from_str::<ErrorDetail>(&body) {
            Ok(detail) if !detail.message.is_empty() => detail.message,
            _ => body,
        };
        warn!(
            "[HTTP] {} failed: status={} message=\"{}\"",
            operation, status, message
        );

        Err(match status.as_u16() {
            404 => NotebaseLinkError::NotFound(format!("{}: {}", operation, message)),
            401 | 403 => NotebaseLinkError::AuthenticationError(message),
            code => NotebaseLinkError::ServerError {
                status_code: code,
                message,
            },
        })
    }
}

/// Builder for configuring [`NotebaseLinkClient`] instances.
pub struct NotebaseLinkClientBuilder {
    base_url: Option<String>,
    auth: Option<AuthProvider>,
    timeout: Duration,
    connect_timeout: Duration,
    api_version: String,
}

impl NotebaseLinkClientBuilder {
    fn new() -> Self {
        Self {
            base_url: None,
            auth: None,
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            api_version: DEFAULT_API_VERSION.to_string(),
        }
    }

    /// Set the base URL of the Notebase server.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set bearer-token authentication.
    pub fn bearer_token(mut self, token: impl Into<String>) -> Self {
        self.auth = Some(AuthProvider::bearer(token));
        self
    }

    /// Set the authentication provider directly.
    pub fn auth(mut self, auth: AuthProvider) -> Self {
        self.auth = Some(auth);
        self
    }

    /// Set the request timeout (receive side).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the connection-establishment timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Override the API version header value.
    pub fn api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    /// Build the client.
    ///
    /// Fails with [`NotebaseLinkError::ConfigurationError`] when the base
    /// URL or the token is missing: both are required up front, and a
    /// client without credentials is never constructed.
    pub fn build(self) -> Result<NotebaseLinkClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| NotebaseLinkError::ConfigurationError("base_url is required".into()))?;
        let base_url = base_url.trim_end_matches('/').to_string();

        let auth = self.auth.ok_or_else(|| {
            NotebaseLinkError::ConfigurationError(
                "an auth token is required; pass one explicitly or resolve it with Credentials::from_env".into(),
            )
        })?;

        // Keep-alive pooling: every facade operation reuses the same
        // connection across its pagination round trips.
        let http_client = reqwest::Client::builder()
            .timeout(self.timeout)
            .connect_timeout(self.connect_timeout)
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(90))
            .build()
            .map_err(|e| NotebaseLinkError::ConfigurationError(e.to_string()))?;

        Ok(NotebaseLinkClient {
            base_url,
            http_client,
            auth,
            api_version: self.api_version,
        })
    }
}
