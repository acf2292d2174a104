//! Shared HTTP client implementation

use crate::config::ClientConfig;
use crate::endpoints::{DatasetApi, GeocodingApi, RoutingApi};
use crate::error::{ApiError, ApiResult};
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, instrument};
use uuid::Uuid;

/// Request correlation ID header
const X_REQUEST_ID: &str = "X-Request-ID";

/// Shared HTTP client for the Nearport collaborator services
///
/// Wraps `reqwest` with:
/// - A per-client timeout and identifying User-Agent header
/// - Request correlation IDs for tracing
/// - Uniform non-success status handling
///
/// Cloning is cheap; all clones share one connection pool.
#[derive(Clone)]
pub struct NearportClient {
    inner: Client,
    config: Arc<ClientConfig>,
}

impl NearportClient {
    /// Create a new client with configuration from the environment
    ///
    /// # Errors
    /// Returns [`ApiError::Config`] for invalid configuration, or
    /// [`ApiError::Request`] if the underlying client cannot be built.
    pub fn new() -> ApiResult<Self> {
        Self::with_config(ClientConfig::from_env()?)
    }

    /// Create a new client with specific configuration
    ///
    /// # Errors
    /// Returns [`ApiError::Config`] for invalid configuration, or
    /// [`ApiError::Request`] if the underlying client cannot be built.
    pub fn with_config(config: ClientConfig) -> ApiResult<Self> {
        config.validate()?;

        let mut default_headers = HeaderMap::new();
        default_headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&config.user_agent)
                .map_err(|_| ApiError::config("user_agent contains invalid header characters"))?,
        );

        let inner = Client::builder()
            .timeout(config.timeout)
            .default_headers(default_headers)
            .build()
            .map_err(ApiError::Request)?;

        Ok(Self {
            inner,
            config: Arc::new(config),
        })
    }

    /// Get the current configuration
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    // -------------------------------------------------------------------------
    // Service API accessors
    // -------------------------------------------------------------------------

    /// Access the geocoding service
    #[must_use]
    pub fn geocoding(&self) -> GeocodingApi {
        GeocodingApi::new(self.clone())
    }

    /// Access the airport catalog service
    #[must_use]
    pub fn dataset(&self) -> DatasetApi {
        DatasetApi::new(self.clone())
    }

    /// Access the routing service
    #[must_use]
    pub fn routing(&self) -> RoutingApi {
        RoutingApi::new(self.clone())
    }

    // -------------------------------------------------------------------------
    // Low-level HTTP methods
    // -------------------------------------------------------------------------

    /// Perform a GET request and deserialize the JSON response
    #[instrument(skip(self, query))]
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> ApiResult<T> {
        let response = self.execute(url, query).await?;
        response.json().await.map_err(ApiError::Request)
    }

    /// Perform a GET request and return the response body as text
    #[instrument(skip(self))]
    pub(crate) async fn get_text(&self, url: &str) -> ApiResult<String> {
        let response = self.execute(url, &[]).await?;
        response.text().await.map_err(ApiError::Request)
    }

    async fn execute(&self, url: &str, query: &[(&str, &str)]) -> ApiResult<Response> {
        let request_id = Uuid::new_v4().to_string();

        debug!(request_id = %request_id, url = %url, "issuing GET request");

        let mut request = self.inner.get(url).header(X_REQUEST_ID, &request_id);
        if !query.is_empty() {
            request = request.query(query);
        }

        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            Ok(response)
        } else {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            debug!(request_id = %request_id, status = status.as_u16(), "non-success response");
            Err(ApiError::api_response(status.as_u16(), message))
        }
    }
}
