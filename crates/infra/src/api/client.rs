//! API client with retry logic and error interception
//!
//! Provides the HTTP-based [`RestClient`] every backend adapter shares.
//! The backend keeps a server-side session, so requests carry no token.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use caliber_domain::ApiConfig;
use reqwest::{Method, StatusCode};
use serde_json::Value;
use tracing::{debug, instrument};
use url::Url;

use super::errors::ApiError;
use super::interceptor::{ErrorInterceptor, TracingInterceptor};
use super::rest::RestClient;
use crate::http::HttpClient;

/// API client for the portal backend
pub struct ApiClient {
    http_client: Arc<HttpClient>,
    base_url: Url,
    deadline: Duration,
    interceptor: Arc<dyn ErrorInterceptor>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url.as_str())
            .field("deadline", &self.deadline)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Create a new API client
    ///
    /// # Arguments
    ///
    /// * `config` - Backend address, timeout and retry settings
    /// * `interceptor` - Observer for failed requests
    ///
    /// # Errors
    ///
    /// Returns error if the base URL is invalid or the HttpClient cannot be
    /// created
    pub fn new(config: &ApiConfig, interceptor: Arc<dyn ErrorInterceptor>) -> Result<Self, ApiError> {
        let http_client = HttpClient::from_config(config)
            .map_err(|e| ApiError::Config(format!("Failed to build HttpClient: {}", e)))?;

        let base_url = parse_base_url(&config.base_url)?;

        // One deadline covers every attempt plus the backoff between them.
        let attempts = u32::try_from(config.max_attempts.max(1)).unwrap_or(u32::MAX);
        let backoff = Duration::from_millis(config.backoff_ms).saturating_mul(1 << attempts.min(16));
        let deadline =
            Duration::from_secs(config.timeout_seconds).saturating_mul(attempts).saturating_add(backoff);

        Ok(Self { http_client: Arc::new(http_client), base_url, deadline, interceptor })
    }

    /// Create a builder for fluent configuration
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    /// Base URL every path is resolved against
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve an API path (with optional query string) against the base URL
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Config`] if the result is not a valid URL
    pub fn url(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| ApiError::Config(format!("Invalid API path '{}': {}", path, e)))
    }

    #[instrument(skip(self, body), fields(method = %method, path = %path))]
    async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Value, ApiError> {
        let url = self.url(path)?;

        match self.send(method.clone(), &url, body).await {
            Ok(value) => Ok(value),
            Err(err) => {
                self.interceptor.intercept(&method, url.as_str(), &err);
                Err(err)
            }
        }
    }

    async fn send(&self, method: Method, url: &Url, body: Option<&Value>) -> Result<Value, ApiError> {
        debug!(url = %url, "{} request", method);

        let mut request = self
            .http_client
            .request(method.clone(), url.clone())
            .header("Accept", "application/json");
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = match tokio::time::timeout(self.deadline, self.http_client.send(request)).await
        {
            Ok(Ok(resp)) => resp,
            Ok(Err(err)) => return Err(ApiError::from_transport(err)),
            Err(_) => return Err(ApiError::Timeout(self.deadline)),
        };

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Self::map_status_error(status, url.as_str(), body));
        }

        // 204/205 carry no body; callers see them as JSON null
        if status == StatusCode::NO_CONTENT || status == StatusCode::RESET_CONTENT {
            debug!(url = %url, status = status.as_u16(), "empty response");
            return Ok(Value::Null);
        }

        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Network(format!("Failed to read response body: {}", e)))?;
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }

        let value = serde_json::from_str(&text)
            .map_err(|e| ApiError::Decode(format!("Failed to parse response: {}", e)))?;
        debug!(url = %url, "{} request successful", method);
        Ok(value)
    }

    fn map_status_error(status: StatusCode, url: &str, body: String) -> ApiError {
        let message = if body.is_empty() {
            format!("{} returned status {}", url, status)
        } else {
            format!("{} returned status {}: {}", url, status, body)
        };

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            ApiError::Auth(message)
        } else if status == StatusCode::TOO_MANY_REQUESTS {
            ApiError::RateLimit(message)
        } else if status.is_server_error() {
            ApiError::Server(message)
        } else if status.is_client_error() {
            ApiError::Client(message)
        } else {
            ApiError::Network(message)
        }
    }
}

#[async_trait]
impl RestClient for ApiClient {
    async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
        self.execute(Method::GET, path, None).await
    }

    async fn post_json(&self, path: &str, body: Value) -> Result<Value, ApiError> {
        self.execute(Method::POST, path, Some(&body)).await
    }
}

/// Paths are joined onto the base, so it must end with a slash
fn parse_base_url(raw: &str) -> Result<Url, ApiError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ApiError::Config("API base URL is empty".into()));
    }
    let normalized =
        if trimmed.ends_with('/') { trimmed.to_string() } else { format!("{}/", trimmed) };
    Url::parse(&normalized)
        .map_err(|e| ApiError::Config(format!("Invalid API base URL '{}': {}", raw, e)))
}

/// Builder for API client
#[derive(Default)]
pub struct ApiClientBuilder {
    config: Option<ApiConfig>,
    interceptor: Option<Arc<dyn ErrorInterceptor>>,
}

impl ApiClientBuilder {
    /// Set the API configuration
    pub fn config(mut self, config: ApiConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the error interceptor (defaults to [`TracingInterceptor`])
    pub fn interceptor(mut self, interceptor: Arc<dyn ErrorInterceptor>) -> Self {
        self.interceptor = Some(interceptor);
        self
    }

    /// Build the API client
    ///
    /// # Errors
    ///
    /// Returns error if the configuration is missing or invalid
    pub fn build(self) -> Result<ApiClient, ApiError> {
        let config =
            self.config.ok_or_else(|| ApiError::Config("API configuration not set".to_string()))?;
        let interceptor = self.interceptor.unwrap_or_else(|| Arc::new(TracingInterceptor));

        ApiClient::new(&config, interceptor)
    }
}
