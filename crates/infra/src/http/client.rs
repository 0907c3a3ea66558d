use std::time::Duration;

use caliber_domain::{ApiConfig, CaliberError};
use reqwest::{Client as ReqwestClient, Method, RequestBuilder, Response};
use tracing::debug;

use super::retry::RetryPolicy;
use crate::errors::InfraError;

/// Portal HTTP transport: one reqwest client, a per-attempt timeout and a
/// [`RetryPolicy`].
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: ReqwestClient,
    retry: RetryPolicy,
}

impl HttpClient {
    /// Create a client whose every attempt is bounded by `timeout`.
    pub fn new(timeout: Duration, retry: RetryPolicy) -> Result<Self, CaliberError> {
        let client = ReqwestClient::builder()
            .timeout(timeout)
            .no_proxy()
            .user_agent(concat!("caliber-portal/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|err| CaliberError::from(InfraError::from(err)))?;

        Ok(Self { client, retry })
    }

    /// Client with the timeout and retry settings of `config`.
    pub fn from_config(config: &ApiConfig) -> Result<Self, CaliberError> {
        Self::new(Duration::from_secs(config.timeout_seconds), RetryPolicy::from_config(config))
    }

    pub fn retry_policy(&self) -> &RetryPolicy {
        &self.retry
    }

    /// Start a request on the underlying reqwest client.
    pub fn request<U>(&self, method: Method, url: U) -> RequestBuilder
    where
        U: reqwest::IntoUrl,
    {
        self.client.request(method, url)
    }

    /// Send `builder`, repeating it while the retry policy allows.
    ///
    /// The last response is returned whatever its status; mapping statuses
    /// to errors is left to the caller.
    pub async fn send(&self, builder: RequestBuilder) -> Result<Response, CaliberError> {
        let mut attempt = 1;

        loop {
            let request = builder
                .try_clone()
                .ok_or_else(|| {
                    CaliberError::Internal("streaming request bodies are not supported".into())
                })?
                .build()
                .map_err(|err| CaliberError::from(InfraError::from(err)))?;
            let method = request.method().clone();
            let url = request.url().clone();

            let outcome = self.client.execute(request).await;
            let retry = self.retry.has_attempts_after(attempt)
                && match &outcome {
                    Ok(response) => self.retry.retries_status(&method, response.status()),
                    Err(err) => self.retry.retries_error(&method, err),
                };

            if !retry {
                return outcome.map_err(|err| CaliberError::from(InfraError::from(err)));
            }

            let delay = self.retry.backoff(attempt);
            match &outcome {
                Ok(response) => {
                    debug!(attempt, %method, %url, status = %response.status(), ?delay, "retrying");
                }
                Err(err) => debug!(attempt, %method, %url, error = %err, ?delay, "retrying"),
            }
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            attempt += 1;
        }
    }
}
