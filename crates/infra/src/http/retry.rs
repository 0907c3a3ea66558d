//! When a failed request may be sent again
//!
//! A request is only repeated if doing so cannot apply a change twice.
//! Idempotent methods are retried after gateway answers (502/503/504),
//! timeouts and transport errors. Other methods (the backend's `POST`
//! create/update endpoints) are retried only when the connection was never
//! established, since a timed-out `POST` may already have been applied.

use std::time::Duration;

use caliber_domain::constants::{DEFAULT_API_BACKOFF_MS, DEFAULT_API_MAX_ATTEMPTS};
use caliber_domain::ApiConfig;
use reqwest::{Method, StatusCode};

/// Attempt budget and backoff for one [`HttpClient`](super::HttpClient)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: usize,
    base_backoff: Duration,
}

impl RetryPolicy {
    /// `max_attempts` counts the first try; zero is treated as one.
    pub fn new(max_attempts: usize, base_backoff: Duration) -> Self {
        Self { max_attempts: max_attempts.max(1), base_backoff }
    }

    /// Send every request exactly once.
    pub fn never() -> Self {
        Self::new(1, Duration::ZERO)
    }

    pub fn from_config(config: &ApiConfig) -> Self {
        Self::new(config.max_attempts, Duration::from_millis(config.backoff_ms))
    }

    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Whether another attempt may follow attempt number `attempt` (1-based).
    pub fn has_attempts_after(&self, attempt: usize) -> bool {
        attempt < self.max_attempts
    }

    /// Delay before retry number `retry` (1-based), doubling each time.
    pub fn backoff(&self, retry: usize) -> Duration {
        let shift = u32::try_from(retry.saturating_sub(1)).unwrap_or(u32::MAX).min(8);
        self.base_backoff.saturating_mul(1 << shift)
    }

    /// Whether a response with `status` warrants resending the request.
    pub fn retries_status(&self, method: &Method, status: StatusCode) -> bool {
        is_idempotent(method)
            && matches!(
                status,
                StatusCode::BAD_GATEWAY
                    | StatusCode::SERVICE_UNAVAILABLE
                    | StatusCode::GATEWAY_TIMEOUT
            )
    }

    /// Whether a transport error warrants resending the request.
    pub fn retries_error(&self, method: &Method, err: &reqwest::Error) -> bool {
        if err.is_connect() {
            return true;
        }
        is_idempotent(method) && (err.is_timeout() || err.is_request())
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_API_MAX_ATTEMPTS, Duration::from_millis(DEFAULT_API_BACKOFF_MS))
    }
}

fn is_idempotent(method: &Method) -> bool {
    matches!(
        *method,
        Method::GET | Method::HEAD | Method::OPTIONS | Method::PUT | Method::DELETE
    )
}
