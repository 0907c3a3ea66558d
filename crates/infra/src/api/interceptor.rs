//! Cross-cutting observer for failed API requests

use reqwest::Method;
use tracing::warn;

use super::errors::{ApiError, ApiErrorCategory};

/// Sees every failed request before the error reaches the caller
///
/// Lets one component report session expiry or outages for all services,
/// so the services themselves can stay silent about transport failures.
pub trait ErrorInterceptor: Send + Sync {
    fn intercept(&self, method: &Method, url: &str, error: &ApiError);
}

/// Default interceptor: logs each failure with `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingInterceptor;

impl ErrorInterceptor for TracingInterceptor {
    fn intercept(&self, method: &Method, url: &str, error: &ApiError) {
        match error.category() {
            ApiErrorCategory::Authentication => {
                warn!(%method, url, error = %error, "session expired or access denied");
            }
            category => {
                warn!(%method, url, ?category, error = %error, "API request failed");
            }
        }
    }
}
