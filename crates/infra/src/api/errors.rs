//! API-specific error types
//!
//! Classifies failed requests so callers and the interceptor can tell an
//! expired session from an outage. Whether a request is resent is decided
//! earlier, by the transport's [`RetryPolicy`](crate::http::RetryPolicy).

use std::time::Duration;

use caliber_domain::CaliberError;
use thiserror::Error;

/// Categories of API errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorCategory {
    /// Authentication errors (401, 403) - the session must be renewed
    Authentication,
    /// Rate limiting errors (429)
    RateLimit,
    /// Server errors (5xx)
    Server,
    /// Client errors (4xx except auth) and undecodable payloads
    Client,
    /// Network/connection errors and timeouts
    Network,
    /// Configuration errors
    Config,
}

/// API operation errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Rate limit exceeded: {0}")]
    RateLimit(String),

    #[error("Server error: {0}")]
    Server(String),

    #[error("Client error: {0}")]
    Client(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Timeout after {0:?}")]
    Timeout(Duration),

    #[error("Unexpected payload: {0}")]
    Decode(String),
}

impl ApiError {
    /// Get the error category for this error
    pub fn category(&self) -> ApiErrorCategory {
        match self {
            Self::Auth(_) => ApiErrorCategory::Authentication,
            Self::RateLimit(_) => ApiErrorCategory::RateLimit,
            Self::Server(_) => ApiErrorCategory::Server,
            Self::Client(_) | Self::Decode(_) => ApiErrorCategory::Client,
            Self::Network(_) | Self::Timeout(_) => ApiErrorCategory::Network,
            Self::Config(_) => ApiErrorCategory::Config,
        }
    }

    /// Map a transport-level domain error onto an API error.
    pub(crate) fn from_transport(err: CaliberError) -> Self {
        match err {
            CaliberError::Network(message) => Self::Network(message),
            CaliberError::Auth(message) => Self::Auth(message),
            CaliberError::Config(message) => Self::Config(message),
            CaliberError::NotFound(message) | CaliberError::InvalidInput(message) => {
                Self::Client(message)
            }
            CaliberError::Serialization(message) => Self::Decode(message),
            CaliberError::Storage(message) | CaliberError::Internal(message) => {
                Self::Server(message)
            }
        }
    }
}

/// API errors surface to the core as domain errors
impl From<ApiError> for CaliberError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Auth(message) => Self::Auth(message),
            ApiError::Client(message) => Self::InvalidInput(message),
            ApiError::Config(message) => Self::Config(message),
            ApiError::Decode(message) => Self::Serialization(message),
            ApiError::RateLimit(_) | ApiError::Server(_) | ApiError::Network(_) => {
                Self::Network(err.to_string())
            }
            ApiError::Timeout(_) => Self::Network(err.to_string()),
        }
    }
}
