//! # Caliber Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - HTTP client with retry/backoff
//! - REST adapters for the notes, calendar and user backends
//! - File-backed session store
//! - Configuration loading and tracing setup
//!
//! ## Architecture
//! - Implements traits defined in `caliber-core`
//! - Depends on `caliber-domain` and `caliber-core`
//! - Contains all "impure" code (network, filesystem, environment)

pub mod api;
pub mod config;
pub mod errors;
pub mod http;
pub mod observability;
pub mod session;

// Re-export commonly used items
pub use api::{
    ApiClient, ApiClientBuilder, ApiError, ApiErrorCategory, ErrorInterceptor, HttpCalendarApi,
    HttpNoteApi, HttpUserApi, RestClient, TracingInterceptor,
};
pub use errors::InfraError;
pub use http::{HttpClient, RetryPolicy};
pub use observability::init_tracing;
pub use session::FileSessionStore;
