//! REST API client for the portal backend
//!
//! This module provides the HTTP adapters behind the core ports.
//!
//! # Architecture
//!
//! - [`RestClient`] is the small capability interface (GET, POST, list
//!   decode) every adapter composes; [`ApiClient`] implements it over
//!   [`HttpClient`](crate::http::HttpClient)
//! - Every failed request is shown to an [`ErrorInterceptor`] before the
//!   error is returned, so session expiry and outages are reported in one
//!   place
//! - Adapters only build paths and decode payloads

pub mod calendar;
pub mod client;
pub mod errors;
pub mod interceptor;
pub mod notes;
pub mod rest;
pub mod users;

pub use calendar::HttpCalendarApi;
pub use client::{ApiClient, ApiClientBuilder};
pub use errors::{ApiError, ApiErrorCategory};
pub use interceptor::{ErrorInterceptor, TracingInterceptor};
pub use notes::HttpNoteApi;
pub use rest::{get_list, get_one, post, RestClient};
pub use users::HttpUserApi;
