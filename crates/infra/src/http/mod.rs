//! HTTP transport with retries and timeouts

pub mod client;
pub mod retry;

pub use client::HttpClient;
pub use retry::RetryPolicy;
