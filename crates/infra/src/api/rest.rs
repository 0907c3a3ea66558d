//! Minimal REST capability shared by the backend adapters

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::errors::ApiError;

/// GET/POST of JSON documents relative to the backend base URL
///
/// Paths may carry a query string. An empty response body comes back as
/// [`Value::Null`].
#[async_trait]
pub trait RestClient: Send + Sync {
    async fn get_json(&self, path: &str) -> Result<Value, ApiError>;

    async fn post_json(&self, path: &str, body: Value) -> Result<Value, ApiError>;
}

/// GET a JSON array; a null or empty answer is an empty list.
pub async fn get_list<T>(client: &dyn RestClient, path: &str) -> Result<Vec<T>, ApiError>
where
    T: DeserializeOwned,
{
    decode_list(client.get_json(path).await?)
}

/// GET a single JSON document.
pub async fn get_one<T>(client: &dyn RestClient, path: &str) -> Result<T, ApiError>
where
    T: DeserializeOwned,
{
    decode(client.get_json(path).await?)
}

/// POST `body` as JSON and decode the answer.
pub async fn post<B, R>(client: &dyn RestClient, path: &str, body: &B) -> Result<R, ApiError>
where
    B: Serialize + ?Sized + Sync,
    R: DeserializeOwned,
{
    let body = serde_json::to_value(body)
        .map_err(|e| ApiError::Client(format!("Failed to serialize body: {}", e)))?;
    decode(client.post_json(path, body).await?)
}

fn decode_list<T: DeserializeOwned>(value: Value) -> Result<Vec<T>, ApiError> {
    if value.is_null() {
        return Ok(Vec::new());
    }
    decode(value)
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    serde_json::from_value(value)
        .map_err(|e| ApiError::Decode(format!("Failed to decode response: {}", e)))
}
