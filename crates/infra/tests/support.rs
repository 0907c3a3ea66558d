use std::sync::Arc;

use caliber_domain::ApiConfig;
use caliber_infra::{ApiClient, RestClient};
use serde_json::{json, Value};
use wiremock::MockServer;

/// Base path the mock backend is mounted under.
pub const CONTEXT_PATH: &str = "/caliber";

/// API client pointed at the mock server with fast, single-attempt settings.
pub fn api_client_for(server: &MockServer) -> Arc<dyn RestClient> {
    api_client_with(server, 5, 1)
}

/// API client pointed at the mock server with the given timeout and attempts.
pub fn api_client_with(
    server: &MockServer,
    timeout_seconds: u64,
    max_attempts: usize,
) -> Arc<dyn RestClient> {
    let config = ApiConfig {
        base_url: format!("{}{}/", server.uri(), CONTEXT_PATH),
        timeout_seconds,
        max_attempts,
        backoff_ms: 1,
    };
    let client = ApiClient::builder().config(config).build().expect("api client should build");
    Arc::new(client)
}

/// Full request path on the mock server for an API path.
pub fn api_path(path: &str) -> String {
    format!("{CONTEXT_PATH}/{path}")
}

/// Backend JSON for a note.
pub fn note_json(id: i64, content: &str, note_type: &str) -> Value {
    json!({
        "noteId": id,
        "content": content,
        "week": 2,
        "batchId": 22506,
        "type": note_type,
        "qcFeedback": note_type.starts_with("QC"),
    })
}

/// Backend JSON for a scheduled subtopic.
pub fn subtopic_json(id: i64, name: &str, date_ms: i64, status: &str) -> Value {
    json!({
        "subtopicId": id,
        "subtopicName": { "id": id * 10, "name": name },
        "subtopicDate": date_ms,
        "status": { "id": 1, "name": status },
        "batchId": 22506,
    })
}

/// Backend JSON for a portal user.
pub fn user_json(minerva_id: Option<i64>) -> Value {
    json!({
        "userId": 3,
        "fName": "Ryan",
        "lName": "Lessley",
        "email": "rl@example.com",
        "role": 2,
        "phone": "1234567890",
        "minervaID": minerva_id,
    })
}
