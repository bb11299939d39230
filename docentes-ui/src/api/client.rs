//! HTTP API Client
//!
//! One GET against the directory endpoint, decoded with the shared payload
//! rules so the browser accepts exactly what the terminal host accepts.

use docentes::directory::{decode_payload, FetchError, FetchResult, TeacherRecord};
use gloo_net::http::Request;

/// Fetch the full directory from `endpoint`
pub async fn fetch_teachers(endpoint: &str) -> FetchResult<Vec<TeacherRecord>> {
    let response = Request::get(endpoint)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| FetchError::Transport(format!("Network error: {}", e)))?;

    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        return Err(FetchError::Status {
            status: response.status(),
            body,
        });
    }

    let body = response
        .binary()
        .await
        .map_err(|e| FetchError::Transport(format!("Failed to read body: {}", e)))?;

    decode_payload(&body)
}
