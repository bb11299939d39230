//! Directory HTTP client
//!
//! Thin reqwest wrapper that performs one GET against the directory
//! endpoint and decodes the body.

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::Client;

use super::RecordSource;
use crate::directory::{decode_payload, FetchError, FetchResult, TeacherRecord, DEFAULT_ENDPOINT};

/// HTTP client for the remote directory
pub struct DirectoryClient {
    client: Client,
    config: ClientConfig,
}

/// Configuration for the directory client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Absolute URL of the directory endpoint
    pub endpoint: String,
    /// Request timeout in milliseconds
    pub request_timeout_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            request_timeout_ms: 10_000,
        }
    }
}

impl DirectoryClient {
    /// Create a new client with the given configuration
    pub fn new(config: ClientConfig) -> FetchResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_millis(config.request_timeout_ms))
            .user_agent(concat!("docentes/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| FetchError::Client(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Get the current configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Fetch and decode the full directory
    pub async fn fetch_records(&self) -> FetchResult<Vec<TeacherRecord>> {
        let response = self
            .client
            .get(&self.config.endpoint)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.bytes().await.map_err(transport_error)?;
        decode_payload(&body)
    }
}

fn transport_error(e: reqwest::Error) -> FetchError {
    if e.is_timeout() {
        FetchError::Transport("request timed out".to_string())
    } else if e.is_connect() {
        FetchError::Transport(format!("connection failed: {}", e))
    } else {
        FetchError::Transport(e.to_string())
    }
}

#[async_trait]
impl RecordSource for DirectoryClient {
    fn describe(&self) -> String {
        self.config.endpoint.clone()
    }

    async fn fetch(&self) -> FetchResult<Vec<TeacherRecord>> {
        self.fetch_records().await
    }
}
