//! HTTP client abstraction for explorer API requests.

use reqwest::{Client, Response};
use serde_json::Value;
use std::time::Duration;

use crate::domain::ApiError;

// ============================================================================
// Configuration
// ============================================================================

/// HTTP client configuration
#[derive(Debug, Clone, Default)]
pub struct HttpConfig {
    /// Request timeout. `None` means requests may hang indefinitely.
    pub timeout: Option<Duration>,
}

impl HttpConfig {
    /// Create config with custom timeout
    #[must_use]
    pub fn with_timeout(timeout: Option<Duration>) -> Self {
        Self { timeout }
    }
}

// ============================================================================
// HTTP Client
// ============================================================================

/// Base HTTP client wrapper shared by the API clients.
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: Client,
    config: HttpConfig,
}

impl HttpClient {
    /// Create a new HTTP client with custom configuration
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] if the TLS backend fails to initialize.
    pub fn with_config(config: HttpConfig) -> Result<Self, ApiError> {
        let inner = Client::builder()
            .pool_max_idle_per_host(4)
            .pool_idle_timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self { inner, config })
    }

    /// Build a GET request with standard headers
    pub fn get(&self, url: &str) -> reqwest::RequestBuilder {
        tracing::debug!("GET {url}");
        let request = self.inner.get(url).header("accept", "application/json");
        match self.config.timeout {
            Some(timeout) => request.timeout(timeout),
            None => request,
        }
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Read a response body as JSON.
///
/// A blank body is returned as `Value::Null` so callers can tell "nothing
/// came back" apart from "something unparseable came back".
///
/// # Errors
///
/// Returns [`ApiError::Network`] if the body cannot be read and
/// [`ApiError::Parse`] if it is not valid JSON.
pub async fn read_json(response: Response) -> Result<Value, ApiError> {
    let body = response.text().await?;
    if body.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(&body).map_err(|e| ApiError::parse(format!("Invalid JSON body: {e}")))
}

/// Pull a string message out of an error body, e.g. `{"detail": "..."}`.
#[must_use]
pub fn error_message(body: &Value, field: &str) -> Option<String> {
    body.get(field)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|msg| !msg.is_empty())
        .map(String::from)
}
