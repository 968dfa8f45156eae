//! History API client: transactions by address.

use super::http::{HttpClient, error_message, read_json};
use crate::domain::{ApiError, HistoryTransaction, parse_history};

/// Generic message for a failed history lookup.
pub const HISTORY_FETCH_FAILED: &str = "Failed to fetch transactions";

/// Client for the address history host.
///
/// The history endpoint is served from its own host, configured separately
/// from the explorer API.
#[derive(Debug, Clone)]
pub struct HistoryClient {
    http: HttpClient,
    base_url: String,
}

impl HistoryClient {
    #[must_use]
    pub fn new(http: HttpClient, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    /// Fetch the full, unpaginated transaction list for an address.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::FetchFailed`] with the server's `message` (or a
    /// generic message) on non-success, and [`ApiError::Network`] /
    /// [`ApiError::Parse`] on transport or JSON errors.
    pub async fn get_transactions(
        &self,
        address: &str,
    ) -> Result<Vec<HistoryTransaction>, ApiError> {
        let url = format!("{}/api/transactions", self.base_url);
        let response = self
            .http
            .get(&url)
            .query(&[("address", address)])
            .send()
            .await?;

        if !response.status().is_success() {
            let message = read_json(response)
                .await
                .ok()
                .and_then(|body| error_message(&body, "message"))
                .unwrap_or_else(|| HISTORY_FETCH_FAILED.to_string());
            return Err(ApiError::fetch_failed(message));
        }

        let json = read_json(response).await?;
        Ok(parse_history(&json))
    }
}
