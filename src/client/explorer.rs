//! Explorer API client: transaction details, market snapshot, state changes.

use reqwest::StatusCode;

use super::http::{HttpClient, error_message, read_json};
use crate::domain::{ApiError, EthereumData, StateChange, TransactionDetail, parse_state_changes};

/// Generic message for a failed detail lookup.
pub const TRANSACTION_FETCH_FAILED: &str = "Failed to fetch transaction details";

/// Generic message for a failed market snapshot.
pub const MARKET_FETCH_FAILED: &str = "Failed to fetch Ethereum data";

/// Generic message for a failed state-change lookup.
pub const STATE_CHANGES_FETCH_FAILED: &str = "Failed to fetch state changes";

// ============================================================================
// Explorer Client
// ============================================================================

#[derive(Debug, Clone)]
pub struct ExplorerClient {
    http: HttpClient,
    base_url: String,
}

impl ExplorerClient {
    #[must_use]
    pub fn new(http: HttpClient, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    /// Fetch a single transaction by hash.
    ///
    /// # Errors
    ///
    /// - [`ApiError::NotFound`] on a 404
    /// - [`ApiError::FetchFailed`] on any other non-success status
    /// - [`ApiError::EmptyPayload`] when the body carries no record
    /// - [`ApiError::Network`] / [`ApiError::Parse`] on transport or JSON errors
    pub async fn get_transaction_detail(&self, hash: &str) -> Result<TransactionDetail, ApiError> {
        let url = format!("{}/api/transaction_detail/{}", self.base_url, hash);
        let response = self.http.get(&url).send().await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound);
        }
        if !status.is_success() {
            tracing::debug!("Transaction {hash} lookup returned status {status}");
            return Err(ApiError::fetch_failed(TRANSACTION_FETCH_FAILED));
        }

        let json = read_json(response).await?;
        TransactionDetail::from_json(&json)
    }

    /// Fetch the current market snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error on non-success status, transport failure or a body
    /// that is not JSON. Individual malformed fields are not errors.
    pub async fn get_ethereum_data(&self) -> Result<EthereumData, ApiError> {
        let url = format!("{}/api/ethereum_data", self.base_url);
        let response = self.http.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(ApiError::fetch_failed(MARKET_FETCH_FAILED));
        }

        let json = read_json(response).await?;
        Ok(EthereumData::from_json(&json))
    }

    /// Fetch the state changes caused by a transaction.
    ///
    /// A success body that is not a list, or not JSON at all, yields an
    /// empty list.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::FetchFailed`] carrying the server's `detail`
    /// message when present, or [`ApiError::Network`] on transport failure.
    pub async fn get_state_changes(&self, hash: &str) -> Result<Vec<StateChange>, ApiError> {
        let url = format!("{}/api/transaction/{}/state", self.base_url, hash);
        let response = self.http.get(&url).send().await?;

        if !response.status().is_success() {
            let message = read_json(response)
                .await
                .ok()
                .and_then(|body| error_message(&body, "detail"))
                .unwrap_or_else(|| STATE_CHANGES_FETCH_FAILED.to_string());
            return Err(ApiError::fetch_failed(message));
        }

        match read_json(response).await {
            Ok(json) => Ok(parse_state_changes(&json)),
            Err(ApiError::Parse { message }) => {
                tracing::debug!("State changes body for {hash} is not JSON: {message}");
                Ok(Vec::new())
            }
            Err(e) => Err(e),
        }
    }
}
