//! HTTP clients for the explorer APIs.
//!
//! - [`ExplorerClient`] - transaction details, market snapshot, state changes
//! - [`HistoryClient`] - transactions by address (separate host)
//!
//! # Example
//!
//! ```ignore
//! use crate::client::{ExplorerClient, HttpClient, HttpConfig};
//!
//! let http = HttpClient::with_config(HttpConfig::default())?;
//! let explorer = ExplorerClient::new(http, "http://localhost:8000");
//! let txn = explorer.get_transaction_detail("0xabc...").await?;
//! ```

pub mod explorer;
pub mod history;
pub mod http;

#[cfg(test)]
mod tests;

// ============================================================================
// Re-exports
// ============================================================================

pub use explorer::ExplorerClient;
pub use history::HistoryClient;
pub use http::{HttpClient, HttpConfig};

use crate::domain::ApiError;
use crate::state::AppConfig;

/// Both API clients, built from one configuration.
#[derive(Debug, Clone)]
pub struct Clients {
    pub explorer: ExplorerClient,
    pub history: HistoryClient,
}

impl Clients {
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn from_config(config: &AppConfig) -> Result<Self, ApiError> {
        let http = HttpClient::with_config(HttpConfig::with_timeout(config.request_timeout()))?;
        Ok(Self {
            explorer: ExplorerClient::new(http.clone(), config.api_base_url.clone()),
            history: HistoryClient::new(http, config.history_api_url.clone()),
        })
    }
}
