//! Application configuration.
//!
//! This module provides the [`AppConfig`] structure resolved at startup from
//! three layers, later layers winning:
//!
//! 1. `config.json` in the user's configuration directory
//! 2. `TXLENS_API_URL` / `TXLENS_HISTORY_API_URL` environment variables
//! 3. `--api-url` / `--history-url` command line flags
//!
//! # Configuration File Location
//!
//! - Linux: `~/.config/txlens/config.json`
//! - macOS: `~/Library/Application Support/txlens/config.json`
//! - Windows: `%APPDATA%/txlens/config.json`

use color_eyre::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::constants::{DEFAULT_API_BASE_URL, DEFAULT_HISTORY_API_URL, MARKET_POLL_SECS};

// ============================================================================
// Constants
// ============================================================================

/// Application name used for configuration directory.
const APP_NAME: &str = "txlens";

/// Configuration file name.
const CONFIG_FILE: &str = "config.json";

/// Environment variable for the detail/market/state API base URL.
pub const API_URL_ENV: &str = "TXLENS_API_URL";

/// Environment variable for the history API host.
pub const HISTORY_API_URL_ENV: &str = "TXLENS_HISTORY_API_URL";

// ============================================================================
// AppConfig
// ============================================================================

/// Resolved application configuration.
///
/// The detail, market and state-change endpoints share `api_base_url`;
/// the address history endpoint lives on its own host, `history_api_url`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL of the explorer API.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Base URL of the history API.
    #[serde(default = "default_history_api_url")]
    pub history_api_url: String,
    /// Per-request timeout. `None` leaves requests unbounded.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
    /// Market snapshot refresh interval.
    #[serde(default = "default_market_poll_secs")]
    pub market_poll_secs: u64,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_history_api_url() -> String {
    DEFAULT_HISTORY_API_URL.to_string()
}

const fn default_market_poll_secs() -> u64 {
    MARKET_POLL_SECS
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            history_api_url: default_history_api_url(),
            request_timeout_secs: None,
            market_poll_secs: MARKET_POLL_SECS,
        }
    }
}

impl AppConfig {
    /// Returns the path to the configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration directory cannot be determined.
    pub fn config_path() -> Result<PathBuf> {
        let mut path = dirs::config_dir().ok_or_else(|| {
            color_eyre::eyre::eyre!(
                "Could not determine config directory. Expected XDG_CONFIG_HOME or ~/.config on Linux, ~/Library/Application Support on macOS, %APPDATA% on Windows"
            )
        })?;
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        Ok(path)
    }

    /// Loads the configuration file, then applies environment overrides.
    ///
    /// A missing or unreadable file falls back to defaults.
    #[must_use]
    pub fn load() -> Self {
        let config = match Self::try_load() {
            Ok(config) => config,
            Err(err) => {
                tracing::debug!("Config load failed, using defaults: {err}");
                Self::default()
            }
        };
        config.with_env(|key| std::env::var(key).ok())
    }

    /// Attempts to load the configuration from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be determined, the file cannot be
    /// read, or the JSON content cannot be parsed.
    pub fn try_load() -> Result<Self> {
        let path = Self::config_path()?;
        let content = fs::read_to_string(&path)?;
        Self::from_json(&content)
    }

    /// Parses a configuration document.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON content cannot be parsed.
    pub fn from_json(content: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(content)?;
        Ok(config.normalized())
    }

    /// Applies environment overrides read through `lookup`.
    #[must_use]
    pub fn with_env(self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        self.with_overrides(non_empty(API_URL_ENV), non_empty(HISTORY_API_URL_ENV))
    }

    /// Applies explicit URL overrides (e.g. from CLI flags).
    #[must_use]
    pub fn with_overrides(mut self, api_url: Option<String>, history_url: Option<String>) -> Self {
        if let Some(url) = api_url {
            self.api_base_url = url;
        }
        if let Some(url) = history_url {
            self.history_api_url = url;
        }
        self.normalized()
    }

    fn normalized(mut self) -> Self {
        self.api_base_url = self.api_base_url.trim().trim_end_matches('/').to_string();
        self.history_api_url = self
            .history_api_url
            .trim()
            .trim_end_matches('/')
            .to_string();
        self
    }

    #[must_use]
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    /// Market refresh interval, never shorter than one second.
    #[must_use]
    pub fn market_poll_interval(&self) -> Duration {
        Duration::from_secs(self.market_poll_secs.max(1))
    }
}

// ============================================================================
// Tests
// ============================================================================
