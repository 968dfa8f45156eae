//! Application constants for the txlens TUI.
//!
//! Centralized values for pagination, polling, risk classification and
//! UI timing.

use std::time::Duration;

// ============================================================================
// Endpoint Defaults
// ============================================================================

/// Base URL for the detail, market and state-change endpoints.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Host serving the transactions-by-address endpoint.
pub const DEFAULT_HISTORY_API_URL: &str = "http://localhost:5000";

// ============================================================================
// Fetch Timing
// ============================================================================

/// Interval between market snapshot refreshes, in seconds.
pub const MARKET_POLL_SECS: u64 = 30;

/// UI redraw tick.
pub const TICK_RATE: Duration = Duration::from_millis(100);

/// Number of ticks a toast stays on screen (~3 seconds).
pub const TOAST_TICKS: u16 = 30;

// ============================================================================
// History
// ============================================================================

/// Rows per history page.
pub const HISTORY_PAGE_SIZE: usize = 50;

// ============================================================================
// Risk Classification
// ============================================================================

/// Risk score at or above which a transaction is high risk.
pub const HIGH_RISK_THRESHOLD: f64 = 80.0;

/// Risk score at or above which a transaction is medium risk.
pub const MEDIUM_RISK_THRESHOLD: f64 = 50.0;

// ============================================================================
// Display
// ============================================================================

/// Placeholder shown for a missing address.
pub const INVALID_ADDRESS: &str = "Invalid Address";

/// Leading characters kept when truncating an address.
pub const ADDRESS_PREFIX_LEN: usize = 6;

/// Trailing characters kept when truncating an address.
pub const ADDRESS_SUFFIX_LEN: usize = 4;
