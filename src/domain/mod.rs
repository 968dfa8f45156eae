//! Domain types for the txlens explorer.
//!
//! # Module Organization
//!
//! - [`error`] - Error type shared by all fetch concerns
//! - [`transaction`] - Transaction detail record, gas metrics and risk level
//! - [`market`] - Market/gas-price snapshot
//! - [`state_change`] - Per-address state changes of a transaction
//! - [`history`] - Address history rows

// ============================================================================
// Module Declarations
// ============================================================================

pub mod error;
pub mod history;
pub mod lenient;
pub mod market;
pub mod state_change;
pub mod transaction;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::ApiError;
pub use history::{HistoryTransaction, parse_history};
pub use market::EthereumData;
pub use state_change::{StateChange, parse_state_changes};
pub use transaction::{GasMetrics, RiskLevel, TransactionDetail, format_timestamp};
