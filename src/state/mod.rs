//! State management for the txlens TUI.
//!
//! - [`DetailState`] - transaction detail page (transaction, market, state changes)
//! - [`HistoryState`] - address history table with client-side pagination
//! - [`UiState`] - toasts
//! - [`AppConfig`] - resolved configuration
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                         App                          │
//! ├───────────────────────────┬──────────────────────────┤
//! │ Page::Detail              │ Page::History            │
//! │  - DetailState            │  - HistoryState          │
//! │  - MarketPoller (owned)   │  - Pagination            │
//! ├───────────────────────────┴──────────────────────────┤
//! │ fetch tasks ──AppMessage──▶ message_rx ──▶ apply()   │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! Fetch tasks never touch state directly; they post an [`AppMessage`]
//! carrying the request token, and the UI loop feeds it through the page's
//! transition function.

use tokio::sync::mpsc;

use crate::client::Clients;

// ============================================================================
// Module Declarations
// ============================================================================

mod app_commands;
mod app_lifecycle;

pub mod clipboard;
pub mod config;
pub mod detail;
pub mod fetch;
pub mod history;
pub mod poller;
pub mod ui_state;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::AppConfig;
pub use detail::{DetailEffect, DetailEvent, DetailState, DetailTab, DetailView};
pub use fetch::{FetchState, RequestToken};
pub use history::{HistoryEffect, HistoryEvent, HistoryState, Pagination};
pub use poller::MarketPoller;
pub use ui_state::UiState;

// ============================================================================
// App Message Types
// ============================================================================

/// Results posted by background fetch tasks to the main loop.
#[derive(Debug)]
pub enum AppMessage {
    Detail(DetailEvent),
    History(HistoryEvent),
}

// ============================================================================
// Pages
// ============================================================================

/// Page requested on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartupPage {
    /// Transaction detail for a hash.
    Transaction(String),
    /// History table for an address.
    History(String),
}

/// A detail page and the market poller bound to its lifetime.
#[derive(Debug)]
pub struct DetailPage {
    pub state: DetailState,
    _poller: MarketPoller,
}

/// The page currently on screen.
#[derive(Debug)]
pub enum Page {
    Detail(DetailPage),
    History(HistoryState),
}

// ============================================================================
// Main App State
// ============================================================================

#[derive(Debug)]
pub struct App {
    /// Page on screen.
    pub page: Page,

    /// History page to return to from a detail page opened from it.
    pub(crate) return_to: Option<HistoryState>,

    /// Toasts.
    pub ui: UiState,

    /// Whether the application should exit.
    pub exit: bool,

    pub(crate) config: AppConfig,

    pub(crate) clients: Clients,

    /// Sender cloned into spawned fetch tasks.
    pub(crate) message_tx: mpsc::UnboundedSender<AppMessage>,

    pub(crate) message_rx: mpsc::UnboundedReceiver<AppMessage>,
}

// ============================================================================
// Tests
// ============================================================================
