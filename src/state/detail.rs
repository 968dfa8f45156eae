//! Transaction detail page state.
//!
//! The page owns three independent concerns:
//!
//! - the transaction record, fetched whenever the identifier changes
//! - the market snapshot, refreshed by a [`MarketPoller`](super::MarketPoller)
//! - the state-change list, fetched whenever the "state" tab is entered
//!
//! All mutation goes through [`DetailState::apply`], which returns the
//! fetches the caller has to start. [`DetailState::view`] derives which of
//! the four page states is shown.

use chrono::{DateTime, Utc};

use super::fetch::{Concern, FetchState, RequestToken};
use crate::client::explorer::{STATE_CHANGES_FETCH_FAILED, TRANSACTION_FETCH_FAILED};
use crate::domain::{ApiError, EthereumData, StateChange, TransactionDetail};

// ============================================================================
// Tabs
// ============================================================================

/// Content tabs of a loaded transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailTab {
    #[default]
    Overview,
    State,
}

impl DetailTab {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Overview => Self::State,
            Self::State => Self::Overview,
        }
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::State => "State",
        }
    }
}

// ============================================================================
// Events and Effects
// ============================================================================

/// Inputs to the detail page state machine.
#[derive(Debug)]
pub enum DetailEvent {
    /// The route identifier changed (or became available).
    IdentifierChanged(Option<String>),
    /// The user selected a tab.
    TabSelected(DetailTab),
    TransactionLoaded {
        token: RequestToken,
        result: Result<TransactionDetail, ApiError>,
    },
    MarketUpdated {
        token: RequestToken,
        result: Result<EthereumData, ApiError>,
    },
    StateChangesLoaded {
        token: RequestToken,
        result: Result<Vec<StateChange>, ApiError>,
    },
}

/// Fetches requested by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailEffect {
    FetchTransaction { hash: String, token: RequestToken },
    FetchStateChanges { hash: String, token: RequestToken },
}

/// What the page renders, in precedence order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DetailView<'a> {
    Loading,
    Error(&'a str),
    NotFound,
    Loaded(&'a TransactionDetail),
}

// ============================================================================
// Market Feed
// ============================================================================

/// Most recent market snapshot.
///
/// Successful polls replace the snapshot wholesale; failed polls are logged
/// and leave it untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketFeed {
    token: RequestToken,
    snapshot: EthereumData,
    updated_at: Option<DateTime<Utc>>,
}

impl MarketFeed {
    fn new() -> Self {
        Self {
            token: RequestToken::next(),
            snapshot: EthereumData::default(),
            updated_at: None,
        }
    }

    /// Token the page's poller must tag its results with.
    #[must_use]
    pub const fn token(&self) -> RequestToken {
        self.token
    }

    #[must_use]
    pub const fn snapshot(&self) -> &EthereumData {
        &self.snapshot
    }

    #[must_use]
    pub const fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    fn apply(&mut self, token: RequestToken, result: Result<EthereumData, ApiError>) {
        if token != self.token {
            tracing::debug!("Ignoring market snapshot from a torn-down page");
            return;
        }
        match result {
            Ok(snapshot) => {
                self.snapshot = snapshot;
                self.updated_at = Some(Utc::now());
            }
            Err(e) => tracing::warn!("Market snapshot refresh failed: {e}"),
        }
    }
}

// ============================================================================
// Detail State
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct DetailState {
    identifier: Option<String>,
    transaction: Concern<TransactionDetail>,
    state_changes: Concern<Vec<StateChange>>,
    tab: DetailTab,
    market: MarketFeed,
}

impl Default for DetailState {
    fn default() -> Self {
        Self::new()
    }
}

impl DetailState {
    /// A page with no identifier yet.
    #[must_use]
    pub fn new() -> Self {
        Self {
            identifier: None,
            transaction: Concern::default(),
            state_changes: Concern::default(),
            tab: DetailTab::default(),
            market: MarketFeed::new(),
        }
    }

    #[must_use]
    pub fn identifier(&self) -> Option<&str> {
        self.identifier.as_deref()
    }

    #[must_use]
    pub const fn tab(&self) -> DetailTab {
        self.tab
    }

    #[must_use]
    pub const fn market(&self) -> &MarketFeed {
        &self.market
    }

    #[must_use]
    pub const fn state_changes(&self) -> &FetchState<Vec<StateChange>> {
        self.state_changes.state()
    }

    /// The loaded transaction, if any.
    #[must_use]
    pub const fn transaction(&self) -> Option<&TransactionDetail> {
        self.transaction.state().data()
    }

    /// Derive the page state: loading, then error, then not-found, then content.
    #[must_use]
    pub fn view(&self) -> DetailView<'_> {
        match self.transaction.state() {
            FetchState::Loading => DetailView::Loading,
            FetchState::Failed(message) => DetailView::Error(message),
            FetchState::Idle => DetailView::NotFound,
            FetchState::Loaded(txn) => DetailView::Loaded(txn),
        }
    }

    /// Apply one event and return the fetches it triggers.
    pub fn apply(&mut self, event: DetailEvent) -> Vec<DetailEffect> {
        match event {
            DetailEvent::IdentifierChanged(identifier) => self.set_identifier(identifier),
            DetailEvent::TabSelected(tab) => self.select_tab(tab),
            DetailEvent::TransactionLoaded { token, result } => {
                let result = result.map_err(|e| e.user_message(TRANSACTION_FETCH_FAILED));
                if let Err(message) = &result {
                    tracing::info!("Transaction load failed: {message}");
                }
                self.transaction.complete(token, result);
                Vec::new()
            }
            DetailEvent::MarketUpdated { token, result } => {
                self.market.apply(token, result);
                Vec::new()
            }
            DetailEvent::StateChangesLoaded { token, result } => {
                let result = result.map_err(|e| e.user_message(STATE_CHANGES_FETCH_FAILED));
                self.state_changes.complete(token, result);
                Vec::new()
            }
        }
    }

    fn set_identifier(&mut self, identifier: Option<String>) -> Vec<DetailEffect> {
        let identifier = identifier
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty());
        if identifier == self.identifier {
            return Vec::new();
        }

        self.identifier = identifier;
        self.state_changes.reset();

        let Some(hash) = self.identifier.clone() else {
            self.transaction.reset();
            return Vec::new();
        };

        let mut effects = vec![DetailEffect::FetchTransaction {
            hash: hash.clone(),
            token: self.transaction.begin(),
        }];
        if self.tab == DetailTab::State {
            effects.push(DetailEffect::FetchStateChanges {
                hash,
                token: self.state_changes.begin(),
            });
        }
        effects
    }

    fn select_tab(&mut self, tab: DetailTab) -> Vec<DetailEffect> {
        if tab == self.tab {
            return Vec::new();
        }
        self.tab = tab;

        match (tab, self.identifier.clone()) {
            (DetailTab::State, Some(hash)) => vec![DetailEffect::FetchStateChanges {
                hash,
                token: self.state_changes.begin(),
            }],
            _ => Vec::new(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
