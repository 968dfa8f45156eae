//! Fetch lifecycle tracking.
//!
//! Each independent fetch concern (a transaction lookup, a state-change
//! lookup, a history load) is a [`Concern`]: the current [`FetchState`] plus
//! the token of the most recently issued request. Results are only applied
//! when they carry that token, so a slow response for an old identifier can
//! never overwrite state after a newer request has started.

use std::sync::atomic::{AtomicU64, Ordering};

// ============================================================================
// Request Token
// ============================================================================

static NEXT_TOKEN: AtomicU64 = AtomicU64::new(1);

/// Identifies one issued request. Tokens are unique for the process lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    /// Issue a fresh token.
    #[must_use]
    pub fn next() -> Self {
        Self(NEXT_TOKEN.fetch_add(1, Ordering::Relaxed))
    }
}

// ============================================================================
// Fetch State
// ============================================================================

/// Lifecycle of a single fetch concern.
///
/// Loading and failure are separate variants, so a concern can never show
/// a stale error while a fresh request is in flight.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState<T> {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// A request is in flight.
    Loading,
    /// The latest request succeeded.
    Loaded(T),
    /// The latest request failed with a display message.
    Failed(String),
}

impl<T> FetchState<T> {
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub const fn data(&self) -> Option<&T> {
        match self {
            Self::Loaded(data) => Some(data),
            _ => None,
        }
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

// ============================================================================
// Concern
// ============================================================================

/// A fetch concern with stale-result protection.
#[derive(Debug, Clone, PartialEq)]
pub struct Concern<T> {
    state: FetchState<T>,
    latest: Option<RequestToken>,
}

impl<T> Default for Concern<T> {
    fn default() -> Self {
        Self {
            state: FetchState::Idle,
            latest: None,
        }
    }
}

impl<T> Concern<T> {
    #[must_use]
    pub const fn state(&self) -> &FetchState<T> {
        &self.state
    }

    /// Start a new request: moves to `Loading` and supersedes any request
    /// still in flight.
    pub fn begin(&mut self) -> RequestToken {
        let token = RequestToken::next();
        self.latest = Some(token);
        self.state = FetchState::Loading;
        token
    }

    /// Forget everything, including any in-flight request.
    pub fn reset(&mut self) {
        self.latest = None;
        self.state = FetchState::Idle;
    }

    /// Whether `token` belongs to the most recent request.
    #[must_use]
    pub fn is_current(&self, token: RequestToken) -> bool {
        self.latest == Some(token)
    }

    /// Apply a result. Returns `false` (and changes nothing) for stale tokens.
    pub fn complete(&mut self, token: RequestToken, result: Result<T, String>) -> bool {
        if !self.is_current(token) {
            tracing::debug!("Discarding stale result for {token:?}");
            return false;
        }
        self.state = match result {
            Ok(data) => FetchState::Loaded(data),
            Err(message) => FetchState::Failed(message),
        };
        true
    }
}
