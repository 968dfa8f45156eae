//! Address history page state.
//!
//! The full history of an address is fetched once and held in memory;
//! [`Pagination`] is a pure view over that list.

use std::ops::Range;

use super::fetch::{Concern, FetchState, RequestToken};
use crate::client::history::HISTORY_FETCH_FAILED;
use crate::constants::HISTORY_PAGE_SIZE;
use crate::domain::{ApiError, HistoryTransaction};

// ============================================================================
// Pagination
// ============================================================================

/// One-based page cursor over an in-memory list.
///
/// An empty list still has one (empty) page, so the cursor always reads
/// "Page 1 of 1" rather than "Page 1 of 0".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    current: usize,
    total: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            current: 1,
            total: 1,
        }
    }
}

impl Pagination {
    /// Number of pages needed for `len` rows.
    #[must_use]
    pub const fn total_pages_for(len: usize) -> usize {
        let pages = len.div_ceil(HISTORY_PAGE_SIZE);
        if pages == 0 { 1 } else { pages }
    }

    #[must_use]
    pub const fn current(&self) -> usize {
        self.current
    }

    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.current > 1
    }

    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.current < self.total
    }

    /// Recompute the page count for a new list, keeping the cursor in range.
    pub fn set_len(&mut self, len: usize) {
        self.total = Self::total_pages_for(len);
        self.current = self.current.clamp(1, self.total);
    }

    /// Step back one page. Returns `false` at the first page.
    pub fn previous(&mut self) -> bool {
        if !self.has_previous() {
            return false;
        }
        self.current -= 1;
        true
    }

    /// Step forward one page. Returns `false` at the last page.
    pub fn next(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.current += 1;
        true
    }

    /// Index range of the current page within a list of `len` rows.
    #[must_use]
    pub fn range(&self, len: usize) -> Range<usize> {
        let start = ((self.current - 1) * HISTORY_PAGE_SIZE).min(len);
        let end = (start + HISTORY_PAGE_SIZE).min(len);
        start..end
    }

    #[must_use]
    pub fn label(&self) -> String {
        format!("Page {} of {}", self.current, self.total)
    }
}

// ============================================================================
// Events and Effects
// ============================================================================

/// Inputs to the history page state machine.
#[derive(Debug)]
pub enum HistoryEvent {
    AddressChanged(String),
    Loaded {
        token: RequestToken,
        result: Result<Vec<HistoryTransaction>, ApiError>,
    },
    PreviousPage,
    NextPage,
    SelectPrevious,
    SelectNext,
}

/// Work requested by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryEffect {
    Fetch {
        address: String,
        token: RequestToken,
    },
    /// Show a transient notification.
    Notify(String),
}

// ============================================================================
// History State
// ============================================================================

#[derive(Debug, Clone, PartialEq, Default)]
pub struct HistoryState {
    address: String,
    transactions: Concern<Vec<HistoryTransaction>>,
    pagination: Pagination,
    /// Selected row, relative to the current page.
    selected: Option<usize>,
}

impl HistoryState {
    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    #[must_use]
    pub const fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.transactions.state().is_loading()
    }

    #[must_use]
    pub const fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// The full, unpaginated list. Empty unless the latest load succeeded.
    #[must_use]
    pub fn all_transactions(&self) -> &[HistoryTransaction] {
        match self.transactions.state() {
            FetchState::Loaded(rows) => rows,
            _ => &[],
        }
    }

    /// Rows on the current page.
    #[must_use]
    pub fn page_rows(&self) -> &[HistoryTransaction] {
        let rows = self.all_transactions();
        &rows[self.pagination.range(rows.len())]
    }

    #[must_use]
    pub fn selected_transaction(&self) -> Option<&HistoryTransaction> {
        self.selected.and_then(|index| self.page_rows().get(index))
    }

    /// Apply one event and return the work it triggers.
    pub fn apply(&mut self, event: HistoryEvent) -> Vec<HistoryEffect> {
        match event {
            HistoryEvent::AddressChanged(address) => self.set_address(address),
            HistoryEvent::Loaded { token, result } => self.finish_load(token, result),
            HistoryEvent::PreviousPage => {
                if self.pagination.previous() {
                    self.reset_selection();
                }
                Vec::new()
            }
            HistoryEvent::NextPage => {
                if self.pagination.next() {
                    self.reset_selection();
                }
                Vec::new()
            }
            HistoryEvent::SelectPrevious => {
                self.selected = self.selected.map(|index| index.saturating_sub(1));
                Vec::new()
            }
            HistoryEvent::SelectNext => {
                let last = self.page_rows().len().checked_sub(1);
                self.selected = match (self.selected, last) {
                    (_, None) => None,
                    (None, Some(_)) => Some(0),
                    (Some(index), Some(last)) => Some((index + 1).min(last)),
                };
                Vec::new()
            }
        }
    }

    fn set_address(&mut self, address: String) -> Vec<HistoryEffect> {
        let address = address.trim().to_string();
        if address == self.address && self.transactions.state() != &FetchState::Idle {
            return Vec::new();
        }

        self.address = address;
        self.pagination = Pagination::default();
        self.selected = None;

        if self.address.is_empty() {
            self.transactions.reset();
            return Vec::new();
        }

        vec![HistoryEffect::Fetch {
            address: self.address.clone(),
            token: self.transactions.begin(),
        }]
    }

    fn finish_load(
        &mut self,
        token: RequestToken,
        result: Result<Vec<HistoryTransaction>, ApiError>,
    ) -> Vec<HistoryEffect> {
        match result {
            Ok(rows) => {
                let len = rows.len();
                if self.transactions.complete(token, Ok(rows)) {
                    self.pagination.set_len(len);
                    self.reset_selection();
                }
                Vec::new()
            }
            Err(e) => {
                let message = e.user_message(HISTORY_FETCH_FAILED);
                if !self.transactions.complete(token, Err(message.clone())) {
                    return Vec::new();
                }
                tracing::warn!("History load for {} failed: {message}", self.address);
                vec![HistoryEffect::Notify(message)]
            }
        }
    }

    fn reset_selection(&mut self) {
        self.selected = (!self.page_rows().is_empty()).then_some(0);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::HistoryMother;
    use rstest::rstest;

    fn fetch_token(effects: &[HistoryEffect]) -> RequestToken {
        match effects.first() {
            Some(HistoryEffect::Fetch { token, .. }) => *token,
            other => panic!("expected fetch, got {other:?}"),
        }
    }

    fn loaded(len: usize) -> HistoryState {
        let mut state = HistoryState::default();
        let token = fetch_token(&state.apply(HistoryEvent::AddressChanged("0xowner".into())));
        state.apply(HistoryEvent::Loaded {
            token,
            result: Ok(HistoryMother::rows(len)),
        });
        state
    }

    #[rstest]
    #[case::empty(0, 1)]
    #[case::one(1, 1)]
    #[case::exact_page(50, 1)]
    #[case::one_over(51, 2)]
    #[case::spec_example(120, 3)]
    #[case::exact_pages(150, 3)]
    fn test_total_pages(#[case] len: usize, #[case] expected: usize) {
        assert_eq!(Pagination::total_pages_for(len), expected);
    }

    #[test]
    fn test_pagination_bounds() {
        let mut pagination = Pagination::default();
        pagination.set_len(120);
        assert_eq!(pagination.label(), "Page 1 of 3");
        assert!(!pagination.has_previous());
        assert!(!pagination.previous());
        assert_eq!(pagination.current(), 1);

        assert!(pagination.next());
        assert!(pagination.next());
        assert_eq!(pagination.current(), 3);
        assert!(!pagination.has_next());
        assert!(!pagination.next());
        assert_eq!(pagination.current(), 3);
        assert_eq!(pagination.range(120), 100..120);
    }

    #[test]
    fn test_empty_list_has_single_inert_page() {
        let state = loaded(0);
        assert_eq!(state.pagination().label(), "Page 1 of 1");
        assert!(!state.pagination().has_previous());
        assert!(!state.pagination().has_next());
        assert!(state.page_rows().is_empty());
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn test_address_change_fetches_once() {
        let mut state = HistoryState::default();
        let effects = state.apply(HistoryEvent::AddressChanged("0xowner".into()));
        assert!(matches!(
            &effects[..],
            [HistoryEffect::Fetch { address, .. }] if address == "0xowner"
        ));
        assert!(state.is_loading());

        let effects = state.apply(HistoryEvent::AddressChanged("0xowner".into()));
        assert!(effects.is_empty());
    }

    #[test]
    fn test_paging_slices_loaded_list_without_fetching() {
        let mut state = loaded(120);
        assert_eq!(state.page_rows().len(), 50);
        assert_eq!(state.page_rows()[0].hash.as_deref(), Some("0x0"));

        let effects = state.apply(HistoryEvent::NextPage);
        assert!(effects.is_empty());
        assert_eq!(state.pagination().current(), 2);
        assert_eq!(state.page_rows()[0].hash.as_deref(), Some("0x50"));

        state.apply(HistoryEvent::NextPage);
        assert_eq!(state.page_rows().len(), 20);

        state.apply(HistoryEvent::NextPage);
        assert_eq!(state.pagination().current(), 3);

        state.apply(HistoryEvent::PreviousPage);
        state.apply(HistoryEvent::PreviousPage);
        state.apply(HistoryEvent::PreviousPage);
        assert_eq!(state.pagination().current(), 1);
    }

    #[test]
    fn test_failure_notifies_and_keeps_page_state() {
        let mut state = loaded(120);
        state.apply(HistoryEvent::NextPage);

        // Same address again after a load is a no-op, so simulate a reload
        // by issuing a fresh request on the concern directly.
        let token = state.transactions.begin();
        let effects = state.apply(HistoryEvent::Loaded {
            token,
            result: Err(ApiError::fetch_failed("Rate limit")),
        });

        assert_eq!(effects, vec![HistoryEffect::Notify("Rate limit".into())]);
        assert!(state.all_transactions().is_empty());
        assert_eq!(state.pagination().current(), 2);
    }

    #[test]
    fn test_network_failure_uses_generic_message() {
        let mut state = HistoryState::default();
        let token = fetch_token(&state.apply(HistoryEvent::AddressChanged("0xowner".into())));
        let effects = state.apply(HistoryEvent::Loaded {
            token,
            result: Err(ApiError::parse("eof")),
        });
        assert_eq!(
            effects,
            vec![HistoryEffect::Notify(HISTORY_FETCH_FAILED.into())]
        );
    }

    #[test]
    fn test_stale_load_for_previous_address_is_ignored() {
        let mut state = HistoryState::default();
        let old = fetch_token(&state.apply(HistoryEvent::AddressChanged("0xold".into())));
        let new = fetch_token(&state.apply(HistoryEvent::AddressChanged("0xnew".into())));

        let effects = state.apply(HistoryEvent::Loaded {
            token: old,
            result: Err(ApiError::fetch_failed("late failure")),
        });
        assert!(effects.is_empty(), "stale failures must not notify");
        assert!(state.is_loading());

        state.apply(HistoryEvent::Loaded {
            token: new,
            result: Ok(HistoryMother::rows(3)),
        });
        assert_eq!(state.all_transactions().len(), 3);
    }

    #[test]
    fn test_address_change_resets_page() {
        let mut state = loaded(120);
        state.apply(HistoryEvent::NextPage);
        state.apply(HistoryEvent::AddressChanged("0xother".into()));
        assert_eq!(state.pagination().current(), 1);
        assert!(state.is_loading());
    }

    #[test]
    fn test_row_selection_stays_on_page() {
        let mut state = loaded(3);
        assert_eq!(state.selected(), Some(0));

        state.apply(HistoryEvent::SelectPrevious);
        assert_eq!(state.selected(), Some(0));

        for _ in 0..5 {
            state.apply(HistoryEvent::SelectNext);
        }
        assert_eq!(state.selected(), Some(2));
        assert_eq!(
            state.selected_transaction().and_then(|t| t.hash.as_deref()),
            Some("0x2")
        );
    }
}
