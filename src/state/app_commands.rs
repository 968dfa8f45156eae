//! Command execution and page transitions.
//!
//! Turns key input into page events and starts the fetches those events
//! request. Each fetch runs in its own task and reports back through
//! [`AppMessage`].

use crossterm::event::KeyEvent;

use super::clipboard;
use super::{
    App, AppMessage, DetailEffect, DetailEvent, DetailPage, DetailState, HistoryEffect,
    HistoryEvent, HistoryState, MarketPoller, Page,
};
use crate::commands::{AppCommand, InputContext, KeyMapper};
use crate::constants::TOAST_TICKS;

impl App {
    /// Which key bindings are active.
    #[must_use]
    pub fn input_context(&self) -> InputContext {
        match self.page {
            Page::Detail(_) => InputContext::Detail,
            Page::History(_) => InputContext::History,
        }
    }

    /// Whether `Back` on the current page returns to a history table.
    #[must_use]
    pub fn can_go_back(&self) -> bool {
        self.return_to.is_some()
    }

    pub(crate) fn handle_key_event(&mut self, key: KeyEvent) {
        let command = KeyMapper::map_key(key, self.input_context());
        self.execute(command);
    }

    pub(crate) fn execute(&mut self, command: AppCommand) {
        match command {
            AppCommand::Quit => self.exit = true,
            AppCommand::Back => self.go_back(),
            AppCommand::CopyHash => self.copy_hash(),
            AppCommand::SelectTab(tab) => self.apply_detail(DetailEvent::TabSelected(tab)),
            AppCommand::ToggleTab => {
                if let Page::Detail(detail) = &self.page {
                    let tab = detail.state.tab().toggled();
                    self.apply_detail(DetailEvent::TabSelected(tab));
                }
            }
            AppCommand::PreviousPage => self.apply_history(HistoryEvent::PreviousPage),
            AppCommand::NextPage => self.apply_history(HistoryEvent::NextPage),
            AppCommand::MoveUp => self.apply_history(HistoryEvent::SelectPrevious),
            AppCommand::MoveDown => self.apply_history(HistoryEvent::SelectNext),
            AppCommand::OpenSelected => self.open_selected(),
            AppCommand::Noop => {}
        }
    }

    // ========================================================================
    // Page Transitions
    // ========================================================================

    /// Replace the current page with the detail page for `hash`.
    pub(crate) fn open_detail(&mut self, hash: String) {
        tracing::info!("Opening transaction {hash}");
        let mut state = DetailState::new();
        let poller = MarketPoller::spawn(
            self.clients.explorer.clone(),
            state.market().token(),
            self.config.market_poll_interval(),
            self.message_tx.clone(),
        );
        let effects = state.apply(DetailEvent::IdentifierChanged(Some(hash)));

        let previous = std::mem::replace(
            &mut self.page,
            Page::Detail(DetailPage {
                state,
                _poller: poller,
            }),
        );
        if let Page::History(history) = previous {
            self.return_to = Some(history);
        }
        self.run_detail_effects(effects);
    }

    /// Replace the current page with the history table for `address`.
    pub(crate) fn open_history(&mut self, address: String) {
        tracing::info!("Opening history for {address}");
        let mut state = HistoryState::default();
        let effects = state.apply(HistoryEvent::AddressChanged(address));
        self.page = Page::History(state);
        self.return_to = None;
        self.run_history_effects(effects);
    }

    fn open_selected(&mut self) {
        let Page::History(history) = &self.page else {
            return;
        };
        let Some(selected) = history.selected_transaction() else {
            return;
        };
        match selected.hash.clone().filter(|hash| !hash.is_empty()) {
            Some(hash) => self.open_detail(hash),
            None => self
                .ui
                .show_toast("[x] Transaction has no hash", TOAST_TICKS),
        }
    }

    /// Leave a detail page. Dropping it stops its market poller.
    fn go_back(&mut self) {
        match self.return_to.take() {
            Some(history) => self.page = Page::History(history),
            None => self.exit = true,
        }
    }

    fn copy_hash(&mut self) {
        let hash = match &self.page {
            Page::Detail(detail) => detail.state.identifier().map(String::from),
            Page::History(history) => history.selected_transaction().and_then(|t| t.hash.clone()),
        };
        let Some(hash) = hash else {
            return;
        };

        match clipboard::copy_text(&hash) {
            Ok(()) => self.ui.show_toast("[+] Hash copied", TOAST_TICKS),
            Err(e) => self.ui.show_toast(format!("[x] {e}"), TOAST_TICKS),
        }
    }

    // ========================================================================
    // Event Dispatch
    // ========================================================================

    fn apply_detail(&mut self, event: DetailEvent) {
        if let Page::Detail(detail) = &mut self.page {
            let effects = detail.state.apply(event);
            self.run_detail_effects(effects);
        }
    }

    fn apply_history(&mut self, event: HistoryEvent) {
        if let Page::History(history) = &mut self.page {
            let effects = history.apply(event);
            self.run_history_effects(effects);
        }
    }

    // ========================================================================
    // Effects
    // ========================================================================

    pub(crate) fn run_detail_effects(&self, effects: Vec<DetailEffect>) {
        for effect in effects {
            let client = self.clients.explorer.clone();
            let message_tx = self.message_tx.clone();

            match effect {
                DetailEffect::FetchTransaction { hash, token } => {
                    tokio::spawn(async move {
                        let result = client.get_transaction_detail(&hash).await;
                        let _ = message_tx.send(AppMessage::Detail(
                            DetailEvent::TransactionLoaded { token, result },
                        ));
                    });
                }
                DetailEffect::FetchStateChanges { hash, token } => {
                    tokio::spawn(async move {
                        let result = client.get_state_changes(&hash).await;
                        let _ = message_tx.send(AppMessage::Detail(
                            DetailEvent::StateChangesLoaded { token, result },
                        ));
                    });
                }
            }
        }
    }

    pub(crate) fn run_history_effects(&mut self, effects: Vec<HistoryEffect>) {
        for effect in effects {
            match effect {
                HistoryEffect::Fetch { address, token } => {
                    let client = self.clients.history.clone();
                    let message_tx = self.message_tx.clone();
                    tokio::spawn(async move {
                        let result = client.get_transactions(&address).await;
                        let _ = message_tx
                            .send(AppMessage::History(HistoryEvent::Loaded { token, result }));
                    });
                }
                HistoryEffect::Notify(message) => {
                    self.ui.show_toast(format!("[x] {message}"), TOAST_TICKS);
                }
            }
        }
    }
}
