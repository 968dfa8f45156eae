//! Application lifecycle management.
//!
//! - `new()` - builds clients and opens the startup page
//! - `run()` - main event loop
//! - `process_messages()` - feeds fetch results into the page state machines

use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use std::time::Instant;
use tokio::sync::mpsc;

use super::{App, AppConfig, AppMessage, HistoryState, Page, StartupPage, UiState};
use crate::client::Clients;
use crate::constants::TICK_RATE;
use crate::tui::Tui;
use crate::ui;

impl App {
    /// Creates the application and starts loading the startup page.
    ///
    /// Must be called from within a tokio runtime.
    ///
    /// # Errors
    /// Returns an error if the HTTP clients fail to initialize.
    pub fn new(config: AppConfig, startup: StartupPage) -> Result<Self> {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        let clients = Clients::from_config(&config)?;

        tracing::info!(
            api = %config.api_base_url,
            history = %config.history_api_url,
            "Starting txlens"
        );

        let mut app = Self {
            page: Page::History(HistoryState::default()),
            return_to: None,
            ui: UiState::new(),
            exit: false,
            config,
            clients,
            message_tx,
            message_rx,
        };

        match startup {
            StartupPage::Transaction(hash) => app.open_detail(hash),
            StartupPage::History(address) => app.open_history(address),
        }

        Ok(app)
    }

    /// Runs the main application loop.
    ///
    /// # Errors
    /// Returns an error if the terminal operations fail.
    pub async fn run(&mut self, terminal: &mut Tui) -> Result<()> {
        let mut last_tick = Instant::now();
        terminal.draw(|frame| ui::render(self, frame))?;

        while !self.exit {
            self.process_messages();

            let timeout = TICK_RATE.saturating_sub(last_tick.elapsed());
            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key)
                        if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) =>
                    {
                        self.handle_key_event(key);
                    }
                    Event::Resize(_, _) => {
                        terminal.draw(|frame| ui::render(self, frame))?;
                    }
                    _ => {}
                }
            }

            if last_tick.elapsed() >= TICK_RATE {
                self.ui.tick();
                terminal.draw(|frame| ui::render(self, frame))?;
                last_tick = Instant::now();
            }

            // Let fetch tasks make progress between frames.
            tokio::task::yield_now().await;
        }

        Ok(())
    }

    /// Drains pending fetch results.
    pub(crate) fn process_messages(&mut self) {
        while let Ok(message) = self.message_rx.try_recv() {
            match message {
                AppMessage::Detail(event) => {
                    let Page::Detail(detail) = &mut self.page else {
                        tracing::debug!("Dropping detail result: no detail page on screen");
                        continue;
                    };
                    let effects = detail.state.apply(event);
                    self.run_detail_effects(effects);
                }
                AppMessage::History(event) => {
                    let history = match (&mut self.page, &mut self.return_to) {
                        (Page::History(history), _) | (_, Some(history)) => history,
                        _ => continue,
                    };
                    let effects = history.apply(event);
                    self.run_history_effects(effects);
                }
            }
        }
    }
}
