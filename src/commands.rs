//! Command pattern for key event handling.
//!
//! Key events are mapped to [`AppCommand`]s by [`KeyMapper`], a pure
//! function of the key and the current [`InputContext`], so bindings can be
//! tested without a terminal.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::state::DetailTab;

// ============================================================================
// Input Context
// ============================================================================

/// Which page currently receives input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// Transaction detail page.
    Detail,
    /// Address history table.
    History,
}

// ============================================================================
// App Commands
// ============================================================================

/// All commands the application can execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppCommand {
    /// Exit the application.
    Quit,
    /// Leave the current page (back to history, or quit at the root).
    Back,
    /// Copy the current/selected transaction hash.
    CopyHash,

    // === Detail Page ===
    /// Switch to a specific tab.
    SelectTab(DetailTab),
    /// Switch to the other tab.
    ToggleTab,

    // === History Page ===
    PreviousPage,
    NextPage,
    MoveUp,
    MoveDown,
    /// Open the selected row's transaction.
    OpenSelected,

    /// No operation (unrecognized key).
    Noop,
}

// ============================================================================
// Key Mapper
// ============================================================================

#[derive(Debug, Clone, Copy, Default)]
pub struct KeyMapper;

impl KeyMapper {
    /// Maps a key event to an application command based on the current context.
    #[must_use]
    pub fn map_key(key: KeyEvent, context: InputContext) -> AppCommand {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return AppCommand::Quit;
        }

        match context {
            InputContext::Detail => Self::map_detail_keys(key),
            InputContext::History => Self::map_history_keys(key),
        }
    }

    fn map_detail_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Char('q') => AppCommand::Quit,
            KeyCode::Esc | KeyCode::Backspace => AppCommand::Back,
            KeyCode::Tab | KeyCode::BackTab => AppCommand::ToggleTab,
            KeyCode::Char('1') | KeyCode::Char('o') => AppCommand::SelectTab(DetailTab::Overview),
            KeyCode::Char('2') | KeyCode::Char('s') => AppCommand::SelectTab(DetailTab::State),
            KeyCode::Char('c') => AppCommand::CopyHash,
            _ => AppCommand::Noop,
        }
    }

    fn map_history_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => AppCommand::Quit,
            KeyCode::Left | KeyCode::Char('h') | KeyCode::PageUp => AppCommand::PreviousPage,
            KeyCode::Right | KeyCode::Char('l') | KeyCode::PageDown => AppCommand::NextPage,
            KeyCode::Up | KeyCode::Char('k') => AppCommand::MoveUp,
            KeyCode::Down | KeyCode::Char('j') => AppCommand::MoveDown,
            KeyCode::Enter => AppCommand::OpenSelected,
            KeyCode::Char('c') => AppCommand::CopyHash,
            _ => AppCommand::Noop,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
