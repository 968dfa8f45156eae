//! UI rendering for the txlens TUI.
//!
//! # Module Structure
//!
//! - `panels` - page bodies (transaction detail, address history)
//! - `components` - overlays (toast notifications)
//! - `layout` - layout calculations
//! - `header` / `footer` - chrome around the page
//! - `helpers` - styled blocks and display formatting

pub mod components;
pub mod footer;
pub mod header;
pub mod helpers;
pub mod layout;
pub mod panels;

use chrono::Utc;
use ratatui::Frame;

use crate::state::{App, Page};

use helpers::truncate_address;

/// Draw the whole screen for the current page.
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();
    let areas = layout::calculate_app_layout(size);

    header::render(frame, areas.header, &page_title(app));
    match &app.page {
        Page::Detail(detail) => {
            panels::detail::render(frame, areas.main, &detail.state, app.can_go_back());
        }
        Page::History(history) => {
            panels::history::render(frame, areas.main, history, Utc::now().timestamp());
        }
    }
    footer::render(frame, areas.footer, app.input_context(), app.can_go_back());

    if let Some(toast) = app.ui.toast() {
        components::render_toast(frame, size, toast.message());
    }
}

fn page_title(app: &App) -> String {
    match &app.page {
        Page::Detail(detail) => match detail.state.identifier() {
            Some(hash) => format!("Transaction {}", truncate_address(hash)),
            None => "Transaction".to_string(),
        },
        Page::History(history) => format!("History {}", truncate_address(history.address())),
    }
}
