//! Colors and shared styles.

use ratatui::style::{Color, Modifier, Style};

/// Focused borders, links and selected tabs.
pub const PRIMARY_COLOR: Color = Color::Cyan;

/// Success status, low risk, positive differences.
pub const SUCCESS_COLOR: Color = Color::Green;

/// Field labels and medium risk.
pub const WARNING_COLOR: Color = Color::Yellow;

/// Failures, high risk, negative differences.
pub const ERROR_COLOR: Color = Color::Red;

pub const MUTED_COLOR: Color = Color::Gray;

pub const BORDER_STYLE: Style = Style::new().fg(Color::DarkGray);

pub const FOCUSED_BORDER_STYLE: Style = Style::new().fg(PRIMARY_COLOR);

pub const FOCUSED_TITLE_STYLE: Style = Style::new().fg(PRIMARY_COLOR).add_modifier(Modifier::BOLD);

/// Selected table row.
pub const HIGHLIGHT_STYLE: Style = Style::new()
    .bg(Color::DarkGray)
    .add_modifier(Modifier::BOLD);
