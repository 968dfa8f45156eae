//! Footer bar with the key hints for the active page.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    widgets::Paragraph,
};

use crate::commands::InputContext;
use crate::theme::MUTED_COLOR;

#[must_use]
pub fn hints(context: InputContext, can_go_back: bool) -> &'static str {
    match (context, can_go_back) {
        (InputContext::Detail, true) => "Esc:Back  Tab:Switch tab  c:Copy hash  q:Quit",
        (InputContext::Detail, false) => "Tab:Switch tab  c:Copy hash  q:Quit",
        (InputContext::History, _) => {
            "↑↓:Select  Enter:Open  ←→:Page  c:Copy hash  q:Quit"
        }
    }
}

pub fn render(frame: &mut Frame, area: Rect, context: InputContext, can_go_back: bool) {
    let footer = Paragraph::new(hints(context, can_go_back))
        .style(Style::default().fg(MUTED_COLOR))
        .alignment(Alignment::Center);
    frame.render_widget(footer, area);
}
