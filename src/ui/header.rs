//! Header bar: logo on the left, current page on the right.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style, Stylize},
    text::Line,
    widgets::Paragraph,
};

use crate::theme::PRIMARY_COLOR;

use super::helpers::create_border_block;

pub fn render(frame: &mut Frame, area: Rect, page_title: &str) {
    frame.render_widget(create_border_block("", false), area);
    if area.height <= 2 || area.width <= 4 {
        return;
    }

    let inner = Rect::new(area.x + 2, area.y + 1, area.width - 4, 1);
    frame.render_widget(Paragraph::new(logo()), inner);

    if area.width > 40 {
        let title = Paragraph::new(page_title.to_string())
            .style(
                Style::default()
                    .fg(PRIMARY_COLOR)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Right);
        frame.render_widget(title, inner);
    }
}

fn logo() -> Line<'static> {
    Line::from(vec!["[".into(), "tx".green().bold(), "lens".blue().bold(), "]".into()])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::helpers::buffer_to_string;
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn test_header_shows_logo_and_title() {
        let mut terminal = Terminal::new(TestBackend::new(60, 3)).unwrap();
        terminal
            .draw(|frame| render(frame, frame.area(), "History 0xaaaa...1234"))
            .unwrap();

        let content = buffer_to_string(terminal.backend().buffer());
        assert!(content.contains("[txlens]"));
        assert!(content.contains("History 0xaaaa...1234"));
    }

    #[test]
    fn test_narrow_header_hides_title() {
        let mut terminal = Terminal::new(TestBackend::new(30, 3)).unwrap();
        terminal
            .draw(|frame| render(frame, frame.area(), "Transaction"))
            .unwrap();

        let content = buffer_to_string(terminal.backend().buffer());
        assert!(content.contains("[txlens]"));
        assert!(!content.contains("Transaction"));
    }
}
