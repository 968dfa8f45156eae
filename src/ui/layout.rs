//! Layout calculations for the txlens TUI.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Height of the header area in terminal rows.
pub const HEADER_HEIGHT: u16 = 3;

/// Height of the footer area in terminal rows.
pub const FOOTER_HEIGHT: u16 = 1;

/// Main application layout areas.
#[derive(Debug, Clone, Copy)]
pub struct AppLayout {
    /// Logo and page title.
    pub header: Rect,
    /// Page content.
    pub main: Rect,
    /// Key hints.
    pub footer: Rect,
}

#[must_use]
pub fn calculate_app_layout(area: Rect) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(3),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(area);

    AppLayout {
        header: chunks[0],
        main: chunks[1],
        footer: chunks[2],
    }
}

/// A `width` x `height` rect centered in `parent`, clamped to fit.
#[must_use]
pub fn centered_area(parent: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(parent.width);
    let height = height.min(parent.height);
    let x = parent.x + (parent.width - width) / 2;
    let y = parent.y + (parent.height - height) / 2;
    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_app_layout() {
        let layout = calculate_app_layout(Rect::new(0, 0, 100, 50));

        assert_eq!(layout.header.height, HEADER_HEIGHT);
        assert_eq!(layout.footer.height, FOOTER_HEIGHT);
        assert_eq!(layout.main.height, 50 - HEADER_HEIGHT - FOOTER_HEIGHT);
    }

    #[test]
    fn test_centered_area() {
        let area = centered_area(Rect::new(0, 0, 100, 50), 40, 20);
        assert_eq!(area, Rect::new(30, 15, 40, 20));

        let clamped = centered_area(Rect::new(5, 5, 30, 10), 100, 50);
        assert_eq!(clamped, Rect::new(5, 5, 30, 10));
    }
}
