//! Shared helpers for styled blocks and display formatting.

use ratatui::{
    style::{Color, Modifier, Style},
    symbols::border,
    widgets::{Block, Borders},
};

use crate::constants::{ADDRESS_PREFIX_LEN, ADDRESS_SUFFIX_LEN, INVALID_ADDRESS};
use crate::theme::{BORDER_STYLE, FOCUSED_BORDER_STYLE, FOCUSED_TITLE_STYLE};

// ============================================================================
// Border Block Helpers
// ============================================================================

/// Bordered block; focused blocks get a double border and accent title.
#[must_use]
pub fn create_border_block(title: &str, focused: bool) -> Block<'static> {
    let display_title = if title.is_empty() {
        String::new()
    } else if focused {
        format!(" ● {title} ")
    } else {
        format!(" {title} ")
    };

    let block = Block::default().borders(Borders::ALL).title(display_title);
    if focused {
        block
            .border_set(border::DOUBLE)
            .border_style(FOCUSED_BORDER_STYLE)
            .title_style(FOCUSED_TITLE_STYLE)
    } else {
        block
            .border_set(border::ROUNDED)
            .border_style(BORDER_STYLE)
            .title_style(
                Style::new()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )
    }
}

// ============================================================================
// Formatting
// ============================================================================

/// Shorten an address to `0x1234...cdef`.
///
/// Empty input renders the "Invalid Address" placeholder. Short inputs still
/// get both halves, so `0x12` becomes `0x12...0x12`.
#[must_use]
pub fn truncate_address(address: &str) -> String {
    if address.is_empty() {
        return INVALID_ADDRESS.to_string();
    }

    let chars: Vec<char> = address.chars().collect();
    let prefix: String = chars[..chars.len().min(ADDRESS_PREFIX_LEN)].iter().collect();
    let suffix: String = chars[chars.len().saturating_sub(ADDRESS_SUFFIX_LEN)..]
        .iter()
        .collect();
    format!("{prefix}...{suffix}")
}

/// Elapsed time between `timestamp` and `now` (both unix seconds) in the
/// coarsest whole unit, e.g. `"1 hrs ago"`.
///
/// Timestamps in the future render as "Just now".
#[must_use]
pub fn relative_time(timestamp: i64, now: i64) -> String {
    const MINUTE: i64 = 60;
    const HOUR: i64 = 60 * MINUTE;
    const DAY: i64 = 24 * HOUR;

    let elapsed = now.saturating_sub(timestamp);
    match elapsed {
        i64::MIN..0 => "Just now".to_string(),
        0..MINUTE => format!("{elapsed} secs ago"),
        MINUTE..HOUR => format!("{} mins ago", elapsed / MINUTE),
        HOUR..DAY => format!("{} hrs ago", elapsed / HOUR),
        _ => format!("{} days ago", elapsed / DAY),
    }
}

/// Collect a test buffer into newline-separated rows.
#[cfg(test)]
pub fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    (area.y..area.y + area.height)
        .map(|y| {
            (area.x..area.x + area.width)
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend, layout::Rect};
    use rstest::rstest;

    #[rstest]
    #[case::empty("", "Invalid Address")]
    #[case::hex("0x1234567890abcdef", "0x1234...cdef")]
    #[case::full("0x5c504ed432cb51138bcf09aa5e8a410dd4a1e204", "0x5c50...e204")]
    #[case::short("0x1234", "0x1234...1234")]
    #[case::ten_chars("0x12345678", "0x1234...5678")]
    #[case::tiny("0x", "0x...0x")]
    #[case::multibyte("äöü0x12345678ß", "äöü0x1...678ß")]
    fn test_truncate_address(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(truncate_address(input), expected);
    }

    #[rstest]
    #[case::now(0, "0 secs ago")]
    #[case::seconds(59, "59 secs ago")]
    #[case::minute(60, "1 mins ago")]
    #[case::hour_floor(3661, "1 hrs ago")]
    #[case::day(86_400 * 3 + 5, "3 days ago")]
    #[case::future(-10, "Just now")]
    fn test_relative_time(#[case] elapsed: i64, #[case] expected: &str) {
        let now = 1_700_000_000;
        assert_eq!(relative_time(now - elapsed, now), expected);
    }

    #[test]
    fn test_border_block_titles() {
        let mut terminal = Terminal::new(TestBackend::new(30, 6)).unwrap();
        terminal
            .draw(|frame| {
                frame.render_widget(create_border_block("Overview", true), Rect::new(0, 0, 30, 3));
                frame.render_widget(create_border_block("State", false), Rect::new(0, 3, 30, 3));
            })
            .unwrap();

        let content = buffer_to_string(terminal.backend().buffer());
        assert!(content.contains("● Overview"));
        assert!(content.contains(" State "));
        assert!(content.starts_with('╔'));
    }
}
