//! Address history table with pagination controls.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table, TableState},
};

use crate::domain::{HistoryTransaction, format_timestamp};
use crate::state::{HistoryState, Pagination};
use crate::theme::{HIGHLIGHT_STYLE, MUTED_COLOR, PRIMARY_COLOR, SUCCESS_COLOR, WARNING_COLOR};
use crate::ui::helpers::{create_border_block, relative_time, truncate_address};

const COLUMN_WIDTHS: [Constraint; 6] = [
    Constraint::Length(14),
    Constraint::Length(12),
    Constraint::Length(14),
    Constraint::Length(14),
    Constraint::Length(12),
    Constraint::Min(12),
];

/// Render the table for `state`; `now` is the current unix time used for ages.
pub fn render(frame: &mut Frame, area: Rect, state: &HistoryState, now: i64) {
    let block = create_border_block("Transactions", true);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [table_area, summary_area, controls_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

    let rows = state.page_rows();
    if state.is_loading() {
        render_message(frame, table_area, "Loading transactions...", MUTED_COLOR);
    } else if rows.is_empty() {
        render_message(frame, table_area, "No transactions found", MUTED_COLOR);
    } else {
        render_table(frame, table_area, rows, state.selected(), now);
    }

    if let Some(txn) = state.selected_transaction() {
        frame.render_widget(Paragraph::new(selection_summary(txn)), summary_area);
    }

    render_controls(frame, controls_area, state.pagination());
}

fn render_message(frame: &mut Frame, area: Rect, message: &str, color: Color) {
    let paragraph = Paragraph::new(message)
        .style(Style::default().fg(color))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn render_table(
    frame: &mut Frame,
    area: Rect,
    rows: &[HistoryTransaction],
    selected: Option<usize>,
    now: i64,
) {
    let header = Row::new(["Hash", "Method", "From", "To", "Amount", "Age"]).style(
        Style::default()
            .fg(WARNING_COLOR)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = rows.iter().map(|txn| table_row(txn, now)).collect();
    let table = Table::new(rows, COLUMN_WIDTHS)
        .header(header)
        .column_spacing(1)
        .row_highlight_style(HIGHLIGHT_STYLE);

    let mut table_state = TableState::default().with_selected(selected);
    frame.render_stateful_widget(table, area, &mut table_state);
}

fn table_row(txn: &HistoryTransaction, now: i64) -> Row<'static> {
    let hash = txn
        .hash
        .as_deref()
        .map_or_else(|| "-".to_string(), truncate_address);
    let method = txn.method.clone().unwrap_or_else(|| "-".to_string());
    let amount_color = if txn.amount > 0.0 {
        SUCCESS_COLOR
    } else {
        MUTED_COLOR
    };

    Row::new(vec![
        Cell::from(hash).style(Style::default().fg(PRIMARY_COLOR)),
        Cell::from(method),
        Cell::from(truncate_address(&txn.from)),
        Cell::from(truncate_address(&txn.to)),
        Cell::from(format!("{:.4}", txn.amount)).style(Style::default().fg(amount_color)),
        Cell::from(relative_time(txn.timestamp, now)).style(Style::default().fg(MUTED_COLOR)),
    ])
}

/// Block, fee and absolute time of the highlighted row.
fn selection_summary(txn: &HistoryTransaction) -> Line<'static> {
    let label = Style::default().fg(WARNING_COLOR);
    let block = txn
        .block
        .map_or_else(|| "-".to_string(), |block| format!("#{block}"));
    let fee = txn.fee.clone().unwrap_or_else(|| "-".to_string());

    Line::from(vec![
        Span::styled("Block ", label),
        Span::raw(block),
        Span::styled("  Fee ", label),
        Span::raw(fee),
        Span::styled("  Time ", label),
        Span::raw(format_timestamp(&txn.timestamp.to_string())),
    ])
}

/// `< Prev  Page X of Y  Next >`, each button dimmed at its bound.
fn render_controls(frame: &mut Frame, area: Rect, pagination: &Pagination) {
    let button = |label: &'static str, enabled: bool| {
        let style = if enabled {
            Style::default()
                .fg(PRIMARY_COLOR)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::DIM)
        };
        Span::styled(label, style)
    };

    let line = Line::from(vec![
        button("< Prev", pagination.has_previous()),
        Span::raw("  "),
        Span::styled(pagination.label(), Style::default().fg(Color::White)),
        Span::raw("  "),
        button("Next >", pagination.has_next()),
    ]);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}
