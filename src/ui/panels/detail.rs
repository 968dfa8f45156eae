//! Transaction detail page.
//!
//! Exactly one of four views is drawn, picked by [`DetailState::view`]:
//! a skeleton while loading, the error message, the not-found notice, or
//! the tabbed content. Content fields are never drawn under the first three.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table, Tabs, Wrap},
};

use crate::domain::{GasMetrics, RiskLevel, StateChange, TransactionDetail};
use crate::state::detail::MarketFeed;
use crate::state::{DetailState, DetailTab, DetailView, FetchState};
use crate::theme::{ERROR_COLOR, MUTED_COLOR, PRIMARY_COLOR, SUCCESS_COLOR, WARNING_COLOR};
use crate::ui::helpers::{create_border_block, truncate_address};
use crate::ui::layout::centered_area;

const LABEL_WIDTH: u16 = 16;
const SKELETON_ROWS: [&str; 8] = [
    "Hash", "Status", "Block", "Timestamp", "From", "To", "Value", "Fee",
];

pub fn render(frame: &mut Frame, area: Rect, state: &DetailState, can_go_back: bool) {
    match state.view() {
        DetailView::Loading => render_skeleton(frame, area),
        DetailView::Error(message) => render_notice(
            frame,
            area,
            Notice {
                icon: "✗",
                title: message,
                detail: "The explorer API could not return this transaction.",
                color: ERROR_COLOR,
            },
            can_go_back,
        ),
        DetailView::NotFound => render_notice(
            frame,
            area,
            Notice {
                icon: "?",
                title: "Transaction not found",
                detail: "No transaction hash was given.",
                color: WARNING_COLOR,
            },
            can_go_back,
        ),
        DetailView::Loaded(txn) => render_content(frame, area, state, txn),
    }
}

// ============================================================================
// Loading / Error / Not Found
// ============================================================================

fn render_skeleton(frame: &mut Frame, area: Rect) {
    let block = create_border_block("Transaction", false);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let placeholder = Style::default().fg(Color::DarkGray);
    let rows = SKELETON_ROWS.iter().map(|label| {
        Row::new(vec![
            Cell::from(format!("{label}:")).style(placeholder),
            Cell::from("░".repeat(24)).style(placeholder),
        ])
    });
    let table = Table::new(rows, [Constraint::Length(LABEL_WIDTH), Constraint::Min(10)])
        .column_spacing(2);

    let [status_area, table_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(1)])
        .areas(inner);
    frame.render_widget(
        Paragraph::new("Loading transaction...").style(Style::default().fg(MUTED_COLOR)),
        status_area,
    );
    frame.render_widget(table, table_area);
}

struct Notice<'a> {
    icon: &'static str,
    title: &'a str,
    detail: &'static str,
    color: Color,
}

fn render_notice(frame: &mut Frame, area: Rect, notice: Notice<'_>, can_go_back: bool) {
    let back = if can_go_back {
        "[Esc] Back to transactions"
    } else {
        "[q] Quit"
    };

    let lines = vec![
        Line::from(Span::styled(
            notice.icon,
            Style::default()
                .fg(notice.color)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            notice.title.to_string(),
            Style::default()
                .fg(notice.color)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(notice.detail, Style::default().fg(MUTED_COLOR))),
        Line::from(""),
        Line::from(Span::styled(back, Style::default().fg(PRIMARY_COLOR))),
    ];

    let box_area = centered_area(area, 60, 10);
    let block = create_border_block("", false);
    let inner = block.inner(box_area);
    frame.render_widget(block, box_area);
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        inner,
    );
}

// ============================================================================
// Content
// ============================================================================

fn render_content(frame: &mut Frame, area: Rect, state: &DetailState, txn: &TransactionDetail) {
    let [tabs_area, body_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .areas(area);

    let selected = match state.tab() {
        DetailTab::Overview => 0,
        DetailTab::State => 1,
    };
    let tabs = Tabs::new([DetailTab::Overview.title(), DetailTab::State.title()])
        .select(selected)
        .style(Style::default().fg(MUTED_COLOR))
        .highlight_style(
            Style::default()
                .fg(PRIMARY_COLOR)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        );
    frame.render_widget(tabs, tabs_area);

    match state.tab() {
        DetailTab::Overview => render_overview(frame, body_area, state.market(), txn),
        DetailTab::State => render_state_changes(frame, body_area, state.state_changes()),
    }
}

fn render_overview(frame: &mut Frame, area: Rect, market: &MarketFeed, txn: &TransactionDetail) {
    let [left, right] = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .areas(area);
    let [gas_area, market_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(10), Constraint::Length(6)])
        .areas(right);

    let fields = vec![
        field("Hash", txn.hash.clone()),
        field("Status", txn.status.clone())
            .style(Style::default().fg(status_color(&txn.status))),
        field("Block", format!("#{}", txn.block_number)),
        field("Timestamp", txn.formatted_timestamp()),
        field("From", txn.from.clone()),
        field("To", txn.to.clone()),
        field("Value", txn.value.clone()),
        field("Fee", txn.fee.clone()),
    ];
    render_fields(frame, left, "Overview", fields);
    render_gas(frame, gas_area, txn.gas_metrics.as_ref(), txn.risk_level());
    render_market(frame, market_area, market);
}

fn status_color(status: &str) -> Color {
    match status.trim().to_ascii_lowercase().as_str() {
        "success" | "confirmed" => SUCCESS_COLOR,
        "failed" | "failure" | "error" | "reverted" => ERROR_COLOR,
        "pending" => WARNING_COLOR,
        _ => Color::White,
    }
}

fn field(label: &str, value: String) -> Row<'static> {
    Row::new(vec![
        Cell::from(format!("{label}:")).style(
            Style::default()
                .fg(WARNING_COLOR)
                .add_modifier(Modifier::BOLD),
        ),
        Cell::from(value),
    ])
}

fn render_fields(frame: &mut Frame, area: Rect, title: &str, rows: Vec<Row<'static>>) {
    let table = Table::new(rows, [Constraint::Length(LABEL_WIDTH), Constraint::Min(10)])
        .block(create_border_block(title, true))
        .column_spacing(2);
    frame.render_widget(table, area);
}

fn render_gas(frame: &mut Frame, area: Rect, gas: Option<&GasMetrics>, risk: RiskLevel) {
    let Some(gas) = gas else {
        let block = create_border_block("Gas", false);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(
            Paragraph::new("No gas metrics").style(Style::default().fg(MUTED_COLOR)),
            inner,
        );
        return;
    };

    let usage = gas
        .usage_percent()
        .map_or_else(|| "-".to_string(), |percent| format!("{percent:.1}%"));
    let rows = vec![
        field("Gas Used", gas.gas_used.to_string()),
        field("Gas Limit", gas.gas_limit.to_string()),
        field("Usage", usage),
        field("Gas Price", gas.gas_price.clone()),
        field("Avg Gas Price", format!("{} Gwei", gas.avg_gas_price)),
        field("Efficiency", gas.gas_efficiency.clone()),
        field("Price Diff", gas.price_difference.clone()),
        Row::new(vec![
            Cell::from("Risk:").style(
                Style::default()
                    .fg(WARNING_COLOR)
                    .add_modifier(Modifier::BOLD),
            ),
            Cell::from(risk_badge(risk)),
        ]),
    ];
    render_fields(frame, area, "Gas", rows);
}

fn risk_color(risk: RiskLevel) -> Color {
    match risk {
        RiskLevel::Low => SUCCESS_COLOR,
        RiskLevel::Medium => WARNING_COLOR,
        RiskLevel::High => ERROR_COLOR,
    }
}

fn risk_badge(risk: RiskLevel) -> Span<'static> {
    Span::styled(
        format!(" {} ", risk.as_str().to_uppercase()),
        Style::default()
            .fg(Color::Black)
            .bg(risk_color(risk))
            .add_modifier(Modifier::BOLD),
    )
}

fn render_market(frame: &mut Frame, area: Rect, market: &MarketFeed) {
    let snapshot = market.snapshot();
    let change_color = if snapshot.change < 0.0 {
        ERROR_COLOR
    } else {
        SUCCESS_COLOR
    };
    let updated = market.updated_at().map_or_else(
        || "waiting for first update".to_string(),
        |at| format!("updated {}", at.format("%H:%M:%S UTC")),
    );

    let lines = vec![
        Line::from(vec![
            Span::styled("Price  ", Style::default().fg(WARNING_COLOR)),
            Span::raw(format!("${:.2}", snapshot.price)),
            Span::raw("  "),
            Span::styled(
                format!("{:+.2}%", snapshot.change),
                Style::default().fg(change_color),
            ),
        ]),
        Line::from(vec![
            Span::styled("Gas    ", Style::default().fg(WARNING_COLOR)),
            Span::raw(format!("{:.2} Gwei", snapshot.gas_price)),
        ]),
        Line::from(Span::styled(updated, Style::default().fg(MUTED_COLOR))),
    ];

    frame.render_widget(
        Paragraph::new(lines).block(create_border_block("Market", false)),
        area,
    );
}

fn render_state_changes(frame: &mut Frame, area: Rect, changes: &FetchState<Vec<StateChange>>) {
    let block = create_border_block("State Changes", true);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let message = |text: &str, color: Color| {
        Paragraph::new(text.to_string())
            .style(Style::default().fg(color))
            .alignment(Alignment::Center)
    };

    let changes = match changes {
        FetchState::Idle | FetchState::Loading => {
            frame.render_widget(message("Loading state changes...", MUTED_COLOR), inner);
            return;
        }
        FetchState::Failed(error) => {
            frame.render_widget(message(error.as_str(), ERROR_COLOR), inner);
            return;
        }
        FetchState::Loaded(changes) if changes.is_empty() => {
            frame.render_widget(message("No state changes", MUTED_COLOR), inner);
            return;
        }
        FetchState::Loaded(changes) => changes,
    };

    let header = Row::new(["Address", "Before", "After", "Difference"]).style(
        Style::default()
            .fg(WARNING_COLOR)
            .add_modifier(Modifier::BOLD),
    );
    let rows = changes.iter().map(|change| {
        let difference_color = if change.difference.trim_start().starts_with('-') {
            ERROR_COLOR
        } else {
            SUCCESS_COLOR
        };
        Row::new(vec![
            Cell::from(truncate_address(&change.address)).style(Style::default().fg(PRIMARY_COLOR)),
            Cell::from(change.before.clone()),
            Cell::from(change.after.clone()),
            Cell::from(change.difference.clone()).style(Style::default().fg(difference_color)),
        ])
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(15),
            Constraint::Min(12),
            Constraint::Min(12),
            Constraint::Min(12),
        ],
    )
    .header(header)
    .column_spacing(2);
    frame.render_widget(table, inner);
}
