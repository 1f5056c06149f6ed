//! Summary sidebar
//!
//! Shows the monthly salary, derived totals, and the two financial goals.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::app::App;

/// Render the sidebar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Budget ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let symbol = &app.settings.currency_symbol;
    let totals = &app.totals;

    let remaining_color = if totals.remaining.is_negative() {
        Color::Red
    } else {
        Color::Green
    };

    let amount_line = |label: &str, value: String, color: Color| {
        Line::from(vec![
            Span::styled(format!("{:<11}", label), Style::default().fg(Color::White)),
            Span::styled(value, Style::default().fg(color).add_modifier(Modifier::BOLD)),
        ])
    };

    let goal_line = |goal: &str| {
        if goal.is_empty() {
            Line::from(Span::styled("  (none)", Style::default().fg(Color::DarkGray)))
        } else {
            Line::from(Span::styled(
                format!("  {}", goal),
                Style::default().fg(Color::White),
            ))
        }
    };

    let lines = vec![
        Line::raw(""),
        amount_line(
            "Salary:",
            app.ledger.monthly_salary().format_with_symbol(symbol),
            Color::Cyan,
        ),
        amount_line("Spent:", totals.total.format_with_symbol(symbol), Color::Yellow),
        amount_line(
            "Remaining:",
            totals.remaining.format_with_symbol(symbol),
            remaining_color,
        ),
        amount_line("Savings:", totals.savings.format_with_symbol(symbol), Color::Green),
        Line::raw(""),
        Line::from(Span::styled(
            "Goals",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Short-term:",
            Style::default().fg(Color::Yellow),
        )),
        goal_line(app.ledger.short_term_goal()),
        Line::from(Span::styled(
            "Long-term:",
            Style::default().fg(Color::Yellow),
        )),
        goal_line(app.ledger.long_term_goal()),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
