//! Investment suggestions view
//!
//! Renders the current suggestion list as numbered entries. The list is
//! replaced wholesale on every recomputation, so this view never mutates it.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::app::App;

/// Render the suggestion panel
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Investment Suggestions ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    if app.suggestions.is_empty() {
        let text = Paragraph::new("No suggestions. Grow your savings and set a goal.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let lines: Vec<Line> = app
        .suggestions
        .iter()
        .enumerate()
        .map(|(index, suggestion)| {
            Line::from(vec![
                Span::styled(
                    format!("{}. ", index + 1),
                    Style::default().fg(Color::Yellow),
                ),
                Span::styled(
                    suggestion.category,
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(": "),
                Span::raw(suggestion.rationale),
            ])
        })
        .collect();

    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .wrap(ratatui::widgets::Wrap { trim: true }),
        area,
    );
}
