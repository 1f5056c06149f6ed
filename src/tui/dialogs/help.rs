//! Help dialog
//!
//! Shows the key bindings. Any key closes it.

use crossterm::event::KeyEvent;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;

const BINDINGS: &[(&str, &str)] = &[
    ("a", "Add expense"),
    ("e / Enter", "Edit selected expense"),
    ("d", "Delete selected expense"),
    ("s", "Set monthly salary"),
    ("g", "Edit financial goals"),
    ("j / k, arrows", "Move selection"),
    ("?", "This help"),
    ("q", "Quit"),
];

/// Render the help dialog
pub fn render(frame: &mut Frame, _app: &App) {
    let area = centered_rect_fixed(46, BINDINGS.len() as u16 + 4, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let mut lines: Vec<Line> = BINDINGS
        .iter()
        .map(|(key, action)| {
            Line::from(vec![
                Span::styled(format!("  {:<14}", key), Style::default().fg(Color::Green)),
                Span::raw(*action),
            ])
        })
        .collect();
    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled(
        "  Press any key to close",
        Style::default().fg(Color::DarkGray),
    )));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Handle key events for the help dialog
pub fn handle_key(app: &mut App, _key: KeyEvent) {
    app.close_dialog();
}
