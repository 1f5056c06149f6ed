//! Goals dialog
//!
//! A dialog for editing the two free-text financial goals. Goal text is
//! stored trimmed and never validated; changing it still retriggers the
//! suggestion recomputation.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::TextInput;

/// Which field is focused in the goals dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GoalField {
    #[default]
    ShortTerm,
    LongTerm,
}

impl GoalField {
    pub fn next(self) -> Self {
        match self {
            Self::ShortTerm => Self::LongTerm,
            Self::LongTerm => Self::ShortTerm,
        }
    }
}

/// State for the goals dialog
#[derive(Debug, Clone, Default)]
pub struct GoalsFormState {
    /// Which field is focused
    pub focused_field: GoalField,
    /// Short-term goal input
    pub short_term: TextInput,
    /// Long-term goal input
    pub long_term: TextInput,
}

impl GoalsFormState {
    /// Form prefilled with the current goals
    pub fn prefilled(short_term: &str, long_term: &str) -> Self {
        Self {
            focused_field: GoalField::ShortTerm,
            short_term: TextInput::with_content(short_term),
            long_term: TextInput::with_content(long_term),
        }
    }

    fn focused_input(&mut self) -> &mut TextInput {
        match self.focused_field {
            GoalField::ShortTerm => &mut self.short_term,
            GoalField::LongTerm => &mut self.long_term,
        }
    }
}

/// Render the goals dialog
pub fn render(frame: &mut Frame, app: &App) {
    let state = &app.goals_form;

    let area = centered_rect_fixed(56, 10, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Financial Goals ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Short-term label
            Constraint::Length(1), // Short-term input
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Long-term label
            Constraint::Length(1), // Long-term input
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Instructions
            Constraint::Min(0),
        ])
        .split(inner);

    let label_style = |focused: bool| {
        if focused {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Yellow)
        }
    };

    let short_focused = state.focused_field == GoalField::ShortTerm;
    frame.render_widget(
        Paragraph::new(Span::styled(
            "Short-term goal:",
            label_style(short_focused),
        )),
        chunks[0],
    );
    frame.render_widget(Paragraph::new(state.short_term.line(short_focused)), chunks[1]);

    let long_focused = state.focused_field == GoalField::LongTerm;
    frame.render_widget(
        Paragraph::new(Span::styled("Long-term goal:", label_style(long_focused))),
        chunks[3],
    );
    frame.render_widget(Paragraph::new(state.long_term.line(long_focused)), chunks[4]);

    let instructions = Line::from(vec![
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Save  "),
        Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
        Span::raw(" Cancel  "),
        Span::styled("[Tab]", Style::default().fg(Color::Cyan)),
        Span::raw(" Fields"),
    ]);
    frame.render_widget(Paragraph::new(instructions), chunks[6]);
}

/// Handle key events for the goals dialog
pub fn handle_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.close_dialog(),
        KeyCode::Tab | KeyCode::BackTab => {
            app.goals_form.focused_field = app.goals_form.focused_field.next();
        }
        KeyCode::Down => app.goals_form.focused_field = GoalField::LongTerm,
        KeyCode::Up => app.goals_form.focused_field = GoalField::ShortTerm,
        KeyCode::Enter => {
            let short = app.goals_form.short_term.value().to_string();
            let long = app.goals_form.long_term.value().to_string();
            app.ledger.set_short_term_goal(&short);
            app.ledger.set_long_term_goal(&long);
            app.close_dialog();
            app.refresh();
            app.set_status("Goals updated");
        }
        KeyCode::Char(c) => app.goals_form.focused_input().insert(c),
        KeyCode::Backspace => app.goals_form.focused_input().backspace(),
        KeyCode::Left => app.goals_form.focused_input().move_left(),
        KeyCode::Right => app.goals_form.focused_input().move_right(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefilled() {
        let state = GoalsFormState::prefilled("Emergency Fund", "Retirement");
        assert_eq!(state.short_term.value(), "Emergency Fund");
        assert_eq!(state.long_term.value(), "Retirement");
        assert_eq!(state.focused_field, GoalField::ShortTerm);
    }

    #[test]
    fn test_field_cycle() {
        assert_eq!(GoalField::ShortTerm.next(), GoalField::LongTerm);
        assert_eq!(GoalField::LongTerm.next(), GoalField::ShortTerm);
    }
}
