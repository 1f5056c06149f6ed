//! Salary dialog
//!
//! A dialog for setting the monthly salary. Follows the non-throwing policy
//! of the salary field: unparseable input is coerced to zero rather than
//! rejected.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::Money;
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::TextInput;

use super::amount_input_string;

/// State for the salary dialog
#[derive(Debug, Clone, Default)]
pub struct SalaryFormState {
    /// Amount input
    pub amount: TextInput,
}

impl SalaryFormState {
    /// Form prefilled with the current salary (empty when zero)
    pub fn prefilled(current: Money) -> Self {
        Self {
            amount: TextInput::with_content(amount_input_string(current)),
        }
    }
}

/// Render the salary dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect_fixed(44, 7, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Monthly Salary ")
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
            Constraint::Length(1), // Label
            Constraint::Length(1), // Input
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Instructions
            Constraint::Min(0),
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(Span::styled(
            "Amount:",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        chunks[0],
    );

    let mut spans = vec![Span::raw(app.settings.currency_symbol.clone())];
    spans.extend(app.salary_form.amount.line(true).spans);
    frame.render_widget(Paragraph::new(Line::from(spans)), chunks[1]);

    let instructions = Line::from(vec![
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Save  "),
        Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
        Span::raw(" Cancel"),
    ]);
    frame.render_widget(Paragraph::new(instructions), chunks[3]);
}

/// Handle key events for the salary dialog
pub fn handle_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.close_dialog(),
        KeyCode::Enter => {
            let salary = Money::parse_or_zero(app.salary_form.amount.value());
            app.ledger.set_monthly_salary(salary);
            app.close_dialog();
            app.refresh();
            app.set_status(format!(
                "Monthly salary set to {}",
                salary.format_with_symbol(&app.settings.currency_symbol)
            ));
        }
        KeyCode::Char(c) if c.is_ascii_digit() || c == '.' => {
            app.salary_form.amount.insert(c);
        }
        KeyCode::Backspace => app.salary_form.amount.backspace(),
        KeyCode::Left => app.salary_form.amount.move_left(),
        KeyCode::Right => app.salary_form.amount.move_right(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefilled_with_zero_is_empty() {
        let state = SalaryFormState::prefilled(Money::zero());
        assert!(state.amount.is_blank());
    }

    #[test]
    fn test_prefilled_with_salary() {
        let state = SalaryFormState::prefilled(Money::from_cents(500000));
        assert_eq!(state.amount.value(), "5000.00");
    }
}
