//! Expense dialog
//!
//! A dialog for adding a new expense or editing an existing one. The same
//! form serves both modes; edit mode carries the target's stable id so the
//! record keeps its identity and position.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::{Expense, ExpenseId, Money};
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::TextInput;

use super::amount_input_string;

/// Which field is focused in the expense dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpenseField {
    #[default]
    Description,
    Amount,
}

impl ExpenseField {
    pub fn next(self) -> Self {
        match self {
            Self::Description => Self::Amount,
            Self::Amount => Self::Description,
        }
    }
}

/// State for the expense dialog
#[derive(Debug, Clone, Default)]
pub struct ExpenseFormState {
    /// The record being edited; None when adding
    pub editing: Option<ExpenseId>,
    /// Which field is focused
    pub focused_field: ExpenseField,
    /// Description input
    pub description: TextInput,
    /// Amount input
    pub amount: TextInput,
    /// Blocking validation error; cleared on the next edit
    pub error_message: Option<String>,
}

impl ExpenseFormState {
    /// Fresh form for adding a new expense
    pub fn for_add() -> Self {
        Self::default()
    }

    /// Form prefilled from an existing record
    pub fn for_edit(expense: &Expense) -> Self {
        Self {
            editing: Some(expense.id),
            focused_field: ExpenseField::Description,
            description: TextInput::with_content(expense.description.clone()),
            amount: TextInput::with_content(amount_input_string(expense.amount)),
            error_message: None,
        }
    }

    /// Move to the other field
    pub fn toggle_field(&mut self) {
        self.focused_field = self.focused_field.next();
    }

    /// Insert a character into the focused field
    ///
    /// The amount field only accepts digits and a decimal point.
    pub fn insert_char(&mut self, c: char) {
        match self.focused_field {
            ExpenseField::Description => self.description.insert(c),
            ExpenseField::Amount => {
                if c.is_ascii_digit() || c == '.' {
                    self.amount.insert(c);
                }
            }
        }
        self.error_message = None;
    }

    /// Delete the character before the cursor in the focused field
    pub fn backspace(&mut self) {
        match self.focused_field {
            ExpenseField::Description => self.description.backspace(),
            ExpenseField::Amount => self.amount.backspace(),
        }
        self.error_message = None;
    }

    /// Move the cursor in the focused field
    pub fn move_left(&mut self) {
        match self.focused_field {
            ExpenseField::Description => self.description.move_left(),
            ExpenseField::Amount => self.amount.move_left(),
        }
    }

    /// Move the cursor in the focused field
    pub fn move_right(&mut self) {
        match self.focused_field {
            ExpenseField::Description => self.description.move_right(),
            ExpenseField::Amount => self.amount.move_right(),
        }
    }

    /// Parse the amount input
    ///
    /// Unlike the salary field, a garbage amount here is a validation error,
    /// not a silent zero.
    pub fn parse_amount(&self) -> Result<Money, String> {
        Money::parse(self.amount.value()).map_err(|_| "Please enter a valid amount".to_string())
    }

    /// Set the blocking error message
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error_message = Some(message.into());
    }
}

/// Render the expense dialog
pub fn render(frame: &mut Frame, app: &App) {
    let state = &app.expense_form;

    let area = centered_rect_fixed(50, 11, frame.area());
    frame.render_widget(Clear, area);

    let title = if state.editing.is_some() {
        " Edit Expense "
    } else {
        " Add Expense "
    };
    let block = Block::default()
        .title(title)
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
            Constraint::Length(1), // Description label
            Constraint::Length(1), // Description input
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Amount label
            Constraint::Length(1), // Amount input
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Error
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

    let description_focused = state.focused_field == ExpenseField::Description;
    frame.render_widget(
        Paragraph::new(Span::styled("Description:", label_style(description_focused))),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new(state.description.line(description_focused)),
        chunks[1],
    );

    let amount_focused = state.focused_field == ExpenseField::Amount;
    frame.render_widget(
        Paragraph::new(Span::styled("Amount:", label_style(amount_focused))),
        chunks[3],
    );
    let amount_line = {
        let mut spans = vec![Span::raw(app.settings.currency_symbol.clone())];
        spans.extend(state.amount.line(amount_focused).spans);
        Line::from(spans)
    };
    frame.render_widget(Paragraph::new(amount_line), chunks[4]);

    if let Some(ref error) = state.error_message {
        frame.render_widget(
            Paragraph::new(Span::styled(
                error.clone(),
                Style::default().fg(Color::Red),
            )),
            chunks[6],
        );
    }

    let instructions = Line::from(vec![
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Save  "),
        Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
        Span::raw(" Cancel  "),
        Span::styled("[Tab]", Style::default().fg(Color::Cyan)),
        Span::raw(" Fields"),
    ]);
    frame.render_widget(Paragraph::new(instructions), chunks[7]);
}

/// Handle key events for the expense dialog
pub fn handle_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Esc => {
            // Cancel: input state is discarded, the ledger is untouched.
            app.close_dialog();
        }
        KeyCode::Tab | KeyCode::BackTab => app.expense_form.toggle_field(),
        KeyCode::Down => app.expense_form.focused_field = ExpenseField::Amount,
        KeyCode::Up => app.expense_form.focused_field = ExpenseField::Description,
        KeyCode::Enter => save(app)?,
        KeyCode::Char(c) => app.expense_form.insert_char(c),
        KeyCode::Backspace => app.expense_form.backspace(),
        KeyCode::Left => app.expense_form.move_left(),
        KeyCode::Right => app.expense_form.move_right(),
        _ => {}
    }
    Ok(())
}

/// Apply the form to the ledger
///
/// Validation failures stay inside the dialog as a blocking error; a
/// `NotFound` on edit means the input layer handed us a stale id and is
/// propagated as fatal.
fn save(app: &mut App) -> Result<()> {
    let amount = match app.expense_form.parse_amount() {
        Ok(amount) => amount,
        Err(message) => {
            app.expense_form.set_error(message);
            return Ok(());
        }
    };
    let description = app.expense_form.description.value().to_string();

    let result = match app.expense_form.editing {
        Some(id) => app.ledger.update_expense(id, &description, amount).map(|_| id),
        None => app.ledger.add_expense(&description, amount).map(|e| e.id),
    };

    match result {
        Ok(id) => {
            let verb = if app.expense_form.editing.is_some() {
                "updated"
            } else {
                "added"
            };
            app.set_status(format!("Expense {} ({})", verb, id));
            app.close_dialog();
            app.refresh();
            Ok(())
        }
        Err(e) if e.is_validation() => {
            app.expense_form.set_error(e.to_string());
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpenseId;

    #[test]
    fn test_for_edit_prefills() {
        let expense = Expense::new(ExpenseId::from_raw(4), "Rent", Money::from_cents(120000));
        let state = ExpenseFormState::for_edit(&expense);
        assert_eq!(state.editing, Some(expense.id));
        assert_eq!(state.description.value(), "Rent");
        assert_eq!(state.amount.value(), "1200.00");
    }

    #[test]
    fn test_amount_field_filters_characters() {
        let mut state = ExpenseFormState::for_add();
        state.focused_field = ExpenseField::Amount;
        for c in "1a2b.5x".chars() {
            state.insert_char(c);
        }
        assert_eq!(state.amount.value(), "12.5");
    }

    #[test]
    fn test_parse_amount_rejects_garbage() {
        let mut state = ExpenseFormState::for_add();
        state.focused_field = ExpenseField::Amount;
        state.insert_char('.');
        state.insert_char('.');
        assert!(state.parse_amount().is_err());
    }

    #[test]
    fn test_editing_clears_error() {
        let mut state = ExpenseFormState::for_add();
        state.set_error("Validation error: something");
        state.insert_char('x');
        assert!(state.error_message.is_none());
    }
}
