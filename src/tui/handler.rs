//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate handlers based on the current
//! application state. Handlers are thin adapters: they translate a key into
//! a ledger call, then let `App::refresh` recompute totals and suggestions
//! before the next frame renders.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => Ok(()),
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    // A new keypress invalidates the previous status message.
    app.clear_status();

    // Dialogs capture all input while open.
    match app.active_dialog {
        ActiveDialog::AddExpense | ActiveDialog::EditExpense(_) => {
            return dialogs::expense::handle_key(app, key);
        }
        ActiveDialog::Salary => {
            dialogs::salary::handle_key(app, key);
            return Ok(());
        }
        ActiveDialog::Goals => {
            dialogs::goals::handle_key(app, key);
            return Ok(());
        }
        ActiveDialog::Help => {
            dialogs::help::handle_key(app, key);
            return Ok(());
        }
        ActiveDialog::None => {}
    }

    handle_normal_key(app, key)
}

/// Handle keys in normal (no dialog) mode
fn handle_normal_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),

        // Help
        KeyCode::Char('?') => app.open_dialog(ActiveDialog::Help),

        // Navigation
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),

        // Add expense
        KeyCode::Char('a') | KeyCode::Char('n') => app.open_dialog(ActiveDialog::AddExpense),

        // Edit selected expense
        KeyCode::Char('e') | KeyCode::Enter => {
            if let Some(expense) = app.selected_expense() {
                app.open_dialog(ActiveDialog::EditExpense(expense.id));
            }
        }

        // Delete selected expense
        KeyCode::Char('d') | KeyCode::Delete => {
            if let Some(expense) = app.selected_expense() {
                // The id comes from the live selection; NotFound here is a
                // sequencing bug and propagates as fatal.
                let removed = app.ledger.remove_expense(expense.id)?;
                app.refresh();
                app.set_status(format!(
                    "Deleted '{}' ({})",
                    removed.description,
                    removed
                        .amount
                        .format_with_symbol(&app.settings.currency_symbol)
                ));
            }
        }

        // Set monthly salary
        KeyCode::Char('s') => app.open_dialog(ActiveDialog::Salary),

        // Edit goals
        KeyCode::Char('g') => app.open_dialog(ActiveDialog::Goals),

        _ => {}
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::ledger::Ledger;
    use crate::models::Money;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_event(app, key(code)).unwrap();
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_quit() {
        let settings = Settings::default();
        let mut app = App::new(&settings, Ledger::new());
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_add_expense_through_dialog() {
        let settings = Settings::default();
        let mut app = App::new(&settings, Ledger::with_salary(Money::from_dollars(5000)));

        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.active_dialog, ActiveDialog::AddExpense);

        type_str(&mut app, "Rent");
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "1200");
        press(&mut app, KeyCode::Enter);

        assert!(!app.has_dialog());
        assert_eq!(app.ledger.expenses().len(), 1);
        assert_eq!(app.totals.total, Money::from_dollars(1200));
        assert_eq!(app.totals.remaining, Money::from_dollars(3800));
        assert_eq!(app.totals.savings, Money::from_dollars(3800));
        assert!(app.suggestions.is_empty());
    }

    #[test]
    fn test_add_rejects_empty_description_and_keeps_dialog_open() {
        let settings = Settings::default();
        let mut app = App::new(&settings, Ledger::new());

        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "25");
        press(&mut app, KeyCode::Enter);

        assert!(app.has_dialog(), "dialog stays open on validation failure");
        assert!(app.expense_form.error_message.is_some());
        assert!(app.ledger.expenses().is_empty());
        assert_eq!(app.expense_form.amount.value(), "25", "input preserved");
    }

    #[test]
    fn test_add_rejects_bad_amount() {
        let settings = Settings::default();
        let mut app = App::new(&settings, Ledger::new());

        press(&mut app, KeyCode::Char('a'));
        type_str(&mut app, "Coffee");
        press(&mut app, KeyCode::Enter); // amount empty

        assert!(app.has_dialog());
        assert!(app.ledger.expenses().is_empty());
    }

    #[test]
    fn test_edit_selected_expense() {
        let settings = Settings::default();
        let mut ledger = Ledger::new();
        let id = ledger.add_expense("Rent", Money::from_dollars(1200)).unwrap().id;
        let mut app = App::new(&settings, ledger);

        press(&mut app, KeyCode::Char('e'));
        assert_eq!(app.active_dialog, ActiveDialog::EditExpense(id));

        // Move focus to the amount field and replace the prefilled value.
        press(&mut app, KeyCode::Tab);
        app.expense_form.amount.clear();
        type_str(&mut app, "1350");
        press(&mut app, KeyCode::Enter);

        assert!(!app.has_dialog());
        let expense = app.ledger.expense(id).unwrap();
        assert_eq!(expense.amount, Money::from_dollars(1350));
        assert_eq!(app.totals.total, Money::from_dollars(1350));
    }

    #[test]
    fn test_cancel_edit_leaves_ledger_untouched() {
        let settings = Settings::default();
        let mut ledger = Ledger::new();
        let id = ledger.add_expense("Rent", Money::from_dollars(1200)).unwrap().id;
        let mut app = App::new(&settings, ledger);

        press(&mut app, KeyCode::Char('e'));
        type_str(&mut app, " something else");
        press(&mut app, KeyCode::Esc);

        assert!(!app.has_dialog());
        assert_eq!(app.ledger.expense(id).unwrap().description, "Rent");
    }

    #[test]
    fn test_delete_selected_expense() {
        let settings = Settings::default();
        let mut ledger = Ledger::with_salary(Money::from_dollars(5000));
        ledger.add_expense("Rent", Money::from_dollars(1200)).unwrap();
        ledger.add_expense("Food", Money::from_dollars(300)).unwrap();
        let mut app = App::new(&settings, ledger);

        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('d'));

        assert_eq!(app.ledger.expenses().len(), 1);
        assert_eq!(app.totals.total, Money::from_dollars(1200));
        assert!(app.status_message.as_deref().unwrap().contains("Food"));
    }

    #[test]
    fn test_delete_with_no_expenses_is_noop() {
        let settings = Settings::default();
        let mut app = App::new(&settings, Ledger::new());
        press(&mut app, KeyCode::Char('d'));
        assert!(app.ledger.expenses().is_empty());
    }

    #[test]
    fn test_salary_dialog_coerces_garbage_to_zero() {
        let settings = Settings::default();
        let mut app = App::new(&settings, Ledger::with_salary(Money::from_dollars(5000)));

        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.active_dialog, ActiveDialog::Salary);
        app.salary_form.amount.clear();
        // Digit filter blocks letters, leaving an empty field.
        type_str(&mut app, "abc");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.ledger.monthly_salary(), Money::zero());
        assert_eq!(app.totals.savings, Money::zero());
    }

    #[test]
    fn test_goal_change_triggers_suggestions() {
        let settings = Settings::default();
        let mut app = App::new(&settings, Ledger::with_salary(Money::from_dollars(20000)));
        assert!(app.suggestions.is_empty());

        press(&mut app, KeyCode::Char('g'));
        type_str(&mut app, "Emergency Fund");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.suggestions.len(), 2);
        assert_eq!(app.suggestions[0].category, "Certificates of Deposit (CDs)");
        assert_eq!(app.suggestions[1].category, "High-Yield Savings Accounts");
    }

    #[test]
    fn test_long_term_goal_branch() {
        let settings = Settings::default();
        let mut app = App::new(&settings, Ledger::with_salary(Money::from_dollars(20000)));

        press(&mut app, KeyCode::Char('g'));
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "Retirement planning");
        press(&mut app, KeyCode::Enter);

        let categories: Vec<_> = app.suggestions.iter().map(|s| s.category).collect();
        assert_eq!(categories, vec!["Stocks", "Mutual Funds"]);
    }

    #[test]
    fn test_help_opens_and_any_key_closes() {
        let settings = Settings::default();
        let mut app = App::new(&settings, Ledger::new());
        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.active_dialog, ActiveDialog::Help);
        press(&mut app, KeyCode::Char('x'));
        assert!(!app.has_dialog());
    }
}
