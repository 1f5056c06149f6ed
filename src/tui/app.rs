//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events:
//! the ledger, the cached derived totals and suggestions, the selection, and
//! the dialog form states.

use crate::advisor::{self, Suggestion};
use crate::config::Settings;
use crate::ledger::{Ledger, Totals};
use crate::models::{Expense, ExpenseId};

use super::dialogs::expense::ExpenseFormState;
use super::dialogs::goals::GoalsFormState;
use super::dialogs::salary::SalaryFormState;

/// Currently active dialog (if any)
///
/// A single slot, so at most one expense can be in edit mode at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    AddExpense,
    EditExpense(ExpenseId),
    Salary,
    Goals,
    Help,
}

/// Main application state
pub struct App<'a> {
    /// Application settings
    pub settings: &'a Settings,

    /// The session ledger
    pub ledger: Ledger,

    /// Derived totals, recomputed after every mutation
    pub totals: Totals,

    /// Current suggestions, replaced wholesale after every mutation
    pub suggestions: Vec<Suggestion>,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Selected row in the expense list
    pub selected_index: usize,

    /// Status message to display
    pub status_message: Option<String>,

    /// Expense dialog form state
    pub expense_form: ExpenseFormState,

    /// Salary dialog form state
    pub salary_form: SalaryFormState,

    /// Goals dialog form state
    pub goals_form: GoalsFormState,
}

impl<'a> App<'a> {
    /// Create a new App instance around an existing ledger
    pub fn new(settings: &'a Settings, ledger: Ledger) -> Self {
        let mut app = Self {
            settings,
            ledger,
            totals: Totals::default(),
            suggestions: Vec::new(),
            should_quit: false,
            active_dialog: ActiveDialog::default(),
            selected_index: 0,
            status_message: None,
            expense_form: ExpenseFormState::default(),
            salary_form: SalaryFormState::default(),
            goals_form: GoalsFormState::default(),
        };
        app.refresh();
        app
    }

    /// Recompute totals and suggestions from the current ledger state
    ///
    /// Called after every mutation so the next frame renders fresh values.
    pub fn refresh(&mut self) {
        self.totals = self.ledger.totals();
        self.suggestions = advisor::suggest(
            self.totals.savings,
            self.ledger.short_term_goal(),
            self.ledger.long_term_goal(),
        );
        self.clamp_selection();
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Open a dialog, initializing its form state
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        match dialog {
            ActiveDialog::AddExpense => {
                self.expense_form = ExpenseFormState::for_add();
            }
            ActiveDialog::EditExpense(id) => {
                // Caller guarantees the id came from the current selection.
                if let Some(expense) = self.ledger.expense(id) {
                    self.expense_form = ExpenseFormState::for_edit(expense);
                } else {
                    return;
                }
            }
            ActiveDialog::Salary => {
                self.salary_form = SalaryFormState::prefilled(self.ledger.monthly_salary());
            }
            ActiveDialog::Goals => {
                self.goals_form = GoalsFormState::prefilled(
                    self.ledger.short_term_goal(),
                    self.ledger.long_term_goal(),
                );
            }
            ActiveDialog::Help | ActiveDialog::None => {}
        }
        self.active_dialog = dialog;
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        !matches!(self.active_dialog, ActiveDialog::None)
    }

    /// The currently selected expense, if any
    pub fn selected_expense(&self) -> Option<&Expense> {
        self.ledger.expenses().get(self.selected_index)
    }

    /// Move selection up in the expense list
    pub fn move_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Move selection down in the expense list
    pub fn move_down(&mut self) {
        let max = self.ledger.expenses().len();
        if self.selected_index + 1 < max {
            self.selected_index += 1;
        }
    }

    /// Keep the selection inside the list after removals
    fn clamp_selection(&mut self) {
        let len = self.ledger.expenses().len();
        if len == 0 {
            self.selected_index = 0;
        } else if self.selected_index >= len {
            self.selected_index = len - 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    fn settings() -> Settings {
        Settings::default()
    }

    #[test]
    fn test_new_app_refreshes_from_ledger() {
        let settings = settings();
        let mut ledger = Ledger::with_salary(Money::from_dollars(20000));
        ledger.set_short_term_goal("Emergency Fund");

        let app = App::new(&settings, ledger);
        assert_eq!(app.totals.savings, Money::from_dollars(20000));
        assert_eq!(app.suggestions.len(), 2);
    }

    #[test]
    fn test_refresh_replaces_suggestions_wholesale() {
        let settings = settings();
        let ledger = Ledger::with_salary(Money::from_dollars(20000));
        let mut app = App::new(&settings, ledger);
        assert!(app.suggestions.is_empty());

        app.ledger.set_short_term_goal("vacation");
        app.refresh();
        assert_eq!(app.suggestions.len(), 2);

        app.ledger.set_short_term_goal("nothing in particular");
        app.refresh();
        assert!(app.suggestions.is_empty());
    }

    #[test]
    fn test_selection_clamped_after_removal() {
        let settings = settings();
        let mut ledger = Ledger::new();
        ledger.add_expense("A", Money::from_cents(100)).unwrap();
        let id = ledger.add_expense("B", Money::from_cents(200)).unwrap().id;

        let mut app = App::new(&settings, ledger);
        app.selected_index = 1;
        app.ledger.remove_expense(id).unwrap();
        app.refresh();
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn test_move_selection_bounds() {
        let settings = settings();
        let mut ledger = Ledger::new();
        ledger.add_expense("A", Money::from_cents(100)).unwrap();
        ledger.add_expense("B", Money::from_cents(200)).unwrap();

        let mut app = App::new(&settings, ledger);
        app.move_up(); // already at top
        assert_eq!(app.selected_index, 0);
        app.move_down();
        assert_eq!(app.selected_index, 1);
        app.move_down(); // already at bottom
        assert_eq!(app.selected_index, 1);
    }

    #[test]
    fn test_open_edit_dialog_prefills_form() {
        let settings = settings();
        let mut ledger = Ledger::new();
        let id = ledger
            .add_expense("Rent", Money::from_cents(120000))
            .unwrap()
            .id;

        let mut app = App::new(&settings, ledger);
        app.open_dialog(ActiveDialog::EditExpense(id));
        assert!(app.has_dialog());
        assert_eq!(app.expense_form.description.value(), "Rent");
        assert_eq!(app.expense_form.amount.value(), "1200.00");
    }
}
