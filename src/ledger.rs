//! The in-memory expense ledger
//!
//! Owns the canonical list of expenses, the monthly salary, and the two
//! financial goal strings for one application session. Derived totals are
//! recomputed from scratch on every read rather than maintained
//! incrementally, so the total always equals the exact sum of the current
//! expenses.

use tracing::{debug, info};

use crate::error::{SpendwiseError, SpendwiseResult};
use crate::models::{Expense, ExpenseId, Money};

/// Totals derived from the current ledger state
///
/// Never stored; always recomputed via [`Ledger::totals`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Totals {
    /// Sum of all expense amounts
    pub total: Money,
    /// Monthly salary minus total (may be negative)
    pub remaining: Money,
    /// Remaining clamped to zero
    pub savings: Money,
}

/// The session ledger: expenses, salary, and goals
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    expenses: Vec<Expense>,
    monthly_salary: Money,
    short_term_goal: String,
    long_term_goal: String,
    next_id: u64,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a ledger with an initial monthly salary
    pub fn with_salary(salary: Money) -> Self {
        Self {
            monthly_salary: salary,
            ..Self::default()
        }
    }

    /// Validate an expense description and amount
    ///
    /// Shared by add and update so both reject exactly the same inputs.
    /// Returns the trimmed description on success.
    fn validate(description: &str, amount: Money) -> SpendwiseResult<&str> {
        let description = description.trim();
        if description.is_empty() {
            return Err(SpendwiseError::validation("Description must not be empty"));
        }
        if !amount.is_positive() {
            return Err(SpendwiseError::validation(format!(
                "Amount must be positive, got {}",
                amount
            )));
        }
        Ok(description)
    }

    /// Add a new expense
    ///
    /// The description must be non-empty after trimming and the amount
    /// strictly positive; otherwise a validation error is returned and
    /// nothing changes. On success the record is appended with a freshly
    /// assigned stable id and a reference to it is returned.
    pub fn add_expense(
        &mut self,
        description: &str,
        amount: Money,
    ) -> SpendwiseResult<&Expense> {
        let description = Self::validate(description, amount)?;

        let id = ExpenseId::from_raw(self.next_id);
        self.next_id += 1;
        self.expenses.push(Expense::new(id, description, amount));

        info!(%id, %amount, "expense added");
        Ok(self.expenses.last().expect("just pushed"))
    }

    /// Update an existing expense in place
    ///
    /// Same validation as [`Ledger::add_expense`]. The id and list position
    /// are unchanged. An unknown id is a sequencing bug in the caller and
    /// yields a `NotFound` error.
    pub fn update_expense(
        &mut self,
        id: ExpenseId,
        description: &str,
        amount: Money,
    ) -> SpendwiseResult<()> {
        let description = Self::validate(description, amount)?.to_string();

        let expense = self
            .expenses
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| SpendwiseError::expense_not_found(id))?;
        expense.description = description;
        expense.amount = amount;

        info!(%id, %amount, "expense updated");
        Ok(())
    }

    /// Remove an expense, returning the removed record
    ///
    /// All other ids remain valid. An unknown id yields `NotFound`.
    pub fn remove_expense(&mut self, id: ExpenseId) -> SpendwiseResult<Expense> {
        let index = self
            .expenses
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| SpendwiseError::expense_not_found(id))?;
        let removed = self.expenses.remove(index);

        info!(%id, amount = %removed.amount, "expense removed");
        Ok(removed)
    }

    /// Set the monthly salary
    ///
    /// Any amount is accepted; the input layer coerces unparseable text to
    /// zero before calling this.
    pub fn set_monthly_salary(&mut self, salary: Money) {
        debug!(%salary, "monthly salary set");
        self.monthly_salary = salary;
    }

    /// Set the short-term financial goal (stored trimmed, no validation)
    pub fn set_short_term_goal(&mut self, goal: &str) {
        self.short_term_goal = goal.trim().to_string();
    }

    /// Set the long-term financial goal (stored trimmed, no validation)
    pub fn set_long_term_goal(&mut self, goal: &str) {
        self.long_term_goal = goal.trim().to_string();
    }

    /// Look up an expense by id
    pub fn expense(&self, id: ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    /// All expenses in insertion order (= display order)
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// The current monthly salary
    pub fn monthly_salary(&self) -> Money {
        self.monthly_salary
    }

    /// The short-term goal text
    pub fn short_term_goal(&self) -> &str {
        &self.short_term_goal
    }

    /// The long-term goal text
    pub fn long_term_goal(&self) -> &str {
        &self.long_term_goal
    }

    /// Compute derived totals from scratch
    ///
    /// O(n) over the expense list; n is interactive-scale so recomputing on
    /// every read keeps the no-drift invariant trivially true.
    pub fn totals(&self) -> Totals {
        let total: Money = self.expenses.iter().map(|e| e.amount).sum();
        let remaining = self.monthly_salary - total;
        Totals {
            total,
            remaining,
            savings: remaining.or_zero(),
        }
    }
}
