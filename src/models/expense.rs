//! Expense model
//!
//! A single user-entered (description, amount) pair tracked in the ledger,
//! with a stable identifier assigned at creation time.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// Stable identifier for an expense
///
/// Assigned from a monotonic counter when the record is created and never
/// reused, so edit and delete targets stay valid no matter what happened to
/// the list in between. Display position is deliberately not an identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(u64);

impl ExpenseId {
    /// Create an id from a raw counter value
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw counter value
    pub const fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "exp-{}", self.0)
    }
}

/// A single expense record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,

    /// What the money was spent on (non-empty, stored trimmed)
    pub description: String,

    /// How much was spent (strictly positive)
    pub amount: Money,
}

impl Expense {
    /// Create a new expense record
    pub fn new(id: ExpenseId, description: impl Into<String>, amount: Money) -> Self {
        Self {
            id,
            description: description.into(),
            amount,
        }
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.description, self.amount)
    }
}
