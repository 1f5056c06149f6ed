//! Core data models
//!
//! The money type and the expense record shared by the ledger, the advisor,
//! and the TUI.

pub mod expense;
pub mod money;

pub use expense::{Expense, ExpenseId};
pub use money::{Money, MoneyParseError};
