//! Spendwise - Terminal-based personal budgeting with investment suggestions
//!
//! This library provides the core functionality for the Spendwise budgeting
//! application. It keeps a session-scoped expense ledger, derives spending
//! totals from it, and maps the resulting savings onto rule-based investment
//! suggestions driven by the user's financial goals.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, expenses)
//! - `ledger`: The in-memory expense ledger and derived totals
//! - `advisor`: The investment suggestion rules
//! - `tui`: The ratatui terminal interface
//!
//! # Example
//!
//! ```rust
//! use spendwise::advisor;
//! use spendwise::ledger::Ledger;
//! use spendwise::models::Money;
//!
//! let mut ledger = Ledger::with_salary(Money::from_dollars(12000));
//! ledger.add_expense("Rent", Money::from_dollars(1500))?;
//! ledger.set_short_term_goal("Emergency Fund");
//!
//! let totals = ledger.totals();
//! let suggestions = advisor::suggest(
//!     totals.savings,
//!     ledger.short_term_goal(),
//!     ledger.long_term_goal(),
//! );
//! assert!(!suggestions.is_empty());
//! # Ok::<(), spendwise::SpendwiseError>(())
//! ```

pub mod advisor;
pub mod config;
pub mod error;
pub mod ledger;
pub mod models;
pub mod tui;

pub use error::SpendwiseError;
