//! Modal dialogs
//!
//! Each dialog owns a form state kept on the App, a `render` function, and a
//! `handle_key` function invoked while the dialog is open.

pub mod expense;
pub mod goals;
pub mod help;
pub mod salary;

use crate::models::Money;

/// Format an amount for prefilling an input field ("1200.00", no symbol)
pub(crate) fn amount_input_string(amount: Money) -> String {
    let cents = amount.cents();
    if cents == 0 {
        String::new()
    } else {
        format!("{}.{:02}", cents / 100, (cents % 100).abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_input_string() {
        assert_eq!(amount_input_string(Money::from_cents(120000)), "1200.00");
        assert_eq!(amount_input_string(Money::from_cents(105)), "1.05");
        assert_eq!(amount_input_string(Money::zero()), "");
    }
}
