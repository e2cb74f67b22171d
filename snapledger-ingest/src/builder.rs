//! LineMatch → Transaction.

use log::debug;
use snapledger_core::{Direction, Transaction, categorize};

use crate::parsers::{normalize_date, normalize_merchant, parse_amount};
use crate::types::LineMatch;

/// Build a transaction from raw line tokens.
///
/// Returns `None` when the amount or date token cannot be read; the caller
/// drops the line just as it would a grammar mismatch.
pub fn build_transaction(m: &LineMatch, default_year: i32) -> Option<Transaction> {
    let signed = match parse_amount(&m.amount_token) {
        Ok(v) => v,
        Err(e) => {
            debug!("dropping row: {e}");
            return None;
        }
    };
    let date = normalize_date(&m.date_token, default_year)?;
    let merchant = normalize_merchant(&m.merchant_token);

    let direction = Direction::from_signed(signed);
    let category = categorize(&merchant, direction);

    Some(Transaction {
        date,
        merchant,
        amount: signed.abs(),
        direction,
        category,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use snapledger_core::Category;

    fn line(date: &str, merchant: &str, amount: &str) -> LineMatch {
        LineMatch {
            date_token: date.to_string(),
            merchant_token: merchant.to_string(),
            amount_token: amount.to_string(),
        }
    }

    #[test]
    fn test_expense_row() {
        let tx = build_transaction(&line("03/14", "Safeway", "-45.20"), 2024).unwrap();
        assert_eq!(tx.date, "2024-03-14");
        assert_eq!(tx.merchant, "Safeway");
        assert_eq!(tx.amount, 45.2);
        assert_eq!(tx.direction, Direction::Expense);
        assert_eq!(tx.category, Category::Groceries);
    }

    #[test]
    fn test_parenthesized_and_minus_agree() {
        let a = build_transaction(&line("1/1", "Shell", "(12.34)"), 2024).unwrap();
        let b = build_transaction(&line("1/1", "Shell", "-12.34"), 2024).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.amount, 12.34);
        assert_eq!(a.direction, Direction::Expense);
    }

    #[test]
    fn test_positive_amount_is_income_whatever_the_merchant() {
        let tx = build_transaction(&line("1/1", "Safeway Refund", "12.34"), 2024).unwrap();
        assert_eq!(tx.direction, Direction::Income);
        assert_eq!(tx.category, Category::Income);
    }

    #[test]
    fn test_zero_amount_counts_as_income() {
        let tx = build_transaction(&line("1/1", "Adjustment", "0.00"), 2024).unwrap();
        assert_eq!(tx.direction, Direction::Income);
        assert_eq!(tx.amount, 0.0);
    }

    #[test]
    fn test_bad_amount_drops_the_row() {
        assert!(build_transaction(&line("1/1", "Shell", "(12.34"), 2024).is_none());
    }

    #[test]
    fn test_merchant_is_normalized() {
        let tx = build_transaction(&line("1/1", "  Blue   Bottle  ", "-4.50"), 2024).unwrap();
        assert_eq!(tx.merchant, "Blue Bottle");
    }
}
