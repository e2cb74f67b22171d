//! Duplicate suppression keyed on (date, direction, amount to the cent, merchant).

use std::collections::HashSet;

use log::debug;

use crate::finance::{Direction, StoredTransaction, Transaction};

/// Equality key for duplicate detection. Derived, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DuplicateKey {
    pub date: String,
    pub direction: Direction,
    /// Amount rounded to 2 decimals, in its printed form
    pub amount: String,
    /// Merchant lower-cased
    pub merchant: String,
}

impl DuplicateKey {
    pub fn new(date: &str, direction: Direction, amount: f64, merchant: &str) -> Self {
        Self {
            date: date.to_string(),
            direction,
            amount: format!("{amount:.2}"),
            merchant: merchant.to_lowercase(),
        }
    }
}

/// Anything that projects onto a [`DuplicateKey`]
pub trait Keyed {
    fn duplicate_key(&self) -> DuplicateKey;
}

impl Keyed for Transaction {
    fn duplicate_key(&self) -> DuplicateKey {
        DuplicateKey::new(&self.date, self.direction, self.amount, &self.merchant)
    }
}

impl Keyed for StoredTransaction {
    fn duplicate_key(&self) -> DuplicateKey {
        DuplicateKey::new(&self.date, self.direction, self.amount, &self.merchant)
    }
}

/// Keep the first occurrence of each key, in order of first appearance.
pub fn dedupe_batch(candidates: Vec<Transaction>) -> Vec<Transaction> {
    let mut seen = HashSet::new();
    candidates
        .into_iter()
        .filter(|tx| {
            let fresh = seen.insert(tx.duplicate_key());
            if !fresh {
                debug!("dropping in-batch duplicate: {} {} {:.2}", tx.date, tx.merchant, tx.amount);
            }
            fresh
        })
        .collect()
}

/// Outcome of filtering a batch against already persisted records
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoreDedupe {
    pub accepted: Vec<Transaction>,
    pub skipped: usize,
}

impl StoreDedupe {
    pub fn accepted_count(&self) -> usize {
        self.accepted.len()
    }
}

/// Drop candidates whose key already exists among `existing`.
///
/// Accepted keys join the seen set, so a key repeated inside `candidates`
/// is accepted once and skipped afterwards.
pub fn dedupe_against_store(
    candidates: &[Transaction],
    existing: &[StoredTransaction],
) -> StoreDedupe {
    let mut seen: HashSet<DuplicateKey> = existing.iter().map(Keyed::duplicate_key).collect();
    let mut out = StoreDedupe::default();

    for tx in candidates {
        if seen.insert(tx.duplicate_key()) {
            out.accepted.push(tx.clone());
        } else {
            debug!("skipping already stored: {} {} {:.2}", tx.date, tx.merchant, tx.amount);
            out.skipped += 1;
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finance::Category;

    fn tx(date: &str, merchant: &str, amount: f64, direction: Direction) -> Transaction {
        Transaction {
            date: date.to_string(),
            merchant: merchant.to_string(),
            amount,
            direction,
            category: Category::Other,
        }
    }

    #[test]
    fn test_key_ignores_merchant_case_and_sub_cent_noise() {
        let a = tx("2024-03-14", "Safeway", 45.2, Direction::Expense);
        let b = tx("2024-03-14", "SAFEWAY", 45.200000001, Direction::Expense);
        assert_eq!(a.duplicate_key(), b.duplicate_key());
    }

    #[test]
    fn test_key_keeps_very_large_amounts_apart() {
        let a = tx("2024-01-01", "Acme", 1e17, Direction::Income);
        let b = tx("2024-01-01", "Acme", 2e17, Direction::Income);
        assert_ne!(a.duplicate_key(), b.duplicate_key());
        assert_eq!(a.duplicate_key().amount, "100000000000000000.00");
        assert_eq!(dedupe_batch(vec![a, b]).len(), 2);
    }

    #[test]
    fn test_key_separates_direction_and_date() {
        let a = tx("2024-03-14", "Safeway", 45.2, Direction::Expense);
        let b = tx("2024-03-14", "Safeway", 45.2, Direction::Income);
        let c = tx("2024-03-15", "Safeway", 45.2, Direction::Expense);
        assert_ne!(a.duplicate_key(), b.duplicate_key());
        assert_ne!(a.duplicate_key(), c.duplicate_key());
    }

    #[test]
    fn test_category_is_not_part_of_the_key() {
        let a = tx("2024-03-14", "Safeway", 45.2, Direction::Expense);
        let mut b = a.clone();
        b.category = Category::Groceries;
        assert_eq!(a.duplicate_key(), b.duplicate_key());
    }

    #[test]
    fn test_batch_keeps_first_occurrence_in_order() {
        let batch = vec![
            tx("2024-03-14", "Safeway", 45.2, Direction::Expense),
            tx("2024-03-15", "Chevron", 30.0, Direction::Expense),
            tx("2024-03-14", "safeway", 45.2, Direction::Expense),
            tx("2024-03-16", "Payroll", 1500.0, Direction::Income),
        ];
        let out = dedupe_batch(batch);
        let merchants: Vec<_> = out.iter().map(|t| t.merchant.as_str()).collect();
        assert_eq!(merchants, vec!["Safeway", "Chevron", "Payroll"]);
    }

    #[test]
    fn test_store_dedupe_counts_skips() {
        let existing = vec![StoredTransaction::new(
            1,
            tx("2024-03-14", "safeway", 45.2, Direction::Expense),
        )];
        let candidates = vec![
            tx("2024-03-14", "Safeway", 45.2, Direction::Expense),
            tx("2024-03-15", "Chevron", 30.0, Direction::Expense),
        ];
        let out = dedupe_against_store(&candidates, &existing);
        assert_eq!(out.accepted_count(), 1);
        assert_eq!(out.skipped, 1);
        assert_eq!(out.accepted[0].merchant, "Chevron");
    }

    #[test]
    fn test_store_dedupe_skips_repeats_within_candidates() {
        let candidates = vec![
            tx("2024-03-15", "Chevron", 30.0, Direction::Expense),
            tx("2024-03-15", "Chevron", 30.0, Direction::Expense),
        ];
        let out = dedupe_against_store(&candidates, &[]);
        assert_eq!(out.accepted_count(), 1);
        assert_eq!(out.skipped, 1);
    }
}
