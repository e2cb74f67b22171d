//! CSV export of stored transactions.

use anyhow::{Context, Result};
use serde::Serialize;
use snapledger_core::StoredTransaction;
use std::io::Write;

#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    id: u64,
    date: &'a str,
    merchant: &'a str,
    category: &'static str,
    direction: &'static str,
    amount: String,
}

/// Write `records` as CSV with a header row, in the order given.
pub fn write_csv<W: Write>(writer: W, records: &[StoredTransaction]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for r in records {
        wtr.serialize(CsvRow {
            id: r.id,
            date: &r.date,
            merchant: &r.merchant,
            category: r.category.label(),
            direction: r.direction.as_str(),
            amount: format!("{:.2}", r.amount),
        })
        .with_context(|| format!("writing record {}", r.id))?;
    }
    wtr.flush().context("flushing csv")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use snapledger_core::{Category, Direction, Transaction};

    #[test]
    fn test_writes_header_and_quotes_commas() {
        let records = vec![
            StoredTransaction::new(
                1,
                Transaction {
                    date: "2024-03-14".to_string(),
                    merchant: "Safeway".to_string(),
                    amount: 45.2,
                    direction: Direction::Expense,
                    category: Category::Groceries,
                },
            ),
            StoredTransaction::new(
                2,
                Transaction {
                    date: "2024-03-15".to_string(),
                    merchant: "Acme, Inc".to_string(),
                    amount: 1500.0,
                    direction: Direction::Income,
                    category: Category::Income,
                },
            ),
        ];

        let mut buf = Vec::new();
        write_csv(&mut buf, &records).unwrap();
        let out = String::from_utf8(buf).unwrap();
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines[0], "id,date,merchant,category,direction,amount");
        assert_eq!(lines[1], "1,2024-03-14,Safeway,Groceries,expense,45.20");
        assert_eq!(lines[2], "2,2024-03-15,\"Acme, Inc\",Income,income,1500.00");
    }

    #[test]
    fn test_empty_export_writes_nothing() {
        let mut buf = Vec::new();
        write_csv(&mut buf, &[]).unwrap();
        assert!(buf.is_empty());
    }
}
