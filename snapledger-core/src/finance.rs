//! Transaction record types produced by statement extraction

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A single statement transaction, ready to hand to the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    /// ISO calendar date (YYYY-MM-DD). Not guaranteed to be a real calendar day.
    pub date: String,
    /// Normalized display string
    #[serde(default)]
    pub merchant: String,
    /// Always a non-negative magnitude; the sign lives in `direction`
    pub amount: f64,
    #[serde(alias = "type")]
    pub direction: Direction,
    pub category: Category,
}

/// A transaction as held by the store, with its store-assigned id
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoredTransaction {
    pub id: u64,
    pub date: String,
    #[serde(default)]
    pub merchant: String,
    pub amount: f64,
    #[serde(alias = "type")]
    pub direction: Direction,
    pub category: Category,
}

impl StoredTransaction {
    pub fn new(id: u64, tx: Transaction) -> Self {
        Self {
            id,
            date: tx.date,
            merchant: tx.merchant,
            amount: tx.amount,
            direction: tx.direction,
            category: tx.category,
        }
    }

    /// The record without its store id
    pub fn transaction(&self) -> Transaction {
        Transaction {
            date: self.date.clone(),
            merchant: self.merchant.clone(),
            amount: self.amount,
            direction: self.direction,
            category: self.category,
        }
    }
}

/// Money flow direction, derived from the sign of the parsed amount
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Expense,
    Income,
}

impl Direction {
    /// Negative amounts are expenses, everything else is income.
    pub fn from_signed(amount: f64) -> Self {
        if amount < 0.0 {
            Direction::Expense
        } else {
            Direction::Income
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Expense => "expense",
            Direction::Income => "income",
        }
    }

    /// Sign prefix used when displaying an amount
    pub fn sign(&self) -> char {
        match self {
            Direction::Expense => '-',
            Direction::Income => '+',
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "expense" => Ok(Direction::Expense),
            "income" => Ok(Direction::Income),
            _ => Err(UnknownLabel(s.to_string())),
        }
    }
}

/// The closed set of transaction categories
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    #[serde(rename = "Rent/Mortgage")]
    RentMortgage,
    #[serde(rename = "Utilities")]
    Utilities,
    #[serde(rename = "Groceries")]
    Groceries,
    #[serde(rename = "Dining")]
    Dining,
    #[serde(rename = "Gas/Transport")]
    GasTransport,
    #[serde(rename = "Car")]
    Car,
    #[serde(rename = "Insurance")]
    Insurance,
    #[serde(rename = "Medical")]
    Medical,
    #[serde(rename = "Subscriptions")]
    Subscriptions,
    #[serde(rename = "Shopping")]
    Shopping,
    #[serde(rename = "Entertainment")]
    Entertainment,
    #[serde(rename = "Travel")]
    Travel,
    #[serde(rename = "Debt")]
    Debt,
    #[serde(rename = "Savings/Investing")]
    SavingsInvesting,
    #[serde(rename = "Income")]
    Income,
    #[serde(rename = "Transfer")]
    Transfer,
    #[serde(rename = "Other")]
    Other,
}

impl Category {
    /// Every category, in display order
    pub const ALL: [Category; 17] = [
        Category::RentMortgage,
        Category::Utilities,
        Category::Groceries,
        Category::Dining,
        Category::GasTransport,
        Category::Car,
        Category::Insurance,
        Category::Medical,
        Category::Subscriptions,
        Category::Shopping,
        Category::Entertainment,
        Category::Travel,
        Category::Debt,
        Category::SavingsInvesting,
        Category::Income,
        Category::Transfer,
        Category::Other,
    ];

    /// Display label, identical to the serialized form
    pub fn label(&self) -> &'static str {
        match self {
            Category::RentMortgage => "Rent/Mortgage",
            Category::Utilities => "Utilities",
            Category::Groceries => "Groceries",
            Category::Dining => "Dining",
            Category::GasTransport => "Gas/Transport",
            Category::Car => "Car",
            Category::Insurance => "Insurance",
            Category::Medical => "Medical",
            Category::Subscriptions => "Subscriptions",
            Category::Shopping => "Shopping",
            Category::Entertainment => "Entertainment",
            Category::Travel => "Travel",
            Category::Debt => "Debt",
            Category::SavingsInvesting => "Savings/Investing",
            Category::Income => "Income",
            Category::Transfer => "Transfer",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl FromStr for Category {
    type Err = UnknownLabel;

    /// Case-insensitive match against the display labels.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownLabel(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown label: {0:?}")]
pub struct UnknownLabel(pub String);

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ManualEntryError {
    #[error("amount must be a positive number, got {0}")]
    InvalidAmount(f64),
}

impl Transaction {
    /// Build a record from manually entered fields.
    ///
    /// Income entries are always filed under [`Category::Income`].
    pub fn manual(
        date: NaiveDate,
        direction: Direction,
        amount: f64,
        merchant: impl Into<String>,
        category: Category,
    ) -> Result<Self, ManualEntryError> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(ManualEntryError::InvalidAmount(amount));
        }
        let category = match direction {
            Direction::Income => Category::Income,
            Direction::Expense => category,
        };
        Ok(Self {
            date: date.format("%Y-%m-%d").to_string(),
            merchant: merchant.into(),
            amount,
            direction,
            category,
        })
    }

    pub fn is_expense(&self) -> bool {
        self.direction == Direction::Expense
    }

    pub fn is_income(&self) -> bool {
        self.direction == Direction::Income
    }

    /// Amount with the direction's sign applied
    pub fn signed_amount(&self) -> f64 {
        match self.direction {
            Direction::Expense => -self.amount,
            Direction::Income => self.amount,
        }
    }
}
