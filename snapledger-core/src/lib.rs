//! snapledger-core: transaction model, category rules, duplicate keys and the store contract

pub mod categorizer;
pub mod dedupe;
pub mod finance;
pub mod store;
pub mod time;

pub use categorizer::{categorize, categorize_merchant, RULE_TABLE};
pub use dedupe::{dedupe_against_store, dedupe_batch, DuplicateKey, Keyed, StoreDedupe};
pub use finance::{
    Category, Direction, ManualEntryError, StoredTransaction, Transaction, UnknownLabel,
};
pub use store::{MemoryStore, StoreError, TransactionStore};
