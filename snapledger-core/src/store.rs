//! Narrow contract to the transaction store collaborator.

use thiserror::Error;

use crate::finance::{StoredTransaction, Transaction};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no stored transaction with id {0}")]
    NotFound(u64),
    #[error("store backend: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl StoreError {
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        StoreError::Backend(Box::new(err))
    }
}

/// Persistence operations the extraction core relies on.
pub trait TransactionStore {
    /// Every stored record, in no particular order
    fn get_all(&self) -> Result<Vec<StoredTransaction>, StoreError>;

    /// Insert a record, returning its newly assigned id
    fn add(&mut self, tx: Transaction) -> Result<u64, StoreError>;

    /// Replace the record with the same id
    fn put(&mut self, record: StoredTransaction) -> Result<(), StoreError>;

    /// Remove a record; `Ok(false)` when the id was not present
    fn delete(&mut self, id: u64) -> Result<bool, StoreError>;
}

/// In-process store. Ids auto-increment from 1 and are never reused.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    next_id: u64,
    records: Vec<StoredTransaction>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            records: Vec::new(),
        }
    }

    /// Seed a store with existing records; new ids continue after the largest one.
    pub fn with_records(records: Vec<StoredTransaction>) -> Self {
        let next_id = records.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        Self { next_id, records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl TransactionStore for MemoryStore {
    fn get_all(&self) -> Result<Vec<StoredTransaction>, StoreError> {
        Ok(self.records.clone())
    }

    fn add(&mut self, tx: Transaction) -> Result<u64, StoreError> {
        let id = self.next_id;
        self.next_id += 1;
        self.records.push(StoredTransaction::new(id, tx));
        Ok(id)
    }

    fn put(&mut self, record: StoredTransaction) -> Result<(), StoreError> {
        let slot = self
            .records
            .iter_mut()
            .find(|r| r.id == record.id)
            .ok_or(StoreError::NotFound(record.id))?;
        *slot = record;
        Ok(())
    }

    fn delete(&mut self, id: u64) -> Result<bool, StoreError> {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        Ok(self.records.len() != before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finance::{Category, Direction};

    fn sample(merchant: &str) -> Transaction {
        Transaction {
            date: "2024-03-14".to_string(),
            merchant: merchant.to_string(),
            amount: 10.0,
            direction: Direction::Expense,
            category: Category::Other,
        }
    }

    #[test]
    fn test_ids_increment_and_are_not_reused() {
        let mut store = MemoryStore::new();
        assert_eq!(store.add(sample("a")).unwrap(), 1);
        assert_eq!(store.add(sample("b")).unwrap(), 2);
        assert!(store.delete(2).unwrap());
        assert_eq!(store.add(sample("c")).unwrap(), 3);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_put_replaces_by_id() {
        let mut store = MemoryStore::new();
        let id = store.add(sample("Corner Shop")).unwrap();
        let mut rec = store.get_all().unwrap().remove(0);
        rec.category = Category::Shopping;
        store.put(rec).unwrap();
        assert_eq!(store.get_all().unwrap()[0].category, Category::Shopping);
        assert_eq!(store.get_all().unwrap()[0].id, id);
    }

    #[test]
    fn test_put_unknown_id_is_not_found() {
        let mut store = MemoryStore::new();
        let err = store.put(StoredTransaction::new(42, sample("x"))).unwrap_err();
        assert!(matches!(err, StoreError::NotFound(42)));
    }

    #[test]
    fn test_delete_missing_id() {
        let mut store = MemoryStore::new();
        assert!(!store.delete(9).unwrap());
    }

    #[test]
    fn test_seeded_store_continues_ids() {
        let mut store = MemoryStore::with_records(vec![StoredTransaction::new(5, sample("x"))]);
        assert_eq!(store.add(sample("y")).unwrap(), 6);
    }
}
