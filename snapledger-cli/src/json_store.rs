//! File-backed store: a pretty-printed JSON document rewritten on every change.

use serde::{Deserialize, Serialize};
use snapledger_core::{StoreError, StoredTransaction, Transaction, TransactionStore};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreFile {
    next_id: u64,
    records: Vec<StoredTransaction>,
}

pub struct JsonStore {
    path: PathBuf,
    next_id: u64,
    records: Vec<StoredTransaction>,
}

impl JsonStore {
    /// Open `path`; a missing file is an empty store.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let file = if path.exists() {
            let s = fs::read_to_string(&path).map_err(StoreError::backend)?;
            serde_json::from_str::<StoreFile>(&s).map_err(StoreError::backend)?
        } else {
            StoreFile::default()
        };

        // next_id stays above every stored id
        let max_id = file.records.iter().map(|r| r.id).max().unwrap_or(0);
        Ok(Self {
            path,
            next_id: file.next_id.max(max_id + 1),
            records: file.records,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write(&self, doc: &StoreFile) -> Result<(), StoreError> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(StoreError::backend)?;
        }
        let json = serde_json::to_string_pretty(doc).map_err(StoreError::backend)?;
        fs::write(&self.path, json).map_err(StoreError::backend)
    }

    /// Memory follows the file: nothing changes unless the write succeeds.
    fn commit(&mut self, doc: StoreFile) -> Result<(), StoreError> {
        self.write(&doc)?;
        self.next_id = doc.next_id;
        self.records = doc.records;
        Ok(())
    }
}

impl TransactionStore for JsonStore {
    fn get_all(&self) -> Result<Vec<StoredTransaction>, StoreError> {
        Ok(self.records.clone())
    }

    fn add(&mut self, tx: Transaction) -> Result<u64, StoreError> {
        let id = self.next_id;
        let mut records = self.records.clone();
        records.push(StoredTransaction::new(id, tx));
        self.commit(StoreFile {
            next_id: id + 1,
            records,
        })?;
        Ok(id)
    }

    fn put(&mut self, record: StoredTransaction) -> Result<(), StoreError> {
        let mut records = self.records.clone();
        let slot = records
            .iter_mut()
            .find(|r| r.id == record.id)
            .ok_or(StoreError::NotFound(record.id))?;
        *slot = record;
        self.commit(StoreFile {
            next_id: self.next_id,
            records,
        })
    }

    fn delete(&mut self, id: u64) -> Result<bool, StoreError> {
        let records: Vec<_> = self.records.iter().filter(|r| r.id != id).cloned().collect();
        if records.len() == self.records.len() {
            return Ok(false);
        }
        self.commit(StoreFile {
            next_id: self.next_id,
            records,
        })?;
        Ok(true)
    }
}
