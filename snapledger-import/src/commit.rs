//! Commit step: filter a previewed batch against the store, then persist it.

use log::info;
use snapledger_core::{
    StoreError, StoredTransaction, Transaction, TransactionStore, dedupe_against_store,
};

/// What a commit would do, computed without touching the store
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImportPlan {
    pub accepted: Vec<Transaction>,
    pub skipped: usize,
}

/// What a commit did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub added_ids: Vec<u64>,
    pub skipped: usize,
}

impl ImportSummary {
    pub fn added(&self) -> usize {
        self.added_ids.len()
    }

    /// One-line report for the user
    pub fn message(&self) -> String {
        format!(
            "Imported {} new transactions ({} duplicates skipped).",
            self.added(),
            self.skipped
        )
    }
}

/// Store dedupe over a snapshot of the persisted records.
pub fn plan_import(candidates: &[Transaction], existing: &[StoredTransaction]) -> ImportPlan {
    let out = dedupe_against_store(candidates, existing);
    ImportPlan {
        accepted: out.accepted,
        skipped: out.skipped,
    }
}

/// Read the store once, drop already-stored candidates, add the rest in order.
pub fn commit<S: TransactionStore + ?Sized>(
    store: &mut S,
    candidates: &[Transaction],
) -> Result<ImportSummary, StoreError> {
    let existing = store.get_all()?;
    let plan = plan_import(candidates, &existing);

    let mut added_ids = Vec::with_capacity(plan.accepted.len());
    for tx in plan.accepted {
        added_ids.push(store.add(tx)?);
    }

    let summary = ImportSummary {
        added_ids,
        skipped: plan.skipped,
    };
    info!("commit: {} added, {} skipped", summary.added(), summary.skipped);
    Ok(summary)
}
