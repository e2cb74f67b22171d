//! snapledger-import: commit extracted transactions into a store, and export them

pub mod commit;
pub mod export;

pub use commit::{ImportPlan, ImportSummary, commit, plan_import};
pub use export::write_csv;
