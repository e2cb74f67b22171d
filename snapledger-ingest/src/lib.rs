//! snapledger-ingest: OCR statement text → de-duplicated transactions.

pub mod builder;
pub mod error;
pub mod parsers;
pub mod pipeline;
pub mod types;

pub use builder::build_transaction;
pub use error::IngestError;
pub use parsers::statement_line::{extract_lines, match_line};
pub use pipeline::{ExtractionPipeline, ExtractionStats, extract_transactions};
pub use types::LineMatch;
