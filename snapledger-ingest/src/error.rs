use thiserror::Error;

/// Per-token failures. The pipeline treats every variant as "drop this line".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IngestError {
    #[error("not a monetary amount: {0:?}")]
    InvalidAmount(String),
}
