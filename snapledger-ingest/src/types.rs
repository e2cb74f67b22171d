use serde::{Deserialize, Serialize};

/// Raw tokens captured from one statement line, before any normalization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineMatch {
    pub date_token: String,
    pub merchant_token: String,
    pub amount_token: String,
}
