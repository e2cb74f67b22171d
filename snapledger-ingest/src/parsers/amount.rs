//! Monetary tokens such as `-45.20`, `$1,234.56` or `(12.34)`.

use crate::error::IngestError;

/// Parse a statement amount into a signed value.
///
/// Currency symbols and thousands separators are dropped. A parenthesized
/// amount is an accounting debit and comes back negative.
pub fn parse_amount(token: &str) -> Result<f64, IngestError> {
    let mut t: String = token
        .trim()
        .chars()
        .filter(|c| *c != '$' && *c != ',')
        .collect();

    if let Some(inner) = t.strip_prefix('(').and_then(|s| s.strip_suffix(')')) {
        t = format!("-{inner}");
    }

    match t.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(IngestError::InvalidAmount(token.to_string())),
    }
}
