/// Longest merchant string kept for display
pub const MAX_MERCHANT_CHARS: usize = 80;

/// Collapse whitespace runs, trim, and cap at [`MAX_MERCHANT_CHARS`] characters.
/// Case is left alone.
pub fn normalize_merchant(raw: &str) -> String {
    raw.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .chars()
        .take(MAX_MERCHANT_CHARS)
        .collect()
}
