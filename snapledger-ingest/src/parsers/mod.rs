//! Token-level parsers for OCR statement lines.

pub mod amount;
pub mod date;
pub mod merchant;
pub mod statement_line;

pub use amount::parse_amount;
pub use date::normalize_date;
pub use merchant::normalize_merchant;
