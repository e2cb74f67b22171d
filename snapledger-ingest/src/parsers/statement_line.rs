//! Statement-line grammar for OCR'd screenshots.
//!
//! Expected rows, one transaction per line:
//!   03/14        Safeway                     -45.20
//!   3/1/24       Payroll Co                  1500.00
//!   12/02/2024   PG&E WEB ONLINE             ($1,204.33)
//!
//! Anything else (headers, page numbers, broken rows) is dropped silently.

use log::trace;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::LineMatch;

static LINE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^(?P<date>[0-9]{1,2}/[0-9]{1,2}(?:/(?:[0-9]{4}|[0-9]{2}))?)\s+",
        r"(?P<merchant>.*?)\s+",
        r"(?P<amount>[-(]?\$?[0-9][0-9,]*\.[0-9]{2}\)?)$"
    ))
    .expect("statement line pattern")
});

/// Match one already-trimmed line against the grammar.
pub fn match_line(line: &str) -> Option<LineMatch> {
    let caps = LINE_RE.captures(line)?;
    Some(LineMatch {
        date_token: caps["date"].to_string(),
        merchant_token: caps["merchant"].to_string(),
        amount_token: caps["amount"].to_string(),
    })
}

/// Split OCR text into lines and keep the ones shaped like transactions,
/// in their original order.
pub fn extract_lines(text: &str) -> Vec<LineMatch> {
    candidate_lines(text)
        .filter_map(|line| {
            let m = match_line(line);
            if m.is_none() {
                trace!("no statement row in {line:?}");
            }
            m
        })
        .collect()
}

/// Trimmed, non-empty lines of `text`
pub(crate) fn candidate_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines().map(str::trim).filter(|l| !l.is_empty())
}
