//! Whole-blob extraction: lines → transactions → batch dedupe.

use anyhow::Result;
use log::info;
use snapledger_core::{Transaction, dedupe_batch, time};

use crate::builder::build_transaction;
use crate::parsers::statement_line::{candidate_lines, match_line};

/// Counters describing one extraction run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractionStats {
    /// Non-empty lines seen
    pub lines: usize,
    /// Lines that matched the statement grammar
    pub matched: usize,
    /// Matched lines dropped because a token could not be read
    pub rejected_amounts: usize,
    /// Rows removed as in-batch duplicates
    pub duplicates: usize,
}

/// Statement text → ordered, de-duplicated transactions.
///
/// Year-less dates are completed with `default_year`. The pipeline never
/// looks at stored records; that happens at commit time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractionPipeline {
    default_year: i32,
}

impl Default for ExtractionPipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtractionPipeline {
    /// Default year taken from the local clock
    pub fn new() -> Self {
        Self::with_year(time::current_year())
    }

    pub fn with_year(default_year: i32) -> Self {
        Self { default_year }
    }

    /// Default year taken from the clock in an IANA timezone
    pub fn in_timezone(tz: &str) -> Result<Self> {
        Ok(Self::with_year(time::current_year_in(tz)?))
    }

    pub fn default_year(&self) -> i32 {
        self.default_year
    }

    pub fn extract(&self, text: &str) -> Vec<Transaction> {
        self.extract_with_stats(text).0
    }

    pub fn extract_with_stats(&self, text: &str) -> (Vec<Transaction>, ExtractionStats) {
        let mut stats = ExtractionStats::default();
        let mut candidates = Vec::new();

        for line in candidate_lines(text) {
            stats.lines += 1;
            let Some(m) = match_line(line) else {
                continue;
            };
            stats.matched += 1;
            match build_transaction(&m, self.default_year) {
                Some(tx) => candidates.push(tx),
                None => stats.rejected_amounts += 1,
            }
        }

        let built = candidates.len();
        let out = dedupe_batch(candidates);
        stats.duplicates = built - out.len();

        info!(
            "extracted {} transactions from {} lines ({} matched, {} unreadable, {} duplicates)",
            out.len(),
            stats.lines,
            stats.matched,
            stats.rejected_amounts,
            stats.duplicates
        );
        (out, stats)
    }
}

/// Run the pipeline with the current local year.
pub fn extract_transactions(text: &str) -> Vec<Transaction> {
    ExtractionPipeline::new().extract(text)
}
