//! Generic statement line parser.

use super::patterns::{GENERIC_AMOUNT, GENERIC_DATE};
use super::LineParser;
use crate::models::Transaction;

/// Issuer-agnostic parser for the common `<date> <description> <amount>`
/// line shape. No normalization is applied: date and amount strings are
/// carried exactly as matched, including any sign markers.
pub struct GenericParser;

impl GenericParser {
    pub fn new() -> Self {
        Self
    }
}

impl Default for GenericParser {
    fn default() -> Self {
        Self::new()
    }
}

impl LineParser for GenericParser {
    fn parse_line(&self, line: &str) -> Option<Transaction> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let date_caps = GENERIC_DATE.captures(line)?;
        let date_match = date_caps.get(1)?;

        let amount_match = GENERIC_AMOUNT.find(line)?;

        // Description is the span strictly between date and amount.
        let desc_start = date_match.end();
        let desc_end = amount_match.start();
        if desc_start >= desc_end {
            return None;
        }

        let description = line[desc_start..desc_end].trim();
        if description.is_empty() {
            return None;
        }

        Some(Transaction::new(
            date_match.as_str(),
            description,
            amount_match.as_str(),
        ))
    }
}
