//! Regex patterns for statement line parsing.
//!
//! Anchoring matters: date tokens anchor at the start of the (trimmed)
//! line, amount tokens at the end. Description extraction slices the span
//! strictly between the two matches, so group boundaries must not move.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Generic date: DD-MM short form or longer YYYY-MM-DD-style forms,
    // separators - / .
    pub static ref GENERIC_DATE: Regex = Regex::new(
        r"^(\d{1,4}[-/.]\d{1,2}[-/.]\d{1,4}|\d{1,2}[-/.]\d{1,2})"
    ).unwrap();

    // Generic amount at line end: optional leading minus, optional comma
    // thousands separators, mandatory 2-decimal fraction, optional
    // trailing minus (also negative).
    pub static ref GENERIC_AMOUNT: Regex = Regex::new(
        r"(-?[\d,]+\.\d{2})(-?)$"
    ).unwrap();

    // BRI date: strict DD-MM-(YY|YYYY).
    pub static ref BRI_DATE: Regex = Regex::new(
        r"^(\d{2}[-/.]\d{2}[-/.]\d{2,4})"
    ).unwrap();

    // BRI amount at line end: mixed ./, separators, optional CR credit
    // marker.
    pub static ref BRI_AMOUNT: Regex = Regex::new(
        r"(-?[\d.,]+)(CR)?$"
    ).unwrap();

    // Posting date followed by transaction date, the BRI double-date
    // layout.
    pub static ref BRI_DOUBLE_DATE: Regex = Regex::new(
        r"^\d{2}[-/.]\d{2}[-/.]\d{2,4}\s+\d{2}[-/.]\d{2}[-/.]\d{2,4}"
    ).unwrap();

    // Redundant second date token left at the head of the description.
    pub static ref BRI_DESC_LEADING_DATE: Regex = Regex::new(
        r"^\d{2}[-/.]\d{2}[-/.]\d{2,4}\s+"
    ).unwrap();

    // Trailing "IDR 1.234,56"-style currency annotation.
    pub static ref BRI_DESC_TRAILING_IDR: Regex = Regex::new(
        r"\s+IDR(\s+[\d.,]+)*$"
    ).unwrap();
}
