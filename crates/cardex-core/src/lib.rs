//! Core library for credit-card statement parsing.
//!
//! This crate provides:
//! - PDF loading and per-page text extraction (with password support)
//! - Per-issuer line parsers (generic, BRI) behind a common trait
//! - Statement extraction: page/line iteration collecting transactions
//!   in encounter order

pub mod error;
pub mod extract;
pub mod models;
pub mod parsers;
pub mod pdf;

pub use error::{CardexError, PdfError, Result};
pub use extract::StatementExtractor;
pub use models::{CardexConfig, Transaction};
pub use parsers::{parser_for, BriParser, GenericParser, LineParser, BANK_FORMATS};
pub use pdf::{PdfExtractor, PdfSource};
