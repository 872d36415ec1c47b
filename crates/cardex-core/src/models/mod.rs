//! Data models for statement extraction.

pub mod config;
pub mod transaction;

pub use config::{CardexConfig, ExtractionConfig, PdfConfig};
pub use transaction::Transaction;
