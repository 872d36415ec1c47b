//! Per-issuer line parsers and the bank-format registry.

pub mod bri;
pub mod generic;
pub mod patterns;

pub use bri::BriParser;
pub use generic::GenericParser;

use crate::models::Transaction;

/// Trait for issuer-specific line parsers.
///
/// A parser classifies one line of extracted statement text as a
/// transaction or not. It is stateless: the same line always yields the
/// same result.
pub trait LineParser {
    /// Parse a single line, returning a transaction when the line matches
    /// this issuer's layout. `None` is not an error; most statement lines
    /// are non-transaction content.
    fn parse_line(&self, line: &str) -> Option<Transaction>;
}

/// Known bank-format identifiers, for CLI help text.
pub const BANK_FORMATS: &[&str] = &["generic", "bri"];

/// Resolve a bank-format identifier to a parser.
///
/// Lookup is case-insensitive. Unknown identifiers fall back to
/// [`GenericParser`] rather than failing: an unrecognized bank type must
/// not abort extraction.
pub fn parser_for(bank: &str) -> Box<dyn LineParser> {
    match bank.to_ascii_lowercase().as_str() {
        "bri" => Box::new(BriParser::new()),
        "generic" => Box::new(GenericParser::new()),
        other => {
            tracing::debug!("unknown bank format {:?}, using generic parser", other);
            Box::new(GenericParser::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_case_insensitive() {
        let line = "01-02-25 02-02-25 TOKO KOPI IDR 50.000,00";
        assert!(parser_for("BRI").parse_line(line).is_some());
        assert!(parser_for("bri").parse_line(line).is_some());
    }

    #[test]
    fn test_registry_unknown_falls_back_to_generic() {
        let line = "01/02/2025 GROCERY STORE INC 54.23";
        let txn = parser_for("no-such-bank").parse_line(line).unwrap();
        assert_eq!(txn.description, "GROCERY STORE INC");
    }
}
