//! Line parser for BRI credit-card statements.

use super::patterns::{
    BRI_AMOUNT, BRI_DATE, BRI_DESC_LEADING_DATE, BRI_DESC_TRAILING_IDR, BRI_DOUBLE_DATE,
};
use super::LineParser;
use crate::models::Transaction;

/// Parser for BRI statements (Indonesian Rupiah conventions: `.` as
/// thousands separator, `,` as decimal separator, trailing `CR` marks a
/// credit).
///
/// BRI statements place amount-like tokens in subtotal and balance lines
/// that are not transactions. A line is only accepted when it starts with
/// two consecutive date tokens (posting date + transaction date) or
/// contains the literal `IDR` currency marker; everything else that
/// merely matches the date+amount shape is rejected.
pub struct BriParser;

impl BriParser {
    pub fn new() -> Self {
        Self
    }

    /// Normalize an IDR amount to a plain decimal string: drop `.`
    /// thousands separators, turn the `,` decimal separator into `.`,
    /// and map the `CR` credit marker to a leading minus.
    ///
    /// Assumes `.` is always a thousands separator; Western-convention
    /// input like `1,234.56` comes out wrong (`1.23456`). Known quirk,
    /// kept to match real BRI statements.
    fn normalize_amount(raw: &str, is_credit: bool) -> String {
        let mut clean = raw.replace('.', "");
        if clean.contains(',') {
            clean = clean.replace(',', ".");
        }
        if is_credit {
            format!("-{clean}")
        } else {
            clean
        }
    }
}

impl Default for BriParser {
    fn default() -> Self {
        Self::new()
    }
}

impl LineParser for BriParser {
    fn parse_line(&self, line: &str) -> Option<Transaction> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let date_caps = BRI_DATE.captures(line)?;
        let date_match = date_caps.get(1)?;

        let amount_caps = BRI_AMOUNT.captures(line)?;
        let amount_match = amount_caps.get(0)?;
        let raw_amount = amount_caps.get(1)?.as_str();
        let is_credit = amount_caps.get(2).is_some();

        // A bare separator run ("." or ",") satisfies the amount pattern
        // but normalizes to nothing; a record must carry a real amount.
        if !raw_amount.contains(|c: char| c.is_ascii_digit()) {
            return None;
        }

        // Validation gate: double date or IDR marker, otherwise this is a
        // header/footer/balance line that happens to match the shape.
        let has_double_date = BRI_DOUBLE_DATE.is_match(line);
        let has_currency = line.contains("IDR");
        if !(has_double_date || has_currency) {
            return None;
        }

        let description = line[date_match.end()..amount_match.start()].trim();
        let description = BRI_DESC_LEADING_DATE.replace(description, "");
        let description = BRI_DESC_TRAILING_IDR.replace(&description, "");
        let description = description.trim();
        if description.is_empty() {
            return None;
        }

        Some(Transaction::new(
            date_match.as_str(),
            description,
            Self::normalize_amount(raw_amount, is_credit),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(line: &str) -> Option<Transaction> {
        BriParser::new().parse_line(line)
    }

    #[test]
    fn test_double_date_line() {
        let txn = parse("01-02-25 02-02-25 TOKO KOPI JAKARTA 50.000,00").unwrap();
        assert_eq!(txn.date, "01-02-25");
        assert_eq!(txn.description, "TOKO KOPI JAKARTA");
        assert_eq!(txn.amount, "50000.00");
    }

    #[test]
    fn test_idr_marker_line() {
        let txn = parse("01-02-25 PEMBAYARAN TAGIHAN IDR 1.234,56").unwrap();
        assert_eq!(txn.description, "PEMBAYARAN TAGIHAN");
        assert_eq!(txn.amount, "1234.56");
    }

    #[test]
    fn test_credit_marker_becomes_negative() {
        let txn = parse("05-03-25 06-03-25 REFUND MERCHANT IDR 500,00CR").unwrap();
        assert_eq!(txn.description, "REFUND MERCHANT");
        assert_eq!(txn.amount, "-500.00");
    }

    #[test]
    fn test_leading_second_date_stripped_from_description() {
        let txn = parse("01-02-25 02-02-25 GOJEK TRIP 25.500,00").unwrap();
        assert_eq!(txn.description, "GOJEK TRIP");
    }

    #[test]
    fn test_trailing_currency_annotation_stripped() {
        let txn = parse("10/02/25 11/02/25 TOKOPEDIA IDR 99.000,00 99.000,00").unwrap();
        assert_eq!(txn.description, "TOKOPEDIA");
        assert_eq!(txn.amount, "99000.00");
    }

    #[test]
    fn test_validation_gate_rejects_shape_only_lines() {
        // Date + amount shape but neither double date nor IDR marker.
        assert!(parse("01-02-25 SALDO AWAL 1.234,56").is_none());
        // Amount-only subtotal line, no date token.
        assert!(parse("Page Total 1.234,56").is_none());
    }

    #[test]
    fn test_no_date_no_match() {
        assert!(parse("TAGIHAN SEBELUMNYA IDR 2.500.000,00").is_none());
    }

    #[test]
    fn test_normalize_amount() {
        assert_eq!(BriParser::normalize_amount("1.234,56", false), "1234.56");
        assert_eq!(BriParser::normalize_amount("500,00", true), "-500.00");
        assert_eq!(BriParser::normalize_amount("2.500.000,00", false), "2500000.00");
        // Western-convention input is mis-normalized, by long-standing
        // behavior.
        assert_eq!(BriParser::normalize_amount("1,234.56", false), "1.23456");
    }

    #[test]
    fn test_digitless_amount_token_no_match() {
        // Trailing punctuation passes the amount pattern but would
        // normalize to an empty amount.
        assert!(parse("01-02-25 02-02-25 PAYMENT .").is_none());
        assert!(parse("01-02-25 02-02-25 PAYMENT ,CR").is_none());
    }

    #[test]
    fn test_empty_line_no_match() {
        assert!(parse("").is_none());
        assert!(parse("   ").is_none());
    }
}
