//! Transaction record produced by the line parsers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single statement transaction.
///
/// All fields are kept as strings: the date token is carried exactly as it
/// appeared in the statement (formats vary by issuer), and the amount is
/// never parsed to a float to avoid locale/precision loss. A leading `-`
/// on the amount denotes a credit/refund.
///
/// A `Transaction` is only ever constructed with all three fields
/// non-empty; parsers reject lines that would violate this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Raw date token as found in the line.
    #[serde(rename = "Date")]
    pub date: String,

    /// Free text between the date and amount tokens, trimmed.
    #[serde(rename = "Description")]
    pub description: String,

    /// Decimal amount as a string; negative prefix = credit/refund.
    #[serde(rename = "Amount")]
    pub amount: String,
}

impl Transaction {
    pub fn new(
        date: impl Into<String>,
        description: impl Into<String>,
        amount: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            description: description.into(),
            amount: amount.into(),
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | {} | {}", self.date, self.description, self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_display() {
        let txn = Transaction::new("01/02/2025", "GROCERY STORE INC", "54.23");
        assert_eq!(txn.to_string(), "01/02/2025 | GROCERY STORE INC | 54.23");
    }

    #[test]
    fn test_serialize_field_names() {
        let txn = Transaction::new("01/02/2025", "COFFEE", "-10.00");
        let json = serde_json::to_string(&txn).unwrap();
        assert_eq!(
            json,
            r#"{"Date":"01/02/2025","Description":"COFFEE","Amount":"-10.00"}"#
        );
    }
}
