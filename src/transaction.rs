//! Transaction models for CSV parsing and internal representation.

use serde::Deserialize;
use std::str::FromStr;

/// Raw transaction record as read from CSV.
///
/// Columns are read by position: id, product type, transaction type, amount,
/// parent id, priority, employee id. Every field is kept as a string so that
/// parse failures can be reported with the offending value.
#[derive(Debug, Deserialize)]
pub struct TransactionRecord {
    pub id: String,
    pub product_type: String,
    pub tx_type: String,
    pub amount: String,
    /// Empty when the transaction does not cancel a specific parent
    pub parent_id: String,
    pub priority: String,
    pub employee_id: String,
}

impl TransactionRecord {
    /// Number of columns a transaction row must have.
    pub const COLUMNS: usize = 7;

    /// Parses the raw CSV record into a typed transaction.
    ///
    /// Returns a description of the first invalid field on failure.
    pub fn parse(&self) -> std::result::Result<Transaction, String> {
        let id = parse_int("id", &self.id)?;
        let amount = parse_int("amount", &self.amount)?;

        let parent_id = match self.parent_id.trim() {
            "" => None,
            raw => Some(parse_int("parent_id", raw)?),
        };

        let priority = parse_bool(&self.priority)?;

        let employee_id = self.employee_id.trim();
        if employee_id.is_empty() {
            return Err("missing employee_id".to_string());
        }

        Ok(Transaction {
            id,
            product_type: ProductType::from(self.product_type.as_str()),
            kind: TxType::from(self.tx_type.as_str()),
            amount,
            parent_id,
            priority,
            employee_id: employee_id.to_string(),
        })
    }
}

fn parse_int(field: &str, raw: &str) -> std::result::Result<i64, String> {
    let trimmed = raw.trim();
    i64::from_str(trimmed).map_err(|e| format!("invalid {} '{}': {}", field, trimmed, e))
}

/// Accepts `true`/`false` in any case; an empty cell means not a priority.
fn parse_bool(raw: &str) -> std::result::Result<bool, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("false") {
        Ok(false)
    } else if trimmed.eq_ignore_ascii_case("true") {
        Ok(true)
    } else {
        Err(format!("invalid priority '{}': expected true or false", trimmed))
    }
}

/// A parsed transaction ready for incentive calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    /// Transaction ID, expected to be unique
    pub id: i64,

    /// Product the transaction was booked against
    pub product_type: ProductType,

    /// Normal booking or cancellation
    pub kind: TxType,

    /// Stated transaction amount. Recorded for audit only; payouts never read it.
    pub amount: i64,

    /// Transaction voided by this one, when `kind` is `Cancel`
    pub parent_id: Option<i64>,

    /// Priority transactions earn a flat incentive regardless of product
    pub priority: bool,

    /// Employee who booked the transaction
    pub employee_id: String,
}

impl Transaction {
    /// Returns `true` if this transaction is a cancellation.
    pub fn is_cancellation(&self) -> bool {
        self.kind == TxType::Cancel
    }
}

/// Product types that carry their own incentive rate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductType {
    Loan,
    /// Fixed deposit
    Fd,
    /// Recurring deposit
    Rd,
    /// Savings account
    Sa,
    /// Any other product, kept verbatim
    Other(String),
}

impl From<&str> for ProductType {
    fn from(raw: &str) -> Self {
        match raw.trim() {
            "LOAN" => ProductType::Loan,
            "FD" => ProductType::Fd,
            "RD" => ProductType::Rd,
            "SA" => ProductType::Sa,
            other => ProductType::Other(other.to_string()),
        }
    }
}

/// Transaction type variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxType {
    Normal,

    /// Voids itself and, if set, its parent transaction.
    Cancel,
}

impl From<&str> for TxType {
    /// Only `CANCEL` marks a cancellation; everything else is a normal booking.
    fn from(raw: &str) -> Self {
        if raw.trim() == "CANCEL" {
            TxType::Cancel
        } else {
            TxType::Normal
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(parent_id: &str, priority: &str) -> TransactionRecord {
        TransactionRecord {
            id: "7".to_string(),
            product_type: "LOAN".to_string(),
            tx_type: "NORMAL".to_string(),
            amount: "5000".to_string(),
            parent_id: parent_id.to_string(),
            priority: priority.to_string(),
            employee_id: "E1".to_string(),
        }
    }

    #[test]
    fn test_parse_normal_transaction() {
        let tx = record("", "false").parse().unwrap();
        assert_eq!(tx.id, 7);
        assert_eq!(tx.product_type, ProductType::Loan);
        assert_eq!(tx.kind, TxType::Normal);
        assert_eq!(tx.amount, 5000);
        assert_eq!(tx.parent_id, None);
        assert!(!tx.priority);
        assert_eq!(tx.employee_id, "E1");
    }

    #[test]
    fn test_parse_parent_id_present() {
        let tx = record("3", "false").parse().unwrap();
        assert_eq!(tx.parent_id, Some(3));
    }

    #[test]
    fn test_parse_parent_id_zero_is_not_absent() {
        let tx = record("0", "false").parse().unwrap();
        assert_eq!(tx.parent_id, Some(0));
    }

    #[test]
    fn test_parse_priority_case_insensitive() {
        assert!(record("", "TRUE").parse().unwrap().priority);
        assert!(record("", "True").parse().unwrap().priority);
        assert!(!record("", "").parse().unwrap().priority);
    }

    #[test]
    fn test_parse_rejects_bad_priority() {
        let err = record("", "yes").parse().unwrap_err();
        assert!(err.contains("priority"));
    }

    #[test]
    fn test_parse_rejects_bad_parent_id() {
        let err = record("abc", "false").parse().unwrap_err();
        assert!(err.contains("parent_id"));
    }

    #[test]
    fn test_parse_rejects_bad_amount() {
        let mut rec = record("", "false");
        rec.amount = "12.5".to_string();
        assert!(rec.parse().unwrap_err().contains("amount"));
    }

    #[test]
    fn test_parse_rejects_missing_employee() {
        let mut rec = record("", "false");
        rec.employee_id = "  ".to_string();
        assert!(rec.parse().is_err());
    }

    #[test]
    fn test_unknown_product_type_kept() {
        assert_eq!(ProductType::from("MF"), ProductType::Other("MF".to_string()));
        assert_eq!(ProductType::from(" FD "), ProductType::Fd);
    }

    #[test]
    fn test_only_cancel_is_cancellation() {
        assert_eq!(TxType::from("CANCEL"), TxType::Cancel);
        assert_eq!(TxType::from("NORMAL"), TxType::Normal);
        assert_eq!(TxType::from("REFUND"), TxType::Normal);
    }
}
