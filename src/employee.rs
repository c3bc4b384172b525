//! Employee and fraud-flag records.

use serde::Deserialize;

/// An employee eligible for incentives unless flagged for fraud.
///
/// Read positionally from CSV as: id, name, location.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Employee {
    pub id: String,
    pub name: String,

    /// Drives the one-time location bonus
    pub location: String,
}

impl Employee {
    /// Number of columns an employee row must have.
    pub const COLUMNS: usize = 3;

    pub fn new(id: &str, name: &str, location: &str) -> Self {
        Employee {
            id: id.to_string(),
            name: name.to_string(),
            location: location.to_string(),
        }
    }
}

/// Marks an employee as excluded from incentives.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Fraud {
    pub employee_id: String,
}

impl Fraud {
    /// Number of columns a fraud row must have.
    pub const COLUMNS: usize = 1;

    pub fn new(employee_id: &str) -> Self {
        Fraud {
            employee_id: employee_id.to_string(),
        }
    }
}
