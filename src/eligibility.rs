//! Fraud-based eligibility filtering.

use crate::employee::{Employee, Fraud};
use log::debug;
use std::collections::HashSet;

/// Returns the employees that are not flagged for fraud, in input order.
pub fn filter_eligible(employees: &[Employee], frauds: &[Fraud]) -> Vec<Employee> {
    let flagged: HashSet<&str> = frauds.iter().map(|f| f.employee_id.as_str()).collect();

    employees
        .iter()
        .filter(|employee| {
            let excluded = flagged.contains(employee.id.as_str());
            if excluded {
                debug!("Excluding employee {} (fraud flag)", employee.id);
            }
            !excluded
        })
        .cloned()
        .collect()
}
