//! Core incentive calculation engine.
//!
//! Groups transactions by employee, nets cancellations against the
//! transactions they void, and adds a one-time location bonus. Everything
//! here is pure: no I/O and no state carried between calls.

use crate::employee::Employee;
use crate::transaction::{ProductType, Transaction};
use log::debug;
use serde::Serialize;
use std::collections::HashMap;

/// Flat incentive for a priority transaction, whatever its product.
pub const PRIORITY_AMOUNT: i64 = 200;

/// Incentive payout for one eligible employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IncentiveResult {
    pub employee_id: String,
    pub employee_name: String,
    pub amount: i64,
}

/// Computes one result per employee, in the order employees are given.
///
/// Employees without any transactions still get a result, with amount 0.
pub fn compute_results(
    employees: &[Employee],
    transactions: &[Transaction],
) -> Vec<IncentiveResult> {
    let mut by_employee: HashMap<&str, Vec<&Transaction>> = HashMap::new();
    for tx in transactions {
        by_employee
            .entry(tx.employee_id.as_str())
            .or_default()
            .push(tx);
    }

    employees
        .iter()
        .map(|employee| {
            let txs = by_employee
                .get(employee.id.as_str())
                .map(Vec::as_slice)
                .unwrap_or(&[]);
            let amount = calculate_amount(txs, &employee.location);

            debug!(
                "Employee {}: {} transactions, incentive {}",
                employee.id,
                txs.len(),
                amount
            );

            IncentiveResult {
                employee_id: employee.id.clone(),
                employee_name: employee.name.clone(),
                amount,
            }
        })
        .collect()
}

/// Calculates the incentive for a single employee's transactions.
///
/// Each cancellation voids its own id and its parent id. Voided ids are
/// forced to zero in the per-id amount map, creating the slot if the id
/// never appeared as a transaction of its own. Duplicate ids keep the last
/// recorded amount. The location bonus is only added to a non-zero total.
pub fn calculate_amount(transactions: &[&Transaction], location: &str) -> i64 {
    let mut amounts: HashMap<i64, i64> = HashMap::new();
    let mut voided: Vec<i64> = Vec::new();

    for tx in transactions {
        if tx.is_cancellation() {
            voided.push(tx.id);
            if let Some(parent_id) = tx.parent_id {
                voided.push(parent_id);
            }
        } else {
            amounts.insert(tx.id, product_amount(tx));
        }
    }

    for id in voided {
        debug!("Voiding transaction {}", id);
        amounts.insert(id, 0);
    }

    let total: i64 = amounts.values().sum();
    if total == 0 {
        return 0;
    }

    total + location_bonus(location)
}

/// Gross incentive for a single transaction.
///
/// Priority overrides the product lookup. The transaction's stated amount
/// is not part of the rule.
pub fn product_amount(tx: &Transaction) -> i64 {
    if tx.priority {
        return PRIORITY_AMOUNT;
    }

    match tx.product_type {
        ProductType::Loan => 100,
        ProductType::Fd => 50,
        ProductType::Rd => 60,
        ProductType::Sa => 40,
        ProductType::Other(_) => 10,
    }
}

/// One-time bonus by employee location.
///
/// Unrecognised locations fall into the same bucket as the major states.
pub fn location_bonus(location: &str) -> i64 {
    match location.trim() {
        "Delhi" | "Punjab" | "Maharashtra" => 10,
        "Haryana" | "Gujrat" => 5,
        _ => 10,
    }
}
