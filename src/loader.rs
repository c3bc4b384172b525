//! CSV record loaders.
//!
//! Each input file starts with a header row that is skipped. Columns are
//! matched by position, not by header name. Loading stops at the first
//! malformed row with an [`IncentiveError::InvalidRecord`].

use crate::employee::{Employee, Fraud};
use crate::error::{IncentiveError, Result};
use crate::transaction::{Transaction, TransactionRecord};
use csv::{ReaderBuilder, StringRecord, Trim};
use log::info;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Reads transactions from CSV.
pub fn read_transactions<R: Read>(reader: R) -> Result<Vec<Transaction>> {
    let records: Vec<(usize, TransactionRecord)> =
        read_rows(reader, "transaction", TransactionRecord::COLUMNS)?;

    records
        .into_iter()
        .map(|(row, record)| {
            record.parse().map_err(|message| IncentiveError::InvalidRecord {
                source_name: "transaction",
                row,
                message,
            })
        })
        .collect()
}

/// Reads fraud flags from CSV.
pub fn read_frauds<R: Read>(reader: R) -> Result<Vec<Fraud>> {
    let rows: Vec<(usize, Fraud)> = read_rows(reader, "fraud", Fraud::COLUMNS)?;
    let mut frauds = Vec::with_capacity(rows.len());

    for (row, fraud) in rows {
        require_id("fraud", row, &fraud.employee_id)?;
        frauds.push(fraud);
    }

    Ok(frauds)
}

/// Reads employees from CSV.
pub fn read_employees<R: Read>(reader: R) -> Result<Vec<Employee>> {
    let rows: Vec<(usize, Employee)> = read_rows(reader, "employee", Employee::COLUMNS)?;
    let mut employees = Vec::with_capacity(rows.len());

    for (row, employee) in rows {
        require_id("employee", row, &employee.id)?;
        employees.push(employee);
    }

    Ok(employees)
}

pub fn load_transactions(path: &Path) -> Result<Vec<Transaction>> {
    let transactions = read_transactions(open(path)?)?;
    info!("Loaded {} transactions from {}", transactions.len(), path.display());
    Ok(transactions)
}

pub fn load_frauds(path: &Path) -> Result<Vec<Fraud>> {
    let frauds = read_frauds(open(path)?)?;
    info!("Loaded {} fraud flags from {}", frauds.len(), path.display());
    Ok(frauds)
}

pub fn load_employees(path: &Path) -> Result<Vec<Employee>> {
    let employees = read_employees(open(path)?)?;
    info!("Loaded {} employees from {}", employees.len(), path.display());
    Ok(employees)
}

fn open(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).map_err(|source| IncentiveError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

/// Reads every data row, checks its column count and deserializes it
/// positionally. Each value is paired with its 1-based row number.
fn read_rows<R: Read, T: DeserializeOwned>(
    reader: R,
    source_name: &'static str,
    columns: usize,
) -> Result<Vec<(usize, T)>> {
    let mut csv_reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    let mut record = StringRecord::new();
    let mut row_num = 1; // header row

    while csv_reader.read_record(&mut record)? {
        row_num += 1;

        if record.len() != columns {
            return Err(IncentiveError::InvalidRecord {
                source_name,
                row: row_num,
                message: format!("expected {} columns, found {}", columns, record.len()),
            });
        }

        let value = record
            .deserialize::<T>(None)
            .map_err(|e| IncentiveError::InvalidRecord {
                source_name,
                row: row_num,
                message: e.to_string(),
            })?;
        rows.push((row_num, value));
    }

    Ok(rows)
}

fn require_id(source_name: &'static str, row: usize, id: &str) -> Result<()> {
    if id.is_empty() {
        return Err(IncentiveError::InvalidRecord {
            source_name,
            row,
            message: "missing employee id".to_string(),
        });
    }
    Ok(())
}
