//! Run configuration: where to read records from and where to write the report.

use clap::Parser;
use std::path::PathBuf;

/// Computes employee incentives from transaction, fraud and employee CSVs.
///
/// Every path can also be supplied through its environment variable.
#[derive(Debug, Clone, Parser)]
#[command(name = "incentive-engine", version, about)]
pub struct Config {
    /// Transactions CSV
    #[arg(long, env = "TRANSACTION_CSV_IMPORT_URL")]
    pub transactions: PathBuf,

    /// Fraud flags CSV
    #[arg(long, env = "FRAUD_CSV_IMPORT_URL")]
    pub fraud: PathBuf,

    /// Employees CSV
    #[arg(long, env = "EMPLOYEE_CSV_IMPORT_URL")]
    pub employees: PathBuf,

    /// Report destination; the report goes to stdout when omitted
    #[arg(long, env = "EXPORT_OUTPUT_CSV_URL")]
    pub output: Option<PathBuf>,
}
