//! Incentive Engine CLI
//!
//! Reads transaction, fraud and employee CSVs and writes the incentive report.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- --transactions tx.csv --fraud fraud.csv --employees emp.csv > report.csv
//! ```
//!
//! # Environment Variables
//!
//! - `TRANSACTION_CSV_IMPORT_URL`, `FRAUD_CSV_IMPORT_URL`,
//!   `EMPLOYEE_CSV_IMPORT_URL`, `EXPORT_OUTPUT_CSV_URL`: fallbacks for the
//!   corresponding flags
//! - `RUST_LOG`: Set to `info` or `debug` to control logging verbosity

use clap::Parser;
use incentive_engine::{
    compute_results, filter_eligible, load_employees, load_frauds, load_transactions, save_report,
    Config, Result,
};
use log::info;
use std::process;

fn main() {
    env_logger::init();

    let config = Config::parse();

    if let Err(e) = run(&config) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(config: &Config) -> Result<()> {
    let frauds = load_frauds(&config.fraud)?;
    let employees = load_employees(&config.employees)?;
    let transactions = load_transactions(&config.transactions)?;

    let eligible = filter_eligible(&employees, &frauds);
    info!(
        "{} of {} employees eligible for incentives",
        eligible.len(),
        employees.len()
    );

    let results = compute_results(&eligible, &transactions);

    let generated_at = chrono::Local::now().naive_local();
    save_report(config.output.as_deref(), &results, generated_at)?;

    Ok(())
}
