//! Incentive report output.

use crate::engine::IncentiveResult;
use crate::error::{IncentiveError, Result};
use chrono::NaiveDateTime;
use log::info;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Column headers of the report.
pub const HEADER: [&str; 3] = ["EMPLOYEE ID", "EMPLOYEE NAME", "INCENTIVE AMOUNT"];

/// Label of the trailing metadata row.
pub const FOOTER_LABEL: &str = "LAST UPDATED";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Writes results as CSV, one row per result in the given order, followed by
/// a footer row carrying the generation timestamp.
pub fn write_report<W: Write>(
    writer: W,
    results: &[IncentiveResult],
    generated_at: NaiveDateTime,
) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(HEADER)?;

    for result in results {
        let amount = result.amount.to_string();
        csv_writer.write_record([
            result.employee_id.as_str(),
            result.employee_name.as_str(),
            amount.as_str(),
        ])?;
    }

    let timestamp = generated_at.format(TIMESTAMP_FORMAT).to_string();
    csv_writer.write_record(["", FOOTER_LABEL, timestamp.as_str()])?;

    csv_writer.flush()?;
    Ok(())
}

/// Writes the report to `path`, or to stdout when no path is given.
pub fn save_report(
    path: Option<&Path>,
    results: &[IncentiveResult],
    generated_at: NaiveDateTime,
) -> Result<()> {
    match path {
        Some(path) => {
            let file = File::create(path).map_err(|source| IncentiveError::Open {
                path: path.to_path_buf(),
                source,
            })?;
            write_report(BufWriter::new(file), results, generated_at)?;
            info!("Wrote {} results to {}", results.len(), path.display());
        }
        None => {
            let stdout = io::stdout();
            write_report(stdout.lock(), results, generated_at)?;
        }
    }
    Ok(())
}
