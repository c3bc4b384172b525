//! Error types for the incentive engine.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, IncentiveError>;

/// Errors that can occur while loading records or writing the report.
///
/// The incentive calculation itself never fails; every variant here comes
/// from the I/O adapters around it.
#[derive(Error, Debug)]
pub enum IncentiveError {
    /// Failed to read or write a stream
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV reading or writing error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Input file could not be opened, or output file could not be created
    #[error("Failed to open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed record in one of the input files
    #[error("Invalid {source_name} record at row {row}: {message}")]
    InvalidRecord {
        source_name: &'static str,
        row: usize,
        message: String,
    },
}
