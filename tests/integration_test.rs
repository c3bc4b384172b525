//! Integration tests for the incentive engine CLI.
//!
//! These tests run the actual binary and verify output against expected CSV files.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

/// Get path to test data file
fn test_data_path(filename: &str) -> String {
    format!("tests/data/{}", filename)
}

/// Binary with all path variables cleared, so only explicit flags apply
fn engine_cmd() -> Command {
    let mut cmd = Command::cargo_bin("incentive-engine").unwrap();
    cmd.env_remove("TRANSACTION_CSV_IMPORT_URL")
        .env_remove("FRAUD_CSV_IMPORT_URL")
        .env_remove("EMPLOYEE_CSV_IMPORT_URL")
        .env_remove("EXPORT_OUTPUT_CSV_URL");
    cmd
}

/// Run the binary with the given transactions file and return stdout
fn run_engine(transactions_file: &str) -> String {
    let assert = engine_cmd()
        .args(["--transactions", &test_data_path(transactions_file)])
        .args(["--fraud", &test_data_path("fraud.csv")])
        .args(["--employees", &test_data_path("employees.csv")])
        .assert()
        .success();
    String::from_utf8(assert.get_output().stdout.clone()).unwrap()
}

/// Split the report into its result lines and its footer line
fn split_report(csv: &str) -> (Vec<String>, String) {
    let mut lines: Vec<String> = csv
        .lines()
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty())
        .collect();
    let footer = lines.pop().unwrap();
    (lines, footer)
}

fn expected_lines() -> Vec<String> {
    fs::read_to_string(test_data_path("expected.csv"))
        .unwrap()
        .lines()
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty())
        .collect()
}

#[test]
fn test_sample_report() {
    let output = run_engine("transactions.csv");
    let (lines, _) = split_report(&output);

    assert_eq!(lines, expected_lines());
}

#[test]
fn test_fraud_flagged_employee_excluded() {
    let output = run_engine("transactions.csv");
    assert!(!output.contains("E4"));
    assert!(!output.contains("John Doe"));
}

#[test]
fn test_footer_has_timestamp() {
    let output = run_engine("transactions.csv");
    let (_, footer) = split_report(&output);

    assert!(footer.starts_with(",LAST UPDATED,"), "footer was: {}", footer);
    let timestamp = footer.trim_start_matches(",LAST UPDATED,");
    assert!(chrono::NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M:%S%.f").is_ok());
}

#[test]
fn test_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let output_path = dir.path().join("report.csv");

    engine_cmd()
        .args(["--transactions", &test_data_path("transactions.csv")])
        .args(["--fraud", &test_data_path("fraud.csv")])
        .args(["--employees", &test_data_path("employees.csv")])
        .arg("--output")
        .arg(&output_path)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let written = fs::read_to_string(&output_path).unwrap();
    let (lines, _) = split_report(&written);
    assert_eq!(lines, expected_lines());
}

#[test]
fn test_paths_from_environment() {
    let assert = engine_cmd()
        .env("TRANSACTION_CSV_IMPORT_URL", test_data_path("transactions.csv"))
        .env("FRAUD_CSV_IMPORT_URL", test_data_path("fraud.csv"))
        .env("EMPLOYEE_CSV_IMPORT_URL", test_data_path("employees.csv"))
        .assert()
        .success();

    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let (lines, _) = split_report(&output);
    assert_eq!(lines, expected_lines());
}

#[test]
fn test_repeated_runs_identical() {
    let (first, _) = split_report(&run_engine("transactions.csv"));
    let (second, _) = split_report(&run_engine("transactions.csv"));
    assert_eq!(first, second);
}

#[test]
fn test_malformed_transaction_fails_with_row() {
    engine_cmd()
        .args(["--transactions", &test_data_path("transactions_bad.csv")])
        .args(["--fraud", &test_data_path("fraud.csv")])
        .args(["--employees", &test_data_path("employees.csv")])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid transaction record at row 3"));
}

#[test]
fn test_missing_file_error() {
    engine_cmd()
        .args(["--transactions", "nonexistent.csv"])
        .args(["--fraud", &test_data_path("fraud.csv")])
        .args(["--employees", &test_data_path("employees.csv")])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open nonexistent.csv"));
}

#[test]
fn test_missing_argument_error() {
    engine_cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("--transactions"));
}
