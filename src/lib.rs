//! # Incentive Engine
//!
//! A batch processor that computes incentive payouts for employees from
//! their transactions, skipping employees flagged for fraud.
//!
//! ## Rules
//!
//! - **Per transaction**: priority pays 200, otherwise LOAN 100, FD 50,
//!   RD 60, SA 40 and any other product 10
//! - **Cancellations**: a `CANCEL` transaction zeroes itself and its parent
//! - **Location bonus**: added once per employee, only to a non-zero total
//! - **Deterministic output**: results follow employee input order
//!
//! ## Example
//!
//! ```no_run
//! use incentive_engine::{
//!     compute_results, filter_eligible, read_employees, read_frauds, read_transactions, write_report,
//! };
//! use std::io::Cursor;
//!
//! let employees = read_employees(Cursor::new("id,name,location\nE1,Asha,Delhi\n")).unwrap();
//! let frauds = read_frauds(Cursor::new("id\n")).unwrap();
//! let transactions = read_transactions(Cursor::new(
//!     "id,product,type,amount,parent,priority,emp\n1,LOAN,NORMAL,5000,,false,E1\n",
//! ))
//! .unwrap();
//!
//! let eligible = filter_eligible(&employees, &frauds);
//! let results = compute_results(&eligible, &transactions);
//! write_report(std::io::stdout(), &results, chrono::Local::now().naive_local()).unwrap();
//! ```

pub mod config;
pub mod eligibility;
pub mod employee;
pub mod engine;
pub mod error;
pub mod loader;
pub mod report;
pub mod transaction;

pub use config::Config;
pub use eligibility::filter_eligible;
pub use employee::{Employee, Fraud};
pub use engine::{
    calculate_amount, compute_results, location_bonus, product_amount, IncentiveResult,
};
pub use error::{IncentiveError, Result};
pub use loader::{
    load_employees, load_frauds, load_transactions, read_employees, read_frauds,
    read_transactions,
};
pub use report::{save_report, write_report};
pub use transaction::{ProductType, Transaction, TransactionRecord, TxType};
