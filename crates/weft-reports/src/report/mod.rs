//! # Report Module
//!
//! Report builders for the Weft back office.
//!
//! ## Report Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    How a Report Is Built                                │
//! │                                                                         │
//! │  Core figures (cents, dates, counts)                                   │
//! │       │                                                                 │
//! │       │  LedgerStatement::build(&ledger)                               │
//! │       ▼                                                                 │
//! │  Typed rows of pre-formatted strings                                   │
//! │  ┌─────────────────────────────────────────────┐                       │
//! │  │ 02 Jan 2025 │ Export proceeds │ $2,933.33   │                       │
//! │  │ 15 Jan 2025 │ TT received     │ $1,433.33   │                       │
//! │  └─────────────────────────────────────────────┘                       │
//! │       │                                                                 │
//! │       ├──► serde JSON for the frontend tables                          │
//! │       └──► to_csv() for spreadsheet export                             │
//! │                                                                         │
//! │  Formatting happens exactly once, here. Arithmetic happens never.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Reports
//!
//! - [`ledger::LedgerStatement`] - Party ledger with running balance
//! - [`daily_book::DailyBookReport`] - Month of vouchers grouped by day
//! - [`tracking::TrackingReport`] - Delivery progress per product
//! - [`loans::LoanSchedule`] - Repayment history with outstanding balance

pub mod daily_book;
pub mod ledger;
pub mod loans;
pub mod tracking;

pub use daily_book::DailyBookReport;
pub use ledger::LedgerStatement;
pub use loans::LoanSchedule;
pub use tracking::TrackingReport;

use crate::error::ReportResult;

/// Finishes a CSV writer over an in-memory buffer into its String.
///
/// `into_inner` flushes, so no explicit flush call is needed.
pub(crate) fn writer_into_string(wtr: csv::Writer<Vec<u8>>) -> ReportResult<String> {
    let bytes = wtr
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))?;
    Ok(String::from_utf8(bytes)?)
}
