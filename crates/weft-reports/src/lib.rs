//! # weft-reports: Reporting Layer for Weft
//!
//! This crate turns the pure figures computed by `weft-core` into printable
//! statements and CSV exports. All arithmetic stays in the core; this layer
//! only formats and arranges.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Weft Report Flow                                │
//! │                                                                         │
//! │  Core data (ledgers, books, loans, tracked products)                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   weft-reports (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │    config     │    │    report     │    │    error     │  │   │
//! │  │   │ (letterhead)  │    │  (builders)   │    │ (ReportError)│  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ CompanyConfig │───►│ LedgerStmt    │    │ Words/Core   │  │   │
//! │  │   │ WEFT_* env    │    │ DailyBook     │    │ Csv/Utf8     │  │   │
//! │  │   │               │    │ Tracking/Loan │    │              │  │   │
//! │  │   └───────────────┘    └───────┬───────┘    └──────────────┘  │   │
//! │  │                               │                                │   │
//! │  └───────────────────────────────┼────────────────────────────────┘   │
//! │                                  │                                     │
//! │                 ┌────────────────┴────────────────┐                    │
//! │                 ▼                                 ▼                    │
//! │          JSON (frontend tables)           CSV (spreadsheets)           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`config`] - Company letterhead and currency settings
//! - [`error`] - Report error types
//! - [`report`] - Statement, book, tracking, and schedule builders
//!
//! ## Usage
//!
//! ```rust,ignore
//! use weft_reports::LedgerStatement;
//!
//! let statement = LedgerStatement::build(&ledger)?;
//! println!("{}", statement.to_csv()?);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;
pub mod report;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::CompanyConfig;
pub use error::{ReportError, ReportResult};

// Report re-exports for convenience
pub use report::daily_book::DailyBookReport;
pub use report::ledger::LedgerStatement;
pub use report::loans::LoanSchedule;
pub use report::tracking::TrackingReport;
