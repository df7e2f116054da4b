//! # Report Error Types
//!
//! Error types for report building and export.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  Core rule failure (CoreError / WordsError)      csv::Error             │
//! │       │                                               │                 │
//! │       └───────────────────┬───────────────────────────┘                 │
//! │                           ▼                                             │
//! │                ReportError (this module)                                │
//! │                           │                                             │
//! │                           ▼                                             │
//! │           Caller decides: log, skip report, or surface                  │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;
use weft_core::{CoreError, WordsError};

/// Report building and export errors.
#[derive(Debug, Error)]
pub enum ReportError {
    /// An amount could not be spelled out.
    ///
    /// ## When This Occurs
    /// - Closing balance beyond the billion-dollar words ceiling
    /// - Negative amount reaching a words line without `abs()`
    #[error("Amount words failed: {0}")]
    Words(#[from] WordsError),

    /// A core business rule rejected the data feeding a report.
    #[error("Core rule failed: {0}")]
    Core(#[from] CoreError),

    /// CSV writer failed.
    ///
    /// ## When This Occurs
    /// - Row with a different column count than the header
    /// - Underlying buffer write failure
    #[error("CSV export failed: {0}")]
    Csv(#[from] csv::Error),

    /// CSV buffer held invalid UTF-8.
    #[error("CSV buffer was not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Result type for report operations.
pub type ReportResult<T> = Result<T, ReportError>;
