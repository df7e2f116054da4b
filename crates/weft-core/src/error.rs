//! # Error Types
//!
//! Domain-specific error types for weft-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  weft-core errors (this file)                                          │
//! │  ├── CoreError        - Business rule violations                       │
//! │  ├── WordsError       - Amount-in-words domain failures                │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  weft-reports errors (separate crate)                                  │
//! │  └── ReportError      - Report assembly / CSV serialization failures   │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ReportError → Consumer            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (PI number, loan number, etc.)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent business rule violations or domain logic failures.
/// They should be caught and translated to user-friendly messages.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Recorded delivery would exceed the ordered quantity.
    ///
    /// ## When This Occurs
    /// - A delivery update pushes total delivered past the PI's initial quantity
    ///
    /// ## User Workflow
    /// ```text
    /// Record delivery (qty: 500)
    ///      │
    ///      ▼
    /// Check remaining: initial=5000, delivered=4800 → remaining=200
    ///      │
    ///      ▼
    /// OverDelivery { product_code: "WB-001", remaining: 200, requested: 500 }
    ///      │
    ///      ▼
    /// UI shows: "Only 200 pcs of WB-001 left to deliver"
    /// ```
    #[error("Delivery of {requested} exceeds remaining quantity for {product_code}: {remaining} left")]
    OverDelivery {
        product_code: String,
        remaining: i64,
        requested: i64,
    },

    /// Repayment principal component exceeds the loan's outstanding balance.
    ///
    /// ## When This Occurs
    /// - A repayment is recorded whose principal portion is larger than what
    ///   is still owed (amounts in cents, the workspace-wide convention)
    #[error("Repayment principal {requested_cents} exceeds outstanding {outstanding_cents} on loan {loan_no}")]
    RepaymentExceedsOutstanding {
        loan_no: String,
        outstanding_cents: i64,
        requested_cents: i64,
    },

    /// Amount-in-words error (wraps WordsError).
    #[error("Amount-in-words error: {0}")]
    Words(#[from] WordsError),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Words Error
// =============================================================================

/// Failures of the amount-in-words formatter.
///
/// The formatter is total over non-negative finite amounts whose integer
/// part fits below the Billion tier. Anything outside that domain is
/// rejected here rather than rendered as wrong words on a trade document.
#[derive(Debug, Error, PartialEq)]
pub enum WordsError {
    /// Input was NaN or infinite.
    #[error("Amount is not a finite number")]
    NotFinite,

    /// Negative amounts have no representation on trade documents.
    #[error("Amount {amount} is negative")]
    Negative { amount: f64 },

    /// Integer part is at or above the Billion tier, which the scale
    /// table does not cover.
    #[error("Amount exceeds the supported range (must be below {max_dollars} dollars)")]
    TooLarge { max_dollars: i64 },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// Used for early validation before business logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too short.
    #[error("{field} must be at least {min} characters")]
    TooShort { field: String, min: usize },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., disallowed characters, not a finite number).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

/// Convenience type alias for validation Results.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::OverDelivery {
            product_code: "WB-001".to_string(),
            remaining: 200,
            requested: 500,
        };
        assert_eq!(
            err.to_string(),
            "Delivery of 500 exceeds remaining quantity for WB-001: 200 left"
        );
    }

    #[test]
    fn test_words_error_messages() {
        assert_eq!(
            WordsError::NotFinite.to_string(),
            "Amount is not a finite number"
        );
        let err = WordsError::TooLarge {
            max_dollars: 1_000_000_000,
        };
        assert_eq!(
            err.to_string(),
            "Amount exceeds the supported range (must be below 1000000000 dollars)"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "piNo".to_string(),
        };
        assert_eq!(err.to_string(), "piNo is required");

        let err = ValidationError::TooShort {
            field: "partyName".to_string(),
            min: 2,
        };
        assert_eq!(err.to_string(), "partyName must be at least 2 characters");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "piNo".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }

    #[test]
    fn test_words_converts_to_core_error() {
        let words_err = WordsError::Negative { amount: -1.5 };
        let core_err: CoreError = words_err.into();
        assert!(matches!(core_err, CoreError::Words(_)));
    }
}
