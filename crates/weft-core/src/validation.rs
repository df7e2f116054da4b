//! # Validation Module
//!
//! Input validation utilities for Weft.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend (TypeScript)                                        │
//! │  ├── Basic format checks (empty, length)                               │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE (Rust)                                           │
//! │  ├── Type validation (deserialization)                                 │
//! │  └── Business rule validation before any derivation runs              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Domain operations                                            │
//! │  └── Invariant checks (over-delivery, repayment bounds)                │
//! │                                                                         │
//! │  Defense in depth: Multiple layers catch different errors              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust,no_run
//! use weft_core::validation::{validate_pi_no, validate_quantity};
//!
//! // Validate a document number before using it as a reference
//! validate_pi_no("MT-07/25SP (04)").unwrap();
//!
//! // Validate a delivery quantity before recording it
//! validate_quantity(500).unwrap();
//! ```

use crate::error::ValidationError;
use crate::{MAX_ITEM_QUANTITY, words::MAX_DOLLARS};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a decimal monetary amount at a float ingest point.
///
/// ## Rules
/// - Must be a finite number (NaN/infinity rejected)
/// - Must be non-negative (zero is allowed)
/// - Must stay below the amount-in-words ceiling so every accepted
///   amount can also be spelled out on a document
///
/// ## Example
/// ```rust
/// use weft_core::validation::validate_amount;
///
/// assert!(validate_amount(1234.56).is_ok());
/// assert!(validate_amount(0.0).is_ok());
/// assert!(validate_amount(f64::NAN).is_err());
/// assert!(validate_amount(-0.01).is_err());
/// ```
pub fn validate_amount(amount: f64) -> ValidationResult<()> {
    if !amount.is_finite() {
        return Err(ValidationError::InvalidFormat {
            field: "amount".to_string(),
            reason: "must be a finite number".to_string(),
        });
    }

    if amount < 0.0 || amount >= MAX_DOLLARS as f64 {
        return Err(ValidationError::OutOfRange {
            field: "amount".to_string(),
            min: 0,
            max: MAX_DOLLARS,
        });
    }

    Ok(())
}

/// Validates a quantity value (pieces, yards, cartons).
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed MAX_ITEM_QUANTITY
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Tracking: Record Delivery                                              │
/// │                                                                         │
/// │  User enters quantity: 500                                             │
/// │       │                                                                 │
/// │       ▼                                                                 │
/// │  validate_quantity(500) ← THIS FUNCTION                                │
/// │       │                                                                 │
/// │       ├── qty <= 0? → Error: "quantity must be positive"               │
/// │       │                                                                 │
/// │       ├── qty > max? → Error: out of range                             │
/// │       │                                                                 │
/// │       └── OK → Proceed with record_delivery                            │
/// │                                                                         │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(())
}

/// Validates an interest or percentage rate in basis points.
///
/// ## Rules
/// - Must be between 0 and 10000 (0% to 100%)
/// - Bank loan rates in practice sit around 900-1500 (9%-15%)
pub fn validate_rate_bps(bps: u32) -> ValidationResult<()> {
    if bps > 10000 {
        return Err(ValidationError::OutOfRange {
            field: "rate".to_string(),
            min: 0,
            max: 10000,
        });
    }

    Ok(())
}

// =============================================================================
// String Validators
// =============================================================================

/// Validates a proforma invoice number.
///
/// ## Rules
/// - Must not be empty
/// - Must be between 3 and 40 characters
/// - Allowed characters: letters, digits, `-`, `/`, parentheses, spaces
///   (the house format looks like `MT-07/25SP (04)`)
///
/// ## Example
/// ```rust
/// use weft_core::validation::validate_pi_no;
///
/// assert!(validate_pi_no("FR-03/25 (12)").is_ok());
/// assert!(validate_pi_no("").is_err());
/// assert!(validate_pi_no("PI#12").is_err());
/// ```
pub fn validate_pi_no(pi_no: &str) -> ValidationResult<()> {
    validate_document_no("piNo", pi_no)
}

/// Validates a letter of credit number.
///
/// Same format rules as PI numbers; bank-issued numbers are plain
/// digit runs (`105225010123`), which the shared charset covers.
pub fn validate_lc_no(lc_no: &str) -> ValidationResult<()> {
    validate_document_no("lcNo", lc_no)
}

fn validate_document_no(field: &str, value: &str) -> ValidationResult<()> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.len() < 3 {
        return Err(ValidationError::TooShort {
            field: field.to_string(),
            min: 3,
        });
    }

    if value.len() > 40 {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: 40,
        });
    }

    if !value
        .chars()
        .all(|c| c.is_alphanumeric() || matches!(c, '-' | '/' | '(' | ')' | ' '))
    {
        return Err(ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: "must contain only letters, numbers, hyphens, slashes, parentheses and spaces"
                .to_string(),
        });
    }

    Ok(())
}

/// Validates a party name (buyer, supplier, lender, person on an IOU).
///
/// ## Rules
/// - Must not be empty
/// - Must be between 2 and 120 characters
pub fn validate_party_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "partyName".to_string(),
        });
    }

    if name.len() < 2 {
        return Err(ValidationError::TooShort {
            field: "partyName".to_string(),
            min: 2,
        });
    }

    if name.len() > 120 {
        return Err(ValidationError::TooLong {
            field: "partyName".to_string(),
            max: 120,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
