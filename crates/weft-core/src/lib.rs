//! # weft-core: Pure Business Logic for Weft
//!
//! This crate is the **heart** of Weft. It contains all business logic for
//! the garments-export back office as pure functions with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌──────────────────────────────────────────────────────────────────────┐
//! │                         Weft Architecture                            │
//! │                                                                      │
//! │  ┌────────────────────────────────────────────────────────────────┐  │
//! │  │                 weft-reports (Reporting Layer)                 │  │
//! │  │    ledger statements ──► daily book ──► schedules ──► CSV      │  │
//! │  └─────────────────────────────┬──────────────────────────────────┘  │
//! │                                │                                     │
//! │  ┌─────────────────────────────▼──────────────────────────────────┐  │
//! │  │                 ★ weft-core (THIS CRATE) ★                     │  │
//! │  │                                                                │  │
//! │  │   ┌─────────┐  ┌─────────┐  ┌─────────┐  ┌─────────┐          │  │
//! │  │   │  words  │  │  money  │  │   pi    │  │   lc    │          │  │
//! │  │   │ amounts │  │  Money  │  │ Labels  │  │  docs   │          │  │
//! │  │   │ spelled │  │  cents  │  │ Fabric  │  │ checks  │          │  │
//! │  │   └─────────┘  └─────────┘  └─────────┘  └─────────┘          │  │
//! │  │   ┌─────────┐  ┌─────────┐  ┌─────────┐  ┌─────────┐          │  │
//! │  │   │ ledger  │  │  loan   │  │tracking │  │validation│         │  │
//! │  │   │ parties │  │  EMI    │  │delivery │  │  rules  │          │  │
//! │  │   │ daybook │  │ payoff  │  │ history │  │  checks │          │  │
//! │  │   └─────────┘  └─────────┘  └─────────┘  └─────────┘          │  │
//! │  │                                                                │  │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │  │
//! │  └────────────────────────────────────────────────────────────────┘  │
//! └──────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`words`] - Amounts spelled out in English for printed documents
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`format`] - Display formatting (currency, numbers, dates)
//! - [`types`] - Shared domain types (Vendor, Buyer, statuses)
//! - [`pi`] - Proforma invoices for labels, fabric, and cartons
//! - [`lc`] - Letters of credit and their document checklists
//! - [`ledger`] - Party ledgers, the IOU book, and the daily cash book
//! - [`loan`] - Loan accounts and repayment tracking
//! - [`tracking`] - Delivery tracking against proforma invoices
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use weft_core::money::Money;
//! use weft_core::words::amount_in_words;
//!
//! // Create money from cents (never from floats!)
//! let amount = Money::from_cents(123456); // $1,234.56
//!
//! // Spell it out for the printed invoice
//! assert_eq!(
//!     amount.in_words().unwrap(),
//!     "One Thousand Two Hundred Thirty Four & Cents Fifty Six Only."
//! );
//!
//! // Or straight from a float at the edge of the system
//! assert_eq!(
//!     amount_in_words(250.0).unwrap(),
//!     "Two Hundred Fifty & Cents Zero Only."
//! );
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod format;
pub mod lc;
pub mod ledger;
pub mod loan;
pub mod money;
pub mod pi;
pub mod tracking;
pub mod types;
pub mod validation;
pub mod words;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use weft_core::Money` instead of
// `use weft_core::money::Money`

pub use error::{CoreError, CoreResult, ValidationError, WordsError};
pub use money::Money;
pub use types::*;
pub use words::amount_in_words;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum quantity accepted on a single order line
///
/// ## Business Reason
/// Label orders run to tens of thousands of pieces, so the ceiling sits
/// well above any real order. A million pieces on one line is a typo.
pub const MAX_ITEM_QUANTITY: i64 = 1_000_000;

/// Default usance tenor for back-to-back LCs, in days
///
/// ## Why a constant?
/// Nearly every back-to-back LC here is payable 90 days after sight.
/// Older records never stored the tenor at all, so readers fall back to
/// this when the field is missing.
pub const DEFAULT_SIGHT_DAYS: u32 = 90;
