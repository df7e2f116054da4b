//! # Domain Types
//!
//! Shared domain types used throughout Weft.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │ ProformaInvoice │   │ LetterOfCredit  │   │      Loan       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (UUID)      │   │  id (UUID)      │   │  id (UUID)      │       │
//! │  │  pi_no          │   │  lc_no          │   │  loan_no        │       │
//! │  │  vendor         │   │  pi_reference   │   │  loan_type      │       │
//! │  │  status         │   │  status         │   │  status         │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │     Vendor      │   │   PiStatus      │   │  VoucherType    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  FashionRepublic│   │  Draft          │   │  Receipt        │       │
//! │  │  MoonTextile    │   │  Confirmed ...  │   │  Payment ...    │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Dual-Key Identity Pattern
//! Every entity has:
//! - `id`: UUID v4 - immutable, used for cross-references in memory
//! - Business number: (pi_no, lc_no, loan_no) - human-readable, printed on
//!   documents

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

// =============================================================================
// Identity
// =============================================================================

/// Generates a fresh UUID v4 entity id.
///
/// ## Why UUID v4?
/// Globally unique without coordination, so entities created offline on
/// different machines can never collide.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

// =============================================================================
// Vendor
// =============================================================================

/// The exporting identity a document is issued under.
///
/// The house operates two names: Fashion Republic for labels and cartons,
/// Moon Textile for fabric. Each carries its own PI-number prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Vendor {
    FashionRepublic,
    MoonTextile,
}

impl Vendor {
    /// Two-letter prefix used in PI numbers (`FR-...`, `MT-...`).
    #[inline]
    pub const fn prefix(&self) -> &'static str {
        match self {
            Vendor::FashionRepublic => "FR",
            Vendor::MoonTextile => "MT",
        }
    }

    /// Full trading name as printed on document letterheads.
    #[inline]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Vendor::FashionRepublic => "Fashion Republic",
            Vendor::MoonTextile => "Moon Textile",
        }
    }
}

// =============================================================================
// Buyer
// =============================================================================

/// The overseas buyer a PI or LC is addressed to.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Buyer {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Registered company name.
    pub name: String,

    /// Street address as it appears on documents.
    pub address: String,

    /// City/country line.
    pub location: String,
}

impl Buyer {
    /// Creates a buyer with a fresh id.
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Buyer {
            id: new_id(),
            name: name.into(),
            address: address.into(),
            location: location.into(),
        }
    }
}

// =============================================================================
// Status Enums
// =============================================================================

/// Lifecycle of a proforma invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PiStatus {
    /// Being drafted, not yet shared with the buyer.
    Draft,
    /// Sent to the buyer, awaiting confirmation.
    Sent,
    /// Buyer confirmed; an LC may be opened against it.
    Confirmed,
    /// Cancelled before confirmation.
    Cancelled,
}

impl Default for PiStatus {
    fn default() -> Self {
        PiStatus::Draft
    }
}

/// Lifecycle of a letter of credit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum LcStatus {
    /// Opened at the bank, documents not yet accepted.
    Pending,
    /// In force; shipment window open.
    Active,
    /// Goods shipped, documents presented.
    Shipped,
    /// Proceeds realized.
    Completed,
    /// Cancelled or expired unused.
    Cancelled,
}

impl Default for LcStatus {
    fn default() -> Self {
        LcStatus::Pending
    }
}

/// Delivery progress of a tracked product. Derived from quantities,
/// except `Delayed`, which is an explicit operator flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryStatus {
    Pending,
    Partial,
    Completed,
    Delayed,
}

impl DeliveryStatus {
    /// Lowercase label used in report rows and exports.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            DeliveryStatus::Pending => "pending",
            DeliveryStatus::Partial => "partial",
            DeliveryStatus::Completed => "completed",
            DeliveryStatus::Delayed => "delayed",
        }
    }
}

/// Status of a loan account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum LoanStatus {
    Active,
    Closed,
    Defaulted,
}

impl LoanStatus {
    /// Lowercase label used in report rows and exports.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            LoanStatus::Active => "active",
            LoanStatus::Closed => "closed",
            LoanStatus::Defaulted => "defaulted",
        }
    }
}

impl Default for LoanStatus {
    fn default() -> Self {
        LoanStatus::Active
    }
}

/// Who extended a loan to the business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum LoanType {
    /// Commercial bank financing.
    Bank,
    /// Personal lending from outside the company.
    Personal,
    /// Director's own funds lent to the business.
    Director,
}

impl LoanType {
    /// Lowercase label used in report rows and exports.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            LoanType::Bank => "bank",
            LoanType::Personal => "personal",
            LoanType::Director => "director",
        }
    }
}

/// Voucher classification in the daily book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum VoucherType {
    /// Cash or bank received.
    Receipt,
    /// Cash or bank paid out.
    Payment,
    /// Non-cash adjustment.
    Journal,
    /// Transfer between cash and bank.
    Contra,
}

impl VoucherType {
    /// Lowercase label used in report rows and exports.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            VoucherType::Receipt => "receipt",
            VoucherType::Payment => "payment",
            VoucherType::Journal => "journal",
            VoucherType::Contra => "contra",
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
