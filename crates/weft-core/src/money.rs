//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  On an invoice priced per dozen:                                        │
//! │    64000 pcs ÷ 12 × $0.03 = $159.99999...  → Off by a cent!            │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    (64000 × 3 + 6) / 12 = 16000 cents = $160.00 exactly                │
//! │    Every rounding decision is explicit and documented                  │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use weft_core::money::Money;
//!
//! // Create from cents (preferred)
//! let price = Money::from_cents(1099); // $10.99
//!
//! // Arithmetic operations
//! let doubled = price * 2;            // $21.98
//! let total = price + Money::from_cents(500); // $15.99
//!
//! // Decimal input goes through the ONE checked ingest point:
//! let amount = Money::try_from_amount(10.99).unwrap();
//! assert_eq!(amount, price);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

use crate::error::{CoreResult, WordsError};
use crate::validation::validate_amount;
use crate::words;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents for USD).
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values for payables, adjustments
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
///
/// ## User Workflow Context
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                    Where Money is Used                                  │
/// │                                                                         │
/// │  PI item.unit_price ──► item.line_total ──► PI totals ──► LC amount    │
/// │                                                                         │
/// │  LedgerEntry.debit/credit ──► running balance ──► receivables/payables │
/// │                                                                         │
/// │  Loan.principal ──► repayment components ──► outstanding               │
/// │                                                                         │
/// │  EVERY monetary value in the system flows through this type            │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use weft_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    ///
    /// ## Why Cents?
    /// Using the smallest unit eliminates all floating-point concerns.
    /// Calculations, serialized data, and exports all use cents.
    /// Only display formatting converts to dollars.
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units (dollars and cents).
    ///
    /// ## Example
    /// ```rust
    /// use weft_core::money::Money;
    ///
    /// let price = Money::from_major_minor(10, 99); // $10.99
    /// assert_eq!(price.cents(), 1099);
    ///
    /// let negative = Money::from_major_minor(-5, 50); // -$5.50 (adjustment)
    /// assert_eq!(negative.cents(), -550);
    /// ```
    ///
    /// ## Note
    /// For negative amounts, only the major unit should be negative.
    /// `from_major_minor(-5, 50)` = -$5.50, not -$4.50
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        // Handle sign: if major is negative, minor should subtract
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Converts a decimal amount to Money, rounding to the nearest cent.
    ///
    /// The one sanctioned path from floating point into the money domain.
    /// Ties round away from zero, matching the words formatter so an
    /// amount and its words sentence never disagree about the cents.
    ///
    /// ## Errors
    /// Rejects NaN, infinite, negative, and out-of-range input via
    /// [`validate_amount`](crate::validation::validate_amount).
    ///
    /// ## Example
    /// ```rust
    /// use weft_core::money::Money;
    ///
    /// let amount = Money::try_from_amount(1234.56).unwrap();
    /// assert_eq!(amount.cents(), 123456);
    ///
    /// assert!(Money::try_from_amount(f64::NAN).is_err());
    /// assert!(Money::try_from_amount(-0.01).is_err());
    /// ```
    pub fn try_from_amount(amount: f64) -> CoreResult<Self> {
        validate_amount(amount)?;
        Ok(Money((amount * 100.0).round() as i64))
    }

    /// Returns the value in cents (smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use weft_core::money::Money;
    ///
    /// let price = Money::from_cents(1099);
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    ///
    /// ## Example
    /// ```rust
    /// use weft_core::money::Money;
    ///
    /// let price = Money::from_cents(1099);
    /// assert_eq!(price.dollars(), 10);
    ///
    /// let negative = Money::from_cents(-550);
    /// assert_eq!(negative.dollars(), -5);
    /// ```
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    ///
    /// ## Example
    /// ```rust
    /// use weft_core::money::Money;
    ///
    /// let price = Money::from_cents(1099);
    /// assert_eq!(price.cents_part(), 99);
    ///
    /// let negative = Money::from_cents(-550);
    /// assert_eq!(negative.cents_part(), 50); // Absolute value
    /// ```
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    ///
    /// ## Example
    /// ```rust
    /// use weft_core::money::Money;
    ///
    /// let zero = Money::zero();
    /// assert_eq!(zero.cents(), 0);
    /// assert!(zero.is_zero());
    /// ```
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns the absolute value.
    ///
    /// ## Example
    /// ```rust
    /// use weft_core::money::Money;
    ///
    /// let payable = Money::from_cents(-550);
    /// assert_eq!(payable.abs().cents(), 550);
    /// ```
    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use weft_core::money::Money;
    ///
    /// let price_per_yard = Money::from_cents(169); // $1.69
    /// let line_total = price_per_yard.multiply_quantity(64);
    /// assert_eq!(line_total.cents(), 10816); // $108.16
    /// ```
    ///
    /// ## User Workflow
    /// ```text
    /// Fabric: 96% Polyester 4% Spandex, $1.69/yard
    /// Quantity: 64 yards
    ///      │
    ///      ▼
    /// multiply_quantity(64) ← THIS FUNCTION
    ///      │
    ///      ▼
    /// Line Total: $108.16
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// Line total for a per-dozen unit price over a piece count.
    ///
    /// Labels and tags are priced by the dozen while quantities are
    /// counted in pieces, so every line total is `pieces * price / 12`.
    ///
    /// ## Implementation
    /// Integer math with half-up rounding: `(pieces * price + 6) / 12`.
    /// i128 keeps the intermediate product from overflowing on bulk
    /// orders.
    ///
    /// ## Example
    /// ```rust
    /// use weft_core::money::Money;
    ///
    /// let price_per_dozen = Money::from_cents(3); // $0.03/dzn
    /// let line_total = price_per_dozen.price_per_dozen_total(64_000);
    /// assert_eq!(line_total.cents(), 16_000); // $160.00 exactly
    /// ```
    pub fn price_per_dozen_total(&self, pieces: i64) -> Money {
        let cents = (self.0 as i128 * pieces as i128 + 6) / 12;
        Money::from_cents(cents as i64)
    }

    /// Renders this amount as the words sentence used on trade documents.
    ///
    /// Exact integer path into the words formatter: no float splitting,
    /// so an amount held as Money can never round differently from its
    /// printed words. Exactly zero renders as the bare word `"Zero"`,
    /// matching [`crate::words::amount_in_words`].
    ///
    /// ## Errors
    /// Negative amounts and dollar parts at or above the supported range
    /// return [`WordsError`].
    ///
    /// ## Example
    /// ```rust
    /// use weft_core::money::Money;
    ///
    /// let amount = Money::from_cents(123456);
    /// assert_eq!(
    ///     amount.in_words().unwrap(),
    ///     "One Thousand Two Hundred Thirty Four & Cents Fifty Six Only."
    /// );
    /// ```
    pub fn in_words(&self) -> Result<String, WordsError> {
        if self.is_negative() {
            return Err(WordsError::Negative {
                amount: self.0 as f64 / 100.0,
            });
        }
        if self.is_zero() {
            return Ok("Zero".to_string());
        }
        if self.dollars() >= words::MAX_DOLLARS {
            return Err(WordsError::TooLarge {
                max_dollars: words::MAX_DOLLARS,
            });
        }
        Ok(words::words_from_parts(self.dollars(), self.cents_part()))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for debugging. Report output goes through
/// `format::format_currency`, which adds thousands separators.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by integer (for quantity calculations).
impl Mul<i32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i32) -> Self {
        Money(self.0 * qty as i64)
    }
}

/// Multiplication by i64.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
