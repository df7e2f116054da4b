//! # Display Formatting
//!
//! Pure formatting helpers shared by reports and document rendering:
//! grouped currency and number strings, the two date styles used on
//! paperwork, percentage math, and text truncation for narrow columns.
//!
//! ## Usage
//! ```rust
//! use weft_core::format::{format_currency, format_date};
//! use weft_core::money::Money;
//! use chrono::NaiveDate;
//!
//! assert_eq!(format_currency(Money::from_cents(123456)), "$1,234.56");
//!
//! let date = NaiveDate::from_ymd_opt(2025, 1, 2).unwrap();
//! assert_eq!(format_date(date), "02 Jan 2025");
//! ```

use chrono::NaiveDate;

use crate::money::Money;

// =============================================================================
// Numbers & Currency
// =============================================================================

/// Formats a Money value with thousands separators: `$1,234.56`.
///
/// The minus sign leads for negative amounts (`-$1,300.00`), matching
/// how payable balances appear on supplier statements.
pub fn format_currency(amount: Money) -> String {
    let sign = if amount.is_negative() { "-" } else { "" };
    format!(
        "{}${}.{:02}",
        sign,
        group_thousands(amount.dollars().abs()),
        amount.cents_part()
    )
}

/// Formats a number with thousands separators and a fixed number of
/// decimal places.
///
/// ## Example
/// ```rust
/// use weft_core::format::format_number;
///
/// assert_eq!(format_number(64_000.0, 0), "64,000");
/// assert_eq!(format_number(1234.567, 2), "1,234.57");
/// ```
pub fn format_number(value: f64, decimals: usize) -> String {
    let formatted = format!("{value:.decimals$}");
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (formatted.as_str(), None),
    };
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };

    let mut out = String::with_capacity(formatted.len() + digits.len() / 3);
    out.push_str(sign);
    out.push_str(&group_digit_str(digits));
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// Inserts thousands separators into an integer: `1234567` → `"1,234,567"`.
pub fn group_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let grouped = group_digit_str(&digits);
    if n < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Comma-groups a plain digit string, right to left.
fn group_digit_str(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

// =============================================================================
// Dates
// =============================================================================

/// Short document date: `02 Jan 2025`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d %b %Y").to_string()
}

/// Long document date, used where paperwork spells the month out:
/// `02 January 2025`.
pub fn format_date_long(date: NaiveDate) -> String {
    date.format("%d %B %Y").to_string()
}

// =============================================================================
// Misc
// =============================================================================

/// Rounded percentage of `value` over `total`.
///
/// Returns 0 when the denominator is zero so progress bars over empty
/// data render empty instead of dividing by zero.
///
/// ## Example
/// ```rust
/// use weft_core::format::calculate_percentage;
///
/// assert_eq!(calculate_percentage(1, 3), 33);
/// assert_eq!(calculate_percentage(2, 3), 67);
/// assert_eq!(calculate_percentage(5, 0), 0);
/// ```
pub fn calculate_percentage(value: i64, total: i64) -> u32 {
    if total == 0 {
        return 0;
    }
    (value as f64 / total as f64 * 100.0).round() as u32
}

/// Hard-truncates text to `max_len` characters, appending `...` when cut.
///
/// Character-based, not byte-based, so multi-byte names in particulars
/// columns cannot split mid-character.
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_len).collect();
        format!("{truncated}...")
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
