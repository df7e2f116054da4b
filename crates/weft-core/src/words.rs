//! # Amount in Words
//!
//! Converts monetary amounts to the English words sentence printed on trade
//! documents (commercial invoice, bill of exchange, proforma invoice).
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Amount → Words Pipeline                            │
//! │                                                                         │
//! │   1234.56                                                               │
//! │      │ split                                                            │
//! │      ▼                                                                  │
//! │   dollars=1234, cents=56                                                │
//! │      │ scale table: (1,000,000 "Million"), (1,000 "Thousand")           │
//! │      ▼                                                                  │
//! │   [One] Thousand [Two Hundred Thirty Four]     ← triplet per group     │
//! │      │ assemble                                                         │
//! │      ▼                                                                  │
//! │   "One Thousand Two Hundred Thirty Four & Cents Fifty Six Only."        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Output Conventions
//! - Exactly zero renders as the bare word `"Zero"` with no cents segment
//!   and no `"Only."` suffix. Trade paperwork never prints a zero amount,
//!   so the short-circuit has survived every document format revision.
//! - Zero cents render as the literal `"& Cents Zero"`.
//! - A zero dollar part leaves the integer segment empty, so the sentence
//!   leads with a space (`" & Cents Fifty Only."`). Downstream documents
//!   rely on this byte-for-byte, so it is pinned by tests rather than
//!   "fixed".
//! - The bill of exchange prints the sentence upper-cased; callers use
//!   [`str::to_uppercase`] on the result.

use crate::error::WordsError;

// =============================================================================
// Word Tables
// =============================================================================

/// Words for 1..=19. Index 0 is empty: zero contributes no words.
///
/// A single table up to nineteen covers the irregular teens (Eleven,
/// Twelve, Thirteen...) with a direct lookup instead of special cases.
const ONES: [&str; 20] = [
    "", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight",
    "Nine", "Ten", "Eleven", "Twelve", "Thirteen", "Fourteen", "Fifteen",
    "Sixteen", "Seventeen", "Eighteen", "Nineteen",
];

/// Words for the tens place. Indices 0 and 1 are never consulted: values
/// below twenty resolve through [`ONES`].
const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy",
    "Eighty", "Ninety",
];

/// Scale tiers, most significant first. Each thousands group is rendered
/// by the triplet converter followed by its scale word; a zero group
/// contributes neither. Extending the supported range (e.g. a Billion
/// tier) is one new row here, nothing else.
const SCALES: [(i64, &str); 2] = [(1_000_000, "Million"), (1_000, "Thousand")];

/// Exclusive upper bound on the dollar part: one tier above the largest
/// scale word. Amounts at or past this bound are rejected rather than
/// rendered as wrong words on a document.
pub const MAX_DOLLARS: i64 = SCALES[0].0 * 1_000;

// =============================================================================
// Conversion Internals
// =============================================================================

/// Append the words for a value in `[0, 999]`.
///
/// Hundreds digit, then tens, then units; each layer peels its digit off
/// and hands the remainder down. Zero appends nothing. Callers guarantee
/// the range; it is not re-validated on this hot path.
fn push_triplet(mut n: i64, out: &mut Vec<&'static str>) {
    debug_assert!((0..1000).contains(&n));
    if n >= 100 {
        out.push(ONES[(n / 100) as usize]);
        out.push("Hundred");
        n %= 100;
    }
    if n >= 20 {
        out.push(TENS[(n / 10) as usize]);
        n %= 10;
    }
    if n >= 1 {
        out.push(ONES[n as usize]);
    }
}

/// Append the words for a non-negative integer below [`MAX_DOLLARS`].
///
/// Walks the scale table most-significant-first, emitting each non-zero
/// thousands group with its scale word, then the final sub-thousand
/// remainder. `1_000_000` yields `One Million`, never `One Million
/// Thousand`: a zero group is skipped together with its scale word.
fn push_integer(mut n: i64, out: &mut Vec<&'static str>) {
    for (divisor, scale) in SCALES {
        if n >= divisor {
            push_triplet(n / divisor, out);
            out.push(scale);
            n %= divisor;
        }
    }
    push_triplet(n, out);
}

/// Assemble the full sentence from already-split dollar and cent parts.
///
/// Shared by the float entry point below and by `Money::in_words`, which
/// starts from exact integer cents. `cents` must be in `[0, 99]` and
/// `dollars` in `[0, MAX_DOLLARS)`.
pub(crate) fn words_from_parts(dollars: i64, cents: i64) -> String {
    let mut words = Vec::new();
    push_integer(dollars, &mut words);
    let dollar_words = words.join(" ");

    let cent_words = if cents > 0 {
        let mut words = Vec::new();
        push_triplet(cents, &mut words);
        words.join(" ")
    } else {
        "Zero".to_string()
    };

    format!("{} & Cents {} Only.", dollar_words, cent_words)
}

// =============================================================================
// Public Entry Point
// =============================================================================

/// Convert a decimal amount to its English words sentence.
///
/// ## Rules
/// - `0.0` exactly returns `"Zero"` (no cents segment, no suffix)
/// - otherwise `dollars = trunc(amount)` and `cents = round((amount -
///   dollars) * 100)`; a rounding carry (`cents == 100`, e.g. `99.999`)
///   moves into the dollar part
/// - zero cents render as the word `"Zero"`; a zero dollar part renders
///   as an empty segment (leading space preserved)
///
/// ## Errors
/// Returns [`WordsError`] for NaN or infinite input, negative input, and
/// integer parts at or above [`MAX_DOLLARS`].
///
/// ## Example
/// ```
/// use weft_core::words::amount_in_words;
///
/// assert_eq!(
///     amount_in_words(1234.56).unwrap(),
///     "One Thousand Two Hundred Thirty Four & Cents Fifty Six Only."
/// );
/// assert_eq!(amount_in_words(1.0).unwrap(), "One & Cents Zero Only.");
/// assert_eq!(amount_in_words(0.0).unwrap(), "Zero");
/// assert_eq!(amount_in_words(0.5).unwrap(), " & Cents Fifty Only.");
/// ```
pub fn amount_in_words(amount: f64) -> Result<String, WordsError> {
    if !amount.is_finite() {
        return Err(WordsError::NotFinite);
    }
    if amount < 0.0 {
        return Err(WordsError::Negative { amount });
    }
    if amount == 0.0 {
        return Ok("Zero".to_string());
    }

    // Saturating cast: absurdly large floats land on i64::MAX and fail
    // the range check below instead of wrapping.
    let mut dollars = amount.trunc() as i64;
    let mut cents = ((amount - amount.trunc()) * 100.0).round() as i64;
    if cents == 100 {
        dollars += 1;
        cents = 0;
    }
    if dollars >= MAX_DOLLARS {
        return Err(WordsError::TooLarge {
            max_dollars: MAX_DOLLARS,
        });
    }

    Ok(words_from_parts(dollars, cents))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_is_bare_word() {
        // No cents segment, no "Only." suffix.
        assert_eq!(amount_in_words(0.0).unwrap(), "Zero");
    }

    #[test]
    fn test_one_dollar() {
        assert_eq!(amount_in_words(1.0).unwrap(), "One & Cents Zero Only.");
    }

    #[test]
    fn test_cents_only_leads_with_empty_integer_segment() {
        let words = amount_in_words(0.5).unwrap();
        assert_eq!(words, " & Cents Fifty Only.");
        assert!(words.ends_with("& Cents Fifty Only."));
        assert!(words.starts_with(' '));
    }

    #[test]
    fn test_one_hundred() {
        let words = amount_in_words(100.0).unwrap();
        assert!(words.contains("One Hundred"));
        assert!(words.contains("& Cents Zero Only."));
        assert_eq!(words, "One Hundred & Cents Zero Only.");
    }

    #[test]
    fn test_typical_invoice_amount() {
        let words = amount_in_words(1234.56).unwrap();
        assert!(words.contains("One Thousand Two Hundred Thirty Four"));
        assert!(words.contains("& Cents Fifty Six Only."));
    }

    #[test]
    fn test_teens_use_direct_lookup() {
        assert_eq!(amount_in_words(11.0).unwrap(), "Eleven & Cents Zero Only.");
        assert_eq!(
            amount_in_words(417.15).unwrap(),
            "Four Hundred Seventeen & Cents Fifteen Only."
        );
    }

    #[test]
    fn test_compound_tens() {
        assert_eq!(
            amount_in_words(45.0).unwrap(),
            "Forty Five & Cents Zero Only."
        );
        assert_eq!(
            amount_in_words(99.99).unwrap(),
            "Ninety Nine & Cents Ninety Nine Only."
        );
    }

    #[test]
    fn test_one_million_emits_single_scale_word() {
        let words = amount_in_words(1_000_000.0).unwrap();
        assert_eq!(words.matches("Million").count(), 1);
        assert!(!words.contains("Million Thousand"));
        assert_eq!(words, "One Million & Cents Zero Only.");
    }

    #[test]
    fn test_zero_thousands_group_skips_scale_word() {
        assert_eq!(
            amount_in_words(1_000_500.0).unwrap(),
            "One Million Five Hundred & Cents Zero Only."
        );
    }

    #[test]
    fn test_largest_three_group_amount() {
        // All three triplet groups render; no Million tier involved.
        let words = amount_in_words(999_999.99).unwrap();
        assert_eq!(
            words,
            "Nine Hundred Ninety Nine Thousand Nine Hundred Ninety Nine \
             & Cents Ninety Nine Only."
        );
        assert!(!words.contains("Million"));
    }

    #[test]
    fn test_million_thousand_remainder_chain() {
        assert_eq!(
            amount_in_words(1_234_567.89).unwrap(),
            "One Million Two Hundred Thirty Four Thousand \
             Five Hundred Sixty Seven & Cents Eighty Nine Only."
        );
    }

    #[test]
    fn test_rounding_carry_into_dollars() {
        // 99.999 rounds to 100 cents; the carry lands in the dollar part
        // so the cents domain stays [0, 99].
        assert_eq!(
            amount_in_words(99.999).unwrap(),
            "One Hundred & Cents Zero Only."
        );
    }

    #[test]
    fn test_near_zero_fraction_rounds_to_zero_cents() {
        // Not exactly zero, so no short-circuit: the full sentence renders
        // with both segments empty-ish.
        assert_eq!(amount_in_words(0.004).unwrap(), " & Cents Zero Only.");
    }

    #[test]
    fn test_pure_function_repeat_calls_identical() {
        let first = amount_in_words(87_654.32).unwrap();
        let second = amount_in_words(87_654.32).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_negative_rejected() {
        assert_eq!(
            amount_in_words(-1.5),
            Err(WordsError::Negative { amount: -1.5 })
        );
    }

    #[test]
    fn test_non_finite_rejected() {
        assert_eq!(amount_in_words(f64::NAN), Err(WordsError::NotFinite));
        assert_eq!(amount_in_words(f64::INFINITY), Err(WordsError::NotFinite));
    }

    #[test]
    fn test_billion_tier_rejected() {
        assert_eq!(
            amount_in_words(1_000_000_000.0),
            Err(WordsError::TooLarge {
                max_dollars: MAX_DOLLARS
            })
        );
        // One cent under the bound still renders.
        let words = amount_in_words(999_999_999.99).unwrap();
        assert!(words.starts_with("Nine Hundred Ninety Nine Million"));
        assert!(words.ends_with("& Cents Ninety Nine Only."));
    }

    #[test]
    fn test_uppercase_for_bill_of_exchange() {
        let words = amount_in_words(2_500.0).unwrap().to_uppercase();
        assert_eq!(words, "TWO THOUSAND FIVE HUNDRED & CENTS ZERO ONLY.");
    }

    #[test]
    fn test_no_doubled_or_trailing_whitespace() {
        for amount in [7.0, 21.12, 305.0, 1_001.01, 20_020.2, 999_999.99] {
            let words = amount_in_words(amount).unwrap();
            assert!(!words.contains("  "), "doubled space in {words:?}");
            assert!(!words.ends_with(' '), "trailing space in {words:?}");
        }
    }
}
