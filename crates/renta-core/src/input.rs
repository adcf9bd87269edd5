//! # Permissive Form-Input Parsing
//!
//! The booking and check-in screens accept free-typed numbers. The system has
//! never rejected bad input: a day count that fails to parse books 1 day, a
//! blank override box means "no override", a missing mileage reads as 0.
//!
//! ## Why Defaults Instead of Errors?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  There is no user-visible error path anywhere in the product: no       │
//! │  toasts, no field highlighting, no rejected submits. Introducing       │
//! │  validation here would change externally observable behavior, so the   │
//! │  degrade-to-default policy is preserved and pinned by tests.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Parsing Semantics
//! The legacy forms ran everything through `parseInt`, which reads a leading
//! optionally-signed integer prefix and ignores the rest ("2.5" → 2,
//! "12abc" → 12, "abc" → failure). These parsers keep that exact behavior
//! and then apply the per-field default.

use crate::money::Money;

/// Parses a rental day count; anything without a positive leading integer
/// becomes 1 day.
///
/// ## Example
/// ```rust
/// use renta_core::input::parse_rental_days;
///
/// assert_eq!(parse_rental_days("3"), 3);
/// assert_eq!(parse_rental_days("2.5"), 2); // leading integer prefix
/// assert_eq!(parse_rental_days("abc"), 1);
/// assert_eq!(parse_rental_days("0"), 1);
/// ```
pub fn parse_rental_days(raw: &str) -> i64 {
    match leading_integer(raw) {
        Some(days) if days >= 1 => days,
        _ => 1,
    }
}

/// Parses the POS manual-override box; blank or unparseable means
/// "no override".
///
/// An override above the subtotal is allowed (upcharge, negative discount).
pub fn parse_manual_override(raw: &str) -> Option<Money> {
    if raw.trim().is_empty() {
        return None;
    }
    leading_integer(raw).map(Money::from_pesos)
}

/// Parses an odometer or counter field; bad input reads as 0.
pub fn parse_mileage(raw: &str) -> i64 {
    leading_integer(raw).unwrap_or(0)
}

/// Parses the late-days field; bad input reads as 0 (on time).
pub fn parse_late_days(raw: &str) -> i64 {
    leading_integer(raw).unwrap_or(0)
}

/// Parses a peso amount field (maintenance cost etc.); bad input reads as ₱0.
pub fn parse_amount(raw: &str) -> Money {
    Money::from_pesos(leading_integer(raw).unwrap_or(0))
}

/// Reads an optionally-signed leading integer prefix, `parseInt`-style.
/// Returns `None` when no digit follows the optional sign.
fn leading_integer(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    let (sign, digits) = match raw.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, raw.strip_prefix('+').unwrap_or(raw)),
    };
    let end = digits
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(i, _)| i)
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().ok().map(|n| sign * n)
}

// =============================================================================
// Unit Tests
// =============================================================================
