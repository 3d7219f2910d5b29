//! # Money Module
//!
//! Provides the `Money` type and the amount parser used by the scoring rules.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  As floats:                                                             │
//! │    35.35 % 0.25 = 0.0999999999999979   (is it a multiple? who knows)   │
//! │    1.15 * 0.2  = 0.22999999999999998   (ceil is fine... this time)     │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    3535 % 25 = 10    → not a multiple of a quarter, exactly            │
//! │    ceil(115 * 2000 / 1_000_000) = 1                                    │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use points_core::money::Money;
//!
//! let total: Money = "35.35".parse().unwrap();
//! assert_eq!(total.cents(), 3535);
//! assert!(!total.is_whole_units());
//!
//! // Malformed text is an error, never a silent zero
//! assert!("abc".parse::<Money>().is_err());
//! ```

use std::str::FromStr;

use crate::error::{ParseError, ParseResult};

/// Basis points in one whole unit (100% = 10000 bps).
const BPS_PER_UNIT: i128 = 10_000;

/// Cents in one whole currency unit.
const CENTS_PER_UNIT: i64 = 100;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents for USD).
///
/// ## Design Decisions
/// - **i64 (signed)**: receipts from the wild can carry negative lines
/// - **Single field tuple struct**: Zero-cost abstraction over i64
///
/// ## Where Money is Used
/// ```text
/// Receipt.total ──► parse_amount ──► rules 2, 3, 6
/// Item.price    ──► parse_amount ──► rule 5 (ceil(price × 20%))
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use points_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from whole currency units.
    #[inline]
    pub const fn from_units(units: i64) -> Self {
        Money(units * CENTS_PER_UNIT)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// True when the amount has no fractional cents part (`9.00`, `10`).
    ///
    /// This is a numeric test, so `"10"`, `"10.0"` and `"10.000"` all qualify.
    ///
    /// ```rust
    /// use points_core::money::Money;
    ///
    /// assert!(Money::from_cents(900).is_whole_units());
    /// assert!(!Money::from_cents(901).is_whole_units());
    /// ```
    #[inline]
    pub const fn is_whole_units(&self) -> bool {
        self.0 % CENTS_PER_UNIT == 0
    }

    /// True when the amount is an exact multiple of `step`.
    ///
    /// A zero step never divides anything.
    ///
    /// ```rust
    /// use points_core::money::Money;
    ///
    /// let quarter = Money::from_cents(25);
    /// assert!(Money::from_cents(1075).is_multiple_of(quarter));
    /// assert!(!Money::from_cents(3535).is_multiple_of(quarter));
    /// ```
    #[inline]
    pub const fn is_multiple_of(&self, step: Money) -> bool {
        step.0 != 0 && self.0 % step.0 == 0
    }

    /// Applies a rate in basis points and rounds UP to whole currency units.
    ///
    /// ## Implementation
    /// Integer math over i128: `ceil(cents × bps / (100 × 10000))`.
    /// The ceiling is a true ceiling for negative amounts as well
    /// (`-1.20 → -1`), computed via Euclidean division.
    ///
    /// ## Example
    /// ```rust
    /// use points_core::money::Money;
    ///
    /// // $12.25 × 20% = 2.45 → 3
    /// assert_eq!(Money::from_cents(1225).ceil_units_at_bps(2000), 3);
    /// // $10.00 × 20% = 2.00 → 2 (no epsilon bump)
    /// assert_eq!(Money::from_cents(1000).ceil_units_at_bps(2000), 2);
    /// ```
    pub fn ceil_units_at_bps(&self, bps: u32) -> i64 {
        let numerator = self.0 as i128 * bps as i128;
        let denominator = CENTS_PER_UNIT as i128 * BPS_PER_UNIT;
        let ceiling = -((-numerator).div_euclid(denominator));
        ceiling as i64
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Parses a decimal currency string into [`Money`].
///
/// ## Accepted Grammar
/// ```text
/// [ws] [+|-] digits [. digits] [ws]      "6.49", "10", "-3.5", " 2.00 "
/// [ws] [+|-] . digits [ws]               ".50"
/// ```
///
/// Fraction digits beyond the second must be zero: `"10.000"` is ten dollars,
/// `"10.005"` is rejected because it cannot be expressed in cents.
///
/// ## Errors
/// [`ParseError::Amount`] for empty input, stray characters, sub-cent
/// precision, or values that overflow i64 cents.
pub fn parse_amount(input: &str) -> ParseResult<Money> {
    let fail = |reason: &'static str| ParseError::Amount {
        input: input.to_string(),
        reason,
    };

    let text = input.trim();
    let (negative, unsigned) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));

    if whole.is_empty() && fraction.is_empty() {
        return Err(fail("no digits"));
    }
    if !whole.bytes().all(|b| b.is_ascii_digit()) || !fraction.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(fail("not a decimal number"));
    }

    let (cents_digits, excess) = fraction.split_at(fraction.len().min(2));
    if excess.bytes().any(|b| b != b'0') {
        return Err(fail("more precise than one cent"));
    }

    let units: i64 = if whole.is_empty() {
        0
    } else {
        whole.parse().map_err(|_| fail("amount too large"))?
    };

    // "5" → 50 cents, "05" → 5 cents
    let minor = cents_digits
        .bytes()
        .chain(std::iter::repeat(b'0'))
        .take(2)
        .fold(0i64, |acc, b| acc * 10 + i64::from(b - b'0'));

    let cents = units
        .checked_mul(CENTS_PER_UNIT)
        .and_then(|c| c.checked_add(minor))
        .ok_or_else(|| fail("amount too large"))?;

    Ok(Money(if negative { -cents } else { cents }))
}

impl FromStr for Money {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_amount(s)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
