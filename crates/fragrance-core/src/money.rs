//! # Money Module
//!
//! Prices, line totals and sale totals, all as whole cents.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  WHY NOT f64                                                            │
//! │                                                                         │
//! │  A cart of two Mandarine Sky at 49.99 in floating point:               │
//! │    49.99 * 2 = 99.98 (usually), 0.1 + 0.2 = 0.30000000000000004        │
//! │                                                                         │
//! │  Whole cents instead                                                    │
//! │    4999 cents * 2 = 9998 cents, always                                 │
//! │                                                                         │
//! │  Prices enter as text ("49.99") and are parsed straight to cents.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use fragrance_core::money::Money;
//!
//! let price: Money = "49.99".parse().unwrap();
//! assert_eq!(price.cents(), 4999);
//!
//! let line_total = price * 2;
//! assert_eq!(line_total.to_string(), "$99.98");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use std::str::FromStr;
use thiserror::Error;
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: subtraction never panics; validation rejects
///   negative prices at the input boundary
/// - **Single field tuple struct**: serializes as a bare integer
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Wraps a raw cent amount.
    ///
    /// ```rust
    /// use fragrance_core::money::Money;
    ///
    /// let price = Money::from_cents(11999); // $119.99
    /// assert_eq!(price.cents(), 11999);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units.
    ///
    /// `minor` is always non-negative; the sign comes from `major`.
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Unit price times a cart quantity.
    ///
    /// ```rust
    /// use fragrance_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(4999);
    /// assert_eq!(unit_price.multiply_quantity(2).cents(), 9998);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// Formats the amount with an arbitrary currency symbol.
    ///
    /// `Display` always uses `$`; the desktop config may pick another symbol.
    pub fn format_with(&self, symbol: &str) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        format!(
            "{}{}{}.{:02}",
            sign,
            symbol,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Why a decimal string could not be read as Money.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseMoneyError {
    #[error("amount is empty")]
    Empty,

    #[error("'{0}' is not a decimal amount")]
    Invalid(String),

    #[error("at most two decimal places are allowed")]
    TooManyDecimals,

    #[error("amount is too large")]
    Overflow,
}

/// Parses decimal text such as `"49.99"`, `"115.5"`, `"10"` or `"-5.50"`.
///
/// ## Rules
/// - Surrounding whitespace is ignored
/// - Optional leading `-` or `+`
/// - At most two fractional digits
/// - No exponents, no thousands separators
impl FromStr for Money {
    type Err = ParseMoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseMoneyError::Empty);
        }

        let (negative, digits) = match s.as_bytes()[0] {
            b'-' => (true, &s[1..]),
            b'+' => (false, &s[1..]),
            _ => (false, s),
        };

        let (whole, frac) = match digits.split_once('.') {
            Some((whole, frac)) => (whole, frac),
            None => (digits, ""),
        };

        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if (whole.is_empty() && frac.is_empty()) || !all_digits(whole) || !all_digits(frac) {
            return Err(ParseMoneyError::Invalid(s.to_string()));
        }
        if frac.len() > 2 {
            return Err(ParseMoneyError::TooManyDecimals);
        }

        let whole_value: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| ParseMoneyError::Overflow)?
        };
        // "5" → 50 cents, "05" → 5 cents
        let frac_value: i64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<i64>().map_err(|_| ParseMoneyError::Overflow)? * 10,
            _ => frac.parse().map_err(|_| ParseMoneyError::Overflow)?,
        };

        let cents = whole_value
            .checked_mul(100)
            .and_then(|c| c.checked_add(frac_value))
            .ok_or(ParseMoneyError::Overflow)?;

        Ok(Money(if negative { -cents } else { cents }))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with("$"))
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by quantity.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
