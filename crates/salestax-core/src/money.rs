//! # Money Module
//!
//! Provides the `Money` type for handling monetary values exactly.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In binary floating point:                                              │
//! │    14.99 * 10 / 100 = 1.4990000000000001  ❌ ceil-to-0.05 drifts        │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    1499 cents × 1000 bps = 1_499_000 (units of 1/10000 cent)            │
//! │    ceil(1_499_000 / 50_000) × 5 = 150 cents  → 1.50 exactly             │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use salestax_core::money::Money;
//!
//! let price: Money = "14.99".parse().unwrap();
//! assert_eq!(price.cents(), 1499);
//! assert_eq!(price.to_string(), "14.99");
//!
//! let total = price * 2 + Money::from_cents(150);
//! assert_eq!(total.to_string(), "31.48");
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};
use std::str::FromStr;

use crate::error::MoneyError;
use crate::types::TaxRate;

/// Basis points in 100%.
const BPS_PER_UNIT: i128 = 10_000;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in cents.
///
/// ## Design Decisions
/// - **i64**: plenty of headroom for receipt totals; intermediate products use i128
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Serde**: serialized as a two-decimal string (`"12.49"`), never a float
///
/// ## Where Money is Used
/// ```text
/// "12.49" ──► Product.shelf_price ──┬──► TaxRule::calculate ──► CartItem.tax
///                                   │                                │
///                                   └────────────┬───────────────────┘
///                                                ▼
///                                  CartItem.cost ──► Cart.total_cost
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

impl Money {
    /// Zero money value.
    pub const ZERO: Money = Money(0);

    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use salestax_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // 10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
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

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Checks whether the value is an exact multiple of `increment`.
    ///
    /// A zero increment only divides zero.
    pub const fn is_multiple_of(&self, increment: Money) -> bool {
        if increment.0 == 0 {
            return self.0 == 0;
        }
        self.0 % increment.0 == 0
    }

    /// Calculates `self × rate` and rounds the result UP to the next
    /// multiple of `increment`.
    ///
    /// ## Rounding Explained
    /// ```text
    /// ┌─────────────────────────────────────────────────────────────────────┐
    /// │  ROUND UP TO THE NEAREST 0.05                                       │
    /// │                                                                     │
    /// │  raw = price × rate / 100%                                          │
    /// │  tax = ceil(raw / 0.05) × 0.05                                      │
    /// │                                                                     │
    /// │    47.50 × 5%  = 2.375  → 2.40                                      │
    /// │    14.99 × 10% = 1.499  → 1.50                                      │
    /// │    10.00 × 5%  = 0.50   → 0.50  (already a multiple: unchanged)     │
    /// └─────────────────────────────────────────────────────────────────────┘
    /// ```
    ///
    /// ## Implementation
    /// Everything stays in integers: `cents × bps` is the raw tax in units of
    /// 1/10000 cent, so a single ceiling division by `10000 × increment`
    /// yields the number of increments.
    ///
    /// Only defined for non-negative amounts and a positive increment; a
    /// non-positive increment returns the amount rounded up to whole cents.
    ///
    /// ## Example
    /// ```rust
    /// use salestax_core::money::Money;
    /// use salestax_core::types::TaxRate;
    ///
    /// let price = Money::from_cents(4750);
    /// let tax = price.tax_rounded_up(TaxRate::from_percent(5), Money::from_cents(5));
    /// assert_eq!(tax.cents(), 240);
    /// ```
    pub fn tax_rounded_up(&self, rate: TaxRate, increment: Money) -> Money {
        let raw = self.0 as i128 * rate.bps() as i128;
        let step = increment.0.max(1) as i128;
        let divisor = BPS_PER_UNIT * step;
        let increments = div_ceil(raw, divisor);
        Money::from_cents((increments * step) as i64)
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use salestax_core::money::Money;
    ///
    /// let unit = Money::from_cents(299);
    /// assert_eq!(unit.multiply_quantity(3).cents(), 897);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: u32) -> Self {
        Money(self.0 * qty as i64)
    }
}

/// Ceiling division that is correct for negative numerators too.
fn div_ceil(numerator: i128, divisor: i128) -> i128 {
    let quotient = numerator / divisor;
    if numerator % divisor > 0 {
        quotient + 1
    } else {
        quotient
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Reads an amount written with exactly two decimal places (`"0.85"`,
/// `"47.50"`). No rounding is applied: anything else is rejected.
impl FromStr for Money {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || MoneyError::InvalidFormat(s.to_string());

        let (major, minor) = s.split_once('.').ok_or_else(invalid)?;
        if major.is_empty()
            || minor.len() != 2
            || !major.bytes().all(|b| b.is_ascii_digit())
            || !minor.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }

        let overflow = || MoneyError::Overflow(s.to_string());
        let major: i64 = major.parse().map_err(|_| overflow())?;
        let minor: i64 = minor.parse().map_err(|_| invalid())?;
        let cents = major
            .checked_mul(100)
            .and_then(|c| c.checked_add(minor))
            .ok_or_else(overflow)?;

        Ok(Money(cents))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows the amount with two decimals and no currency symbol: `"16.49"`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.dollars().abs(), self.cents_part())
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
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

/// Multiplication by a quantity.
impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: u32) -> Self {
        self.multiply_quantity(qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const NICKEL: Money = Money::from_cents(5);

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1099).to_string(), "10.99");
        assert_eq!(Money::from_cents(500).to_string(), "5.00");
        assert_eq!(Money::from_cents(85).to_string(), "0.85");
        assert_eq!(Money::from_cents(0).to_string(), "0.00");
        assert_eq!(Money::from_cents(-550).to_string(), "-5.50");
    }

    #[test]
    fn test_parse_exact_two_decimals() {
        assert_eq!("12.49".parse::<Money>().unwrap().cents(), 1249);
        assert_eq!("0.85".parse::<Money>().unwrap().cents(), 85);
        assert_eq!("10.00".parse::<Money>().unwrap().cents(), 1000);
        assert_eq!("007.05".parse::<Money>().unwrap().cents(), 705);
    }

    #[test]
    fn test_parse_rejects_other_shapes() {
        for bad in ["12", "12.4", "12.499", ".49", "12.", "-1.00", "1,00", "1.0a", " 1.00", ""] {
            assert_eq!(
                bad.parse::<Money>(),
                Err(MoneyError::InvalidFormat(bad.to_string())),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_overflow() {
        let huge = "99999999999999999999.00";
        assert_eq!(
            huge.parse::<Money>(),
            Err(MoneyError::Overflow(huge.to_string()))
        );
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a * 3).cents(), 3000);

        let mut c = a;
        c += b;
        assert_eq!(c.cents(), 1500);

        let total: Money = [a, b, c].iter().sum();
        assert_eq!(total.cents(), 3000);
    }

    #[test]
    fn test_tax_rounds_up_to_nickel() {
        // 14.99 at 10% = 1.499 → 1.50
        let tax = Money::from_cents(1499).tax_rounded_up(TaxRate::from_percent(10), NICKEL);
        assert_eq!(tax.cents(), 150);

        // 47.50 at 5% = 2.375 → 2.40
        let tax = Money::from_cents(4750).tax_rounded_up(TaxRate::from_percent(5), NICKEL);
        assert_eq!(tax.cents(), 240);

        // 11.25 at 5% = 0.5625 → 0.60
        let tax = Money::from_cents(1125).tax_rounded_up(TaxRate::from_percent(5), NICKEL);
        assert_eq!(tax.cents(), 60);
    }

    #[test]
    fn test_tax_exact_multiple_is_not_bumped() {
        // 10.00 at 5% = 0.50 exactly
        let tax = Money::from_cents(1000).tax_rounded_up(TaxRate::from_percent(5), NICKEL);
        assert_eq!(tax.cents(), 50);

        // 47.50 at 10% = 4.75 exactly
        let tax = Money::from_cents(4750).tax_rounded_up(TaxRate::from_percent(10), NICKEL);
        assert_eq!(tax.cents(), 475);
    }

    #[test]
    fn test_tax_on_zero_and_tiny_amounts() {
        let zero = Money::ZERO.tax_rounded_up(TaxRate::from_percent(10), NICKEL);
        assert!(zero.is_zero());

        // 0.01 at 5% = 0.0005 → 0.05
        let tiny = Money::from_cents(1).tax_rounded_up(TaxRate::from_percent(5), NICKEL);
        assert_eq!(tiny.cents(), 5);
    }

    #[test]
    fn test_is_multiple_of() {
        assert!(Money::from_cents(150).is_multiple_of(NICKEL));
        assert!(!Money::from_cents(151).is_multiple_of(NICKEL));
        assert!(Money::ZERO.is_multiple_of(Money::ZERO));
        assert!(!Money::from_cents(1).is_multiple_of(Money::ZERO));
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&Money::from_cents(1649)).unwrap();
        assert_eq!(json, "\"16.49\"");

        let back: Money = serde_json::from_str("\"0.85\"").unwrap();
        assert_eq!(back.cents(), 85);

        assert!(serde_json::from_str::<Money>("\"0.8\"").is_err());
    }
}
