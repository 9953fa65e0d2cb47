//! # Money
//!
//! Prices are held as whole cents in a `u64`. Operator input like `10.5` or
//! `3.999` is parsed as a [`Decimal`] and rounded to cents, so no binary
//! floating point is involved anywhere between the prompt and the store.
//!
//! ```text
//!   "10.555" ──parse──► Money(1056) ──Display──► "10.56"
//!   Money(1000) × 3 ──► Money(3000)   (Total_Value)
//! ```
//!
//! ## Usage
//! ```rust
//! use stockroom::money::Money;
//!
//! let price: Money = "10.00".parse().unwrap();
//! assert_eq!(price.cents(), 1000);
//! assert_eq!(price.checked_mul_quantity(3), Some(Money::from_cents(3000)));
//! assert_eq!(price.to_string(), "10.00");
//! ```

use std::fmt;
use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A non-negative amount in cents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(u64);

/// Why a decimal string could not become [`Money`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoneyParseError {
    #[error("not a decimal number")]
    Invalid,
    #[error("negative amount")]
    Negative,
    #[error("amount too large")]
    Overflow,
}

impl Money {
    #[inline]
    pub const fn from_cents(cents: u64) -> Self {
        Money(cents)
    }

    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn cents(&self) -> u64 {
        self.0
    }

    /// Whole-unit portion.
    #[inline]
    pub const fn dollars(&self) -> u64 {
        self.0 / 100
    }

    /// Cents portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> u64 {
        self.0 % 100
    }

    /// Multiplies a unit price by a quantity, or `None` on overflow.
    ///
    /// ```rust
    /// use stockroom::money::Money;
    ///
    /// let unit = Money::from_cents(299);
    /// assert_eq!(unit.checked_mul_quantity(3), Some(Money::from_cents(897)));
    /// assert_eq!(unit.checked_mul_quantity(u64::MAX), None);
    /// ```
    #[inline]
    pub fn checked_mul_quantity(&self, qty: u64) -> Option<Self> {
        self.0.checked_mul(qty).map(Money)
    }
}

/// Renders as `<units>.<cents>` with exactly two decimals and no currency sign.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = format!("{}.{:02}", self.dollars(), self.cents_part());
        f.pad(&text)
    }
}

/// Parses plain decimal text, rounding half-up to two decimals.
///
/// Accepts an optional sign, digits, and an optional fractional part
/// (`"10"`, `"10."`, `".5"`, `"+3.999"`). Exponents and digit separators are
/// rejected. A minus sign is only rejected when the rounded amount is
/// non-zero.
impl FromStr for Money {
    type Err = MoneyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let body = s.strip_prefix(['-', '+']).unwrap_or(s);
        let (whole, frac) = body.split_once('.').unwrap_or((body, ""));

        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if (whole.is_empty() && frac.is_empty()) || !all_digits(whole) || !all_digits(frac) {
            return Err(MoneyParseError::Invalid);
        }

        let sign = if s.starts_with('-') { "-" } else { "" };
        let whole = if whole.is_empty() { "0" } else { whole };
        let canonical = if frac.is_empty() {
            format!("{sign}{whole}")
        } else {
            format!("{sign}{whole}.{frac}")
        };

        // Well-formed text that Decimal cannot hold is out of range.
        let amount = Decimal::from_str(&canonical)
            .map_err(|_| MoneyParseError::Overflow)?
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(MoneyParseError::Negative);
        }

        amount
            .abs()
            .checked_mul(Decimal::ONE_HUNDRED)
            .and_then(|cents| cents.to_u64())
            .map(Money)
            .ok_or(MoneyParseError::Overflow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Result<u64, MoneyParseError> {
        s.parse::<Money>().map(|m| m.cents())
    }

    #[test]
    fn test_parse_plain_forms() {
        assert_eq!(parse("10"), Ok(1000));
        assert_eq!(parse("10.5"), Ok(1050));
        assert_eq!(parse("10."), Ok(1000));
        assert_eq!(parse(".25"), Ok(25));
        assert_eq!(parse("+3.10"), Ok(310));
        assert_eq!(parse("  7.00  "), Ok(700));
    }

    #[test]
    fn test_parse_rounds_half_up() {
        assert_eq!(parse("1.005"), Ok(101));
        assert_eq!(parse("1.004"), Ok(100));
        assert_eq!(parse("3.999"), Ok(400));
        assert_eq!(parse("0.0049"), Ok(0));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse(""), Err(MoneyParseError::Invalid));
        assert_eq!(parse("."), Err(MoneyParseError::Invalid));
        assert_eq!(parse("abc"), Err(MoneyParseError::Invalid));
        assert_eq!(parse("1.2.3"), Err(MoneyParseError::Invalid));
        assert_eq!(parse("1e3"), Err(MoneyParseError::Invalid));
        assert_eq!(parse("--1"), Err(MoneyParseError::Invalid));
        assert_eq!(parse("1_000"), Err(MoneyParseError::Invalid));
        assert_eq!(parse("-"), Err(MoneyParseError::Invalid));
    }

    #[test]
    fn test_parse_negative() {
        assert_eq!(parse("-1.00"), Err(MoneyParseError::Negative));
        assert_eq!(parse("-0"), Ok(0));
        assert_eq!(parse("-0.001"), Ok(0));
    }

    #[test]
    fn test_parse_overflow() {
        assert_eq!(parse("999999999999999999999"), Err(MoneyParseError::Overflow));
        assert_eq!(parse("184467440737095516.16"), Err(MoneyParseError::Overflow));
        assert_eq!(parse("184467440737095516.15"), Ok(u64::MAX));
        assert_eq!(
            parse("99999999999999999999999999999999999999"),
            Err(MoneyParseError::Overflow)
        );
    }

    #[test]
    fn test_parse_rounds_long_fractions() {
        assert_eq!(parse("0.125"), Ok(13));
        assert_eq!(parse("2.994999999999"), Ok(299));
        assert_eq!(parse("-0.004"), Ok(0));
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(0).to_string(), "0.00");
        assert_eq!(Money::from_cents(5).to_string(), "0.05");
        assert_eq!(Money::from_cents(123456).to_string(), "1234.56");
        assert_eq!(format!("{:>8}", Money::from_cents(150)), "    1.50");
    }

    #[test]
    fn test_display_reparses_to_same_value() {
        for cents in [0, 1, 99, 100, 1001, 987654321] {
            let money = Money::from_cents(cents);
            assert_eq!(money.to_string().parse::<Money>(), Ok(money));
        }
    }
}
