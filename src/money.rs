//! Monetary amounts backed by `rust_decimal`.
//!
//! Amounts keep whatever precision the operator typed; rounding to cents
//! happens only when an amount is displayed.

use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use std::str::FromStr;

/// A monetary amount in dollars.
///
/// Displays in US currency format with two decimal places and thousands
/// separators.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use atm_simulator::Money;
///
/// let amount = Money::from_str("1234.5").unwrap();
/// assert_eq!(amount.to_string(), "$1,234.50");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(Decimal);

impl Money {
    /// Zero dollars.
    pub const ZERO: Self = Money(Decimal::ZERO);

    /// Number of decimal places shown when displaying.
    pub const DISPLAY_SCALE: u32 = 2;

    pub fn new(value: Decimal) -> Self {
        Money(value)
    }

    /// Returns the underlying decimal value.
    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Adds two amounts, returning `None` if the sum exceeds `Decimal::MAX`.
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Money)
    }

    /// Returns `true` if this amount is below zero. Negative zero is not negative.
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }
}

impl From<Decimal> for Money {
    fn from(value: Decimal) -> Self {
        Money(value)
    }
}

impl From<i64> for Money {
    fn from(value: i64) -> Self {
        Money(Decimal::from(value))
    }
}

impl FromStr for Money {
    type Err = rust_decimal::Error;

    /// Parses plain decimals such as `12.50`, falling back to scientific
    /// notation such as `1e3`.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim();
        Decimal::from_str(trimmed)
            .or_else(|_| Decimal::from_scientific(trimmed))
            .map(Money)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self
            .0
            .round_dp_with_strategy(Self::DISPLAY_SCALE, RoundingStrategy::MidpointAwayFromZero);
        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };

        let digits = format!("{:.2}", rounded.abs());
        let (whole, cents) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

        write!(f, "{}${}.{}", sign, group_thousands(whole), cents)
    }
}

/// Inserts a comma between every group of three integer digits.
fn group_thousands(whole: &str) -> String {
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Money(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Money(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn money(s: &str) -> Money {
        Money::from_str(s).unwrap()
    }

    #[test]
    fn test_display_uses_currency_format() {
        assert_eq!(money("0").to_string(), "$0.00");
        assert_eq!(money("100").to_string(), "$100.00");
        assert_eq!(money("1.5").to_string(), "$1.50");
        assert_eq!(money("999.999").to_string(), "$1,000.00");
        assert_eq!(money("1234567.891").to_string(), "$1,234,567.89");
    }

    #[test]
    fn test_display_rounds_midpoint_away_from_zero() {
        assert_eq!(money("0.005").to_string(), "$0.01");
        assert_eq!(money("2.345").to_string(), "$2.35");
        assert_eq!(money("-2.345").to_string(), "-$2.35");
    }

    #[test]
    fn test_from_str_trims_and_accepts_scientific() {
        assert_eq!(money("  2.5  "), Money::new(Decimal::new(25, 1)));
        assert_eq!(money("1e3"), Money::from(1000));
        assert!(Money::from_str("abc").is_err());
        assert!(Money::from_str("").is_err());
    }

    #[test]
    fn test_negative_detection() {
        assert!(money("-0.01").is_negative());
        assert!(!money("-0").is_negative());
        assert!(!Money::ZERO.is_negative());
    }

    #[test]
    fn test_checked_add_detects_overflow() {
        let max = Money::new(Decimal::MAX);
        assert_eq!(max.checked_add(Money::ZERO), Some(max));
        assert_eq!(max.checked_add(money("1")), None);
        assert_eq!(money("1.5").checked_add(money("2.5")), Some(money("4")));
    }

    #[test]
    fn test_arithmetic() {
        let mut total = money("100");
        total += money("25.25");
        total -= money("50");
        assert_eq!(total, money("75.25"));
        assert_eq!(money("1.5") + money("2.5"), money("4"));
        assert_eq!(money("2.5") - money("1.5"), money("1"));
    }
}
