//! Shape validation for raw operator input.
//!
//! These checks only decide whether a line is well formed. Business rules
//! (ranges, uniqueness, funds) belong to [`Bank`](crate::Bank) and
//! [`Account`](crate::Account).

use crate::account::AccountNumber;
use crate::money::Money;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Parses a menu choice. Surrounding whitespace is ignored.
pub fn parse_choice(line: &str) -> Option<i32> {
    line.trim().parse().ok()
}

pub fn parse_account_number(line: &str) -> Option<AccountNumber> {
    line.trim().parse().ok()
}

/// Parses a deposit, withdrawal or opening amount. Negative amounts are rejected.
pub fn parse_amount(line: &str) -> Option<Money> {
    Money::from_str(line)
        .ok()
        .filter(|amount| !amount.is_negative())
}

/// Parses an interest rate and applies the ceiling. Negative rates pass.
pub fn parse_interest_rate(line: &str, max: Decimal) -> Option<Decimal> {
    let trimmed = line.trim();
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .ok()
        .filter(|rate| *rate <= max)
}

/// A holder name must be non-empty and contain only letters and whitespace.
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_alphabetic() || c.is_whitespace())
}
