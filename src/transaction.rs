//! Transaction log entries recorded against an account.

use crate::money::Money;
use std::fmt;

/// One event in an account's transaction log.
///
/// Entries are appended in the order they happen and never change afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transaction {
    /// Account opened with its initial balance.
    Opened(Money),

    /// Funds credited to the account.
    Deposit(Money),

    /// Funds debited from the account.
    Withdrawal(Money),
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transaction::Opened(amount) => {
                write!(f, "Account created with initial balance: {}", amount)
            }
            Transaction::Deposit(amount) => write!(f, "Deposited: {}", amount),
            Transaction::Withdrawal(amount) => write!(f, "Withdrew: {}", amount),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_lines() {
        assert_eq!(
            Transaction::Opened(Money::from(100)).to_string(),
            "Account created with initial balance: $100.00"
        );
        assert_eq!(
            Transaction::Deposit(Money::from(50)).to_string(),
            "Deposited: $50.00"
        );
        assert_eq!(
            Transaction::Withdrawal(Money::from(2500)).to_string(),
            "Withdrew: $2,500.00"
        );
    }
}
