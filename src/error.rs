//! Error types for the ATM simulator.

use crate::account::AccountNumber;
use crate::money::Money;
use rust_decimal::Decimal;
use thiserror::Error;

/// Result type alias for bank and console operations
pub type Result<T> = std::result::Result<T, AtmError>;

/// Errors that can occur while operating the ATM.
///
/// The `Display` text of each business variant is the exact line shown to
/// the operator.
#[derive(Error, Debug)]
pub enum AtmError {
    /// Account number outside the accepted creation range
    #[error("Account number must be between {min} and {max}.")]
    AccountNumberOutOfRange {
        number: AccountNumber,
        min: AccountNumber,
        max: AccountNumber,
    },

    /// Interest rate above the ceiling
    #[error("Interest rate must be less than or equal to {}%.", .max.normalize())]
    InterestRateTooHigh { rate: Decimal, max: Decimal },

    /// Account number already taken
    #[error("Account number already exists.")]
    DuplicateAccountNumber(AccountNumber),

    /// Withdrawal larger than the current balance
    #[error("Insufficient funds.")]
    InsufficientFunds { requested: Money, available: Money },

    /// Deposit would push the balance past the largest representable amount
    #[error("Deposit amount too large.")]
    AmountTooLarge { requested: Money, balance: Money },

    /// No account with that number
    #[error("Account not found.")]
    AccountNotFound(AccountNumber),

    /// Failed to read from or write to the console
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_business_messages_match_operator_text() {
        let err = AtmError::AccountNumberOutOfRange {
            number: 99,
            min: 100,
            max: 1000,
        };
        assert_eq!(err.to_string(), "Account number must be between 100 and 1000.");

        let err = AtmError::InterestRateTooHigh {
            rate: Decimal::new(35, 1),
            max: Decimal::from(3),
        };
        assert_eq!(
            err.to_string(),
            "Interest rate must be less than or equal to 3%."
        );

        assert_eq!(
            AtmError::DuplicateAccountNumber(150).to_string(),
            "Account number already exists."
        );
        assert_eq!(AtmError::AccountNotFound(42).to_string(), "Account not found.");
        assert_eq!(
            AtmError::AmountTooLarge {
                requested: Money::from(1),
                balance: Money::new(Decimal::MAX),
            }
            .to_string(),
            "Deposit amount too large."
        );
    }
}
