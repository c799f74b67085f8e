//! Account model and operations.
//!
//! Maintains the invariant: `balance >= 0` at all times, and the transaction
//! log holds exactly one entry per creation, deposit and successful withdrawal.

use crate::error::{AtmError, Result};
use crate::money::Money;
use crate::transaction::Transaction;
use log::{debug, warn};
use rust_decimal::Decimal;

/// Account identifier, unique within a bank.
pub type AccountNumber = i32;

/// A single bank account.
///
/// # Invariants
///
/// - `balance` never drops below zero through `withdraw`
/// - `transactions` is append-only; entries are never removed or rewritten
///
/// # Validation
///
/// `Account::new` trusts its caller. Range, rate and name rules are enforced
/// by [`Bank::open_account`](crate::Bank::open_account) and the input layer.
#[derive(Debug, Clone)]
pub struct Account {
    account_number: AccountNumber,
    holder_name: String,
    balance: Money,
    /// Annual interest rate as a percentage. Stored only, never applied.
    annual_interest_rate: Decimal,
    transactions: Vec<Transaction>,
}

impl Account {
    /// Creates an account and records its opening balance.
    pub fn new(
        account_number: AccountNumber,
        initial_balance: Money,
        annual_interest_rate: Decimal,
        holder_name: impl Into<String>,
    ) -> Self {
        Account {
            account_number,
            holder_name: holder_name.into(),
            balance: initial_balance,
            annual_interest_rate,
            transactions: vec![Transaction::Opened(initial_balance)],
        }
    }

    pub fn account_number(&self) -> AccountNumber {
        self.account_number
    }

    pub fn holder_name(&self) -> &str {
        &self.holder_name
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn annual_interest_rate(&self) -> Decimal {
        self.annual_interest_rate
    }

    /// The transaction log, oldest first.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Deposits funds into the account.
    ///
    /// The sign of the amount is not checked; callers reject negative input
    /// beforehand. Fails with [`AtmError::AmountTooLarge`] if the new balance
    /// would not be representable, leaving the balance and the log untouched.
    pub fn deposit(&mut self, amount: Money) -> Result<()> {
        let Some(balance) = self.balance.checked_add(amount) else {
            warn!(
                "Deposit of {} to account {} would overflow balance {}",
                amount, self.account_number, self.balance
            );
            return Err(AtmError::AmountTooLarge {
                requested: amount,
                balance: self.balance,
            });
        };
        self.balance = balance;
        self.transactions.push(Transaction::Deposit(amount));
        debug!(
            "Deposited {} to account {}, balance {}",
            amount, self.account_number, self.balance
        );
        Ok(())
    }

    /// Withdraws funds from the account.
    ///
    /// Fails with [`AtmError::InsufficientFunds`] when `amount` exceeds the
    /// balance, leaving both the balance and the log untouched.
    pub fn withdraw(&mut self, amount: Money) -> Result<()> {
        if amount > self.balance {
            warn!(
                "Withdrawal of {} from account {} exceeds balance {}",
                amount, self.account_number, self.balance
            );
            return Err(AtmError::InsufficientFunds {
                requested: amount,
                available: self.balance,
            });
        }

        self.balance -= amount;
        self.transactions.push(Transaction::Withdrawal(amount));
        debug!(
            "Withdrew {} from account {}, balance {}",
            amount, self.account_number, self.balance
        );
        Ok(())
    }

    /// Renders the transaction log as display lines, oldest first.
    pub fn display_transactions(&self) -> Vec<String> {
        self.transactions.iter().map(ToString::to_string).collect()
    }
}
