//! The bank: owns every account and enforces the account creation rules.
//!
//! A bank starts with a seeded demo dataset and only ever grows through
//! [`Bank::open_account`]. Accounts are never removed.

use crate::account::{Account, AccountNumber};
use crate::error::{AtmError, Result};
use crate::money::Money;
use log::{debug, warn};
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::ops::RangeInclusive;

/// Creation rules and the seed dataset for a [`Bank`].
///
/// The defaults admit account numbers 100 to 1000 with rates up to 3%, and
/// seed accounts 100 to 109 holding $100.00 each.
#[derive(Debug, Clone, PartialEq)]
pub struct BankRules {
    /// Account numbers accepted by `open_account` (inclusive).
    pub account_numbers: RangeInclusive<AccountNumber>,

    /// Highest annual interest rate accepted by `open_account` (inclusive).
    pub max_interest_rate: Decimal,

    /// Number of default accounts created at startup.
    pub seed_count: usize,

    /// Account number of the first default account; the rest follow consecutively.
    pub seed_first_number: AccountNumber,

    pub seed_balance: Money,
    pub seed_interest_rate: Decimal,
    pub seed_holder_name: String,
}

impl Default for BankRules {
    fn default() -> Self {
        BankRules {
            account_numbers: 100..=1000,
            max_interest_rate: Decimal::from(3),
            seed_count: 10,
            seed_first_number: 100,
            seed_balance: Money::from(100),
            seed_interest_rate: Decimal::from(3),
            seed_holder_name: "Default User".to_string(),
        }
    }
}

/// In-memory collection of accounts keyed by account number.
///
/// Keys are unique by construction. Iteration is in ascending account
/// number order.
#[derive(Debug, Clone)]
pub struct Bank {
    accounts: BTreeMap<AccountNumber, Account>,
    rules: BankRules,
}

impl Bank {
    /// Creates a bank with the default rules and seed accounts.
    pub fn new() -> Self {
        Self::with_rules(BankRules::default())
    }

    /// Creates a bank with custom rules, seeded from those rules.
    pub fn with_rules(rules: BankRules) -> Self {
        let mut bank = Bank {
            accounts: BTreeMap::new(),
            rules,
        };
        bank.initialize();
        bank
    }

    /// Populates the default accounts.
    ///
    /// Seeded accounts bypass the range and rate checks of `open_account`.
    fn initialize(&mut self) {
        let rules = &self.rules;
        for number in (rules.seed_first_number..).take(rules.seed_count) {
            self.accounts.insert(
                number,
                Account::new(
                    number,
                    rules.seed_balance,
                    rules.seed_interest_rate,
                    rules.seed_holder_name.clone(),
                ),
            );
        }
        debug!("Seeded {} default accounts", self.accounts.len());
    }

    pub fn rules(&self) -> &BankRules {
        &self.rules
    }

    /// Looks up an account by number.
    pub fn get_account(&self, account_number: AccountNumber) -> Option<&Account> {
        self.accounts.get(&account_number)
    }

    /// Looks up an account by number for deposits and withdrawals.
    pub fn get_account_mut(&mut self, account_number: AccountNumber) -> Option<&mut Account> {
        self.accounts.get_mut(&account_number)
    }

    /// Returns `true` if no account uses `account_number` yet.
    pub fn is_account_number_unique(&self, account_number: AccountNumber) -> bool {
        !self.accounts.contains_key(&account_number)
    }

    /// Opens a new account after validating it against the bank rules.
    ///
    /// Checks run in a fixed order so the reported error is deterministic:
    /// 1. account number within the accepted range
    /// 2. interest rate at or below the ceiling
    /// 3. account number not already in use
    ///
    /// Nothing is stored unless every check passes.
    pub fn open_account(
        &mut self,
        holder_name: &str,
        account_number: AccountNumber,
        initial_balance: Money,
        annual_interest_rate: Decimal,
    ) -> Result<&Account> {
        if !self.rules.account_numbers.contains(&account_number) {
            warn!(
                "Rejected account {}: number outside {:?}",
                account_number, self.rules.account_numbers
            );
            return Err(AtmError::AccountNumberOutOfRange {
                number: account_number,
                min: *self.rules.account_numbers.start(),
                max: *self.rules.account_numbers.end(),
            });
        }

        if annual_interest_rate > self.rules.max_interest_rate {
            warn!(
                "Rejected account {}: interest rate {} above {}",
                account_number, annual_interest_rate, self.rules.max_interest_rate
            );
            return Err(AtmError::InterestRateTooHigh {
                rate: annual_interest_rate,
                max: self.rules.max_interest_rate,
            });
        }

        if !self.is_account_number_unique(account_number) {
            warn!("Rejected account {}: number already exists", account_number);
            return Err(AtmError::DuplicateAccountNumber(account_number));
        }

        debug!(
            "Opened account {} for {} with {}",
            account_number, holder_name, initial_balance
        );
        let account = self.accounts.entry(account_number).or_insert_with(|| {
            Account::new(
                account_number,
                initial_balance,
                annual_interest_rate,
                holder_name,
            )
        });
        Ok(account)
    }

    /// Iterates over all accounts in ascending account number order.
    pub fn accounts(&self) -> impl Iterator<Item = &Account> {
        self.accounts.values()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

impl Default for Bank {
    fn default() -> Self {
        Self::new()
    }
}
