//! Interactive ATM menus.
//!
//! The session is a small state machine: the main menu, an account menu for
//! the selected account, and the terminal exit state. Every prompt and
//! message goes through a [`Console`], so sessions can be scripted.

use crate::account::{Account, AccountNumber};
use crate::bank::Bank;
use crate::console::Console;
use crate::error::{AtmError, Result};
use crate::input;
use log::debug;

const INVALID_NUMBER: &str = "Invalid input. Please enter a number.";
const INVALID_OPTION: &str = "Invalid option. Try again.";
const INVALID_NAME: &str = "Invalid name. Please enter a valid name.";
const INVALID_ACCOUNT_NUMBER: &str = "Invalid input. Please enter a valid account number.";
const INVALID_BALANCE: &str = "Invalid input. Please enter a valid balance.";
const INVALID_AMOUNT: &str = "Invalid input. Please enter a valid amount.";

/// Where the session currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    Main,
    /// Account menu for the selected account.
    Account(AccountNumber),
    Exit,
}

/// Main menu options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainChoice {
    CreateAccount,
    SelectAccount,
    Exit,
}

impl TryFrom<i32> for MainChoice {
    type Error = i32;

    fn try_from(value: i32) -> std::result::Result<Self, Self::Error> {
        match value {
            1 => Ok(MainChoice::CreateAccount),
            2 => Ok(MainChoice::SelectAccount),
            3 => Ok(MainChoice::Exit),
            other => Err(other),
        }
    }
}

/// Account menu options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountChoice {
    CheckBalance,
    Deposit,
    Withdraw,
    DisplayTransactions,
    ExitAccount,
}

impl TryFrom<i32> for AccountChoice {
    type Error = i32;

    fn try_from(value: i32) -> std::result::Result<Self, Self::Error> {
        match value {
            1 => Ok(AccountChoice::CheckBalance),
            2 => Ok(AccountChoice::Deposit),
            3 => Ok(AccountChoice::Withdraw),
            4 => Ok(AccountChoice::DisplayTransactions),
            5 => Ok(AccountChoice::ExitAccount),
            other => Err(other),
        }
    }
}

/// An ATM session over a bank and a console.
///
/// Input-shape problems and business-rule rejections are reported on the
/// console and never end the session. Only console I/O failures are
/// returned as errors. End of input behaves like choosing Exit.
pub struct Atm<C> {
    bank: Bank,
    console: C,
}

impl<C: Console> Atm<C> {
    /// Creates a session over a freshly seeded bank.
    pub fn new(console: C) -> Self {
        Self::with_bank(Bank::new(), console)
    }

    pub fn with_bank(bank: Bank, console: C) -> Self {
        Atm { bank, console }
    }

    pub fn bank(&self) -> &Bank {
        &self.bank
    }

    /// Consumes the session, returning the bank and the console.
    pub fn into_parts(self) -> (Bank, C) {
        (self.bank, self.console)
    }

    /// Runs menus until the operator exits or input ends.
    pub fn run(&mut self) -> Result<()> {
        let mut state = MenuState::Main;
        loop {
            state = match state {
                MenuState::Main => self.main_menu()?,
                MenuState::Account(number) => self.account_menu(number)?,
                MenuState::Exit => break,
            };
        }
        debug!("Session ended");
        Ok(())
    }

    fn main_menu(&mut self) -> Result<MenuState> {
        self.write_lines(&[
            "ATM Main Menu:",
            "1. Create Account",
            "2. Select Account",
            "3. Exit",
        ])?;

        let Some(line) = self.console.read_line()? else {
            return Ok(MenuState::Exit);
        };
        let Some(choice) = input::parse_choice(&line) else {
            self.console.write_line(INVALID_NUMBER)?;
            return Ok(MenuState::Main);
        };

        match MainChoice::try_from(choice) {
            Ok(MainChoice::CreateAccount) => self.create_account(),
            Ok(MainChoice::SelectAccount) => self.select_account(),
            Ok(MainChoice::Exit) => Ok(MenuState::Exit),
            Err(_) => {
                self.console.write_line(INVALID_OPTION)?;
                Ok(MenuState::Main)
            }
        }
    }

    fn create_account(&mut self) -> Result<MenuState> {
        let Some(name) = self.prompt("Enter Account Holder Name:")? else {
            return Ok(MenuState::Exit);
        };
        if !input::is_valid_name(&name) {
            self.console.write_line(INVALID_NAME)?;
            return Ok(MenuState::Main);
        }

        let range = self.bank.rules().account_numbers.clone();
        let Some(line) = self.prompt(&format!(
            "Enter Account Number ({}-{}):",
            range.start(),
            range.end()
        ))?
        else {
            return Ok(MenuState::Exit);
        };
        let Some(number) = input::parse_account_number(&line) else {
            self.console.write_line(INVALID_ACCOUNT_NUMBER)?;
            return Ok(MenuState::Main);
        };
        if !self.bank.is_account_number_unique(number) {
            self.report(AtmError::DuplicateAccountNumber(number))?;
            return Ok(MenuState::Main);
        }
        if !range.contains(&number) {
            self.report(AtmError::AccountNumberOutOfRange {
                number,
                min: *range.start(),
                max: *range.end(),
            })?;
            return Ok(MenuState::Main);
        }

        let Some(line) = self.prompt("Enter Initial Balance:")? else {
            return Ok(MenuState::Exit);
        };
        let Some(initial_balance) = input::parse_amount(&line) else {
            self.console.write_line(INVALID_BALANCE)?;
            return Ok(MenuState::Main);
        };

        let max_rate = self.bank.rules().max_interest_rate;
        let Some(line) = self.prompt(&format!(
            "Enter Annual Interest Rate (max {}%):",
            max_rate.normalize()
        ))?
        else {
            return Ok(MenuState::Exit);
        };
        let Some(rate) = input::parse_interest_rate(&line, max_rate) else {
            self.console.write_line(&format!(
                "Invalid input. Interest rate must be less than or equal to {}%.",
                max_rate.normalize()
            ))?;
            return Ok(MenuState::Main);
        };

        let opened = self
            .bank
            .open_account(&name, number, initial_balance, rate)
            .map(|_| ());
        match opened {
            Ok(()) => self.console.write_line("Account created successfully!")?,
            Err(e) => self.report(e)?,
        }
        Ok(MenuState::Main)
    }

    fn select_account(&mut self) -> Result<MenuState> {
        let Some(line) = self.prompt("Enter Account Number:")? else {
            return Ok(MenuState::Exit);
        };
        let Some(number) = input::parse_account_number(&line) else {
            self.console.write_line(INVALID_ACCOUNT_NUMBER)?;
            return Ok(MenuState::Main);
        };

        let welcome = self
            .bank
            .get_account(number)
            .map(|account| format!("Welcome, {}", account.holder_name()));
        match welcome {
            Some(welcome) => {
                self.console.write_line(&welcome)?;
                debug!("Selected account {}", number);
                Ok(MenuState::Account(number))
            }
            None => {
                self.report(AtmError::AccountNotFound(number))?;
                Ok(MenuState::Main)
            }
        }
    }

    fn account_menu(&mut self, number: AccountNumber) -> Result<MenuState> {
        if self.bank.get_account(number).is_none() {
            self.report(AtmError::AccountNotFound(number))?;
            return Ok(MenuState::Main);
        }

        self.write_lines(&[
            "Account Menu:",
            "1. Check Balance",
            "2. Deposit",
            "3. Withdraw",
            "4. Display Transactions",
            "5. Exit Account",
        ])?;

        let Some(line) = self.console.read_line()? else {
            return Ok(MenuState::Exit);
        };
        let stay = MenuState::Account(number);
        let Some(choice) = input::parse_choice(&line) else {
            self.console.write_line(INVALID_NUMBER)?;
            return Ok(stay);
        };

        match AccountChoice::try_from(choice) {
            Ok(AccountChoice::CheckBalance) => {
                let balance = format!("Current Balance: {}", self.account(number)?.balance());
                self.console.write_line(&balance)?;
            }
            Ok(AccountChoice::Deposit) => {
                let Some(line) = self.prompt("Enter amount to deposit:")? else {
                    return Ok(MenuState::Exit);
                };
                let Some(amount) = input::parse_amount(&line) else {
                    self.console.write_line(INVALID_AMOUNT)?;
                    return Ok(stay);
                };
                match self.account_mut(number)?.deposit(amount) {
                    Ok(()) => self.console.write_line("Deposit successful.")?,
                    Err(e) => self.report(e)?,
                }
            }
            Ok(AccountChoice::Withdraw) => {
                let Some(line) = self.prompt("Enter amount to withdraw:")? else {
                    return Ok(MenuState::Exit);
                };
                let Some(amount) = input::parse_amount(&line) else {
                    self.console.write_line(INVALID_AMOUNT)?;
                    return Ok(stay);
                };
                match self.account_mut(number)?.withdraw(amount) {
                    Ok(()) => self.console.write_line("Withdrawal successful.")?,
                    Err(e) => self.report(e)?,
                }
            }
            Ok(AccountChoice::DisplayTransactions) => {
                let history = self.account(number)?.display_transactions();
                self.console.write_line("Transaction History:")?;
                for entry in &history {
                    self.console.write_line(entry)?;
                }
            }
            Ok(AccountChoice::ExitAccount) => {
                debug!("Leaving account {}", number);
                return Ok(MenuState::Main);
            }
            Err(_) => self.console.write_line(INVALID_OPTION)?,
        }

        Ok(stay)
    }

    fn account(&self, number: AccountNumber) -> Result<&Account> {
        self.bank
            .get_account(number)
            .ok_or(AtmError::AccountNotFound(number))
    }

    fn account_mut(&mut self, number: AccountNumber) -> Result<&mut Account> {
        self.bank
            .get_account_mut(number)
            .ok_or(AtmError::AccountNotFound(number))
    }

    /// Shows a prompt and reads the operator's answer.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        self.console.write_line(text)?;
        self.console.read_line()
    }

    fn write_lines(&mut self, lines: &[&str]) -> Result<()> {
        for line in lines {
            self.console.write_line(line)?;
        }
        Ok(())
    }

    /// Shows a recoverable error to the operator. I/O errors are propagated.
    fn report(&mut self, err: AtmError) -> Result<()> {
        match err {
            AtmError::Io(e) => Err(AtmError::Io(e)),
            other => self.console.write_line(&other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::IoConsole;
    use std::io::Cursor;

    fn run_session(input: &str) -> (Bank, String) {
        let console = IoConsole::new(Cursor::new(input.to_string()), Vec::new());
        let mut atm = Atm::new(console);
        atm.run().unwrap();
        let (bank, console) = atm.into_parts();
        (bank, String::from_utf8(console.into_writer()).unwrap())
    }

    #[test]
    fn test_choice_conversions() {
        assert_eq!(MainChoice::try_from(2), Ok(MainChoice::SelectAccount));
        assert_eq!(MainChoice::try_from(4), Err(4));
        assert_eq!(AccountChoice::try_from(5), Ok(AccountChoice::ExitAccount));
        assert_eq!(AccountChoice::try_from(0), Err(0));
    }

    #[test]
    fn test_exit_immediately() {
        let (_, output) = run_session("3\n");
        assert_eq!(
            output,
            "ATM Main Menu:\n1. Create Account\n2. Select Account\n3. Exit\n"
        );
    }

    #[test]
    fn test_end_of_input_ends_session() {
        let (bank, output) = run_session("");
        assert_eq!(output.matches("ATM Main Menu:").count(), 1);
        assert_eq!(bank.len(), 10);
    }

    #[test]
    fn test_invalid_main_menu_input_redisplays() {
        let (_, output) = run_session("abc\n9\n3\n");
        assert!(output.contains(INVALID_NUMBER));
        assert!(output.contains(INVALID_OPTION));
        assert_eq!(output.matches("ATM Main Menu:").count(), 3);
    }

    #[test]
    fn test_create_account_success() {
        let (bank, output) = run_session("1\nAlice\n150\n50\n2\n3\n");
        assert!(output.contains("Account created successfully!"));

        let account = bank.get_account(150).unwrap();
        assert_eq!(account.holder_name(), "Alice");
        assert_eq!(account.balance().to_string(), "$50.00");
    }

    #[test]
    fn test_create_account_rejects_duplicate_before_range() {
        let (bank, output) = run_session("1\nBob\n105\n3\n");
        assert!(output.contains("Account number already exists."));
        assert!(!output.contains("Enter Initial Balance:"));
        assert_eq!(bank.len(), 10);
    }

    #[test]
    fn test_select_and_withdraw() {
        let (bank, output) = run_session("2\n100\n3\n150\n3\n50\n1\n5\n3\n");
        assert!(output.contains("Welcome, Default User"));
        assert!(output.contains("Insufficient funds."));
        assert!(output.contains("Withdrawal successful."));
        assert!(output.contains("Current Balance: $50.00"));
        assert_eq!(bank.get_account(100).unwrap().balance().to_string(), "$50.00");
    }

    #[test]
    fn test_oversized_deposit_is_reported() {
        let script = format!("2\n100\n2\n{}\n1\n5\n3\n", rust_decimal::Decimal::MAX);
        let (bank, output) = run_session(&script);

        assert!(output.contains("Deposit amount too large."));
        assert!(!output.contains("Deposit successful."));
        assert!(output.contains("Current Balance: $100.00"));
        assert_eq!(bank.get_account(100).unwrap().transactions().len(), 1);
    }

    #[test]
    fn test_unknown_account() {
        let (_, output) = run_session("2\n999\n3\n");
        assert!(output.contains("Account not found."));
        assert!(!output.contains("Account Menu:"));
    }
}
