//! # ATM Simulator
//!
//! An interactive, single-user ATM over an in-memory bank. Operators create
//! and select accounts, deposit, withdraw, check balances and review each
//! account's transaction history.
//!
//! ## Design Principles
//!
//! - **Decimal money**: Amounts use `rust_decimal` and display as US currency
//! - **Validated creation**: Account number range, interest-rate ceiling and
//!   uniqueness are checked in a fixed order
//! - **Append-only history**: Every account keeps an immutable transaction log
//! - **Scriptable sessions**: Menus run over a [`Console`] port, not a terminal
//!
//! ## Example
//!
//! ```
//! use atm_simulator::{Atm, IoConsole};
//! use std::io::Cursor;
//!
//! let script = "2\n100\n1\n5\n3\n";
//! let mut atm = Atm::new(IoConsole::new(Cursor::new(script), Vec::new()));
//! atm.run().unwrap();
//!
//! let (_, console) = atm.into_parts();
//! let output = String::from_utf8(console.into_writer()).unwrap();
//! assert!(output.contains("Current Balance: $100.00"));
//! ```

pub mod account;
pub mod atm;
pub mod bank;
pub mod console;
pub mod error;
pub mod input;
pub mod money;
pub mod transaction;

pub use account::{Account, AccountNumber};
pub use atm::{AccountChoice, Atm, MainChoice, MenuState};
pub use bank::{Bank, BankRules};
pub use console::{Console, IoConsole};
pub use error::{AtmError, Result};
pub use money::Money;
pub use transaction::Transaction;
