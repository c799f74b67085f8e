//! ATM Simulator CLI
//!
//! Runs an interactive ATM session on standard input and output.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `warn` to log account activity to stderr

use atm_simulator::{Atm, IoConsole, Result};
use std::io;
use std::process;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let console = IoConsole::new(stdin.lock(), stdout.lock());

    let mut atm = Atm::new(console);
    atm.run()
}
