//! # Pizza CLI Entry Point
//!
//! ```text
//! pizza quote --size large -t Pepperoni -t "Barbecue chicken" -t Tomatoes -t Onions
//! pizza board selection.json --json
//! pizza menu
//! ```
//!
//! The actual setup is in lib.rs for better testability.

use std::process::ExitCode;

fn main() -> ExitCode {
    pizza_cli::run()
}
