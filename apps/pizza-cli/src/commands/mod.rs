//! # Commands
//!
//! One module per subcommand. Each command prices through `pizza-core` and
//! returns the text to print, so commands can be tested without a terminal.
//!
//! ```text
//! pizza quote  ──► quote::run  ──► price_order      ──► one result
//! pizza board  ──► board::run  ──► price_board      ──► one row per size
//! pizza menu   ──► menu::run   ──► catalog + offers ──► menu listing
//! ```

use clap::Subcommand;
use serde::Serialize;

use crate::error::ApiError;

pub mod board;
pub mod menu;
pub mod quote;

/// Subcommands of the `pizza` binary.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Price a single order
    Quote(quote::QuoteArgs),
    /// Price a per-size topping selection
    Board(board::BoardArgs),
    /// Show sizes, toppings and offers
    Menu(menu::MenuArgs),
}

impl Command {
    /// Whether errors should be printed as JSON.
    pub fn wants_json(&self) -> bool {
        match self {
            Command::Quote(args) => args.json,
            Command::Board(args) => args.json,
            Command::Menu(args) => args.json,
        }
    }
}

/// Pretty JSON for command output.
pub(crate) fn to_json<T: Serialize>(value: &T) -> Result<String, ApiError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| ApiError::input(format!("Cannot serialize output: {e}")))
}
