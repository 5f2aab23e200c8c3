//! # Pizza CLI Library
//!
//! The caller side of the pricing engine: it loads configuration, sets up
//! logging, builds orders from user input and renders what `pizza-core`
//! returns.
//!
//! ## Module Organization
//! ```text
//! pizza_cli/
//! ├── lib.rs          ◄─── You are here (startup & dispatch)
//! ├── config.rs       ◄─── Environment configuration, catalog loading
//! ├── error.rs        ◄─── API error type for commands
//! ├── selection.rs    ◄─── Per-size topping selection → quote board
//! └── commands/
//!     ├── quote.rs    ◄─── Price one order
//!     ├── board.rs    ◄─── Price a selection file
//!     └── menu.rs     ◄─── Show the catalog and offers
//! ```
//!
//! Output goes to stdout, logs and errors to stderr.

pub mod commands;
pub mod config;
pub mod error;
pub mod selection;

use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use commands::Command;
use config::AppConfig;
use error::ApiError;

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "pizza", about = "Price pizza orders and apply offers", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Runs the CLI and reports the exit status.
///
/// ## Startup Sequence
/// 1. Parse arguments
/// 2. Load configuration from the environment
/// 3. Initialize tracing
/// 4. Load the catalog (standard or from `PIZZA_CATALOG`)
/// 5. Run the command and print its output
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    let json = cli.command.wants_json();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(err) => return report(&ApiError::from(err), json),
    };

    init_tracing(&config);
    debug!(?config, "configuration loaded");

    match execute(&cli.command, &config) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => report(&err, json),
    }
}

/// Loads the catalog and runs one command.
pub fn execute(command: &Command, config: &AppConfig) -> Result<String, ApiError> {
    let catalog = config.load_catalog()?;

    match command {
        Command::Quote(args) => commands::quote::run(args, &catalog, config),
        Command::Board(args) => commands::board::run(args, &catalog, config),
        Command::Menu(args) => commands::menu::run(args, &catalog, config),
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG` wins when set
/// - otherwise `PIZZA_LOG`, then the built-in default
fn init_tracing(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("pizza pricing started");
}

fn report(err: &ApiError, json: bool) -> ExitCode {
    if json {
        match serde_json::to_string(err) {
            Ok(body) => eprintln!("{body}"),
            Err(_) => eprintln!("{err}"),
        }
    } else {
        eprintln!("error: {}", err.message);
    }
    ExitCode::FAILURE
}
