//! # Board Command
//!
//! Prices a per-size topping selection read from a JSON file.
//!
//! ```text
//! $ pizza board selection.json
//! ╭─────────────┬──────────────────┬──────────┬────────┬────────╮
//! │ Size        │ Toppings         │ Original │ Final  │ Offer  │
//! ├─────────────┼──────────────────┼──────────┼────────┼────────┤
//! │ Small       │                  │          │        │        │
//! │ Medium      │ Tomatoes, Onions │    $8.50 │  $5.00 │ OFFER1 │
//! ...
//! ```

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;
use pizza_core::Catalog;
use tabled::builder::Builder;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tracing::info;

use super::to_json;
use crate::config::AppConfig;
use crate::error::ApiError;
use crate::selection::{price_board, BoardRow, SelectionState};

#[derive(Debug, Args)]
pub struct BoardArgs {
    /// JSON file mapping size to selected topping names
    pub selection: PathBuf,

    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: &BoardArgs, catalog: &Catalog, config: &AppConfig) -> Result<String, ApiError> {
    let selection = read_selection(&args.selection)?;
    let rows = price_board(catalog, &selection)?;
    info!(
        priced = rows.iter().filter(|r| r.result.is_some()).count(),
        "quote board priced"
    );

    if args.json {
        return to_json(&rows);
    }

    Ok(render(&rows, config))
}

fn read_selection(path: &Path) -> anyhow::Result<SelectionState> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Cannot read selection {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Cannot parse selection {}", path.display()))
}

fn render(rows: &[BoardRow], config: &AppConfig) -> String {
    let mut builder = Builder::default();
    builder.push_record(["Size", "Toppings", "Original", "Final", "Offer"]);

    for row in rows {
        let (original, final_price, offer) = match &row.result {
            Some(result) => (
                config.format_currency(result.original_price),
                config.format_currency(result.final_price),
                result
                    .applied_offer
                    .map(|o| o.id().to_string())
                    .unwrap_or_default(),
            ),
            None => (String::new(), String::new(), String::new()),
        };

        builder.push_record([
            row.size.display_name().to_string(),
            row.toppings.join(", "),
            original,
            final_price,
            offer,
        ]);
    }

    let mut table = builder.build();
    table.with(Style::modern_rounded());
    table.modify(Columns::new(2..4), Alignment::right());
    table.to_string()
}
