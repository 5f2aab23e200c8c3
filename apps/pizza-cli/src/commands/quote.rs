//! # Quote Command
//!
//! Prices one order given on the command line.
//!
//! ```text
//! $ pizza quote --size medium -t Tomatoes -t Onions
//! Size:           Medium
//! Toppings:       Tomatoes, Onions
//! Original price: $8.50
//! Final price:    $5.00
//! Offer:          OFFER1 - 1 Medium Pizza with 2 toppings = $5
//! ```

use clap::Args;
use pizza_core::{price_order, Catalog, OrderRequest, PizzaSize, PricingResult};
use tracing::info;

use super::to_json;
use crate::config::AppConfig;
use crate::error::ApiError;

#[derive(Debug, Args)]
pub struct QuoteArgs {
    /// Pizza size: small, medium, large or extraLarge
    #[arg(short, long)]
    pub size: String,

    /// Topping name; repeat for more toppings
    #[arg(short, long = "topping")]
    pub toppings: Vec<String>,

    /// How many pizzas of this configuration are ordered together
    #[arg(short = 'n', long = "count", default_value_t = 1, allow_negative_numbers = true)]
    pub order_count: i64,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

impl QuoteArgs {
    fn to_request(&self) -> OrderRequest {
        OrderRequest::new(self.size.clone(), self.toppings.clone()).with_order_count(self.order_count)
    }
}

pub fn run(args: &QuoteArgs, catalog: &Catalog, config: &AppConfig) -> Result<String, ApiError> {
    let request = args.to_request();
    let result = price_order(catalog, &request)?;
    info!(
        size = %request.size,
        toppings = request.toppings.len(),
        offer = ?result.applied_offer,
        "order quoted"
    );

    if args.json {
        return to_json(&result);
    }

    // price_order already validated the size
    let size = request.size.parse::<PizzaSize>()?;
    Ok(render(size, &request.toppings, &result, config))
}

fn render(size: PizzaSize, toppings: &[String], result: &PricingResult, config: &AppConfig) -> String {
    let toppings = if toppings.is_empty() {
        "(none)".to_string()
    } else {
        toppings.join(", ")
    };
    let offer = match result.applied_offer {
        Some(offer) => format!("{} - {}", offer.id(), offer.description()),
        None => "(none)".to_string(),
    };

    format!(
        "Size:           {}\nToppings:       {}\nOriginal price: {}\nFinal price:    {}\nOffer:          {}",
        size.display_name(),
        toppings,
        config.format_currency(result.original_price),
        config.format_currency(result.final_price),
        offer
    )
}
