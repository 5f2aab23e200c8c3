//! # Menu Command
//!
//! Lists sizes, toppings and the offer chain in priority order.

use clap::Args;
use pizza_core::{Catalog, Money, PizzaSize, ToppingCategory, OFFER_CHAIN};
use serde::Serialize;
use tabled::builder::Builder;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};

use super::to_json;
use crate::config::AppConfig;
use crate::error::ApiError;

#[derive(Debug, Args)]
pub struct MenuArgs {
    /// Print JSON instead of tables
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct MenuView<'a> {
    sizes: Vec<SizeView>,
    toppings: Vec<ToppingView<'a>>,
    offers: Vec<OfferView>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SizeView {
    size: PizzaSize,
    display_name: &'static str,
    price: Money,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ToppingView<'a> {
    name: &'a str,
    price: Money,
    category: ToppingCategory,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct OfferView {
    id: &'static str,
    description: &'static str,
}

impl<'a> MenuView<'a> {
    fn new(catalog: &'a Catalog) -> Self {
        MenuView {
            sizes: catalog
                .sizes()
                .map(|(size, price)| SizeView {
                    size,
                    display_name: size.display_name(),
                    price,
                })
                .collect(),
            toppings: catalog
                .toppings()
                .iter()
                .map(|t| ToppingView {
                    name: &t.name,
                    price: t.price,
                    category: t.category,
                })
                .collect(),
            offers: OFFER_CHAIN
                .iter()
                .map(|o| OfferView {
                    id: o.id(),
                    description: o.description(),
                })
                .collect(),
        }
    }
}

pub fn run(args: &MenuArgs, catalog: &Catalog, config: &AppConfig) -> Result<String, ApiError> {
    let view = MenuView::new(catalog);
    if args.json {
        return to_json(&view);
    }
    Ok(render(&view, config))
}

fn render(view: &MenuView<'_>, config: &AppConfig) -> String {
    let mut sizes = Builder::default();
    sizes.push_record(["Size", "Price"]);
    for size in &view.sizes {
        sizes.push_record([size.display_name.to_string(), config.format_currency(size.price)]);
    }

    let mut toppings = Builder::default();
    toppings.push_record(["Topping", "Price", "Type"]);
    for topping in &view.toppings {
        toppings.push_record([
            topping.name.to_string(),
            config.format_currency(topping.price),
            topping.category.as_str().to_string(),
        ]);
    }

    let mut offers = Builder::default();
    offers.push_record(["Offer", "Description"]);
    for offer in &view.offers {
        offers.push_record([offer.id, offer.description]);
    }

    let mut sizes = sizes.build();
    sizes.with(Style::modern_rounded());
    sizes.modify(Columns::one(1), Alignment::right());

    let mut toppings = toppings.build();
    toppings.with(Style::modern_rounded());
    toppings.modify(Columns::one(1), Alignment::right());

    let mut offers = offers.build();
    offers.with(Style::modern_rounded());

    format!("{sizes}\n\n{toppings}\n\n{offers}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_text() {
        let out = run(&MenuArgs { json: false }, Catalog::standard(), &AppConfig::default()).unwrap();
        assert!(out.contains("Extra Large"));
        assert!(out.contains("Barbecue chicken"));
        assert!(out.contains("non-veg"));
        assert!(out.contains("$1.20"));
        assert!(out.contains("OFFER3"));
    }

    #[test]
    fn test_menu_json() {
        let out = run(&MenuArgs { json: true }, Catalog::standard(), &AppConfig::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["sizes"][3]["size"], "extraLarge");
        assert_eq!(value["sizes"][3]["price"], 9.0);
        assert_eq!(value["toppings"][4]["name"], "Pineapple");
        assert_eq!(value["toppings"][4]["price"], 0.75);
        assert_eq!(value["offers"][0]["id"], "OFFER1");
        assert_eq!(value["offers"].as_array().unwrap().len(), 3);
    }
}
