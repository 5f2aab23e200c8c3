//! # Topping Selection
//!
//! The order form lets a customer tick toppings independently for every
//! size. This module turns that per-size selection into one order per size
//! and prices each one.
//!
//! ## Selection Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  selection.json                                                         │
//! │  { "medium": ["Onions", "Tomatoes"], "large": [] }                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SelectionState ── per size, set semantics, menu order ──┐              │
//! │                                                          ▼              │
//! │  small  ─ nothing selected ─────────────────────► empty row             │
//! │  medium ─ Order(medium, [Tomatoes, Onions]) ─────► price_validated      │
//! │  large  ─ nothing selected ─────────────────────► empty row             │
//! │  extraLarge ─ nothing selected ─────────────────► empty row             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every board order is a single pizza (`order_count` 1).

use std::collections::BTreeMap;

use pizza_core::{price_validated, Catalog, CoreResult, Order, PizzaSize, PricingResult};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Toppings ticked per size.
///
/// Keys are size wire names; they are checked when the board is priced so
/// an unknown size surfaces as [`CoreError::InvalidSize`](pizza_core::CoreError).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectionState {
    sizes: BTreeMap<String, Vec<String>>,
}

impl SelectionState {
    /// Selected toppings for a size: menu order first, then names the menu
    /// does not know in the order they were given. Each name appears once.
    pub fn toppings_for(&self, catalog: &Catalog, size: PizzaSize) -> Vec<String> {
        let Some(selected) = self.sizes.get(size.as_str()) else {
            return Vec::new();
        };

        let mut unique: Vec<&String> = Vec::with_capacity(selected.len());
        for name in selected {
            if !unique.contains(&name) {
                unique.push(name);
            }
        }

        // Stable sort keeps unknown names in input order after the menu items
        unique.sort_by_key(|name| catalog.topping_position(name).unwrap_or(usize::MAX));
        unique.into_iter().cloned().collect()
    }

    /// Fails on the first key that is not a size.
    fn check_sizes(&self) -> CoreResult<()> {
        for key in self.sizes.keys() {
            key.parse::<PizzaSize>()?;
        }
        Ok(())
    }
}

/// One line of the quote board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardRow {
    pub size: PizzaSize,

    pub toppings: Vec<String>,

    /// `None` when nothing is selected for the size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<PricingResult>,
}

/// Prices every size bucket of a selection, in menu order.
///
/// Each non-empty bucket becomes its own independent single-pizza order.
pub fn price_board(catalog: &Catalog, selection: &SelectionState) -> CoreResult<Vec<BoardRow>> {
    selection.check_sizes()?;

    PizzaSize::ALL
        .into_iter()
        .map(|size| -> CoreResult<BoardRow> {
            let toppings = selection.toppings_for(catalog, size);
            if toppings.is_empty() {
                return Ok(BoardRow {
                    size,
                    toppings,
                    result: None,
                });
            }

            let order = Order::new(size, toppings.clone());
            let result = price_validated(catalog, &order)?;
            debug!(%size, offer = ?result.applied_offer, "board row priced");

            Ok(BoardRow {
                size,
                toppings,
                result: Some(result),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pizza_core::{CoreError, Money, Offer};

    fn selection(json: &str) -> SelectionState {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_toppings_follow_menu_order() {
        let state = selection(r#"{ "medium": ["Onions", "Mystery", "Tomatoes", "Onions"] }"#);
        assert_eq!(
            state.toppings_for(Catalog::standard(), PizzaSize::Medium),
            vec!["Tomatoes", "Onions", "Mystery"]
        );
        assert!(state.toppings_for(Catalog::standard(), PizzaSize::Small).is_empty());
    }

    #[test]
    fn test_board_prices_each_size_independently() {
        let state = selection(
            r#"{
                "medium": ["Tomatoes", "Onions"],
                "large": ["Pepperoni", "Barbecue chicken", "Tomatoes", "Onions"]
            }"#,
        );
        let rows = price_board(Catalog::standard(), &state).unwrap();
        assert_eq!(rows.len(), 4);

        let sizes: Vec<PizzaSize> = rows.iter().map(|r| r.size).collect();
        assert_eq!(sizes, PizzaSize::ALL.to_vec());

        assert!(rows[0].result.is_none());

        let medium = rows[1].result.unwrap();
        assert_eq!(medium.applied_offer, Some(Offer::MediumTwoToppings));
        assert_eq!(medium.final_price, Money::from_cents(500));

        let large = rows[2].result.unwrap();
        assert_eq!(large.applied_offer, Some(Offer::LargeFourToppingsHalfPrice));
        assert_eq!(large.final_price, Money::from_cents(725));

        assert!(rows[3].result.is_none());
    }

    #[test]
    fn test_board_never_applies_pair_offer() {
        let state = selection(r#"{ "medium": ["Tomatoes", "Onions", "Mushrooms", "Pineapple"] }"#);
        let rows = price_board(Catalog::standard(), &state).unwrap();
        let medium = rows[1].result.unwrap();
        assert!(medium.applied_offer.is_none());
        assert_eq!(medium.final_price, Money::from_cents(1045));
    }

    #[test]
    fn test_board_rejects_unknown_size() {
        let state = selection(r#"{ "family": ["Tomatoes"] }"#);
        assert!(matches!(
            price_board(Catalog::standard(), &state),
            Err(CoreError::InvalidSize(s)) if s == "family"
        ));
    }

    #[test]
    fn test_empty_row_serialization() {
        let rows = price_board(Catalog::standard(), &SelectionState::default()).unwrap();
        let json = serde_json::to_string(&rows[0]).unwrap();
        assert_eq!(json, r#"{"size":"small","toppings":[]}"#);
    }
}
