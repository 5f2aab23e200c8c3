//! # Offer Evaluator
//!
//! Picks at most one promotional offer for an order.
//!
//! ## Priority Chain
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  order ──► OFFER1? ──yes──► $5 flat                                     │
//! │              │no                                                         │
//! │              ▼                                                           │
//! │            OFFER2? ──yes──► $9 flat                                     │
//! │              │no                                                         │
//! │              ▼                                                           │
//! │            OFFER3? ──yes──► 50% of original price                       │
//! │              │no                                                         │
//! │              ▼                                                           │
//! │            full price, no offer                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! First match wins. Rules after a hit are never checked, so an order can
//! never carry two offers.
//!
//! ## Known Limitations
//! - OFFER2 is advertised for two pizzas but only ever sees one topping
//!   list. It gates on the caller's `order_count` and prices the order at $9;
//!   it does not pair up two separate pizzas.
//! - OFFER3 counts "special" toppings and derives an adjusted topping count,
//!   but neither value changes eligibility or price. The adjusted count is
//!   emitted on a debug event only.
//! - A flat offer price above the original price is lowered to the original,
//!   so `final_price <= original_price` holds for every order. This only
//!   happens when unknown toppings (priced at zero) or a cheap custom catalog
//!   bring the original below $5 or $9. The offer is still reported as
//!   applied.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;
use ts_rs::TS;

use crate::money::Money;
use crate::types::{Order, PizzaSize, PricingResult};

/// OFFER1 flat price.
pub const OFFER1_PRICE: Money = Money::from_major_minor(5, 0);
/// OFFER1 exact topping count.
pub const OFFER1_TOPPINGS: usize = 2;

/// OFFER2 flat price.
pub const OFFER2_PRICE: Money = Money::from_major_minor(9, 0);
/// OFFER2 exact topping count.
pub const OFFER2_TOPPINGS: usize = 4;
/// OFFER2 exact order count.
pub const OFFER2_PIZZA_COUNT: u64 = 2;

/// OFFER3 exact topping count.
pub const OFFER3_TOPPINGS: usize = 4;
/// OFFER3 share of the original price that is charged (50%).
pub const OFFER3_PRICE_BPS: u32 = 5_000;
/// Toppings OFFER3 treats as "special".
pub const SPECIAL_TOPPINGS: [&str; 2] = ["Pepperoni", "Barbecue chicken"];

/// Every offer, in priority order.
pub const OFFER_CHAIN: [Offer; 3] = [
    Offer::MediumTwoToppings,
    Offer::MediumPairFourToppings,
    Offer::LargeFourToppingsHalfPrice,
];

// =============================================================================
// Offer
// =============================================================================

/// A promotional pricing rule.
///
/// Serialized by its public identifier (`"OFFER1"` etc.).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Offer {
    /// 1 medium pizza with exactly 2 toppings for $5.
    #[serde(rename = "OFFER1")]
    MediumTwoToppings,

    /// 2 medium pizzas with 4 toppings each for $9.
    #[serde(rename = "OFFER2")]
    MediumPairFourToppings,

    /// 1 large pizza with exactly 4 toppings at half price.
    #[serde(rename = "OFFER3")]
    LargeFourToppingsHalfPrice,
}

impl Offer {
    /// Public identifier.
    pub const fn id(&self) -> &'static str {
        match self {
            Offer::MediumTwoToppings => "OFFER1",
            Offer::MediumPairFourToppings => "OFFER2",
            Offer::LargeFourToppingsHalfPrice => "OFFER3",
        }
    }

    /// Text shown to customers.
    pub const fn description(&self) -> &'static str {
        match self {
            Offer::MediumTwoToppings => "1 Medium Pizza with 2 toppings = $5",
            Offer::MediumPairFourToppings => "2 Medium Pizzas with 4 toppings each = $9",
            Offer::LargeFourToppingsHalfPrice => {
                "1 Large Pizza with 4 toppings (Pepperoni and Barbecue Chicken count as 2 toppings) - 50% discount"
            }
        }
    }

    /// Whether this rule, on its own, accepts the order.
    ///
    /// Topping counts are raw list lengths: unknown names and duplicates
    /// count.
    pub fn is_eligible(&self, order: &Order) -> bool {
        match self {
            Offer::MediumTwoToppings => {
                order.size == PizzaSize::Medium && order.topping_count() == OFFER1_TOPPINGS
            }
            Offer::MediumPairFourToppings => {
                order.order_count() == OFFER2_PIZZA_COUNT
                    && order.size == PizzaSize::Medium
                    && order.topping_count() == OFFER2_TOPPINGS
            }
            Offer::LargeFourToppingsHalfPrice => {
                order.size == PizzaSize::Large && order.topping_count() == OFFER3_TOPPINGS
            }
        }
    }

    /// The offer price for an eligible order, before capping at the
    /// original price.
    pub fn apply(&self, order: &Order, original_price: Money) -> Money {
        match self {
            Offer::MediumTwoToppings => OFFER1_PRICE,
            Offer::MediumPairFourToppings => OFFER2_PRICE,
            Offer::LargeFourToppingsHalfPrice => {
                debug!(
                    special = special_topping_count(order),
                    adjusted = adjusted_topping_count(order),
                    "special toppings counted; price uses full topping list"
                );
                original_price.percentage_of(OFFER3_PRICE_BPS)
            }
        }
    }
}

impl fmt::Display for Offer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

// =============================================================================
// Special Toppings
// =============================================================================

/// How many of the order's toppings are special, duplicates included.
pub fn special_topping_count(order: &Order) -> usize {
    order
        .toppings
        .iter()
        .filter(|t| SPECIAL_TOPPINGS.contains(&t.as_str()))
        .count()
}

/// Topping count under the "specials count double" reading of OFFER3:
/// 2 when at least two specials are present, else the raw count.
///
/// Informational only. No rule or price reads it.
pub fn adjusted_topping_count(order: &Order) -> usize {
    if special_topping_count(order) >= 2 {
        2
    } else {
        order.topping_count()
    }
}

// =============================================================================
// Evaluation
// =============================================================================

/// Runs the offer chain over an order with a known original price.
///
/// The first eligible offer sets the final price. A flat price above
/// `original_price` is lowered to it. Without a match the order pays full
/// price.
///
/// ```rust
/// use pizza_core::{evaluate, Money, Offer, Order, PizzaSize};
///
/// let order = Order::new(PizzaSize::Medium, vec!["Tomatoes".into(), "Onions".into()]);
/// let result = evaluate(&order, Money::from_cents(850));
/// assert_eq!(result.applied_offer, Some(Offer::MediumTwoToppings));
/// assert_eq!(result.final_price, Money::from_cents(500));
/// ```
pub fn evaluate(order: &Order, original_price: Money) -> PricingResult {
    let Some(offer) = OFFER_CHAIN.into_iter().find(|o| o.is_eligible(order)) else {
        return PricingResult::full_price(original_price);
    };

    let offer_price = offer.apply(order, original_price);
    let final_price = if offer_price > original_price {
        debug!(
            offer = offer.id(),
            offer_price = %offer_price,
            original = %original_price,
            "offer price above original; charging original"
        );
        original_price
    } else {
        offer_price
    };
    debug!(
        offer = offer.id(),
        size = %order.size,
        original = %original_price,
        final_price = %final_price,
        "offer applied"
    );

    PricingResult {
        applied_offer: Some(offer),
        original_price,
        final_price,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn order(size: PizzaSize, toppings: &[&str]) -> Order {
        Order::new(size, toppings.iter().map(|t| t.to_string()).collect())
    }

    fn pair(size: PizzaSize, toppings: &[&str]) -> Order {
        order(size, toppings).with_order_count(2).unwrap()
    }

    const FOUR: [&str; 4] = ["Tomatoes", "Onions", "Mushrooms", "Pineapple"];

    #[test]
    fn test_offer1_eligibility() {
        let offer = Offer::MediumTwoToppings;
        assert!(offer.is_eligible(&order(PizzaSize::Medium, &["Tomatoes", "Onions"])));
        assert!(offer.is_eligible(&order(PizzaSize::Medium, &["x", "y"])));
        assert!(offer.is_eligible(&pair(PizzaSize::Medium, &["Tomatoes", "Onions"])));
        assert!(!offer.is_eligible(&order(PizzaSize::Medium, &["Tomatoes"])));
        assert!(!offer.is_eligible(&order(PizzaSize::Large, &["Tomatoes", "Onions"])));
    }

    #[test]
    fn test_offer2_eligibility() {
        let offer = Offer::MediumPairFourToppings;
        assert!(offer.is_eligible(&pair(PizzaSize::Medium, &FOUR)));
        assert!(!offer.is_eligible(&order(PizzaSize::Medium, &FOUR)));
        assert!(!offer.is_eligible(&pair(PizzaSize::Large, &FOUR)));
        assert!(!offer.is_eligible(&pair(PizzaSize::Medium, &FOUR[..3])));

        let three = order(PizzaSize::Medium, &FOUR).with_order_count(3).unwrap();
        assert!(!offer.is_eligible(&three));
    }

    #[test]
    fn test_offer3_eligibility() {
        let offer = Offer::LargeFourToppingsHalfPrice;
        assert!(offer.is_eligible(&order(PizzaSize::Large, &FOUR)));
        assert!(offer.is_eligible(&pair(PizzaSize::Large, &FOUR)));
        assert!(!offer.is_eligible(&order(PizzaSize::ExtraLarge, &FOUR)));
        assert!(!offer.is_eligible(&order(PizzaSize::Large, &["Pepperoni", "Barbecue chicken"])));
    }

    #[test]
    fn test_offer1_beats_offer2_shape() {
        // Medium, two toppings, two pizzas: only OFFER1 has a matching shape
        let result = evaluate(&pair(PizzaSize::Medium, &["Tomatoes", "Onions"]), Money::from_cents(850));
        assert_eq!(result.applied_offer, Some(Offer::MediumTwoToppings));
        assert_eq!(result.final_price, OFFER1_PRICE);
    }

    #[test]
    fn test_offer2_flat_price() {
        let result = evaluate(&pair(PizzaSize::Medium, &FOUR), Money::from_cents(1045));
        assert_eq!(result.applied_offer, Some(Offer::MediumPairFourToppings));
        assert_eq!(result.final_price, Money::from_cents(900));
    }

    #[test]
    fn test_offer3_halves_regardless_of_specials() {
        let specials = order(PizzaSize::Large, &["Pepperoni", "Barbecue chicken", "Tomatoes", "Onions"]);
        let result = evaluate(&specials, Money::from_cents(1450));
        assert_eq!(result.applied_offer, Some(Offer::LargeFourToppingsHalfPrice));
        assert_eq!(result.final_price, Money::from_cents(725));

        let plain = order(PizzaSize::Large, &FOUR);
        let result = evaluate(&plain, Money::from_cents(1145));
        assert_eq!(result.final_price.to_string(), "$5.725");
    }

    #[test]
    fn test_offer3_keeps_half_cents() {
        // Large + Tomatoes, Onions, Bell pepper, Pineapple = $11.25
        let pizza = order(PizzaSize::Large, &["Tomatoes", "Onions", "Bell pepper", "Pineapple"]);
        let original = Money::from_cents(1125);
        let result = evaluate(&pizza, original);

        assert_eq!(result.applied_offer, Some(Offer::LargeFourToppingsHalfPrice));
        assert_eq!(result.final_price.amount(), rust_decimal::Decimal::new(5625, 3));
        assert_eq!(result.final_price.amount() * rust_decimal::Decimal::TWO, original.amount());
    }

    #[test]
    fn test_no_offer() {
        let result = evaluate(&order(PizzaSize::Medium, &FOUR), Money::from_cents(1045));
        assert_eq!(result, PricingResult::full_price(Money::from_cents(1045)));
    }

    #[test]
    fn test_flat_price_above_original_charges_original() {
        // Four unknown toppings on a medium: original is just the base $7.00
        let result = evaluate(&pair(PizzaSize::Medium, &["a", "b", "c", "d"]), Money::from_cents(700));
        assert_eq!(result.applied_offer, Some(Offer::MediumPairFourToppings));
        assert_eq!(result.final_price, Money::from_cents(700));

        // Same for OFFER1 with a catalog cheaper than $5
        let result = evaluate(&order(PizzaSize::Medium, &["x", "y"]), Money::from_cents(400));
        assert_eq!(result.applied_offer, Some(Offer::MediumTwoToppings));
        assert_eq!(result.final_price, Money::from_cents(400));
    }

    #[test]
    fn test_large_order_count_gets_no_pair_offer() {
        let many = order(PizzaSize::Medium, &FOUR).with_order_count(5_000_000_000).unwrap();
        assert!(!Offer::MediumPairFourToppings.is_eligible(&many));
        let result = evaluate(&many, Money::from_cents(1045));
        assert_eq!(result, PricingResult::full_price(Money::from_cents(1045)));
    }

    #[test]
    fn test_special_topping_counts() {
        let two = order(PizzaSize::Large, &["Pepperoni", "Barbecue chicken", "Tomatoes", "Onions"]);
        assert_eq!(special_topping_count(&two), 2);
        assert_eq!(adjusted_topping_count(&two), 2);

        let one = order(PizzaSize::Large, &["Pepperoni", "Sausage", "Tomatoes", "Onions"]);
        assert_eq!(special_topping_count(&one), 1);
        assert_eq!(adjusted_topping_count(&one), 4);

        let doubled = order(PizzaSize::Large, &["Pepperoni", "Pepperoni"]);
        assert_eq!(special_topping_count(&doubled), 2);
    }

    #[test]
    fn test_offer_ids_and_wire_format() {
        let ids: Vec<&str> = OFFER_CHAIN.iter().map(Offer::id).collect();
        assert_eq!(ids, vec!["OFFER1", "OFFER2", "OFFER3"]);

        let json = serde_json::to_string(&Offer::LargeFourToppingsHalfPrice).unwrap();
        assert_eq!(json, "\"OFFER3\"");
        assert_eq!(Offer::MediumTwoToppings.to_string(), "OFFER1");
        assert!(Offer::MediumPairFourToppings.description().contains("$9"));
    }
}
