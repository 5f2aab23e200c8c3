//! # Price Calculator
//!
//! The unmodified price of an order, before any offer.
//!
//! ```text
//! original price = base price(size) + Σ price(topping) for known toppings
//! ```
//!
//! Unknown toppings add nothing here but stay on the order, where they still
//! count toward offer eligibility. Every addition is checked, so an oversized
//! custom catalog fails with [`CoreError::PriceOverflow`] instead of wrapping.

use tracing::trace;

use crate::catalog::Catalog;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::Order;

/// Computes the catalog price of an order.
///
/// Fails with [`CoreError::InvalidSize`](crate::CoreError::InvalidSize) when
/// the catalog has no base price for the size, or with
/// [`CoreError::PriceOverflow`] when the sum leaves the decimal range.
/// Unknown toppings never fail.
///
/// ```rust
/// use pizza_core::{compute_price, Catalog, Money, Order, PizzaSize};
///
/// let order = Order::new(PizzaSize::Medium, vec!["Tomatoes".into(), "Onions".into()]);
/// let price = compute_price(Catalog::standard(), &order).unwrap();
/// assert_eq!(price, Money::from_cents(850));
/// ```
pub fn compute_price(catalog: &Catalog, order: &Order) -> CoreResult<Money> {
    let base = catalog.base_price(order.size)?;

    order
        .toppings
        .iter()
        .filter_map(|name| {
            let found = catalog.topping(name);
            if found.is_none() {
                trace!(topping = %name, "unknown topping priced at zero");
            }
            found.map(|t| t.price)
        })
        .try_fold(base, Money::checked_add)
        .ok_or_else(|| CoreError::PriceOverflow(order.size.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PizzaSize, Topping, ToppingCategory};
    use rust_decimal::Decimal;

    fn order(size: PizzaSize, toppings: &[&str]) -> Order {
        Order::new(size, toppings.iter().map(|t| t.to_string()).collect())
    }

    #[test]
    fn test_base_price_only() {
        let catalog = Catalog::standard();
        for (size, cents) in [
            (PizzaSize::Small, 500),
            (PizzaSize::Medium, 700),
            (PizzaSize::Large, 800),
            (PizzaSize::ExtraLarge, 900),
        ] {
            assert_eq!(
                compute_price(catalog, &order(size, &[])).unwrap(),
                Money::from_cents(cents)
            );
        }
    }

    #[test]
    fn test_sums_known_toppings() {
        let price = compute_price(
            Catalog::standard(),
            &order(
                PizzaSize::Large,
                &["Pepperoni", "Barbecue chicken", "Tomatoes", "Onions"],
            ),
        )
        .unwrap();
        assert_eq!(price, Money::from_cents(1450));
    }

    #[test]
    fn test_unknown_toppings_are_free() {
        let price = compute_price(
            Catalog::standard(),
            &order(PizzaSize::Large, &["Tomatoes", "Anchovies-unknown"]),
        )
        .unwrap();
        assert_eq!(price, Money::from_cents(900));
    }

    #[test]
    fn test_duplicates_are_billed_each_time() {
        let price = compute_price(
            Catalog::standard(),
            &order(PizzaSize::Small, &["Pepperoni", "Pepperoni"]),
        )
        .unwrap();
        assert_eq!(price, Money::from_cents(900));
    }

    #[test]
    fn test_size_missing_from_catalog() {
        let catalog = Catalog::new([(PizzaSize::Small, Money::from_cents(500))], vec![]).unwrap();
        let result = compute_price(&catalog, &order(PizzaSize::Medium, &[]));
        assert!(matches!(result, Err(CoreError::InvalidSize(_))));
    }

    #[test]
    fn test_overflowing_catalog_is_an_error() {
        let catalog = Catalog::new(
            [(PizzaSize::Small, Money::from_decimal(Decimal::MAX))],
            vec![Topping::new("Gold", Money::from_decimal(Decimal::ONE), ToppingCategory::Veg)],
        )
        .unwrap();

        let result = compute_price(&catalog, &order(PizzaSize::Small, &["Gold"]));
        assert!(matches!(result, Err(CoreError::PriceOverflow(size)) if size == "small"));

        // Base price alone still fits
        let result = compute_price(&catalog, &order(PizzaSize::Small, &[]));
        assert_eq!(result.unwrap(), Money::from_decimal(Decimal::MAX));
    }
}
