//! # Catalog
//!
//! The menu: size base prices and topping prices.
//!
//! ```text
//! ┌──────────────────────────────┐   ┌──────────────────────────────────────┐
//! │  Sizes                       │   │  Toppings                            │
//! │  small ........ $5.00        │   │  Tomatoes ........ $1.00  veg        │
//! │  medium ....... $7.00        │   │  Onions .......... $0.50  veg        │
//! │  large ........ $8.00        │   │  Bell pepper ..... $1.00  veg        │
//! │  extraLarge ... $9.00        │   │  Mushrooms ....... $1.20  veg        │
//! └──────────────────────────────┘   │  Pineapple ....... $0.75  veg        │
//!                                    │  Sausage ......... $1.00  non-veg    │
//!                                    │  Pepperoni ....... $2.00  non-veg    │
//!                                    │  Barbecue chicken  $3.00  non-veg    │
//!                                    └──────────────────────────────────────┘
//! ```
//!
//! A catalog is immutable once built. The standard one is built on first use
//! and shared for the rest of the process.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::sync::OnceLock;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::types::{PizzaSize, Topping, ToppingCategory};
use crate::validation::{validate_price, validate_topping_name};

const STANDARD_SIZES: [(PizzaSize, Money); 4] = [
    (PizzaSize::Small, Money::from_major_minor(5, 0)),
    (PizzaSize::Medium, Money::from_major_minor(7, 0)),
    (PizzaSize::Large, Money::from_major_minor(8, 0)),
    (PizzaSize::ExtraLarge, Money::from_major_minor(9, 0)),
];

const STANDARD_TOPPINGS: [(&str, Money, ToppingCategory); 8] = [
    ("Tomatoes", Money::from_major_minor(1, 0), ToppingCategory::Veg),
    ("Onions", Money::from_major_minor(0, 50), ToppingCategory::Veg),
    ("Bell pepper", Money::from_major_minor(1, 0), ToppingCategory::Veg),
    ("Mushrooms", Money::from_major_minor(1, 20), ToppingCategory::Veg),
    ("Pineapple", Money::from_major_minor(0, 75), ToppingCategory::Veg),
    ("Sausage", Money::from_major_minor(1, 0), ToppingCategory::NonVeg),
    ("Pepperoni", Money::from_major_minor(2, 0), ToppingCategory::NonVeg),
    ("Barbecue chicken", Money::from_major_minor(3, 0), ToppingCategory::NonVeg),
];

static STANDARD: OnceLock<Catalog> = OnceLock::new();

/// Size and topping price tables.
///
/// ## Invariants (checked by [`Catalog::validate`])
/// - Every price is non-negative
/// - Topping names are non-empty and unique
///
/// A size missing from `sizes` is allowed here; pricing an order of that
/// size fails with [`CoreError::InvalidSize`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    sizes: BTreeMap<PizzaSize, Money>,
    toppings: Vec<Topping>,
}

impl Catalog {
    /// The standard menu, shared by every caller in the process.
    ///
    /// ```rust
    /// use pizza_core::{Catalog, Money, PizzaSize};
    ///
    /// let catalog = Catalog::standard();
    /// assert_eq!(catalog.base_price(PizzaSize::Medium).unwrap(), Money::from_cents(700));
    /// ```
    pub fn standard() -> &'static Catalog {
        STANDARD.get_or_init(|| Catalog {
            sizes: STANDARD_SIZES.into_iter().collect(),
            toppings: STANDARD_TOPPINGS
                .into_iter()
                .map(|(name, price, category)| Topping::new(name, price, category))
                .collect(),
        })
    }

    /// Builds and validates a catalog from its tables.
    pub fn new(
        sizes: impl IntoIterator<Item = (PizzaSize, Money)>,
        toppings: Vec<Topping>,
    ) -> CoreResult<Self> {
        let catalog = Catalog {
            sizes: sizes.into_iter().collect(),
            toppings,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Checks prices and topping names.
    ///
    /// Catalogs that arrive through deserialization skip [`Catalog::new`],
    /// so callers loading one from a file must call this.
    pub fn validate(&self) -> CoreResult<()> {
        for (size, price) in &self.sizes {
            validate_price(size.as_str(), *price)?;
        }

        let mut seen = HashSet::with_capacity(self.toppings.len());
        for topping in &self.toppings {
            validate_topping_name(&topping.name)?;
            validate_price(&topping.name, topping.price)?;

            if !seen.insert(topping.name.as_str()) {
                return Err(ValidationError::Duplicate {
                    field: "topping".to_string(),
                    value: topping.name.clone(),
                }
                .into());
            }
        }

        Ok(())
    }

    /// Base price for a size.
    ///
    /// Fails with [`CoreError::InvalidSize`] when the catalog has no entry.
    pub fn base_price(&self, size: PizzaSize) -> CoreResult<Money> {
        self.sizes
            .get(&size)
            .copied()
            .ok_or_else(|| CoreError::InvalidSize(size.to_string()))
    }

    /// Looks up a topping by exact name.
    pub fn topping(&self, name: &str) -> Option<&Topping> {
        self.toppings.iter().find(|t| t.name == name)
    }

    /// Position of a topping on the menu.
    pub fn topping_position(&self, name: &str) -> Option<usize> {
        self.toppings.iter().position(|t| t.name == name)
    }

    /// Toppings in menu order.
    pub fn toppings(&self) -> &[Topping] {
        &self.toppings
    }

    /// Sizes with a base price, in menu order.
    pub fn sizes(&self) -> impl Iterator<Item = (PizzaSize, Money)> + '_ {
        self.sizes.iter().map(|(size, price)| (*size, *price))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_sizes() {
        let catalog = Catalog::standard();
        let prices: Vec<Money> = catalog.sizes().map(|(_, p)| p).collect();
        let expected: Vec<Money> = [500, 700, 800, 900].into_iter().map(Money::from_cents).collect();
        assert_eq!(prices, expected);
    }

    #[test]
    fn test_standard_toppings() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.toppings().len(), 8);

        let bbq = catalog.topping("Barbecue chicken").unwrap();
        assert_eq!(bbq.price, Money::from_cents(300));
        assert_eq!(bbq.category, ToppingCategory::NonVeg);

        assert_eq!(catalog.topping("Pineapple").unwrap().price, Money::from_cents(75));
        assert_eq!(catalog.topping_position("Tomatoes"), Some(0));
    }

    #[test]
    fn test_standard_is_shared() {
        assert!(std::ptr::eq(Catalog::standard(), Catalog::standard()));
        assert!(Catalog::standard().validate().is_ok());
    }

    #[test]
    fn test_topping_lookup_is_exact() {
        let catalog = Catalog::standard();
        assert!(catalog.topping("tomatoes").is_none());
        assert!(catalog.topping("Anchovies").is_none());
        assert!(catalog.topping_position("Anchovies").is_none());
    }

    #[test]
    fn test_missing_size_is_invalid() {
        let catalog = Catalog::new([(PizzaSize::Small, Money::from_cents(500))], vec![]).unwrap();
        assert!(catalog.base_price(PizzaSize::Small).is_ok());
        assert!(matches!(
            catalog.base_price(PizzaSize::Large),
            Err(CoreError::InvalidSize(s)) if s == "large"
        ));
    }

    #[test]
    fn test_rejects_duplicate_topping() {
        let toppings = vec![
            Topping::new("Olives", Money::from_cents(60), ToppingCategory::Veg),
            Topping::new("Olives", Money::from_cents(80), ToppingCategory::Veg),
        ];
        let err = Catalog::new(STANDARD_SIZES, toppings).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::Duplicate { value, .. }) if value == "Olives"
        ));
    }

    #[test]
    fn test_rejects_negative_prices() {
        let negative_size = Catalog::new([(PizzaSize::Small, Money::from_cents(-1))], vec![]);
        assert!(negative_size.is_err());

        let negative_topping = Catalog::new(
            STANDARD_SIZES,
            vec![Topping::new("Olives", Money::from_cents(-60), ToppingCategory::Veg)],
        );
        assert!(negative_topping.is_err());
    }

    #[test]
    fn test_deserialize_catalog() {
        let json = r#"{
            "sizes": { "small": 4, "large": 9.5 },
            "toppings": [
                { "name": "Olives", "price": 0.6, "category": "veg" },
                { "name": "Ham", "price": 1.25, "category": "non-veg" }
            ]
        }"#;
        let catalog: Catalog = serde_json::from_str(json).unwrap();
        assert!(catalog.validate().is_ok());
        assert_eq!(catalog.base_price(PizzaSize::Large).unwrap(), Money::from_cents(950));
        assert_eq!(catalog.topping("Olives").unwrap().price, Money::from_cents(60));
        assert!(catalog.base_price(PizzaSize::Medium).is_err());
        assert_eq!(catalog.topping("Ham").unwrap().category, ToppingCategory::NonVeg);
    }
}
