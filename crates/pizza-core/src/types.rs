//! # Domain Types
//!
//! Core domain types used throughout the pricing engine.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  OrderRequest   │   │     Order       │   │ PricingResult   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  size (string)  │──►│  size           │──►│  appliedOffer?  │       │
//! │  │  toppings       │   │  toppings       │   │  originalPrice  │       │
//! │  │  orderCount     │   │  order_count≥1  │   │  finalPrice     │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │       (wire)              (validated)             (wire)               │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │   PizzaSize     │   │ ToppingCategory │                             │
//! │  │  small, medium  │   │  veg, non-veg   │                             │
//! │  │  large, xl      │   └─────────────────┘                             │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::CoreError;
use crate::money::Money;
use crate::offers::Offer;
use crate::validation::validate_order_count;

// =============================================================================
// Pizza Size
// =============================================================================

/// The closed set of pizza sizes.
///
/// Wire names are `small`, `medium`, `large` and `extraLarge`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub enum PizzaSize {
    Small,
    Medium,
    Large,
    ExtraLarge,
}

impl PizzaSize {
    /// All sizes in menu order.
    pub const ALL: [PizzaSize; 4] = [
        PizzaSize::Small,
        PizzaSize::Medium,
        PizzaSize::Large,
        PizzaSize::ExtraLarge,
    ];

    /// Wire name of the size.
    pub const fn as_str(&self) -> &'static str {
        match self {
            PizzaSize::Small => "small",
            PizzaSize::Medium => "medium",
            PizzaSize::Large => "large",
            PizzaSize::ExtraLarge => "extraLarge",
        }
    }

    /// Name shown on the menu.
    pub const fn display_name(&self) -> &'static str {
        match self {
            PizzaSize::Small => "Small",
            PizzaSize::Medium => "Medium",
            PizzaSize::Large => "Large",
            PizzaSize::ExtraLarge => "Extra Large",
        }
    }
}

impl fmt::Display for PizzaSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses the wire name. Anything else is [`CoreError::InvalidSize`].
impl FromStr for PizzaSize {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PizzaSize::ALL
            .into_iter()
            .find(|size| size.as_str() == s)
            .ok_or_else(|| CoreError::InvalidSize(s.to_string()))
    }
}

// =============================================================================
// Toppings
// =============================================================================

/// Whether a topping is vegetarian.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum ToppingCategory {
    Veg,
    NonVeg,
}

impl ToppingCategory {
    /// Wire name, also used as the menu label.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ToppingCategory::Veg => "veg",
            ToppingCategory::NonVeg => "non-veg",
        }
    }
}

/// A topping on the menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Topping {
    /// Catalog key. Lookups are exact and case-sensitive.
    pub name: String,

    /// Price in dollars.
    pub price: Money,

    pub category: ToppingCategory,
}

impl Topping {
    pub fn new(name: impl Into<String>, price: Money, category: ToppingCategory) -> Self {
        Topping {
            name: name.into(),
            price,
            category,
        }
    }
}

// =============================================================================
// Orders
// =============================================================================

fn default_order_count() -> i64 {
    1
}

/// An order as the caller sends it.
///
/// Nothing here is checked yet; [`Order::try_from`] does that.
///
/// ```json
/// { "size": "medium", "toppings": ["Tomatoes", "Onions"], "orderCount": 1 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub size: String,

    /// Topping names, possibly unknown or duplicated.
    #[serde(default)]
    pub toppings: Vec<String>,

    /// How many pizzas of this configuration are ordered together.
    #[serde(default = "default_order_count")]
    pub order_count: i64,
}

impl OrderRequest {
    pub fn new(size: impl Into<String>, toppings: Vec<String>) -> Self {
        OrderRequest {
            size: size.into(),
            toppings,
            order_count: default_order_count(),
        }
    }

    pub fn with_order_count(mut self, order_count: i64) -> Self {
        self.order_count = order_count;
        self
    }
}

/// A validated order.
///
/// ## Invariants
/// - `size` is one of the four known sizes
/// - `order_count >= 1`
/// - `toppings` is kept exactly as given: unknown names and duplicates stay
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub size: PizzaSize,
    pub toppings: Vec<String>,
    order_count: u64,
}

impl Order {
    /// Creates a single-pizza order.
    pub fn new(size: PizzaSize, toppings: Vec<String>) -> Self {
        Order {
            size,
            toppings,
            order_count: 1,
        }
    }

    /// Sets the order count, rejecting anything below 1.
    pub fn with_order_count(mut self, order_count: i64) -> Result<Self, CoreError> {
        self.order_count = validate_order_count(order_count)?;
        Ok(self)
    }

    #[inline]
    pub fn order_count(&self) -> u64 {
        self.order_count
    }

    /// Number of toppings as listed, unknown names and duplicates included.
    #[inline]
    pub fn topping_count(&self) -> usize {
        self.toppings.len()
    }
}

/// Validates a request: the size first, then the order count.
impl TryFrom<&OrderRequest> for Order {
    type Error = CoreError;

    fn try_from(request: &OrderRequest) -> Result<Self, Self::Error> {
        let size: PizzaSize = request.size.parse()?;
        Order::new(size, request.toppings.clone()).with_order_count(request.order_count)
    }
}

// =============================================================================
// Pricing Result
// =============================================================================

/// The outcome of pricing one order.
///
/// ## Invariants
/// - No offer: `final_price == original_price`
/// - Offer applied: `final_price <= original_price`
/// - At most one offer
///
/// Prices go out as decimal dollars:
///
/// ```json
/// { "appliedOffer": "OFFER1", "originalPrice": 8.5, "finalPrice": 5.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PricingResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub applied_offer: Option<Offer>,

    pub original_price: Money,

    pub final_price: Money,
}

impl PricingResult {
    /// Result when no offer matched.
    pub const fn full_price(price: Money) -> Self {
        PricingResult {
            applied_offer: None,
            original_price: price,
            final_price: price,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
