//! # pizza-core: Pure Pricing Logic for Pizza Orders
//!
//! Prices a pizza order from the menu and picks at most one promotional
//! offer for it. Everything here is a pure function of its inputs and an
//! immutable catalog.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Pizza Pricing Architecture                       │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              Caller (pizza-cli, order form UI)                  │   │
//! │  │    topping selection per size ──► one OrderRequest per size     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ price_order()                          │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ pizza-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  catalog  │  │  pricing  │  │  offers   │  │   order   │  │   │
//! │  │   │  sizes    │─►│  original │─►│  OFFER1-3 │─►│  façade   │  │   │
//! │  │   │  toppings │  │  price    │  │  chain    │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO SHARED MUTABLE STATE • PURE FUNCTIONS             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Sizes, toppings, orders, pricing results
//! - [`money`] - Exact decimal Money type
//! - [`catalog`] - Size and topping price tables
//! - [`pricing`] - Original (catalog) price of an order
//! - [`offers`] - Offer rules and the priority chain
//! - [`order`] - The pricing entry point
//! - [`validation`] - Input checks
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use pizza_core::{price_order, Catalog, Money, Offer, OrderRequest};
//!
//! let request = OrderRequest::new("medium", vec!["Tomatoes".into(), "Onions".into()]);
//! let result = price_order(Catalog::standard(), &request).unwrap();
//!
//! assert_eq!(result.original_price, Money::from_cents(850));
//! assert_eq!(result.final_price, Money::from_cents(500));
//! assert_eq!(result.applied_offer, Some(Offer::MediumTwoToppings));
//! ```

pub mod catalog;
pub mod error;
pub mod money;
pub mod offers;
pub mod order;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::Catalog;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use offers::{evaluate, Offer, OFFER_CHAIN};
pub use order::{price_order, price_validated};
pub use pricing::compute_price;
pub use types::*;
