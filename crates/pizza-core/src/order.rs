//! # Order Façade
//!
//! The one entry point callers need: request in, pricing result out.
//!
//! ```text
//! OrderRequest ──► validate (size, order count) ──► compute_price ──► evaluate
//!                        │                                               │
//!                        ▼                                               ▼
//!                    CoreError                                    PricingResult
//! ```
//!
//! Every call is independent. Nothing is cached or shared between calls
//! except the read-only catalog, so callers may price many orders in
//! parallel.

use crate::catalog::Catalog;
use crate::error::CoreResult;
use crate::offers::evaluate;
use crate::pricing::compute_price;
use crate::types::{Order, OrderRequest, PricingResult};

/// Validates and prices a raw order.
///
/// ## Errors
/// - [`CoreError::InvalidSize`](crate::CoreError::InvalidSize): unknown size,
///   or no base price for it in `catalog`
/// - [`CoreError::InvalidOrderCount`](crate::CoreError::InvalidOrderCount):
///   `orderCount < 1`
/// - [`CoreError::PriceOverflow`](crate::CoreError::PriceOverflow): the
///   catalog prices sum past the decimal range
///
/// ```rust
/// use pizza_core::{price_order, Catalog, Money, OrderRequest};
///
/// let request = OrderRequest::new("small", vec![]);
/// let result = price_order(Catalog::standard(), &request).unwrap();
/// assert_eq!(result.final_price, Money::from_cents(500));
/// assert!(result.applied_offer.is_none());
/// ```
pub fn price_order(catalog: &Catalog, request: &OrderRequest) -> CoreResult<PricingResult> {
    let order = Order::try_from(request)?;
    price_validated(catalog, &order)
}

/// Prices an order that has already passed validation.
pub fn price_validated(catalog: &Catalog, order: &Order) -> CoreResult<PricingResult> {
    let original_price = compute_price(catalog, order)?;
    Ok(evaluate(order, original_price))
}
