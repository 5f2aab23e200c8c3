//! # Validation Module
//!
//! Input checks applied before any price is computed.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Caller (CLI / order form)                                    │
//! │  └── Deserialization of the request shape                              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── order count >= 1                                                  │
//! │  └── catalog entries (names, prices) when a catalog is loaded          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Pricing                                                      │
//! │  └── size must have a base price in the catalog                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Topping names on an order are never validated: unknown names are allowed.

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest topping name accepted in a catalog.
pub const MAX_TOPPING_NAME_LEN: usize = 100;

// =============================================================================
// Order Validators
// =============================================================================

/// Validates the order count.
///
/// ## Rules
/// - Must be at least 1, else [`CoreError::InvalidOrderCount`]
/// - No upper bound: large counts are valid and simply match no offer
///
/// ```rust
/// use pizza_core::validation::validate_order_count;
///
/// assert_eq!(validate_order_count(2).unwrap(), 2);
/// assert!(validate_order_count(0).is_err());
/// ```
pub fn validate_order_count(order_count: i64) -> CoreResult<u64> {
    if order_count < 1 {
        return Err(CoreError::InvalidOrderCount(order_count));
    }

    Ok(order_count.unsigned_abs())
}

// =============================================================================
// Catalog Validators
// =============================================================================

/// Validates a topping name for a catalog entry.
///
/// ## Rules
/// - Must not be empty or whitespace
/// - At most [`MAX_TOPPING_NAME_LEN`] characters
pub fn validate_topping_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "topping name".to_string(),
        });
    }

    if name.chars().count() > MAX_TOPPING_NAME_LEN {
        return Err(ValidationError::OutOfRange {
            field: "topping name length".to_string(),
            min: 1,
            max: MAX_TOPPING_NAME_LEN as i64,
        });
    }

    Ok(())
}

/// Validates a catalog price.
///
/// ## Rules
/// - Must be non-negative (free toppings are fine)
///
/// ```rust
/// use pizza_core::money::Money;
/// use pizza_core::validation::validate_price;
///
/// assert!(validate_price("Onions", Money::from_cents(50)).is_ok());
/// assert!(validate_price("Onions", Money::zero()).is_ok());
/// assert!(validate_price("Onions", Money::from_cents(-1)).is_err());
/// ```
pub fn validate_price(field: &str, price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::Negative {
            field: format!("{field} price"),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_order_count() {
        assert_eq!(validate_order_count(1).unwrap(), 1);
        assert_eq!(validate_order_count(2).unwrap(), 2);

        assert!(matches!(validate_order_count(0), Err(CoreError::InvalidOrderCount(0))));
        assert!(matches!(validate_order_count(-5), Err(CoreError::InvalidOrderCount(-5))));
        assert_eq!(validate_order_count(5_000_000_000).unwrap(), 5_000_000_000);
        assert_eq!(validate_order_count(i64::MAX).unwrap(), i64::MAX as u64);
    }

    #[test]
    fn test_validate_topping_name() {
        assert!(validate_topping_name("Barbecue chicken").is_ok());
        assert!(validate_topping_name("").is_err());
        assert!(validate_topping_name("   ").is_err());
        assert!(validate_topping_name(&"x".repeat(101)).is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price("medium", Money::from_cents(700)).is_ok());
        let err = validate_price("medium", Money::from_cents(-700)).unwrap_err();
        assert_eq!(err.to_string(), "medium price must not be negative");
    }
}
