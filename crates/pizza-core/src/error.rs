//! # Error Types
//!
//! Domain-specific error types for pizza-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  pizza-core errors (this file)                                         │
//! │  ├── CoreError        - Order pricing failures                         │
//! │  └── ValidationError  - Field-level input failures                     │
//! │                                                                         │
//! │  pizza-cli errors (app)                                                │
//! │  └── ApiError         - What the caller sees (serialized)              │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Terminal / JSON        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Unknown topping names are NOT an error anywhere in this crate. They price
//! at zero and still count toward offer eligibility.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Errors raised while pricing an order.
///
/// A pricing call either returns a complete result or fails with one of
/// these. There is no partial success and no retry inside the engine.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The size is not a known pizza size, or the catalog has no base
    /// price for it.
    ///
    /// ## When This Occurs
    /// - Request carries `"size": "huge"`
    /// - A custom catalog omits one of the sizes
    #[error("Invalid pizza size: {0}")]
    InvalidSize(String),

    /// `orderCount` is below 1.
    #[error("Invalid order count {0}: must be at least 1")]
    InvalidOrderCount(i64),

    /// The order's price does not fit the decimal range. Only reachable
    /// with an oversized custom catalog.
    #[error("Price of a {0} order is too large to compute")]
    PriceOverflow(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Used when checking a caller-supplied catalog before it is put into
/// service.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be zero or more.
    #[error("{field} must not be negative")]
    Negative { field: String },

    /// Duplicate value (e.g., two toppings with the same name).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InvalidSize("huge".to_string());
        assert_eq!(err.to_string(), "Invalid pizza size: huge");

        let err = CoreError::InvalidOrderCount(0);
        assert_eq!(err.to_string(), "Invalid order count 0: must be at least 1");

        let err = CoreError::PriceOverflow("small".to_string());
        assert_eq!(err.to_string(), "Price of a small order is too large to compute");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Duplicate {
            field: "topping".to_string(),
            value: "Onions".to_string(),
        };
        assert_eq!(err.to_string(), "topping 'Onions' already exists");

        let err = ValidationError::Required {
            field: "topping name".to_string(),
        };
        assert_eq!(err.to_string(), "topping name is required");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Negative {
            field: "Onions price".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
