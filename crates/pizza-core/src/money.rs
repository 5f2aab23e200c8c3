//! # Money Module
//!
//! Provides the `Money` type for handling menu prices and offer prices.
//!
//! ## Why Decimal Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    7 + 1.00 + 0.50 + 1.20 + 0.75 = 10.450000000000001  ❌              │
//! │                                                                         │
//! │  THE WHOLE-CENT PROBLEM                                                 │
//! │    11.25 × 0.5 = 5.625 → 5.63 in cents, and 5.63 × 2 ≠ 11.25  ❌       │
//! │                                                                         │
//! │  OUR SOLUTION: Base-10 Decimal                                          │
//! │    7 + 1.00 + 0.50 + 1.20 + 0.75 = 10.45  ✅                            │
//! │    11.25 × 0.5 = 5.625  ✅                                              │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! On the wire a `Money` is a plain JSON number in dollars (`8.5`, `5.625`).
//!
//! ## Usage
//! ```rust
//! use pizza_core::money::Money;
//!
//! let base = Money::from_major_minor(7, 0);   // $7.00
//! let onions = Money::from_cents(50);         // $0.50
//! assert_eq!(base.checked_add(onions).unwrap().to_string(), "$7.50");
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

/// Basis points in 100%.
pub const BPS_SCALE: u32 = 10_000;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary amount in dollars, held as an exact decimal.
///
/// ## Where Money is Used
/// ```text
/// Size base price ──┐
///                   ├──► original price ──► Offer Evaluator ──► final price
/// Topping prices ───┘
/// ```
///
/// Equality is numeric: `8.5` and `8.50` are the same amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(
    #[serde(with = "rust_decimal::serde::float")]
    #[ts(type = "number")]
    Decimal,
);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ```rust
    /// use pizza_core::money::Money;
    ///
    /// let price = Money::from_cents(1045); // $10.45
    /// assert_eq!(price.to_string(), "$10.45");
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        let magnitude = cents.unsigned_abs();
        Money(Decimal::from_parts(
            magnitude as u32,
            (magnitude >> 32) as u32,
            0,
            cents < 0,
            2,
        ))
    }

    /// Creates a Money value from dollars and cents.
    ///
    /// ```rust
    /// use pizza_core::money::Money;
    ///
    /// assert_eq!(Money::from_major_minor(1, 20), Money::from_cents(120));
    /// assert_eq!(Money::from_major_minor(-5, 50), Money::from_cents(-550));
    /// ```
    ///
    /// For negative amounts only the major unit carries the sign.
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money::from_cents(major * 100 - minor)
        } else {
            Money::from_cents(major * 100 + minor)
        }
    }

    /// Wraps an exact decimal dollar amount.
    #[inline]
    pub const fn from_decimal(amount: Decimal) -> Self {
        Money(amount)
    }

    /// Returns the amount in dollars.
    #[inline]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(Decimal::ZERO)
    }

    /// Checks if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checks if the value is negative.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Returns the absolute amount.
    #[inline]
    pub fn abs(&self) -> Money {
        Money(self.0.abs())
    }

    /// Adds two amounts, returning `None` when the sum leaves the decimal
    /// range.
    ///
    /// ```rust
    /// use pizza_core::money::Money;
    ///
    /// let sum = Money::from_cents(700).checked_add(Money::from_cents(150));
    /// assert_eq!(sum, Some(Money::from_cents(850)));
    /// ```
    #[inline]
    pub fn checked_add(self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }

    /// Returns `bps` basis points of this amount, exactly.
    ///
    /// `bps` is at most [`BPS_SCALE`], so the result never exceeds the
    /// amount and no precision is lost.
    ///
    /// ```rust
    /// use pizza_core::money::Money;
    ///
    /// // 50% of $14.50
    /// assert_eq!(Money::from_cents(1450).percentage_of(5000), Money::from_cents(725));
    /// // 50% of $11.25 keeps the half cent
    /// assert_eq!(Money::from_cents(1125).percentage_of(5000).to_string(), "$5.625");
    /// ```
    pub fn percentage_of(&self, bps: u32) -> Money {
        let bps = bps.min(BPS_SCALE);
        Money(self.0 * Decimal::new(i64::from(bps), 4))
    }

    /// Plain decimal digits: two places for whole cents, more only when the
    /// amount has a fraction of a cent.
    ///
    /// ```rust
    /// use pizza_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(850).to_plain_string(), "8.50");
    /// assert_eq!(Money::from_cents(1125).percentage_of(5000).to_plain_string(), "5.625");
    /// ```
    pub fn to_plain_string(&self) -> String {
        if self.0.round_dp(2) == self.0 {
            format!("{:.2}", self.0)
        } else {
            self.0.normalize().to_string()
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Human-readable form, e.g. `$10.45`.
///
/// The CLI uses its configured currency symbol instead; this is for logs and
/// debugging.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        write!(f, "{}${}", sign, self.abs().to_plain_string())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
