//! # Money Module
//!
//! Provides the `Money` type for prices on the order screen.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Every price on the screen is a whole currency unit:                    │
//! │                                                                         │
//! │    base price 50  +  Large surcharge 15  +  Onion 4  =  69              │
//! │                                                                         │
//! │  Integer arithmetic keeps a total exact however often a topping is      │
//! │  toggled: it is always recomputed as a plain sum.                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use pizza_core::money::Money;
//!
//! let base = Money::from_units(50);
//! let total = base + Money::from_units(15);
//! assert_eq!(total.units(), 65);
//! assert_eq!(total.to_string(), "$65");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in whole currency units.
///
/// ## Design Decisions
/// - **i64 (signed)**: a negative catalog price parses and is then rejected
///   by validation instead of failing deep inside serde
/// - **Single field tuple struct**: serializes as a bare integer, so config
///   files write `base_price = 50`
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from whole currency units.
    ///
    /// ## Example
    /// ```rust
    /// use pizza_core::money::Money;
    ///
    /// let price = Money::from_units(55);
    /// assert_eq!(price.units(), 55);
    /// ```
    #[inline]
    pub const fn from_units(units: i64) -> Self {
        Money(units)
    }

    /// Returns the value in whole currency units.
    #[inline]
    pub const fn units(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Adds two amounts, returning `None` on overflow.
    ///
    /// ## Example
    /// ```rust
    /// use pizza_core::money::Money;
    ///
    /// let a = Money::from_units(50);
    /// assert_eq!(a.checked_add(Money::from_units(15)), Some(Money::from_units(65)));
    /// assert_eq!(Money::from_units(i64::MAX).checked_add(a), None);
    /// ```
    #[inline]
    pub const fn checked_add(self, other: Money) -> Option<Money> {
        match self.0.checked_add(other.0) {
            Some(units) => Some(Money(units)),
            None => None,
        }
    }

    /// Checks if the value is negative (less than zero).
    ///
    /// Catalog prices must never be negative; see
    /// [`validate_catalog`](crate::validation::validate_catalog).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Formats the amount with a caller-chosen currency symbol.
    ///
    /// ## Example
    /// ```rust
    /// use pizza_core::money::Money;
    ///
    /// assert_eq!(Money::from_units(69).format_with("€"), "€69");
    /// assert_eq!(Money::from_units(-4).format_with("$"), "-$4");
    /// ```
    pub fn format_with(&self, symbol: &str) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        format!("{}{}{}", sign, symbol, self.0.abs())
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display uses a dollar sign, matching the price label on the order screen.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with("$"))
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Summing an iterator of prices (selected toppings).
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
