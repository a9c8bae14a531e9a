//! # Domain Types
//!
//! The order state model behind the pizza ordering screen.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  OrderState                                                             │
//! │  └── breads: Vec<BreadOption>          (pager position = index)         │
//! │        ├── id, base_price                                               │
//! │        ├── size: SizeOption            Small(5) Medium(10) Large(15)    │
//! │        ├── toppings: Vec<Topping>      (chip position = index)          │
//! │        │     └── id, name, unit_price, selected                         │
//! │        └── total_price                 DERIVED, never set directly      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Copy-on-Write
//! Every type here is a value. Changing a size or a topping builds a new
//! `BreadOption` (and a new `OrderState`) instead of editing in place, so a
//! snapshot already handed to an observer can never change under it.
//!
//! ## Price Invariant
//! ```text
//! total_price = base_price + size.surcharge() + Σ unit_price(selected toppings)
//! ```
//! `total_price` is private and only written by [`bread_total`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::catalog::{BreadTemplate, ToppingTemplate};
use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;

// =============================================================================
// Size Option
// =============================================================================

/// Bread size. Ordered `Small < Medium < Large`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum SizeOption {
    /// Default size for every bread in a fresh order.
    #[default]
    Small,
    Medium,
    Large,
}

impl SizeOption {
    /// All sizes, smallest first (the order of the size selector).
    pub const ALL: [SizeOption; 3] = [SizeOption::Small, SizeOption::Medium, SizeOption::Large];

    /// Price added to the bread's base price for this size.
    #[inline]
    pub const fn surcharge(&self) -> Money {
        match self {
            SizeOption::Small => Money::from_units(5),
            SizeOption::Medium => Money::from_units(10),
            SizeOption::Large => Money::from_units(15),
        }
    }

    /// Lowercase name, as used in commands and config.
    pub const fn as_str(&self) -> &'static str {
        match self {
            SizeOption::Small => "small",
            SizeOption::Medium => "medium",
            SizeOption::Large => "large",
        }
    }
}

impl fmt::Display for SizeOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SizeOption {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "small" | "s" => Ok(SizeOption::Small),
            "medium" | "m" => Ok(SizeOption::Medium),
            "large" | "l" => Ok(SizeOption::Large),
            _ => Err(ValidationError::NotAllowed {
                field: "size".to_string(),
                allowed: SizeOption::ALL.iter().map(|s| s.to_string()).collect(),
            }),
        }
    }
}

// =============================================================================
// Topping
// =============================================================================

/// An optional add-on, toggled independently on each bread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Topping {
    id: u32,
    name: String,
    unit_price: Money,
    selected: bool,
}

impl Topping {
    /// Creates an unselected topping from its catalog entry.
    pub fn from_template(template: &ToppingTemplate) -> Self {
        Topping {
            id: template.id,
            name: template.name.clone(),
            unit_price: template.unit_price,
            selected: false,
        }
    }

    /// Identifier, unique within one bread's topping list.
    #[inline]
    pub fn id(&self) -> u32 {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    #[inline]
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Returns a copy with `selected` flipped.
    pub fn toggled(&self) -> Self {
        Topping {
            selected: !self.selected,
            ..self.clone()
        }
    }
}

// =============================================================================
// Bread Option
// =============================================================================

/// One order line: a pizza base with its own size and topping selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct BreadOption {
    id: u32,
    base_price: Money,
    size: SizeOption,
    toppings: Vec<Topping>,
    total_price: Money,
}

impl BreadOption {
    /// Creates a bread at the default size with every topping unselected.
    pub fn from_template(template: &BreadTemplate) -> Self {
        let toppings = template.toppings.iter().map(Topping::from_template).collect();
        Self::priced(template.id, template.base_price, SizeOption::default(), toppings)
    }

    /// Builds a bread and derives its total. The only constructor.
    fn priced(id: u32, base_price: Money, size: SizeOption, toppings: Vec<Topping>) -> Self {
        let total_price = bread_total(base_price, size, &toppings);
        BreadOption {
            id,
            base_price,
            size,
            toppings,
            total_price,
        }
    }

    #[inline]
    pub fn id(&self) -> u32 {
        self.id
    }

    #[inline]
    pub fn base_price(&self) -> Money {
        self.base_price
    }

    #[inline]
    pub fn size(&self) -> SizeOption {
        self.size
    }

    /// Toppings in catalog order.
    #[inline]
    pub fn toppings(&self) -> &[Topping] {
        &self.toppings
    }

    /// Looks up a topping by position.
    pub fn topping(&self, index: usize) -> CoreResult<&Topping> {
        self.toppings
            .get(index)
            .ok_or_else(|| CoreError::topping_out_of_range(index, self.toppings.len()))
    }

    /// Position of the topping with the given id, if present.
    pub fn topping_index(&self, topping_id: u32) -> Option<usize> {
        self.toppings.iter().position(|t| t.id == topping_id)
    }

    /// Derived total: base + size surcharge + selected toppings.
    #[inline]
    pub fn total_price(&self) -> Money {
        self.total_price
    }

    /// Iterates over the currently selected toppings.
    pub fn selected_toppings(&self) -> impl Iterator<Item = &Topping> {
        self.toppings.iter().filter(|t| t.selected)
    }

    /// Returns a copy at `size`, with the total recomputed.
    pub fn with_size(&self, size: SizeOption) -> Self {
        Self::priced(self.id, self.base_price, size, self.toppings.clone())
    }

    /// Returns a copy with one topping toggled, with the total recomputed.
    ///
    /// ## Errors
    /// [`CoreError::OutOfRange`] if `topping_index` is not a valid position.
    pub fn with_topping_toggled(&self, topping_index: usize) -> CoreResult<Self> {
        let toggled = self.topping(topping_index)?.toggled();

        let mut toppings = self.toppings.clone();
        toppings[topping_index] = toggled;

        Ok(Self::priced(self.id, self.base_price, self.size, toppings))
    }
}

/// Computes a bread's total from scratch.
///
/// ## Example
/// ```rust
/// use pizza_core::{bread_total, Money, SizeOption};
///
/// let total = bread_total(Money::from_units(50), SizeOption::Large, &[]);
/// assert_eq!(total.units(), 65);
/// ```
pub fn bread_total(base_price: Money, size: SizeOption, toppings: &[Topping]) -> Money {
    let toppings_total: Money = toppings
        .iter()
        .filter(|t| t.selected)
        .map(|t| t.unit_price)
        .sum();

    base_price + size.surcharge() + toppings_total
}

// =============================================================================
// Order State
// =============================================================================

/// The whole observable order: one entry per bread on the pager.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderState {
    breads: Vec<BreadOption>,
}

impl OrderState {
    /// Builds the initial order from a catalog: every bread Small, nothing
    /// selected, totals derived.
    pub fn from_catalog(catalog: &[BreadTemplate]) -> Self {
        OrderState {
            breads: catalog.iter().map(BreadOption::from_template).collect(),
        }
    }

    /// Breads in pager order.
    #[inline]
    pub fn breads(&self) -> &[BreadOption] {
        &self.breads
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.breads.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.breads.is_empty()
    }

    /// Looks up a bread by position.
    pub fn bread(&self, index: usize) -> CoreResult<&BreadOption> {
        self.breads
            .get(index)
            .ok_or_else(|| CoreError::bread_out_of_range(index, self.breads.len()))
    }

    /// Returns a copy with the bread at `index` resized.
    pub fn with_size(&self, bread_index: usize, size: SizeOption) -> CoreResult<Self> {
        let bread = self.bread(bread_index)?.with_size(size);
        Ok(self.with_bread(bread_index, bread))
    }

    /// Returns a copy with one topping on one bread toggled.
    pub fn with_topping_toggled(&self, bread_index: usize, topping_index: usize) -> CoreResult<Self> {
        let bread = self.bread(bread_index)?.with_topping_toggled(topping_index)?;
        Ok(self.with_bread(bread_index, bread))
    }

    // Caller has already checked `index`.
    fn with_bread(&self, index: usize, bread: BreadOption) -> Self {
        let mut breads = self.breads.clone();
        breads[index] = bread;
        OrderState { breads }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::reference_catalog;

    fn expected_total(bread: &BreadOption) -> Money {
        let mut total = bread.base_price() + bread.size().surcharge();
        for topping in bread.toppings() {
            if topping.is_selected() {
                total = total + topping.unit_price();
            }
        }
        total
    }

    #[test]
    fn test_surcharges_and_ordering() {
        assert_eq!(SizeOption::Small.surcharge().units(), 5);
        assert_eq!(SizeOption::Medium.surcharge().units(), 10);
        assert_eq!(SizeOption::Large.surcharge().units(), 15);
        assert!(SizeOption::Small < SizeOption::Medium);
        assert!(SizeOption::Medium < SizeOption::Large);
        assert_eq!(SizeOption::default(), SizeOption::Small);
    }

    #[test]
    fn test_size_parsing() {
        assert_eq!("large".parse::<SizeOption>().unwrap(), SizeOption::Large);
        assert_eq!(" Medium ".parse::<SizeOption>().unwrap(), SizeOption::Medium);
        assert_eq!("s".parse::<SizeOption>().unwrap(), SizeOption::Small);
        assert!(matches!(
            "family".parse::<SizeOption>(),
            Err(ValidationError::NotAllowed { .. })
        ));
    }

    #[test]
    fn test_initial_state_from_reference_catalog() {
        let state = OrderState::from_catalog(&reference_catalog());

        assert_eq!(state.len(), 5);
        let first = state.bread(0).unwrap();
        assert_eq!(first.size(), SizeOption::Small);
        assert_eq!(first.total_price().units(), 55);
        assert!(first.selected_toppings().next().is_none());

        let last = state.bread(4).unwrap();
        assert_eq!(last.total_price().units(), 75);
    }

    #[test]
    fn test_toggle_is_involution() {
        let state = OrderState::from_catalog(&reference_catalog());
        let once = state.with_topping_toggled(2, 3).unwrap();
        let bread = once.bread(2).unwrap();
        assert!(bread.topping(3).unwrap().is_selected());
        assert_eq!(bread.total_price().units(), 60 + 5 + 8);

        let twice = once.with_topping_toggled(2, 3).unwrap();
        assert_eq!(twice, state);
    }

    #[test]
    fn test_with_size_keeps_toppings_and_other_breads() {
        let state = OrderState::from_catalog(&reference_catalog())
            .with_topping_toggled(1, 0)
            .unwrap();
        let resized = state.with_size(1, SizeOption::Medium).unwrap();

        let before = state.bread(1).unwrap();
        let after = resized.bread(1).unwrap();
        assert_eq!(after.size(), SizeOption::Medium);
        assert_eq!(after.toppings(), before.toppings());
        assert_eq!(after.total_price().units(), 55 + 10 + 2);

        for i in [0, 2, 3, 4] {
            assert_eq!(resized.bread(i).unwrap(), state.bread(i).unwrap());
        }
    }

    #[test]
    fn test_price_formula_holds_across_mutations() {
        let mut state = OrderState::from_catalog(&reference_catalog());
        let steps: [(usize, usize, SizeOption); 6] = [
            (0, 1, SizeOption::Large),
            (0, 4, SizeOption::Medium),
            (3, 2, SizeOption::Small),
            (3, 2, SizeOption::Large),
            (4, 0, SizeOption::Medium),
            (0, 1, SizeOption::Small),
        ];

        for (bread, topping, size) in steps {
            state = state.with_topping_toggled(bread, topping).unwrap();
            state = state.with_size(bread, size).unwrap();
            for b in state.breads() {
                assert_eq!(b.total_price(), expected_total(b));
            }
        }
    }

    #[test]
    fn test_out_of_range_indices() {
        let state = OrderState::from_catalog(&reference_catalog());

        assert_eq!(
            state.with_size(99, SizeOption::Large).unwrap_err(),
            CoreError::bread_out_of_range(99, 5)
        );
        assert_eq!(
            state.with_topping_toggled(0, 5).unwrap_err(),
            CoreError::topping_out_of_range(5, 5)
        );
        assert_eq!(
            state.with_topping_toggled(5, 0).unwrap_err(),
            CoreError::bread_out_of_range(5, 5)
        );
    }

    #[test]
    fn test_empty_order_is_tolerated() {
        let state = OrderState::from_catalog(&[]);
        assert!(state.is_empty());
        assert!(matches!(
            state.with_size(0, SizeOption::Small),
            Err(CoreError::OutOfRange { len: 0, .. })
        ));
    }

    #[test]
    fn test_topping_index_by_id() {
        let state = OrderState::from_catalog(&reference_catalog());
        let bread = state.bread(0).unwrap();
        assert_eq!(bread.topping_index(4), Some(3));
        assert_eq!(bread.topping_index(42), None);
    }

    #[test]
    fn test_snapshot_json_shape() {
        let state = OrderState::from_catalog(&reference_catalog());
        let json = serde_json::to_value(&state).unwrap();

        assert_eq!(json["breads"][0]["basePrice"], 50);
        assert_eq!(json["breads"][0]["size"], "small");
        assert_eq!(json["breads"][0]["totalPrice"], 55);
        assert_eq!(json["breads"][0]["toppings"][1]["name"], "Onion");
        assert_eq!(json["breads"][0]["toppings"][1]["selected"], false);
    }
}
