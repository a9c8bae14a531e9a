//! # Validation Module
//!
//! Checks a catalog before an order is built from it.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Where Catalogs Come From                           │
//! │                                                                         │
//! │  reference_catalog()  ──► trusted, used as-is                           │
//! │                                                                         │
//! │  order.toml [catalog] ──► THIS MODULE ──► OrderState::from_catalog      │
//! │                           • prices ≥ 0                                  │
//! │                           • largest possible total fits in Money        │
//! │                           • topping names non-empty                     │
//! │                           • topping ids unique per bread                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Bread ids are not required to be unique; breads are addressed by
//! position.
//!
//! ## Usage
//! ```rust
//! use pizza_core::catalog::reference_catalog;
//! use pizza_core::validation::validate_catalog;
//!
//! validate_catalog(&reference_catalog()).unwrap();
//! ```

use std::collections::HashSet;

use crate::catalog::{BreadTemplate, ToppingTemplate};
use crate::error::ValidationError;
use crate::money::Money;
use crate::types::SizeOption;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates every bread in a catalog.
pub fn validate_catalog(catalog: &[BreadTemplate]) -> ValidationResult<()> {
    for (index, bread) in catalog.iter().enumerate() {
        validate_bread(index, bread)?;
    }
    Ok(())
}

/// Validates one bread and its topping list.
///
/// `index` only feeds the field path in error messages.
pub fn validate_bread(index: usize, bread: &BreadTemplate) -> ValidationResult<()> {
    validate_price(&format!("breads[{}].base_price", index), bread.base_price)?;

    let mut seen = HashSet::with_capacity(bread.toppings.len());
    for (t, topping) in bread.toppings.iter().enumerate() {
        validate_topping(&format!("breads[{}].toppings[{}]", index, t), topping)?;

        if !seen.insert(topping.id) {
            return Err(ValidationError::Duplicate {
                field: format!("breads[{}] topping id", index),
                value: topping.id.to_string(),
            });
        }
    }

    // Large has the biggest surcharge; every other total is smaller.
    let worst_case = bread
        .base_price
        .checked_add(SizeOption::Large.surcharge())
        .and_then(|start| {
            bread
                .toppings
                .iter()
                .try_fold(start, |total, t| total.checked_add(t.unit_price))
        });
    if worst_case.is_none() {
        return Err(ValidationError::PriceOverflow {
            field: format!("breads[{}]", index),
        });
    }

    Ok(())
}

fn validate_topping(path: &str, topping: &ToppingTemplate) -> ValidationResult<()> {
    if topping.name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: format!("{}.name", path),
        });
    }
    validate_price(&format!("{}.unit_price", path), topping.unit_price)
}

fn validate_price(field: &str, price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::NegativePrice {
            field: field.to_string(),
            value: price.units(),
        });
    }
    Ok(())
}
