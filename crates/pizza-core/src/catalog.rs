//! # Catalog
//!
//! The menu an order starts from: breads with base prices and the toppings
//! each bread offers. Templates carry no selection state; see
//! [`OrderState::from_catalog`](crate::types::OrderState::from_catalog).
//!
//! ## Reference Catalog
//! ```text
//! Breads (id: base price)          Toppings (id: name, price)
//! ───────────────────────          ──────────────────────────
//! 1: 50   2: 55   3: 60            1: Basil 2     2: Onion 4
//! 4: 65   5: 70                    3: Broccoli 6  4: Mushroom 8
//!                                  5: Sausage 10
//! ```

use serde::{Deserialize, Serialize};

use crate::money::Money;

/// Catalog entry for a topping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToppingTemplate {
    pub id: u32,
    pub name: String,
    pub unit_price: Money,
}

/// Catalog entry for a bread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreadTemplate {
    pub id: u32,
    pub base_price: Money,
    #[serde(default)]
    pub toppings: Vec<ToppingTemplate>,
}

/// Base prices of the five reference breads, in pager order.
pub const REFERENCE_BASE_PRICES: [i64; 5] = [50, 55, 60, 65, 70];

/// Toppings every reference bread offers, in chip order.
pub const REFERENCE_TOPPINGS: [(&str, i64); 5] = [
    ("Basil", 2),
    ("Onion", 4),
    ("Broccoli", 6),
    ("Mushroom", 8),
    ("Sausage", 10),
];

/// The reference topping list. Ids start at 1.
pub fn reference_toppings() -> Vec<ToppingTemplate> {
    REFERENCE_TOPPINGS
        .iter()
        .zip(1..)
        .map(|(&(name, price), id)| ToppingTemplate {
            id,
            name: name.to_string(),
            unit_price: Money::from_units(price),
        })
        .collect()
}

/// The reference catalog: five breads, each with the reference toppings.
pub fn reference_catalog() -> Vec<BreadTemplate> {
    REFERENCE_BASE_PRICES
        .iter()
        .zip(1..)
        .map(|(&base, id)| BreadTemplate {
            id,
            base_price: Money::from_units(base),
            toppings: reference_toppings(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_catalog_shape() {
        let catalog = reference_catalog();
        assert_eq!(catalog.len(), 5);

        let ids: Vec<u32> = catalog.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);

        let prices: Vec<i64> = catalog.iter().map(|b| b.base_price.units()).collect();
        assert_eq!(prices, REFERENCE_BASE_PRICES.to_vec());

        for bread in &catalog {
            assert_eq!(bread.toppings.len(), 5);
            assert_eq!(bread.toppings[1].name, "Onion");
            assert_eq!(bread.toppings[1].unit_price.units(), 4);
            assert_eq!(bread.toppings[4].id, 5);
        }
    }
}
