//! # pizza-core: Pure Order Logic
//!
//! The order state model behind the pizza ordering screen: bread sizes,
//! topping selection and the price derived from them. No I/O, no shared
//! state; every value is immutable once built.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Pizza Order Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │            Presentation layer (external, not in this repo)      │   │
//! │  │      bread pager ──► size selector ──► topping chips ──► price  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ intents ▼   ▲ snapshots               │
//! │  ┌─────────────────────────────┴───────────────────────────────────┐   │
//! │  │                 pizza-store (OrderStore)                        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ pizza-core (THIS CRATE) ★                       │   │
//! │  │   types: SizeOption, Topping, BreadOption, OrderState           │   │
//! │  │   money: Money        catalog: templates, reference menu        │   │
//! │  │   validation: catalog checks                                    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example Usage
//!
//! ```rust
//! use pizza_core::{reference_catalog, OrderState, SizeOption};
//!
//! let order = OrderState::from_catalog(&reference_catalog());
//! assert_eq!(order.bread(0).unwrap().total_price().units(), 55);
//!
//! // Onion (4) on the first bread, then Large (15)
//! let order = order.with_topping_toggled(0, 1).unwrap();
//! let order = order.with_size(0, SizeOption::Large).unwrap();
//! assert_eq!(order.bread(0).unwrap().total_price().units(), 69);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::{reference_catalog, BreadTemplate, ToppingTemplate};
pub use error::{CoreError, CoreResult, IndexTarget, ValidationError};
pub use money::Money;
pub use types::*;
