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
//! │  ├── CoreError        - Order operation failures                       │
//! │  └── ValidationError  - Catalog validation failures                    │
//! │                                                                         │
//! │  pizza-store errors (separate crate)                                   │
//! │  └── StoreError       - Configuration loading failures                 │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → StoreError                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (index, length, field)
//! 3. Errors are enum variants, never String
//! 4. A bad index is always reported, never clamped

use std::fmt;

use thiserror::Error;

// =============================================================================
// Index Target
// =============================================================================

/// Which collection an index addressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexTarget {
    /// `OrderState::breads`
    Bread,
    /// `BreadOption::toppings`
    Topping,
}

impl fmt::Display for IndexTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexTarget::Bread => write!(f, "bread"),
            IndexTarget::Topping => write!(f, "topping"),
        }
    }
}

// =============================================================================
// Core Error
// =============================================================================

/// Order operation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// An index does not address an existing element.
    ///
    /// ## When This Occurs
    /// - The UI holds a stale pager position after the catalog changed
    /// - A topping index from one bread is used against a shorter list
    ///
    /// The order is left untouched and nothing is published.
    #[error("{target} index {index} out of range (len {len})")]
    OutOfRange {
        target: IndexTarget,
        index: usize,
        len: usize,
    },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// Shorthand for a bread index failure.
    pub fn bread_out_of_range(index: usize, len: usize) -> Self {
        CoreError::OutOfRange {
            target: IndexTarget::Bread,
            index,
            len,
        }
    }

    /// Shorthand for a topping index failure.
    pub fn topping_out_of_range(index: usize, len: usize) -> Self {
        CoreError::OutOfRange {
            target: IndexTarget::Topping,
            index,
            len,
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Catalog validation errors.
///
/// Raised when a catalog comes from outside the program (a config file).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// A price is below zero.
    #[error("{field} must not be negative (got {value})")]
    NegativePrice { field: String, value: i64 },

    /// Duplicate identifier within one list.
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },

    /// The largest total a bread can reach does not fit in `Money`.
    #[error("{field} prices are too large: the Large total with every topping overflows")]
    PriceOverflow { field: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_message() {
        let err = CoreError::bread_out_of_range(99, 5);
        assert_eq!(err.to_string(), "bread index 99 out of range (len 5)");

        let err = CoreError::topping_out_of_range(7, 5);
        assert_eq!(err.to_string(), "topping index 7 out of range (len 5)");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::NegativePrice {
            field: "breads[0].base_price".to_string(),
            value: -1,
        };
        assert_eq!(
            err.to_string(),
            "breads[0].base_price must not be negative (got -1)"
        );

        let err = ValidationError::Duplicate {
            field: "topping id".to_string(),
            value: "3".to_string(),
        };
        assert_eq!(err.to_string(), "topping id '3' already exists");

        let err = ValidationError::PriceOverflow {
            field: "breads[1]".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "breads[1] prices are too large: the Large total with every topping overflows"
        );
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "name".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
