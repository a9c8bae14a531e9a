//! # Store Error Types
//!
//! ## Error Categories
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ┌─────────────────────┐            ┌─────────────────────────────┐    │
//! │  │   Order operations  │            │       Configuration         │    │
//! │  │                     │            │                             │    │
//! │  │  Core(OutOfRange)   │            │  InvalidConfig              │    │
//! │  │  Core(Validation)   │            │  ConfigLoadFailed           │    │
//! │  │                     │            │  ConfigSaveFailed           │    │
//! │  └─────────────────────┘            └─────────────────────────────┘    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Mutations on [`OrderStore`](crate::OrderStore) return
//! [`CoreResult`](pizza_core::CoreResult) directly; `StoreError` only shows up
//! where configuration is involved.

use pizza_core::{CoreError, ValidationError};
use thiserror::Error;

/// Result type alias for store setup operations.
pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Order operation or catalog validation failure.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Config parsed but holds unusable values.
    #[error("Invalid order configuration: {0}")]
    InvalidConfig(String),

    /// Config (or catalog) file could not be read or parsed.
    #[error("Failed to load config: {0}")]
    ConfigLoadFailed(String),

    /// Config file could not be written.
    #[error("Failed to save config: {0}")]
    ConfigSaveFailed(String),
}

impl From<ValidationError> for StoreError {
    fn from(err: ValidationError) -> Self {
        StoreError::Core(CoreError::Validation(err))
    }
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::de::Error> for StoreError {
    fn from(err: toml::de::Error) -> Self {
        StoreError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::ser::Error> for StoreError {
    fn from(err: toml::ser::Error) -> Self {
        StoreError::ConfigSaveFailed(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_error_is_transparent() {
        let err: StoreError = CoreError::bread_out_of_range(99, 5).into();
        assert_eq!(err.to_string(), "bread index 99 out of range (len 5)");
    }

    #[test]
    fn test_validation_wraps_through_core() {
        let err: StoreError = ValidationError::Required {
            field: "name".to_string(),
        }
        .into();
        assert!(matches!(err, StoreError::Core(CoreError::Validation(_))));
    }
}
