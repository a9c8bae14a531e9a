//! # Order Configuration
//!
//! Where the menu and display settings come from.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     PIZZA_CURRENCY_SYMBOL=€                                            │
//! │     PIZZA_CATALOG=/path/to/menu.toml                                   │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/pizza-order/order.toml (Linux)                           │
//! │     ~/Library/Application Support/com.pizza.order/order.toml (macOS)   │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     "$", reference catalog                                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # order.toml
//! [display]
//! currency_symbol = "$"
//!
//! # Omit [[catalog.breads]] entirely to use the reference menu.
//! [[catalog.breads]]
//! id = 1
//! base_price = 50
//!
//! [[catalog.breads.toppings]]
//! id = 1
//! name = "Basil"
//! unit_price = 2
//! ```
//!
//! A file named by `PIZZA_CATALOG` holds only the `[[breads]]` tables.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use pizza_core::validation::validate_catalog;
use pizza_core::{reference_catalog, BreadTemplate, Money};

use crate::error::{StoreError, StoreResult};

// =============================================================================
// Display Settings
// =============================================================================

/// How prices are rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Prefix for price labels.
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

impl Default for DisplaySettings {
    fn default() -> Self {
        DisplaySettings {
            currency_symbol: default_currency_symbol(),
        }
    }
}

// =============================================================================
// Catalog Settings
// =============================================================================

/// Menu override. `None` means the reference catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breads: Option<Vec<BreadTemplate>>,
}

/// Shape of a standalone catalog file.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    breads: Vec<BreadTemplate>,
}

// =============================================================================
// Order Config
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderConfig {
    #[serde(default)]
    pub display: DisplaySettings,

    #[serde(default)]
    pub catalog: CatalogSettings,
}

impl OrderConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (order.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> StoreResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading order config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = Self::from_toml_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load order config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Parses a config document without touching the environment.
    pub fn from_toml_str(contents: &str) -> StoreResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Saves configuration to file.
    pub fn save(&self, config_path: Option<PathBuf>) -> StoreResult<()> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or_else(|| StoreError::ConfigSaveFailed("No config path available".into()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| StoreError::ConfigSaveFailed(e.to_string()))?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents).map_err(|e| StoreError::ConfigSaveFailed(e.to_string()))?;

        info!(?path, "Order config saved");
        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> StoreResult<()> {
        if self.display.currency_symbol.trim().is_empty() {
            return Err(StoreError::InvalidConfig(
                "currency_symbol must not be empty".into(),
            ));
        }

        if let Some(breads) = &self.catalog.breads {
            validate_catalog(breads)?;
        }

        Ok(())
    }

    /// Applies `PIZZA_*` overrides, looking each key up through `lookup`.
    ///
    /// `PIZZA_CATALOG` names a catalog file which is read immediately.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> StoreResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(symbol) = lookup("PIZZA_CURRENCY_SYMBOL") {
            debug!(symbol = %symbol, "Overriding currency symbol from environment");
            self.display.currency_symbol = symbol;
        }

        if let Some(path) = lookup("PIZZA_CATALOG") {
            debug!(path = %path, "Loading catalog named by environment");
            self.catalog.breads = Some(Self::read_catalog_file(Path::new(&path))?);
        }

        Ok(())
    }

    fn read_catalog_file(path: &Path) -> StoreResult<Vec<BreadTemplate>> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            StoreError::ConfigLoadFailed(format!("catalog {}: {}", path.display(), e))
        })?;
        let file: CatalogFile = toml::from_str(&contents)?;
        Ok(file.breads)
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "pizza", "order")
            .map(|dirs| dirs.config_dir().join("order.toml"))
    }

    // =========================================================================
    // Convenience Methods
    // =========================================================================

    /// The validated catalog to seed an order with.
    pub fn catalog(&self) -> StoreResult<Vec<BreadTemplate>> {
        match &self.catalog.breads {
            Some(breads) => {
                validate_catalog(breads)?;
                Ok(breads.clone())
            }
            None => Ok(reference_catalog()),
        }
    }

    /// Formats a price with the configured currency symbol.
    pub fn format_price(&self, price: Money) -> String {
        price.format_with(&self.display.currency_symbol)
    }
}
