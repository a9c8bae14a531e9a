//! # pizza-store: Observable Order State
//!
//! Holds the one mutable order behind the pizza ordering screen and hands
//! out immutable snapshots of it.
//!
//! ## Module Organization
//! ```text
//! pizza_store/
//! ├── lib.rs          ◄─── You are here (exports, store setup)
//! ├── store.rs        ◄─── OrderStore, Subscription
//! ├── command.rs      ◄─── OrderCommand (UI intents as values)
//! ├── config.rs       ◄─── OrderConfig (TOML + env)
//! ├── error.rs        ◄─── StoreError
//! └── bin/
//!     └── order_demo.rs ◄─ Scripted run printing the final snapshot
//! ```
//!
//! ## Example
//! ```rust
//! use pizza_core::{reference_catalog, SizeOption};
//! use pizza_store::OrderStore;
//!
//! let store = OrderStore::new(&reference_catalog());
//! let _sub = store.subscribe(|snapshot| {
//!     let price = snapshot.bread(0).unwrap().total_price();
//!     println!("price label: {}", price);
//! });
//!
//! store.toggle_topping(0, 1).unwrap();
//! store.set_size(0, SizeOption::Large).unwrap();
//! assert_eq!(store.current_state().bread(0).unwrap().total_price().units(), 69);
//! ```

pub mod command;
pub mod config;
pub mod error;
pub mod store;

use tracing::Subscriber;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

pub use command::OrderCommand;
pub use config::OrderConfig;
pub use error::{StoreError, StoreResult};
pub use store::{OrderStore, Subscription};

/// Builds a store seeded with the configured (validated) catalog.
pub fn store_from_config(config: &OrderConfig) -> StoreResult<OrderStore> {
    let catalog = config.catalog()?;
    Ok(OrderStore::new(&catalog))
}

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info,pizza_store=debug,pizza_core=debug";

/// Initializes the tracing subscriber for binaries.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=pizza_store=trace` - Show trace for the store only
/// - Default: [`DEFAULT_LOG_FILTER`]
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    log_subscriber(filter).init();
}

fn log_subscriber(filter: EnvFilter) -> impl Subscriber + Send + Sync + 'static {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish()
}
