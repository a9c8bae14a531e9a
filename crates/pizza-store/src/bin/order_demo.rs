//! # Order Demo
//!
//! Drives an [`OrderStore`] from the command line, standing in for the
//! presentation layer.
//!
//! ## Usage
//! ```bash
//! # Onion on the first bread, then make it Large
//! cargo run -p pizza-store --bin order_demo -- "toggle 0 1" "size 0 large"
//!
//! # Use a specific config file
//! cargo run -p pizza-store --bin order_demo -- --config ./order.toml "size 2 medium"
//!
//! # Write the default config to a file and exit
//! cargo run -p pizza-store --bin order_demo -- --init-config ./order.toml
//! ```
//!
//! Every published snapshot is logged; the final snapshot is printed to
//! stdout as JSON.

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use pizza_store::{init_tracing, store_from_config, OrderCommand, OrderConfig};
use tracing::{error, info};

fn main() -> ExitCode {
    init_tracing();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut config_path: Option<PathBuf> = None;
    let mut init_config: Option<PathBuf> = None;
    let mut commands: Vec<OrderCommand> = Vec::new();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                if i + 1 < args.len() {
                    config_path = Some(PathBuf::from(&args[i + 1]));
                    i += 1;
                }
            }
            "--init-config" => {
                if i + 1 < args.len() {
                    init_config = Some(PathBuf::from(&args[i + 1]));
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Pizza Order Demo");
                println!();
                println!("Usage: order_demo [OPTIONS] [COMMAND]...");
                println!();
                println!("Commands:");
                println!("  \"size <bread> <small|medium|large>\"   Resize a bread");
                println!("  \"toggle <bread> <topping>\"            Toggle a topping");
                println!();
                println!("Options:");
                println!("  -c, --config <PATH>       Config file (default: platform config dir)");
                println!("      --init-config <PATH>  Write the default config and exit");
                println!("  -h, --help                Show this help message");
                return Ok(());
            }
            other => commands.push(other.parse()?),
        }
        i += 1;
    }

    if let Some(path) = init_config {
        OrderConfig::default().save(Some(path))?;
        return Ok(());
    }

    let config = OrderConfig::load(config_path)?;
    let store = store_from_config(&config)?;

    let price_config = config.clone();
    let _subscription = store.subscribe(move |snapshot| {
        let totals: Vec<String> = snapshot
            .breads()
            .iter()
            .map(|b| price_config.format_price(b.total_price()))
            .collect();
        info!(totals = ?totals, "Snapshot");
    });

    for command in commands {
        store.apply(command)?;
    }

    let state = store.current_state();
    println!("{}", serde_json::to_string_pretty(&*state)?);

    Ok(())
}
