//! Address Book - Main entry point
//!
//! Builds an address book from the environment configuration and prints
//! every contact, one page at a time.

use address_book::{AddressBook, Config};
use anyhow::Result;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can drive the filter
    let config = Config::from_env();

    let level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // Logs go to stderr, stdout carries the listing
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let address_book = AddressBook::from_config(&config)?;
    info!(
        "Listing {} contacts, {} per page",
        address_book.len(),
        address_book.page_size()
    );

    for page in &address_book {
        for contact in page {
            println!("{}", contact);
        }
        println!("===");
    }

    Ok(())
}
