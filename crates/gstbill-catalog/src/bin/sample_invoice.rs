//! # Sample Invoice
//!
//! Searches the catalog, bills the matches to a walk-in customer and prints
//! the invoice snapshot as JSON.
//!
//! ## Usage
//! ```bash
//! # Bill one of each iPhone (default query)
//! cargo run -p gstbill-catalog --bin sample-invoice
//!
//! # Bill two of each Galaxy phone
//! cargo run -p gstbill-catalog --bin sample-invoice -- --query galaxy --qty 2
//!
//! # Use a different catalog and seller
//! GSTBILL_CATALOG_PATH=./phones.json GSTBILL_SELLER_NAME="Deccan Mobiles" \
//!     cargo run -p gstbill-catalog --bin sample-invoice
//! ```

use std::env;

use gstbill_catalog::{checkout, ShopConfig, DEFAULT_LOG_FILTER};
use gstbill_core::validation::validate_search_query;
use gstbill_core::{Cart, Customer, ProductCatalog};
use tracing::info;
use tracing_subscriber::EnvFilter;

const MAX_LINES: usize = 3;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut query = String::from("iphone");
    let mut quantity: i64 = 1;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--query" | "-q" => {
                if i + 1 < args.len() {
                    query = args[i + 1].clone();
                    i += 1;
                }
            }
            "--qty" | "-n" => {
                if i + 1 < args.len() {
                    quantity = args[i + 1].parse().unwrap_or(1);
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("gstbill Sample Invoice");
                println!();
                println!("Usage: sample-invoice [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -q, --query <TEXT>  Catalog search (default: iphone)");
                println!("  -n, --qty <N>       Units per matched handset (default: 1)");
                println!("  -h, --help          Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    let config = ShopConfig::from_env()?;
    init_tracing(config.log_filter.as_deref());

    let catalog = config.load_catalog()?;
    let query = validate_search_query(&query)?;

    let mut cart = Cart::new();
    for product in catalog.search(&query).iter().take(MAX_LINES) {
        cart.add(product, quantity)?;
    }
    info!(query = %query, lines = cart.len(), "Cart filled");

    let customer = Customer::new("Walk-in Customer", "Counter Sale, Bangalore", "9000000000");
    let done = checkout(&cart, customer, config.seller.clone(), &catalog)?;

    for shortfall in &done.stock_shortfalls {
        eprintln!(
            "⚠️  Stock not updated: {} x{}",
            shortfall.key, shortfall.requested
        );
    }

    println!("{}", done.invoice.snapshot().to_json()?);
    Ok(())
}

/// Installs the fmt subscriber. `GSTBILL_LOG` wins over `RUST_LOG`.
fn init_tracing(directive: Option<&str>) {
    let filter = match directive {
        Some(directive) => EnvFilter::new(directive),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
