//! # gstbill-catalog: Handset Catalog and Checkout
//!
//! The stateful side of gstbill: the product catalog with live stock,
//! checkout, and runtime configuration.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       gstbill-catalog                                   │
//! │                                                                         │
//! │  ┌──────────────────┐   ┌──────────────────┐   ┌──────────────────┐   │
//! │  │   ShopConfig     │──►│ InMemoryCatalog  │◄──│    checkout()    │   │
//! │  │  env overrides   │   │  Mutex<Vec<..>>  │   │ invoice + stock  │   │
//! │  └──────────────────┘   └────────┬─────────┘   └────────┬─────────┘   │
//! │                                  │ impl ProductCatalog   │             │
//! │                                  ▼                       ▼             │
//! │                     ┌─────────────────────────────────────────┐        │
//! │                     │        gstbill-core (pure logic)        │        │
//! │                     └─────────────────────────────────────────┘        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//! ```rust
//! use gstbill_catalog::{checkout, InMemoryCatalog};
//! use gstbill_core::{Cart, Customer, ProductCatalog, SellerProfile};
//!
//! let catalog = InMemoryCatalog::seeded().unwrap();
//! let phone = catalog.search("iphone 15").remove(0);
//!
//! let mut cart = Cart::new();
//! cart.add(&phone, 1).unwrap();
//!
//! let customer = Customer::new("Asha Rao", "12 MG Road, Bangalore", "9123456780");
//! let done = checkout(&cart, customer, SellerProfile::default(), &catalog).unwrap();
//! assert!(done.is_fully_stocked());
//! ```

pub mod checkout;
pub mod config;
pub mod error;
pub mod store;

pub use checkout::{checkout, Checkout, StockShortfall};
pub use config::{ShopConfig, DEFAULT_LOG_FILTER};
pub use error::{CatalogError, CatalogResult};
pub use store::InMemoryCatalog;
