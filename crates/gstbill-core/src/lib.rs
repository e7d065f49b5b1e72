//! # gstbill-core: Pure Invoice Logic for gstbill
//!
//! This crate turns a cart of handsets into a GST tax invoice. It contains
//! the business rules only, with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        gstbill Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              Billing UI / PDF renderer (external)               │   │
//! │  │    Search ──► Cart ──► Customer form ──► Invoice view / PDF     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ InvoiceSnapshot                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ gstbill-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────────────────┐  │   │
//! │  │   │  money   │ │   tax    │ │ invoice  │ │ words            │  │   │
//! │  │   │  Money   │ │  split   │ │ Invoice  │ │ invoice_number   │  │   │
//! │  │   │ TaxRate  │ │ SGST/CGST│ │ LineItem │ │ validation, cart │  │   │
//! │  │   └──────────┘ └──────────┘ └──────────┘ └──────────────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOGGING • NO SHARED STATE                         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ ProductCatalog trait                   │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               gstbill-catalog (stock, checkout)                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money in integer paise
//! - [`types`] - Product, Customer, SellerProfile, TaxRate
//! - [`tax`] - SGST/CGST split
//! - [`line_item`] - Priced and taxed invoice lines
//! - [`invoice`] - Invoice aggregate and its snapshot
//! - [`words`] - Amount in words (crore / lakh / thousand)
//! - [`invoice_number`] - `INV-<date>-<random>` numbers
//! - [`validation`] - Customer form rules, GSTIN state codes
//! - [`cart`] - Cart with duplicate merging
//! - [`catalog`] - Interface to the product catalog
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use gstbill_core::{Customer, Invoice, InvoiceLineItem, Money};
//!
//! let mut invoice = Invoice::new(Customer::new(
//!     "Asha Rao",
//!     "12 MG Road, Bangalore",
//!     "9123456780",
//! ));
//! for _ in 0..2 {
//!     let line = InvoiceLineItem::from_parts(
//!         "Apple", "iPhone 15", "128GB", "Blue", Money::from_rupees(1000), "", 2,
//!     ).unwrap();
//!     invoice.add_item(line);
//! }
//!
//! assert_eq!(invoice.subtotal(), Money::from_rupees(4000));
//! assert_eq!(invoice.total_sgst(), Money::from_rupees(360));
//! assert_eq!(invoice.grand_total(), Money::from_rupees(4720));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod invoice;
pub mod invoice_number;
pub mod line_item;
pub mod money;
pub mod tax;
pub mod types;
pub mod validation;
pub mod words;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartLine};
pub use catalog::ProductCatalog;
pub use error::{CoreError, CoreResult, ValidationError};
pub use invoice::{Invoice, InvoiceSnapshot, InvoiceTotals};
pub use line_item::{InvoiceLineItem, LineItemSnapshot};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// HSN code printed when a product has none: mobile handsets (8517 12 90).
pub const DEFAULT_HSN_CODE: &str = "85171290";

/// Maximum quantity of a single handset on one line.
///
/// ## Business Reason
/// Catches typos at the counter (1000 for 10) and keeps
/// `unit_price × quantity` plus tax well inside `i64` paise.
pub const MAX_ITEM_QUANTITY: i64 = 999;

/// Maximum unit price: ₹1,00,00,000 (one crore).
pub const MAX_UNIT_PRICE: Money = Money::from_rupees(10_000_000);
