//! # Checkout
//!
//! Turns a cart into an issued invoice and takes the sold units out of stock.
//!
//! ## Checkout Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  1. validate_customer()   ── errors? ──► CatalogError::InvalidCustomer  │
//! │           │                                                             │
//! │  2. cart.build_invoice()  ── empty?  ──► CoreError::EmptyCart           │
//! │           │                                                             │
//! │  3. decrement_stock() per line, in cart order                          │
//! │           │  false ──► StockShortfall recorded, warning logged          │
//! │           ▼                                                             │
//! │  Checkout { invoice, stock_shortfalls }                                 │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The invoice is issued before stock moves. A shortfall on one line does not
//! undo decrements already applied to earlier lines; the caller decides what
//! to do with a partially stocked sale.

use gstbill_core::validation::validate_customer;
use gstbill_core::{Cart, Customer, Invoice, ProductCatalog, ProductKey, SellerProfile};
use tracing::{info, warn};

use crate::error::{CatalogError, CatalogResult};

/// A cart line whose units could not be taken out of stock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockShortfall {
    pub key: ProductKey,
    pub requested: i64,
}

/// Result of a completed checkout.
#[derive(Debug, Clone)]
pub struct Checkout {
    pub invoice: Invoice,
    pub stock_shortfalls: Vec<StockShortfall>,
}

impl Checkout {
    /// True when every line was taken out of stock.
    pub fn is_fully_stocked(&self) -> bool {
        self.stock_shortfalls.is_empty()
    }
}

/// Issues an invoice for `cart` and decrements catalog stock.
///
/// ## Errors
/// - `CatalogError::InvalidCustomer` with every form problem
/// - `CatalogError::Core` for an empty cart or an unpriceable line
///
/// Stock shortfalls are reported in [`Checkout::stock_shortfalls`], not as
/// errors.
pub fn checkout<C>(
    cart: &Cart,
    customer: Customer,
    seller: SellerProfile,
    catalog: &C,
) -> CatalogResult<Checkout>
where
    C: ProductCatalog + ?Sized,
{
    let problems = validate_customer(&customer);
    if !problems.is_empty() {
        return Err(CatalogError::InvalidCustomer(problems));
    }

    let invoice = cart.build_invoice(customer, seller)?;

    let mut stock_shortfalls = Vec::new();
    for line in cart.lines() {
        let key = line.key();
        if !catalog.decrement_stock(&key, line.quantity) {
            warn!(
                invoice = %invoice.invoice_number(),
                product = %key,
                requested = line.quantity,
                "Stock not updated for invoiced line"
            );
            stock_shortfalls.push(StockShortfall {
                key,
                requested: line.quantity,
            });
        }
    }

    info!(
        invoice = %invoice.invoice_number(),
        lines = invoice.items().len(),
        grand_total = %invoice.grand_total(),
        shortfalls = stock_shortfalls.len(),
        "Invoice issued"
    );

    Ok(Checkout {
        invoice,
        stock_shortfalls,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryCatalog;
    use gstbill_core::{CoreError, Money};

    fn customer() -> Customer {
        Customer::new("Asha Rao", "12 MG Road, Bangalore", "9123456780")
    }

    fn pick(catalog: &InMemoryCatalog, brand: &str, model: &str) -> gstbill_core::Product {
        catalog
            .list_by_brand(brand)
            .into_iter()
            .find(|p| p.model == model)
            .unwrap()
    }

    #[test]
    fn test_checkout_issues_invoice_and_moves_stock() {
        let catalog = InMemoryCatalog::seeded().unwrap();
        let phone = pick(&catalog, "Redmi", "A2+");

        let mut cart = Cart::new();
        cart.add(&phone, 3).unwrap();

        let done = checkout(&cart, customer(), SellerProfile::default(), &catalog).unwrap();

        assert!(done.is_fully_stocked());
        assert_eq!(catalog.stock_of(&phone.key()), Some(37));
        assert_eq!(done.invoice.subtotal(), Money::from_rupees(26_997));
        assert_eq!(done.invoice.items().len(), 1);
    }

    #[test]
    fn test_shortfall_does_not_roll_back_earlier_lines() {
        let catalog = InMemoryCatalog::seeded().unwrap();
        let cheap = pick(&catalog, "Realme", "C53");
        let fold = pick(&catalog, "Samsung", "Galaxy Z Fold 5");

        let mut cart = Cart::new();
        cart.add(&cheap, 2).unwrap();
        cart.add(&fold, 9).unwrap();

        let done = checkout(&cart, customer(), SellerProfile::default(), &catalog).unwrap();

        assert!(!done.is_fully_stocked());
        assert_eq!(
            done.stock_shortfalls,
            vec![StockShortfall {
                key: fold.key(),
                requested: 9
            }]
        );
        assert_eq!(catalog.stock_of(&cheap.key()), Some(33));
        assert_eq!(catalog.stock_of(&fold.key()), Some(8));
        assert_eq!(done.invoice.items().len(), 2);
    }

    #[test]
    fn test_invalid_customer_touches_nothing() {
        let catalog = InMemoryCatalog::seeded().unwrap();
        let phone = pick(&catalog, "Oppo", "F23");
        let mut cart = Cart::new();
        cart.add(&phone, 1).unwrap();

        let bad = Customer::new("", "12 MG Road", "12345").with_email("nobody");
        let err = checkout(&cart, bad, SellerProfile::default(), &catalog).unwrap_err();

        match err {
            CatalogError::InvalidCustomer(problems) => assert_eq!(problems.len(), 3),
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(catalog.stock_of(&phone.key()), Some(25));
    }

    #[test]
    fn test_empty_cart() {
        let catalog = InMemoryCatalog::seeded().unwrap();
        let err = checkout(&Cart::new(), customer(), SellerProfile::default(), &catalog)
            .unwrap_err();
        assert!(matches!(err, CatalogError::Core(CoreError::EmptyCart)));
    }

    #[test]
    fn test_works_through_trait_object() {
        let catalog = InMemoryCatalog::seeded().unwrap();
        let phone = pick(&catalog, "Vivo", "Y36");
        let mut cart = Cart::new();
        cart.add(&phone, 1).unwrap();

        let dyn_catalog: &dyn ProductCatalog = &catalog;
        let done = checkout(&cart, customer(), SellerProfile::default(), dyn_catalog).unwrap();
        assert!(done.is_fully_stocked());
        assert_eq!(catalog.stock_of(&phone.key()), Some(34));
    }
}
