//! # Domain Types
//!
//! Core domain types used throughout gstbill.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │    Customer     │   │ SellerProfile   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  brand, model   │   │  name, address  │   │  name, address  │       │
//! │  │  storage, color │   │  phone          │   │  phone, email   │       │
//! │  │  price, hsn     │   │  email?, gstin? │   │  gstin          │       │
//! │  │  stock          │   └─────────────────┘   └─────────────────┘       │
//! │  └────────┬────────┘                                                    │
//! │           │ key()                                                       │
//! │  ┌────────▼────────┐   ┌─────────────────┐                              │
//! │  │   ProductKey    │   │    TaxRate      │                              │
//! │  │  brand, model,  │   │  bps (u32)      │                              │
//! │  │  storage, color │   │  1800 = 18%     │                              │
//! │  └─────────────────┘   └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 1800 bps = 18% (standard GST slab for handsets)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Creates a tax rate from a percentage (for convenience).
    pub fn from_percentage(pct: f64) -> Self {
        TaxRate((pct * 100.0).round() as u32)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }

    /// Checks if tax rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::zero()
    }
}

impl std::ops::Add for TaxRate {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        TaxRate(self.0 + other.0)
    }
}

// =============================================================================
// Product
// =============================================================================

/// Composite identity of a catalog entry.
///
/// Two cart lines with equal keys describe the same handset and are merged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProductKey {
    pub brand: String,
    pub model: String,
    pub storage: String,
    pub color: String,
}

impl ProductKey {
    pub fn new(
        brand: impl Into<String>,
        model: impl Into<String>,
        storage: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        ProductKey {
            brand: brand.into(),
            model: model.into(),
            storage: storage.into(),
            color: color.into(),
        }
    }
}

/// `Samsung Galaxy S23 (128GB, Green)`, the same label line items print.
impl fmt::Display for ProductKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({}, {})",
            self.brand, self.model, self.storage, self.color
        )
    }
}

/// A handset as the catalog lists it.
///
/// Consumed by the core, owned by the catalog collaborator. The core never
/// mutates `stock`; it only reads the price and classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    pub brand: String,
    pub model: String,

    /// Storage variant, e.g. `256GB`.
    pub storage: String,

    pub color: String,

    /// Unit price before tax.
    pub price: Money,

    /// HSN classification code; may be empty.
    pub hsn_code: String,

    /// Marketing blurb shown in search results.
    pub description: String,

    /// Units available for sale.
    pub stock: i64,
}

impl Product {
    /// Returns the composite key of this product.
    pub fn key(&self) -> ProductKey {
        ProductKey::new(&self.brand, &self.model, &self.storage, &self.color)
    }

    /// True when this product is the variant `key` names. Allocation-free
    /// alternative to `self.key() == *key`.
    pub fn matches(&self, key: &ProductKey) -> bool {
        self.brand == key.brand
            && self.model == key.model
            && self.storage == key.storage
            && self.color == key.color
    }

    /// Checks whether `quantity` units can be sold from current stock.
    ///
    /// A quantity below 1 is never sellable.
    pub fn can_sell(&self, quantity: i64) -> bool {
        quantity >= 1 && self.stock >= quantity
    }
}

// =============================================================================
// Customer
// =============================================================================

/// The buyer named on an invoice.
///
/// Fields are taken as-is: validation happens in
/// [`crate::validation::validate_customer`] before the invoice is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Customer {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: Option<String>,
    pub gstin: Option<String>,
}

impl Customer {
    /// Creates a customer without email or GSTIN.
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Customer {
            name: name.into(),
            address: address.into(),
            phone: phone.into(),
            email: None,
            gstin: None,
        }
    }

    /// Sets the email; blank input leaves it unset.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = non_blank(email.into());
        self
    }

    /// Sets the GSTIN; blank input leaves it unset.
    pub fn with_gstin(mut self, gstin: impl Into<String>) -> Self {
        self.gstin = non_blank(gstin.into());
        self
    }
}

fn non_blank(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

// =============================================================================
// Seller
// =============================================================================

/// Identity of the shop issuing invoices.
///
/// `SellerProfile::default()` is the shop's fixed identity. Deployments may
/// override individual fields through configuration, but an invoice never
/// changes its seller after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SellerProfile {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub gstin: String,
}

impl SellerProfile {
    pub const DEFAULT_NAME: &'static str = "MobileTech Retail Solutions";
    pub const DEFAULT_ADDRESS: &'static str =
        "123, Tech Park, Main Street, Bangalore - 560001, Karnataka";
    pub const DEFAULT_PHONE: &'static str = "9876543210";
    pub const DEFAULT_EMAIL: &'static str = "info@mobiletech.com";
    pub const DEFAULT_GSTIN: &'static str = "29AABCT1332L1ZB";
}

impl Default for SellerProfile {
    fn default() -> Self {
        SellerProfile {
            name: Self::DEFAULT_NAME.to_string(),
            address: Self::DEFAULT_ADDRESS.to_string(),
            phone: Self::DEFAULT_PHONE.to_string(),
            email: Self::DEFAULT_EMAIL.to_string(),
            gstin: Self::DEFAULT_GSTIN.to_string(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn galaxy() -> Product {
        Product {
            brand: "Samsung".to_string(),
            model: "Galaxy S23".to_string(),
            storage: "128GB".to_string(),
            color: "Green".to_string(),
            price: Money::from_rupees(74_999),
            hsn_code: "85171290".to_string(),
            description: "6.1\" FHD+ Dynamic AMOLED".to_string(),
            stock: 3,
        }
    }

    #[test]
    fn test_tax_rate_from_bps() {
        let rate = TaxRate::from_bps(1800);
        assert_eq!(rate.bps(), 1800);
        assert!((rate.percentage() - 18.0).abs() < 0.001);
    }

    #[test]
    fn test_tax_rate_from_percentage() {
        assert_eq!(TaxRate::from_percentage(9.0).bps(), 900);
        assert_eq!(TaxRate::from_bps(900) + TaxRate::from_bps(900), TaxRate::from_bps(1800));
        assert!(TaxRate::default().is_zero());
    }

    #[test]
    fn test_product_key_display() {
        assert_eq!(galaxy().key().to_string(), "Samsung Galaxy S23 (128GB, Green)");
    }

    #[test]
    fn test_product_matches_key() {
        let product = galaxy();
        assert!(product.matches(&product.key()));
        assert!(product.matches(&ProductKey::new("Samsung", "Galaxy S23", "128GB", "Green")));
        assert!(!product.matches(&ProductKey::new("Samsung", "Galaxy S23", "256GB", "Green")));
        assert!(!product.matches(&ProductKey::new("Samsung", "Galaxy S23", "128GB", "Cream")));
    }

    #[test]
    fn test_product_can_sell() {
        let product = galaxy();
        assert!(product.can_sell(1));
        assert!(product.can_sell(3));
        assert!(!product.can_sell(4));
        assert!(!product.can_sell(0));
    }

    #[test]
    fn test_customer_blank_optionals_are_unset() {
        let customer = Customer::new("Asha Rao", "12 MG Road, Bangalore", "9123456780")
            .with_email("  ")
            .with_gstin("29ABCDE1234F1Z5");
        assert_eq!(customer.email, None);
        assert_eq!(customer.gstin.as_deref(), Some("29ABCDE1234F1Z5"));
    }

    #[test]
    fn test_default_seller() {
        let seller = SellerProfile::default();
        assert_eq!(seller.name, "MobileTech Retail Solutions");
        assert_eq!(seller.gstin, "29AABCT1332L1ZB");
    }
}
