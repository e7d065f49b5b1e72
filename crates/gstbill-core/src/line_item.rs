//! # Invoice Line Items
//!
//! One handset selection with its quantity, priced and taxed once at
//! construction.
//!
//! ## Line Math
//! ```text
//! unit_price × quantity = amount
//!                           │
//!                           ▼  tax::split(amount, SGST 9% + CGST 9%)
//!                    sgst, cgst
//!                           │
//!                           ▼
//! line_total = amount + sgst + cgst
//! ```
//!
//! A line item is immutable: every figure is computed in the constructor and
//! only read afterwards.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreResult;
use crate::money::Money;
use crate::tax::{self, CGST_RATE, SGST_RATE};
use crate::types::{Product, ProductKey};
use crate::validation::{validate_price, validate_quantity};
use crate::DEFAULT_HSN_CODE;

/// A priced, taxed line on an invoice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceLineItem {
    key: ProductKey,
    unit_price: Money,
    quantity: i64,
    hsn_code: String,
    amount: Money,
    sgst: Money,
    cgst: Money,
    line_total: Money,
}

impl InvoiceLineItem {
    /// Prices `quantity` units of a catalog product.
    ///
    /// ## Errors
    /// `CoreError::Validation` when `quantity` is outside 1 to
    /// [`crate::MAX_ITEM_QUANTITY`] or the price is outside 0 to
    /// [`crate::MAX_UNIT_PRICE`].
    /// Stock is not checked here; that is the catalog's job.
    ///
    /// ## Example
    /// ```rust
    /// use gstbill_core::line_item::InvoiceLineItem;
    /// use gstbill_core::money::Money;
    ///
    /// let item = InvoiceLineItem::from_parts(
    ///     "Apple", "iPhone 15", "128GB", "Blue",
    ///     Money::from_rupees(1000), "", 2,
    /// ).unwrap();
    /// assert_eq!(item.amount(), Money::from_rupees(2000));
    /// assert_eq!(item.sgst(), Money::from_rupees(180));
    /// assert_eq!(item.line_total(), Money::from_rupees(2360));
    /// assert_eq!(item.hsn_code(), "85171290");
    /// ```
    pub fn new(product: &Product, quantity: i64) -> CoreResult<Self> {
        Self::build(product.key(), product.price, &product.hsn_code, quantity)
    }

    /// Prices a line from loose fields, for callers without a catalog entry.
    pub fn from_parts(
        brand: impl Into<String>,
        model: impl Into<String>,
        storage: impl Into<String>,
        color: impl Into<String>,
        unit_price: Money,
        hsn_code: &str,
        quantity: i64,
    ) -> CoreResult<Self> {
        let key = ProductKey::new(brand, model, storage, color);
        Self::build(key, unit_price, hsn_code, quantity)
    }

    fn build(key: ProductKey, unit_price: Money, hsn_code: &str, quantity: i64) -> CoreResult<Self> {
        validate_quantity(quantity)?;
        validate_price(unit_price)?;

        let hsn_code = match hsn_code.trim() {
            "" => DEFAULT_HSN_CODE.to_string(),
            code => code.to_string(),
        };

        let amount = unit_price.multiply_quantity(quantity);
        let split = tax::split(amount, SGST_RATE + CGST_RATE);

        Ok(InvoiceLineItem {
            key,
            unit_price,
            quantity,
            hsn_code,
            amount,
            sgst: split.sgst,
            cgst: split.cgst,
            line_total: split.total,
        })
    }

    /// `"{brand} {model} ({storage}, {color})"`.
    pub fn description(&self) -> String {
        self.key.to_string()
    }

    pub fn key(&self) -> &ProductKey {
        &self.key
    }

    pub fn brand(&self) -> &str {
        &self.key.brand
    }

    pub fn model(&self) -> &str {
        &self.key.model
    }

    pub fn storage(&self) -> &str {
        &self.key.storage
    }

    pub fn color(&self) -> &str {
        &self.key.color
    }

    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn hsn_code(&self) -> &str {
        &self.hsn_code
    }

    /// Unit price × quantity, before tax.
    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn sgst(&self) -> Money {
        self.sgst
    }

    pub fn cgst(&self) -> Money {
        self.cgst
    }

    /// Amount plus both tax components.
    pub fn line_total(&self) -> Money {
        self.line_total
    }

    /// Immutable record of this line for rendering.
    pub fn snapshot(&self) -> LineItemSnapshot {
        LineItemSnapshot {
            brand: self.key.brand.clone(),
            model: self.key.model.clone(),
            storage: self.key.storage.clone(),
            color: self.key.color.clone(),
            description: self.description(),
            hsn_code: self.hsn_code.clone(),
            unit_price: self.unit_price,
            quantity: self.quantity,
            amount: self.amount,
            sgst_rate_bps: SGST_RATE.bps(),
            cgst_rate_bps: CGST_RATE.bps(),
            sgst: self.sgst,
            cgst: self.cgst,
            line_total: self.line_total,
            unit_price_formatted: self.unit_price.to_string(),
            amount_formatted: self.amount.to_string(),
            sgst_formatted: self.sgst.to_string(),
            cgst_formatted: self.cgst.to_string(),
            line_total_formatted: self.line_total.to_string(),
        }
    }
}

/// Flat, pre-formatted view of a line item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LineItemSnapshot {
    pub brand: String,
    pub model: String,
    pub storage: String,
    pub color: String,
    pub description: String,
    pub hsn_code: String,
    pub unit_price: Money,
    pub quantity: i64,
    pub amount: Money,
    pub sgst_rate_bps: u32,
    pub cgst_rate_bps: u32,
    pub sgst: Money,
    pub cgst: Money,
    pub line_total: Money,
    pub unit_price_formatted: String,
    pub amount_formatted: String,
    pub sgst_formatted: String,
    pub cgst_formatted: String,
    pub line_total_formatted: String,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    fn iphone(price_rupees: i64, hsn: &str) -> Product {
        Product {
            brand: "Apple".to_string(),
            model: "iPhone 15".to_string(),
            storage: "128GB".to_string(),
            color: "Blue".to_string(),
            price: Money::from_rupees(price_rupees),
            hsn_code: hsn.to_string(),
            description: "6.1\" Super Retina XDR".to_string(),
            stock: 20,
        }
    }

    #[test]
    fn test_line_math() {
        let item = InvoiceLineItem::new(&iphone(1000, "85171290"), 2).unwrap();
        assert_eq!(item.amount(), Money::from_rupees(2000));
        assert_eq!(item.sgst(), Money::from_rupees(180));
        assert_eq!(item.cgst(), Money::from_rupees(180));
        assert_eq!(item.line_total(), Money::from_rupees(2360));
        assert_eq!(item.line_total(), item.amount() + item.sgst() + item.cgst());
    }

    #[test]
    fn test_description() {
        let item = InvoiceLineItem::new(&iphone(79_900, "85171290"), 1).unwrap();
        assert_eq!(item.description(), "Apple iPhone 15 (128GB, Blue)");
    }

    #[test]
    fn test_missing_hsn_falls_back() {
        let item = InvoiceLineItem::new(&iphone(79_900, ""), 1).unwrap();
        assert_eq!(item.hsn_code(), DEFAULT_HSN_CODE);

        let item = InvoiceLineItem::new(&iphone(79_900, "   "), 1).unwrap();
        assert_eq!(item.hsn_code(), DEFAULT_HSN_CODE);

        let item = InvoiceLineItem::new(&iphone(79_900, "85176290"), 1).unwrap();
        assert_eq!(item.hsn_code(), "85176290");
    }

    #[test]
    fn test_zero_price_line_is_allowed() {
        let item = InvoiceLineItem::new(&iphone(0, ""), 3).unwrap();
        assert!(item.amount().is_zero());
        assert!(item.line_total().is_zero());
    }

    #[test]
    fn test_rejects_bad_quantity() {
        let err = InvoiceLineItem::new(&iphone(1000, ""), 0).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
        assert!(InvoiceLineItem::new(&iphone(1000, ""), -2).is_err());
    }

    #[test]
    fn test_rejects_quantity_and_price_above_caps() {
        let huge_qty = InvoiceLineItem::from_parts(
            "Apple", "iPhone 15", "128GB", "Blue",
            Money::from_rupees(79_900), "", 1_000_000_000_000,
        );
        assert!(matches!(huge_qty, Err(CoreError::Validation(_))));

        let huge_price = InvoiceLineItem::from_parts(
            "Apple", "iPhone 15", "128GB", "Blue",
            Money::from_paise(i64::MAX), "", 1,
        );
        assert!(matches!(huge_price, Err(CoreError::Validation(_))));

        let largest = InvoiceLineItem::from_parts(
            "Apple", "iPhone 15", "128GB", "Blue",
            crate::MAX_UNIT_PRICE, "", crate::MAX_ITEM_QUANTITY,
        )
        .unwrap();
        assert_eq!(largest.line_total(), largest.amount() + largest.sgst() + largest.cgst());
        assert!(largest.line_total().is_positive());
    }

    #[test]
    fn test_rejects_negative_price() {
        let result = InvoiceLineItem::from_parts(
            "Apple", "iPhone 15", "128GB", "Blue",
            Money::from_paise(-1), "", 1,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_snapshot_exposes_everything() {
        let item = InvoiceLineItem::new(&iphone(1000, "85171290"), 2).unwrap();
        let snap = item.snapshot();
        assert_eq!(snap.description, "Apple iPhone 15 (128GB, Blue)");
        assert_eq!(snap.quantity, 2);
        assert_eq!(snap.sgst_rate_bps, 900);
        assert_eq!(snap.cgst_rate_bps, 900);
        assert_eq!(snap.amount, Money::from_rupees(2000));
        assert_eq!(snap.line_total, Money::from_rupees(2360));
        assert_eq!(snap.unit_price_formatted, "₹1,000.00");
        assert_eq!(snap.amount_formatted, "₹2,000.00");
        assert_eq!(snap.sgst_formatted, "₹180.00");
        assert_eq!(snap.cgst_formatted, "₹180.00");
        assert_eq!(snap.line_total_formatted, "₹2,360.00");
        assert_eq!(item.snapshot(), snap);
    }
}
