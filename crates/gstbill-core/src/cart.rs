//! # Cart
//!
//! The handsets a customer has picked, before an invoice exists.
//!
//! The cart is a plain value owned by whoever runs the billing session and
//! passed in explicitly; the core keeps no session state of its own.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Add to Cart ──────────► add() ─────────────► push, or qty += n        │
//! │                                               when the key matches     │
//! │  Change Quantity ──────► update_quantity() ─► qty = n (0 removes)      │
//! │                                                                         │
//! │  Remove ───────────────► remove() ──────────► line dropped             │
//! │                                                                         │
//! │  Generate Invoice ─────► build_invoice() ───► one line item per line   │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::invoice::{Invoice, InvoiceTotals};
use crate::line_item::InvoiceLineItem;
use crate::types::{Customer, Product, ProductKey, SellerProfile};
use crate::validation::validate_quantity;
use crate::MAX_ITEM_QUANTITY;

/// One cart line.
///
/// ## Price Freezing
/// The product is copied when first added. Later catalog changes (price,
/// stock) do not reach a cart that already holds the handset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product: Product,
    pub quantity: i64,
}

impl CartLine {
    pub fn key(&self) -> ProductKey {
        self.product.key()
    }

    /// Prices this line as it would appear on an invoice.
    pub fn to_line_item(&self) -> CoreResult<InvoiceLineItem> {
        InvoiceLineItem::new(&self.product, self.quantity)
    }
}

/// The shopping cart.
///
/// ## Invariants
/// - Lines are unique by [`ProductKey`] (adding the same handset increases
///   its quantity)
/// - Every quantity is at least 1
/// - Lines keep the order they were first added in
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart::default()
    }

    /// Adds `quantity` units of `product`, merging with an existing line.
    ///
    /// ## Errors
    /// `ValidationError::OutOfRange` when the merged quantity would exceed
    /// [`MAX_ITEM_QUANTITY`]; the cart is left unchanged.
    pub fn add(&mut self, product: &Product, quantity: i64) -> CoreResult<()> {
        validate_quantity(quantity)?;

        let key = product.key();
        if let Some(line) = self.lines.iter_mut().find(|l| l.product.matches(&key)) {
            let merged = line
                .quantity
                .checked_add(quantity)
                .filter(|q| *q <= MAX_ITEM_QUANTITY)
                .ok_or_else(|| ValidationError::OutOfRange {
                    field: "quantity".to_string(),
                    min: 1,
                    max: MAX_ITEM_QUANTITY,
                })?;
            line.quantity = merged;
            return Ok(());
        }

        self.lines.push(CartLine {
            product: product.clone(),
            quantity,
        });
        Ok(())
    }

    /// Sets the quantity of a line. Zero removes the line.
    pub fn update_quantity(&mut self, key: &ProductKey, quantity: i64) -> CoreResult<()> {
        if quantity == 0 {
            return self.remove(key);
        }
        validate_quantity(quantity)?;

        match self.lines.iter_mut().find(|l| l.product.matches(key)) {
            Some(line) => {
                line.quantity = quantity;
                Ok(())
            }
            None => Err(CoreError::NotInCart(key.to_string())),
        }
    }

    /// Removes the line for `key`.
    pub fn remove(&mut self, key: &ProductKey) -> CoreResult<()> {
        let before = self.lines.len();
        self.lines.retain(|l| !l.product.matches(key));
        if self.lines.len() == before {
            return Err(CoreError::NotInCart(key.to_string()));
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Units across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Totals an invoice built from this cart would carry.
    pub fn preview_totals(&self) -> CoreResult<InvoiceTotals> {
        let items = self
            .lines
            .iter()
            .map(CartLine::to_line_item)
            .collect::<CoreResult<Vec<_>>>()?;
        Ok(InvoiceTotals::from_items(&items))
    }

    /// Builds an invoice with one line item per cart line, in cart order.
    ///
    /// ## Errors
    /// - `CoreError::EmptyCart` when there is nothing to bill
    /// - `CoreError::Validation` if a line cannot be priced
    pub fn build_invoice(&self, customer: Customer, seller: SellerProfile) -> CoreResult<Invoice> {
        if self.is_empty() {
            return Err(CoreError::EmptyCart);
        }

        let mut invoice = Invoice::with_seller(customer, seller);
        for line in &self.lines {
            invoice.add_item(line.to_line_item()?);
        }
        Ok(invoice)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
