//! # Invoice Aggregate
//!
//! The invoice owns its line items and keeps running totals as lines are
//! appended.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Invoice::new(customer)                                                 │
//! │    • invoice_number = INV-<date>-<random>                               │
//! │    • issued_at      = now                                               │
//! │    • seller         = SellerProfile (fixed)                             │
//! │    • totals         = 0                                                 │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  add_item(line) ──► items.push(line); totals += line    (append only)  │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  snapshot() ──► InvoiceSnapshot ──► renderer (PDF, screen, JSON)       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! After every `add_item`:
//! - `subtotal == Σ amount`, `total_sgst == Σ sgst`, `total_cgst == Σ cgst`
//! - `grand_total == subtotal + total_sgst + total_cgst`
//!
//! The totals are maintained incrementally; [`InvoiceTotals::from_items`]
//! recomputes them from scratch and must always agree.

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::invoice_number::next_invoice_number;
use crate::line_item::{InvoiceLineItem, LineItemSnapshot};
use crate::money::Money;
use crate::types::{Customer, SellerProfile};
use crate::validation::{state_code_from_gstin, state_name};
use crate::words::rupees_in_words;

const DATE_FORMAT: &str = "%d-%m-%Y";
const TIME_FORMAT: &str = "%H:%M:%S";

// =============================================================================
// Totals
// =============================================================================

/// The four running sums of an invoice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InvoiceTotals {
    pub subtotal: Money,
    pub total_sgst: Money,
    pub total_cgst: Money,
    pub grand_total: Money,
}

impl InvoiceTotals {
    /// Recomputes totals from scratch over `items`.
    pub fn from_items<'a, I>(items: I) -> Self
    where
        I: IntoIterator<Item = &'a InvoiceLineItem>,
    {
        let mut totals = InvoiceTotals::default();
        for item in items {
            totals.accumulate(item.amount(), item.sgst(), item.cgst(), item.line_total());
        }
        totals
    }

    fn accumulate(&mut self, amount: Money, sgst: Money, cgst: Money, line_total: Money) {
        self.subtotal += amount;
        self.total_sgst += sgst;
        self.total_cgst += cgst;
        self.grand_total += line_total;
    }
}

// =============================================================================
// Invoice
// =============================================================================

/// A tax invoice under construction.
#[derive(Debug, Clone)]
pub struct Invoice {
    invoice_number: String,
    issued_at: NaiveDateTime,
    customer: Customer,
    seller: SellerProfile,
    items: Vec<InvoiceLineItem>,
    totals: InvoiceTotals,
}

impl Invoice {
    /// Opens an invoice for `customer`, issued now by the default seller.
    ///
    /// The customer is expected to have passed
    /// [`crate::validation::validate_customer`] already.
    ///
    /// ## Example
    /// ```rust
    /// use gstbill_core::{Customer, Invoice, InvoiceLineItem, Money};
    ///
    /// let customer = Customer::new("Asha Rao", "12 MG Road, Bangalore", "9123456780");
    /// let mut invoice = Invoice::new(customer);
    /// let line = InvoiceLineItem::from_parts(
    ///     "Apple", "iPhone 15", "128GB", "Blue", Money::from_rupees(1000), "", 2,
    /// ).unwrap();
    /// invoice.add_item(line);
    ///
    /// let snapshot = invoice.snapshot();
    /// assert_eq!(snapshot.grand_total, Money::from_rupees(2360));
    /// assert_eq!(
    ///     snapshot.grand_total_words,
    ///     "Two Thousand Three Hundred and Sixty Rupees Only"
    /// );
    /// ```
    pub fn new(customer: Customer) -> Self {
        Self::with_seller(customer, SellerProfile::default())
    }

    /// Opens an invoice issued now by `seller`.
    pub fn with_seller(customer: Customer, seller: SellerProfile) -> Self {
        Self::from_parts(
            next_invoice_number(),
            Local::now().naive_local(),
            customer,
            seller,
        )
    }

    /// Opens an invoice with a known number and issue time.
    ///
    /// Used to re-render an invoice issued earlier, and by tests that need
    /// a deterministic header.
    pub fn from_parts(
        invoice_number: impl Into<String>,
        issued_at: NaiveDateTime,
        customer: Customer,
        seller: SellerProfile,
    ) -> Self {
        Invoice {
            invoice_number: invoice_number.into(),
            issued_at,
            customer,
            seller,
            items: Vec::new(),
            totals: InvoiceTotals::default(),
        }
    }

    /// Appends a line and folds it into the running totals.
    ///
    /// Not idempotent: adding an equal line twice prints it twice. Merge
    /// duplicates in the cart before building the invoice.
    pub fn add_item(&mut self, item: InvoiceLineItem) {
        self.totals
            .accumulate(item.amount(), item.sgst(), item.cgst(), item.line_total());
        self.items.push(item);
    }

    pub fn invoice_number(&self) -> &str {
        &self.invoice_number
    }

    pub fn issued_at(&self) -> NaiveDateTime {
        self.issued_at
    }

    pub fn customer(&self) -> &Customer {
        &self.customer
    }

    pub fn seller(&self) -> &SellerProfile {
        &self.seller
    }

    /// Lines in print order.
    pub fn items(&self) -> &[InvoiceLineItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Running totals, maintained by `add_item`.
    pub fn totals(&self) -> InvoiceTotals {
        self.totals
    }

    pub fn subtotal(&self) -> Money {
        self.totals.subtotal
    }

    pub fn total_sgst(&self) -> Money {
        self.totals.total_sgst
    }

    pub fn total_cgst(&self) -> Money {
        self.totals.total_cgst
    }

    pub fn grand_total(&self) -> Money {
        self.totals.grand_total
    }

    /// Totals recomputed from the item list, ignoring the running sums.
    pub fn recompute_totals(&self) -> InvoiceTotals {
        InvoiceTotals::from_items(&self.items)
    }

    /// State whose GST applies: the customer's (from their GSTIN) when they
    /// are registered, otherwise the seller's.
    pub fn place_of_supply(&self) -> &'static str {
        let gstin = self.customer.gstin.as_deref().unwrap_or(&self.seller.gstin);
        state_name(state_code_from_gstin(gstin))
    }

    /// Immutable, pre-formatted record for the renderer.
    ///
    /// Pure projection: repeated calls without an intervening `add_item`
    /// return equal snapshots.
    pub fn snapshot(&self) -> InvoiceSnapshot {
        let totals = self.totals;
        // Words cover whole rupees only; paise are dropped, never rounded
        let whole_rupees = u64::try_from(totals.grand_total.rupees()).unwrap_or(0);

        InvoiceSnapshot {
            invoice_number: self.invoice_number.clone(),
            date: self.issued_at.format(DATE_FORMAT).to_string(),
            time: self.issued_at.format(TIME_FORMAT).to_string(),
            issued_at: self.issued_at,

            customer_name: self.customer.name.clone(),
            customer_address: self.customer.address.clone(),
            customer_phone: self.customer.phone.clone(),
            customer_email: self.customer.email.clone(),
            customer_gstin: self.customer.gstin.clone(),

            seller_name: self.seller.name.clone(),
            seller_address: self.seller.address.clone(),
            seller_phone: self.seller.phone.clone(),
            seller_email: self.seller.email.clone(),
            seller_gstin: self.seller.gstin.clone(),
            place_of_supply: self.place_of_supply().to_string(),

            items: self.items.iter().map(InvoiceLineItem::snapshot).collect(),
            total_quantity: self.items.iter().map(InvoiceLineItem::quantity).sum(),

            subtotal: totals.subtotal,
            total_sgst: totals.total_sgst,
            total_cgst: totals.total_cgst,
            grand_total: totals.grand_total,

            subtotal_formatted: totals.subtotal.to_string(),
            total_sgst_formatted: totals.total_sgst.to_string(),
            total_cgst_formatted: totals.total_cgst.to_string(),
            grand_total_formatted: totals.grand_total.to_string(),
            grand_total_words: rupees_in_words(whole_rupees),
        }
    }
}

// =============================================================================
// Snapshot
// =============================================================================

/// Flat record of an invoice, every field ready for interpolation.
///
/// Raw `Money` fields are paise; `*_formatted` fields are display strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InvoiceSnapshot {
    pub invoice_number: String,
    /// `dd-mm-YYYY`
    pub date: String,
    /// `HH:MM:SS`
    pub time: String,
    #[ts(as = "String")]
    pub issued_at: NaiveDateTime,

    pub customer_name: String,
    pub customer_address: String,
    pub customer_phone: String,
    pub customer_email: Option<String>,
    pub customer_gstin: Option<String>,

    pub seller_name: String,
    pub seller_address: String,
    pub seller_phone: String,
    pub seller_email: String,
    pub seller_gstin: String,
    pub place_of_supply: String,

    pub items: Vec<LineItemSnapshot>,
    /// Units across all lines, for the totals row.
    pub total_quantity: i64,

    pub subtotal: Money,
    pub total_sgst: Money,
    pub total_cgst: Money,
    pub grand_total: Money,

    pub subtotal_formatted: String,
    pub total_sgst_formatted: String,
    pub total_cgst_formatted: String,
    pub grand_total_formatted: String,
    /// `"<words> Rupees Only"` for the whole-rupee part of the grand total.
    pub grand_total_words: String,
}

impl InvoiceSnapshot {
    /// Recomputes the four totals from this snapshot's item list.
    pub fn recompute_totals(&self) -> InvoiceTotals {
        let mut totals = InvoiceTotals::default();
        for item in &self.items {
            totals.accumulate(item.amount, item.sgst, item.cgst, item.line_total);
        }
        totals
    }

    /// The totals as carried by the snapshot.
    pub fn totals(&self) -> InvoiceTotals {
        InvoiceTotals {
            subtotal: self.subtotal,
            total_sgst: self.total_sgst,
            total_cgst: self.total_cgst,
            grand_total: self.grand_total,
        }
    }

    /// Serializes the snapshot for a renderer that consumes JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
