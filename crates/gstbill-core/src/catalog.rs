//! # Catalog Interface
//!
//! What the core needs from a product catalog. The implementation lives
//! outside the core (see the `gstbill-catalog` crate) because it owns shared,
//! mutable stock.

use crate::types::{Product, ProductKey};

/// A product catalog with stock counts.
///
/// Implementations choose their own locking discipline; the core calls
/// `decrement_stock` once per invoice line, sequentially.
pub trait ProductCatalog {
    /// Products matching `query` (case-insensitive); empty query returns all.
    fn search(&self, query: &str) -> Vec<Product>;

    /// Every product of `brand`, in catalog order.
    fn list_by_brand(&self, brand: &str) -> Vec<Product>;

    /// Brands in catalog order.
    fn brands(&self) -> Vec<String>;

    /// The product with this exact key.
    fn find(&self, key: &ProductKey) -> Option<Product>;

    /// Takes `quantity` units out of stock.
    ///
    /// Returns `false`, leaving stock untouched, when the key is unknown,
    /// `quantity` is below 1, or fewer than `quantity` units remain.
    fn decrement_stock(&self, key: &ProductKey, quantity: i64) -> bool;
}
