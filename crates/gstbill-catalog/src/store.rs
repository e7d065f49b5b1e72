//! # In-Memory Catalog
//!
//! The shop's handset list with live stock counts.
//!
//! ## Search
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  User types: "blue"                                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Case-insensitive substring match on: brand, model, description, color │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Apple iPhone 15 (128GB, Blue)          ← color                        │
//! │  Samsung Galaxy M34 (128GB, Midnight Blue)                             │
//! │  Vivo V29 Pro (256GB, Himalayan Blue)                                  │
//! │  ...                                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Stock
//! All products sit behind one `Mutex`. A decrement checks and subtracts
//! under the same lock, so two checkouts can never both take the last unit.

use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};

use gstbill_core::{Money, Product, ProductCatalog, ProductKey};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{CatalogError, CatalogResult};

/// Handsets shipped with the crate.
const SEED_JSON: &str = include_str!("../data/mobiles.json");

/// Catalog entry as written in seed JSON. Prices are whole rupees.
#[derive(Debug, Deserialize)]
struct SeedProduct {
    brand: String,
    model: String,
    storage: String,
    color: String,
    price_rupees: i64,
    #[serde(default)]
    hsn_code: String,
    #[serde(default)]
    description: String,
    stock: i64,
}

impl From<SeedProduct> for Product {
    fn from(seed: SeedProduct) -> Self {
        Product {
            brand: seed.brand,
            model: seed.model,
            storage: seed.storage,
            color: seed.color,
            price: Money::from_rupees(seed.price_rupees),
            hsn_code: seed.hsn_code,
            description: seed.description,
            stock: seed.stock,
        }
    }
}

/// Product catalog held in memory.
///
/// ## Usage
/// ```rust
/// use gstbill_catalog::InMemoryCatalog;
/// use gstbill_core::ProductCatalog;
///
/// let catalog = InMemoryCatalog::seeded().unwrap();
/// let phones = catalog.search("galaxy");
/// assert!(!phones.is_empty());
/// ```
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    products: Mutex<Vec<Product>>,
}

impl InMemoryCatalog {
    /// Creates a catalog from products, keeping their order.
    pub fn new(products: Vec<Product>) -> Self {
        InMemoryCatalog {
            products: Mutex::new(products),
        }
    }

    /// Loads the handsets shipped with the crate.
    pub fn seeded() -> CatalogResult<Self> {
        Self::from_json(SEED_JSON)
    }

    /// Parses a JSON array of catalog entries.
    pub fn from_json(json: &str) -> CatalogResult<Self> {
        let seeds: Vec<SeedProduct> = serde_json::from_str(json)?;
        let products: Vec<Product> = seeds.into_iter().map(Product::from).collect();
        debug!(count = products.len(), "Loaded catalog");
        Ok(Self::new(products))
    }

    /// Reads a JSON catalog file.
    pub fn from_path(path: &Path) -> CatalogResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Number of catalog entries.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Current stock for `key`, if the product exists.
    pub fn stock_of(&self, key: &ProductKey) -> Option<i64> {
        self.lock()
            .iter()
            .find(|p| p.matches(key))
            .map(|p| p.stock)
    }

    // Each mutation is a single check-and-assign under the lock, so a
    // poisoned mutex still guards consistent counts.
    fn lock(&self) -> MutexGuard<'_, Vec<Product>> {
        self.products.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ProductCatalog for InMemoryCatalog {
    fn search(&self, query: &str) -> Vec<Product> {
        let query = query.trim().to_lowercase();
        debug!(query = %query, "Searching catalog");

        self.lock()
            .iter()
            .filter(|p| {
                query.is_empty()
                    || p.brand.to_lowercase().contains(&query)
                    || p.model.to_lowercase().contains(&query)
                    || p.description.to_lowercase().contains(&query)
                    || p.color.to_lowercase().contains(&query)
            })
            .cloned()
            .collect()
    }

    fn list_by_brand(&self, brand: &str) -> Vec<Product> {
        self.lock()
            .iter()
            .filter(|p| p.brand == brand)
            .cloned()
            .collect()
    }

    fn brands(&self) -> Vec<String> {
        let mut brands: Vec<String> = Vec::new();
        for product in self.lock().iter() {
            if !brands.contains(&product.brand) {
                brands.push(product.brand.clone());
            }
        }
        brands
    }

    fn find(&self, key: &ProductKey) -> Option<Product> {
        self.lock().iter().find(|p| p.matches(key)).cloned()
    }

    fn decrement_stock(&self, key: &ProductKey, quantity: i64) -> bool {
        debug!(product = %key, quantity, "Decrementing stock");

        let mut products = self.lock();
        let Some(product) = products.iter_mut().find(|p| p.matches(key)) else {
            warn!(product = %key, "Product not in catalog");
            return false;
        };

        if !product.can_sell(quantity) {
            warn!(
                product = %key,
                available = product.stock,
                requested = quantity,
                "Insufficient stock"
            );
            return false;
        }

        product.stock -= quantity;
        true
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn iphone_15() -> ProductKey {
        ProductKey::new("Apple", "iPhone 15", "128GB", "Blue")
    }

    #[test]
    fn test_seed_loads_every_handset() {
        let catalog = InMemoryCatalog::seeded().unwrap();
        assert_eq!(catalog.len(), 26);
        assert_eq!(
            catalog.brands(),
            vec!["Samsung", "Apple", "Oppo", "Vivo", "Redmi", "Realme"]
        );
    }

    #[test]
    fn test_find_returns_rupee_prices() {
        let catalog = InMemoryCatalog::seeded().unwrap();
        let phone = catalog.find(&iphone_15()).unwrap();
        assert_eq!(phone.price, Money::from_rupees(79_900));
        assert_eq!(phone.hsn_code, "85171290");
        assert_eq!(phone.stock, 20);
    }

    #[test]
    fn test_search_matches_brand_model_description_and_color() {
        let catalog = InMemoryCatalog::seeded().unwrap();

        assert_eq!(catalog.search("SAMSUNG").len(), 5);
        assert!(catalog.search("iphone").iter().all(|p| p.brand == "Apple"));
        assert!(catalog
            .search("snapdragon")
            .iter()
            .any(|p| p.model == "Galaxy S23 Ultra"));
        assert!(catalog.search("himalayan").iter().any(|p| p.brand == "Vivo"));
        assert!(catalog.search("no such phone").is_empty());
        assert_eq!(catalog.search("  ").len(), 26);
    }

    #[test]
    fn test_list_by_brand_keeps_order() {
        let catalog = InMemoryCatalog::seeded().unwrap();
        let models: Vec<String> = catalog
            .list_by_brand("Realme")
            .into_iter()
            .map(|p| p.model)
            .collect();
        assert_eq!(models, vec!["GT 5", "11 Pro+", "Narzo 60", "C53"]);
        assert!(catalog.list_by_brand("Nokia").is_empty());
    }

    #[test]
    fn test_decrement_stock() {
        let catalog = InMemoryCatalog::seeded().unwrap();

        assert!(catalog.decrement_stock(&iphone_15(), 5));
        assert_eq!(catalog.stock_of(&iphone_15()), Some(15));

        assert!(!catalog.decrement_stock(&iphone_15(), 16));
        assert_eq!(catalog.stock_of(&iphone_15()), Some(15));

        assert!(!catalog.decrement_stock(&iphone_15(), 0));
        assert!(!catalog.decrement_stock(&iphone_15(), -3));
        assert_eq!(catalog.stock_of(&iphone_15()), Some(15));

        assert!(catalog.decrement_stock(&iphone_15(), 15));
        assert_eq!(catalog.stock_of(&iphone_15()), Some(0));
    }

    #[test]
    fn test_decrement_unknown_product() {
        let catalog = InMemoryCatalog::seeded().unwrap();
        let key = ProductKey::new("Apple", "iPhone 15", "128GB", "Pink");
        assert!(!catalog.decrement_stock(&key, 1));
        assert_eq!(catalog.stock_of(&key), None);
    }

    #[test]
    fn test_from_json_defaults_and_errors() {
        let catalog = InMemoryCatalog::from_json(
            r#"[{"brand":"Nokia","model":"G42","storage":"128GB","color":"Purple","price_rupees":12999,"stock":4}]"#,
        )
        .unwrap();
        let phone = catalog.list_by_brand("Nokia").remove(0);
        assert_eq!(phone.hsn_code, "");
        assert_eq!(phone.description, "");

        let err = InMemoryCatalog::from_json("{not json").unwrap_err();
        assert!(matches!(err, CatalogError::Seed(_)));
    }

    #[test]
    fn test_from_missing_path() {
        let err = InMemoryCatalog::from_path(Path::new("/nonexistent/catalog.json")).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }

    proptest! {
        /// Stock never goes negative and only successful decrements move it.
        #[test]
        fn stock_never_negative(requests in prop::collection::vec(-2i64..12, 0..30)) {
            let catalog = InMemoryCatalog::seeded().unwrap();
            let mut expected = catalog.stock_of(&iphone_15()).unwrap();

            for qty in requests {
                let ok = catalog.decrement_stock(&iphone_15(), qty);
                prop_assert_eq!(ok, qty >= 1 && qty <= expected);
                if ok {
                    expected -= qty;
                }
                prop_assert_eq!(catalog.stock_of(&iphone_15()), Some(expected));
                prop_assert!(expected >= 0);
            }
        }
    }
}
