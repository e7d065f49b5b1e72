//! Shop configuration module.
//!
//! Configuration is loaded from environment variables with fallback to the
//! shop's built-in identity and the embedded handset catalog.

use std::env;
use std::path::PathBuf;

use gstbill_core::validation::{validate_email, validate_gstin, validate_phone, ValidationResult};
use gstbill_core::SellerProfile;

use crate::error::{CatalogError, CatalogResult};
use crate::store::InMemoryCatalog;

pub const ENV_SELLER_NAME: &str = "GSTBILL_SELLER_NAME";
pub const ENV_SELLER_ADDRESS: &str = "GSTBILL_SELLER_ADDRESS";
pub const ENV_SELLER_PHONE: &str = "GSTBILL_SELLER_PHONE";
pub const ENV_SELLER_EMAIL: &str = "GSTBILL_SELLER_EMAIL";
pub const ENV_SELLER_GSTIN: &str = "GSTBILL_SELLER_GSTIN";
pub const ENV_CATALOG_PATH: &str = "GSTBILL_CATALOG_PATH";
pub const ENV_LOG: &str = "GSTBILL_LOG";

/// Log filter used when neither `GSTBILL_LOG` nor `RUST_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "info,gstbill_catalog=debug";

/// Shop configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShopConfig {
    /// Seller printed on every invoice
    pub seller: SellerProfile,

    /// JSON catalog replacing the embedded seed (optional)
    pub catalog_path: Option<PathBuf>,

    /// Log filter directive (optional, `RUST_LOG` syntax)
    pub log_filter: Option<String>,
}

impl ShopConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> CatalogResult<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through `lookup`, which returns a variable's value.
    ///
    /// Blank values count as unset. Phone, email and GSTIN overrides must
    /// pass the same checks as customer details.
    pub fn from_lookup<F>(lookup: F) -> CatalogResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let mut seller = SellerProfile::default();

        if let Some(name) = get(ENV_SELLER_NAME) {
            seller.name = name;
        }
        if let Some(address) = get(ENV_SELLER_ADDRESS) {
            seller.address = address;
        }
        if let Some(phone) = get(ENV_SELLER_PHONE) {
            checked(ENV_SELLER_PHONE, validate_phone(&phone))?;
            seller.phone = phone;
        }
        if let Some(email) = get(ENV_SELLER_EMAIL) {
            checked(ENV_SELLER_EMAIL, validate_email(&email))?;
            seller.email = email;
        }
        if let Some(gstin) = get(ENV_SELLER_GSTIN) {
            checked(ENV_SELLER_GSTIN, validate_gstin(&gstin))?;
            seller.gstin = gstin;
        }

        Ok(ShopConfig {
            seller,
            catalog_path: get(ENV_CATALOG_PATH).map(PathBuf::from),
            log_filter: get(ENV_LOG),
        })
    }

    /// Opens the configured catalog: the file if one is set, else the seed.
    pub fn load_catalog(&self) -> CatalogResult<InMemoryCatalog> {
        match &self.catalog_path {
            Some(path) => InMemoryCatalog::from_path(path),
            None => InMemoryCatalog::seeded(),
        }
    }
}

fn checked(var: &str, result: ValidationResult<()>) -> CatalogResult<()> {
    result.map_err(|source| CatalogError::InvalidConfig {
        var: var.to_string(),
        source,
    })
}
