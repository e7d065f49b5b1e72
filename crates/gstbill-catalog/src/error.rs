//! # Catalog Error Types
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  serde_json::Error / io::Error (seed data)                             │
//! │  ValidationError (customer form, env overrides)                        │
//! │  CoreError (cart, line items)                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CatalogError (this module) ← Adds context                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Billing UI shows the message                                          │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Stock shortfalls are not errors here: checkout reports them alongside the
//! issued invoice.

use std::path::PathBuf;

use gstbill_core::{CoreError, ValidationError};
use thiserror::Error;

/// Catalog and checkout errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Seed data is not valid catalog JSON.
    #[error("Invalid catalog data: {0}")]
    Seed(#[from] serde_json::Error),

    /// A catalog file could not be read.
    #[error("Cannot read catalog file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The customer form has problems; every one is listed.
    #[error("Invalid customer details: {}", join_messages(.0))]
    InvalidCustomer(Vec<ValidationError>),

    /// An environment override failed validation.
    #[error("Invalid value for {var}: {source}")]
    InvalidConfig {
        var: String,
        #[source]
        source: ValidationError,
    },

    /// Core business rule violation (empty cart, bad quantity, ...).
    #[error(transparent)]
    Core(#[from] CoreError),
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Convenience type alias for catalog results.
pub type CatalogResult<T> = Result<T, CatalogError>;
