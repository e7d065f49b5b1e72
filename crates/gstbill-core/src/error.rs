//! # Error Types
//!
//! Domain-specific error types for gstbill-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  gstbill-core errors (this file)                                       │
//! │  ├── CoreError        - Invoice / cart rule violations                 │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  gstbill-catalog errors (separate crate)                               │
//! │  └── CatalogError     - Seed data and checkout failures                │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → CatalogError → caller             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Insufficient stock is deliberately *not* a `CoreError`: the catalog
//! reports it as a boolean and checkout collects the shortfalls.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// An invoice was requested for a cart with no lines.
    #[error("Cannot build an invoice from an empty cart")]
    EmptyCart,

    /// The cart does not hold a line for the given product.
    ///
    /// ## When This Occurs
    /// - Updating the quantity of a handset that was never added
    /// - Removing a line twice
    #[error("Product not in cart: {0}")]
    NotInCart(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Produced by the validators in [`crate::validation`] before an invoice is
/// built, and by line item construction when a precondition is broken.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (phone, email, GSTIN).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
