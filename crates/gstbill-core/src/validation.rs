//! # Validation Module
//!
//! Input validation run by the billing form before an invoice is built.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Billing form                                                 │
//! │  └── validate_customer() collects EVERY problem for display            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Invoice construction                                         │
//! │  └── Accepts the customer as-is (already validated)                    │
//! │                                                                         │
//! │  Line items re-check their own preconditions (quantity, price)         │
//! │  and fail fast instead of clamping.                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use gstbill_core::validation::{validate_phone, validate_quantity};
//!
//! assert!(validate_phone("9876543210").is_ok());
//! assert!(validate_quantity(0).is_err());
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::Customer;
use crate::{MAX_ITEM_QUANTITY, MAX_UNIT_PRICE};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

const MAX_TEXT_LEN: usize = 200;
const MAX_QUERY_LEN: usize = 100;
const PHONE_LEN: usize = 10;
const GSTIN_LEN: usize = 15;

// =============================================================================
// Customer Validators
// =============================================================================

/// Validates the customer's name: required, at most 200 characters.
pub fn validate_customer_name(name: &str) -> ValidationResult<()> {
    required_text("customer name", name)
}

/// Validates the customer's address: required, at most 200 characters.
pub fn validate_address(address: &str) -> ValidationResult<()> {
    required_text("customer address", address)
}

fn required_text(field: &str, value: &str) -> ValidationResult<()> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.chars().count() > MAX_TEXT_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_TEXT_LEN,
        });
    }

    Ok(())
}

/// Validates an Indian mobile number: exactly 10 digits.
///
/// ## Example
/// ```rust
/// use gstbill_core::validation::validate_phone;
///
/// assert!(validate_phone("9876543210").is_ok());
/// assert!(validate_phone("98765").is_err());
/// assert!(validate_phone("+919876543210").is_err());
/// ```
pub fn validate_phone(phone: &str) -> ValidationResult<()> {
    if phone.is_empty() {
        return Err(ValidationError::Required {
            field: "phone".to_string(),
        });
    }

    if phone.len() != PHONE_LEN || !phone.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::InvalidFormat {
            field: "phone".to_string(),
            reason: "must be 10 digits".to_string(),
        });
    }

    Ok(())
}

/// Validates an email address: an `@` followed by a domain containing a dot.
pub fn validate_email(email: &str) -> ValidationResult<()> {
    // Domain is the text between the first and second `@`
    let valid = match email.split('@').nth(1) {
        Some(domain) => domain.contains('.'),
        None => false,
    };

    if !valid {
        return Err(ValidationError::InvalidFormat {
            field: "email".to_string(),
            reason: "must look like name@domain.tld".to_string(),
        });
    }

    Ok(())
}

/// Validates a GSTIN.
///
/// ## Rules
/// - Exactly 15 characters
/// - Characters 1-2: state code digits
/// - Characters 3-12: alphanumeric (embedded PAN)
///
/// ## Example
/// ```rust
/// use gstbill_core::validation::validate_gstin;
///
/// assert!(validate_gstin("29AABCT1332L1ZB").is_ok());
/// assert!(validate_gstin("AB123").is_err());
/// ```
pub fn validate_gstin(gstin: &str) -> ValidationResult<()> {
    let chars: Vec<char> = gstin.chars().collect();

    let valid = chars.len() == GSTIN_LEN
        && chars[..2].iter().all(|c| c.is_ascii_digit())
        && chars[2..12].iter().all(|c| c.is_ascii_alphanumeric());

    if !valid {
        return Err(ValidationError::InvalidFormat {
            field: "GSTIN".to_string(),
            reason: "must be 15 characters starting with a 2-digit state code".to_string(),
        });
    }

    Ok(())
}

/// Runs every customer check and returns all failures.
///
/// An empty vector means the customer may be invoiced. Email and GSTIN are
/// optional and only checked when present.
///
/// ## User Workflow
/// ```text
/// Generate Invoice clicked
///      │
///      ▼
/// validate_customer() ← THIS FUNCTION
///      │
///      ├── errors? → show every message, stay on the form
///      │
///      └── none   → Invoice::new(customer)
/// ```
pub fn validate_customer(customer: &Customer) -> Vec<ValidationError> {
    let mut checks = vec![
        validate_customer_name(&customer.name),
        validate_phone(&customer.phone),
        validate_address(&customer.address),
    ];

    if let Some(email) = &customer.email {
        checks.push(validate_email(email));
    }
    if let Some(gstin) = &customer.gstin {
        checks.push(validate_gstin(gstin));
    }

    checks.into_iter().filter_map(Result::err).collect()
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a line quantity: 1 to [`MAX_ITEM_QUANTITY`].
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty < 1 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(())
}

/// Validates a unit price: zero (free items) up to [`MAX_UNIT_PRICE`].
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() || price > MAX_UNIT_PRICE {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: MAX_UNIT_PRICE.paise(),
        });
    }

    Ok(())
}

/// Validates a catalog search query.
///
/// ## Rules
/// - Can be empty (returns the whole catalog)
/// - Maximum 100 characters
///
/// ## Returns
/// The trimmed query string.
pub fn validate_search_query(query: &str) -> ValidationResult<String> {
    let query = query.trim();

    if query.chars().count() > MAX_QUERY_LEN {
        return Err(ValidationError::TooLong {
            field: "query".to_string(),
            max: MAX_QUERY_LEN,
        });
    }

    Ok(query.to_string())
}

// =============================================================================
// GSTIN State Codes
// =============================================================================

/// Returns the two-character state code a GSTIN starts with, or `"00"`.
pub fn state_code_from_gstin(gstin: &str) -> &str {
    match gstin.get(..2) {
        Some(code) => code,
        None => "00",
    }
}

/// Maps a GST state code to the state or territory name.
pub fn state_name(code: &str) -> &'static str {
    match code {
        "01" => "Jammu & Kashmir",
        "02" => "Himachal Pradesh",
        "03" => "Punjab",
        "04" => "Chandigarh",
        "05" => "Uttarakhand",
        "06" => "Haryana",
        "07" => "Delhi",
        "08" => "Rajasthan",
        "09" => "Uttar Pradesh",
        "10" => "Bihar",
        "11" => "Sikkim",
        "12" => "Arunachal Pradesh",
        "13" => "Nagaland",
        "14" => "Manipur",
        "15" => "Mizoram",
        "16" => "Tripura",
        "17" => "Meghalaya",
        "18" => "Assam",
        "19" => "West Bengal",
        "20" => "Jharkhand",
        "21" => "Odisha",
        "22" => "Chhattisgarh",
        "23" => "Madhya Pradesh",
        "24" => "Gujarat",
        "25" => "Daman & Diu",
        "26" => "Dadra & Nagar Haveli",
        "27" => "Maharashtra",
        "28" => "Andhra Pradesh (Before bifurcation)",
        "29" => "Karnataka",
        "30" => "Goa",
        "31" => "Lakshadweep",
        "32" => "Kerala",
        "33" => "Tamil Nadu",
        "34" => "Puducherry",
        "35" => "Andaman & Nicobar Islands",
        "36" => "Telangana",
        "37" => "Andhra Pradesh (After bifurcation)",
        "38" => "Ladakh",
        "97" => "Other Territory",
        "99" => "Centre Jurisdiction",
        _ => "Unknown State",
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
