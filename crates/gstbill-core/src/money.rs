//! # Money Module
//!
//! Provides the `Money` type for handling rupee amounts safely.
//!
//! ## Why Integer Paise?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  On a GST invoice the printed SGST + CGST must add up to the printed    │
//! │  grand total, to the paisa.                                             │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Paise (1 rupee = 100 paise)                      │
//! │    ₹1,24,999.00 = 12_499_900 paise                                      │
//! │    Every sum on the invoice is an exact integer sum                     │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use gstbill_core::money::Money;
//!
//! let price = Money::from_rupees(79_900);
//! let two = price * 2;
//! assert_eq!(two.rupees(), 159_800);
//! assert_eq!(two.to_string(), "₹159,800.00");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

use crate::types::TaxRate;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a rupee amount in paise (the smallest currency unit).
///
/// ## Design Decisions
/// - **i64 (signed)**: Negative values pass through arithmetic untouched;
///   rejecting them is the validator's job, not the arithmetic's
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Serializes as the raw paise count** so renderers can do layout math
///
/// ## Where Money is Used
/// ```text
/// Product.price ──► InvoiceLineItem.unit_price ──► amount ──► sgst / cgst
///                                                     │
///                                                     ▼
///                 Invoice.subtotal / total_sgst / total_cgst / grand_total
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from paise.
    ///
    /// ## Example
    /// ```rust
    /// use gstbill_core::money::Money;
    ///
    /// let price = Money::from_paise(1099); // ₹10.99
    /// assert_eq!(price.paise(), 1099);
    /// ```
    #[inline]
    pub const fn from_paise(paise: i64) -> Self {
        Money(paise)
    }

    /// Creates a Money value from whole rupees.
    #[inline]
    pub const fn from_rupees(rupees: i64) -> Self {
        Money(rupees * 100)
    }

    /// Creates a Money value from rupees and paise.
    ///
    /// ## Note
    /// For negative amounts, only the rupee part should be negative.
    /// `from_rupees_paise(-5, 50)` = -₹5.50
    #[inline]
    pub const fn from_rupees_paise(rupees: i64, paise: i64) -> Self {
        if rupees < 0 {
            Money(rupees * 100 - paise)
        } else {
            Money(rupees * 100 + paise)
        }
    }

    /// Returns the value in paise.
    #[inline]
    pub const fn paise(&self) -> i64 {
        self.0
    }

    /// Returns the whole rupee portion, truncated toward zero.
    ///
    /// ## Example
    /// ```rust
    /// use gstbill_core::money::Money;
    ///
    /// assert_eq!(Money::from_paise(472_099).rupees(), 4720);
    /// assert_eq!(Money::from_paise(-550).rupees(), -5);
    /// ```
    #[inline]
    pub const fn rupees(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the paise portion (always 0-99).
    #[inline]
    pub const fn paise_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Calculates tax at `rate`, rounded half up to the nearest paisa.
    ///
    /// ## Implementation
    /// Integer math: `(paise * bps + 5000) / 10000`.
    ///
    /// ## Example
    /// ```rust
    /// use gstbill_core::money::Money;
    /// use gstbill_core::types::TaxRate;
    ///
    /// let amount = Money::from_rupees(2000);
    /// let tax = amount.calculate_tax(TaxRate::from_bps(1800));
    /// assert_eq!(tax, Money::from_rupees(360));
    /// ```
    pub fn calculate_tax(&self, rate: TaxRate) -> Money {
        // i128 keeps crore-sized amounts times basis points in range
        let tax_paise = (self.0 as i128 * rate.bps() as i128 + 5_000) / 10_000;
        Money::from_paise(tax_paise as i64)
    }

    /// Calculates half of the tax at `rate`, rounded half up to the nearest
    /// paisa.
    ///
    /// Rounding the half (rather than halving a rounded tax) keeps the two
    /// GST components identical even when the combined tax is an odd number
    /// of paise.
    ///
    /// ## Example
    /// ```rust
    /// use gstbill_core::money::Money;
    /// use gstbill_core::types::TaxRate;
    ///
    /// let amount = Money::from_rupees(2000);
    /// let half = amount.calculate_half_tax(TaxRate::from_bps(1800));
    /// assert_eq!(half, Money::from_rupees(180));
    /// ```
    pub fn calculate_half_tax(&self, rate: TaxRate) -> Money {
        let half_paise = (self.0 as i128 * rate.bps() as i128 + 10_000) / 20_000;
        Money::from_paise(half_paise as i64)
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use gstbill_core::money::Money;
    ///
    /// let unit_price = Money::from_rupees(1000);
    /// assert_eq!(unit_price.multiply_quantity(2), Money::from_rupees(2000));
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Renders `₹1,234.56`: comma-grouped thousands, two decimals.
///
/// This is the one formatter behind every `*_formatted` field of the invoice
/// snapshot.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let digits = self.rupees().unsigned_abs().to_string();

        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }

        write!(f, "{}₹{}.{:02}", sign, grouped, self.paise_part())
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by quantity.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_paise() {
        let money = Money::from_paise(1099);
        assert_eq!(money.paise(), 1099);
        assert_eq!(money.rupees(), 10);
        assert_eq!(money.paise_part(), 99);
    }

    #[test]
    fn test_from_rupees_paise() {
        assert_eq!(Money::from_rupees_paise(10, 99).paise(), 1099);
        assert_eq!(Money::from_rupees_paise(-5, 50).paise(), -550);
        assert_eq!(Money::from_rupees(4720).paise(), 472_000);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_paise(1099).to_string(), "₹10.99");
        assert_eq!(Money::from_rupees(4720).to_string(), "₹4,720.00");
        assert_eq!(Money::from_rupees(124_999).to_string(), "₹124,999.00");
        assert_eq!(Money::from_rupees(1_000_000).to_string(), "₹1,000,000.00");
        assert_eq!(Money::from_paise(-550).to_string(), "-₹5.50");
        assert_eq!(Money::zero().to_string(), "₹0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_rupees(1000);
        let b = Money::from_rupees(500);

        assert_eq!((a + b).rupees(), 1500);
        assert_eq!((a - b).rupees(), 500);
        assert_eq!((a * 3).rupees(), 3000);

        let mut c = a;
        c += b;
        c -= Money::from_rupees(100);
        assert_eq!(c.rupees(), 1400);
    }

    #[test]
    fn test_sum() {
        let amounts = [Money::from_rupees(1), Money::from_paise(50), Money::from_rupees(2)];
        let by_ref: Money = amounts.iter().sum();
        let by_value: Money = amounts.into_iter().sum();
        assert_eq!(by_ref, Money::from_paise(350));
        assert_eq!(by_value, by_ref);
    }

    #[test]
    fn test_tax_calculation_basic() {
        let amount = Money::from_rupees(2000);
        let tax = amount.calculate_tax(TaxRate::from_bps(1800));
        assert_eq!(tax, Money::from_rupees(360));
    }

    #[test]
    fn test_tax_calculation_with_rounding() {
        // ₹0.05 at 18% = 0.9 paise → 1 paisa
        let amount = Money::from_paise(5);
        assert_eq!(amount.calculate_tax(TaxRate::from_bps(1800)).paise(), 1);
    }

    #[test]
    fn test_half_tax_rounds_the_half() {
        // ₹0.25 at 18% = 4.5 paise; each half is 2.25 → 2 paise
        let amount = Money::from_paise(25);
        assert_eq!(amount.calculate_half_tax(TaxRate::from_bps(1800)).paise(), 2);
        // ₹0.50 at 18% = 9 paise; each half is 4.5 → 5 paise
        let amount = Money::from_paise(50);
        assert_eq!(amount.calculate_half_tax(TaxRate::from_bps(1800)).paise(), 5);
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());
        assert_eq!(Money::default(), zero);

        assert!(Money::from_paise(100).is_positive());
        assert!(Money::from_paise(-100).is_negative());
    }

    #[test]
    fn test_multiply_quantity() {
        let unit_price = Money::from_rupees(1000);
        assert_eq!(unit_price.multiply_quantity(2), Money::from_rupees(2000));
    }
}
