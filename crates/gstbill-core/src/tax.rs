//! # GST Split
//!
//! Splits a combined GST rate into its two equal components.
//!
//! ```text
//! base ₹2,000.00 at 18%
//!      │
//!      ▼
//! split() ──► SGST ₹180.00 (9%)
//!        ├──► CGST ₹180.00 (9%)
//!        └──► total ₹2,360.00
//! ```
//!
//! Intra-state sales carry State GST and Central GST in equal halves, so the
//! two components are always the same amount. Negative bases are not
//! rejected here; they pass through the arithmetic unchanged.

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::types::TaxRate;

/// Combined GST rate for handsets (18%).
pub const GST_RATE: TaxRate = TaxRate::from_bps(1800);

/// State component of [`GST_RATE`].
pub const SGST_RATE: TaxRate = TaxRate::from_bps(900);

/// Central component of [`GST_RATE`].
pub const CGST_RATE: TaxRate = TaxRate::from_bps(900);

/// Result of splitting tax on a base amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GstSplit {
    pub sgst: Money,
    pub cgst: Money,
    /// Base plus both components.
    pub total: Money,
}

impl GstSplit {
    /// Combined tax (`sgst + cgst`).
    #[inline]
    pub fn tax(&self) -> Money {
        self.sgst + self.cgst
    }
}

/// Splits the tax on `base` at `combined` into equal SGST and CGST halves.
///
/// Each half is rounded to the paisa on its own, so the combined tax is
/// within one paisa of `base * rate / 100`.
///
/// ## Example
/// ```rust
/// use gstbill_core::money::Money;
/// use gstbill_core::tax::{split, GST_RATE};
///
/// let split = split(Money::from_rupees(2000), GST_RATE);
/// assert_eq!(split.sgst, Money::from_rupees(180));
/// assert_eq!(split.cgst, Money::from_rupees(180));
/// assert_eq!(split.total, Money::from_rupees(2360));
/// ```
pub fn split(base: Money, combined: TaxRate) -> GstSplit {
    let half = base.calculate_half_tax(combined);
    GstSplit {
        sgst: half,
        cgst: half,
        total: base + half + half,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_split_standard_rate() {
        let result = split(Money::from_rupees(2000), GST_RATE);
        assert_eq!(result.sgst, Money::from_rupees(180));
        assert_eq!(result.cgst, Money::from_rupees(180));
        assert_eq!(result.tax(), Money::from_rupees(360));
        assert_eq!(result.total, Money::from_rupees(2360));
    }

    #[test]
    fn test_component_rates_add_up() {
        assert_eq!(SGST_RATE + CGST_RATE, GST_RATE);
    }

    #[test]
    fn test_split_zero_base_and_zero_rate() {
        let zero_base = split(Money::zero(), GST_RATE);
        assert_eq!(zero_base.tax(), Money::zero());
        assert_eq!(zero_base.total, Money::zero());

        let zero_rate = split(Money::from_rupees(500), TaxRate::zero());
        assert_eq!(zero_rate.tax(), Money::zero());
        assert_eq!(zero_rate.total, Money::from_rupees(500));
    }

    #[test]
    fn test_split_negative_base_passes_through() {
        let base = Money::from_rupees(-2000);
        let result = split(base, GST_RATE);
        assert!(result.sgst.is_negative());
        assert_eq!(result.sgst, result.cgst);
        assert_eq!(result.total, base + result.sgst + result.cgst);
    }

    #[test]
    fn test_split_odd_paise_keeps_halves_equal() {
        // ₹0.25 at 18% is 4.5 paise of tax; halves stay identical
        let result = split(Money::from_paise(25), GST_RATE);
        assert_eq!(result.sgst, result.cgst);
        assert_eq!(result.total, Money::from_paise(29));
    }

    proptest! {
        /// Halves are equal, total is base plus both halves, and the combined
        /// tax is within one paisa of the exact rate applied to the base.
        #[test]
        fn split_laws(paise in 0i64..10_000_000_000, bps in 0u32..=10_000) {
            let base = Money::from_paise(paise);
            let result = split(base, TaxRate::from_bps(bps));

            prop_assert_eq!(result.sgst, result.cgst);
            prop_assert_eq!(result.total, base + result.sgst + result.cgst);

            let exact_times_10k = paise as i128 * bps as i128;
            let tax_times_10k = result.tax().paise() as i128 * 10_000;
            prop_assert!((tax_times_10k - exact_times_10k).abs() <= 10_000);
        }
    }
}
