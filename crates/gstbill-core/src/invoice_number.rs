//! # Invoice Numbers
//!
//! Invoice numbers look like `INV-20240315-7QK2ZD`: the issue date followed
//! by six random characters from `A-Z0-9`.
//!
//! The random part is not a uniqueness guarantee. 36^6 (about 2.2 billion)
//! suffixes per day make a collision within a single shop negligible, which
//! is all this numbering promises.

use chrono::{Local, NaiveDate};
use rand::Rng;

const PREFIX: &str = "INV";
const SUFFIX_LEN: usize = 6;
const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Generates an invoice number for today (local date).
pub fn next_invoice_number() -> String {
    invoice_number_for(Local::now().date_naive(), &mut rand::thread_rng())
}

/// Generates an invoice number for `date`, drawing the suffix from `rng`.
///
/// ## Example
/// ```rust
/// use chrono::NaiveDate;
/// use gstbill_core::invoice_number::{invoice_number_for, is_invoice_number};
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
/// let number = invoice_number_for(date, &mut rand::thread_rng());
/// assert!(number.starts_with("INV-20240315-"));
/// assert!(is_invoice_number(&number));
/// ```
pub fn invoice_number_for<R: Rng + ?Sized>(date: NaiveDate, rng: &mut R) -> String {
    let suffix: String = (0..SUFFIX_LEN)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect();
    format!("{}-{}-{}", PREFIX, date.format("%Y%m%d"), suffix)
}

/// Checks that `s` has the `INV-<YYYYMMDD>-<6 × [A-Z0-9]>` shape and that
/// the date part is a real calendar date.
pub fn is_invoice_number(s: &str) -> bool {
    let mut parts = s.split('-');
    let (Some(prefix), Some(date), Some(suffix), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return false;
    };

    prefix == PREFIX
        && date.len() == 8
        && date.bytes().all(|b| b.is_ascii_digit())
        && NaiveDate::parse_from_str(date, "%Y%m%d").is_ok()
        && suffix.len() == SUFFIX_LEN
        && suffix.bytes().all(|b| ALPHABET.contains(&b))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn march_15() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    #[test]
    fn test_number_shape() {
        let number = invoice_number_for(march_15(), &mut StdRng::seed_from_u64(7));
        assert_eq!(number.len(), "INV-20240315-XXXXXX".len());
        assert!(number.starts_with("INV-20240315-"));
        assert!(is_invoice_number(&number));
    }

    #[test]
    fn test_seeded_rng_is_deterministic() {
        let a = invoice_number_for(march_15(), &mut StdRng::seed_from_u64(42));
        let b = invoice_number_for(march_15(), &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_next_uses_today() {
        let number = next_invoice_number();
        let today = Local::now().date_naive().format("%Y%m%d").to_string();
        assert!(is_invoice_number(&number));
        // Tolerate the test straddling midnight
        let yesterday = (Local::now().date_naive() - chrono::Duration::days(1))
            .format("%Y%m%d")
            .to_string();
        assert!(number[4..12] == today || number[4..12] == yesterday);
    }

    #[test]
    fn test_consecutive_numbers_differ() {
        let mut rng = StdRng::seed_from_u64(1);
        let numbers: std::collections::HashSet<String> = (0..1_000)
            .map(|_| invoice_number_for(march_15(), &mut rng))
            .collect();
        assert_eq!(numbers.len(), 1_000);
    }

    #[test]
    fn test_rejects_malformed_numbers() {
        assert!(is_invoice_number("INV-20240315-ABC123"));
        assert!(!is_invoice_number("INV-20240315-abc123"));
        assert!(!is_invoice_number("INV-20240315-ABC12"));
        assert!(!is_invoice_number("INV-20241315-ABC123"));
        assert!(!is_invoice_number("BIL-20240315-ABC123"));
        assert!(!is_invoice_number("INV-2024031-ABC1234"));
        assert!(!is_invoice_number("INV-20240315-ABC123-X"));
        assert!(!is_invoice_number(""));
    }
}
