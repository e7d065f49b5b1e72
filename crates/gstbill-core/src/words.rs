//! # Amount in Words
//!
//! Renders rupee amounts in English words using the Indian numbering system.
//!
//! ```text
//! 1,24,999  ──►  One Lakh │ Twenty Four Thousand │ Nine Hundred and Ninety Nine
//!                 lakh       thousand                 below a thousand
//! ```
//!
//! Groups are taken greedily: crore (1,00,00,000), lakh (1,00,000),
//! thousand (1,000), then whatever is left below a thousand. A group whose
//! quotient is zero contributes nothing.

const UNITS: [&str; 20] = [
    "", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten",
    "Eleven", "Twelve", "Thirteen", "Fourteen", "Fifteen", "Sixteen", "Seventeen",
    "Eighteen", "Nineteen",
];

const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

const CRORE: u64 = 10_000_000;
const LAKH: u64 = 100_000;
const THOUSAND: u64 = 1_000;

/// Converts `n` to words, e.g. `"One Lakh Twenty Four Thousand"`.
///
/// `0` is `"Zero"`. Crore counts above 999 are themselves spelled out with
/// the full converter (`"One Thousand Crore"`).
///
/// ## Example
/// ```rust
/// use gstbill_core::words::to_words;
///
/// assert_eq!(to_words(0), "Zero");
/// assert_eq!(to_words(4720), "Four Thousand Seven Hundred and Twenty");
/// assert_eq!(to_words(10_000_000), "One Crore");
/// ```
pub fn to_words(n: u64) -> String {
    if n == 0 {
        return "Zero".to_string();
    }

    let mut parts: Vec<String> = Vec::with_capacity(4);
    let mut rest = n;

    let crores = rest / CRORE;
    if crores > 0 {
        parts.push(format!("{} Crore", to_words(crores)));
        rest %= CRORE;
    }

    for (size, name) in [(LAKH, "Lakh"), (THOUSAND, "Thousand")] {
        let count = rest / size;
        if count > 0 {
            parts.push(format!("{} {}", below_thousand(count), name));
            rest %= size;
        }
    }

    if rest > 0 {
        parts.push(below_thousand(rest));
    }

    parts.join(" ")
}

/// Converts a whole rupee amount to invoice wording: `"<words> Rupees Only"`.
///
/// ## Example
/// ```rust
/// use gstbill_core::words::rupees_in_words;
///
/// assert_eq!(rupees_in_words(0), "Zero Rupees Only");
/// assert_eq!(rupees_in_words(100), "One Hundred Rupees Only");
/// ```
pub fn rupees_in_words(n: u64) -> String {
    format!("{} Rupees Only", to_words(n))
}

/// Words for 1-999. Callers never pass 0.
fn below_thousand(n: u64) -> String {
    // n < 1000 is guaranteed by the callers' modulo arithmetic
    let n = n as usize;
    match n {
        0..=19 => UNITS[n].to_string(),
        20..=99 => {
            let units = n % 10;
            if units == 0 {
                TENS[n / 10].to_string()
            } else {
                format!("{} {}", TENS[n / 10], UNITS[units])
            }
        }
        _ => {
            let hundreds = format!("{} Hundred", UNITS[n / 100]);
            let rest = n % 100;
            if rest == 0 {
                hundreds
            } else {
                format!("{} and {}", hundreds, below_thousand(rest as u64))
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
