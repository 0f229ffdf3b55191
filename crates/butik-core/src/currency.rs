//! # Currency Conversion
//!
//! Display-only conversion of checkout totals from SEK into a chosen
//! currency.
//!
//! ## Conversion Table
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │  Code       Factor      100 SEK becomes              │
//! │  ────       ──────      ────────────────             │
//! │  USD        ×0.11       11 USD                       │
//! │  EUR        ×0.10       10 EUR                       │
//! │  (other)    ×1.00       100 (unchanged, incl. SEK)   │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! Rates are fixed constants; live rate fetching is out of scope. The
//! conversion never touches the cart or the persisted store.

use crate::money::Money;

/// Fixed exchange rates in basis points of the source amount.
const EXCHANGE_RATES: [(&str, u32); 2] = [("USD", 1100), ("EUR", 1000)];

/// Converts an amount for display in the given currency.
///
/// Unknown codes (including `SEK` itself) pass the amount through
/// unchanged. Pure function: no state, no side effects.
///
/// ## Example
/// ```rust
/// use butik_core::currency::convert;
/// use butik_core::money::Money;
///
/// let total = Money::from_ore(10000); // 100 SEK
/// assert_eq!(convert(total, "USD").ore(), 1100); // 11 USD
/// assert_eq!(convert(total, "SEK").ore(), 10000); // unchanged
/// ```
pub fn convert(amount: Money, code: &str) -> Money {
    match EXCHANGE_RATES.iter().find(|(c, _)| *c == code) {
        Some((_, bps)) => amount.scale_bps(*bps),
        None => amount,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversion_table() {
        let hundred = Money::from_ore(10000);
        assert_eq!(convert(hundred, "USD").ore(), 1100); // 11
        assert_eq!(convert(hundred, "EUR").ore(), 1000); // 10
        assert_eq!(convert(hundred, "SEK").ore(), 10000); // 100
        assert_eq!(convert(hundred, "XYZ").ore(), 10000); // passthrough
    }

    #[test]
    fn test_codes_are_case_sensitive() {
        // "usd" is not a known code, so it falls through unchanged
        let hundred = Money::from_ore(10000);
        assert_eq!(convert(hundred, "usd"), hundred);
    }

    #[test]
    fn test_discounted_total_converts_exactly() {
        // Gold cart of 350 kr → 297.50 kr → 32.725 USD rounds to 32.73
        let total = Money::from_ore(29750);
        assert_eq!(convert(total, "USD").ore(), 3273);
    }

    #[test]
    fn test_zero_converts_to_zero() {
        assert!(convert(Money::zero(), "USD").is_zero());
        assert!(convert(Money::zero(), "EUR").is_zero());
    }
}
