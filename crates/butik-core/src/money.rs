//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                         │
//! │                                                                     │
//! │  In binary floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                       │
//! │                                                                     │
//! │  A Gold cart of 350 kr at ×0.85 must be EXACTLY 297.50 kr,          │
//! │  every time it is computed, saved and recomputed.                   │
//! │                                                                     │
//! │  OUR SOLUTION: Integer Öre                                          │
//! │    350 kr = 35000 öre; 35000 × 8500 / 10000 = 29750 öre             │
//! │    No drift across repeated calls or persistence round-trips.       │
//! │                                                                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use butik_core::money::Money;
//!
//! // Create from öre (preferred)
//! let price = Money::from_ore(20000); // 200 kr
//!
//! // Arithmetic operations
//! let total = price + Money::from_ore(15000); // 350 kr
//!
//! // NEVER do this:
//! // let bad = Money::from_float(199.99); // NO SUCH METHOD EXISTS!
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (öre for SEK).
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values for corrections and refunds
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support (serializes as a plain integer)
///
/// ## Where Money is Used
/// ```text
/// Product.price ──► cart sum ──► tier discount ──► currency conversion
///
/// EVERY monetary value in the system flows through this type
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from öre (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use butik_core::money::Money;
    ///
    /// let price = Money::from_ore(20000); // Represents 200 kr
    /// assert_eq!(price.ore(), 20000);
    /// ```
    #[inline]
    pub const fn from_ore(ore: i64) -> Self {
        Money(ore)
    }

    /// Creates a Money value from major and minor units (kronor and öre).
    ///
    /// ## Example
    /// ```rust
    /// use butik_core::money::Money;
    ///
    /// let price = Money::from_kronor_ore(297, 50); // 297.50 kr
    /// assert_eq!(price.ore(), 29750);
    /// ```
    ///
    /// ## Note
    /// For negative amounts, only the major unit should be negative.
    /// `from_kronor_ore(-5, 50)` = -5.50 kr, not -4.50 kr
    #[inline]
    pub const fn from_kronor_ore(kronor: i64, ore: i64) -> Self {
        if kronor < 0 {
            Money(kronor * 100 - ore)
        } else {
            Money(kronor * 100 + ore)
        }
    }

    /// Returns the value in öre (smallest currency unit).
    #[inline]
    pub const fn ore(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (kronor) portion.
    #[inline]
    pub const fn kronor(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (öre) portion (always 0-99).
    #[inline]
    pub const fn ore_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    ///
    /// ## Example
    /// ```rust
    /// use butik_core::money::Money;
    ///
    /// let zero = Money::zero();
    /// assert!(zero.is_zero());
    /// ```
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Scales the amount by a factor given in basis points (1/10000).
    ///
    /// ## Implementation
    /// Integer math with half-up rounding: `(amount * bps + 5000) / 10000`.
    /// Uses i128 internally to prevent overflow on large amounts.
    ///
    /// ## Example
    /// ```rust
    /// use butik_core::money::Money;
    ///
    /// let total = Money::from_ore(10000); // 100 kr
    /// assert_eq!(total.scale_bps(1100).ore(), 1100); // ×0.11 → 11 kr
    /// ```
    pub fn scale_bps(&self, bps: u32) -> Money {
        let scaled = (self.0 as i128 * bps as i128 + 5000) / 10000;
        Money::from_ore(scaled as i64)
    }

    /// Applies a percentage discount and returns the discounted amount.
    ///
    /// ## Arguments
    /// * `discount_bps` - Discount in basis points (1500 = 15%)
    ///
    /// ## Example
    /// ```rust
    /// use butik_core::money::Money;
    ///
    /// let subtotal = Money::from_ore(35000); // 350 kr
    /// let discounted = subtotal.apply_percentage_discount(1500); // Gold, 15% off
    /// assert_eq!(discounted.ore(), 29750); // 297.50 kr
    /// ```
    pub fn apply_percentage_discount(&self, discount_bps: u32) -> Money {
        // Calculate discount amount, then subtract
        let discount_amount = (self.0 as i128 * discount_bps as i128 + 5000) / 10000;
        Money::from_ore(self.0 - discount_amount as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation renders like a decimal amount with trailing
/// zeros trimmed, matching the receipt rendering of the store:
/// `200`, `297.5`, `10.99`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let kronor = self.kronor().abs();
        let ore = self.ore_part();
        if ore == 0 {
            write!(f, "{}{}", sign, kronor)
        } else if ore % 10 == 0 {
            write!(f, "{}{}.{}", sign, kronor, ore / 10)
        } else {
            write!(f, "{}{}.{:02}", sign, kronor, ore)
        }
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by i64 (for quantity calculations).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

/// Summation of Money values (cart subtotals).
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_ore() {
        let money = Money::from_ore(10099);
        assert_eq!(money.ore(), 10099);
        assert_eq!(money.kronor(), 100);
        assert_eq!(money.ore_part(), 99);
    }

    #[test]
    fn test_from_kronor_ore() {
        let money = Money::from_kronor_ore(297, 50);
        assert_eq!(money.ore(), 29750);

        let negative = Money::from_kronor_ore(-5, 50);
        assert_eq!(negative.ore(), -550);
    }

    #[test]
    fn test_display_trims_trailing_zeros() {
        assert_eq!(format!("{}", Money::from_ore(20000)), "200");
        assert_eq!(format!("{}", Money::from_ore(29750)), "297.5");
        assert_eq!(format!("{}", Money::from_ore(1099)), "10.99");
        assert_eq!(format!("{}", Money::from_ore(-550)), "-5.5");
        assert_eq!(format!("{}", Money::from_ore(0)), "0");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_ore(1000);
        let b = Money::from_ore(500);

        assert_eq!((a + b).ore(), 1500);
        assert_eq!((a - b).ore(), 500);
        let result: Money = a * 3;
        assert_eq!(result.ore(), 3000);
    }

    #[test]
    fn test_sum() {
        let total: Money = [20000, 15000, 10000]
            .iter()
            .map(|&ore| Money::from_ore(ore))
            .sum();
        assert_eq!(total.ore(), 45000);

        let empty: Money = std::iter::empty::<Money>().sum();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_scale_bps() {
        // 100 kr × 0.11 = 11 kr exactly
        let amount = Money::from_ore(10000);
        assert_eq!(amount.scale_bps(1100).ore(), 1100);
        // identity scale
        assert_eq!(amount.scale_bps(10000).ore(), 10000);
    }

    #[test]
    fn test_percentage_discount() {
        let subtotal = Money::from_ore(35000); // 350 kr
        let discounted = subtotal.apply_percentage_discount(1500); // 15%
        assert_eq!(discounted.ore(), 29750); // 297.50 kr, exact

        // Repeated application of the same discount never drifts
        let again = subtotal.apply_percentage_discount(1500);
        assert_eq!(discounted, again);
    }

    #[test]
    fn test_serializes_as_plain_integer() {
        let price = Money::from_ore(20000);
        assert_eq!(serde_json::to_string(&price).unwrap(), "20000");
        let back: Money = serde_json::from_str("20000").unwrap();
        assert_eq!(back, price);
    }
}
