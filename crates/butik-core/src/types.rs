//! # Domain Types
//!
//! Core domain types used throughout Butik.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                │
//! │                                                                     │
//! │  ┌─────────────────┐   ┌─────────────────────────────────────┐      │
//! │  │    Product      │   │          CustomerTier               │      │
//! │  │  ─────────────  │   │  ─────────────────────────────────  │      │
//! │  │  name           │   │  Gold   ×0.85  "GoldCustomer"       │      │
//! │  │  price (öre)    │   │  Silver ×0.90  "SilverCustomer"     │      │
//! │  └─────────────────┘   │  Bronze ×0.95  "BronzeCustomer"     │      │
//! │                        └─────────────────────────────────────┘      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Tier Design
//! There is ONE concrete `Customer` type carrying a tier tag. The tiers
//! differ only in their discount factor, which is a pure lookup on the
//! tag - no type hierarchy, no virtual dispatch.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::UnknownTierTag;
use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A product available for sale.
///
/// Immutable value type: construct it, price it, display it. Ownership is
/// per-cart; carts hold their own copies, so there is no shared mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Display name shown in the catalog and on the cart summary.
    pub name: String,

    /// Price in öre (smallest currency unit).
    pub price: Money,
}

impl Product {
    /// Creates a new product.
    pub fn new(name: impl Into<String>, price: Money) -> Self {
        Product {
            name: name.into(),
            price,
        }
    }
}

/// Display format: `"{name} - {price} SEK"`.
impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} SEK", self.name, self.price)
    }
}

/// Returns the fixed three-item shop catalog.
///
/// The catalog is session-only and not persisted; prices are in SEK.
pub fn default_catalog() -> Vec<Product> {
    vec![
        Product::new("Mascara", Money::from_ore(20000)),
        Product::new("Läppstift", Money::from_ore(15000)),
        Product::new("Fondation", Money::from_ore(10000)),
    ]
}

// =============================================================================
// Customer Tier
// =============================================================================

/// Loyalty tier of a customer.
///
/// Fixed at creation and never changes afterwards. The tier determines
/// exactly one thing: the discount factor applied to the raw cart sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CustomerTier {
    /// 15% discount (×0.85).
    Gold,
    /// 10% discount (×0.90).
    Silver,
    /// 5% discount (×0.95).
    Bronze,
}

/// Tier lookup table: (tier, store tag, discount in basis points).
///
/// The tag strings are written verbatim to the customer store and MUST
/// stay byte-for-byte stable for file compatibility.
const TIER_TABLE: [(CustomerTier, &str, u32); 3] = [
    (CustomerTier::Gold, "GoldCustomer", 1500),
    (CustomerTier::Silver, "SilverCustomer", 1000),
    (CustomerTier::Bronze, "BronzeCustomer", 500),
];

impl CustomerTier {
    /// Returns the discount in basis points (1500 = 15% off).
    #[inline]
    pub fn discount_bps(&self) -> u32 {
        TIER_TABLE
            .iter()
            .find(|(tier, _, _)| tier == self)
            .map(|(_, _, bps)| *bps)
            .unwrap_or(0)
    }

    /// Returns the literal tag written to the customer store.
    ///
    /// ## Example
    /// ```rust
    /// use butik_core::types::CustomerTier;
    ///
    /// assert_eq!(CustomerTier::Gold.tag(), "GoldCustomer");
    /// ```
    #[inline]
    pub fn tag(&self) -> &'static str {
        TIER_TABLE
            .iter()
            .find(|(tier, _, _)| tier == self)
            .map(|(_, tag, _)| *tag)
            .unwrap_or("BronzeCustomer")
    }

    /// Parses a store tag back into a tier.
    ///
    /// ## Errors
    /// Returns [`UnknownTierTag`] for any tag not in the table. The store
    /// layer uses this to skip unrecognized records without failing the
    /// whole load.
    ///
    /// ## Example
    /// ```rust
    /// use butik_core::types::CustomerTier;
    ///
    /// assert_eq!(
    ///     CustomerTier::from_tag("SilverCustomer").unwrap(),
    ///     CustomerTier::Silver
    /// );
    /// assert!(CustomerTier::from_tag("PlatinumCustomer").is_err());
    /// ```
    pub fn from_tag(tag: &str) -> Result<Self, UnknownTierTag> {
        TIER_TABLE
            .iter()
            .find(|(_, t, _)| *t == tag)
            .map(|(tier, _, _)| *tier)
            .ok_or_else(|| UnknownTierTag(tag.to_string()))
    }
}

impl fmt::Display for CustomerTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CustomerTier::Gold => write!(f, "Gold"),
            CustomerTier::Silver => write!(f, "Silver"),
            CustomerTier::Bronze => write!(f, "Bronze"),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_display() {
        let product = Product::new("Mascara", Money::from_ore(20000));
        assert_eq!(product.to_string(), "Mascara - 200 SEK");
    }

    #[test]
    fn test_default_catalog() {
        let catalog = default_catalog();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog[0].name, "Mascara");
        assert_eq!(catalog[0].price.ore(), 20000);
        assert_eq!(catalog[1].name, "Läppstift");
        assert_eq!(catalog[1].price.ore(), 15000);
        assert_eq!(catalog[2].name, "Fondation");
        assert_eq!(catalog[2].price.ore(), 10000);
    }

    #[test]
    fn test_tier_discount_bps() {
        assert_eq!(CustomerTier::Gold.discount_bps(), 1500);
        assert_eq!(CustomerTier::Silver.discount_bps(), 1000);
        assert_eq!(CustomerTier::Bronze.discount_bps(), 500);
    }

    #[test]
    fn test_tier_tags_are_stable() {
        // These literals are on disk in existing stores; never change them.
        assert_eq!(CustomerTier::Gold.tag(), "GoldCustomer");
        assert_eq!(CustomerTier::Silver.tag(), "SilverCustomer");
        assert_eq!(CustomerTier::Bronze.tag(), "BronzeCustomer");
    }

    #[test]
    fn test_tier_tag_round_trip() {
        for tier in [
            CustomerTier::Gold,
            CustomerTier::Silver,
            CustomerTier::Bronze,
        ] {
            assert_eq!(CustomerTier::from_tag(tier.tag()).unwrap(), tier);
        }
    }

    #[test]
    fn test_unknown_tag_is_an_error() {
        let err = CustomerTier::from_tag("PlatinumCustomer").unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown customer tier tag: PlatinumCustomer"
        );
        // Tags are case-sensitive
        assert!(CustomerTier::from_tag("goldcustomer").is_err());
    }
}
