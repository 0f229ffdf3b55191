//! # Customer Model
//!
//! The customer record: identity, credential, loyalty tier and an ordered
//! shopping cart.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Customer Operations                              │
//! │                                                                     │
//! │  Menu Action              Operation              State Change       │
//! │  ───────────              ─────────              ────────────       │
//! │                                                                     │
//! │  Pick product ──────────► add_to_cart() ───────► cart.push(item)    │
//! │                                                                     │
//! │  View cart ─────────────► summary() ───────────► (read only)        │
//! │                                                                     │
//! │  Checkout ──────────────► total_cart_price() ──► (read only)        │
//! │                                                                     │
//! │  Login ─────────────────► verify_password() ───► (read only)        │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - `tier` is fixed at creation and never changes afterwards
//! - The cart is append-only during shopping; no duplicate checking
//! - The discounted total is exact integer-öre arithmetic, so repeated
//!   calls can never drift

use crate::money::Money;
use crate::types::{CustomerTier, Product};

// =============================================================================
// Customer
// =============================================================================

/// A registered customer.
///
/// ## Credential Storage
/// The password is kept in plaintext because the store format persists it
/// verbatim (`tierTag,name,password`). This is a documented limitation of
/// the format, not an invitation to log it: user-facing output only ever
/// shows the masked form via [`Customer::summary`].
#[derive(Debug, Clone)]
pub struct Customer {
    name: String,
    password: String,
    tier: CustomerTier,
    cart: Vec<Product>,
}

impl Customer {
    /// Creates a new customer with an empty cart.
    pub fn new(
        name: impl Into<String>,
        password: impl Into<String>,
        tier: CustomerTier,
    ) -> Self {
        Customer {
            name: name.into(),
            password: password.into(),
            tier,
            cart: Vec::new(),
        }
    }

    /// Returns the customer name (unique key within the registry by
    /// convention; uniqueness is not enforced).
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the loyalty tier.
    #[inline]
    pub fn tier(&self) -> CustomerTier {
        self.tier
    }

    /// Returns the stored credential, verbatim.
    ///
    /// Only the store layer should call this; everything user-facing goes
    /// through [`Customer::summary`] which masks it.
    #[inline]
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Checks a login attempt against the stored credential.
    ///
    /// Exact string equality: case-sensitive, no trimming.
    pub fn verify_password(&self, candidate: &str) -> bool {
        self.password == candidate
    }

    /// Appends a product to the cart.
    ///
    /// No duplicate checking: adding the same product twice means buying
    /// it twice.
    pub fn add_to_cart(&mut self, product: Product) {
        self.cart.push(product);
    }

    /// Returns the cart contents in insertion order.
    #[inline]
    pub fn cart(&self) -> &[Product] {
        &self.cart
    }

    /// Calculates the discounted cart total.
    ///
    /// Raw öre sum of the cart, scaled by the tier's discount factor:
    /// Gold ×0.85, Silver ×0.90, Bronze ×0.95. Exact to öre precision.
    ///
    /// ## Example
    /// ```rust
    /// use butik_core::customer::Customer;
    /// use butik_core::money::Money;
    /// use butik_core::types::{CustomerTier, Product};
    ///
    /// let mut ada = Customer::new("Ada", "p1", CustomerTier::Gold);
    /// ada.add_to_cart(Product::new("Mascara", Money::from_ore(20000)));
    /// ada.add_to_cart(Product::new("Läppstift", Money::from_ore(15000)));
    ///
    /// // (200 + 150) × 0.85 = 297.50 kr
    /// assert_eq!(ada.total_cart_price().ore(), 29750);
    /// ```
    pub fn total_cart_price(&self) -> Money {
        let subtotal: Money = self.cart.iter().map(|p| p.price).sum();
        subtotal.apply_percentage_discount(self.tier.discount_bps())
    }

    /// Produces the human-readable one-line account summary.
    ///
    /// The password is masked with one `*` per character; cart items are
    /// comma-joined with their per-item price; the total is the
    /// discounted total. An empty cart renders `Kundvagnen är tom.`
    pub fn summary(&self) -> String {
        let masked = "*".repeat(self.password.chars().count());
        let cart_content = if self.cart.is_empty() {
            "Kundvagnen är tom.".to_string()
        } else {
            self.cart
                .iter()
                .map(|p| format!("{} ({} SEK)", p.name, p.price))
                .collect::<Vec<_>>()
                .join(", ")
        };

        format!(
            "Namn: {}, Lösenord: {}, Kundvagn: [{}], Total: {} SEK",
            self.name,
            masked,
            cart_content,
            self.total_cart_price()
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn mascara() -> Product {
        Product::new("Mascara", Money::from_ore(20000))
    }

    fn lappstift() -> Product {
        Product::new("Läppstift", Money::from_ore(15000))
    }

    #[test]
    fn test_total_is_raw_sum_times_tier_factor() {
        for (tier, expected_ore) in [
            (CustomerTier::Gold, 29750),   // 350 × 0.85
            (CustomerTier::Silver, 31500), // 350 × 0.90
            (CustomerTier::Bronze, 33250), // 350 × 0.95
        ] {
            let mut customer = Customer::new("Test", "pw", tier);
            customer.add_to_cart(mascara());
            customer.add_to_cart(lappstift());
            assert_eq!(customer.total_cart_price().ore(), expected_ore);
        }
    }

    #[test]
    fn test_empty_cart_total_is_zero() {
        let customer = Customer::new("Test", "pw", CustomerTier::Gold);
        assert!(customer.total_cart_price().is_zero());
    }

    #[test]
    fn test_add_to_cart_keeps_order_and_duplicates() {
        let mut customer = Customer::new("Test", "pw", CustomerTier::Bronze);
        customer.add_to_cart(mascara());
        customer.add_to_cart(mascara());
        customer.add_to_cart(lappstift());

        let names: Vec<&str> = customer.cart().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Mascara", "Mascara", "Läppstift"]);
    }

    #[test]
    fn test_verify_password_exact_match_only() {
        let customer = Customer::new("Ada", "Secret1", CustomerTier::Silver);
        assert!(customer.verify_password("Secret1"));
        assert!(!customer.verify_password("secret1")); // case-sensitive
        assert!(!customer.verify_password("Secret1 ")); // no trimming
        assert!(!customer.verify_password(""));
    }

    #[test]
    fn test_summary_masks_password_and_lists_cart() {
        let mut customer = Customer::new("Ada", "p1", CustomerTier::Gold);
        customer.add_to_cart(mascara());
        customer.add_to_cart(lappstift());

        assert_eq!(
            customer.summary(),
            "Namn: Ada, Lösenord: **, Kundvagn: [Mascara (200 SEK), \
             Läppstift (150 SEK)], Total: 297.5 SEK"
        );
    }

    #[test]
    fn test_summary_empty_cart() {
        let customer = Customer::new("Ada", "p1", CustomerTier::Gold);
        assert_eq!(
            customer.summary(),
            "Namn: Ada, Lösenord: **, Kundvagn: [Kundvagnen är tom.], Total: 0 SEK"
        );
    }

    #[test]
    fn test_mask_counts_characters_not_bytes() {
        let customer = Customer::new("Åsa", "lösen", CustomerTier::Bronze);
        assert!(customer.summary().contains("Lösenord: *****,"));
    }
}
