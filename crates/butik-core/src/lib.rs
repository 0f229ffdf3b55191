//! # butik-core: Pure Business Logic for Butik
//!
//! This crate is the **heart** of Butik. It contains all business logic
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                        Butik Architecture                           │
//! │                                                                     │
//! │  ┌─────────────────────────────────────────────────────────────┐    │
//! │  │                   apps/cli (console)                        │    │
//! │  │    Register ──► Log in ──► Shop ──► Checkout ──► Exit       │    │
//! │  └─────────────────────────────┬───────────────────────────────┘    │
//! │                                │                                    │
//! │  ┌─────────────────────────────▼───────────────────────────────┐    │
//! │  │               ★ butik-core (THIS CRATE) ★                   │    │
//! │  │                                                             │    │
//! │  │  ┌─────────┐ ┌──────────┐ ┌──────────┐ ┌──────────┐         │    │
//! │  │  │  money  │ │  types   │ │ customer │ │ currency │         │    │
//! │  │  │  Money  │ │ Product  │ │ Customer │ │ convert  │         │    │
//! │  │  │  (öre)  │ │  Tiers   │ │ Registry │ │  table   │         │    │
//! │  │  └─────────┘ └──────────┘ └──────────┘ └──────────┘         │    │
//! │  │                                                             │    │
//! │  │   NO I/O • NO FILES • NO CONSOLE • PURE FUNCTIONS           │    │
//! │  └─────────────────────────────┬───────────────────────────────┘    │
//! │                                │                                    │
//! │  ┌─────────────────────────────▼───────────────────────────────┐    │
//! │  │                butik-store (Persistence Layer)              │    │
//! │  │          Flat text file: tierTag,name,password              │    │
//! │  └─────────────────────────────────────────────────────────────┘    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer öre arithmetic (no floating point!)
//! - [`types`] - Domain types (Product, CustomerTier, catalog)
//! - [`customer`] - Customer record with cart and tier discount
//! - [`registry`] - Ordered in-memory customer collection
//! - [`currency`] - Fixed-rate display conversion
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: File system, console and network access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in öre (i64) to avoid float errors
//! 4. **Fixed Tiers**: A customer's tier never changes after creation
//!
//! ## Example Usage
//!
//! ```rust
//! use butik_core::customer::Customer;
//! use butik_core::money::Money;
//! use butik_core::types::{CustomerTier, Product};
//!
//! let mut ada = Customer::new("Ada", "p1", CustomerTier::Gold);
//! ada.add_to_cart(Product::new("Mascara", Money::from_ore(20000)));
//! ada.add_to_cart(Product::new("Läppstift", Money::from_ore(15000)));
//!
//! // (200 + 150) SEK × 0.85 = 297.50 SEK, exact
//! assert_eq!(ada.total_cart_price(), Money::from_ore(29750));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod currency;
pub mod customer;
pub mod error;
pub mod money;
pub mod registry;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use butik_core::Money` instead of
// `use butik_core::money::Money`

pub use currency::convert;
pub use customer::Customer;
pub use error::UnknownTierTag;
pub use money::Money;
pub use registry::CustomerRegistry;
pub use types::{default_catalog, CustomerTier, Product};
