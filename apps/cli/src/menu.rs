//! # Menu Choice Parsing
//!
//! Pure parsing of the numeric menu choices, kept out of the interactive
//! loop so every fallback rule is unit-testable without stdin.
//!
//! ## Fallback Rules
//! ```text
//! Menu              Invalid input behaves as
//! ────              ────────────────────────
//! Main menu         reprompt (no action)
//! Customer menu     reprompt (no action)
//! Tier choice       Bronze, with a printed warning
//! Currency choice   EUR (the historical 1/2/else mapping)
//! Product choice    reprompt with "Felaktigt val."
//! ```

use butik_core::CustomerTier;

/// Main menu actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainChoice {
    Register,
    Login,
    Exit,
}

/// Parses the main menu choice. Unknown input means "ask again".
pub fn parse_main_choice(input: &str) -> Option<MainChoice> {
    match input.trim() {
        "1" => Some(MainChoice::Register),
        "2" => Some(MainChoice::Login),
        "3" => Some(MainChoice::Exit),
        _ => None,
    }
}

/// Post-login menu actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomerChoice {
    Shop,
    ViewCart,
    Checkout,
    Logout,
}

/// Parses the post-login menu choice. Unknown input means "ask again".
pub fn parse_customer_choice(input: &str) -> Option<CustomerChoice> {
    match input.trim() {
        "1" => Some(CustomerChoice::Shop),
        "2" => Some(CustomerChoice::ViewCart),
        "3" => Some(CustomerChoice::Checkout),
        "4" => Some(CustomerChoice::Logout),
        _ => None,
    }
}

/// Parses the tier choice at registration.
///
/// Returns `None` for invalid input; the caller falls back to Bronze and
/// prints a warning.
pub fn tier_for_choice(input: &str) -> Option<CustomerTier> {
    match input.trim() {
        "1" => Some(CustomerTier::Gold),
        "2" => Some(CustomerTier::Silver),
        "3" => Some(CustomerTier::Bronze),
        _ => None,
    }
}

/// Maps the checkout currency choice to a currency code.
///
/// Historical mapping: `1` → SEK, `2` → USD, anything else → EUR.
pub fn currency_for_choice(input: &str) -> &'static str {
    match input.trim() {
        "1" => "SEK",
        "2" => "USD",
        _ => "EUR",
    }
}

/// Parses a 1-based product choice against the catalog size.
///
/// Non-numeric or out-of-range input yields `None`; the shop prompt
/// reports "Felaktigt val." instead of crashing.
pub fn product_index(input: &str, catalog_len: usize) -> Option<usize> {
    let choice: usize = input.trim().parse().ok()?;
    if (1..=catalog_len).contains(&choice) {
        Some(choice - 1)
    } else {
        None
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
