//! # Error Types
//!
//! Domain-specific error types for butik-core.
//!
//! Most lookups in this crate deliberately return `Option` (a customer
//! that does not exist is a normal outcome, not an error). The only typed
//! failure the domain itself produces is an unrecognized tier tag when
//! reconstructing customers from the store format.

use thiserror::Error;

/// A tier tag read from the customer store that matches none of the
/// known tiers.
///
/// ## When This Occurs
/// - A store file written by a newer version with extra tiers
/// - A hand-edited store line with a typo in the tag
///
/// The store layer treats this as a skip-and-continue condition, not a
/// load failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown customer tier tag: {0}")]
pub struct UnknownTierTag(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message() {
        let err = UnknownTierTag("PlatinumCustomer".to_string());
        assert_eq!(
            err.to_string(),
            "unknown customer tier tag: PlatinumCustomer"
        );
    }
}
