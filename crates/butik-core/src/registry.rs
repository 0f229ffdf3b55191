//! # Customer Registry
//!
//! In-memory collection of customer records, loaded from the store at
//! startup and written back once at exit.
//!
//! ## Design
//! An ordered `Vec` with linear lookup by name. Lookups are rare (one per
//! login) and the registry is small, so a map would buy nothing and would
//! lose the on-disk ordering guarantee of the save path.
//!
//! ## Duplicates
//! Names are NOT enforced unique: registering the same name twice is
//! permitted, and the FIRST match wins on login. This mirrors the store
//! format, which has no identity beyond line order.

use crate::customer::Customer;

/// The in-memory customer registry.
///
/// Process-wide mutable state with no concurrent-access protection; the
/// application model guarantees a single interactive session on a single
/// thread.
#[derive(Debug, Clone, Default)]
pub struct CustomerRegistry {
    customers: Vec<Customer>,
}

impl CustomerRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        CustomerRegistry {
            customers: Vec::new(),
        }
    }

    /// Appends a customer. No uniqueness check; see the module docs.
    pub fn add(&mut self, customer: Customer) {
        self.customers.push(customer);
    }

    /// Finds the first customer with the given name.
    ///
    /// "Not found" is a normal outcome (unknown login name), hence
    /// `Option` rather than an error.
    pub fn find(&self, name: &str) -> Option<&Customer> {
        self.customers.iter().find(|c| c.name() == name)
    }

    /// Finds the first customer with the given name, mutably.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Customer> {
        self.customers.iter_mut().find(|c| c.name() == name)
    }

    /// Checks whether any customer has the given name.
    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// Iterates customers in registration order (also the save order).
    pub fn iter(&self) -> impl Iterator<Item = &Customer> {
        self.customers.iter()
    }

    /// Returns the number of customers.
    pub fn len(&self) -> usize {
        self.customers.len()
    }

    /// Checks if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }
}

impl FromIterator<Customer> for CustomerRegistry {
    fn from_iter<I: IntoIterator<Item = Customer>>(iter: I) -> Self {
        CustomerRegistry {
            customers: iter.into_iter().collect(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CustomerTier;

    #[test]
    fn test_empty_registry() {
        let registry = CustomerRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
        assert!(registry.find("Knatte").is_none());
    }

    #[test]
    fn test_add_and_find() {
        let mut registry = CustomerRegistry::new();
        registry.add(Customer::new("Knatte", "123", CustomerTier::Gold));
        registry.add(Customer::new("Fnatte", "321", CustomerTier::Silver));

        assert_eq!(registry.len(), 2);
        let found = registry.find("Fnatte").unwrap();
        assert_eq!(found.tier(), CustomerTier::Silver);
        assert!(registry.contains("Knatte"));
        assert!(!registry.contains("Tjatte"));
    }

    #[test]
    fn test_duplicate_names_first_match_wins() {
        let mut registry = CustomerRegistry::new();
        registry.add(Customer::new("Knatte", "first", CustomerTier::Gold));
        registry.add(Customer::new("Knatte", "second", CustomerTier::Bronze));

        let found = registry.find("Knatte").unwrap();
        assert_eq!(found.tier(), CustomerTier::Gold);
        assert!(found.verify_password("first"));
    }

    #[test]
    fn test_iteration_preserves_insertion_order() {
        let mut registry = CustomerRegistry::new();
        for name in ["Knatte", "Fnatte", "Tjatte"] {
            registry.add(Customer::new(name, "pw", CustomerTier::Bronze));
        }

        let names: Vec<&str> = registry.iter().map(|c| c.name()).collect();
        assert_eq!(names, ["Knatte", "Fnatte", "Tjatte"]);
    }
}
