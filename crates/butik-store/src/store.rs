//! # Customer Store
//!
//! Load and save of the flat-text customer store.
//!
//! ## File Format
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    customers.txt                                    │
//! │                                                                     │
//! │  GoldCustomer,Knatte,123        ← tierTag,name,password             │
//! │  SilverCustomer,Fnatte,321                                          │
//! │  BronzeCustomer,Tjatte,213                                          │
//! │                                                                     │
//! │  • One customer per line, registry iteration order                  │
//! │  • No header, no trailing metadata, no checksum                     │
//! │  • No escaping: a comma inside name or password corrupts the        │
//! │    record (known limitation of the format, kept for compatibility)  │
//! │  • Carts are session-only and never written                         │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Lenient Loading
//! ```text
//! Line                           Outcome
//! ────                           ───────
//! GoldCustomer,Knatte,123        customer added
//! PlatinumCustomer,X,pw          skipped, warn (unknown tier tag)
//! garbage without commas         skipped, warn (wrong field count)
//! (missing file)                 empty registry, not an error
//! ```
//! Load always runs to completion; one bad line never poisons the rest.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{StoreError, StoreResult};
use butik_core::{Customer, CustomerRegistry, CustomerTier};

/// Number of comma-separated fields in a well-formed store line.
const FIELDS_PER_LINE: usize = 3;

/// Handle to the on-disk customer store.
///
/// The file is opened per call and released immediately after - no lock
/// is held across the session, so a crash mid-session loses everything
/// registered since the last save.
///
/// ## Usage
/// ```rust,no_run
/// use butik_store::CustomerStore;
///
/// let store = CustomerStore::new("customers.txt");
/// let registry = store.load()?;
/// // ... session runs ...
/// store.save(&registry)?;
/// # Ok::<(), butik_store::StoreError>(())
/// ```
#[derive(Debug, Clone)]
pub struct CustomerStore {
    path: PathBuf,
}

impl CustomerStore {
    /// Creates a store handle for the given path. No I/O happens here.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        CustomerStore { path: path.into() }
    }

    /// Returns the store path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the full registry from the store.
    ///
    /// ## Behavior
    /// - Missing file → empty registry (first run is not an error)
    /// - Wrong field count → line skipped with a warning
    /// - Unknown tier tag → line skipped with a warning
    /// - Any other read failure → [`StoreError::ReadFailed`]
    pub fn load(&self) -> StoreResult<CustomerRegistry> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No customer store yet, starting empty");
                return Ok(CustomerRegistry::new());
            }
            Err(source) => {
                return Err(StoreError::ReadFailed {
                    path: self.path.display().to_string(),
                    source,
                })
            }
        };

        let mut registry = CustomerRegistry::new();
        for (index, line) in contents.lines().enumerate() {
            let fields: Vec<&str> = line.split(',').collect();
            if fields.len() != FIELDS_PER_LINE {
                warn!(
                    line = index + 1,
                    fields = fields.len(),
                    "Skipping malformed customer record"
                );
                continue;
            }

            let tier = match CustomerTier::from_tag(fields[0]) {
                Ok(tier) => tier,
                Err(err) => {
                    warn!(line = index + 1, %err, "Skipping customer record");
                    continue;
                }
            };

            registry.add(Customer::new(fields[1], fields[2], tier));
        }

        debug!(
            path = %self.path.display(),
            count = registry.len(),
            "Loaded customer store"
        );
        Ok(registry)
    }

    /// Overwrites the store with the current registry, one line per
    /// customer in registration order.
    ///
    /// Fields are written verbatim - no escaping. On failure the
    /// in-memory registry is untouched; only persistence failed.
    pub fn save(&self, registry: &CustomerRegistry) -> StoreResult<()> {
        let file = File::create(&self.path).map_err(|source| self.write_failed(source))?;
        let mut writer = BufWriter::new(file);

        for customer in registry.iter() {
            writeln!(
                writer,
                "{},{},{}",
                customer.tier().tag(),
                customer.name(),
                customer.password()
            )
            .map_err(|source| self.write_failed(source))?;
        }
        writer.flush().map_err(|source| self.write_failed(source))?;

        debug!(
            path = %self.path.display(),
            count = registry.len(),
            "Saved customer store"
        );
        Ok(())
    }

    fn write_failed(&self, source: io::Error) -> StoreError {
        StoreError::WriteFailed {
            path: self.path.display().to_string(),
            source,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
// Parsing edge cases live here; full save/load round-trips are in
// tests/store_roundtrip.rs.

#[cfg(test)]
mod tests {
    use super::*;
    use butik_core::CustomerTier;

    fn store_with(contents: &str) -> CustomerRegistry {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("customers.txt");
        fs::write(&path, contents).unwrap();
        CustomerStore::new(path).load().unwrap()
    }

    #[test]
    fn test_load_missing_file_yields_empty_registry() {
        let dir = tempfile::tempdir().unwrap();
        let store = CustomerStore::new(dir.path().join("does-not-exist.txt"));
        let registry = store.load().unwrap();
        assert!(registry.is_empty());
    }

    #[test]
    fn test_load_parses_all_tiers() {
        let registry = store_with(
            "GoldCustomer,Knatte,123\nSilverCustomer,Fnatte,321\nBronzeCustomer,Tjatte,213\n",
        );
        assert_eq!(registry.len(), 3);
        assert_eq!(registry.find("Knatte").unwrap().tier(), CustomerTier::Gold);
        assert_eq!(registry.find("Fnatte").unwrap().tier(), CustomerTier::Silver);
        assert_eq!(registry.find("Tjatte").unwrap().tier(), CustomerTier::Bronze);
        assert!(registry.find("Tjatte").unwrap().verify_password("213"));
    }

    #[test]
    fn test_unknown_tier_tag_skipped_and_load_continues() {
        let registry = store_with(
            "PlatinumCustomer,Ghost,pw\nGoldCustomer,Knatte,123\n",
        );
        assert_eq!(registry.len(), 1);
        assert!(registry.find("Ghost").is_none());
        assert!(registry.contains("Knatte"));
    }

    #[test]
    fn test_wrong_field_count_skipped_and_load_continues() {
        let registry = store_with(
            "not a record\nGoldCustomer,Knatte\nGoldCustomer,Knatte,123,extra\nSilverCustomer,Fnatte,321\n",
        );
        assert_eq!(registry.len(), 1);
        assert!(registry.contains("Fnatte"));
    }

    #[test]
    fn test_loaded_customers_start_with_empty_carts() {
        let registry = store_with("GoldCustomer,Knatte,123\n");
        assert!(registry.find("Knatte").unwrap().cart().is_empty());
    }

    #[test]
    fn test_save_to_unwritable_path_reports_write_failure() {
        let dir = tempfile::tempdir().unwrap();
        // The directory itself is not a writable file target
        let store = CustomerStore::new(dir.path());
        let err = store.save(&CustomerRegistry::new()).unwrap_err();
        assert!(matches!(err, StoreError::WriteFailed { .. }));
    }
}
