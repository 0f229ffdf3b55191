//! # Store Error Types
//!
//! Error types for customer store operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                │
//! │                                                                     │
//! │  I/O Error (std::io::Error)                                         │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  StoreError (this module) ← Adds the path and the operation         │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  CLI reports it to the user; in-memory state stays intact           │
//! │                                                                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Note what is NOT here: malformed lines and unknown tier tags are not
//! errors at all. The load path skips them with a warning and keeps going.

use std::io;
use thiserror::Error;

/// Customer store operation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading the store file failed for a reason other than the file
    /// not existing (a missing store simply means an empty registry).
    ///
    /// ## When This Occurs
    /// - Permission denied on the store file
    /// - The path points at a directory
    /// - The file is not valid UTF-8
    #[error("Failed to read customer store {path}: {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: io::Error,
    },

    /// Writing the store file failed.
    ///
    /// ## When This Occurs
    /// - Store location is unwritable
    /// - Disk full
    ///
    /// The in-memory registry is untouched; only persistence failed.
    #[error("Failed to write customer store {path}: {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_include_path() {
        let err = StoreError::WriteFailed {
            path: "customers.txt".to_string(),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(
            err.to_string(),
            "Failed to write customer store customers.txt: denied"
        );
    }
}
