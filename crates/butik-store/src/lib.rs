//! # butik-store: Persistence Layer for Butik
//!
//! Owns every file operation in the system: loading the customer registry
//! at startup and writing it back once at exit.
//!
//! ## Persistence Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Session Lifecycle                               │
//! │                                                                     │
//! │  startup ──► CustomerStore::load() ──► CustomerRegistry             │
//! │                                             │                       │
//! │                    session mutates the registry in memory           │
//! │                                             │                       │
//! │  explicit exit ──► CustomerStore::save() ◄──┘                       │
//! │                                                                     │
//! │  • save runs exactly once, only on the explicit exit action         │
//! │  • abnormal termination saves nothing (accepted data-loss window)   │
//! │  • carts are never persisted; the store holds identity + tier only  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//! - [`store`] - the flat-file [`CustomerStore`]
//! - [`error`] - [`StoreError`] / [`StoreResult`]

pub mod error;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use store::CustomerStore;
