//! # roster-store
//!
//! In-memory entity store, reconciliation, and key-value persistence for
//! Roster, plus the command surface that drives them.
//!
//! Control flow for a submit: `RosterService` → `roster_schema::validate` →
//! `reconciler::reconcile` → `EntityStore` → `PersistenceAdapter::persist`.
//! On startup the adapter rehydrates the store from a single storage key.
//!
//! Everything here is synchronous and single-writer: one service owns one
//! store, and every mutation is persisted before the call returns.

pub mod error;
pub mod persistence;
pub mod reconciler;
pub mod service;
pub mod storage;
pub mod store;

pub use error::{StorageError, StoreError};
pub use persistence::PersistenceAdapter;
pub use reconciler::{Reconciled, reconcile};
pub use service::RosterService;
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};
pub use store::EntityStore;
