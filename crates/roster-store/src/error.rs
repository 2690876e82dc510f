//! Store and storage error types for roster-store.

use thiserror::Error;

/// Errors from entity store and payload operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No record with this ID is in the store.
    #[error("Record not found: {0}")]
    NotFound(String),

    /// A record with this ID is already in the store.
    #[error("Duplicate record id: {0}")]
    DuplicateId(String),

    /// A record without an ID cannot enter the store.
    #[error("Record has no id")]
    MissingId,

    /// The stored payload could not be read.
    #[error("Corrupt payload: {0}")]
    CorruptPayload(String),

    /// The stored payload was written by a newer version.
    #[error("Unsupported payload version {0}")]
    UnsupportedVersion(u64),

    /// JSON encoding failed.
    #[error("Serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The key-value storage failed.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors from a key-value storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Storage keys are restricted to a safe character set.
    #[error("Invalid storage key: {0:?}")]
    InvalidKey(String),

    /// The backend refused the operation (quota, disabled storage, ...).
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// Underlying file I/O failed.
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),
}
