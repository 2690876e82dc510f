//! Cross-cutting error types for Roster.
//!
//! Domain-specific errors (`SchemaError`, `StoreError`, `ConfigError`) are
//! defined in their respective crates. The CLI converges them with `anyhow`.

use thiserror::Error;

/// Errors raised while reading core entities.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A stored value could not be read back as an entity.
    #[error("Invalid stored record: {0}")]
    InvalidRecord(String),
}
