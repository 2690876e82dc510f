//! Storage location configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Storage key the collection is kept under.
pub const DEFAULT_STORAGE_KEY: &str = "employees";

fn default_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Directory holding one file per storage key. Empty means the platform
    /// data directory (`~/.local/share/roster` on Linux).
    #[serde(default)]
    pub data_dir: String,

    /// Key the employee collection is stored under.
    #[serde(default = "default_key")]
    pub key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: String::new(),
            key: default_key(),
        }
    }
}

impl StorageConfig {
    /// The directory to store data in, falling back to `.roster/data` when
    /// the platform has no data directory.
    #[must_use]
    pub fn resolved_data_dir(&self) -> PathBuf {
        if !self.data_dir.is_empty() {
            return PathBuf::from(&self.data_dir);
        }
        dirs::data_dir().map_or_else(
            || PathBuf::from(".roster").join("data"),
            |dir| dir.join("roster"),
        )
    }
}
