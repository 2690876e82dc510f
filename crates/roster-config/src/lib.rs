//! # roster-config
//!
//! Layered configuration loading for Roster using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`ROSTER_*` prefix, `__` as separator)
//! 2. Project-level `.roster/config.toml`
//! 3. User-level `~/.config/roster/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `ROSTER_STORAGE__DATA_DIR` -> `storage.data_dir`,
//! `ROSTER_GENERAL__ID_STRATEGY` -> `general.id_strategy`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use roster_config::RosterConfig;
//!
//! let config = RosterConfig::load_with_dotenv().expect("config");
//! println!("data in {}", config.storage.resolved_data_dir().display());
//! ```

mod error;
mod general;
mod storage;

pub use error::ConfigError;
pub use general::GeneralConfig;
pub use storage::{DEFAULT_STORAGE_KEY, StorageConfig};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const FORMATS: &[&str] = &["json", "table", "raw"];

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RosterConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl RosterConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source cannot be parsed or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source cannot be parsed or a value is invalid.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and check a config from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails or a value is invalid.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.check()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".roster/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("ROSTER_").split("__"))
    }

    /// Reject values that would make the store unusable.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the offending field.
    pub fn check(&self) -> Result<(), ConfigError> {
        if self.storage.key.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "storage.key".into(),
                reason: "must not be empty".into(),
            });
        }
        if !FORMATS.contains(&self.general.default_format.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "general.default_format".into(),
                reason: format!("expected one of {}", FORMATS.join(", ")),
            });
        }
        Ok(())
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("roster").join("config.toml"))
    }
}
