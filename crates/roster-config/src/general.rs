//! General application configuration.

use roster_core::enums::IdStrategy;
use serde::{Deserialize, Serialize};

fn default_format() -> String {
    "json".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// How fresh record IDs are minted (`monotonic` or `random`).
    #[serde(default)]
    pub id_strategy: IdStrategy,

    /// Output format used when `--format` is not given (`json`, `table`, `raw`).
    #[serde(default = "default_format")]
    pub default_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            id_strategy: IdStrategy::default(),
            default_format: default_format(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = GeneralConfig::default();
        assert_eq!(config.id_strategy, IdStrategy::Monotonic);
        assert_eq!(config.default_format, "json");
    }
}
