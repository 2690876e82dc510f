//! Versioned envelope for the persisted collection.
//!
//! The collection is stored as `{"v": 1, "records": [...]}` under a single
//! key. Payloads written before the envelope existed are a bare JSON array;
//! readers treat those as version 1.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::EmployeeRecord;

/// Current payload version.
pub const PAYLOAD_VERSION: u32 = 1;

/// Default payload version for envelopes without a `v` field.
const fn default_payload_version() -> u32 {
    PAYLOAD_VERSION
}

/// The persisted collection, in store order.
///
/// Written with each record already encoded by
/// [`EmployeeRecord::to_stored`], so `R` is `serde_json::Value` on the write
/// path.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct PersistedCollection<R = EmployeeRecord> {
    /// Schema version. Defaults to 1 when missing.
    #[serde(default = "default_payload_version")]
    pub v: u32,

    pub records: Vec<R>,
}

impl<R> PersistedCollection<R> {
    /// Wrap `records` at the current version.
    #[must_use]
    pub const fn current(records: Vec<R>) -> Self {
        Self {
            v: PAYLOAD_VERSION,
            records,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_without_version_defaults_to_one() {
        let json = r#"{"records":[]}"#;
        let payload: PersistedCollection = serde_json::from_str(json).unwrap();
        assert_eq!(payload.v, 1);
        assert!(payload.records.is_empty());
    }

    #[test]
    fn current_envelope_writes_version() {
        let json = serde_json::to_value(PersistedCollection::<EmployeeRecord>::current(Vec::new())).unwrap();
        assert_eq!(json["v"], PAYLOAD_VERSION);
    }
}
