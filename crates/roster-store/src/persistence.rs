//! Synchronizes the entity store with key-value storage.
//!
//! The collection lives under one key as a versioned envelope
//! (`{"v": 1, "records": [...]}`). Reads are forgiving: a missing, empty, or
//! unreadable payload rehydrates as an empty collection, a bare array from
//! before the envelope existed is accepted, and records are decoded one by
//! one: a record is only skipped when it has no id, and values that do not
//! fit their field are kept and written back as they were. Writes are
//! best-effort: failures are logged and counted, never returned.

use roster_core::entities::EmployeeRecord;
use roster_core::payload::{PAYLOAD_VERSION, PersistedCollection};
use roster_schema::SchemaRegistry;
use roster_schema::registry::EMPLOYEE_RECORD;
use serde_json::Value;

use crate::error::StoreError;
use crate::storage::KeyValueStorage;
use crate::store::EntityStore;

/// Boundary between the in-memory store and durable storage.
pub struct PersistenceAdapter {
    storage: Box<dyn KeyValueStorage>,
    key: String,
    schema: SchemaRegistry,
    failed_syncs: u32,
}

impl PersistenceAdapter {
    /// Adapter reading and writing `key` in `storage`.
    #[must_use]
    pub fn new(storage: Box<dyn KeyValueStorage>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
            schema: SchemaRegistry::new(),
            failed_syncs: 0,
        }
    }

    /// The storage key the collection lives under.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Number of `persist` calls that failed to write.
    #[must_use]
    pub const fn failed_syncs(&self) -> u32 {
        self.failed_syncs
    }

    /// Load the stored collection. Never fails; see module docs.
    #[must_use]
    pub fn rehydrate(&self) -> EntityStore {
        match self.try_rehydrate() {
            Ok(store) => {
                tracing::debug!(key = %self.key, records = store.len(), "rehydrated");
                store
            }
            Err(e) => {
                tracing::warn!(key = %self.key, "starting with an empty collection: {e}");
                EntityStore::new()
            }
        }
    }

    /// Write the collection. Failures are logged, not returned.
    pub fn persist(&mut self, records: &[EmployeeRecord]) {
        match self.try_persist(records) {
            Ok(()) => tracing::debug!(key = %self.key, records = records.len(), "persisted"),
            Err(e) => {
                self.failed_syncs += 1;
                tracing::warn!(key = %self.key, "could not persist collection: {e}");
            }
        }
    }

    fn try_rehydrate(&self) -> Result<EntityStore, StoreError> {
        let Some(text) = self.storage.load(&self.key)? else {
            return Ok(EntityStore::new());
        };
        let records = decode_payload(&text)?;
        let store = EntityStore::from_records(
            records
                .into_iter()
                .filter_map(|value| self.decode_record(value)),
        );
        Ok(store)
    }

    fn try_persist(&mut self, records: &[EmployeeRecord]) -> Result<(), StoreError> {
        let payload = encode_payload(records)?;
        self.storage.save(&self.key, &payload)?;
        Ok(())
    }

    /// Decode one stored value, skipping it only if it has no identity.
    ///
    /// Records that load but no longer match the current schema are kept,
    /// with mismatched values preserved verbatim; the mismatch is only logged.
    fn decode_record(&self, value: Value) -> Option<EmployeeRecord> {
        if let Err(e) = self.schema.validate(EMPLOYEE_RECORD, &value) {
            tracing::debug!(key = %self.key, "stored record differs from current schema: {e}");
        }
        match EmployeeRecord::from_stored(value) {
            Ok(record) => {
                if !record.preserved.is_empty() {
                    let kept: Vec<&str> = record.preserved.keys().map(String::as_str).collect();
                    tracing::warn!(
                        key = %self.key,
                        id = %record.id,
                        fields = ?kept,
                        "stored values do not fit their fields; keeping them as-is"
                    );
                }
                Some(record)
            }
            Err(e) => {
                tracing::warn!(key = %self.key, "skipping stored record: {e}");
                None
            }
        }
    }
}

/// Serialize `records` as the current envelope.
///
/// # Errors
///
/// Returns `StoreError::Serialize` if JSON encoding fails.
pub fn encode_payload(records: &[EmployeeRecord]) -> Result<String, StoreError> {
    let stored = records
        .iter()
        .map(EmployeeRecord::to_stored)
        .collect::<Result<Vec<Value>, _>>()?;
    Ok(serde_json::to_string(&PersistedCollection::current(stored))?)
}

/// Split a stored payload into its raw record values.
///
/// Accepts the versioned envelope and the legacy bare array. Blank text is
/// an empty collection.
///
/// # Errors
///
/// Returns `StoreError::CorruptPayload` for text that is not one of those
/// shapes and `StoreError::UnsupportedVersion` for envelopes from a newer
/// version.
pub fn decode_payload(text: &str) -> Result<Vec<Value>, StoreError> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }

    let value: Value =
        serde_json::from_str(text).map_err(|e| StoreError::CorruptPayload(e.to_string()))?;

    match value {
        Value::Array(records) => Ok(records),
        Value::Object(mut envelope) => {
            let version = match envelope.get("v") {
                None => u64::from(PAYLOAD_VERSION),
                Some(v) => v.as_u64().ok_or_else(|| {
                    StoreError::CorruptPayload(format!("version is not a number: {v}"))
                })?,
            };
            if version != u64::from(PAYLOAD_VERSION) {
                return Err(StoreError::UnsupportedVersion(version));
            }
            match envelope.remove("records") {
                Some(Value::Array(records)) => Ok(records),
                _ => Err(StoreError::CorruptPayload(
                    "envelope has no records array".into(),
                )),
            }
        }
        Value::Null => Ok(Vec::new()),
        other => Err(StoreError::CorruptPayload(format!(
            "unexpected top-level value: {other}"
        ))),
    }
}
