//! Central schema registry for Roster's stored and exchanged types.
//!
//! The `SchemaRegistry` builds JSON Schemas from roster-core types at
//! construction time using [`schemars::schema_for!`] and provides validation
//! via `jsonschema`. Rehydrated payloads are checked against it (warn-only),
//! and `roster schema` exports it.

use std::collections::HashMap;

use schemars::schema_for;

use crate::error::{FieldErrors, SchemaError};

/// Schema name of a single stored employee record.
pub const EMPLOYEE_RECORD: &str = "employee_record";
/// Schema name of the persisted, versioned collection envelope.
pub const PERSISTED_COLLECTION: &str = "persisted_collection";

/// Central store of all JSON Schemas in the Roster system.
///
/// Each schema is compiled once, when the registry is built; `validate` reuses
/// the compiled validator.
pub struct SchemaRegistry {
    schemas: HashMap<&'static str, serde_json::Value>,
    validators: HashMap<&'static str, Result<jsonschema::Validator, String>>,
}

/// Insert a schema into the map, converting the `schemars` output to a
/// `serde_json::Value`. Panics if `serde_json::to_value` fails (should be
/// infallible for valid `schemars` output).
macro_rules! register {
    ($map:expr, $name:expr, $ty:ty) => {
        $map.insert($name, serde_json::to_value(schema_for!($ty)).unwrap());
    };
}

impl SchemaRegistry {
    /// Build a new registry containing the entity, payload, and response
    /// schemas.
    ///
    /// # Panics
    ///
    /// Panics if `serde_json::to_value` fails on any `schemars`-generated
    /// schema. `schemars` always produces JSON-serialisable output.
    #[must_use]
    pub fn new() -> Self {
        let mut schemas = HashMap::new();

        register!(
            schemas,
            EMPLOYEE_RECORD,
            roster_core::entities::EmployeeRecord
        );
        register!(
            schemas,
            "employee_summary",
            roster_core::entities::EmployeeSummary
        );
        register!(
            schemas,
            PERSISTED_COLLECTION,
            roster_core::payload::PersistedCollection
        );
        register!(
            schemas,
            "raw_submission",
            roster_core::submission::RawSubmission
        );
        register!(
            schemas,
            "command_event",
            roster_core::responses::CommandEvent
        );
        register!(schemas, "field_errors", FieldErrors);

        let validators = schemas
            .iter()
            .map(|(name, schema)| {
                let compiled = jsonschema::validator_for(schema).map_err(|e| format!("{e}"));
                (*name, compiled)
            })
            .collect();

        Self {
            schemas,
            validators,
        }
    }

    /// Get a schema by name. Returns `None` if not found.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&serde_json::Value> {
        self.schemas.get(name)
    }

    /// Validate a JSON value against a named schema.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::NotFound` if the schema name is unknown, or
    /// `SchemaError::ValidationFailed` if validation produces errors.
    pub fn validate(&self, name: &str, instance: &serde_json::Value) -> Result<(), SchemaError> {
        let validator = self
            .validators
            .get(name)
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))?
            .as_ref()
            .map_err(|e| SchemaError::Generation(e.clone()))?;

        let errors: Vec<String> = validator
            .iter_errors(instance)
            .map(|e| format!("{e}"))
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SchemaError::ValidationFailed { errors })
        }
    }

    /// List all registered schema names.
    #[must_use]
    pub fn list(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.schemas.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Number of registered schemas.
    #[must_use]
    pub fn schema_count(&self) -> usize {
        self.schemas.len()
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_core::entities::EmployeeRecord;
    use roster_core::payload::PersistedCollection;

    fn registry() -> SchemaRegistry {
        SchemaRegistry::new()
    }

    #[test]
    fn registry_has_expected_schemas() {
        let reg = registry();
        assert_eq!(
            reg.list(),
            vec![
                "command_event",
                "employee_record",
                "employee_summary",
                "field_errors",
                "persisted_collection",
                "raw_submission",
            ]
        );
        assert_eq!(reg.schema_count(), 6);
    }

    #[test]
    fn validate_stored_collection() {
        let reg = registry();
        let payload = PersistedCollection::current(vec![EmployeeRecord {
            id: "emp-1".into(),
            first_name: "Jo".into(),
            ..EmployeeRecord::default()
        }]);
        let json = serde_json::to_value(&payload).unwrap();
        assert!(reg.validate(PERSISTED_COLLECTION, &json).is_ok());
    }

    #[test]
    fn validate_rejects_invalid_status() {
        let reg = registry();
        let invalid = serde_json::json!({"id": "emp-1", "status": "Retired"});
        let result = reg.validate(EMPLOYEE_RECORD, &invalid);
        assert!(matches!(result, Err(SchemaError::ValidationFailed { errors }) if !errors.is_empty()));
    }

    #[test]
    fn validate_rejects_envelope_without_records() {
        let reg = registry();
        let result = reg.validate(PERSISTED_COLLECTION, &serde_json::json!({"v": 1}));
        assert!(result.is_err());
    }

    #[test]
    fn every_schema_is_compiled_up_front() {
        let reg = registry();
        for name in reg.list() {
            // Repeated checks reuse the compiled validator.
            for _ in 0..2 {
                let result = reg.validate(name, &serde_json::Value::Null);
                assert!(
                    !matches!(
                        result,
                        Err(SchemaError::Generation(_) | SchemaError::NotFound(_))
                    ),
                    "{name}: {result:?}"
                );
            }
        }
    }

    #[test]
    fn validate_nonexistent_schema_returns_not_found() {
        let reg = registry();
        let result = reg.validate("bogus", &serde_json::json!({}));
        assert!(matches!(result, Err(SchemaError::NotFound(_))));
    }
}
