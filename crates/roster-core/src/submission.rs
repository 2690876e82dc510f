//! Raw form input.
//!
//! A `RawSubmission` is what the form hands to the validator: field name to
//! JSON value, exactly as captured. Text inputs arrive as strings; numeric
//! inputs may arrive as numbers or as numeric text and are coerced by the
//! validator.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::entities::EmployeeRecord;
use crate::enums::EmployeeStatus;
use crate::fields;

/// Default performance rating on a blank form.
pub const DEFAULT_PERFORMANCE_RATING: f64 = 3.0;

/// Raw field values keyed by wire name, in insertion order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(transparent)]
pub struct RawSubmission {
    fields: Map<String, Value>,
}

impl RawSubmission {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The values of a blank form: empty text, zero salary, `Active`, rating 3.
    #[must_use]
    pub fn form_defaults() -> Self {
        let mut form = Self::new();
        for &field in fields::FORM_FIELDS {
            form.fields.insert(field.to_string(), Value::String(String::new()));
        }
        form.fields.insert(fields::SALARY.to_string(), Value::from(0.0));
        form.fields.insert(
            fields::STATUS.to_string(),
            Value::String(EmployeeStatus::Active.as_str().to_string()),
        );
        form.fields.insert(
            fields::PERFORMANCE_RATING.to_string(),
            Value::from(DEFAULT_PERFORMANCE_RATING),
        );
        form
    }

    /// Re-populate the form from a stored record (used when selecting for edit).
    ///
    /// The `id` is not part of the form; identity lives in the editing target.
    #[must_use]
    pub fn from_record(record: &EmployeeRecord) -> Self {
        let mut form = Self::form_defaults();
        if let Ok(Value::Object(map)) = serde_json::to_value(record) {
            for (key, value) in map {
                if key != fields::ID && fields::is_form_field(&key) {
                    form.fields.insert(key, value);
                }
            }
        }
        form
    }

    /// Builder-style text value.
    #[must_use]
    pub fn text(mut self, field: &str, value: impl Into<String>) -> Self {
        self.set(field, Value::String(value.into()));
        self
    }

    /// Builder-style numeric value.
    #[must_use]
    pub fn number(mut self, field: &str, value: f64) -> Self {
        self.set(field, Value::from(value));
        self
    }

    /// Set a raw value.
    pub fn set(&mut self, field: &str, value: Value) {
        self.fields.insert(field.to_string(), value);
    }

    /// Drop a value, returning it if present.
    pub fn remove(&mut self, field: &str) -> Option<Value> {
        self.fields.remove(field)
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Overlay every value in `other` onto this submission.
    pub fn merge(&mut self, other: Self) {
        for (key, value) in other.fields {
            self.fields.insert(key, value);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.fields.iter()
    }
}

impl From<Map<String, Value>> for RawSubmission {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn form_defaults_match_blank_form() {
        let form = RawSubmission::form_defaults();
        assert_eq!(form.get(fields::FIRST_NAME), Some(&json!("")));
        assert_eq!(form.get(fields::SALARY), Some(&json!(0.0)));
        assert_eq!(form.get(fields::STATUS), Some(&json!("Active")));
        assert_eq!(form.get(fields::PERFORMANCE_RATING), Some(&json!(3.0)));
        assert_eq!(form.len(), fields::FORM_FIELDS.len());
    }

    #[test]
    fn from_record_copies_fields_without_id() {
        let record = EmployeeRecord {
            id: "emp-7".into(),
            first_name: "Jo".into(),
            salary: 10.0,
            notes: Some("hi".into()),
            ..EmployeeRecord::default()
        };
        let form = RawSubmission::from_record(&record);
        assert!(form.get(fields::ID).is_none());
        assert_eq!(form.get(fields::FIRST_NAME), Some(&json!("Jo")));
        assert_eq!(form.get(fields::SALARY), Some(&json!(10.0)));
        assert_eq!(form.get(fields::NOTES), Some(&json!("hi")));
        // Absent optionals stay blank rather than disappearing.
        assert_eq!(form.get(fields::PROJECT_ASSIGNMENT), Some(&json!("")));
    }

    #[test]
    fn merge_overlays_values() {
        let mut base = RawSubmission::new().text("city", "NY").text("state", "NY");
        base.merge(RawSubmission::new().text("city", "Boston"));
        assert_eq!(base.get("city"), Some(&json!("Boston")));
        assert_eq!(base.get("state"), Some(&json!("NY")));
    }

    #[test]
    fn deserializes_from_plain_object() {
        let raw: RawSubmission =
            serde_json::from_value(json!({"firstName": "Jo", "salary": 5})).unwrap();
        assert_eq!(raw.get("salary"), Some(&json!(5)));
        assert_eq!(raw.len(), 2);
    }
}
