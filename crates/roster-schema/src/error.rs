//! Schema and validation error types.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from the schema registry.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Requested schema name was not found in the registry.
    #[error("Schema not found: {0}")]
    NotFound(String),

    /// JSON value did not pass schema validation.
    #[error("Validation failed: {errors:?}")]
    ValidationFailed {
        /// Individual error messages from the validator.
        errors: Vec<String>,
    },

    /// Schema generation or compilation error.
    #[error("Schema generation error: {0}")]
    Generation(String),
}

/// One violated field and the message to show next to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Every field violation found in one submission, in form order.
///
/// Holds at most one message per field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Error)]
#[serde(transparent)]
#[error("{} field(s) failed validation: {}", .errors.len(), summarize(.errors))]
pub struct FieldErrors {
    errors: Vec<FieldError>,
}

impl FieldErrors {
    #[must_use]
    pub const fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Record a violation. A second message for the same field is ignored.
    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        let field = field.into();
        if self.get(&field).is_none() {
            self.errors.push(FieldError {
                field,
                message: message.into(),
            });
        }
    }

    /// Message for `field`, if it failed.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    /// Names of the failed fields, in form order.
    #[must_use]
    pub fn fields(&self) -> Vec<&str> {
        self.errors.iter().map(|e| e.field.as_str()).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }
}

fn summarize(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_message_per_field_wins() {
        let mut errors = FieldErrors::new();
        errors.insert("email", "Invalid email address.");
        errors.insert("email", "something else");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("email"), Some("Invalid email address."));
    }

    #[test]
    fn display_lists_every_field() {
        let mut errors = FieldErrors::new();
        errors.insert("firstName", "too short");
        errors.insert("city", "too short");
        let rendered = errors.to_string();
        assert!(rendered.starts_with("2 field(s) failed validation"));
        assert!(rendered.contains("firstName: too short"));
        assert!(rendered.contains("city: too short"));
    }

    #[test]
    fn serializes_as_ordered_list() {
        let mut errors = FieldErrors::new();
        errors.insert("zipCode", "a");
        errors.insert("address", "b");
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json[0]["field"], "zipCode");
        assert_eq!(json[1]["field"], "address");
    }
}
