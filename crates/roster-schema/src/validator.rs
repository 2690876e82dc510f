//! Submission validation.
//!
//! `validate` checks every field of the schema in one pass and either returns
//! a normalized record (text trimmed, numbers coerced, blank optionals dropped)
//! or the full set of field errors. It never stops at the first failure and
//! never mutates its input.

use std::collections::HashMap;

use roster_core::entities::EmployeeRecord;
use roster_core::enums::EmployeeStatus;
use roster_core::fields;
use roster_core::submission::RawSubmission;
use serde_json::Value;

use crate::error::FieldErrors;
use crate::rules::{EmployeeSchema, FieldKind, FieldSpec};

/// A field value after coercion and rule checks.
#[derive(Debug, Clone, PartialEq)]
enum Checked {
    Text(String),
    Number(f64),
    Absent,
}

/// Validate against the standard employee schema.
///
/// # Errors
///
/// Returns `FieldErrors` holding one message per violated field.
pub fn validate(raw: &RawSubmission) -> Result<EmployeeRecord, FieldErrors> {
    EmployeeSchema::standard().validate(raw)
}

impl EmployeeSchema {
    /// Validate `raw` against this schema.
    ///
    /// The returned record has an empty `id`; identity is assigned when the
    /// record is reconciled into a collection. Values for fields the schema
    /// does not describe are ignored.
    ///
    /// # Errors
    ///
    /// Returns `FieldErrors` holding one message per violated field.
    pub fn validate(&self, raw: &RawSubmission) -> Result<EmployeeRecord, FieldErrors> {
        let mut errors = FieldErrors::new();
        let mut values: HashMap<&'static str, Checked> = HashMap::new();

        for spec in self.fields() {
            match check_field(spec, raw.get(spec.field)) {
                Ok(value) => {
                    values.insert(spec.field, value);
                }
                Err(message) => errors.insert(spec.field, message),
            }
        }

        if errors.is_empty() {
            Ok(build_record(&mut values))
        } else {
            Err(errors)
        }
    }
}

fn check_field(spec: &FieldSpec, value: Option<&Value>) -> Result<Checked, String> {
    match spec.kind {
        FieldKind::Text => check_text(spec, value),
        FieldKind::Number => check_number(spec, value),
    }
}

fn check_text(spec: &FieldSpec, value: Option<&Value>) -> Result<Checked, String> {
    let text = match value {
        None | Some(Value::Null) => "",
        Some(Value::String(s)) => s.trim(),
        Some(_) => return Err(format!("{} must be text.", spec.label)),
    };

    if spec.optional && text.is_empty() {
        return Ok(Checked::Absent);
    }

    if let Some(rule) = spec.rules.iter().find(|rule| !rule.check_text(text)) {
        return Err(rule.message(spec.label));
    }
    Ok(Checked::Text(text.to_string()))
}

fn check_number(spec: &FieldSpec, value: Option<&Value>) -> Result<Checked, String> {
    let number = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) if !s.trim().is_empty() => s.trim().parse::<f64>().ok(),
        None | Some(Value::Null) if spec.optional => return Ok(Checked::Absent),
        _ => None,
    };

    let Some(number) = number.filter(|n| n.is_finite()) else {
        return Err(format!("{} must be a number.", spec.label));
    };

    if let Some(rule) = spec.rules.iter().find(|rule| !rule.check_number(number)) {
        return Err(rule.message(spec.label));
    }
    Ok(Checked::Number(number))
}

fn build_record(values: &mut HashMap<&'static str, Checked>) -> EmployeeRecord {
    let mut text = |field: &str| match values.remove(field) {
        Some(Checked::Text(s)) => Some(s),
        _ => None,
    };

    let first_name = text(fields::FIRST_NAME).unwrap_or_default();
    let last_name = text(fields::LAST_NAME).unwrap_or_default();
    let email = text(fields::EMAIL).unwrap_or_default();
    let phone = text(fields::PHONE).unwrap_or_default();
    let department = text(fields::DEPARTMENT);
    let position = text(fields::POSITION).unwrap_or_default();
    let hire_date = text(fields::HIRE_DATE).unwrap_or_default();
    let address = text(fields::ADDRESS).unwrap_or_default();
    let city = text(fields::CITY).unwrap_or_default();
    let state = text(fields::STATE).unwrap_or_default();
    let zip_code = text(fields::ZIP_CODE).unwrap_or_default();
    let country = text(fields::COUNTRY).unwrap_or_default();
    let emergency_contact = text(fields::EMERGENCY_CONTACT).unwrap_or_default();
    let emergency_phone = text(fields::EMERGENCY_PHONE).unwrap_or_default();
    let status = text(fields::STATUS)
        .as_deref()
        .and_then(EmployeeStatus::from_label)
        .unwrap_or_default();
    let project_assignment = text(fields::PROJECT_ASSIGNMENT);
    let notes = text(fields::NOTES);

    let number = |field: &str| match values.get(field) {
        Some(Checked::Number(n)) => *n,
        _ => 0.0,
    };

    EmployeeRecord {
        id: String::new(),
        first_name,
        last_name,
        email,
        phone,
        department,
        position,
        salary: number(fields::SALARY),
        hire_date,
        address,
        city,
        state,
        zip_code,
        country,
        emergency_contact,
        emergency_phone,
        status,
        performance_rating: number(fields::PERFORMANCE_RATING),
        project_assignment,
        notes,
        extra: serde_json::Map::new(),
        preserved: serde_json::Map::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn valid() -> RawSubmission {
        RawSubmission::new()
            .text("firstName", "Jo")
            .text("lastName", "Li")
            .text("email", "jo@x.com")
            .text("phone", "1234567890")
            .text("position", "Eng")
            .number("salary", 50_000.0)
            .text("hireDate", "2024-01-01")
            .text("address", "1 Main St")
            .text("city", "NY")
            .text("state", "NY")
            .text("zipCode", "10001")
            .text("country", "USA")
            .text("emergencyContact", "Al Li")
            .text("emergencyPhone", "0987654321")
            .text("status", "Active")
            .number("performanceRating", 3.0)
    }

    #[test]
    fn valid_submission_produces_record_without_id() {
        let record = validate(&valid()).unwrap();
        assert_eq!(record.id, "");
        assert_eq!(record.full_name(), "Jo Li");
        assert_eq!(record.salary, 50_000.0);
        assert_eq!(record.status, EmployeeStatus::Active);
        assert_eq!(record.notes, None);
    }

    #[test]
    fn numeric_text_is_coerced() {
        let mut raw = valid();
        raw.set("salary", json!("72000.50"));
        raw.set("performanceRating", json!(" 4 "));
        let record = validate(&raw).unwrap();
        assert_eq!(record.salary, 72_000.5);
        assert_eq!(record.performance_rating, 4.0);
    }

    #[test]
    fn text_is_trimmed_and_blank_optionals_dropped() {
        let raw = valid()
            .text("firstName", "  Jo  ")
            .text("notes", "   ")
            .text("department", "HR");
        let record = validate(&raw).unwrap();
        assert_eq!(record.first_name, "Jo");
        assert_eq!(record.notes, None);
        assert_eq!(record.department.as_deref(), Some("HR"));
    }

    #[test]
    fn whitespace_does_not_satisfy_length() {
        let raw = valid().text("firstName", " J ");
        let errors = validate(&raw).unwrap_err();
        assert_eq!(errors.fields(), vec!["firstName"]);
    }

    #[test]
    fn input_is_not_mutated() {
        let raw = valid().text("city", " NY ");
        let before = raw.clone();
        let _ = validate(&raw);
        assert_eq!(raw, before);
    }

    #[test]
    fn non_numeric_salary_is_reported() {
        let mut raw = valid();
        raw.set("salary", json!("lots"));
        let errors = validate(&raw).unwrap_err();
        assert_eq!(errors.get("salary"), Some("Salary must be a number."));
    }

    #[test]
    fn number_in_text_field_is_reported() {
        let mut raw = valid();
        raw.set("zipCode", json!(10001));
        let errors = validate(&raw).unwrap_err();
        assert_eq!(errors.get("zipCode"), Some("Zip code must be text."));
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let raw = valid().text("badge", "x");
        let record = validate(&raw).unwrap();
        assert!(record.extra.is_empty());
    }
}
