use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::entities::EmployeeSummary;
use crate::enums::EmployeeStatus;
use crate::errors::CoreError;
use crate::fields;

/// One managed employee.
///
/// Field names serialize in camelCase to match the stored layout. Every field
/// has a default so records written by an older form (missing optional or
/// newer fields) still load. Fields this version does not know about are kept
/// in `extra`, and known fields whose stored value does not fit their type are
/// kept in `preserved`; both are written back unchanged by [`Self::to_stored`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct EmployeeRecord {
    /// Assigned once at insertion, never changed by an update.
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    pub position: String,
    #[serde(deserialize_with = "number_or_numeric_text")]
    #[schemars(with = "f64")]
    pub salary: f64,
    /// Calendar date as entered, e.g. `2024-01-01`.
    pub hire_date: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
    pub emergency_contact: String,
    pub emergency_phone: String,
    pub status: EmployeeStatus,
    /// Between 1 and 5 inclusive; fractional ratings are allowed.
    #[serde(deserialize_with = "number_or_numeric_text")]
    #[schemars(with = "f64")]
    pub performance_rating: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_assignment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
    /// Stored values of known fields that did not fit the field's type. The
    /// typed field holds its default meanwhile.
    #[serde(skip)]
    pub preserved: Map<String, Value>,
}

impl EmployeeRecord {
    /// Display name, computed on read.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Copy of this record carrying `id`.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// List-row projection.
    #[must_use]
    pub fn summary(&self) -> EmployeeSummary {
        EmployeeSummary {
            id: self.id.clone(),
            full_name: self.full_name(),
            email: self.email.clone(),
            department: self.department.clone(),
            position: self.position.clone(),
            status: self.status,
        }
    }

    /// Read one record out of a stored JSON value.
    ///
    /// Any object with a non-empty string `id` is accepted. Members that fit
    /// their field are decoded (numeric text counts as a number); members that
    /// do not, such as a numeric `zipCode` or a status label this version does
    /// not know, go to `preserved` so nothing is lost on the next write.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidRecord` if the value is not an object or has
    /// no non-empty string `id`.
    pub fn from_stored(value: Value) -> Result<Self, CoreError> {
        let Value::Object(map) = value else {
            return Err(CoreError::InvalidRecord(format!(
                "expected an object, found {}",
                json_kind(&value)
            )));
        };

        match map.get(fields::ID) {
            Some(Value::String(id)) if !id.is_empty() => {}
            _ => {
                return Err(CoreError::InvalidRecord(
                    "record has no string id".to_string(),
                ));
            }
        }

        let (members, preserved): (Map<String, Value>, Map<String, Value>) = map
            .into_iter()
            .partition(|(field, value)| fits(field, value));

        let mut record: Self = serde_json::from_value(Value::Object(members))
            .map_err(|e| CoreError::InvalidRecord(e.to_string()))?;
        record.preserved = preserved;
        Ok(record)
    }

    /// The JSON value to store for this record: its fields, with any
    /// `preserved` values written back in place of the typed defaults.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if the record cannot be encoded.
    pub fn to_stored(&self) -> Result<Value, serde_json::Error> {
        let mut value = serde_json::to_value(self)?;
        if let Value::Object(map) = &mut value {
            for (field, stored) in &self.preserved {
                map.insert(field.clone(), stored.clone());
            }
        }
        Ok(value)
    }
}

/// Whether a stored member can be decoded into its field without loss.
/// Members of unknown fields always fit; they land in `extra`.
fn fits(field: &str, value: &Value) -> bool {
    match field {
        fields::STATUS => value
            .as_str()
            .and_then(EmployeeStatus::from_label)
            .is_some(),
        fields::DEPARTMENT | fields::PROJECT_ASSIGNMENT | fields::NOTES => {
            value.is_string() || value.is_null()
        }
        f if fields::NUMERIC_FIELDS.contains(&f) => numeric(value).is_some(),
        f if f == fields::ID || fields::is_form_field(f) => value.is_string(),
        _ => true,
    }
}

/// A finite number, given as a JSON number or as numeric text.
fn numeric(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    number.filter(|n| n.is_finite())
}

fn number_or_numeric_text<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    numeric(&value).ok_or_else(|| {
        serde::de::Error::custom(format!("expected a number, found {}", json_kind(&value)))
    })
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn sample() -> EmployeeRecord {
        EmployeeRecord {
            id: "emp-1".into(),
            first_name: "Jo".into(),
            last_name: "Li".into(),
            email: "jo@x.com".into(),
            position: "Eng".into(),
            salary: 50_000.0,
            status: EmployeeStatus::OnLeave,
            performance_rating: 3.5,
            ..EmployeeRecord::default()
        }
    }

    #[test]
    fn full_name_joins_first_and_last() {
        assert_eq!(sample().full_name(), "Jo Li");
    }

    #[test]
    fn serializes_camel_case_and_skips_absent_optionals() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["firstName"], "Jo");
        assert_eq!(json["performanceRating"], 3.5);
        assert_eq!(json["status"], "On Leave");
        assert!(json.get("notes").is_none());
        assert!(json.get("fullName").is_none());
    }

    #[test]
    fn unknown_members_survive_a_roundtrip() {
        let stored = json!({"id": "emp-9", "firstName": "Al", "badge": 42});
        let record = EmployeeRecord::from_stored(stored).unwrap();
        assert_eq!(record.extra.get("badge"), Some(&json!(42)));

        let written = serde_json::to_value(&record).unwrap();
        assert_eq!(written["badge"], 42);
    }

    #[test]
    fn from_stored_accepts_partial_and_legacy_values() {
        let stored = json!({
            "id": "1700000000000",
            "firstName": "Ann",
            "salary": "42000",
            "notes": null
        });
        let record = EmployeeRecord::from_stored(stored).unwrap();
        assert_eq!(record.first_name, "Ann");
        assert_eq!(record.salary, 42_000.0);
        assert_eq!(record.performance_rating, 0.0);
        assert_eq!(record.notes, None);
        assert_eq!(record.status, EmployeeStatus::Active);
        assert!(record.preserved.is_empty());
    }

    #[test]
    fn from_stored_rejects_values_without_identity() {
        assert!(EmployeeRecord::from_stored(json!({"firstName": "Ann"})).is_err());
        assert!(EmployeeRecord::from_stored(json!({"id": ""})).is_err());
        assert!(EmployeeRecord::from_stored(json!({"id": 7})).is_err());
        assert!(EmployeeRecord::from_stored(json!([1, 2])).is_err());
    }

    #[test]
    fn wrong_typed_members_are_kept_verbatim() {
        let stored = json!({
            "id": "1700000000000",
            "firstName": "Ann",
            "zipCode": 10001,
            "status": "Probation",
            "salary": "abc",
            "performanceRating": true,
            "lastName": null
        });
        let record = EmployeeRecord::from_stored(stored.clone()).unwrap();

        assert_eq!(record.first_name, "Ann");
        assert_eq!(record.zip_code, "");
        assert_eq!(record.status, EmployeeStatus::Active);
        assert_eq!(record.salary, 0.0);
        assert_eq!(
            record.preserved.keys().map(String::as_str).collect::<Vec<_>>(),
            vec!["zipCode", "status", "salary", "performanceRating", "lastName"]
        );

        let written = record.to_stored().unwrap();
        for field in ["zipCode", "status", "salary", "performanceRating", "lastName"] {
            assert_eq!(written[field], stored[field], "{field}");
        }
        assert_eq!(written["firstName"], "Ann");
    }

    #[test]
    fn summary_projects_list_columns() {
        let summary = sample().summary();
        assert_eq!(summary.full_name, "Jo Li");
        assert_eq!(summary.status, EmployeeStatus::OnLeave);
        assert_eq!(summary.id, "emp-1");
    }
}
