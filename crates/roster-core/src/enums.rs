//! Status and strategy enums for Roster.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// EmployeeStatus
// ---------------------------------------------------------------------------

/// Employment status of a record.
///
/// Serialized with the display labels the form offers, so stored payloads
/// read `"Active"`, `"On Leave"` and `"Terminated"`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
pub enum EmployeeStatus {
    #[default]
    Active,
    #[serde(rename = "On Leave")]
    OnLeave,
    Terminated,
}

impl EmployeeStatus {
    /// All statuses, in form order.
    pub const ALL: [Self; 3] = [Self::Active, Self::OnLeave, Self::Terminated];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::OnLeave => "On Leave",
            Self::Terminated => "Terminated",
        }
    }

    /// Look up a status by its label. Matching is exact.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == label)
    }
}

impl fmt::Display for EmployeeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Department
// ---------------------------------------------------------------------------

/// Departments offered by the form's picker. The stored field is free text.
pub const SUGGESTED_DEPARTMENTS: &[&str] = &["IT", "HR", "Finance", "Marketing", "Sales"];

// ---------------------------------------------------------------------------
// IdStrategy
// ---------------------------------------------------------------------------

/// How fresh record IDs are minted.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum IdStrategy {
    /// Clock-seeded, strictly increasing counter.
    #[default]
    Monotonic,
    /// 64 random bits from the OS.
    Random,
}

impl IdStrategy {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Monotonic => "monotonic",
            Self::Random => "random",
        }
    }
}

impl fmt::Display for IdStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_labels_roundtrip_through_serde() {
        for status in EmployeeStatus::ALL {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
            let recovered: EmployeeStatus = serde_json::from_str(&json).unwrap();
            assert_eq!(recovered, status);
        }
    }

    #[test]
    fn status_from_label_is_exact() {
        assert_eq!(
            EmployeeStatus::from_label("On Leave"),
            Some(EmployeeStatus::OnLeave)
        );
        assert_eq!(EmployeeStatus::from_label("on leave"), None);
        assert_eq!(EmployeeStatus::from_label("Retired"), None);
    }

    #[test]
    fn id_strategy_is_snake_case() {
        let json = serde_json::to_string(&IdStrategy::Random).unwrap();
        assert_eq!(json, "\"random\"");
        assert_eq!(IdStrategy::default(), IdStrategy::Monotonic);
    }
}
