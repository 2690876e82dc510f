use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::EmployeeStatus;

/// One row of the employee list: name, email, department, position, status.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeSummary {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub department: Option<String>,
    pub position: String,
    pub status: EmployeeStatus,
}
