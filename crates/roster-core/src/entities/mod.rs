//! Entity structs for Roster domain objects.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for JSON
//! roundtrip and schema validation.

mod employee;
mod summary;

pub use employee::EmployeeRecord;
pub use summary::EmployeeSummary;
