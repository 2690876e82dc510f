//! Wire names of the employee form fields.
//!
//! These are the keys used both in raw submissions and in the persisted
//! collection, so they follow the camelCase names of the stored layout.

pub const ID: &str = "id";
pub const FIRST_NAME: &str = "firstName";
pub const LAST_NAME: &str = "lastName";
pub const EMAIL: &str = "email";
pub const PHONE: &str = "phone";
pub const DEPARTMENT: &str = "department";
pub const POSITION: &str = "position";
pub const SALARY: &str = "salary";
pub const HIRE_DATE: &str = "hireDate";
pub const ADDRESS: &str = "address";
pub const CITY: &str = "city";
pub const STATE: &str = "state";
pub const ZIP_CODE: &str = "zipCode";
pub const COUNTRY: &str = "country";
pub const EMERGENCY_CONTACT: &str = "emergencyContact";
pub const EMERGENCY_PHONE: &str = "emergencyPhone";
pub const NOTES: &str = "notes";
pub const STATUS: &str = "status";
pub const PERFORMANCE_RATING: &str = "performanceRating";
pub const PROJECT_ASSIGNMENT: &str = "projectAssignment";

/// Every form field, in form order. Excludes `id`.
pub const FORM_FIELDS: &[&str] = &[
    FIRST_NAME,
    LAST_NAME,
    EMAIL,
    PHONE,
    DEPARTMENT,
    POSITION,
    SALARY,
    HIRE_DATE,
    ADDRESS,
    CITY,
    STATE,
    ZIP_CODE,
    COUNTRY,
    EMERGENCY_CONTACT,
    EMERGENCY_PHONE,
    STATUS,
    PERFORMANCE_RATING,
    PROJECT_ASSIGNMENT,
    NOTES,
];

/// Fields holding numbers rather than text.
pub const NUMERIC_FIELDS: &[&str] = &[SALARY, PERFORMANCE_RATING];

/// Whether `field` is one of the known form fields.
#[must_use]
pub fn is_form_field(field: &str) -> bool {
    FORM_FIELDS.contains(&field)
}
