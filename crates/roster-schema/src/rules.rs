//! Declarative rule set for employee submissions.
//!
//! `EmployeeSchema` is a plain description: an ordered list of fields, each
//! with a kind (text or number), whether it may be omitted, and the rules it
//! must satisfy. The validator walks this list; nothing here touches input.

use std::fmt;
use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use regex::Regex;
use roster_core::enums::EmployeeStatus;
use roster_core::fields;

/// Local-part and domain shape of an email address. Leading dots and `..`
/// are rejected separately because the regex engine has no lookaround.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .expect("email pattern is valid")
});

/// Date layouts accepted for the hire date, besides RFC 3339.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y", "%B %d, %Y", "%b %d, %Y"];
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

const STATUS_LABELS: &[&str] = &[
    EmployeeStatus::Active.as_str(),
    EmployeeStatus::OnLeave.as_str(),
    EmployeeStatus::Terminated.as_str(),
];

/// Whether a field holds text or a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Number,
}

/// A single constraint on a field value.
#[derive(Debug, Clone, PartialEq)]
pub enum Rule {
    /// At least `n` characters.
    MinLength(usize),
    /// At least `n` decimal digits anywhere in the text.
    MinDigits(usize),
    /// Standard `local@domain.tld` shape.
    Email,
    /// Parses as a calendar date.
    Date,
    /// One of a fixed set of labels.
    OneOf(&'static [&'static str]),
    /// Strictly greater than zero.
    Positive,
    /// Within `[min, max]` inclusive.
    Range { min: f64, max: f64 },
}

impl Rule {
    /// Check a text value.
    #[must_use]
    pub fn check_text(&self, value: &str) -> bool {
        match self {
            Self::MinLength(n) => value.chars().count() >= *n,
            Self::MinDigits(n) => value.chars().filter(char::is_ascii_digit).count() >= *n,
            Self::Email => is_email(value),
            Self::Date => is_date(value),
            Self::OneOf(allowed) => allowed.contains(&value),
            Self::Positive | Self::Range { .. } => true,
        }
    }

    /// Check a numeric value.
    #[must_use]
    pub fn check_number(&self, value: f64) -> bool {
        match self {
            Self::Positive => value > 0.0,
            Self::Range { min, max } => (*min..=*max).contains(&value),
            Self::MinLength(_) | Self::MinDigits(_) | Self::Email | Self::Date | Self::OneOf(_) => {
                true
            }
        }
    }

    /// Message shown when this rule fails for the field labelled `label`.
    #[must_use]
    pub fn message(&self, label: &str) -> String {
        match self {
            Self::MinLength(n) => format!("{label} must be at least {n} characters."),
            Self::MinDigits(n) => format!("{label} must be at least {n} digits."),
            Self::Email => "Invalid email address.".to_string(),
            Self::Date => "Invalid date format.".to_string(),
            Self::OneOf(allowed) => format!("{label} must be one of: {}.", allowed.join(", ")),
            Self::Positive => format!("{label} must be a positive number."),
            Self::Range { min, max } => format!("{label} must be between {min} and {max}."),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MinLength(n) => write!(f, "min_length({n})"),
            Self::MinDigits(n) => write!(f, "min_digits({n})"),
            Self::Email => f.write_str("email"),
            Self::Date => f.write_str("date"),
            Self::OneOf(allowed) => write!(f, "one_of({})", allowed.join("|")),
            Self::Positive => f.write_str("positive"),
            Self::Range { min, max } => write!(f, "range({min}..={max})"),
        }
    }
}

/// One field of the schema.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    /// Wire name, e.g. `firstName`.
    pub field: &'static str,
    /// Human label used in messages, e.g. `First name`.
    pub label: &'static str,
    pub kind: FieldKind,
    /// Optional fields may be missing or blank; their rules apply otherwise.
    pub optional: bool,
    pub rules: Vec<Rule>,
}

impl FieldSpec {
    #[must_use]
    pub const fn text(field: &'static str, label: &'static str, rules: Vec<Rule>) -> Self {
        Self {
            field,
            label,
            kind: FieldKind::Text,
            optional: false,
            rules,
        }
    }

    #[must_use]
    pub const fn number(field: &'static str, label: &'static str, rules: Vec<Rule>) -> Self {
        Self {
            field,
            label,
            kind: FieldKind::Number,
            optional: false,
            rules,
        }
    }

    #[must_use]
    pub const fn optional_text(field: &'static str, label: &'static str) -> Self {
        Self {
            field,
            label,
            kind: FieldKind::Text,
            optional: true,
            rules: Vec::new(),
        }
    }
}

/// The rule set an employee submission must satisfy, in form order.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeSchema {
    fields: Vec<FieldSpec>,
}

impl EmployeeSchema {
    /// Build a schema from an explicit field list.
    #[must_use]
    pub const fn new(fields: Vec<FieldSpec>) -> Self {
        Self { fields }
    }

    /// The employee form's rules.
    #[must_use]
    pub fn standard() -> Self {
        use Rule::{Date, Email, MinDigits, MinLength, OneOf, Positive, Range};

        Self::new(vec![
            FieldSpec::text(fields::FIRST_NAME, "First name", vec![MinLength(2)]),
            FieldSpec::text(fields::LAST_NAME, "Last name", vec![MinLength(2)]),
            FieldSpec::text(fields::EMAIL, "Email", vec![Email]),
            FieldSpec::text(fields::PHONE, "Phone number", vec![MinDigits(10)]),
            FieldSpec::optional_text(fields::DEPARTMENT, "Department"),
            FieldSpec::text(fields::POSITION, "Position", vec![MinLength(2)]),
            FieldSpec::number(fields::SALARY, "Salary", vec![Positive]),
            FieldSpec::text(fields::HIRE_DATE, "Hire date", vec![Date]),
            FieldSpec::text(fields::ADDRESS, "Address", vec![MinLength(5)]),
            FieldSpec::text(fields::CITY, "City", vec![MinLength(2)]),
            FieldSpec::text(fields::STATE, "State", vec![MinLength(2)]),
            FieldSpec::text(fields::ZIP_CODE, "Zip code", vec![MinLength(5)]),
            FieldSpec::text(fields::COUNTRY, "Country", vec![MinLength(2)]),
            FieldSpec::text(
                fields::EMERGENCY_CONTACT,
                "Emergency contact",
                vec![MinLength(2)],
            ),
            FieldSpec::text(
                fields::EMERGENCY_PHONE,
                "Emergency phone",
                vec![MinDigits(10)],
            ),
            FieldSpec::text(fields::STATUS, "Status", vec![OneOf(STATUS_LABELS)]),
            FieldSpec::number(
                fields::PERFORMANCE_RATING,
                "Performance rating",
                vec![Range { min: 1.0, max: 5.0 }],
            ),
            FieldSpec::optional_text(fields::PROJECT_ASSIGNMENT, "Project assignment"),
            FieldSpec::optional_text(fields::NOTES, "Notes"),
        ])
    }

    #[must_use]
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Look up one field's spec.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|spec| spec.field == name)
    }

    /// Names of the fields that must be present.
    #[must_use]
    pub fn required_fields(&self) -> Vec<&'static str> {
        self.fields
            .iter()
            .filter(|spec| !spec.optional)
            .map(|spec| spec.field)
            .collect()
    }
}

impl Default for EmployeeSchema {
    fn default() -> Self {
        Self::standard()
    }
}

fn is_email(value: &str) -> bool {
    !value.starts_with('.') && !value.contains("..") && EMAIL_PATTERN.is_match(value)
}

fn is_date(value: &str) -> bool {
    let value = value.trim();
    if value.is_empty() {
        return false;
    }
    DateTime::parse_from_rfc3339(value).is_ok()
        || DATE_FORMATS
            .iter()
            .any(|fmt| NaiveDate::parse_from_str(value, fmt).is_ok())
        || DATETIME_FORMATS
            .iter()
            .any(|fmt| NaiveDateTime::parse_from_str(value, fmt).is_ok())
}
