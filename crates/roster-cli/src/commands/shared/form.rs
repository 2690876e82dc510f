use std::io::Read;
use std::path::Path;

use anyhow::{Context, bail};
use roster_core::fields;
use roster_core::submission::RawSubmission;
use serde_json::Value;

use crate::cli::root_commands::FieldArgs;

/// Build the raw submission described by `--json` and the field flags.
///
/// Only fields that were given appear in the result; callers overlay it on
/// the form defaults or on the record being edited.
pub fn collect(args: &FieldArgs) -> anyhow::Result<RawSubmission> {
    let mut submission = match &args.json {
        Some(path) => read_json(path)?,
        None => RawSubmission::new(),
    };

    for (field, value) in flag_values(args) {
        if let Some(value) = value {
            submission.set(field, Value::String(value.clone()));
        }
    }
    Ok(submission)
}

fn flag_values(args: &FieldArgs) -> [(&'static str, &Option<String>); 19] {
    [
        (fields::FIRST_NAME, &args.first_name),
        (fields::LAST_NAME, &args.last_name),
        (fields::EMAIL, &args.email),
        (fields::PHONE, &args.phone),
        (fields::DEPARTMENT, &args.department),
        (fields::POSITION, &args.position),
        (fields::SALARY, &args.salary),
        (fields::HIRE_DATE, &args.hire_date),
        (fields::ADDRESS, &args.address),
        (fields::CITY, &args.city),
        (fields::STATE, &args.state),
        (fields::ZIP_CODE, &args.zip_code),
        (fields::COUNTRY, &args.country),
        (fields::EMERGENCY_CONTACT, &args.emergency_contact),
        (fields::EMERGENCY_PHONE, &args.emergency_phone),
        (fields::STATUS, &args.status),
        (fields::PERFORMANCE_RATING, &args.performance_rating),
        (fields::PROJECT_ASSIGNMENT, &args.project_assignment),
        (fields::NOTES, &args.notes),
    ]
}

fn read_json(path: &Path) -> anyhow::Result<RawSubmission> {
    let text = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read field values from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?
    };

    parse_object(&text).with_context(|| format!("invalid field values in {}", path.display()))
}

fn parse_object(text: &str) -> anyhow::Result<RawSubmission> {
    match serde_json::from_str::<Value>(text)? {
        Value::Object(map) => Ok(RawSubmission::from(map)),
        other => bail!("expected a JSON object of field values, got {other}"),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn only_given_flags_are_collected() {
        let args = FieldArgs {
            first_name: Some("Jo".into()),
            salary: Some("50000".into()),
            ..FieldArgs::default()
        };
        let submission = collect(&args).unwrap();

        assert_eq!(submission.len(), 2);
        assert_eq!(submission.get(fields::FIRST_NAME), Some(&json!("Jo")));
        assert_eq!(submission.get(fields::SALARY), Some(&json!("50000")));
    }

    #[test]
    fn flags_override_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"firstName": "Jo", "lastName": "Li", "salary": 50000}}"#).unwrap();

        let args = FieldArgs {
            json: Some(file.path().to_path_buf()),
            first_name: Some("Joan".into()),
            ..FieldArgs::default()
        };
        let submission = collect(&args).unwrap();

        assert_eq!(submission.get(fields::FIRST_NAME), Some(&json!("Joan")));
        assert_eq!(submission.get(fields::LAST_NAME), Some(&json!("Li")));
        assert_eq!(submission.get(fields::SALARY), Some(&json!(50000)));
    }

    #[test]
    fn non_object_json_is_rejected() {
        assert!(parse_object("[1, 2]").is_err());
        assert!(parse_object("not json").is_err());
    }

    #[test]
    fn missing_json_file_is_an_error() {
        let args = FieldArgs {
            json: Some("/definitely/not/here.json".into()),
            ..FieldArgs::default()
        };
        assert!(collect(&args).is_err());
    }
}
