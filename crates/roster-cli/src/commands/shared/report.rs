use roster_core::responses::{CommandEvent, EventKind};
use roster_schema::FieldErrors;
use serde::Serialize;
use serde_json::Value;

use crate::cli::GlobalFlags;
use crate::output::output;

/// What a successful command prints: the notification copy and the record as
/// stored.
#[derive(Debug, Serialize)]
pub struct EventReport {
    pub event: EventKind,
    pub title: &'static str,
    pub description: &'static str,
    pub record: Value,
}

impl EventReport {
    pub fn new(event: &CommandEvent) -> serde_json::Result<Self> {
        Ok(Self {
            event: event.kind,
            title: event.title(),
            description: event.description(),
            record: event.record.to_stored()?,
        })
    }
}

pub fn event(event: &CommandEvent, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&EventReport::new(event)?, flags.format)
}

/// Print every field error and turn the rejection into a command failure.
pub fn rejected(errors: &FieldErrors) -> anyhow::Error {
    for error in errors.iter() {
        eprintln!("  {}: {}", error.field, error.message);
    }
    anyhow::anyhow!("{} field(s) failed validation", errors.len())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use roster_core::entities::EmployeeRecord;
    use serde_json::json;

    use super::*;

    #[test]
    fn record_is_nested_beside_notification_copy() {
        let mut record = EmployeeRecord {
            id: "emp-1".into(),
            first_name: "Jo".into(),
            ..EmployeeRecord::default()
        };
        record.extra.insert("title".into(), json!("VP"));
        record.extra.insert("event".into(), json!("party"));
        let event = CommandEvent::new(EventKind::Deleted, record);

        let value = serde_json::to_value(EventReport::new(&event).unwrap()).unwrap();
        assert_eq!(value["event"], "deleted");
        assert_eq!(value["title"], "Employee Deleted");
        assert_eq!(value["record"]["id"], "emp-1");
        assert_eq!(value["record"]["firstName"], "Jo");
        assert_eq!(value["record"]["title"], "VP");
        assert_eq!(value["record"]["event"], "party");
        assert_eq!(value.as_object().unwrap().len(), 4);
    }
}
