//! Event types returned by the command surface.
//!
//! Each event carries the affected record and the notification copy shown
//! after the command completes.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::EmployeeRecord;

/// What a command did to the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Created,
    Updated,
    Deleted,
}

impl EventKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Updated => "updated",
            Self::Deleted => "deleted",
        }
    }
}

/// Outcome of a successful submit or delete.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct CommandEvent {
    pub kind: EventKind,
    pub record: EmployeeRecord,
}

impl CommandEvent {
    #[must_use]
    pub const fn new(kind: EventKind, record: EmployeeRecord) -> Self {
        Self { kind, record }
    }

    /// Short notification title.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self.kind {
            EventKind::Created => "Employee Added",
            EventKind::Updated => "Employee Updated",
            EventKind::Deleted => "Employee Deleted",
        }
    }

    /// Notification body.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self.kind {
            EventKind::Created => "A new employee has been successfully added to the system.",
            EventKind::Updated => "The employee information has been successfully updated.",
            EventKind::Deleted => "The employee has been removed from the system.",
        }
    }

    /// Deletions are presented as destructive.
    #[must_use]
    pub const fn is_destructive(&self) -> bool {
        matches!(self.kind, EventKind::Deleted)
    }
}
