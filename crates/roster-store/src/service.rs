//! Command surface: submit, select-for-edit, and delete.
//!
//! `RosterService` owns the entity store, the persistence adapter, the
//! validation schema, the id source, and the editing target. Every command
//! runs to completion before returning, and every mutation is followed by
//! exactly one persist call.

use roster_config::RosterConfig;
use roster_core::entities::{EmployeeRecord, EmployeeSummary};
use roster_core::ids::IdSource;
use roster_core::responses::{CommandEvent, EventKind};
use roster_core::submission::RawSubmission;
use roster_schema::{EmployeeSchema, FieldErrors};

use crate::persistence::PersistenceAdapter;
use crate::reconciler::reconcile;
use crate::storage::{FileStorage, KeyValueStorage};
use crate::store::EntityStore;

/// One session over one collection.
pub struct RosterService {
    store: EntityStore,
    persistence: PersistenceAdapter,
    schema: EmployeeSchema,
    ids: Box<dyn IdSource>,
    editing: Option<String>,
}

impl RosterService {
    /// Start a session: rehydrate the collection stored under `key`.
    #[must_use]
    pub fn open(
        storage: Box<dyn KeyValueStorage>,
        key: impl Into<String>,
        ids: Box<dyn IdSource>,
    ) -> Self {
        let persistence = PersistenceAdapter::new(storage, key);
        let store = persistence.rehydrate();
        tracing::debug!(records = store.len(), "session started");
        Self {
            store,
            persistence,
            schema: EmployeeSchema::standard(),
            ids,
            editing: None,
        }
    }

    /// Start a session backed by files, as configured.
    #[must_use]
    pub fn from_config(config: &RosterConfig) -> Self {
        let storage = FileStorage::new(config.storage.resolved_data_dir());
        Self::open(
            Box::new(storage),
            config.storage.key.clone(),
            config.general.id_strategy.source(),
        )
    }

    /// Validate and save a form submission.
    ///
    /// With an editing target set, the target is replaced in place and keeps
    /// its id; otherwise (or if the target has since been deleted) a new
    /// record is appended under a fresh id. The editing target is cleared on
    /// success and left alone on failure.
    ///
    /// # Errors
    ///
    /// Returns every field violation; the store is not touched.
    pub fn submit(&mut self, raw: &RawSubmission) -> Result<CommandEvent, FieldErrors> {
        let validated = self.schema.validate(raw).inspect_err(|errors| {
            tracing::debug!(invalid = errors.len(), "submission rejected");
        })?;

        let target = self.editing.take();
        let outcome = reconcile(
            &self.store,
            validated,
            target.as_deref(),
            self.ids.as_mut(),
        );
        if let (Some(stale), EventKind::Created) = (target.as_deref(), outcome.kind) {
            tracing::warn!(id = stale, "edited record no longer exists; saved as a new record");
        }

        self.store = outcome.collection;
        self.persistence.persist(self.store.all());
        tracing::debug!(id = %outcome.record.id, kind = outcome.kind.as_str(), "submitted");

        Ok(CommandEvent::new(outcome.kind, outcome.record))
    }

    /// Make the record with `id` the editing target and return its fields for
    /// re-populating the form. Does nothing and returns `None` if absent.
    pub fn select_for_edit(&mut self, id: &str) -> Option<RawSubmission> {
        let Some(record) = self.store.get(id) else {
            tracing::debug!(id, "select for edit: no such record");
            return None;
        };
        let form = RawSubmission::from_record(record);
        self.editing = Some(id.to_string());
        Some(form)
    }

    /// Drop the editing target; the next submit creates a record.
    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Remove the record with `id`. Returns `None` (and changes nothing) if
    /// there is no such record. Clears the editing target if it pointed here.
    pub fn delete(&mut self, id: &str) -> Option<CommandEvent> {
        let removed = match self.store.remove(id) {
            Ok(record) => record,
            Err(e) => {
                tracing::debug!(id, "delete ignored: {e}");
                return None;
            }
        };

        if self.editing.as_deref() == Some(id) {
            self.editing = None;
        }
        self.persistence.persist(self.store.all());
        tracing::debug!(id, "deleted");

        Some(CommandEvent::new(EventKind::Deleted, removed))
    }

    /// Records in store order.
    #[must_use]
    pub fn records(&self) -> &[EmployeeRecord] {
        self.store.all()
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&EmployeeRecord> {
        self.store.get(id)
    }

    /// List rows for every record, in store order.
    #[must_use]
    pub fn summaries(&self) -> Vec<EmployeeSummary> {
        self.store.all().iter().map(EmployeeRecord::summary).collect()
    }

    /// Id of the record currently being edited.
    #[must_use]
    pub fn editing_target(&self) -> Option<&str> {
        self.editing.as_deref()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// The schema submissions are checked against.
    #[must_use]
    pub const fn schema(&self) -> &EmployeeSchema {
        &self.schema
    }

    /// The persistence adapter (e.g., to inspect failed syncs).
    #[must_use]
    pub const fn persistence(&self) -> &PersistenceAdapter {
        &self.persistence
    }
}
