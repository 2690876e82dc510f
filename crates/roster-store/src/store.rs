//! Ordered in-memory collection of employee records.

use roster_core::entities::EmployeeRecord;

use crate::error::StoreError;

/// The session's source of truth: records in insertion order, unique by id.
///
/// Mutations here do not persist on their own; `RosterService` persists once
/// after each mutating command.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntityStore {
    records: Vec<EmployeeRecord>,
}

impl EntityStore {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Build a store from decoded records, keeping the first of any
    /// duplicate ids and dropping records without one.
    #[must_use]
    pub fn from_records(records: impl IntoIterator<Item = EmployeeRecord>) -> Self {
        let mut store = Self::new();
        for record in records {
            let id = record.id.clone();
            if let Err(e) = store.insert(record) {
                tracing::warn!(id = %id, "skipping record: {e}");
            }
        }
        store
    }

    /// Append a record.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::MissingId` for an empty id and
    /// `StoreError::DuplicateId` if the id is already present.
    pub fn insert(&mut self, record: EmployeeRecord) -> Result<(), StoreError> {
        if record.id.is_empty() {
            return Err(StoreError::MissingId);
        }
        if self.contains(&record.id) {
            return Err(StoreError::DuplicateId(record.id));
        }
        self.records.push(record);
        Ok(())
    }

    /// Replace the record with `id` in place, returning the previous one.
    ///
    /// The stored record always keeps `id`, whatever `record.id` says.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no record has `id`.
    pub fn replace(
        &mut self,
        id: &str,
        record: EmployeeRecord,
    ) -> Result<EmployeeRecord, StoreError> {
        let idx = self
            .position(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        let record = record.with_id(id);
        Ok(std::mem::replace(&mut self.records[idx], record))
    }

    /// Remove the record with `id`, returning it. Order of the rest is kept.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no record has `id`; the store is
    /// left untouched.
    pub fn remove(&mut self, id: &str) -> Result<EmployeeRecord, StoreError> {
        let idx = self
            .position(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        Ok(self.records.remove(idx))
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&EmployeeRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    /// Index of the record with `id`.
    #[must_use]
    pub fn position(&self, id: &str) -> Option<usize> {
        self.records.iter().position(|r| r.id == id)
    }

    /// All records in store order.
    #[must_use]
    pub fn all(&self) -> &[EmployeeRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record(id: &str, first: &str) -> EmployeeRecord {
        EmployeeRecord {
            id: id.into(),
            first_name: first.into(),
            ..EmployeeRecord::default()
        }
    }

    fn ids(store: &EntityStore) -> Vec<&str> {
        store.all().iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn insert_appends_in_order() {
        let mut store = EntityStore::new();
        store.insert(record("a", "A")).unwrap();
        store.insert(record("b", "B")).unwrap();
        assert_eq!(ids(&store), vec!["a", "b"]);
    }

    #[test]
    fn insert_rejects_duplicate_and_empty_ids() {
        let mut store = EntityStore::new();
        store.insert(record("a", "A")).unwrap();
        assert!(matches!(
            store.insert(record("a", "Other")),
            Err(StoreError::DuplicateId(id)) if id == "a"
        ));
        assert!(matches!(
            store.insert(record("", "Nobody")),
            Err(StoreError::MissingId)
        ));
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("a").unwrap().first_name, "A");
    }

    #[test]
    fn replace_keeps_position_and_id() {
        let mut store = EntityStore::from_records([record("a", "A"), record("b", "B"), record("c", "C")]);
        let old = store.replace("b", record("zzz", "Bee")).unwrap();
        assert_eq!(old.first_name, "B");
        assert_eq!(ids(&store), vec!["a", "b", "c"]);
        assert_eq!(store.get("b").unwrap().first_name, "Bee");
    }

    #[test]
    fn remove_missing_is_not_found_and_harmless() {
        let mut store = EntityStore::from_records([record("a", "A")]);
        let before = store.clone();
        assert!(matches!(store.remove("nope"), Err(StoreError::NotFound(_))));
        assert_eq!(store, before);
    }

    #[test]
    fn remove_keeps_order_of_the_rest() {
        let mut store = EntityStore::from_records([record("a", "A"), record("b", "B"), record("c", "C")]);
        store.remove("b").unwrap();
        assert_eq!(ids(&store), vec!["a", "c"]);
    }

    #[test]
    fn from_records_keeps_first_duplicate() {
        let store = EntityStore::from_records([record("a", "First"), record("a", "Second"), record("", "x")]);
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("a").unwrap().first_name, "First");
    }
}
