//! Insert-or-update decision for validated submissions.
//!
//! `reconcile` is pure apart from drawing fresh ids: it never touches the
//! store it is given, and returns the next collection together with what
//! happened.
//!
//! ```text
//! editing target set and present  → replace in place, keep id   (Updated)
//! editing target set but missing   → append with a fresh id      (Created)
//! no editing target                → append with a fresh id      (Created)
//! ```

use roster_core::entities::EmployeeRecord;
use roster_core::ids::IdSource;
use roster_core::responses::EventKind;

use crate::error::StoreError;
use crate::store::EntityStore;

/// Draws from the id source before falling back to suffixing.
const MAX_ID_ATTEMPTS: usize = 64;

/// Result of reconciling one submission.
#[derive(Debug, Clone, PartialEq)]
pub struct Reconciled {
    /// The collection after the change.
    pub collection: EntityStore,
    pub kind: EventKind,
    /// The record as stored, carrying its id.
    pub record: EmployeeRecord,
}

/// Merge `validated` into `collection`.
///
/// `validated.id` is ignored: an update keeps the target's id, an insert gets
/// a fresh one that no record in `collection` has.
#[must_use]
pub fn reconcile(
    collection: &EntityStore,
    validated: EmployeeRecord,
    editing_target: Option<&str>,
    ids: &mut dyn IdSource,
) -> Reconciled {
    let mut next = collection.clone();

    if let Some(id) = editing_target {
        match next.replace(id, validated.clone()) {
            Ok(_) => {
                let record = validated.with_id(id);
                return Reconciled {
                    collection: next,
                    kind: EventKind::Updated,
                    record,
                };
            }
            Err(StoreError::NotFound(_)) => {
                tracing::debug!(id, "editing target is gone, inserting as new record");
            }
            Err(e) => tracing::debug!(id, "editing target not replaceable: {e}"),
        }
    }

    let record = insert_fresh(&mut next, validated, ids);
    Reconciled {
        collection: next,
        kind: EventKind::Created,
        record,
    }
}

/// Insert `record` under an id no other record has.
fn insert_fresh(
    store: &mut EntityStore,
    record: EmployeeRecord,
    ids: &mut dyn IdSource,
) -> EmployeeRecord {
    let mut candidate = String::new();
    for _ in 0..MAX_ID_ATTEMPTS {
        candidate = ids.next_id();
        if !candidate.is_empty() && !store.contains(&candidate) {
            return push(store, record.with_id(candidate));
        }
        tracing::debug!(id = %candidate, "fresh id collides, drawing again");
    }

    // The source keeps repeating itself; disambiguate its last answer.
    let base = if candidate.is_empty() {
        roster_core::ids::PREFIX_EMPLOYEE.to_string()
    } else {
        candidate
    };
    let free = (1..)
        .map(|n| format!("{base}-{n}"))
        .find(|id| !store.contains(id));
    let id = free.unwrap_or(base);
    push(store, record.with_id(id))
}

fn push(store: &mut EntityStore, record: EmployeeRecord) -> EmployeeRecord {
    if let Err(e) = store.insert(record.clone()) {
        // Unreachable: the id was checked against this store just before.
        tracing::error!("fresh record rejected by store: {e}");
    }
    record
}
