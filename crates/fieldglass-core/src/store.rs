//! Collaborator seams: the record store the core fetches from, and the
//! observer contract the store drives after writes.

use crate::catalog::{FieldId, FieldRecord, ForeignKeyRecord, Table, TableId};
use crate::Result;

use async_trait::async_trait;
use std::collections::HashSet;

/// Read access to field metadata, implemented by the record-store
/// collaborator.
///
/// All writes, transactions, and retry policy live behind this seam; the
/// core only fetches. `Ok(None)` from the lookup methods means the record
/// does not exist — whether that is an error depends on the call site.
#[async_trait]
pub trait FieldStore: Send + Sync {
    async fn field(&self, id: FieldId) -> Result<Option<FieldRecord>>;

    async fn fields_of_table(&self, table: TableId) -> Result<Vec<FieldRecord>>;

    async fn table(&self, id: TableId) -> Result<Option<Table>>;

    /// The foreign-key relationship whose origin is the given field, if one
    /// is declared.
    async fn foreign_key_for(&self, origin: FieldId) -> Result<Option<ForeignKeyRecord>>;
}

/// Post-write hooks, invoked by the record-store collaborator after it
/// commits a change.
///
/// Implementations own the side effects the original hooks performed
/// implicitly: refreshing value summaries when a field's classification
/// changes, and cascading deletes to nested fields and dependent records.
/// [`summary_refresh_needed`] and [`cascade_delete_targets`] are the pure
/// decision helpers they are expected to build on.
#[async_trait]
pub trait FieldObserver: Send + Sync {
    /// Called after a field is inserted (`before` is `None`) or updated.
    async fn field_saved(&self, before: Option<&FieldRecord>, after: &FieldRecord) -> Result<()>;

    /// Called after a field is deleted.
    async fn field_deleted(&self, field: &FieldRecord) -> Result<()>;
}

/// Whether a save should trigger (re)population of the field's cached value
/// summary.
///
/// True when the saved record is summarizable and is either new or changed
/// classification; a rename or reorder alone never triggers a refresh.
pub fn summary_refresh_needed(before: Option<&FieldRecord>, after: &FieldRecord) -> bool {
    if !after.is_summarizable() {
        return false;
    }
    match before {
        None => true,
        Some(before) => {
            before.special_type != after.special_type || before.field_type != after.field_type
        }
    }
}

/// The transitive child fields an on-delete cascade must also remove,
/// computed from the same flat snapshot the hierarchy builder consumes.
///
/// Children of each visited field are collected in snapshot order. A corrupt
/// snapshot with a parent cycle cannot loop here: each id is visited at most
/// once.
pub fn cascade_delete_targets(field: &FieldRecord, snapshot: &[FieldRecord]) -> Vec<FieldId> {
    let mut out = Vec::new();
    let mut visited = HashSet::from([field.id]);
    let mut stack = vec![field.id];

    while let Some(parent) = stack.pop() {
        for child in snapshot {
            if child.parent_id == Some(parent) && visited.insert(child.id) {
                out.push(child.id);
                stack.push(child.id);
            }
        }
    }

    out
}
