use super::FieldRecord;
use crate::store::FieldStore;
use crate::{Error, Result};

use std::collections::HashSet;

/// Derives the ordered name segments locating a field: owning table first,
/// then each ancestor field, then the field's own name.
///
/// The parent chain is fetched link by link from the store, then the owning
/// table of the topmost ancestor. Nothing is cached across calls; repeated
/// resolution of the same field re-fetches, and against an unchanged store
/// yields identical results.
///
/// Fails with a cycle error when the chain revisits an id, a validation
/// error when a parent belongs to a different table, and a dangling
/// reference error when a parent or the table cannot be fetched. The result
/// always has at least two segments.
pub async fn qualified_name_components(
    store: &impl FieldStore,
    field: &FieldRecord,
) -> Result<Vec<String>> {
    let mut components = vec![field.name.clone()];
    let mut visited = HashSet::from([field.id]);
    let mut current = field.clone();

    while let Some(parent_id) = current.parent_id {
        if !visited.insert(parent_id) {
            return Err(Error::cycle(format!(
                "parent chain of field {} revisits field {}",
                field.id.0, parent_id.0
            )));
        }

        let parent = store.field(parent_id).await?.ok_or_else(|| {
            Error::dangling_reference(format!(
                "parent field {} of field {} not found",
                parent_id.0, current.id.0
            ))
        })?;

        if parent.table_id != current.table_id {
            return Err(Error::validation(format!(
                "field {} nests under field {} from another table",
                current.id.0, parent.id.0
            )));
        }

        components.push(parent.name.clone());
        current = parent;
    }

    let table = store.table(current.table_id).await?.ok_or_else(|| {
        Error::dangling_reference(format!(
            "table {} of field {} not found",
            current.table_id.0, field.id.0
        ))
    })?;
    components.push(table.name.clone());

    components.reverse();
    Ok(components)
}

/// The dotted form of [`qualified_name_components`], e.g. `orders.price`.
pub async fn qualified_name(store: &impl FieldStore, field: &FieldRecord) -> Result<String> {
    Ok(qualified_name_components(store, field).await?.join("."))
}
