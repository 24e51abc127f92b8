use super::{FieldId, FieldRecord};
use crate::store::FieldStore;
use crate::Result;

/// A declared reference from one field (origin) to another (destination),
/// possibly in a different table. Owned by the foreign-key collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ForeignKeyRecord {
    pub origin_id: FieldId,
    pub destination_id: FieldId,
}

/// Resolves the field a foreign-key-tagged field points at.
///
/// Fields without the foreign-key tag resolve to `None` immediately, with no
/// store calls. A declared-but-dangling foreign key also resolves to `None`:
/// referential integrity is the collaborator's responsibility, and absence
/// here is not an error.
pub async fn resolve_foreign_key_target(
    store: &impl FieldStore,
    field: &FieldRecord,
) -> Result<Option<FieldRecord>> {
    if !field.is_foreign_key() {
        return Ok(None);
    }

    let Some(fk) = store.foreign_key_for(field.id).await? else {
        return Ok(None);
    };

    store.field(fk.destination_id).await
}
