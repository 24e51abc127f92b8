use super::{DatabaseId, TableId};

/// Read-only view of a table in a connected external database.
///
/// Owned by the table collaborator; the core only reads `name` while
/// deriving qualified names.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Table {
    pub id: TableId,

    /// The database this table was discovered in
    pub db_id: DatabaseId,

    /// The raw table name
    pub name: String,

    /// Human-readable name
    pub display_name: String,
}

/// Read-only view of a connected external database.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Database {
    pub id: DatabaseId,
    pub name: String,
}

impl Table {
    pub fn new(id: TableId, db_id: DatabaseId, name: impl Into<String>) -> Self {
        let name = name.into();
        let display_name = super::humanize(&name);
        Self {
            id,
            db_id,
            name,
            display_name,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
