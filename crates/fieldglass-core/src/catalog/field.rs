use super::{BaseType, FieldType, SpecialType};
use heck::ToTitleCase;
use std::fmt;

/// Metadata record describing one column/attribute of a connected external
/// table.
///
/// Records are created, updated, and deleted entirely by the record-store
/// collaborator; this crate only reads already-materialized snapshots and
/// never persists anything (see [`crate::store::FieldStore`]).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldRecord {
    /// Uniquely identifies the field within the catalog.
    pub id: FieldId,

    /// The raw column/attribute name
    pub name: String,

    /// Human-readable name, derived from `name` at creation when not
    /// supplied explicitly. Never re-derived afterwards.
    pub display_name: String,

    /// The owning table. Always present, including for nested fields.
    pub table_id: TableId,

    /// The field that logically contains this one (e.g. a nested document
    /// field). `None` for top-level fields.
    pub parent_id: Option<FieldId>,

    /// The field's underlying storage type
    pub base_type: BaseType,

    /// Semantic tag, when one has been assigned
    pub special_type: Option<SpecialType>,

    /// Coarse usage classification
    pub field_type: FieldType,
}

#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldId(pub u64);

#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableId(pub u64);

#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DatabaseId(pub u64);

impl FieldRecord {
    /// Creates a record with a derived display name.
    pub fn new(
        id: FieldId,
        table_id: TableId,
        name: impl Into<String>,
        base_type: BaseType,
        field_type: FieldType,
    ) -> Self {
        let name = name.into();
        let display_name = humanize(&name);
        Self {
            id,
            name,
            display_name,
            table_id,
            parent_id: None,
            base_type,
            special_type: None,
            field_type,
        }
    }

    pub fn with_parent(mut self, parent: FieldId) -> Self {
        self.parent_id = Some(parent);
        self
    }

    pub fn with_special_type(mut self, special_type: SpecialType) -> Self {
        self.special_type = Some(special_type);
        self
    }

    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = display_name.into();
        self
    }

    /// Gets the id.
    pub fn id(&self) -> FieldId {
        self.id
    }

    /// Gets the raw name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Gets the human-readable name.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Returns `true` if the field has no containing parent field.
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    /// Returns `true` if the field is tagged as a foreign key.
    pub fn is_foreign_key(&self) -> bool {
        self.special_type == Some(SpecialType::ForeignKey)
    }

    /// Returns `true` if the field's distinct values should be summarized
    /// for pickers and previews.
    pub fn is_summarizable(&self) -> bool {
        !self.field_type.is_sensitive()
            && self
                .special_type
                .map(|special| special.is_summarizable())
                .unwrap_or(false)
    }
}

/// Derives a human-readable display name from a raw column name.
///
/// A trailing `_id` suffix is dropped, then the remainder is title-cased:
/// `user_id` becomes `User`, `created_at` becomes `Created At`.
pub fn humanize(name: &str) -> String {
    let base = match name.strip_suffix("_id") {
        Some(stripped) if !stripped.is_empty() => stripped,
        _ => name,
    };
    base.to_title_case()
}

impl From<&FieldRecord> for FieldId {
    fn from(val: &FieldRecord) -> Self {
        val.id
    }
}

impl fmt::Debug for FieldId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "FieldId({})", self.0)
    }
}

impl fmt::Debug for TableId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "TableId({})", self.0)
    }
}

impl fmt::Debug for DatabaseId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "DatabaseId({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn humanize_strips_id_suffix() {
        assert_eq!(humanize("user_id"), "User");
        assert_eq!(humanize("created_at"), "Created At");
        assert_eq!(humanize("id"), "Id");
        assert_eq!(humanize("price"), "Price");
    }

    #[test]
    fn new_derives_display_name_once() {
        let field = FieldRecord::new(
            FieldId(1),
            TableId(1),
            "tax_amount",
            BaseType::Decimal,
            FieldType::Metric,
        );
        assert_eq!(field.display_name(), "Tax Amount");

        let renamed = field.with_display_name("Tax");
        assert_eq!(renamed.display_name(), "Tax");
    }
}
