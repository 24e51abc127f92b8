//! Derived views over collaborator-owned field metadata

mod field;
pub use field::{humanize, DatabaseId, FieldId, FieldRecord, TableId};

mod fk;
pub use fk::{resolve_foreign_key_target, ForeignKeyRecord};

mod hierarchy;
pub use hierarchy::{build_forest, build_forest_by, FieldNode};

mod qualify;
pub use qualify::{qualified_name, qualified_name_components};

mod table;
pub use table::{Database, Table};

mod ty;
pub use ty::{BaseType, FieldType, SpecialType};
