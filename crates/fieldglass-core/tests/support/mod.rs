#![allow(dead_code)]

use fieldglass_core::catalog::{
    BaseType, DatabaseId, FieldId, FieldRecord, FieldType, ForeignKeyRecord, Table, TableId,
};
use fieldglass_core::{async_trait, FieldStore, Result};

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

/// In-memory [`FieldStore`] that counts every fetch, so tests can assert
/// that an operation performed no unnecessary lookups.
#[derive(Default)]
pub struct MemoryStore {
    fields: HashMap<FieldId, FieldRecord>,
    tables: HashMap<TableId, Table>,
    foreign_keys: Vec<ForeignKeyRecord>,
    calls: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_field(&mut self, field: FieldRecord) {
        self.fields.insert(field.id, field);
    }

    pub fn add_table(&mut self, table: Table) {
        self.tables.insert(table.id, table);
    }

    pub fn add_foreign_key(&mut self, fk: ForeignKeyRecord) {
        self.foreign_keys.push(fk);
    }

    /// Total fetches made since construction.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FieldStore for MemoryStore {
    async fn field(&self, id: FieldId) -> Result<Option<FieldRecord>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.fields.get(&id).cloned())
    }

    async fn fields_of_table(&self, table: TableId) -> Result<Vec<FieldRecord>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .fields
            .values()
            .filter(|field| field.table_id == table)
            .cloned()
            .collect())
    }

    async fn table(&self, id: TableId) -> Result<Option<Table>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.tables.get(&id).cloned())
    }

    async fn foreign_key_for(&self, origin: FieldId) -> Result<Option<ForeignKeyRecord>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .foreign_keys
            .iter()
            .find(|fk| fk.origin_id == origin)
            .copied())
    }
}

pub const ORDERS: TableId = TableId(10);

pub fn orders_table() -> Table {
    Table::new(ORDERS, DatabaseId(1), "orders")
}

pub fn field(id: u64, name: &str) -> FieldRecord {
    FieldRecord::new(FieldId(id), ORDERS, name, BaseType::Text, FieldType::Info)
}

pub fn nested_field(id: u64, name: &str, parent: u64) -> FieldRecord {
    field(id, name).with_parent(FieldId(parent))
}
