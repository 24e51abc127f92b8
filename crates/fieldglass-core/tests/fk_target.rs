mod support;

use fieldglass_core::catalog::{
    resolve_foreign_key_target, FieldId, ForeignKeyRecord, SpecialType,
};
use support::{field, MemoryStore};

#[tokio::test]
async fn non_fk_field_resolves_to_none_without_lookups() {
    let store = MemoryStore::new();
    let plain = field(1, "total");

    let target = resolve_foreign_key_target(&store, &plain).await.unwrap();
    assert!(target.is_none());
    assert_eq!(store.calls(), 0);
}

#[tokio::test]
async fn undeclared_fk_resolves_to_none() {
    let store = MemoryStore::new();
    let fk_field = field(1, "user_id").with_special_type(SpecialType::ForeignKey);

    let target = resolve_foreign_key_target(&store, &fk_field).await.unwrap();
    assert!(target.is_none());
}

#[tokio::test]
async fn dangling_destination_resolves_to_none() {
    let mut store = MemoryStore::new();
    let fk_field = field(1, "user_id").with_special_type(SpecialType::ForeignKey);
    store.add_field(fk_field.clone());
    store.add_foreign_key(ForeignKeyRecord {
        origin_id: FieldId(1),
        destination_id: FieldId(200),
    });

    let target = resolve_foreign_key_target(&store, &fk_field).await.unwrap();
    assert!(target.is_none());
}

#[tokio::test]
async fn declared_fk_resolves_to_destination_field() {
    let mut store = MemoryStore::new();
    let fk_field = field(1, "user_id").with_special_type(SpecialType::ForeignKey);
    let destination = field(200, "id").with_special_type(SpecialType::PrimaryKey);
    store.add_field(fk_field.clone());
    store.add_field(destination.clone());
    store.add_foreign_key(ForeignKeyRecord {
        origin_id: FieldId(1),
        destination_id: FieldId(200),
    });

    let target = resolve_foreign_key_target(&store, &fk_field).await.unwrap();
    assert_eq!(target, Some(destination));
}
