#![cfg(not(feature = "hydrate"))]

use super::test_helpers::MemoryStore;
use super::*;

#[test]
fn local_storage_reads_nothing_outside_browser() {
    LocalStorage.save("theme", "dark");
    assert_eq!(LocalStorage.load("theme"), None);
}

#[test]
fn document_root_apply_is_noop_but_callable() {
    DocumentRoot.apply(ThemeMode::Dark);
    DocumentRoot.apply(ThemeMode::Light);
}

#[test]
fn memory_store_round_trips_values() {
    let store = MemoryStore::new();
    assert_eq!(store.load("theme"), None);
    store.save("theme", "dark");
    assert_eq!(store.load("theme").as_deref(), Some("dark"));
}

#[test]
fn memory_store_records_every_write_in_order() {
    let store = MemoryStore::with_value("theme", "light");
    store.save("theme", "dark");
    store.save("theme", "light");
    assert_eq!(
        store.writes(),
        vec![("theme".to_owned(), "dark".to_owned()), ("theme".to_owned(), "light".to_owned())]
    );
}

#[test]
fn memory_store_seeded_value_is_not_a_write() {
    let store = MemoryStore::with_value("theme", "dark");
    assert_eq!(store.get("theme").as_deref(), Some("dark"));
    assert!(store.writes().is_empty());
}
