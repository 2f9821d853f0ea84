use super::*;

#[test]
fn memory_storage_starts_empty() {
    let storage = MemoryStorage::new();
    assert_eq!(storage.get("chat_history"), None);
}

#[test]
fn memory_storage_set_overwrites() {
    let storage = MemoryStorage::new();
    storage.set("k", "one");
    storage.set("k", "two");
    assert_eq!(storage.get("k").as_deref(), Some("two"));
}

#[test]
fn load_json_returns_none_for_garbage() {
    let storage = MemoryStorage::new();
    storage.set("k", "{not json");
    assert_eq!(load_json::<Vec<u32>>(&storage, "k"), None);
}

#[test]
fn save_json_then_load_json_preserves_value() {
    let storage = MemoryStorage::new();
    save_json(&storage, "k", &vec![3_u32, 1, 2]);
    assert_eq!(storage.get("k").as_deref(), Some("[3,1,2]"));
    assert_eq!(load_json::<Vec<u32>>(&storage, "k"), Some(vec![3, 1, 2]));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_storage_is_noop_in_non_hydrate_tests() {
    BrowserStorage.set("k", "v");
    assert_eq!(BrowserStorage.get("k"), None);
}
