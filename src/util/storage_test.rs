use super::*;
use serde_json::json;

#[test]
fn memory_store_set_get_remove() {
    let store = MemoryStore::default();
    assert_eq!(store.get("k").unwrap(), None);
    store.set("k", "v").unwrap();
    assert_eq!(store.get("k").unwrap(), Some("v".to_owned()));
    store.remove("k").unwrap();
    assert_eq!(store.get("k").unwrap(), None);
}

#[test]
fn memory_store_clones_share_entries() {
    let store = MemoryStore::default();
    let other = store.clone();
    store.set("user", "{}").unwrap();
    assert_eq!(other.get("user").unwrap(), Some("{}".to_owned()));
}

#[test]
fn load_json_missing_key_is_none() {
    let store = MemoryStore::default();
    let value: Option<serde_json::Value> = load_json(&store, "user").unwrap();
    assert!(value.is_none());
}

#[test]
fn save_then_load_json() {
    let store = MemoryStore::default();
    save_json(&store, "prefs", &json!({ "tab": "home" })).unwrap();
    let value: Option<serde_json::Value> = load_json(&store, "prefs").unwrap();
    assert_eq!(value, Some(json!({ "tab": "home" })));
}

#[test]
fn load_json_reports_malformed_value() {
    let store = MemoryStore::default();
    store.set("user", "{not json").unwrap();
    let err = load_json::<_, serde_json::Value>(&store, "user").unwrap_err();
    assert!(matches!(err, StorageError::Decode { ref key, .. } if key == "user"));
}

#[cfg(not(feature = "csr"))]
#[test]
fn local_store_unavailable_outside_browser() {
    assert!(matches!(LocalStore.get("user"), Err(StorageError::Unavailable)));
    assert!(matches!(LocalStore.set("user", "{}"), Err(StorageError::Unavailable)));
}
