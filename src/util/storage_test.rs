use super::*;

#[test]
fn memory_storage_round_trips_and_removes() {
    let mut storage = MemoryStorage::default();
    assert_eq!(storage.load(), None);
    storage.store("a.b.c");
    assert_eq!(storage.load().as_deref(), Some("a.b.c"));
    storage.remove();
    assert_eq!(storage.load(), None);
}

#[test]
fn memory_storage_store_overwrites_previous_token() {
    let mut storage = MemoryStorage::with_token("old");
    storage.store("new");
    assert_eq!(storage.load().as_deref(), Some("new"));
}

#[cfg(not(feature = "csr"))]
#[test]
fn browser_storage_is_empty_outside_the_browser() {
    let mut storage = BrowserStorage::new("jwtToken");
    storage.store("a.b.c");
    assert_eq!(storage.load(), None);
    storage.remove();
}

#[test]
fn failed_storage_write_is_reported() {
    assert!(storage_write_ok::<()>(Ok(()), "remove"));
    assert!(!storage_write_ok(Err("QuotaExceededError"), "remove"));
    assert!(!storage_write_ok(Err("SecurityError"), "persist"));
}
