//! Cache provider tests

use fivcglue_domain::ports::{CacheProvider, HealthCheckProvider, HealthStatus};
use fivcglue_providers::cache::{MemoryCacheProvider, NullCacheProvider};
use std::thread;
use std::time::Duration;

const MINUTE: Duration = Duration::from_secs(60);

#[test]
fn test_memory_cache_set_and_get() {
    let cache = MemoryCacheProvider::new();

    assert!(cache.set_value("alpha", Some(b"one"), MINUTE).unwrap());
    assert_eq!(cache.get_value("alpha").unwrap(), Some(b"one".to_vec()));
    assert_eq!(cache.get_value("missing").unwrap(), None);
}

#[test]
fn test_memory_cache_overwrite_replaces_value() {
    let cache = MemoryCacheProvider::new();

    cache.set_value("key", Some(b"first"), MINUTE).unwrap();
    cache.set_value("key", Some(b"second"), MINUTE).unwrap();

    assert_eq!(cache.get_value("key").unwrap(), Some(b"second".to_vec()));
}

#[test]
fn test_memory_cache_delete() {
    let cache = MemoryCacheProvider::new();
    cache.set_value("key", Some(b"value"), MINUTE).unwrap();

    assert!(cache.delete("key").unwrap());
    assert!(!cache.delete("key").unwrap());
    assert_eq!(cache.get_value("key").unwrap(), None);
}

#[test]
fn test_memory_cache_entries_expire() {
    let cache = MemoryCacheProvider::new();
    cache
        .set_value("short", Some(b"gone soon"), Duration::from_millis(50))
        .unwrap();
    cache.set_value("long", Some(b"stays"), MINUTE).unwrap();

    thread::sleep(Duration::from_millis(200));

    assert_eq!(cache.get_value("short").unwrap(), None);
    assert_eq!(cache.get_value("long").unwrap(), Some(b"stays".to_vec()));
}

#[test]
fn test_memory_cache_health() {
    let cache = MemoryCacheProvider::with_capacity(100);
    cache.set_value("key", Some(b"value"), MINUTE).unwrap();

    let check = cache.check();
    assert_eq!(check.status, HealthStatus::Up);
    assert_eq!(cache.max_capacity(), 100);
    assert_eq!(cache.provider_name(), "memory");
}

#[test]
fn test_null_cache_never_stores() {
    let cache = NullCacheProvider::new();

    assert!(cache.set_value("key", Some(b"value"), MINUTE).unwrap());
    assert_eq!(cache.get_value("key").unwrap(), None);
    assert!(!cache.delete("key").unwrap());
    assert_eq!(cache.provider_name(), "null");
}
