//! Integration Tests for the Public Cache API
//!
//! Exercises the crate surface the way a consumer uses it: derive a key,
//! consult the cache, store on a miss, and observe expiry and statistics.

use std::sync::Arc;
use std::thread::sleep;
use std::time::Duration;

use nutritrack::{generate_key, spawn_sweep_task, Config, TtlCache, DEFAULT_TTL};
use serde_json::{json, Value};
use tokio::sync::RwLock;

// == Consumer Flow ==

#[test]
fn test_keyed_miss_then_set_then_hit() {
    let mut cache: TtlCache<Value> = TtlCache::default();

    let params = json!({ "date": "2024-01-01" });
    let key = generate_key("/menus", Some(&params)).unwrap();

    // Miss: the consumer would fetch here
    assert_eq!(cache.get(&key), None);

    let response = json!([{ "id": "menu-1", "name": "Monday lunch" }]);
    cache.set(key.clone(), response.clone(), None);

    // Hit: the same key, derived again, finds the stored response
    let key_again = generate_key("/menus", Some(&params)).unwrap();
    assert_eq!(cache.get(&key_again), Some(&response));
}

#[test]
fn test_key_format_without_params() {
    let key = generate_key::<()>("/menus", None).unwrap();
    assert_eq!(key, "/menus:");
}

#[test]
fn test_default_ttl_is_five_minutes() {
    assert_eq!(DEFAULT_TTL, Duration::from_secs(300));

    let cache: TtlCache<Value> = TtlCache::default();
    assert_eq!(cache.default_ttl(), DEFAULT_TTL);

    let config = Config::default();
    assert_eq!(config.default_ttl, DEFAULT_TTL);
}

// == Expiry ==

#[test]
fn test_expiry_end_to_end() {
    let mut cache: TtlCache<String> = TtlCache::default();

    cache.set("k", "v".to_string(), Some(Duration::from_millis(40)));
    assert_eq!(cache.get("k"), Some(&"v".to_string()));

    sleep(Duration::from_millis(80));

    assert_eq!(cache.get("k"), None);
    // The purge was physical: the key is gone from the snapshot too
    assert!(!cache.stats().keys.contains(&"k".to_string()));
    assert_eq!(cache.stats().size, 0);
}

#[test]
fn test_stale_entries_stay_until_touched() {
    let mut cache: TtlCache<String> = TtlCache::default();

    cache.set("untouched", "v".to_string(), Some(Duration::from_millis(40)));
    sleep(Duration::from_millis(80));

    // No access has happened: the stale entry is still physically present
    assert_eq!(cache.stats().size, 1);

    // contains() applies the same purge as get()
    assert!(!cache.contains("untouched"));
    assert_eq!(cache.stats().size, 0);
}

// == Snapshot Semantics ==

#[test]
fn test_stats_snapshot_survives_mutations() {
    let mut cache: TtlCache<String> = TtlCache::default();

    cache.set("a", "1".to_string(), None);
    cache.set("b", "2".to_string(), None);
    let snapshot = cache.stats();

    cache.clear();

    assert_eq!(snapshot.size, 2);
    assert_eq!(snapshot.keys.len(), 2);
    assert_eq!(cache.stats().size, 0);
}

// == Background Sweep ==

#[tokio::test]
async fn test_sweep_task_over_shared_handle() {
    let cache: Arc<RwLock<TtlCache<Value>>> = Arc::new(RwLock::new(TtlCache::default()));

    {
        let mut cache = cache.write().await;
        cache.set("stale", json!(1), Some(Duration::from_millis(30)));
        cache.set("fresh", json!(2), Some(Duration::from_secs(3600)));
    }

    let handle = spawn_sweep_task(Arc::clone(&cache), Duration::from_millis(50));
    tokio::time::sleep(Duration::from_millis(200)).await;
    handle.abort();

    let stats = cache.read().await.stats();
    assert_eq!(stats.size, 1);
    assert_eq!(stats.keys, vec!["fresh".to_string()]);
}
