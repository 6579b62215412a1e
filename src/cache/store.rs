//! Cache Store Module
//!
//! Main cache engine combining HashMap storage with lazy TTL expiration.

use std::collections::HashMap;
use std::time::Duration;

use crate::cache::{CacheEntry, CacheStats, DEFAULT_TTL};

// == TTL Cache ==
/// In-memory key-value cache with per-entry TTL expiration.
///
/// Expired entries are removed lazily by the `get`/`contains` call that finds
/// them; there is no background sweeping unless the hosting application opts
/// into [`crate::tasks::spawn_sweep_task`]. The cache arbitrates nothing by
/// itself: callers in a multi-threaded setting must wrap it in a lock covering
/// each individual operation, since `get` and `contains` mutate the map when
/// they purge.
#[derive(Debug)]
pub struct TtlCache<V> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<V>>,
    /// TTL applied to entries stored without an explicit TTL
    default_ttl: Duration,
    /// Number of successful retrievals
    hits: u64,
    /// Number of failed retrievals (key not found or expired)
    misses: u64,
}

impl<V> TtlCache<V> {
    // == Constructor ==
    /// Creates a new empty cache with the given default TTL.
    ///
    /// # Arguments
    /// * `default_ttl` - TTL applied when `set` is called without one
    pub fn new(default_ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            default_ttl,
            hits: 0,
            misses: 0,
        }
    }

    // == Set ==
    /// Stores a value under `key` with an optional TTL.
    ///
    /// Always succeeds. An existing entry for `key` is fully replaced: value,
    /// insertion timestamp, and TTL.
    ///
    /// # Arguments
    /// * `key` - The key to store under
    /// * `value` - The value to store
    /// * `ttl` - Optional TTL (uses the default TTL if `None`)
    pub fn set(&mut self, key: impl Into<String>, value: V, ttl: Option<Duration>) {
        let ttl = ttl.unwrap_or(self.default_ttl);
        self.entries.insert(key.into(), CacheEntry::new(value, ttl));
    }

    // == Get ==
    /// Retrieves the value stored under `key`, if it is still live.
    ///
    /// Returns `None` if no entry exists or if the entry has expired; an
    /// expired entry is removed as a side effect before returning. A miss is
    /// a normal outcome, not an error.
    pub fn get(&mut self, key: &str) -> Option<&V> {
        if self.entries.get(key).is_some_and(|entry| entry.is_expired()) {
            self.entries.remove(key);
            self.misses += 1;
            return None;
        }

        if self.entries.contains_key(key) {
            self.hits += 1;
        } else {
            self.misses += 1;
        }

        self.entries.get(key).map(|entry| &entry.value)
    }

    // == Contains ==
    /// Reports whether a live entry exists for `key`.
    ///
    /// Applies the same expiry-check-and-purge as `get`. Presence can change
    /// between a `contains` call and a later `get`, so prefer `get` directly
    /// when the value is needed.
    pub fn contains(&mut self, key: &str) -> bool {
        if self.entries.get(key).is_some_and(|entry| entry.is_expired()) {
            self.entries.remove(key);
            return false;
        }

        self.entries.contains_key(key)
    }

    // == Delete ==
    /// Removes the entry for `key` if present; no-op otherwise.
    pub fn delete(&mut self, key: &str) {
        self.entries.remove(key);
    }

    // == Clear ==
    /// Removes all entries unconditionally.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    // == Stats ==
    /// Returns a snapshot of the cache contents and counters.
    ///
    /// The snapshot lists every key currently held, including entries that
    /// are stale but not yet purged; this call performs no expiry checks.
    /// Later mutations to the cache do not affect a returned snapshot.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            size: self.entries.len(),
            keys: self.entries.keys().cloned().collect(),
            hits: self.hits,
            misses: self.misses,
        }
    }

    // == Purge Expired ==
    /// Removes all expired entries from the cache.
    ///
    /// Returns the number of entries removed. Only the optional background
    /// sweep calls this; normal operation relies on lazy purging.
    pub fn purge_expired(&mut self) -> usize {
        let expired_keys: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired())
            .map(|(key, _)| key.clone())
            .collect();

        let count = expired_keys.len();

        for key in expired_keys {
            self.entries.remove(&key);
        }

        count
    }

    // == Length ==
    /// Returns the current number of entries, stale ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // == Default TTL ==
    /// Returns the TTL applied to entries stored without an explicit one.
    pub fn default_ttl(&self) -> Duration {
        self.default_ttl
    }
}

impl<V> Default for TtlCache<V> {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}
