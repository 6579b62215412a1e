//! Cache Statistics Module
//!
//! Point-in-time snapshots of cache contents and retrieval counters.

use serde::Serialize;

// == Cache Stats ==
/// Snapshot of the cache state at the moment it was taken.
///
/// Decoupled from the cache: later mutations never alter a returned snapshot.
/// `keys` lists every key physically held, including entries that are stale
/// but not yet purged.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CacheStats {
    /// Current number of entries, stale ones included
    pub size: usize,
    /// All keys currently held
    pub keys: Vec<String>,
    /// Number of successful retrievals over the cache's lifetime
    pub hits: u64,
    /// Number of failed retrievals (key not found or expired)
    pub misses: u64,
}

impl CacheStats {
    // == Hit Rate ==
    /// Calculates the cache hit rate.
    ///
    /// Returns hits / (hits + misses), or 0.0 if no retrievals have occurred.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}
