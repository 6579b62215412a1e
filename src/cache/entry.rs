//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// Represents a single cache entry with its value and expiry metadata.
///
/// The payload is opaque to the cache: it is stored and handed back as-is,
/// never inspected or mutated.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// Monotonic instant recorded at insertion
    pub stored_at: Instant,
    /// Duration after which the entry is considered stale
    pub ttl: Duration,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new cache entry, stamping it with the current instant.
    ///
    /// # Arguments
    /// * `value` - The value to store
    /// * `ttl` - Duration after which the entry expires
    pub fn new(value: V, ttl: Duration) -> Self {
        Self {
            value,
            stored_at: Instant::now(),
            ttl,
        }
    }

    // == Is Expired ==
    /// Checks if the entry has outlived its TTL.
    ///
    /// Boundary condition: an entry is expired only once its age strictly
    /// exceeds the TTL. At an age of exactly `ttl` the entry is still live.
    pub fn is_expired(&self) -> bool {
        self.stored_at.elapsed() > self.ttl
    }

    // == Time To Live ==
    /// Returns the remaining TTL, saturating at zero once expired.
    ///
    /// Useful for debugging and statistics purposes.
    pub fn ttl_remaining(&self) -> Duration {
        self.ttl.saturating_sub(self.stored_at.elapsed())
    }
}
