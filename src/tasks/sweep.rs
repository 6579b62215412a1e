//! Expired-Entry Sweep Task
//!
//! Background task that periodically removes expired cache entries.
//!
//! The cache purges lazily: a stale entry is only removed by the access that
//! finds it, so entries that are never touched again would otherwise linger.
//! Applications that care about that memory can opt into this sweep.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::TtlCache;

/// Spawns a background task that periodically purges expired cache entries.
///
/// The task runs in an infinite loop, sleeping for the specified interval
/// between sweeps. It acquires a write lock on the cache for each sweep.
///
/// # Arguments
/// * `cache` - Shared handle to the cache
/// * `interval` - Time between sweeps
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the task
/// during shutdown.
///
/// # Example
/// ```ignore
/// let handle = spawn_sweep_task(client.cache_handle(), Duration::from_secs(60));
/// // Later, during shutdown:
/// handle.abort();
/// ```
pub fn spawn_sweep_task<V>(cache: Arc<RwLock<TtlCache<V>>>, interval: Duration) -> JoinHandle<()>
where
    V: Send + Sync + 'static,
{
    tokio::spawn(async move {
        info!("Starting expired-entry sweep with interval {:?}", interval);

        loop {
            tokio::time::sleep(interval).await;

            let removed = {
                let mut cache = cache.write().await;
                cache.purge_expired()
            };

            if removed > 0 {
                info!(removed, "sweep removed expired entries");
            } else {
                debug!("sweep found no expired entries");
            }
        }
    })
}
