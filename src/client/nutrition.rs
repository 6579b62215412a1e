//! Nutrition API Client
//!
//! HTTP plumbing and the cached fetch path shared by all endpoint methods.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use tokio::sync::RwLock;
use tracing::debug;

use crate::cache::{generate_key, CacheStats, TtlCache};
use crate::config::Config;
use crate::error::{ClientError, Result};

/// Client for the NutriTrack REST API with transparent response caching.
///
/// The cache is constructed here and shared by handle: consumers receive this
/// client (or a clone of it), never a process-wide singleton, and its lifetime
/// is controlled by whoever built it.
///
/// Responses are cached as raw JSON so heterogeneous payloads share one cache
/// instance. Every cache operation runs under a single lock acquisition; the
/// write lock is taken even for `get`, which mutates the map when it purges an
/// expired entry.
#[derive(Clone)]
pub struct NutritionClient {
    /// Underlying HTTP client
    http: Client,
    /// Shared response cache
    cache: Arc<RwLock<TtlCache<Value>>>,
    /// API base URL, without a trailing slash
    base_url: String,
    /// Optional bearer token for authenticated endpoints
    auth_token: Option<String>,
}

impl NutritionClient {
    // == Constructor ==
    /// Creates a new client and its cache from configuration.
    ///
    /// # Errors
    /// Returns [`ClientError::Config`] for an empty base URL and
    /// [`ClientError::Http`] if the HTTP client cannot be built.
    pub fn new(config: &Config) -> Result<Self> {
        if config.api_base_url.trim().is_empty() {
            return Err(ClientError::Config(
                "API base URL must not be empty".to_string(),
            ));
        }

        let http = Client::builder().timeout(config.request_timeout).build()?;

        Ok(Self {
            http,
            cache: Arc::new(RwLock::new(TtlCache::new(config.default_ttl))),
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            auth_token: config.auth_token.clone(),
        })
    }

    // == Cache Handle ==
    /// Returns a handle to the shared cache, for the background sweep task
    /// and for tests that seed or inspect entries directly.
    pub fn cache_handle(&self) -> Arc<RwLock<TtlCache<Value>>> {
        Arc::clone(&self.cache)
    }

    // == Cached Fetch ==
    /// Fetches `endpoint` through the cache.
    ///
    /// Returns the cached payload on a hit; on a miss, performs the HTTP GET
    /// and stores the response under the derived key with the given TTL.
    pub(crate) async fn get_cached<P>(
        &self,
        endpoint: &str,
        params: Option<&P>,
        ttl: Option<Duration>,
    ) -> Result<Value>
    where
        P: Serialize + ?Sized,
    {
        let key = generate_key(endpoint, params)?;

        {
            let mut cache = self.cache.write().await;
            if let Some(value) = cache.get(&key) {
                debug!(key = %key, "cache hit");
                return Ok(value.clone());
            }
        }

        debug!(key = %key, "cache miss, fetching");
        let value = self.fetch_json(endpoint, params).await?;

        let mut cache = self.cache.write().await;
        cache.set(key, value.clone(), ttl);

        Ok(value)
    }

    // == Fetch ==
    /// Performs the HTTP GET without consulting the cache.
    async fn fetch_json<P>(&self, endpoint: &str, params: Option<&P>) -> Result<Value>
    where
        P: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, endpoint);

        let mut request = self.http.get(&url);
        if let Some(params) = params {
            request = request.query(params);
        }
        if let Some(token) = &self.auth_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?.error_for_status()?;
        let value = response.json::<Value>().await?;

        Ok(value)
    }

    // == Invalidate ==
    /// Drops the cached response for `endpoint` with the given params.
    ///
    /// No-op if nothing is cached under that key.
    pub async fn invalidate<P>(&self, endpoint: &str, params: Option<&P>) -> Result<()>
    where
        P: Serialize + ?Sized,
    {
        let key = generate_key(endpoint, params)?;
        self.cache.write().await.delete(&key);
        Ok(())
    }

    // == Clear ==
    /// Drops every cached response.
    pub async fn clear_cache(&self) {
        self.cache.write().await.clear();
    }

    // == Stats ==
    /// Returns a snapshot of the cache contents and hit/miss counters.
    pub async fn cache_stats(&self) -> CacheStats {
        self.cache.read().await.stats()
    }
}
