//! Client Module
//!
//! Typed client for the NutriTrack REST API with transparent response caching.
//!
//! # Request flow
//! 1. Derive the cache key from the endpoint and query parameters
//! 2. Attempt a cache `get`; on a hit, return the cached payload
//! 3. On a miss, perform the HTTP GET and `set` the response under the key

pub mod endpoints;
pub mod nutrition;

pub use nutrition::NutritionClient;
