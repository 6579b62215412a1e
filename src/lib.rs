//! NutriTrack Client - a caching client for the NutriTrack nutrition API
//!
//! Provides typed REST endpoint wrappers with transparent TTL-based response
//! caching: fetched meal plans, menus, and user profiles are kept in an
//! in-memory cache and served from it until their entries expire.

pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;

pub use cache::{generate_key, CacheStats, TtlCache, DEFAULT_TTL};
pub use client::NutritionClient;
pub use config::Config;
pub use error::{ClientError, Result};
pub use tasks::spawn_sweep_task;
