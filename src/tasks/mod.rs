//! Background Tasks Module
//!
//! Contains background tasks that can run for the lifetime of the client.
//!
//! # Tasks
//! - Expired-entry sweep: removes stale cache entries at configured intervals.
//!   Opt-in; the cache purges lazily on access by default.

mod sweep;

pub use sweep::spawn_sweep_task;
