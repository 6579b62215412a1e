//! NutriTrack Client - demo binary
//!
//! Fetches today's menus and the user profile through the caching client and
//! prints them as JSON.
//!
//! # Startup Sequence
//! 1. Initialize tracing subscriber for logging
//! 2. Load configuration from environment variables
//! 3. Build the client (which constructs and owns the response cache)
//! 4. Optionally start the background expired-entry sweep
//! 5. Fetch and print, then report cache statistics

use nutritrack::models::MenuQuery;
use nutritrack::{spawn_sweep_task, Config, NutritionClient};

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber with env filter
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "nutritrack=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting NutriTrack client");

    let config = Config::from_env();
    info!(
        "Configuration loaded: base_url={}, default_ttl={:?}, request_timeout={:?}",
        config.api_base_url, config.default_ttl, config.request_timeout
    );

    let client = NutritionClient::new(&config)?;

    let sweep_handle = config.sweep_interval.map(|interval| {
        info!("Background sweep enabled");
        spawn_sweep_task(client.cache_handle(), interval)
    });

    let today = chrono::Local::now().date_naive();

    let menus = client.menus(&MenuQuery { date: today }).await?;
    info!(count = menus.len(), "fetched menus for {}", today);
    println!("{}", serde_json::to_string_pretty(&menus)?);

    let profile = client.profile().await?;
    info!("fetched profile for {}", profile.display_name);
    println!("{}", serde_json::to_string_pretty(&profile)?);

    let stats = client.cache_stats().await;
    info!(
        size = stats.size,
        hits = stats.hits,
        misses = stats.misses,
        "cache statistics"
    );

    if let Some(handle) = sweep_handle {
        handle.abort();
    }

    Ok(())
}
