use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use revenue_tracker::modules::revenue::core::event::RevenueEvent;
use revenue_tracker::shared::core::clock::SystemClock;
use revenue_tracker::shared::infrastructure::event_store::in_memory::InMemoryEventStore;
use revenue_tracker::shell::config::AppConfig;
use revenue_tracker::shell::http::router;
use revenue_tracker::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env();

    // In-memory only: events are lost on restart
    let event_store = Arc::new(InMemoryEventStore::<RevenueEvent>::new());
    let state = AppState::new(event_store, Arc::new(SystemClock), config.cache_ttl);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!(
        addr = %config.addr,
        cache_ttl_ms = config.cache_ttl.num_milliseconds(),
        "revenue tracker listening"
    );
    axum::serve(listener, router(state)).await?;
    Ok(())
}
