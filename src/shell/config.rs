use crate::modules::revenue::core::read_cache::DEFAULT_TTL_MS;
use chrono::Duration;
use std::net::SocketAddr;

/// Runtime settings, read from the environment (and `.env` when present).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub addr: SocketAddr,
    pub cache_ttl: Duration,
}

impl AppConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let addr = lookup("REVENUE_TRACKER_ADDR")
            .and_then(|raw| match raw.parse::<SocketAddr>() {
                Ok(addr) => Some(addr),
                Err(err) => {
                    tracing::warn!(
                        %raw,
                        error = %err,
                        "invalid REVENUE_TRACKER_ADDR, using default"
                    );
                    None
                }
            })
            .unwrap_or_else(default_addr);

        let cache_ttl_ms = lookup("REVENUE_TRACKER_CACHE_TTL_MS")
            .and_then(|raw| match raw.parse::<u32>() {
                Ok(ms) => Some(i64::from(ms)),
                Err(err) => {
                    tracing::warn!(
                        %raw,
                        error = %err,
                        "invalid REVENUE_TRACKER_CACHE_TTL_MS, using default"
                    );
                    None
                }
            })
            .unwrap_or(DEFAULT_TTL_MS);

        Self {
            addr,
            cache_ttl: Duration::milliseconds(cache_ttl_ms),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

fn default_addr() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 8180))
}
