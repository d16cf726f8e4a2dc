use crate::modules::revenue::core::event::RevenueEvent;
use crate::modules::revenue::core::query::RevenueQuery;
use crate::modules::revenue::core::read_cache::ReadCache;
use crate::modules::revenue::core::report::{RevenueReport, build_report, distinct_campaigns};
use crate::modules::revenue::use_cases::errors::ApplicationError;
use crate::shared::core::clock::Clock;
use crate::shared::infrastructure::event_store::EventStore;
use chrono::{DateTime, Duration, Utc};
use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard};

/// Serves reads from a cached copy of the store, refreshed at most once per
/// `ttl`. The cache lock is held for the whole refresh plus pipeline run.
pub struct RevenueReportHandler<TEventStore>
where
    TEventStore: EventStore<RevenueEvent> + Send + Sync + 'static,
{
    event_store: Arc<TEventStore>,
    clock: Arc<dyn Clock>,
    ttl: Duration,
    cache: Mutex<ReadCache<RevenueEvent>>,
}

impl<TEventStore> RevenueReportHandler<TEventStore>
where
    TEventStore: EventStore<RevenueEvent> + Send + Sync + 'static,
{
    pub fn new(event_store: Arc<TEventStore>, clock: Arc<dyn Clock>, ttl: Duration) -> Self {
        Self {
            event_store,
            clock,
            ttl,
            cache: Mutex::new(ReadCache::new()),
        }
    }

    pub async fn report(
        &self,
        query: &RevenueQuery,
    ) -> Result<RevenueReport, ApplicationError> {
        let (cache, now) = self.fresh_cache().await?;
        Ok(build_report(cache.snapshot(), query, now))
    }

    pub async fn campaigns(&self) -> Result<Vec<String>, ApplicationError> {
        let (cache, _) = self.fresh_cache().await?;
        Ok(distinct_campaigns(cache.snapshot()))
    }

    async fn fresh_cache(
        &self,
    ) -> Result<(MutexGuard<'_, ReadCache<RevenueEvent>>, DateTime<Utc>), ApplicationError> {
        let mut cache = self.cache.lock().await;
        let now = self.clock.now();
        if cache.is_stale(now, self.ttl) {
            let snapshot = self.event_store.snapshot().await?;
            tracing::debug!(events = snapshot.len(), "read cache refreshed");
            cache.replace(snapshot, now);
        }
        Ok((cache, now))
    }
}
