use crate::modules::revenue::core::event::RevenueEvent;
use crate::modules::revenue::use_cases::report_revenue::handler::RevenueReportHandler;
use crate::modules::revenue::use_cases::track_revenue::handler::TrackRevenueHandler;
use crate::shared::core::clock::Clock;
use crate::shared::infrastructure::event_store::in_memory::InMemoryEventStore;
use chrono::Duration;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub track_handler: Arc<TrackRevenueHandler<InMemoryEventStore<RevenueEvent>>>,
    pub report_handler: Arc<RevenueReportHandler<InMemoryEventStore<RevenueEvent>>>,
}

impl AppState {
    pub fn new(
        event_store: Arc<InMemoryEventStore<RevenueEvent>>,
        clock: Arc<dyn Clock>,
        cache_ttl: Duration,
    ) -> Self {
        Self {
            track_handler: Arc::new(TrackRevenueHandler::new(event_store.clone())),
            report_handler: Arc::new(RevenueReportHandler::new(event_store, clock, cache_ttl)),
        }
    }
}
