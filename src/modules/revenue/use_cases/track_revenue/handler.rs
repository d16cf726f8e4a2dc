use crate::modules::revenue::core::event::RevenueEvent;
use crate::modules::revenue::use_cases::errors::ApplicationError;
use crate::shared::infrastructure::event_store::EventStore;
use std::sync::Arc;

pub struct TrackRevenueHandler<TEventStore>
where
    TEventStore: EventStore<RevenueEvent> + Send + Sync + 'static,
{
    event_store: Arc<TEventStore>,
}

impl<TEventStore> TrackRevenueHandler<TEventStore>
where
    TEventStore: EventStore<RevenueEvent> + Send + Sync + 'static,
{
    pub fn new(event_store: Arc<TEventStore>) -> Self {
        Self { event_store }
    }

    /// Stores the event as received. Duplicate transaction ids are kept.
    pub async fn handle(&self, event: RevenueEvent) -> Result<(), ApplicationError> {
        let (channel, amount, timestamp) = (event.channel.clone(), event.amount, event.timestamp);
        self.event_store.append(event).await?;
        tracing::info!(%channel, amount, timestamp, "revenue tracked");
        Ok(())
    }
}
