// In memory implementation of the EventStore port.
//
// Responsibilities
// - Keep every appended event in a single vector, in arrival order.
// - Serialize appends and snapshots behind one exclusive lock.

use crate::shared::infrastructure::event_store::{EventStore, EventStoreError};
use tokio::sync::Mutex;

pub struct InMemoryEventStore<Event: Clone + Send + Sync + 'static> {
    inner: Mutex<Vec<Event>>,
    is_offline: bool,
}

impl<Event: Clone + Send + Sync + 'static> Default for InMemoryEventStore<Event> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Event: Clone + Send + Sync + 'static> InMemoryEventStore<Event> {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Vec::new()),
            is_offline: false,
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }
}

#[async_trait::async_trait]
impl<Event> EventStore<Event> for InMemoryEventStore<Event>
where
    Event: Clone + Send + Sync + 'static,
{
    async fn append(&self, event: Event) -> Result<(), EventStoreError> {
        if self.is_offline {
            return Err(EventStoreError::Backend("Event store offline".into()));
        }

        self.inner.lock().await.push(event);
        Ok(())
    }

    async fn snapshot(&self) -> Result<Vec<Event>, EventStoreError> {
        if self.is_offline {
            return Err(EventStoreError::Backend("Event store offline".into()));
        }

        Ok(self.inner.lock().await.clone())
    }
}
