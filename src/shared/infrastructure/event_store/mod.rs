use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EventStoreError {
    #[error("backend error: {0}")]
    Backend(String),
}

/// Append-only log of events, kept in arrival order.
#[async_trait]
pub trait EventStore<Event: Clone + Send + Sync + 'static>: Send + Sync {
    async fn append(&self, event: Event) -> Result<(), EventStoreError>;

    /// Point-in-time copy of every stored event, oldest first.
    async fn snapshot(&self) -> Result<Vec<Event>, EventStoreError>;
}

pub mod in_memory;
