// Time-expiring copy of the event store used by the read side.
//
// The cache is only a value: whoever owns it asks `is_stale` with the current
// time and, if so, hands it a new snapshot via `replace`.

use chrono::{DateTime, Duration, Utc};

pub const DEFAULT_TTL_MS: i64 = 2_000;

#[derive(Debug, Clone)]
pub struct ReadCache<Event> {
    snapshot: Vec<Event>,
    captured_at: Option<DateTime<Utc>>,
}

impl<Event> Default for ReadCache<Event> {
    fn default() -> Self {
        Self {
            snapshot: Vec::new(),
            captured_at: None,
        }
    }
}

impl<Event> ReadCache<Event> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Never populated, or strictly older than `ttl`. Exactly `ttl` old is
    /// still fresh.
    pub fn is_stale(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        match self.captured_at {
            None => true,
            Some(captured_at) => now - captured_at > ttl,
        }
    }

    pub fn replace(&mut self, snapshot: Vec<Event>, now: DateTime<Utc>) {
        self.snapshot = snapshot;
        self.captured_at = Some(now);
    }

    pub fn snapshot(&self) -> &[Event] {
        &self.snapshot
    }

    pub fn captured_at(&self) -> Option<DateTime<Utc>> {
        self.captured_at
    }
}
