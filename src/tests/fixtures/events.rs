// Shared test fixture for RevenueEvent.
// Starts from the canonical payload in json/revenue_event.json, the same shape
// the tracking script posts.

use crate::modules::revenue::core::event::RevenueEvent;
use std::fs;

pub const REVENUE_EVENT_JSON: &str = "./src/tests/fixtures/json/revenue_event.json";

pub struct RevenueEventBuilder {
    inner: RevenueEvent,
}

impl Default for RevenueEventBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl RevenueEventBuilder {
    pub fn new() -> Self {
        let json_str = fs::read_to_string(REVENUE_EVENT_JSON).unwrap();
        Self {
            inner: serde_json::from_str(&json_str).unwrap(),
        }
    }

    pub fn channel(mut self, v: impl Into<String>) -> Self {
        self.inner.channel = v.into();
        self
    }

    pub fn amount(mut self, v: f64) -> Self {
        self.inner.amount = v;
        self
    }

    pub fn timestamp(mut self, v: i64) -> Self {
        self.inner.timestamp = v;
        self
    }

    pub fn transaction_id(mut self, v: impl Into<String>) -> Self {
        self.inner.transaction_id = Some(v.into());
        self
    }

    pub fn utm(mut self, key: impl Into<String>, value: Option<&str>) -> Self {
        self.inner
            .utm
            .insert(key.into(), value.map(str::to_string));
        self
    }

    pub fn without_utm(mut self) -> Self {
        self.inner.utm.clear();
        self
    }

    pub fn build(self) -> RevenueEvent {
        self.inner
    }
}

#[cfg(test)]
mod revenue_event_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = RevenueEventBuilder::default().build();
        assert_eq!(built.channel, "email");
        assert_eq!(built.cta_id.as_deref(), Some("cta-buy-email"));
        assert_eq!(built.transaction_id.as_deref(), Some("tx-fixed-0001"));
        assert_eq!(built.amount, 75.0);
        assert_eq!(built.page.as_deref(), Some("/"));
        assert_eq!(built.utm_campaign(), Some("launch"));
        assert_eq!(built.timestamp, 1_700_000_000_000);
    }

    #[rstest]
    fn setters_override_fields_and_build_returns_inner() {
        let custom = RevenueEventBuilder::new()
            .channel("social")
            .amount(5.0)
            .timestamp(42)
            .transaction_id("tx-2")
            .utm("utm_campaign", None)
            .build();

        assert_eq!(custom.channel, "social");
        assert_eq!(custom.amount, 5.0);
        assert_eq!(custom.timestamp, 42);
        assert_eq!(custom.transaction_id.as_deref(), Some("tx-2"));
        assert_eq!(custom.utm.get("utm_campaign"), Some(&None));
        assert!(RevenueEventBuilder::new().without_utm().build().utm.is_empty());
    }
}
