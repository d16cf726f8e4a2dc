// Query pipeline run on every read: filter, sort, aggregate, paginate.
//
// Totals are computed over the whole filtered set, never over the page.

use crate::modules::revenue::core::event::RevenueEvent;
use crate::modules::revenue::core::query::RevenueQuery;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueReport {
    pub data: Vec<RevenueEvent>,
    pub totals: BTreeMap<String, f64>,
    pub total: usize,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
}

pub fn build_report(
    events: &[RevenueEvent],
    query: &RevenueQuery,
    now: DateTime<Utc>,
) -> RevenueReport {
    let cutoff = query
        .period
        .window()
        .map(|window| now.timestamp_millis() - window.num_milliseconds());

    let mut filtered: Vec<&RevenueEvent> = events
        .iter()
        .filter(|e| matches_campaign(e, query.utm_campaign.as_deref()))
        .filter(|e| cutoff.is_none_or(|cutoff| e.timestamp >= cutoff))
        .collect();

    // stable, so equal timestamps keep arrival order across repeated reads
    filtered.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

    let mut totals = BTreeMap::new();
    for event in &filtered {
        *totals.entry(event.channel.clone()).or_insert(0.0) += event.amount;
    }

    let total = filtered.len();
    let page_size = query.page_size.max(1);
    let page = query.page.max(1);
    let start = (page - 1).saturating_mul(page_size).min(total);
    let end = start.saturating_add(page_size).min(total);

    RevenueReport {
        data: filtered[start..end].iter().map(|&e| e.clone()).collect(),
        totals,
        total,
        page,
        page_size,
        total_pages: total.div_ceil(page_size),
    }
}

/// Distinct campaign names carried by `events`, sorted.
pub fn distinct_campaigns(events: &[RevenueEvent]) -> Vec<String> {
    events
        .iter()
        .filter_map(RevenueEvent::utm_campaign)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

fn matches_campaign(event: &RevenueEvent, campaign: Option<&str>) -> bool {
    match campaign {
        Some(wanted) => event.utm_campaign() == Some(wanted),
        None => true,
    }
}
