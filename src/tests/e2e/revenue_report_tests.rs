use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::Duration;
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

use crate::modules::revenue::core::event::RevenueEvent;
use crate::shared::core::clock::ManualClock;
use crate::shared::infrastructure::event_store::in_memory::InMemoryEventStore;
use crate::shell::http::router;
use crate::shell::state::AppState;

const T: i64 = 1_760_000_000_000;

fn make_app() -> (Router, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::at_millis(T));
    let state = AppState::new(
        Arc::new(InMemoryEventStore::<RevenueEvent>::new()),
        clock.clone(),
        Duration::seconds(2),
    );
    (router(state), clock)
}

async fn track(app: &Router, body: serde_json::Value) {
    let response = app
        .clone()
        .oneshot(
            Request::post("/api/track/revenue")
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
}

async fn report(app: &Router, query: &str) -> serde_json::Value {
    let response = app
        .clone()
        .oneshot(
            Request::get(format!("/api/track/revenue{query}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn reports_tracked_revenue_most_recent_first() {
    let (app, _) = make_app();
    track(
        &app,
        serde_json::json!({"channel": "email", "amount": 10, "timestamp": T}),
    )
    .await;
    track(
        &app,
        serde_json::json!({"channel": "social", "amount": 5, "timestamp": T + 1000}),
    )
    .await;

    let json = report(&app, "").await;

    let channels: Vec<_> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["channel"].as_str().unwrap())
        .collect();
    assert_eq!(channels, vec!["social", "email"]);
    assert_eq!(json["totals"], serde_json::json!({"email": 10.0, "social": 5.0}));
    assert_eq!(json["total"], 2);
    assert_eq!(json["totalPages"], 1);
}

#[tokio::test]
async fn serves_the_cached_snapshot_until_the_window_elapses() {
    let (app, clock) = make_app();
    track(&app, serde_json::json!({"channel": "email", "amount": 1, "timestamp": T})).await;
    assert_eq!(report(&app, "").await["total"], 1);

    track(&app, serde_json::json!({"channel": "email", "amount": 1, "timestamp": T})).await;
    clock.advance(Duration::milliseconds(1_500));
    assert_eq!(report(&app, "").await["total"], 1);
    assert_eq!(report(&app, "").await["total"], 1);

    clock.advance(Duration::milliseconds(1_000));
    let json = report(&app, "").await;
    assert_eq!(json["total"], 2);
    assert_eq!(json["totals"]["email"], 2.0);
}

#[tokio::test]
async fn round_trips_the_event_fields() {
    let (app, _) = make_app();
    let event = serde_json::json!({
        "channel": "Facebook",
        "cta_id": "cta-1",
        "transaction_id": "tx-1",
        "amount": 120.0,
        "page": "/",
        "utm": {"utm_campaign": "launch", "utm_source": null},
        "timestamp": T
    });
    track(&app, event.clone()).await;

    let json = report(&app, "?utm_campaign=launch").await;

    assert_eq!(json["data"][0], event);
}
