use axum::{
    Router,
    http::{Method, header},
    routing::get,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::modules::revenue::use_cases::report_revenue::inbound::http as report_http;
use crate::modules::revenue::use_cases::track_revenue::inbound::http as track_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/track/revenue",
            get(report_http::handle).post(track_http::handle),
        )
        .route(
            "/api/track/revenue/campaigns",
            get(report_http::handle_campaigns),
        )
        .route("/health", get(health))
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .layer(TraceLayer::new_for_http().make_span_with(
            |request: &axum::http::Request<_>| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    path = %request.uri().path(),
                )
            },
        ))
}

async fn health() -> &'static str {
    "ok"
}
