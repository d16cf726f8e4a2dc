use axum::{Json, body::Bytes, extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;

use crate::modules::revenue::core::event::RevenueEvent;
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct TrackRevenueResponse {
    pub status: &'static str,
}

// The body is decoded regardless of Content-Type: beacon senders do not
// always set it.
pub async fn handle(State(state): State<AppState>, body: Bytes) -> impl IntoResponse {
    let event: RevenueEvent = match serde_json::from_slice(&body) {
        Ok(event) => event,
        Err(err) => {
            tracing::debug!(error = %err, "rejected revenue payload");
            return (StatusCode::BAD_REQUEST, "invalid JSON").into_response();
        }
    };

    match state.track_handler.handle(event).await {
        Ok(()) => (
            StatusCode::CREATED,
            Json(TrackRevenueResponse { status: "ok" }),
        )
            .into_response(),
        Err(err) => {
            tracing::error!(error = %err, "failed to store revenue event");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
