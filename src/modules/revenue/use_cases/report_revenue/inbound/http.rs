use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::modules::revenue::core::query::RevenueQuery;
use crate::shell::state::AppState;

// Raw pairs rather than a typed struct: a repeated key or a malformed number
// must not be rejected by the extractor. The first value of a key wins.
pub struct RevenueReportParams(Vec<(String, String)>);

impl RevenueReportParams {
    pub fn first(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn to_query(&self) -> RevenueQuery {
        RevenueQuery::from_params(
            self.first("page"),
            self.first("pageSize"),
            self.first("utm_campaign"),
            self.first("period"),
        )
    }
}

pub async fn handle(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> impl IntoResponse {
    let query = RevenueReportParams(pairs).to_query();

    match state.report_handler.report(&query).await {
        Ok(report) => Json(report).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "failed to build revenue report");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

pub async fn handle_campaigns(State(state): State<AppState>) -> impl IntoResponse {
    match state.report_handler.campaigns().await {
        Ok(campaigns) => Json(campaigns).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "failed to list campaigns");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
