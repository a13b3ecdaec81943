use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use chrono::Utc;
use serde_json::json;

use super::service::{SummaryService, SummaryServiceError};
use crate::workflows::apply_pack::ApplyPackStore;
use crate::workflows::jobs::repository::JobRepository;
use crate::workflows::outreach::OutreachStore;

/// Router builder exposing the daily summary and dashboard endpoints.
pub fn summary_router<R, A, O>(service: Arc<SummaryService<R, A, O>>) -> Router
where
    R: JobRepository + 'static,
    A: ApplyPackStore + 'static,
    O: OutreachStore + 'static,
{
    Router::new()
        .route("/api/v1/summary/today", get(summary_handler::<R, A, O>))
        .route("/api/v1/dashboard/stats", get(dashboard_handler::<R, A, O>))
        .with_state(service)
}

pub(crate) async fn summary_handler<R, A, O>(
    State(service): State<Arc<SummaryService<R, A, O>>>,
) -> Response
where
    R: JobRepository + 'static,
    A: ApplyPackStore + 'static,
    O: OutreachStore + 'static,
{
    match service.today(Utc::now()) {
        Ok(summary) => (StatusCode::OK, axum::Json(summary)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn dashboard_handler<R, A, O>(
    State(service): State<Arc<SummaryService<R, A, O>>>,
) -> Response
where
    R: JobRepository + 'static,
    A: ApplyPackStore + 'static,
    O: OutreachStore + 'static,
{
    match service.dashboard() {
        Ok(stats) => (StatusCode::OK, axum::Json(stats)).into_response(),
        Err(err) => error_response(err),
    }
}

fn error_response(err: SummaryServiceError) -> Response {
    let payload = json!({ "error": err.to_string() });
    (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
}
