use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;

use super::service::{OutreachService, OutreachServiceError};
use super::store::{ContactDirectory, OutreachStore, ReminderSink};
use crate::workflows::jobs::repository::{JobRepository, RepositoryError};
use crate::workflows::jobs::JobId;

/// Router builder exposing HTTP endpoints for outreach planning and
/// follow-up scheduling.
pub fn outreach_router<R, D, S, N>(service: Arc<OutreachService<R, D, S, N>>) -> Router
where
    R: JobRepository + 'static,
    D: ContactDirectory + 'static,
    S: OutreachStore + 'static,
    N: ReminderSink + 'static,
{
    Router::new()
        .route(
            "/api/v1/jobs/:job_id/outreach/plan",
            post(plan_handler::<R, D, S, N>).get(get_plan_handler::<R, D, S, N>),
        )
        .route(
            "/api/v1/jobs/:job_id/outreach/followups",
            post(followups_handler::<R, D, S, N>),
        )
        .route(
            "/api/v1/jobs/:job_id/outreach/response",
            post(response_handler::<R, D, S, N>),
        )
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct ResponseRequest {
    pub(crate) contact_name: String,
}

pub(crate) async fn plan_handler<R, D, S, N>(
    State(service): State<Arc<OutreachService<R, D, S, N>>>,
    Path(job_id): Path<String>,
) -> Response
where
    R: JobRepository + 'static,
    D: ContactDirectory + 'static,
    S: OutreachStore + 'static,
    N: ReminderSink + 'static,
{
    let today = Utc::now().date_naive();
    match service.plan(&JobId(job_id), today) {
        Ok(plan) => (StatusCode::OK, axum::Json(plan)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn get_plan_handler<R, D, S, N>(
    State(service): State<Arc<OutreachService<R, D, S, N>>>,
    Path(job_id): Path<String>,
) -> Response
where
    R: JobRepository + 'static,
    D: ContactDirectory + 'static,
    S: OutreachStore + 'static,
    N: ReminderSink + 'static,
{
    match service.get_plan(&JobId(job_id)) {
        Ok(plan) => (StatusCode::OK, axum::Json(plan)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn followups_handler<R, D, S, N>(
    State(service): State<Arc<OutreachService<R, D, S, N>>>,
    Path(job_id): Path<String>,
) -> Response
where
    R: JobRepository + 'static,
    D: ContactDirectory + 'static,
    S: OutreachStore + 'static,
    N: ReminderSink + 'static,
{
    match service.schedule_followups(&JobId(job_id)) {
        Ok(ack) => (StatusCode::OK, axum::Json(ack)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn response_handler<R, D, S, N>(
    State(service): State<Arc<OutreachService<R, D, S, N>>>,
    Path(job_id): Path<String>,
    axum::Json(request): axum::Json<ResponseRequest>,
) -> Response
where
    R: JobRepository + 'static,
    D: ContactDirectory + 'static,
    S: OutreachStore + 'static,
    N: ReminderSink + 'static,
{
    match service.record_response(&JobId(job_id), &request.contact_name, Utc::now()) {
        Ok(()) => (StatusCode::ACCEPTED, axum::Json(json!({ "ok": true }))).into_response(),
        Err(err) => error_response(err),
    }
}

fn error_response(err: OutreachServiceError) -> Response {
    let payload = json!({ "error": err.to_string() });
    let status = match &err {
        OutreachServiceError::NoPlan => StatusCode::NOT_FOUND,
        OutreachServiceError::Job(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        OutreachServiceError::Generation(_) | OutreachServiceError::Reminder(_) => {
            StatusCode::BAD_GATEWAY
        }
        OutreachServiceError::Job(_) | OutreachServiceError::Store(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    (status, axum::Json(payload)).into_response()
}
