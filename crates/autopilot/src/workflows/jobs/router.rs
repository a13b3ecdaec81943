use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;

use super::domain::{JobDraft, JobId, JobStatus, JobTrack};
use super::repository::{JobFilter, JobRepository, RepositoryError};
use super::service::{JobService, JobServiceError};

/// Router builder exposing HTTP endpoints for job intake and lifecycle.
pub fn job_router<R>(service: Arc<JobService<R>>) -> Router
where
    R: JobRepository + 'static,
{
    Router::new()
        .route("/api/v1/jobs", post(create_handler::<R>).get(list_handler::<R>))
        .route("/api/v1/jobs/:job_id", get(get_handler::<R>))
        .route("/api/v1/jobs/:job_id/status", post(status_handler::<R>))
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct StatusChangeRequest {
    pub(crate) status: String,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ListQuery {
    pub(crate) track: Option<String>,
    pub(crate) status: Option<String>,
}

pub(crate) async fn create_handler<R>(
    State(service): State<Arc<JobService<R>>>,
    axum::Json(draft): axum::Json<JobDraft>,
) -> Response
where
    R: JobRepository + 'static,
{
    let now = Utc::now();
    match service.create(draft, now) {
        Ok(job) => (StatusCode::CREATED, axum::Json(job.view(now))).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn status_handler<R>(
    State(service): State<Arc<JobService<R>>>,
    Path(job_id): Path<String>,
    axum::Json(request): axum::Json<StatusChangeRequest>,
) -> Response
where
    R: JobRepository + 'static,
{
    let now = Utc::now();
    match service.set_status(&JobId(job_id), &request.status, now) {
        Ok(job) => (StatusCode::OK, axum::Json(job.view(now))).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn get_handler<R>(
    State(service): State<Arc<JobService<R>>>,
    Path(job_id): Path<String>,
) -> Response
where
    R: JobRepository + 'static,
{
    let now = Utc::now();
    match service.get(&JobId(job_id)) {
        Ok(job) => (StatusCode::OK, axum::Json(job.view(now))).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn list_handler<R>(
    State(service): State<Arc<JobService<R>>>,
    Query(query): Query<ListQuery>,
) -> Response
where
    R: JobRepository + 'static,
{
    let mut filter = JobFilter::default();

    if let Some(raw) = query.track.as_deref() {
        match JobTrack::parse(raw) {
            Some(track) => filter.track = Some(track),
            None => {
                let payload = json!({ "error": format!("unknown track '{raw}'") });
                return (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response();
            }
        }
    }
    if let Some(raw) = query.status.as_deref() {
        match JobStatus::parse(raw) {
            Some(status) => filter.status = Some(status),
            None => {
                let payload = json!({ "error": format!("unknown status '{raw}'") });
                return (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response();
            }
        }
    }

    let now = Utc::now();
    match service.list(&filter) {
        Ok(jobs) => {
            let views: Vec<_> = jobs.iter().map(|job| job.view(now)).collect();
            (StatusCode::OK, axum::Json(views)).into_response()
        }
        Err(err) => error_response(err),
    }
}

fn error_response(err: JobServiceError) -> Response {
    let payload = json!({ "error": err.to_string() });
    let status = match &err {
        JobServiceError::Validation(_) | JobServiceError::InvalidTransition(_) => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        JobServiceError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
        JobServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        JobServiceError::Repository(RepositoryError::Unavailable(_)) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    (status, axum::Json(payload)).into_response()
}
