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

use super::service::{ApplyPackService, ApplyPackServiceError};
use super::store::{ApplyPackStore, ProfileSource};
use crate::workflows::jobs::repository::{JobRepository, RepositoryError};
use crate::workflows::jobs::JobId;

/// Router builder exposing HTTP endpoints for apply-pack generation.
pub fn apply_pack_router<R, P, S>(service: Arc<ApplyPackService<R, P, S>>) -> Router
where
    R: JobRepository + 'static,
    P: ProfileSource + 'static,
    S: ApplyPackStore + 'static,
{
    Router::new()
        .route(
            "/api/v1/jobs/:job_id/apply-pack",
            post(generate_handler::<R, P, S>).get(latest_handler::<R, P, S>),
        )
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct GenerateRequest {
    pub(crate) jd_text: String,
}

pub(crate) async fn generate_handler<R, P, S>(
    State(service): State<Arc<ApplyPackService<R, P, S>>>,
    Path(job_id): Path<String>,
    axum::Json(request): axum::Json<GenerateRequest>,
) -> Response
where
    R: JobRepository + 'static,
    P: ProfileSource + 'static,
    S: ApplyPackStore + 'static,
{
    match service.generate(&JobId(job_id), &request.jd_text, Utc::now()) {
        Ok(pack) => (StatusCode::OK, axum::Json(pack)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn latest_handler<R, P, S>(
    State(service): State<Arc<ApplyPackService<R, P, S>>>,
    Path(job_id): Path<String>,
) -> Response
where
    R: JobRepository + 'static,
    P: ProfileSource + 'static,
    S: ApplyPackStore + 'static,
{
    match service.latest(&JobId(job_id)) {
        Ok(pack) => (StatusCode::OK, axum::Json(pack)).into_response(),
        Err(err) => error_response(err),
    }
}

fn error_response(err: ApplyPackServiceError) -> Response {
    let payload = json!({ "error": err.to_string() });
    let status = match &err {
        ApplyPackServiceError::EmptyJobDescription => StatusCode::UNPROCESSABLE_ENTITY,
        ApplyPackServiceError::NotGenerated => StatusCode::NOT_FOUND,
        ApplyPackServiceError::Job(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        ApplyPackServiceError::Job(_) | ApplyPackServiceError::Store(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
        ApplyPackServiceError::Generation(_) => StatusCode::BAD_GATEWAY,
    };
    (status, axum::Json(payload)).into_response()
}
