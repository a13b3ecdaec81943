use std::sync::Arc;

use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Extension, Json, Router};
use serde_json::json;

use crate::infra::{
    default_match_config, default_outreach_policy, AppDirectory, AppState, BuiltinProfileSource,
    InMemoryApplyPackStore, InMemoryJobRepository, InMemoryOutreachStore, LoggingReminderSink,
};
use autopilot::workflows::apply_pack::{apply_pack_router, ApplyPackEngine, ApplyPackService};
use autopilot::workflows::jobs::{job_router, JobService};
use autopilot::workflows::outreach::{outreach_router, OutreachService};
use autopilot::workflows::summary::{summary_router, SummaryService};

pub(crate) type JobSvc = JobService<InMemoryJobRepository>;
pub(crate) type ApplyPackSvc =
    ApplyPackService<InMemoryJobRepository, BuiltinProfileSource, InMemoryApplyPackStore>;
pub(crate) type OutreachSvc =
    OutreachService<InMemoryJobRepository, AppDirectory, InMemoryOutreachStore, LoggingReminderSink>;
pub(crate) type SummarySvc =
    SummaryService<InMemoryJobRepository, InMemoryApplyPackStore, InMemoryOutreachStore>;

pub(crate) struct AppServices {
    pub(crate) jobs: Arc<JobSvc>,
    pub(crate) apply_packs: Arc<ApplyPackSvc>,
    pub(crate) outreach: Arc<OutreachSvc>,
    pub(crate) summary: Arc<SummarySvc>,
}

/// Wire every workflow service onto one set of in-memory stores.
pub(crate) fn build_services(directory: AppDirectory) -> AppServices {
    let repository = Arc::new(InMemoryJobRepository::default());
    let pack_store = Arc::new(InMemoryApplyPackStore::default());
    let outreach_store = Arc::new(InMemoryOutreachStore::default());

    let jobs = Arc::new(JobService::new(repository.clone()));
    let apply_packs = Arc::new(ApplyPackService::new(
        repository.clone(),
        Arc::new(BuiltinProfileSource),
        pack_store.clone(),
        ApplyPackEngine::new(default_match_config()),
    ));
    let outreach = Arc::new(OutreachService::new(
        repository.clone(),
        Arc::new(directory),
        outreach_store.clone(),
        Arc::new(LoggingReminderSink),
        default_outreach_policy(),
    ));
    let summary = Arc::new(SummaryService::new(repository, pack_store, outreach_store));

    AppServices {
        jobs,
        apply_packs,
        outreach,
        summary,
    }
}

pub(crate) fn with_api_routes(services: AppServices) -> Router {
    job_router(services.jobs)
        .merge(apply_pack_router(services.apply_packs))
        .merge(outreach_router(services.outreach))
        .merge(summary_router(services.summary))
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
