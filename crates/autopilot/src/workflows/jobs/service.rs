use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::warn;

use super::domain::{
    classify_transition, Job, JobDraft, JobId, JobStatus, StatusTransition, TransitionKind,
};
use super::repository::{JobFilter, JobRepository, RepositoryError};

/// Service owning job intake and lifecycle mutation. Generation workflows
/// read jobs through the repository but never change status themselves.
pub struct JobService<R> {
    repository: Arc<R>,
}

impl<R> JobService<R>
where
    R: JobRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Intake a new job. The deadline is fixed here and never silently
    /// mutated afterwards.
    pub fn create(&self, draft: JobDraft, now: DateTime<Utc>) -> Result<Job, JobServiceError> {
        if draft.job_id.0.trim().is_empty() {
            return Err(JobServiceError::Validation("job_id"));
        }
        if draft.company.trim().is_empty() {
            return Err(JobServiceError::Validation("company"));
        }
        if draft.role.trim().is_empty() {
            return Err(JobServiceError::Validation("role"));
        }

        let job = Job {
            job_id: draft.job_id,
            company: draft.company,
            role: draft.role,
            track: draft.track,
            jd_url: draft.jd_url,
            notes: draft.notes,
            apply_by: draft.apply_by,
            status: JobStatus::New,
            created_at: now,
            updated_at: now,
        };

        let stored = self.repository.insert(job)?;
        Ok(stored)
    }

    /// Apply a status change. Unknown status strings are rejected; statuses
    /// outside the forward table are applied anyway and recorded as
    /// overrides so the aggregator can surface them.
    pub fn set_status(
        &self,
        job_id: &JobId,
        raw_status: &str,
        now: DateTime<Utc>,
    ) -> Result<Job, JobServiceError> {
        let next = JobStatus::parse(raw_status)
            .ok_or_else(|| JobServiceError::InvalidTransition(raw_status.to_string()))?;

        let mut job = self
            .repository
            .fetch(job_id)?
            .ok_or(RepositoryError::NotFound)?;

        let kind = classify_transition(job.status, next);
        if kind == TransitionKind::Override {
            warn!(
                job_id = %job_id.0,
                from = job.status.label(),
                to = next.label(),
                "status override outside forward sequence"
            );
        }

        let transition = StatusTransition {
            job_id: job.job_id.clone(),
            from: job.status,
            to: next,
            kind,
            changed_at: now,
        };

        job.status = next;
        job.updated_at = now;

        self.repository.update(job.clone())?;
        self.repository.record_transition(transition)?;

        Ok(job)
    }

    pub fn get(&self, job_id: &JobId) -> Result<Job, JobServiceError> {
        let job = self
            .repository
            .fetch(job_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(job)
    }

    pub fn list(&self, filter: &JobFilter) -> Result<Vec<Job>, JobServiceError> {
        let mut jobs = self.repository.list(filter)?;
        jobs.sort_by(|a, b| a.apply_by.cmp(&b.apply_by).then(a.job_id.cmp(&b.job_id)));
        Ok(jobs)
    }
}

/// Error raised by the job lifecycle service.
#[derive(Debug, thiserror::Error)]
pub enum JobServiceError {
    #[error("missing required field: {0}")]
    Validation(&'static str),
    #[error("unknown status '{0}'")]
    InvalidTransition(String),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
