use std::sync::Arc;

use chrono::{DateTime, Utc};

use super::domain::ApplyPack;
use super::engine::ApplyPackEngine;
use super::store::{ApplyPackStore, ApplyPackStoreError, ProfileError, ProfileSource};
use crate::workflows::jobs::repository::{JobRepository, RepositoryError};
use crate::workflows::jobs::JobId;

/// Service composing the job store, profile source, and generation engine.
/// Generation either stores and returns a complete pack or fails without
/// leaving partial state behind.
pub struct ApplyPackService<R, P, S> {
    jobs: Arc<R>,
    profiles: Arc<P>,
    store: Arc<S>,
    engine: Arc<ApplyPackEngine>,
}

impl<R, P, S> ApplyPackService<R, P, S>
where
    R: JobRepository + 'static,
    P: ProfileSource + 'static,
    S: ApplyPackStore + 'static,
{
    pub fn new(jobs: Arc<R>, profiles: Arc<P>, store: Arc<S>, engine: ApplyPackEngine) -> Self {
        Self {
            jobs,
            profiles,
            store,
            engine: Arc::new(engine),
        }
    }

    /// Generate (or regenerate) the pack for a job against pasted JD text.
    pub fn generate(
        &self,
        job_id: &JobId,
        jd_text: &str,
        now: DateTime<Utc>,
    ) -> Result<ApplyPack, ApplyPackServiceError> {
        if jd_text.trim().is_empty() {
            return Err(ApplyPackServiceError::EmptyJobDescription);
        }

        let job = self
            .jobs
            .fetch(job_id)?
            .ok_or(RepositoryError::NotFound)?;

        let profile = self.profiles.profile(job.track)?;
        let pack = self.engine.generate(&job, jd_text, &profile, now);
        self.store.put(pack.clone())?;

        Ok(pack)
    }

    /// Fetch the most recently generated pack, if any.
    pub fn latest(&self, job_id: &JobId) -> Result<ApplyPack, ApplyPackServiceError> {
        let job = self
            .jobs
            .fetch(job_id)?
            .ok_or(RepositoryError::NotFound)?;
        self.store
            .fetch(&job.job_id)?
            .ok_or(ApplyPackServiceError::NotGenerated)
    }
}

/// Error raised by the apply-pack service. Validation, not-found, and
/// generation failures stay distinct so callers can tell bad input from a
/// failed drafting dependency.
#[derive(Debug, thiserror::Error)]
pub enum ApplyPackServiceError {
    #[error("job description text is empty")]
    EmptyJobDescription,
    #[error("no apply pack generated for this job yet")]
    NotGenerated,
    #[error(transparent)]
    Job(#[from] RepositoryError),
    #[error("apply pack generation failed: {0}")]
    Generation(#[from] ProfileError),
    #[error(transparent)]
    Store(#[from] ApplyPackStoreError),
}
