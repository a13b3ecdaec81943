use chrono::{DateTime, Utc};
use serde::Serialize;

use super::domain::{Job, JobId, JobStatus, JobTrack, StatusTransition};
use super::sla::{self, SlaStatus};

/// Storage abstraction so the service module can be exercised in isolation.
/// Implementations must serialize writes per job id.
pub trait JobRepository: Send + Sync {
    fn insert(&self, job: Job) -> Result<Job, RepositoryError>;
    fn update(&self, job: Job) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &JobId) -> Result<Option<Job>, RepositoryError>;
    fn list(&self, filter: &JobFilter) -> Result<Vec<Job>, RepositoryError>;
    fn record_transition(&self, transition: StatusTransition) -> Result<(), RepositoryError>;
    fn transitions(&self) -> Result<Vec<StatusTransition>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("job already exists")]
    Conflict,
    #[error("job not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Optional list constraints; empty filter returns everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct JobFilter {
    pub track: Option<JobTrack>,
    pub status: Option<JobStatus>,
}

impl JobFilter {
    pub fn matches(&self, job: &Job) -> bool {
        self.track.map_or(true, |track| job.track == track)
            && self.status.map_or(true, |status| job.status == status)
    }
}

/// Serialized representation of a job with its SLA classification attached.
/// The classification is recomputed on every view, never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct JobView {
    pub job_id: JobId,
    pub company: String,
    pub role: String,
    pub track: JobTrack,
    pub jd_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub apply_by: DateTime<Utc>,
    pub status: JobStatus,
    pub sla: SlaStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Job {
    pub fn view(&self, now: DateTime<Utc>) -> JobView {
        JobView {
            job_id: self.job_id.clone(),
            company: self.company.clone(),
            role: self.role.clone(),
            track: self.track,
            jd_url: self.jd_url.clone(),
            notes: self.notes.clone(),
            apply_by: self.apply_by,
            status: self.status,
            sla: sla::classify(self.apply_by, now),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
