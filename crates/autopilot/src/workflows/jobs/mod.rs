//! Job intake and lifecycle tracking.
//!
//! Status changes flow through [`JobService`] only; the generation workflows
//! read job state but never mutate it. Deadline urgency lives in [`sla`] and
//! is recomputed at read time.

pub mod domain;
pub mod repository;
pub mod router;
pub mod service;
pub mod sla;

pub use domain::{
    classify_transition, Job, JobDraft, JobId, JobStatus, JobTrack, StatusTransition,
    TransitionKind,
};
pub use repository::{JobFilter, JobRepository, JobView, RepositoryError};
pub use router::job_router;
pub use service::{JobService, JobServiceError};
pub use sla::SlaStatus;
