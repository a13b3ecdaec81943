use chrono::NaiveDate;

use super::domain::{ApplyPack, CandidateProfile};
use crate::workflows::jobs::{JobId, JobTrack};

/// Storage abstraction for generated packs. `put` replaces any prior pack
/// for the same job; the core keeps no version history.
pub trait ApplyPackStore: Send + Sync {
    fn put(&self, pack: ApplyPack) -> Result<(), ApplyPackStoreError>;
    fn fetch(&self, job_id: &JobId) -> Result<Option<ApplyPack>, ApplyPackStoreError>;
    fn generated_on(&self, day: NaiveDate) -> Result<Vec<ApplyPack>, ApplyPackStoreError>;
    fn all(&self) -> Result<Vec<ApplyPack>, ApplyPackStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ApplyPackStoreError {
    #[error("apply pack store unavailable: {0}")]
    Unavailable(String),
}

/// Boundary to the external resume/profile store (skills plus bullet bank
/// per track).
pub trait ProfileSource: Send + Sync {
    fn profile(&self, track: JobTrack) -> Result<CandidateProfile, ProfileError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("profile source unavailable: {0}")]
    Unavailable(String),
    #[error("no profile configured for track {0}")]
    MissingTrack(&'static str),
}
