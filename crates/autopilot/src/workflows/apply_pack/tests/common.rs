use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};

use crate::workflows::apply_pack::domain::{ApplyPack, CandidateProfile};
use crate::workflows::apply_pack::engine::ApplyPackEngine;
use crate::workflows::apply_pack::service::ApplyPackService;
use crate::workflows::apply_pack::store::{
    ApplyPackStore, ApplyPackStoreError, ProfileError, ProfileSource,
};
use crate::workflows::apply_pack::MatchConfig;
use crate::workflows::jobs::repository::{JobFilter, JobRepository, RepositoryError};
use crate::workflows::jobs::{Job, JobId, JobStatus, JobTrack, StatusTransition};

pub(super) fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 10, 6, 12, 0, 0)
        .single()
        .expect("valid")
}

pub(super) fn job(id: &str) -> Job {
    Job {
        job_id: JobId(id.to_string()),
        company: "Northwind".to_string(),
        role: "Senior Product Manager".to_string(),
        track: JobTrack::Pm,
        jd_url: "https://jobs.example.com/northwind/spm".to_string(),
        notes: None,
        apply_by: now() + Duration::days(5),
        status: JobStatus::New,
        created_at: now(),
        updated_at: now(),
    }
}

pub(super) fn jd_text() -> &'static str {
    "Looking for a product leader fluent in SQL and A/B testing, comfortable \
     building Amplitude dashboards and GA4 reporting, able to own the roadmap \
     end to end."
}

pub(super) fn profile() -> CandidateProfile {
    let mut bullet_banks = HashMap::new();
    bullet_banks.insert(
        JobTrack::Pm,
        vec![
            "Cut onboarding time from 30 to 5 minutes across 10k devices using SQL-backed funnels"
                .to_string(),
            "Owned the roadmap for a $1M analytics assistant program".to_string(),
            "Shipped a device-fleet billing feature with three partner teams".to_string(),
        ],
    );

    CandidateProfile {
        skills: vec![
            "SQL".to_string(),
            "A/B testing".to_string(),
            "roadmap planning".to_string(),
            "stakeholder management".to_string(),
            "agile delivery".to_string(),
        ],
        bullet_banks,
    }
}

pub(super) fn engine() -> ApplyPackEngine {
    ApplyPackEngine::new(MatchConfig::standard())
}

pub(super) fn build_service() -> (
    ApplyPackService<MemoryJobRepository, StaticProfiles, MemoryPackStore>,
    Arc<MemoryJobRepository>,
    Arc<MemoryPackStore>,
) {
    let jobs = Arc::new(MemoryJobRepository::default());
    let store = Arc::new(MemoryPackStore::default());
    let profiles = Arc::new(StaticProfiles::default());
    let service = ApplyPackService::new(jobs.clone(), profiles, store.clone(), engine());
    (service, jobs, store)
}

#[derive(Default)]
pub(super) struct MemoryJobRepository {
    records: Mutex<HashMap<JobId, Job>>,
    transitions: Mutex<Vec<StatusTransition>>,
}

impl MemoryJobRepository {
    pub(super) fn seed(&self, job: Job) {
        self.records
            .lock()
            .expect("repository mutex poisoned")
            .insert(job.job_id.clone(), job);
    }
}

impl JobRepository for MemoryJobRepository {
    fn insert(&self, job: Job) -> Result<Job, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&job.job_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(job.job_id.clone(), job.clone());
        Ok(job)
    }

    fn update(&self, job: Job) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        guard.insert(job.job_id.clone(), job);
        Ok(())
    }

    fn fetch(&self, id: &JobId) -> Result<Option<Job>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn list(&self, filter: &JobFilter) -> Result<Vec<Job>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.values().filter(|job| filter.matches(job)).cloned().collect())
    }

    fn record_transition(&self, transition: StatusTransition) -> Result<(), RepositoryError> {
        self.transitions
            .lock()
            .expect("transition mutex poisoned")
            .push(transition);
        Ok(())
    }

    fn transitions(&self) -> Result<Vec<StatusTransition>, RepositoryError> {
        Ok(self
            .transitions
            .lock()
            .expect("transition mutex poisoned")
            .clone())
    }
}

#[derive(Default)]
pub(super) struct MemoryPackStore {
    packs: Mutex<HashMap<JobId, ApplyPack>>,
}

impl MemoryPackStore {
    pub(super) fn len(&self) -> usize {
        self.packs.lock().expect("pack mutex poisoned").len()
    }
}

impl ApplyPackStore for MemoryPackStore {
    fn put(&self, pack: ApplyPack) -> Result<(), ApplyPackStoreError> {
        self.packs
            .lock()
            .expect("pack mutex poisoned")
            .insert(pack.job_id.clone(), pack);
        Ok(())
    }

    fn fetch(&self, job_id: &JobId) -> Result<Option<ApplyPack>, ApplyPackStoreError> {
        Ok(self
            .packs
            .lock()
            .expect("pack mutex poisoned")
            .get(job_id)
            .cloned())
    }

    fn generated_on(&self, day: NaiveDate) -> Result<Vec<ApplyPack>, ApplyPackStoreError> {
        Ok(self
            .packs
            .lock()
            .expect("pack mutex poisoned")
            .values()
            .filter(|pack| pack.generated_at.date_naive() == day)
            .cloned()
            .collect())
    }

    fn all(&self) -> Result<Vec<ApplyPack>, ApplyPackStoreError> {
        Ok(self
            .packs
            .lock()
            .expect("pack mutex poisoned")
            .values()
            .cloned()
            .collect())
    }
}

#[derive(Default)]
pub(super) struct StaticProfiles;

impl ProfileSource for StaticProfiles {
    fn profile(&self, _track: JobTrack) -> Result<CandidateProfile, ProfileError> {
        Ok(profile())
    }
}

pub(super) struct UnavailableProfiles;

impl ProfileSource for UnavailableProfiles {
    fn profile(&self, _track: JobTrack) -> Result<CandidateProfile, ProfileError> {
        Err(ProfileError::Unavailable("resume store offline".to_string()))
    }
}
