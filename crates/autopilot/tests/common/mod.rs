//! Shared in-memory fixtures for the workflow integration tests. Each test
//! binary pulls in what it needs.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};

use autopilot::workflows::apply_pack::{
    ApplyPack, ApplyPackStore, ApplyPackStoreError, CandidateProfile, ProfileError, ProfileSource,
};
use autopilot::workflows::jobs::repository::{JobFilter, JobRepository, RepositoryError};
use autopilot::workflows::jobs::{Job, JobDraft, JobId, JobTrack, StatusTransition};
use autopilot::workflows::outreach::{
    ContactDirectory, ContactResponse, DirectoryCandidate, DirectoryError, FollowupReminder,
    OutreachPlan, OutreachStore, OutreachStoreError, Persona, ReminderError, ReminderSink,
};

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 10, 6, 12, 0, 0)
        .single()
        .expect("valid")
}

pub fn today() -> NaiveDate {
    fixed_now().date_naive()
}

pub fn draft(id: &str, company: &str, track: JobTrack) -> JobDraft {
    JobDraft {
        job_id: JobId(id.to_string()),
        company: company.to_string(),
        role: "Senior Product Manager".to_string(),
        track,
        jd_url: format!("https://jobs.example.com/{id}"),
        apply_by: fixed_now() + Duration::days(5),
        notes: None,
    }
}

pub fn candidate(name: &str, company: &str, persona: Persona) -> DirectoryCandidate {
    DirectoryCandidate {
        name: name.to_string(),
        role: "Product Manager".to_string(),
        company: company.to_string(),
        persona,
        preferred_channel: None,
        profile_url: None,
        email: None,
        track: None,
        last_interaction: None,
    }
}

pub fn profile() -> CandidateProfile {
    let mut bullet_banks = HashMap::new();
    for track in JobTrack::ordered() {
        bullet_banks.insert(
            track,
            vec![
                "Cut onboarding time from 30 to 5 minutes using SQL-backed funnels".to_string(),
                "Owned the roadmap for a $1M analytics assistant program".to_string(),
            ],
        );
    }
    CandidateProfile {
        skills: vec![
            "SQL".to_string(),
            "A/B testing".to_string(),
            "roadmap planning".to_string(),
        ],
        bullet_banks,
    }
}

#[derive(Default)]
pub struct MemoryJobRepository {
    records: Mutex<HashMap<JobId, Job>>,
    transitions: Mutex<Vec<StatusTransition>>,
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
        if guard.contains_key(&job.job_id) {
            guard.insert(job.job_id.clone(), job);
            Ok(())
        } else {
            Err(RepositoryError::NotFound)
        }
    }

    fn fetch(&self, id: &JobId) -> Result<Option<Job>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn list(&self, filter: &JobFilter) -> Result<Vec<Job>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard
            .values()
            .filter(|job| filter.matches(job))
            .cloned()
            .collect())
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
pub struct MemoryPackStore {
    packs: Mutex<HashMap<JobId, ApplyPack>>,
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

pub struct StaticProfiles;

impl ProfileSource for StaticProfiles {
    fn profile(&self, _track: JobTrack) -> Result<CandidateProfile, ProfileError> {
        Ok(profile())
    }
}

#[derive(Default)]
pub struct MemoryOutreachStore {
    plans: Mutex<HashMap<JobId, OutreachPlan>>,
    responses: Mutex<Vec<ContactResponse>>,
}

impl OutreachStore for MemoryOutreachStore {
    fn put_plan(&self, plan: OutreachPlan) -> Result<(), OutreachStoreError> {
        self.plans
            .lock()
            .expect("plan mutex poisoned")
            .insert(plan.job_id.clone(), plan);
        Ok(())
    }

    fn fetch_plan(&self, job_id: &JobId) -> Result<Option<OutreachPlan>, OutreachStoreError> {
        Ok(self
            .plans
            .lock()
            .expect("plan mutex poisoned")
            .get(job_id)
            .cloned())
    }

    fn planned_on(&self, day: NaiveDate) -> Result<Vec<OutreachPlan>, OutreachStoreError> {
        Ok(self
            .plans
            .lock()
            .expect("plan mutex poisoned")
            .values()
            .filter(|plan| plan.generated_on == day)
            .cloned()
            .collect())
    }

    fn all_plans(&self) -> Result<Vec<OutreachPlan>, OutreachStoreError> {
        Ok(self
            .plans
            .lock()
            .expect("plan mutex poisoned")
            .values()
            .cloned()
            .collect())
    }

    fn record_response(&self, response: ContactResponse) -> Result<(), OutreachStoreError> {
        self.responses
            .lock()
            .expect("response mutex poisoned")
            .push(response);
        Ok(())
    }

    fn responses(&self) -> Result<Vec<ContactResponse>, OutreachStoreError> {
        Ok(self
            .responses
            .lock()
            .expect("response mutex poisoned")
            .clone())
    }
}

/// Directory over a fixed candidate list, filtered by exact company name.
pub struct StaticDirectory {
    pub candidates: Vec<DirectoryCandidate>,
}

impl ContactDirectory for StaticDirectory {
    fn candidates_for(&self, company: &str) -> Result<Vec<DirectoryCandidate>, DirectoryError> {
        Ok(self
            .candidates
            .iter()
            .filter(|candidate| candidate.company == company)
            .cloned()
            .collect())
    }
}

#[derive(Default)]
pub struct MemoryReminderSink {
    reminders: Mutex<Vec<FollowupReminder>>,
}

impl MemoryReminderSink {
    pub fn scheduled(&self) -> Vec<FollowupReminder> {
        self.reminders
            .lock()
            .expect("reminder mutex poisoned")
            .clone()
    }
}

impl ReminderSink for MemoryReminderSink {
    fn schedule(&self, reminder: FollowupReminder) -> Result<(), ReminderError> {
        self.reminders
            .lock()
            .expect("reminder mutex poisoned")
            .push(reminder);
        Ok(())
    }
}

