use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;

use autopilot::workflows::apply_pack::{
    ApplyPack, ApplyPackStore, ApplyPackStoreError, CandidateProfile, MatchConfig, ProfileError,
    ProfileSource,
};
use autopilot::workflows::directory::CsvContactDirectory;
use autopilot::workflows::jobs::repository::{JobFilter, JobRepository, RepositoryError};
use autopilot::workflows::jobs::{Job, JobId, JobTrack, StatusTransition};
use autopilot::workflows::outreach::{
    Channel, ContactDirectory, ContactResponse, DirectoryCandidate, DirectoryError,
    FollowupReminder, OutreachPlan, OutreachPolicy, OutreachStore, OutreachStoreError, Persona,
    ReminderError, ReminderSink,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default)]
pub(crate) struct InMemoryJobRepository {
    records: Mutex<HashMap<JobId, Job>>,
    transitions: Mutex<Vec<StatusTransition>>,
}

impl JobRepository for InMemoryJobRepository {
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
pub(crate) struct InMemoryApplyPackStore {
    packs: Mutex<HashMap<JobId, ApplyPack>>,
}

impl ApplyPackStore for InMemoryApplyPackStore {
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
pub(crate) struct InMemoryOutreachStore {
    plans: Mutex<HashMap<JobId, OutreachPlan>>,
    responses: Mutex<Vec<ContactResponse>>,
}

impl OutreachStore for InMemoryOutreachStore {
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

/// Reminder sink that logs instead of dispatching; the real reminder system
/// sits outside this service.
#[derive(Default)]
pub(crate) struct LoggingReminderSink;

impl ReminderSink for LoggingReminderSink {
    fn schedule(&self, reminder: FollowupReminder) -> Result<(), ReminderError> {
        tracing::info!(
            job_id = %reminder.job_id.0,
            contact = %reminder.contact_name,
            channel = reminder.channel.label(),
            due_on = %reminder.due_on,
            "follow-up reminder scheduled"
        );
        Ok(())
    }
}

/// Built-in candidate profile used until a resume store is wired in.
pub(crate) struct BuiltinProfileSource;

impl ProfileSource for BuiltinProfileSource {
    fn profile(&self, track: JobTrack) -> Result<CandidateProfile, ProfileError> {
        Ok(builtin_profile(track))
    }
}

fn builtin_profile(track: JobTrack) -> CandidateProfile {
    let bullets = match track {
        JobTrack::Po => vec![
            "Owned backlog prioritization for a two-team platform squad".to_string(),
            "Ran customer interviews that reshaped the quarterly roadmap".to_string(),
            "Cut sprint spillover in half by tightening acceptance criteria".to_string(),
        ],
        JobTrack::Pm => vec![
            "Reduced device onboarding from 30 to 5 minutes across 10k+ IoT units".to_string(),
            "Led a $1M AI assistant program from discovery to launch".to_string(),
            "Built SQL dashboards that became the team's source of truth for KPIs".to_string(),
        ],
        JobTrack::Tpm => vec![
            "Coordinated a six-team Azure migration with zero missed cutovers".to_string(),
            "Stood up a cross-functional risk register reviewed weekly".to_string(),
            "Automated release reporting, saving each team a day per sprint".to_string(),
        ],
    };

    let mut bullet_banks = HashMap::new();
    bullet_banks.insert(track, bullets);

    CandidateProfile {
        skills: vec![
            "SQL".to_string(),
            "A/B testing".to_string(),
            "roadmap planning".to_string(),
            "stakeholder management".to_string(),
            "agile delivery".to_string(),
            "cross-functional leadership".to_string(),
            "IoT".to_string(),
            "cloud platforms".to_string(),
        ],
        bullet_banks,
    }
}

/// Placeholder directory that fabricates a plannable slate for any company,
/// mirroring what a real directory integration would return.
#[derive(Default)]
pub(crate) struct SyntheticContactDirectory;

impl ContactDirectory for SyntheticContactDirectory {
    fn candidates_for(&self, company: &str) -> Result<Vec<DirectoryCandidate>, DirectoryError> {
        let contact = |name: &str, role: &str, persona: Persona| DirectoryCandidate {
            name: name.to_string(),
            role: role.to_string(),
            company: company.to_string(),
            persona,
            preferred_channel: None,
            profile_url: None,
            email: None,
            track: None,
            last_interaction: None,
        };

        let mut recruiter = contact("Riley Recruiter", "Technical Recruiter", Persona::Recruiter);
        recruiter.preferred_channel = Some(Channel::Email);
        recruiter.email = Some("recruiter@example.com".to_string());

        Ok(vec![
            contact("Peer One", "PM II", Persona::Peer),
            contact("Peer Two", "Sr PM", Persona::Peer),
            contact("Insider One", "Eng Manager", Persona::Insider),
            contact("Insider Two", "PMM", Persona::Insider),
            recruiter,
        ])
    }
}

/// Directory wiring: an imported connections CSV when one is provided,
/// otherwise the synthetic slate.
pub(crate) enum AppDirectory {
    Synthetic(SyntheticContactDirectory),
    Csv(CsvContactDirectory),
}

impl ContactDirectory for AppDirectory {
    fn candidates_for(&self, company: &str) -> Result<Vec<DirectoryCandidate>, DirectoryError> {
        match self {
            AppDirectory::Synthetic(directory) => directory.candidates_for(company),
            AppDirectory::Csv(directory) => directory.candidates_for(company),
        }
    }
}

pub(crate) fn default_match_config() -> MatchConfig {
    MatchConfig::standard()
}

pub(crate) fn default_outreach_policy() -> OutreachPolicy {
    OutreachPolicy::standard()
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}
