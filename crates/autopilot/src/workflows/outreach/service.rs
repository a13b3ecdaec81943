use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use super::domain::{ContactResponse, OutreachPlan};
use super::planner::OutreachPlanner;
use super::policy::OutreachPolicy;
use super::store::{
    ContactDirectory, DirectoryError, FollowupReminder, OutreachStore, OutreachStoreError,
    ReminderError, ReminderSink,
};
use crate::workflows::jobs::repository::{JobRepository, RepositoryError};
use crate::workflows::jobs::JobId;

/// Service composing the job store, contact directory, plan store, and
/// reminder sink. Planning computes and stores a complete plan; dispatching
/// drafts or reminders is delegated downstream.
pub struct OutreachService<R, D, S, N> {
    jobs: Arc<R>,
    directory: Arc<D>,
    store: Arc<S>,
    reminders: Arc<N>,
    planner: Arc<OutreachPlanner>,
}

impl<R, D, S, N> OutreachService<R, D, S, N>
where
    R: JobRepository + 'static,
    D: ContactDirectory + 'static,
    S: OutreachStore + 'static,
    N: ReminderSink + 'static,
{
    pub fn new(
        jobs: Arc<R>,
        directory: Arc<D>,
        store: Arc<S>,
        reminders: Arc<N>,
        policy: OutreachPolicy,
    ) -> Self {
        Self {
            jobs,
            directory,
            store,
            reminders,
            planner: Arc::new(OutreachPlanner::new(policy)),
        }
    }

    /// Build (or rebuild) the plan for a job. Shortfalls become plan notes;
    /// only an unknown job or an unreachable directory fails.
    pub fn plan(
        &self,
        job_id: &JobId,
        today: NaiveDate,
    ) -> Result<OutreachPlan, OutreachServiceError> {
        let job = self
            .jobs
            .fetch(job_id)?
            .ok_or(RepositoryError::NotFound)?;

        let candidates = self.directory.candidates_for(&job.company)?;
        let plan = self.planner.plan(&job, &candidates, today);
        self.store.put_plan(plan.clone())?;

        Ok(plan)
    }

    pub fn get_plan(&self, job_id: &JobId) -> Result<OutreachPlan, OutreachServiceError> {
        self.store
            .fetch_plan(job_id)?
            .ok_or(OutreachServiceError::NoPlan)
    }

    /// Push one reminder per plan contact to the external reminder system
    /// and acknowledge how many were scheduled.
    pub fn schedule_followups(&self, job_id: &JobId) -> Result<FollowupAck, OutreachServiceError> {
        let plan = self
            .store
            .fetch_plan(job_id)?
            .ok_or(OutreachServiceError::NoPlan)?;

        let mut scheduled = 0usize;
        for contact in &plan.contacts {
            let due_on = match plan.followups.get(&contact.name) {
                Some(due) => *due,
                None => continue,
            };
            self.reminders.schedule(FollowupReminder {
                job_id: plan.job_id.clone(),
                contact_name: contact.name.clone(),
                channel: contact.channel,
                due_on,
            })?;
            scheduled += 1;
        }

        Ok(FollowupAck {
            job_id: plan.job_id,
            scheduled,
        })
    }

    /// Record a response from a contact (external pass-through signal).
    pub fn record_response(
        &self,
        job_id: &JobId,
        contact_name: &str,
        received_at: DateTime<Utc>,
    ) -> Result<(), OutreachServiceError> {
        self.jobs
            .fetch(job_id)?
            .ok_or(RepositoryError::NotFound)?;

        self.store.record_response(ContactResponse {
            job_id: job_id.clone(),
            contact_name: contact_name.to_string(),
            received_at,
        })?;
        Ok(())
    }
}

/// Acknowledgement returned by `schedule_followups`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FollowupAck {
    pub job_id: JobId,
    pub scheduled: usize,
}

/// Error raised by the outreach service.
#[derive(Debug, thiserror::Error)]
pub enum OutreachServiceError {
    #[error("no outreach plan generated for this job yet")]
    NoPlan,
    #[error(transparent)]
    Job(#[from] RepositoryError),
    #[error("outreach planning failed: {0}")]
    Generation(#[from] DirectoryError),
    #[error(transparent)]
    Store(#[from] OutreachStoreError),
    #[error("follow-up scheduling failed: {0}")]
    Reminder(#[from] ReminderError),
}
