use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::domain::{Channel, ContactResponse, DirectoryCandidate, OutreachPlan};
use crate::workflows::jobs::JobId;

/// Boundary to the external contact directory.
pub trait ContactDirectory: Send + Sync {
    fn candidates_for(&self, company: &str) -> Result<Vec<DirectoryCandidate>, DirectoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("contact directory unavailable: {0}")]
    Unavailable(String),
}

/// Storage abstraction for plans and response signals. `put_plan` replaces
/// any earlier plan for the same job.
pub trait OutreachStore: Send + Sync {
    fn put_plan(&self, plan: OutreachPlan) -> Result<(), OutreachStoreError>;
    fn fetch_plan(&self, job_id: &JobId) -> Result<Option<OutreachPlan>, OutreachStoreError>;
    fn planned_on(&self, day: NaiveDate) -> Result<Vec<OutreachPlan>, OutreachStoreError>;
    fn all_plans(&self) -> Result<Vec<OutreachPlan>, OutreachStoreError>;
    fn record_response(&self, response: ContactResponse) -> Result<(), OutreachStoreError>;
    fn responses(&self) -> Result<Vec<ContactResponse>, OutreachStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum OutreachStoreError {
    #[error("outreach store unavailable: {0}")]
    Unavailable(String),
}

/// Payload handed to the external reminder system when follow-ups are
/// scheduled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FollowupReminder {
    pub job_id: JobId,
    pub contact_name: String,
    pub channel: Channel,
    pub due_on: NaiveDate,
}

/// Outbound hook to the reminder/notification system.
pub trait ReminderSink: Send + Sync {
    fn schedule(&self, reminder: FollowupReminder) -> Result<(), ReminderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ReminderError {
    #[error("reminder sink unavailable: {0}")]
    Unavailable(String),
}
