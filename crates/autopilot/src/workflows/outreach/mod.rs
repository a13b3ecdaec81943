//! Outreach planning: persona-quota contact selection, message
//! personalization, and business-day follow-up scheduling.

pub mod domain;
mod planner;
pub mod policy;
pub mod router;
pub mod schedule;
pub mod service;
pub mod store;

pub use domain::{Channel, Contact, ContactResponse, DirectoryCandidate, OutreachPlan, Persona};
pub use planner::OutreachPlanner;
pub use policy::{OutreachPolicy, FOLLOWUP_OFFSETS, PERSONA_QUOTAS};
pub use router::outreach_router;
pub use schedule::add_business_days;
pub use service::{FollowupAck, OutreachService, OutreachServiceError};
pub use store::{
    ContactDirectory, DirectoryError, FollowupReminder, OutreachStore, OutreachStoreError,
    ReminderError, ReminderSink,
};
