use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::workflows::jobs::{JobId, JobTrack};

/// Relationship category of an outreach contact; drives message tone and
/// follow-up cadence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Persona {
    Peer,
    Insider,
    Recruiter,
    Referral,
}

impl Persona {
    pub const fn ordered() -> [Self; 4] {
        [Self::Peer, Self::Insider, Self::Recruiter, Self::Referral]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Peer => "peer",
            Self::Insider => "insider",
            Self::Recruiter => "recruiter",
            Self::Referral => "referral",
        }
    }
}

/// Channel a message would go out on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    Linkedin,
    Email,
    Other,
}

impl Channel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Linkedin => "linkedin",
            Self::Email => "email",
            Self::Other => "other",
        }
    }
}

/// A contact selected into a plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub role: String,
    pub company: String,
    pub persona: Persona,
    pub channel: Channel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// A directory entry the planner can rank: the contact fields plus the
/// relevance signals the directory knows about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryCandidate {
    pub name: String,
    pub role: String,
    pub company: String,
    pub persona: Persona,
    #[serde(default)]
    pub preferred_channel: Option<Channel>,
    #[serde(default)]
    pub profile_url: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    /// Track the contact's own role maps to, when known.
    #[serde(default)]
    pub track: Option<JobTrack>,
    /// Most recent interaction on record, used for recency ranking.
    #[serde(default)]
    pub last_interaction: Option<NaiveDate>,
}

/// The generated outreach plan for one job. Contact names are unique within
/// a plan; they key the message and follow-up maps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutreachPlan {
    pub job_id: JobId,
    pub generated_on: NaiveDate,
    pub contacts: Vec<Contact>,
    pub messages: BTreeMap<String, String>,
    pub followups: BTreeMap<String, NaiveDate>,
    /// Shortfall notes and similar soft findings; never a failure.
    pub notes: Vec<String>,
}

/// A response received from a contact, recorded as an external signal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactResponse {
    pub job_id: JobId,
    pub contact_name: String,
    pub received_at: chrono::DateTime<chrono::Utc>,
}
