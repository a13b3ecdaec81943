use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier wrapper for tracked job opportunities. Ids are assigned by the
/// caller (usually derived from the posting) and must be unique.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct JobId(pub String);

/// Resume track a job is pursued under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JobTrack {
    #[serde(rename = "PO")]
    Po,
    #[serde(rename = "PM")]
    Pm,
    #[serde(rename = "TPM")]
    Tpm,
}

impl JobTrack {
    pub const fn ordered() -> [Self; 3] {
        [Self::Po, Self::Pm, Self::Tpm]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Po => "PO",
            Self::Pm => "PM",
            Self::Tpm => "TPM",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_uppercase().as_str() {
            "PO" => Some(Self::Po),
            "PM" => Some(Self::Pm),
            "TPM" => Some(Self::Tpm),
            _ => None,
        }
    }
}

/// Lifecycle status of a tracked job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    New,
    Prepared,
    PdfReady,
    Autofilled,
    Submitted,
    Rejected,
    Interview,
}

impl JobStatus {
    pub const fn ordered() -> [Self; 7] {
        [
            Self::New,
            Self::Prepared,
            Self::PdfReady,
            Self::Autofilled,
            Self::Submitted,
            Self::Rejected,
            Self::Interview,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Prepared => "prepared",
            Self::PdfReady => "pdf_ready",
            Self::Autofilled => "autofilled",
            Self::Submitted => "submitted",
            Self::Rejected => "rejected",
            Self::Interview => "interview",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "new" => Some(Self::New),
            "prepared" => Some(Self::Prepared),
            "pdf_ready" => Some(Self::PdfReady),
            "autofilled" => Some(Self::Autofilled),
            "submitted" => Some(Self::Submitted),
            "rejected" => Some(Self::Rejected),
            "interview" => Some(Self::Interview),
            _ => None,
        }
    }

    /// Transition table for normal forward progress. Anything outside this
    /// table is still applied, but classified as an override so operator
    /// corrections and out-of-band hiring signals stay visible downstream.
    pub const fn allowed_next(self) -> &'static [JobStatus] {
        match self {
            Self::New => &[Self::Prepared],
            Self::Prepared => &[Self::PdfReady],
            Self::PdfReady => &[Self::Autofilled],
            Self::Autofilled => &[Self::Submitted],
            Self::Submitted => &[Self::Rejected, Self::Interview],
            Self::Rejected => &[],
            Self::Interview => &[],
        }
    }

    /// Statuses that still have an application ahead of them. SLA urgency
    /// only matters for these.
    pub const fn is_pre_submission(self) -> bool {
        matches!(
            self,
            Self::New | Self::Prepared | Self::PdfReady | Self::Autofilled
        )
    }
}

/// Classification of a requested status change against the transition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionKind {
    Forward,
    Override,
}

pub fn classify_transition(from: JobStatus, to: JobStatus) -> TransitionKind {
    if from.allowed_next().contains(&to) {
        TransitionKind::Forward
    } else {
        TransitionKind::Override
    }
}

/// Caller-provided fields for job intake.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobDraft {
    pub job_id: JobId,
    pub company: String,
    pub role: String,
    pub track: JobTrack,
    pub jd_url: String,
    pub apply_by: DateTime<Utc>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// A tracked job opportunity. `apply_by` is fixed at creation; status changes
/// never touch it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub job_id: JobId,
    pub company: String,
    pub role: String,
    pub track: JobTrack,
    pub jd_url: String,
    pub notes: Option<String>,
    pub apply_by: DateTime<Utc>,
    pub status: JobStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One recorded status change, kept so the aggregator can count same-day
/// submissions/interviews and surface override anomalies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusTransition {
    pub job_id: JobId,
    pub from: JobStatus,
    pub to: JobStatus,
    pub kind: TransitionKind,
    pub changed_at: DateTime<Utc>,
}
