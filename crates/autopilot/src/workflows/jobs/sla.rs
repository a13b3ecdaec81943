use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Urgency classification of an application deadline. Always derived from the
/// wall clock at read time; never stored on the job record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlaStatus {
    Overdue,
    DueToday,
    OnTrack,
}

impl SlaStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Overdue => "overdue",
            Self::DueToday => "due_today",
            Self::OnTrack => "on_track",
        }
    }
}

pub fn classify(apply_by: DateTime<Utc>, now: DateTime<Utc>) -> SlaStatus {
    if apply_by < now {
        SlaStatus::Overdue
    } else if apply_by - now < Duration::hours(24) {
        SlaStatus::DueToday
    } else {
        SlaStatus::OnTrack
    }
}
