use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::workflows::jobs::{JobId, JobTrack};

/// One resume bullet rewritten toward the job description, with the skills
/// that motivated the change spelled out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulletRewrite {
    pub original: String,
    pub rewritten: String,
    pub rationale: String,
}

/// The generated bundle for one (job, job-description) pair. Regenerating for
/// the same job replaces the previous pack; versioning is a caller concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplyPack {
    pub job_id: JobId,
    pub match_score: f32,
    pub missing_skills: Vec<String>,
    pub rewritten_bullets: Vec<BulletRewrite>,
    pub cover_letter: String,
    pub risks: Vec<String>,
    pub generated_at: DateTime<Utc>,
}

/// Candidate skills and per-track bullet bank, provided by the external
/// resume/profile store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub skills: Vec<String>,
    pub bullet_banks: HashMap<JobTrack, Vec<String>>,
}

impl CandidateProfile {
    pub fn bullets_for(&self, track: JobTrack) -> &[String] {
        self.bullet_banks
            .get(&track)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}
