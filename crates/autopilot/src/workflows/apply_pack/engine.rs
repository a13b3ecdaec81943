use chrono::{DateTime, Utc};

use super::config::MatchConfig;
use super::domain::{ApplyPack, BulletRewrite, CandidateProfile};
use super::extraction::{contains_term, normalize_text, skill_mentioned};
use super::vocabulary::{SkillDefinition, SkillVocabulary};
use crate::workflows::jobs::sla::{self, SlaStatus};
use crate::workflows::jobs::Job;

/// Stateless generator turning (job, jd_text, profile) into an apply pack.
/// Every step is deterministic, so regenerating with identical inputs yields
/// an identical pack.
pub struct ApplyPackEngine {
    vocabulary: SkillVocabulary,
    config: MatchConfig,
}

impl ApplyPackEngine {
    pub fn new(config: MatchConfig) -> Self {
        Self::with_vocabulary(SkillVocabulary::standard(), config)
    }

    pub fn with_vocabulary(vocabulary: SkillVocabulary, config: MatchConfig) -> Self {
        Self { vocabulary, config }
    }

    pub fn generate(
        &self,
        job: &Job,
        jd_text: &str,
        profile: &CandidateProfile,
        now: DateTime<Utc>,
    ) -> ApplyPack {
        let normalized_jd = normalize_text(jd_text);
        let profile_skills: Vec<String> = profile
            .skills
            .iter()
            .map(|skill| normalize_text(skill))
            .collect();

        let mut matched: Vec<&SkillDefinition> = Vec::new();
        let mut missing: Vec<&SkillDefinition> = Vec::new();
        for skill in self.vocabulary.skills() {
            if !skill_mentioned(skill, &normalized_jd) {
                continue;
            }
            if profile_covers(skill, &profile_skills) {
                matched.push(skill);
            } else {
                missing.push(skill);
            }
        }

        let extracted_count = matched.len() + missing.len();
        let match_score = if extracted_count == 0 {
            0.0
        } else {
            matched.len() as f32 / extracted_count as f32
        };

        let matched_names: Vec<&'static str> = matched.iter().map(|skill| skill.name).collect();
        let missing_skills: Vec<String> = missing
            .iter()
            .map(|skill| skill.name.to_string())
            .collect();

        let rewritten_bullets: Vec<BulletRewrite> = profile
            .bullets_for(job.track)
            .iter()
            .map(|bullet| rewrite_bullet(bullet, &matched, &missing, &matched_names))
            .collect();

        let cover_letter = draft_cover_letter(job, &matched_names, &rewritten_bullets);

        let mut risks = Vec::new();
        if extracted_count == 0 {
            risks.push(
                "Job description mentions no recognized skills; match score defaulted to 0."
                    .to_string(),
            );
        }
        if match_score < self.config.low_match_threshold {
            risks.push(format!(
                "Match score {:.2} is below the {:.2} comfort threshold.",
                match_score, self.config.low_match_threshold
            ));
        }
        if !missing_skills.is_empty() {
            risks.push(format!(
                "Skills named in the listing but absent from the profile: {}.",
                missing_skills.join(", ")
            ));
        }
        match sla::classify(job.apply_by, now) {
            SlaStatus::Overdue => risks.push(format!(
                "Application deadline passed on {}.",
                job.apply_by.format("%Y-%m-%d %H:%M UTC")
            )),
            SlaStatus::DueToday => {
                risks.push("Application deadline is inside the next 24 hours.".to_string())
            }
            SlaStatus::OnTrack => {}
        }

        ApplyPack {
            job_id: job.job_id.clone(),
            match_score,
            missing_skills,
            rewritten_bullets,
            cover_letter,
            risks,
            generated_at: now,
        }
    }
}

fn profile_covers(skill: &SkillDefinition, normalized_profile: &[String]) -> bool {
    let canonical = normalize_text(skill.name);
    normalized_profile.iter().any(|have| {
        have == &canonical
            || skill.aliases.iter().any(|alias| have == alias)
            || contains_term(have, &canonical)
    })
}

fn rewrite_bullet(
    original: &str,
    matched: &[&SkillDefinition],
    missing: &[&SkillDefinition],
    matched_names: &[&'static str],
) -> BulletRewrite {
    let normalized = normalize_text(original);
    let trimmed = original.trim().trim_end_matches('.');

    // Prefer skills the bullet already demonstrates; they only need to be
    // named explicitly for the reader.
    let overlapping: Vec<&'static str> = matched
        .iter()
        .chain(missing.iter())
        .filter(|skill| skill_mentioned(skill, &normalized))
        .map(|skill| skill.name)
        .collect();

    if !overlapping.is_empty() {
        let list = join_names(&overlapping);
        return BulletRewrite {
            original: original.to_string(),
            rewritten: format!("{trimmed}, underscoring the {list} this listing asks for."),
            rationale: format!("{list} appears in both this bullet and the job description."),
        };
    }

    if let Some(first) = matched_names.first() {
        return BulletRewrite {
            original: original.to_string(),
            rewritten: format!("{trimmed}, reframed to speak to the {first} focus of the role."),
            rationale: format!(
                "Reframed toward {first}, the strongest overlap between the profile and the listing."
            ),
        };
    }

    BulletRewrite {
        original: original.to_string(),
        rewritten: original.trim().to_string(),
        rationale: "No extracted skill overlaps this bullet; kept as written.".to_string(),
    }
}

fn draft_cover_letter(job: &Job, matched_names: &[&'static str], bullets: &[BulletRewrite]) -> String {
    let opening = format!(
        "Dear {} team,\n\nI am applying for the {} role, a natural fit for my {} track.",
        job.company,
        job.role,
        job.track.label()
    );

    let body = if matched_names.is_empty() {
        "The posting reads close to products I have shipped end to end, from discovery through delivery.".to_string()
    } else {
        format!(
            "The posting emphasizes {}, which maps directly onto my recent work.",
            join_names(matched_names)
        )
    };

    let highlight = bullets
        .first()
        .map(|bullet| {
            format!(
                " One concrete example: {}",
                ensure_period(&bullet.rewritten)
            )
        })
        .unwrap_or_default();

    let closing = format!(
        "I would welcome a short conversation about where I could help {} first.\n\nBest regards",
        job.company
    );

    format!("{opening}\n\n{body}{highlight}\n\n{closing}")
}

fn ensure_period(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.ends_with('.') {
        trimmed.to_string()
    } else {
        format!("{trimmed}.")
    }
}

fn join_names(names: &[&'static str]) -> String {
    match names {
        [] => String::new(),
        [single] => (*single).to_string(),
        [head @ .., tail] => format!(
            "{} and {}",
            head.iter().copied().collect::<Vec<_>>().join(", "),
            tail
        ),
    }
}
