use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;

use super::domain::{Contact, DirectoryCandidate, OutreachPlan, Persona};
use super::policy::OutreachPolicy;
use super::schedule::add_business_days;
use crate::workflows::jobs::Job;

/// Deterministic plan builder: persona buckets filled to quota by relevance,
/// persona-specific messages, business-day follow-ups. Never dispatches
/// anything.
pub struct OutreachPlanner {
    policy: OutreachPolicy,
}

impl OutreachPlanner {
    pub fn new(policy: OutreachPolicy) -> Self {
        Self { policy }
    }

    pub fn plan(
        &self,
        job: &Job,
        candidates: &[DirectoryCandidate],
        today: NaiveDate,
    ) -> OutreachPlan {
        let mut contacts: Vec<Contact> = Vec::new();
        let mut notes: Vec<String> = Vec::new();
        // Names key the message/follow-up maps, so they must stay unique
        // even across persona buckets.
        let mut taken: BTreeSet<String> = BTreeSet::new();

        for (persona, quota) in &self.policy.quotas {
            let mut bucket: Vec<&DirectoryCandidate> = candidates
                .iter()
                .filter(|candidate| candidate.persona == *persona && !taken.contains(&candidate.name))
                .collect();
            bucket.sort_by(|a, b| {
                relevance(b, job, today)
                    .cmp(&relevance(a, job, today))
                    .then_with(|| a.name.cmp(&b.name))
            });

            let selected: Vec<&DirectoryCandidate> = bucket.into_iter().take(*quota).collect();
            if selected.len() < *quota {
                notes.push(format!(
                    "Only {} {} contact(s) found at {} (quota {}).",
                    selected.len(),
                    persona.label(),
                    job.company,
                    quota
                ));
            }

            for candidate in selected {
                taken.insert(candidate.name.clone());
                contacts.push(Contact {
                    name: candidate.name.clone(),
                    role: candidate.role.clone(),
                    company: candidate.company.clone(),
                    persona: candidate.persona,
                    channel: candidate.preferred_channel.unwrap_or(self.policy.default_channel),
                    profile_url: candidate.profile_url.clone(),
                    email: candidate.email.clone(),
                });
            }
        }

        let mut messages = BTreeMap::new();
        let mut followups = BTreeMap::new();
        for contact in &contacts {
            messages.insert(contact.name.clone(), message_for(contact, job));
            followups.insert(
                contact.name.clone(),
                add_business_days(today, self.policy.followup_offset_for(contact.persona)),
            );
        }

        OutreachPlan {
            job_id: job.job_id.clone(),
            generated_on: today,
            contacts,
            messages,
            followups,
            notes,
        }
    }
}

/// Relevance within a persona bucket: shared track outweighs recency of the
/// last interaction. Ties fall back to name order for stability.
fn relevance(candidate: &DirectoryCandidate, job: &Job, today: NaiveDate) -> i64 {
    let mut score = 0i64;
    if candidate.track == Some(job.track) {
        score += 100;
    }
    if let Some(last) = candidate.last_interaction {
        let days_since = (today - last).num_days();
        score += (90 - days_since).clamp(0, 90);
    }
    score
}

fn message_for(contact: &Contact, job: &Job) -> String {
    let first_name = contact
        .name
        .split_whitespace()
        .next()
        .unwrap_or(contact.name.as_str());

    match contact.persona {
        Persona::Peer => format!(
            "Hi {first_name}, I am applying for the {} role at {} and your path there caught my \
             eye. We have walked similar product ground, so I would love to trade notes on what \
             the team is building.",
            job.role, job.company
        ),
        Persona::Insider => format!(
            "Hi {first_name}, I am applying for the {} role at {}. Could I ask you a couple of \
             quick questions about how the team runs its process? Any insight into what the \
             panel values would help me show up prepared.",
            job.role, job.company
        ),
        Persona::Recruiter => format!(
            "Hi {first_name}, I just applied for the {} role at {}. Would you be open to a \
             15-minute screen this week? Happy to work around your calendar.",
            job.role, job.company
        ),
        Persona::Referral => format!(
            "Hi {first_name}, I am pursuing the {} role at {} and would be grateful for a \
             referral if you feel comfortable. I can send over a tailored resume and a short \
             blurb to make it easy.",
            job.role, job.company
        ),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};

    use super::*;
    use crate::workflows::jobs::{JobId, JobStatus, JobTrack};
    use crate::workflows::outreach::domain::Channel;
    use crate::workflows::outreach::schedule::is_weekend;

    fn job() -> Job {
        let now = Utc
            .with_ymd_and_hms(2025, 10, 6, 9, 0, 0)
            .single()
            .expect("valid");
        Job {
            job_id: JobId("job-77".to_string()),
            company: "Axon".to_string(),
            role: "Technical Program Manager".to_string(),
            track: JobTrack::Tpm,
            jd_url: "https://jobs.example.com/axon/tpm".to_string(),
            notes: None,
            apply_by: now + Duration::days(3),
            status: JobStatus::Prepared,
            created_at: now,
            updated_at: now,
        }
    }

    fn candidate(name: &str, persona: Persona) -> DirectoryCandidate {
        DirectoryCandidate {
            name: name.to_string(),
            role: "Program Manager".to_string(),
            company: "Axon".to_string(),
            persona,
            preferred_channel: None,
            profile_url: None,
            email: None,
            track: None,
            last_interaction: None,
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 10, 6).expect("valid")
    }

    fn planner() -> OutreachPlanner {
        OutreachPlanner::new(OutreachPolicy::standard())
    }

    #[test]
    fn full_directory_yields_the_standard_composition() {
        let candidates = vec![
            candidate("Peer One", Persona::Peer),
            candidate("Peer Two", Persona::Peer),
            candidate("Peer Three", Persona::Peer),
            candidate("Insider One", Persona::Insider),
            candidate("Insider Two", Persona::Insider),
            candidate("Recruiter One", Persona::Recruiter),
        ];

        let plan = planner().plan(&job(), &candidates, today());

        let count = |persona: Persona| {
            plan.contacts
                .iter()
                .filter(|contact| contact.persona == persona)
                .count()
        };
        assert_eq!(count(Persona::Peer), 2);
        assert_eq!(count(Persona::Insider), 2);
        assert_eq!(count(Persona::Recruiter), 1);
        assert!(plan.notes.is_empty());
        assert_eq!(plan.messages.len(), plan.contacts.len());
        assert_eq!(plan.followups.len(), plan.contacts.len());
    }

    #[test]
    fn shortfall_is_noted_not_fatal() {
        let candidates = vec![
            candidate("Peer One", Persona::Peer),
            candidate("Peer Two", Persona::Peer),
            candidate("Peer Three", Persona::Peer),
            candidate("Insider One", Persona::Insider),
            candidate("Recruiter One", Persona::Recruiter),
            candidate("Recruiter Two", Persona::Recruiter),
        ];

        let plan = planner().plan(&job(), &candidates, today());

        assert_eq!(plan.contacts.len(), 4);
        assert_eq!(
            plan.contacts
                .iter()
                .filter(|contact| contact.persona == Persona::Insider)
                .count(),
            1
        );
        assert!(plan
            .notes
            .iter()
            .any(|note| note.contains("insider") && note.contains("quota 2")));
    }

    #[test]
    fn ranking_prefers_shared_track_then_recency() {
        let mut stale = candidate("Alpha Stale", Persona::Peer);
        stale.last_interaction = Some(today() - Duration::days(200));
        let mut recent = candidate("Beta Recent", Persona::Peer);
        recent.last_interaction = Some(today() - Duration::days(3));
        let mut on_track = candidate("Gamma Track", Persona::Peer);
        on_track.track = Some(JobTrack::Tpm);

        let plan = planner().plan(&job(), &[stale, recent, on_track], today());

        let peers: Vec<&str> = plan
            .contacts
            .iter()
            .filter(|contact| contact.persona == Persona::Peer)
            .map(|contact| contact.name.as_str())
            .collect();
        assert_eq!(peers, vec!["Gamma Track", "Beta Recent"]);
    }

    #[test]
    fn followups_land_on_weekdays_strictly_after_generation() {
        let candidates = vec![
            candidate("Peer One", Persona::Peer),
            candidate("Insider One", Persona::Insider),
            candidate("Recruiter One", Persona::Recruiter),
        ];
        // Friday, so every offset has to clear a weekend.
        let friday = NaiveDate::from_ymd_opt(2025, 10, 3).expect("valid");

        let plan = planner().plan(&job(), &candidates, friday);

        for (_, due) in &plan.followups {
            assert!(*due > friday);
            assert!(!is_weekend(*due));
        }
        // Recruiters are on the shorter cadence.
        assert_eq!(
            plan.followups["Recruiter One"],
            NaiveDate::from_ymd_opt(2025, 10, 8).expect("valid")
        );
        assert_eq!(
            plan.followups["Peer One"],
            NaiveDate::from_ymd_opt(2025, 10, 10).expect("valid")
        );
    }

    #[test]
    fn duplicate_names_never_collide_across_buckets() {
        let candidates = vec![
            candidate("Jordan Lee", Persona::Peer),
            candidate("Jordan Lee", Persona::Insider),
            candidate("Insider Two", Persona::Insider),
        ];

        let plan = planner().plan(&job(), &candidates, today());

        let names: Vec<&str> = plan.contacts.iter().map(|c| c.name.as_str()).collect();
        let unique: std::collections::BTreeSet<&str> = names.iter().copied().collect();
        assert_eq!(names.len(), unique.len());
    }

    #[test]
    fn channel_defaults_to_linkedin_unless_stated() {
        let mut by_email = candidate("Recruiter One", Persona::Recruiter);
        by_email.preferred_channel = Some(Channel::Email);
        by_email.email = Some("recruiter@axon.example".to_string());
        let candidates = vec![candidate("Peer One", Persona::Peer), by_email];

        let plan = planner().plan(&job(), &candidates, today());

        let channel_of = |name: &str| {
            plan.contacts
                .iter()
                .find(|contact| contact.name == name)
                .map(|contact| contact.channel)
                .expect("contact present")
        };
        assert_eq!(channel_of("Peer One"), Channel::Linkedin);
        assert_eq!(channel_of("Recruiter One"), Channel::Email);
    }

    #[test]
    fn messages_follow_persona_templates() {
        let candidates = vec![
            candidate("Peer One", Persona::Peer),
            candidate("Insider One", Persona::Insider),
            candidate("Recruiter One", Persona::Recruiter),
        ];
        let plan = planner().plan(&job(), &candidates, today());

        assert!(plan.messages["Peer One"].contains("similar product ground"));
        assert!(plan.messages["Insider One"].contains("how the team runs its process"));
        assert!(plan.messages["Recruiter One"].contains("15-minute screen"));
        for message in plan.messages.values() {
            assert!(message.contains("Axon"));
            assert!(message.contains("Technical Program Manager"));
        }
    }
}
