use std::collections::BTreeSet;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use super::views::{ActivityItem, DailySummary, DashboardStats};
use crate::workflows::apply_pack::ApplyPack;
use crate::workflows::jobs::sla::{self, SlaStatus};
use crate::workflows::jobs::{Job, JobStatus, StatusTransition, TransitionKind};
use crate::workflows::outreach::{ContactResponse, OutreachPlan};

/// Roll one calendar day of activity into counts and narrative text. Pure:
/// same history in, same summary out.
pub fn summarize(
    day: NaiveDate,
    now: DateTime<Utc>,
    jobs: &[Job],
    transitions: &[StatusTransition],
    packs: &[ApplyPack],
    plans: &[OutreachPlan],
    responses: &[ContactResponse],
) -> DailySummary {
    let jobs_found = jobs
        .iter()
        .filter(|job| job.created_at.date_naive() == day)
        .count();
    let jobs_applied = transitions
        .iter()
        .filter(|t| t.to == JobStatus::Submitted && t.changed_at.date_naive() == day)
        .count();
    let outreach_sent: usize = plans
        .iter()
        .filter(|plan| plan.generated_on == day)
        .map(|plan| plan.contacts.len())
        .sum();
    let responses_received = responses
        .iter()
        .filter(|response| response.received_at.date_naive() == day)
        .count();
    let interviews_scheduled = transitions
        .iter()
        .filter(|t| t.to == JobStatus::Interview && t.changed_at.date_naive() == day)
        .count();
    let overrides = transitions
        .iter()
        .filter(|t| t.kind == TransitionKind::Override && t.changed_at.date_naive() == day)
        .count();

    let skills_gaps: Vec<String> = packs
        .iter()
        .filter(|pack| pack.generated_at.date_naive() == day)
        .flat_map(|pack| pack.missing_skills.iter().cloned())
        .collect::<BTreeSet<String>>()
        .into_iter()
        .collect();

    let mut summary_lines = Vec::new();
    if jobs_found > 0 {
        summary_lines.push(format!("Found {jobs_found} new job(s) to pursue."));
    }
    if jobs_applied > 0 {
        summary_lines.push(format!("Submitted {jobs_applied} application(s)."));
    }
    if outreach_sent > 0 {
        summary_lines.push(format!("Planned outreach to {outreach_sent} contact(s)."));
    }
    if responses_received > 0 {
        summary_lines.push(format!(
            "Received {responses_received} response(s) from outreach."
        ));
    }
    if interviews_scheduled > 0 {
        summary_lines.push(format!("Scheduled {interviews_scheduled} interview(s)."));
    }
    if overrides > 0 {
        summary_lines.push(format!(
            "Recorded {overrides} out-of-band status change(s); worth a review."
        ));
    }

    let top_priorities = top_priorities(day, now, jobs, plans, responses);

    DailySummary {
        date: day,
        jobs_found,
        jobs_applied,
        outreach_sent,
        responses_received,
        interviews_scheduled,
        skills_gaps,
        summary_lines,
        top_priorities,
    }
}

struct PriorityEntry {
    // 0 = overdue, 1 = due today; within a rank jobs come before follow-ups.
    rank: u8,
    date: NaiveDate,
    order: u8,
    text: String,
}

fn top_priorities(
    day: NaiveDate,
    now: DateTime<Utc>,
    jobs: &[Job],
    plans: &[OutreachPlan],
    responses: &[ContactResponse],
) -> Vec<String> {
    let mut entries: Vec<PriorityEntry> = Vec::new();

    for job in jobs {
        if !job.status.is_pre_submission() {
            continue;
        }
        let (rank, label) = match sla::classify(job.apply_by, now) {
            SlaStatus::Overdue => (0, "overdue"),
            SlaStatus::DueToday => (1, "due today"),
            SlaStatus::OnTrack => continue,
        };
        entries.push(PriorityEntry {
            rank,
            date: job.apply_by.date_naive(),
            order: 0,
            text: format!("Apply to {} {} ({label}).", job.company, job.role),
        });
    }

    let answered: BTreeSet<(&str, &str)> = responses
        .iter()
        .map(|response| (response.job_id.0.as_str(), response.contact_name.as_str()))
        .collect();

    for plan in plans {
        let job = jobs.iter().find(|job| job.job_id == plan.job_id);
        for (name, due) in &plan.followups {
            if *due > day || answered.contains(&(plan.job_id.0.as_str(), name.as_str())) {
                continue;
            }
            let rank = if *due < day { 0 } else { 1 };
            let about = match job {
                Some(job) => format!("{} {}", job.company, job.role),
                None => plan.job_id.0.clone(),
            };
            entries.push(PriorityEntry {
                rank,
                date: *due,
                order: 1,
                text: format!("Follow up with {name} about {about}."),
            });
        }
    }

    entries.sort_by(|a, b| {
        a.rank
            .cmp(&b.rank)
            .then(a.date.cmp(&b.date))
            .then(a.order.cmp(&b.order))
            .then(a.text.cmp(&b.text))
    });
    entries.into_iter().map(|entry| entry.text).collect()
}

/// Aggregate counts plus a recent-activity feed. Derived on demand from the
/// authoritative stores; there are no cached counters to drift.
pub fn dashboard(
    jobs: &[Job],
    transitions: &[StatusTransition],
    packs: &[ApplyPack],
    plans: &[OutreachPlan],
    responses: &[ContactResponse],
) -> DashboardStats {
    let total_jobs = jobs.len();
    let jobs_applied = jobs
        .iter()
        .filter(|job| job.status == JobStatus::Submitted)
        .count();
    let jobs_pending = jobs
        .iter()
        .filter(|job| job.status.is_pre_submission())
        .count();
    let outreach_sent: usize = plans.iter().map(|plan| plan.contacts.len()).sum();
    let interviews_scheduled = jobs
        .iter()
        .filter(|job| job.status == JobStatus::Interview)
        .count();

    let mut activity: Vec<ActivityItem> = Vec::new();
    for job in jobs {
        activity.push(ActivityItem {
            kind: "job_added",
            description: format!(
                "Added {} {} ({})",
                job.company,
                job.role,
                job.track.label()
            ),
            timestamp: job.created_at,
        });
    }
    for transition in transitions {
        let kind = match transition.kind {
            TransitionKind::Forward => "status_changed",
            TransitionKind::Override => "status_override",
        };
        activity.push(ActivityItem {
            kind,
            description: format!(
                "{} moved from {} to {}",
                transition.job_id.0,
                transition.from.label(),
                transition.to.label()
            ),
            timestamp: transition.changed_at,
        });
    }
    for pack in packs {
        activity.push(ActivityItem {
            kind: "apply_pack",
            description: format!("Generated apply pack for {}", pack.job_id.0),
            timestamp: pack.generated_at,
        });
    }
    for plan in plans {
        activity.push(ActivityItem {
            kind: "outreach_plan",
            description: format!(
                "Planned outreach to {} contact(s) for {}",
                plan.contacts.len(),
                plan.job_id.0
            ),
            timestamp: plan.generated_on.and_time(NaiveTime::MIN).and_utc(),
        });
    }
    for response in responses {
        activity.push(ActivityItem {
            kind: "response",
            description: format!(
                "Response from {} on {}",
                response.contact_name, response.job_id.0
            ),
            timestamp: response.received_at,
        });
    }

    activity.sort_by(|a, b| {
        b.timestamp
            .cmp(&a.timestamp)
            .then_with(|| a.description.cmp(&b.description))
    });
    activity.truncate(10);

    DashboardStats {
        total_jobs,
        jobs_applied,
        jobs_pending,
        outreach_sent,
        interviews_scheduled,
        recent_activity: activity,
    }
}
