//! Integration specifications for the daily summary and dashboard
//! aggregation over a seeded day of activity.

mod common;

use std::sync::Arc;

use chrono::{Duration, NaiveDate};

use autopilot::workflows::apply_pack::{
    ApplyPackEngine, ApplyPackService, ApplyPackStore, MatchConfig,
};
use autopilot::workflows::jobs::repository::JobRepository;
use autopilot::workflows::jobs::{JobId, JobService, JobTrack};
use autopilot::workflows::outreach::{OutreachPolicy, OutreachService, OutreachStore, Persona};
use autopilot::workflows::summary::SummaryService;
use common::*;

struct World {
    jobs: Arc<MemoryJobRepository>,
    packs: Arc<MemoryPackStore>,
    outreach_store: Arc<MemoryOutreachStore>,
    summary: SummaryService<MemoryJobRepository, MemoryPackStore, MemoryOutreachStore>,
}

/// Seed one working day: two jobs found today, one submission walked through
/// the full sequence, an early interview signal, an overdue job, a due-today
/// job, two apply packs, outreach plans, and one recorded response.
fn seeded_world() -> World {
    let now = fixed_now();
    let yesterday = now - Duration::days(1);

    let jobs = Arc::new(MemoryJobRepository::default());
    let job_service = JobService::new(jobs.clone());

    job_service
        .create(draft("axon-tpm", "Axon", JobTrack::Tpm), now)
        .expect("job A");
    job_service
        .create(draft("brex-pm", "Brex", JobTrack::Pm), now)
        .expect("job B");

    let mut overdue = draft("caro-pm", "Caro", JobTrack::Pm);
    overdue.apply_by = now - Duration::hours(2);
    job_service.create(overdue, yesterday).expect("job C");

    let mut due_today = draft("delta-pm", "Delta", JobTrack::Pm);
    due_today.apply_by = now + Duration::hours(10);
    job_service.create(due_today, yesterday).expect("job D");

    job_service
        .create(draft("echo-pm", "Echo", JobTrack::Pm), yesterday)
        .expect("job E");

    let mut tick = now;
    for status in ["prepared", "pdf_ready", "autofilled", "submitted"] {
        tick += Duration::minutes(10);
        job_service
            .set_status(&JobId("brex-pm".to_string()), status, tick)
            .expect("forward transition");
    }
    // Early interview signal straight from `new`; applied as an override.
    job_service
        .set_status(&JobId("echo-pm".to_string()), "interview", now + Duration::hours(1))
        .expect("interview override");

    let packs = Arc::new(MemoryPackStore::default());
    let pack_service = ApplyPackService::new(
        jobs.clone(),
        Arc::new(StaticProfiles),
        packs.clone(),
        ApplyPackEngine::new(MatchConfig::standard()),
    );
    let jd = "Needs SQL, Amplitude dashboards and GA4 reporting.";
    pack_service
        .generate(&JobId("axon-tpm".to_string()), jd, now)
        .expect("pack A");
    pack_service
        .generate(&JobId("brex-pm".to_string()), jd, now)
        .expect("pack B");

    let outreach_store = Arc::new(MemoryOutreachStore::default());
    let directory = StaticDirectory {
        candidates: vec![
            candidate("Peer One", "Axon", Persona::Peer),
            candidate("Peer Two", "Axon", Persona::Peer),
            candidate("Insider One", "Axon", Persona::Insider),
            candidate("Insider Two", "Axon", Persona::Insider),
            candidate("Recruiter One", "Axon", Persona::Recruiter),
            candidate("Caro Peer", "Caro", Persona::Peer),
            candidate("Caro Recruiter", "Caro", Persona::Recruiter),
        ],
    };
    let outreach_service = OutreachService::new(
        jobs.clone(),
        Arc::new(directory),
        outreach_store.clone(),
        Arc::new(MemoryReminderSink::default()),
        OutreachPolicy::standard(),
    );

    outreach_service
        .plan(&JobId("axon-tpm".to_string()), today())
        .expect("plan A");
    // An older plan whose follow-ups have already come due.
    let ten_days_ago = NaiveDate::from_ymd_opt(2025, 9, 26).expect("valid");
    outreach_service
        .plan(&JobId("caro-pm".to_string()), ten_days_ago)
        .expect("plan C");
    outreach_service
        .record_response(&JobId("caro-pm".to_string()), "Caro Recruiter", now)
        .expect("response records");

    let summary = SummaryService::new(jobs.clone(), packs.clone(), outreach_store.clone());
    World {
        jobs,
        packs,
        outreach_store,
        summary,
    }
}

#[test]
fn counts_cover_exactly_the_requested_day() {
    let world = seeded_world();
    let summary = world.summary.today(fixed_now()).expect("summary builds");

    assert_eq!(summary.date, today());
    assert_eq!(summary.jobs_found, 2);
    assert_eq!(summary.jobs_applied, 1);
    assert_eq!(summary.outreach_sent, 5);
    assert_eq!(summary.responses_received, 1);
    assert_eq!(summary.interviews_scheduled, 1);
}

#[test]
fn skills_gaps_union_is_deduplicated_and_sorted() {
    let world = seeded_world();
    let summary = world.summary.today(fixed_now()).expect("summary builds");

    assert_eq!(summary.skills_gaps, vec!["Amplitude", "GA4"]);
}

#[test]
fn summary_lines_follow_the_fixed_category_order() {
    let world = seeded_world();
    let summary = world.summary.today(fixed_now()).expect("summary builds");

    assert_eq!(summary.summary_lines.len(), 6);
    assert!(summary.summary_lines[0].contains("Found 2 new job(s)"));
    assert!(summary.summary_lines[1].contains("Submitted 1 application(s)"));
    assert!(summary.summary_lines[2].contains("outreach to 5 contact(s)"));
    assert!(summary.summary_lines[3].contains("1 response(s)"));
    assert!(summary.summary_lines[4].contains("1 interview(s)"));
    assert!(summary.summary_lines[5].contains("out-of-band"));
}

#[test]
fn priorities_rank_overdue_before_due_by_date() {
    let world = seeded_world();
    let summary = world.summary.today(fixed_now()).expect("summary builds");

    assert_eq!(summary.top_priorities.len(), 3);
    // The answered recruiter follow-up drops out; the unanswered peer
    // follow-up (due Oct 3) precedes the overdue application (Oct 6).
    assert!(summary.top_priorities[0].contains("Follow up with Caro Peer"));
    assert!(summary.top_priorities[1].contains("Apply to Caro"));
    assert!(summary.top_priorities[1].contains("overdue"));
    assert!(summary.top_priorities[2].contains("Apply to Delta"));
    assert!(summary.top_priorities[2].contains("due today"));
}

#[test]
fn regenerating_the_same_day_is_idempotent() {
    let world = seeded_world();
    let first = world.summary.today(fixed_now()).expect("summary builds");
    let second = world.summary.today(fixed_now()).expect("summary builds");
    assert_eq!(first, second);
}

#[test]
fn another_day_sees_no_activity() {
    let world = seeded_world();
    let quiet_day = today() + Duration::days(30);
    let summary = world
        .summary
        .for_day(quiet_day, fixed_now() + Duration::days(30))
        .expect("summary builds");

    assert_eq!(summary.jobs_found, 0);
    assert_eq!(summary.jobs_applied, 0);
    assert!(summary.skills_gaps.is_empty());
}

#[test]
fn dashboard_stats_are_recomputed_from_history() {
    let world = seeded_world();
    let stats = world.summary.dashboard().expect("stats build");

    assert_eq!(stats.total_jobs, 5);
    assert_eq!(stats.jobs_applied, 1);
    assert_eq!(stats.jobs_pending, 3);
    assert_eq!(stats.outreach_sent, 7);
    assert_eq!(stats.interviews_scheduled, 1);
    assert_eq!(stats.recent_activity.len(), 10);

    // Re-reading the stores must not change the answer.
    let again = world.summary.dashboard().expect("stats build");
    assert_eq!(stats, again);

    // The underlying stores still hold everything the feed was derived from.
    assert_eq!(world.jobs.transitions().expect("transitions").len(), 5);
    assert_eq!(world.packs.all().expect("packs").len(), 2);
    assert_eq!(world.outreach_store.all_plans().expect("plans").len(), 2);
}
