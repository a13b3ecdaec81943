use std::path::PathBuf;

use chrono::{Duration, Local, NaiveDate};
use clap::Args;

use crate::infra::{AppDirectory, SyntheticContactDirectory};
use crate::routes::build_services;
use autopilot::error::AppError;
use autopilot::workflows::directory::CsvContactDirectory;
use autopilot::workflows::jobs::{JobDraft, JobId, JobTrack};

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Override the demo date (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Connections CSV export to use as the contact directory.
    #[arg(long)]
    pub(crate) connections_csv: Option<PathBuf>,
    /// Print the personalized outreach messages in full.
    #[arg(long)]
    pub(crate) show_messages: bool,
}

const DEMO_JD: &str = "Axon is hiring a Technical Program Manager to run \
cross-functional delivery across device and cloud teams. You will own the \
roadmap with engineering leads, drive risk management and dependency \
tracking, report progress with SQL-backed dashboards, and keep stakeholders \
aligned through crisp written updates. Experience with A/B testing and \
Amplitude is a plus.";

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        today,
        connections_csv,
        show_messages,
    } = args;

    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let now = today
        .and_hms_opt(12, 0, 0)
        .expect("midday exists")
        .and_utc();

    let directory = match connections_csv {
        Some(path) => {
            let directory = CsvContactDirectory::from_path(&path)?;
            println!(
                "Contact directory: {} connection(s) imported from {}",
                directory.len(),
                path.display()
            );
            AppDirectory::Csv(directory)
        }
        None => {
            println!("Contact directory: synthetic slate (no connections CSV provided)");
            AppDirectory::Synthetic(SyntheticContactDirectory)
        }
    };

    let services = build_services(directory);

    println!("\nJob intake (evaluated {today})");
    let drafts = [
        ("axon-tpm", "Axon", "Technical Program Manager", JobTrack::Tpm, now + Duration::days(3)),
        ("northwind-pm", "Northwind", "Senior Product Manager", JobTrack::Pm, now + Duration::hours(10)),
        ("caro-po", "Caro", "Product Owner", JobTrack::Po, now - Duration::hours(2)),
    ];
    for (id, company, role, track, apply_by) in drafts {
        let draft = JobDraft {
            job_id: JobId(id.to_string()),
            company: company.to_string(),
            role: role.to_string(),
            track,
            jd_url: format!("https://jobs.example.com/{id}"),
            apply_by,
            notes: None,
        };
        match services.jobs.create(draft, now) {
            Ok(job) => {
                let view = job.view(now);
                println!(
                    "- {} | {} {} | track {} | SLA {}",
                    job.job_id.0,
                    job.company,
                    job.role,
                    job.track.label(),
                    view.sla.label()
                );
            }
            Err(err) => println!("- {id} rejected: {err}"),
        }
    }

    if let Err(err) = services
        .jobs
        .set_status(&JobId("northwind-pm".to_string()), "prepared", now)
    {
        println!("Status update failed: {err}");
    }

    println!("\nApply pack for axon-tpm");
    let pack = match services
        .apply_packs
        .generate(&JobId("axon-tpm".to_string()), DEMO_JD, now)
    {
        Ok(pack) => pack,
        Err(err) => {
            println!("  Generation unavailable: {err}");
            return Ok(());
        }
    };
    println!("- Match score: {:.2}", pack.match_score);
    if pack.missing_skills.is_empty() {
        println!("- Missing skills: none");
    } else {
        println!("- Missing skills: {}", pack.missing_skills.join(", "));
    }
    println!("- Rewritten bullets:");
    for rewrite in &pack.rewritten_bullets {
        println!("    * {}", rewrite.rewritten);
        println!("      ({})", rewrite.rationale);
    }
    if pack.risks.is_empty() {
        println!("- Risks: none");
    } else {
        println!("- Risks:");
        for risk in &pack.risks {
            println!("    * {risk}");
        }
    }
    println!("- Cover letter:\n");
    for line in pack.cover_letter.lines() {
        println!("    {line}");
    }

    println!("\nOutreach plan for axon-tpm");
    let plan = match services.outreach.plan(&JobId("axon-tpm".to_string()), today) {
        Ok(plan) => plan,
        Err(err) => {
            println!("  Planning unavailable: {err}");
            return Ok(());
        }
    };
    for contact in &plan.contacts {
        let followup = plan
            .followups
            .get(&contact.name)
            .map(|date| date.to_string())
            .unwrap_or_else(|| "unscheduled".to_string());
        println!(
            "- {} ({}, {}) via {} | follow up {}",
            contact.name,
            contact.persona.label(),
            contact.role,
            contact.channel.label(),
            followup
        );
    }
    for note in &plan.notes {
        println!("  note: {note}");
    }
    if show_messages {
        println!("\nMessages");
        for (name, message) in &plan.messages {
            println!("- {name}: {message}");
        }
    }

    match services
        .outreach
        .schedule_followups(&JobId("axon-tpm".to_string()))
    {
        Ok(ack) => println!("\nScheduled {} follow-up reminder(s)", ack.scheduled),
        Err(err) => println!("\nFollow-up scheduling unavailable: {err}"),
    }

    println!("\nDaily summary");
    match services.summary.today(now) {
        Ok(summary) => {
            for line in &summary.summary_lines {
                println!("- {line}");
            }
            if !summary.skills_gaps.is_empty() {
                println!("Skill gaps: {}", summary.skills_gaps.join(", "));
            }
            if !summary.top_priorities.is_empty() {
                println!("Top priorities:");
                for priority in &summary.top_priorities {
                    println!("- {priority}");
                }
            }
        }
        Err(err) => println!("Summary unavailable: {err}"),
    }

    println!("\nDashboard");
    match services.summary.dashboard() {
        Ok(stats) => {
            println!(
                "- {} job(s) tracked | {} applied | {} pending | {} interview(s)",
                stats.total_jobs,
                stats.jobs_applied,
                stats.jobs_pending,
                stats.interviews_scheduled
            );
            println!("- {} outreach contact(s) planned", stats.outreach_sent);
            println!("- Recent activity:");
            for item in &stats.recent_activity {
                println!("    [{}] {}", item.kind, item.description);
            }
        }
        Err(err) => println!("Dashboard unavailable: {err}"),
    }

    Ok(())
}
