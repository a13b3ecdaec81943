use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

/// The daily roll-up: counts, gaps, narrative lines, and next actions.
/// Purely computed; recomputed from history on every request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailySummary {
    pub date: NaiveDate,
    pub jobs_found: usize,
    pub jobs_applied: usize,
    pub outreach_sent: usize,
    pub responses_received: usize,
    pub interviews_scheduled: usize,
    pub skills_gaps: Vec<String>,
    pub summary_lines: Vec<String>,
    pub top_priorities: Vec<String>,
}

/// One line of recent activity for the dashboard feed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityItem {
    pub kind: &'static str,
    pub description: String,
    pub timestamp: DateTime<Utc>,
}

/// Aggregate counts over the whole tracked history.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardStats {
    pub total_jobs: usize,
    pub jobs_applied: usize,
    pub jobs_pending: usize,
    pub outreach_sent: usize,
    pub interviews_scheduled: usize,
    pub recent_activity: Vec<ActivityItem>,
}
