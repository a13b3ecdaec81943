//! Daily summary and dashboard aggregation. Everything here is a pure query
//! over the job, apply-pack, and outreach histories.

pub mod aggregator;
pub mod router;
pub mod service;
pub mod views;

pub use aggregator::{dashboard, summarize};
pub use router::summary_router;
pub use service::{SummaryService, SummaryServiceError};
pub use views::{ActivityItem, DailySummary, DashboardStats};
