use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};

use super::aggregator;
use super::views::{DailySummary, DashboardStats};
use crate::workflows::apply_pack::{ApplyPackStore, ApplyPackStoreError};
use crate::workflows::jobs::repository::{JobFilter, JobRepository, RepositoryError};
use crate::workflows::outreach::{OutreachStore, OutreachStoreError};

/// Read-only aggregation over the job, apply-pack, and outreach stores.
/// Every call recomputes from a consistent snapshot; nothing here mutates.
pub struct SummaryService<R, A, O> {
    jobs: Arc<R>,
    packs: Arc<A>,
    outreach: Arc<O>,
}

impl<R, A, O> SummaryService<R, A, O>
where
    R: JobRepository + 'static,
    A: ApplyPackStore + 'static,
    O: OutreachStore + 'static,
{
    pub fn new(jobs: Arc<R>, packs: Arc<A>, outreach: Arc<O>) -> Self {
        Self {
            jobs,
            packs,
            outreach,
        }
    }

    pub fn today(&self, now: DateTime<Utc>) -> Result<DailySummary, SummaryServiceError> {
        self.for_day(now.date_naive(), now)
    }

    pub fn for_day(
        &self,
        day: NaiveDate,
        now: DateTime<Utc>,
    ) -> Result<DailySummary, SummaryServiceError> {
        let jobs = self.jobs.list(&JobFilter::default())?;
        let transitions = self.jobs.transitions()?;
        let packs = self.packs.all()?;
        let plans = self.outreach.all_plans()?;
        let responses = self.outreach.responses()?;

        Ok(aggregator::summarize(
            day,
            now,
            &jobs,
            &transitions,
            &packs,
            &plans,
            &responses,
        ))
    }

    pub fn dashboard(&self) -> Result<DashboardStats, SummaryServiceError> {
        let jobs = self.jobs.list(&JobFilter::default())?;
        let transitions = self.jobs.transitions()?;
        let packs = self.packs.all()?;
        let plans = self.outreach.all_plans()?;
        let responses = self.outreach.responses()?;

        Ok(aggregator::dashboard(
            &jobs,
            &transitions,
            &packs,
            &plans,
            &responses,
        ))
    }
}

/// Error raised by the summary service; always a store failure, since the
/// aggregation itself cannot fail.
#[derive(Debug, thiserror::Error)]
pub enum SummaryServiceError {
    #[error(transparent)]
    Jobs(#[from] RepositoryError),
    #[error(transparent)]
    Packs(#[from] ApplyPackStoreError),
    #[error(transparent)]
    Outreach(#[from] OutreachStoreError),
}
