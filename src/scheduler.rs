// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Fixed-interval driver of the fetch, project, publish cycle.
//!
//! Cycles are serialized: the next tick is only awaited once the current cycle
//! has finished, and ticks missed during a slow cycle are delayed rather than
//! fired in a burst. The first failing cycle ends [`Scheduler::run`]; the
//! binary treats that as fatal and relies on an external supervisor to restart
//! the process.

use std::{convert::Infallible, sync::Arc, time::Duration};

use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{error, info};

use crate::{
    error::Error, fetch::fetch_all_issues, issue::IssueSource, projector::project,
    repository::RepoRef, snapshot::SnapshotStore,
};

/// Periodic poller publishing issue snapshots into a [`SnapshotStore`].
pub struct Scheduler<S,>
{
    source:        S,
    repositories:  Vec<RepoRef,>,
    label:         String,
    store:         Arc<SnapshotStore,>,
    period:        Duration,
    poll_on_start: bool,
}

impl<S: IssueSource,> Scheduler<S,>
{
    /// Creates a scheduler polling `repositories` every `period`.
    ///
    /// # Panics
    ///
    /// [`Scheduler::run`] panics when `period` is zero; configuration
    /// resolution rejects a zero interval before a scheduler is built.
    pub fn new(
        source: S,
        repositories: Vec<RepoRef,>,
        label: String,
        store: Arc<SnapshotStore,>,
        period: Duration,
    ) -> Self
    {
        Self {
            source,
            repositories,
            label,
            store,
            period,
            poll_on_start: false,
        }
    }

    /// Runs the first cycle immediately instead of one period after start.
    pub fn poll_on_start(mut self, enabled: bool,) -> Self
    {
        self.poll_on_start = enabled;
        self
    }

    /// Runs one cycle: fetch every page, project, then publish.
    ///
    /// The store is only touched once all pages were fetched, so a failed
    /// cycle leaves the previous snapshot in place. Returns the number of
    /// published series.
    ///
    /// # Errors
    ///
    /// Propagates the first fetch error.
    pub async fn run_cycle(&self,) -> Result<usize, Error,>
    {
        let issues = fetch_all_issues(&self.source, &self.repositories, &self.label,).await?;
        let snapshot = project(&issues,);
        Ok(self.store.publish(&snapshot,),)
    }

    /// Drives cycles until one fails.
    ///
    /// # Errors
    ///
    /// Returns the error of the first failing cycle. Never returns otherwise.
    pub async fn run(self,) -> Result<Infallible, Error,>
    {
        let start = if self.poll_on_start { Instant::now() } else { Instant::now() + self.period };
        let mut ticker = time::interval_at(start, self.period,);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay,);

        info!(
            repositories = self.repositories.len(),
            label = %self.label,
            period_secs = self.period.as_secs(),
            "scheduler started"
        );

        let mut cycle = 0u64;
        loop {
            ticker.tick().await;
            cycle += 1;

            let started = Instant::now();
            match self.run_cycle().await {
                Ok(published,) => info!(
                    cycle,
                    published,
                    elapsed = ?started.elapsed(),
                    "snapshot published"
                ),
                Err(e,) => {
                    error!(cycle, "snapshot cycle failed: {e}");
                    return Err(e,);
                }
            }
        }
    }
}
