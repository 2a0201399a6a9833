// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Exported gauge state replaced wholesale on every poll cycle.
//!
//! The store owns a `prometheus-client` registry holding a single gauge
//! family. Each series operation is atomic, but the clear-then-repopulate
//! sequence in [`SnapshotStore::publish`] is not; a scrape that lands in
//! between observes a partial set. Callers finish all network work before
//! publishing so that window only spans in-memory updates.

use prometheus_client::{
    encoding::text::encode,
    metrics::{family::Family, gauge::Gauge},
    registry::Registry,
};

use crate::{error::Error, projector::IssueLabels};

/// Namespace and subsystem shared by every exported metric.
pub const METRIC_PREFIX: &str = "github_issue_prometheus_exporter";
/// Name of the issue gauge below [`METRIC_PREFIX`].
pub const METRIC_NAME: &str = "issue_count";
const METRIC_HELP: &str = "Number of issues";

/// Value set for every present issue.
const ISSUE_PRESENT: i64 = 1;

/// Thread-safe holder of the latest published issue snapshot.
#[derive(Debug,)]
pub struct SnapshotStore
{
    registry: Registry,
    issues:   Family<IssueLabels, Gauge,>,
}

impl SnapshotStore
{
    /// Creates an empty store with the issue gauge registered.
    pub fn new() -> Self
    {
        let mut registry = Registry::with_prefix(METRIC_PREFIX,);
        let issues = Family::<IssueLabels, Gauge,>::default();
        registry.register(METRIC_NAME, METRIC_HELP, issues.clone(),);

        Self {
            registry,
            issues,
        }
    }

    /// Replaces the exported series with `snapshot`.
    ///
    /// Every previously exported series is removed before the new set is
    /// written, so issues that were closed or relabeled disappear. Duplicate
    /// label sets collapse into one series. Returns the number of label sets
    /// applied.
    pub fn publish(&self, snapshot: &[IssueLabels],) -> usize
    {
        self.issues.clear();
        for labels in snapshot {
            self.issues.get_or_create(labels,).set(ISSUE_PRESENT,);
        }
        snapshot.len()
    }

    /// Encodes the current state in the OpenMetrics text format.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Encode`] when the encoder fails.
    pub fn render(&self,) -> Result<String, Error,>
    {
        let mut buffer = String::new();
        encode(&mut buffer, &self.registry,)?;
        Ok(buffer,)
    }
}

impl Default for SnapshotStore
{
    fn default() -> Self
    {
        Self::new()
    }
}
