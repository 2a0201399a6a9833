//! Prometheus exporter for open GitHub issues.
//!
//! The library polls the GitHub issues API for a configured set of
//! repositories, projects every open issue matching an optional label filter
//! into a labeled gauge series, and republishes the whole set on each cycle so
//! closed or relabeled issues disappear from the exported state. The binary
//! wires these pieces to an HTTP scrape endpoint.

mod config;
mod error;
mod fetch;
mod github;
mod issue;
mod projector;
mod repository;
mod scheduler;
mod server;
mod snapshot;
#[cfg(test)]
mod testing;

pub use config::{
    API_BASE_URL_VAR, AUTH_TOKEN_VAR, DEFAULT_POLL_INTERVAL_SECS, EnvSource, LABEL_FILTER_VAR,
    POLL_INTERVAL_VAR, ProcessEnv, REPOSITORY_LIST_VAR, Settings, resolve_api_base_url,
    resolve_auth_token, resolve_label_filter, resolve_poll_interval, resolve_repository_list,
};
pub use error::{Error, ErrorKind};
pub use fetch::{MAX_PAGE_SIZE, fetch_all_issues};
pub use github::GithubIssueSource;
pub use issue::{IssuePage, IssueRecord, IssueSource};
pub use projector::{IssueLabels, LabelValue, project};
pub use repository::{RepoRef, parse_repositories};
pub use scheduler::Scheduler;
pub use server::{METRICS_PATH, router, serve};
pub use snapshot::{METRIC_NAME, METRIC_PREFIX, SnapshotStore};
