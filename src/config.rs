// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Environment-driven configuration for the exporter.
//!
//! Every value is resolved through an [`EnvSource`] so the resolver can be
//! exercised without touching the process environment. Missing required values
//! and malformed overrides are reported as configuration errors; the binary
//! treats them as fatal at startup.

use std::time::Duration;

use crate::{
    error::Error,
    repository::{RepoRef, parse_repositories},
};

/// Environment variable holding the GitHub token.
pub const AUTH_TOKEN_VAR: &str = "AUTH_TOKEN";
/// Environment variable holding the comma-separated `owner/name` list.
pub const REPOSITORY_LIST_VAR: &str = "REPOSITORY_LIST";
/// Environment variable holding the optional label filter.
pub const LABEL_FILTER_VAR: &str = "LABEL_FILTER";
/// Environment variable overriding the poll interval in seconds.
pub const POLL_INTERVAL_VAR: &str = "POLL_INTERVAL_SECONDS";
/// Environment variable overriding the GitHub API base URL.
pub const API_BASE_URL_VAR: &str = "API_BASE_URL";

/// Poll interval used when no override is configured.
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 300;

/// Read access to configuration variables.
pub trait EnvSource
{
    /// Returns the value of `key`, or [`None`] when it is unset.
    fn var(&self, key: &str,) -> Option<String,>;
}

/// [`EnvSource`] backed by the process environment.
#[derive(Debug, Clone, Copy, Default,)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv
{
    fn var(&self, key: &str,) -> Option<String,>
    {
        std::env::var(key,).ok()
    }
}

/// Fully resolved exporter settings.
#[derive(Clone,)]
pub struct Settings
{
    /// Period between poll cycles.
    pub poll_interval: Duration,
    /// GitHub token used to authenticate API calls.
    pub auth_token:    String,
    /// Repositories polled on every cycle, in configuration order.
    pub repositories:  Vec<RepoRef,>,
    /// Label filter applied to issue queries; empty means unfiltered.
    pub label:         String,
    /// Optional GitHub Enterprise API base URL.
    pub api_base_url:  Option<String,>,
}

impl Settings
{
    /// Resolves settings from the process environment.
    ///
    /// # Errors
    ///
    /// See [`Settings::resolve`].
    pub fn from_env() -> Result<Self, Error,>
    {
        Self::resolve(&ProcessEnv,)
    }

    /// Resolves settings from the provided environment source.
    ///
    /// # Errors
    ///
    /// Returns the first configuration error encountered, in the order: poll
    /// interval, token, repository list, repository parsing.
    pub fn resolve<E: EnvSource,>(env: &E,) -> Result<Self, Error,>
    {
        let poll_interval = resolve_poll_interval(env,)?;
        let auth_token = resolve_auth_token(env,)?;
        let raw_repositories = resolve_repository_list(env,)?;
        let repositories = parse_repositories(&raw_repositories,)?;

        Ok(Self {
            poll_interval,
            auth_token,
            repositories,
            label: resolve_label_filter(env,),
            api_base_url: resolve_api_base_url(env,),
        },)
    }
}

impl std::fmt::Debug for Settings
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_,>,) -> std::fmt::Result
    {
        f.debug_struct("Settings",)
            .field("poll_interval", &self.poll_interval,)
            .field("auth_token", &"<redacted>",)
            .field("repositories", &self.repositories,)
            .field("label", &self.label,)
            .field("api_base_url", &self.api_base_url,)
            .finish()
    }
}

/// Resolves the poll interval, defaulting to five minutes when the variable is
/// unset or empty. A whitespace-only value is rejected.
///
/// # Errors
///
/// Returns [`Error::InvalidInterval`] when the override is not a
/// non-negative integer or is zero.
pub fn resolve_poll_interval<E: EnvSource,>(env: &E,) -> Result<Duration, Error,>
{
    let Some(raw,) = env.var(POLL_INTERVAL_VAR,).filter(|value| !value.is_empty(),) else {
        return Ok(Duration::from_secs(DEFAULT_POLL_INTERVAL_SECS,),);
    };

    let seconds = raw.trim().parse::<u64,>().map_err(|e| Error::InvalidInterval {
        value:  raw.clone(),
        reason: format!("expected a whole number of seconds: {e}"),
    },)?;

    if seconds == 0 {
        return Err(Error::InvalidInterval {
            value:  raw,
            reason: "interval must be greater than zero".to_owned(),
        },);
    }

    Ok(Duration::from_secs(seconds,),)
}

/// Resolves the GitHub token.
///
/// # Errors
///
/// Returns [`Error::MissingCredential`] when the token is unset or empty.
pub fn resolve_auth_token<E: EnvSource,>(env: &E,) -> Result<String, Error,>
{
    non_empty(env, AUTH_TOKEN_VAR,).ok_or(Error::MissingCredential {
        variable: AUTH_TOKEN_VAR,
    },)
}

/// Resolves the raw repository list.
///
/// # Errors
///
/// Returns [`Error::MissingValue`] when the list is unset or empty.
pub fn resolve_repository_list<E: EnvSource,>(env: &E,) -> Result<String, Error,>
{
    non_empty(env, REPOSITORY_LIST_VAR,).ok_or(Error::MissingValue {
        variable: REPOSITORY_LIST_VAR,
    },)
}

/// Resolves the label filter; empty when unset.
pub fn resolve_label_filter<E: EnvSource,>(env: &E,) -> String
{
    non_empty(env, LABEL_FILTER_VAR,).unwrap_or_default()
}

/// Resolves the optional API base URL.
pub fn resolve_api_base_url<E: EnvSource,>(env: &E,) -> Option<String,>
{
    non_empty(env, API_BASE_URL_VAR,)
}

fn non_empty<E: EnvSource,>(env: &E, key: &str,) -> Option<String,>
{
    env.var(key,).filter(|value| !value.trim().is_empty(),)
}
