#![allow(non_shorthand_field_patterns)]
#![doc = "Error handling primitives shared across the exporter crate."]
// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! The derive emitted by [`masterror::Error`] expands pattern matches that
//! trigger the `non_shorthand_field_patterns` lint. The lint is disabled for
//! the module to keep the generated implementations warning-free.

use std::net::SocketAddr;

/// Coarse classification of [`Error`] values.
///
/// Configuration errors are fatal at startup, fetch errors are fatal for the
/// running process, server errors originate from the scrape endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq,)]
pub enum ErrorKind
{
    /// Missing or malformed environment-derived value.
    Config,
    /// Upstream issue tracker call failed.
    Fetch,
    /// Metrics endpoint could not bind, serve or encode.
    Server,
}

/// Unified error type returned by the resolver, fetcher, and endpoint.
///
/// Each variant captures the stage and, where applicable, the repository so a
/// failure can be diagnosed from logs alone. Credentials are never embedded in
/// messages.
#[derive(Debug, masterror::Error,)]
pub enum Error
{
    /// Authentication token is unset or empty.
    #[error("missing credential: environment variable {variable} is not set or empty")]
    MissingCredential {
        /// Name of the environment variable that was expected.
        variable: &'static str,
    },
    /// Required configuration value is unset or empty.
    #[error("missing required value: environment variable {variable} is not set or empty")]
    MissingValue {
        /// Name of the environment variable that was expected.
        variable: &'static str,
    },
    /// Poll interval override could not be used.
    #[error("invalid poll interval {value:?}: {reason}")]
    InvalidInterval {
        /// Raw value read from the environment.
        value:  String,
        /// Why the value was rejected.
        reason: String,
    },
    /// Repository list entry does not split into `owner/name`.
    #[error("repository is invalid: {entry:?} (expected owner/name)")]
    MalformedRepository {
        /// Offending substring of the repository list.
        entry: String,
    },
    /// Issue tracker client could not be constructed.
    #[error("failed to initialize GitHub client: {message}")]
    Client {
        /// Human readable message describing the failure.
        message: String,
    },
    /// A page of issues could not be fetched.
    #[error("failed to get issues for {repository} (page {page}): {message}")]
    Fetch {
        /// Repository in `owner/name` form.
        repository: String,
        /// Page number that was requested.
        page:       u32,
        /// Human readable message describing the upstream failure.
        message:    String,
    },
    /// Metrics endpoint failed to bind its listener.
    #[error("failed to bind metrics endpoint on {address}: {source}")]
    Bind {
        /// Address the listener was bound to.
        address: SocketAddr,
        /// Underlying I/O error reported by the operating system.
        source:  std::io::Error,
    },
    /// Metrics endpoint stopped serving.
    #[error("metrics endpoint failed: {source}")]
    Serve {
        /// Underlying I/O error reported by the server.
        source: std::io::Error,
    },
    /// Gauge state could not be encoded into exposition text.
    #[error("failed to encode metrics: {message}")]
    Encode {
        /// Human readable message describing the encoding failure.
        message: String,
    },
}

impl Error
{
    /// Constructs a fetch error for the given repository and page.
    ///
    /// # Parameters
    ///
    /// * `repository` - Repository in `owner/name` form.
    /// * `page` - Page number that failed.
    /// * `message` - Human-readable description of the upstream failure.
    pub fn fetch<R, M,>(repository: R, page: u32, message: M,) -> Self
    where
        R: ToString,
        M: Into<String,>,
    {
        Self::Fetch {
            repository: repository.to_string(),
            page,
            message: message.into(),
        }
    }

    /// Returns the coarse classification of the error.
    pub fn kind(&self,) -> ErrorKind
    {
        match self {
            Self::MissingCredential {
                ..
            }
            | Self::MissingValue {
                ..
            }
            | Self::InvalidInterval {
                ..
            }
            | Self::MalformedRepository {
                ..
            } => ErrorKind::Config,
            Self::Client {
                ..
            }
            | Self::Fetch {
                ..
            } => ErrorKind::Fetch,
            Self::Bind {
                ..
            }
            | Self::Serve {
                ..
            }
            | Self::Encode {
                ..
            } => ErrorKind::Server,
        }
    }

    /// Formats the error for diagnostics without the variant name.
    ///
    /// The returned string matches the [`std::fmt::Display`] implementation.
    pub fn to_display_string(&self,) -> String
    {
        format!("{self}")
    }
}

impl From<std::fmt::Error,> for Error
{
    fn from(error: std::fmt::Error,) -> Self
    {
        Self::Encode {
            message: error.to_string(),
        }
    }
}
