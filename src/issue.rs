// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Issue records and the issue tracker collaborator contract.

use serde::{Deserialize, Serialize};

use crate::{error::Error, repository::RepoRef};

/// Open issue as returned by the issue tracker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize,)]
pub struct IssueRecord
{
    /// Issue number within its repository.
    pub number:     u64,
    /// Label names in the order returned by the tracker.
    pub labels:     Vec<String,>,
    /// Login of the issue author.
    pub author:     String,
    /// Canonical API URL of the issue.
    pub source_url: String,
    /// Configured repository whose query returned the issue.
    pub repository: RepoRef,
}

/// One page of issues plus the pagination cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq,)]
pub struct IssuePage
{
    /// Issues on this page.
    pub issues:    Vec<IssueRecord,>,
    /// Next page to request; `0` when the listing is exhausted.
    pub next_page: u32,
}

impl IssuePage
{
    /// Returns `true` when no further pages follow this one.
    pub fn is_last(&self,) -> bool
    {
        self.next_page == 0
    }
}

/// Issue tracker capable of listing open issues page by page.
///
/// Implementations map transport and API failures into [`Error::Fetch`] with
/// the repository and page that failed.
pub trait IssueSource
{
    /// Lists one page of open issues in `repository`.
    ///
    /// # Arguments
    ///
    /// * `repository` - Repository to query
    /// * `label` - Label filter; empty means unfiltered
    /// * `page` - 1-based page number
    /// * `per_page` - Page size, at most 100
    fn list_issues(
        &self,
        repository: &RepoRef,
        label: &str,
        page: u32,
        per_page: u8,
    ) -> impl Future<Output = Result<IssuePage, Error,>,> + Send;
}
