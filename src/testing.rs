// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Scripted issue source shared by unit tests.

use std::{
    collections::{HashMap, HashSet},
    sync::Mutex,
};

use crate::{
    error::Error,
    issue::{IssuePage, IssueRecord, IssueSource},
    repository::RepoRef,
};

/// Request observed by [`ScriptedSource`].
#[derive(Debug, Clone, PartialEq, Eq,)]
pub(crate) struct Call
{
    pub repository: RepoRef,
    pub label:      String,
    pub page:       u32,
    pub per_page:   u8,
}

/// Issue source replaying preconfigured pages and failures.
#[derive(Debug, Default,)]
pub(crate) struct ScriptedSource
{
    pages:   HashMap<(RepoRef, u32,), IssuePage,>,
    failing: HashSet<RepoRef,>,
    calls:   Mutex<Vec<Call,>,>,
}

impl ScriptedSource
{
    pub(crate) fn new() -> Self
    {
        Self::default()
    }

    pub(crate) fn with_page(
        mut self,
        repository: &RepoRef,
        page: u32,
        issues: Vec<IssueRecord,>,
        next_page: u32,
    ) -> Self
    {
        self.pages.insert((repository.clone(), page,), IssuePage {
            issues,
            next_page,
        },);
        self
    }

    pub(crate) fn failing_on(mut self, repository: &RepoRef,) -> Self
    {
        self.failing.insert(repository.clone(),);
        self
    }

    pub(crate) fn calls(&self,) -> Vec<Call,>
    {
        self.calls.lock().expect("calls lock poisoned",).clone()
    }
}

impl IssueSource for ScriptedSource
{
    async fn list_issues(
        &self,
        repository: &RepoRef,
        label: &str,
        page: u32,
        per_page: u8,
    ) -> Result<IssuePage, Error,>
    {
        self.calls.lock().expect("calls lock poisoned",).push(Call {
            repository: repository.clone(),
            label: label.to_owned(),
            page,
            per_page,
        },);

        if self.failing.contains(repository,) {
            return Err(Error::fetch(repository, page, "scripted failure",),);
        }

        Ok(self.pages.get(&(repository.clone(), page,),).cloned().unwrap_or_default(),)
    }
}

impl IssueSource for &ScriptedSource
{
    async fn list_issues(
        &self,
        repository: &RepoRef,
        label: &str,
        page: u32,
        per_page: u8,
    ) -> Result<IssuePage, Error,>
    {
        (**self).list_issues(repository, label, page, per_page,).await
    }
}

/// Builds an issue record with a GitHub API URL for `repository`.
pub(crate) fn issue(repository: &RepoRef, number: u64, labels: &[&str], author: &str,) -> IssueRecord
{
    IssueRecord {
        number,
        labels: labels.iter().map(|label| (*label).to_owned(),).collect(),
        author: author.to_owned(),
        source_url: format!(
            "https://api.github.com/repos/{}/{}/issues/{number}",
            repository.owner, repository.name
        ),
        repository: repository.clone(),
    }
}
