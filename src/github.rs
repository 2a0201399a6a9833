// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

/// GitHub-backed issue source built on octocrab.
///
/// Lists open issues per repository through the REST issues endpoint and
/// converts the `next` pagination link into a page number.
use octocrab::{Octocrab, models::issues::Issue, params};
use tracing::debug;
use url::form_urlencoded;

use crate::{
    error::Error,
    issue::{IssuePage, IssueRecord, IssueSource},
    repository::RepoRef,
};

/// Issue source querying the GitHub REST API.
#[derive(Clone,)]
pub struct GithubIssueSource
{
    client: Octocrab,
}

impl GithubIssueSource
{
    /// Builds an authenticated client.
    ///
    /// # Arguments
    ///
    /// * `token` - GitHub personal access token
    /// * `base_url` - Optional API base URL for GitHub Enterprise
    ///
    /// # Errors
    ///
    /// Returns [`Error::Client`] when the base URL is invalid or the client
    /// cannot be initialized.
    pub fn new(token: &str, base_url: Option<&str,>,) -> Result<Self, Error,>
    {
        let mut builder = Octocrab::builder().personal_token(token.to_owned(),);

        if let Some(base,) = base_url {
            builder = builder.base_uri(base,).map_err(|e| Error::Client {
                message: format!("invalid API base URL {base:?}: {e}"),
            },)?;
        }

        let client = builder.build().map_err(|e| Error::Client {
            message: e.to_string(),
        },)?;

        Ok(Self {
            client,
        },)
    }
}

impl IssueSource for GithubIssueSource
{
    async fn list_issues(
        &self,
        repository: &RepoRef,
        label: &str,
        page: u32,
        per_page: u8,
    ) -> Result<IssuePage, Error,>
    {
        let labels = [label.to_owned()];
        let handler = self.client.issues(&repository.owner, &repository.name,);
        let mut request =
            handler.list().state(params::State::Open,).per_page(per_page,).page(page,);
        if !label.is_empty() {
            request = request.labels(&labels,);
        }

        let response = request
            .send()
            .await
            .map_err(|e| Error::fetch(repository, page, e.to_string(),),)?;

        let next_page = next_page_number(response.next.as_ref().and_then(|uri| uri.query(),),);
        debug!(%repository, page, next_page, "GitHub issues page received");

        Ok(IssuePage {
            issues: response
                .items
                .into_iter()
                .map(|issue| issue_record(issue, repository,),)
                .collect(),
            next_page,
        },)
    }
}

fn issue_record(issue: Issue, repository: &RepoRef,) -> IssueRecord
{
    IssueRecord {
        number:     issue.number,
        labels:     issue.labels.into_iter().map(|label| label.name,).collect(),
        author:     issue.user.login,
        source_url: issue.url.to_string(),
        repository: repository.clone(),
    }
}

/// Extracts the `page` parameter from the query of the `next` pagination
/// link; `0` when there is no link or no numeric page.
fn next_page_number(next_query: Option<&str,>,) -> u32
{
    next_query
        .and_then(|query| {
            form_urlencoded::parse(query.as_bytes(),)
                .find(|(key, _,)| key == "page",)
                .and_then(|(_, value,)| value.parse().ok(),)
        },)
        .unwrap_or(0,)
}
