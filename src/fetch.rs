// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

/// Paginated retrieval of open issues across configured repositories.
///
/// Repositories are walked sequentially in configuration order and every page
/// is followed until the source reports no further pages. The first failure
/// aborts the whole fetch so a cycle never publishes a partial snapshot.
use tracing::debug;

use crate::{
    error::Error,
    issue::{IssueRecord, IssueSource},
    repository::RepoRef,
};

/// Largest page size accepted by the GitHub issues API.
pub const MAX_PAGE_SIZE: u8 = 100;

/// Fetches every open issue matching `label` in all `repositories`.
///
/// # Arguments
///
/// * `source` - Issue tracker collaborator
/// * `repositories` - Repositories to query, in output order
/// * `label` - Label filter; empty means unfiltered
///
/// # Errors
///
/// Returns the first error reported by `source`; issues collected before the
/// failure are discarded.
///
/// # Example
///
/// ```no_run
/// use gime::{GithubIssueSource, RepoRef, fetch_all_issues};
///
/// # async fn example() -> Result<(), gime::Error> {
/// let source = GithubIssueSource::new("ghp_token", None,)?;
/// let repos = vec![RepoRef::new("acme", "widgets",)];
/// let issues = fetch_all_issues(&source, &repos, "bug",).await?;
/// println!("{} open issues", issues.len());
/// # Ok(())
/// # }
/// ```
pub async fn fetch_all_issues<S: IssueSource,>(
    source: &S,
    repositories: &[RepoRef],
    label: &str,
) -> Result<Vec<IssueRecord,>, Error,>
{
    let mut issues = Vec::new();

    for repository in repositories {
        let mut page = 1u32;
        let before = issues.len();

        loop {
            let batch = source.list_issues(repository, label, page, MAX_PAGE_SIZE,).await?;
            debug!(%repository, page, count = batch.issues.len(), "fetched issue page");

            let last = batch.is_last();
            let next_page = batch.next_page;
            issues.extend(batch.issues,);

            if last {
                break;
            }
            page = next_page;
        }

        debug!(%repository, count = issues.len() - before, "repository exhausted");
    }

    Ok(issues,)
}
