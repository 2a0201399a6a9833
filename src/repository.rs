// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Repository references parsed from configuration and issue URLs.
//!
//! A [`RepoRef`] identifies one GitHub repository as an `owner/name` pair. The
//! configured list is parsed once at startup; issue URLs returned by the API
//! are parsed on every cycle to recover the canonical name of the repository
//! an issue lives in.

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Path segment preceding `owner/name` in GitHub REST API issue URLs.
const REPOS_SEGMENT: &str = "repos";

/// Repository identified by its owner and name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize,)]
pub struct RepoRef
{
    /// Account or organization that owns the repository.
    pub owner: String,
    /// Repository name.
    pub name:  String,
}

impl RepoRef
{
    /// Creates a repository reference from its owner and name.
    pub fn new<O, N,>(owner: O, name: N,) -> Self
    where
        O: Into<String,>,
        N: Into<String,>,
    {
        Self {
            owner: owner.into(), name: name.into(),
        }
    }

    /// Recovers the repository from a GitHub REST API issue URL.
    ///
    /// The owner and name are the two path segments following `repos`, which
    /// for `https://api.github.com/repos/{owner}/{name}/issues/{number}` are
    /// the `/`-separated indices 4 and 5. Returns [`None`] when the URL does
    /// not have that shape.
    ///
    /// # Examples
    ///
    /// ```
    /// use gime::RepoRef;
    ///
    /// let repo = RepoRef::from_issue_url("https://api.github.com/repos/acme/widgets/issues/42",);
    /// assert_eq!(repo, Some(RepoRef::new("acme", "widgets",)));
    /// ```
    pub fn from_issue_url(url: &str,) -> Option<Self,>
    {
        let mut segments = url.split('/',).skip_while(|segment| *segment != REPOS_SEGMENT,);
        segments.next()?;

        let owner = segments.next().filter(|segment| !segment.is_empty(),)?;
        let name = segments.next().filter(|segment| !segment.is_empty(),)?;

        Some(Self::new(owner, name,),)
    }
}

impl std::fmt::Display for RepoRef
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_,>,) -> std::fmt::Result
    {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Parses a comma-separated list of `owner/name` pairs.
///
/// Whitespace around entries and segments is ignored. Order is preserved.
///
/// # Errors
///
/// Returns [`Error::MalformedRepository`] carrying the offending entry when it
/// does not split into exactly two non-empty segments.
///
/// # Examples
///
/// ```
/// use gime::{RepoRef, parse_repositories};
///
/// let repos = parse_repositories("a/b,c/d",)?;
/// assert_eq!(repos, vec![RepoRef::new("a", "b",), RepoRef::new("c", "d",)]);
/// assert!(parse_repositories("a",).is_err());
/// # Ok::<(), gime::Error>(())
/// ```
pub fn parse_repositories(raw: &str,) -> Result<Vec<RepoRef,>, Error,>
{
    raw.split(',',).map(parse_entry,).collect()
}

fn parse_entry(entry: &str,) -> Result<RepoRef, Error,>
{
    let malformed = || Error::MalformedRepository {
        entry: entry.to_owned(),
    };

    let segments: Vec<&str,> = entry.trim().split('/',).map(str::trim,).collect();
    match segments.as_slice() {
        [owner, name,] if !owner.is_empty() && !name.is_empty() => Ok(RepoRef::new(*owner, *name,),),
        _ => Err(malformed(),),
    }
}
