// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Projection of issue records into gauge label sets.

use std::fmt::{self, Write};

use prometheus_client::encoding::{EncodeLabelSet, EncodeLabelValue, LabelValueEncoder};

use crate::{issue::IssueRecord, repository::RepoRef};

/// Separator used when joining label names into a single label value.
const LABEL_SEPARATOR: &str = ",";

/// Label value escaped for the text exposition format.
///
/// Backslash, double quote and line feed are written as `\\`, `\"` and `\n`
/// so author logins or label names containing them keep the output parseable.
#[derive(Debug, Clone, Default, Hash, PartialEq, Eq, PartialOrd, Ord,)]
pub struct LabelValue(String,);

impl LabelValue
{
    /// Returns the unescaped value.
    pub fn as_str(&self,) -> &str
    {
        &self.0
    }
}

impl From<String,> for LabelValue
{
    fn from(value: String,) -> Self
    {
        Self(value,)
    }
}

impl From<&str,> for LabelValue
{
    fn from(value: &str,) -> Self
    {
        Self(value.to_owned(),)
    }
}

impl PartialEq<str,> for LabelValue
{
    fn eq(&self, other: &str,) -> bool
    {
        self.0 == other
    }
}

impl PartialEq<&str,> for LabelValue
{
    fn eq(&self, other: &&str,) -> bool
    {
        self.0 == *other
    }
}

impl fmt::Display for LabelValue
{
    fn fmt(&self, f: &mut fmt::Formatter<'_,>,) -> fmt::Result
    {
        f.write_str(&self.0,)
    }
}

impl EncodeLabelValue for LabelValue
{
    fn encode(&self, encoder: &mut LabelValueEncoder<'_,>,) -> Result<(), fmt::Error,>
    {
        for ch in self.0.chars() {
            match ch {
                '\\' => encoder.write_str("\\\\",)?,
                '"' => encoder.write_str("\\\"",)?,
                '\n' => encoder.write_str("\\n",)?,
                other => encoder.write_char(other,)?,
            }
        }
        Ok((),)
    }
}

/// Label set identifying one exported issue series.
///
/// Field order is the order labels appear in the exposition output.
#[derive(Debug, Clone, Hash, PartialEq, Eq, EncodeLabelSet,)]
pub struct IssueLabels
{
    /// Issue number.
    pub number: LabelValue,
    /// Comma-joined label names in tracker order.
    pub label:  LabelValue,
    /// Issue author login.
    pub author: LabelValue,
    /// Repository in `owner/name` form.
    pub repo:   LabelValue,
}

/// Projects issues into one label set per issue.
///
/// The repository is recovered from the issue URL so renamed or transferred
/// repositories report their canonical name; the configured repository is used
/// when the URL has an unexpected shape.
///
/// # Examples
///
/// ```
/// use gime::{IssueRecord, RepoRef, project};
///
/// let issue = IssueRecord {
///     number:     42,
///     labels:     vec!["bug".to_owned(), "p1".to_owned()],
///     author:     "alice".to_owned(),
///     source_url: "https://api.github.com/repos/acme/widgets/issues/42".to_owned(),
///     repository: RepoRef::new("acme", "widgets",),
/// };
/// let labels = project(&[issue],);
/// assert_eq!(labels[0].label, "bug,p1");
/// assert_eq!(labels[0].repo, "acme/widgets");
/// ```
pub fn project(issues: &[IssueRecord],) -> Vec<IssueLabels,>
{
    issues.iter().map(project_issue,).collect()
}

fn project_issue(issue: &IssueRecord,) -> IssueLabels
{
    let repo = RepoRef::from_issue_url(&issue.source_url,)
        .unwrap_or_else(|| issue.repository.clone(),);

    IssueLabels {
        number: issue.number.to_string().into(),
        label:  issue.labels.join(LABEL_SEPARATOR,).into(),
        author: issue.author.as_str().into(),
        repo:   repo.to_string().into(),
    }
}

#[cfg(test)]
mod tests
{
    use super::*;
    use crate::testing::issue;

    #[test]
    fn projects_issue_fields()
    {
        let repo = RepoRef::new("acme", "widgets",);
        let labels = project(&[issue(&repo, 42, &["bug", "p1",], "alice",)],);

        assert_eq!(labels, vec![IssueLabels {
            number: "42".into(),
            label:  "bug,p1".into(),
            author: "alice".into(),
            repo:   "acme/widgets".into(),
        }]);
    }

    #[test]
    fn keeps_label_order_and_duplicates()
    {
        let repo = RepoRef::new("acme", "widgets",);
        let labels = project(&[issue(&repo, 1, &["p1", "bug", "p1",], "bob",)],);
        assert_eq!(labels[0].label, "p1,bug,p1");
    }

    #[test]
    fn unlabeled_issue_has_empty_label()
    {
        let repo = RepoRef::new("acme", "widgets",);
        let labels = project(&[issue(&repo, 5, &[], "carol",)],);
        assert_eq!(labels[0].label, "");
    }

    #[test]
    fn repository_comes_from_issue_url()
    {
        let configured = RepoRef::new("old-owner", "widgets",);
        let mut record = issue(&configured, 9, &[], "dave",);
        record.source_url = "https://api.github.com/repos/new-owner/widgets/issues/9".to_owned();

        assert_eq!(project(&[record],)[0].repo, "new-owner/widgets");
    }

    #[test]
    fn falls_back_to_configured_repository_for_unexpected_url()
    {
        let configured = RepoRef::new("acme", "widgets",);
        let mut record = issue(&configured, 9, &[], "dave",);
        record.source_url = "https://example.com/9".to_owned();

        assert_eq!(project(&[record],)[0].repo, "acme/widgets");
    }

    #[test]
    fn preserves_issue_order()
    {
        let repo = RepoRef::new("acme", "widgets",);
        let issues = vec![issue(&repo, 30, &[], "a",), issue(&repo, 2, &[], "b",)];
        let numbers: Vec<_,> = project(&issues,).into_iter().map(|labels| labels.number,).collect();
        assert_eq!(numbers, vec!["30", "2"]);
    }

    #[test]
    fn label_value_keeps_raw_text()
    {
        let value = LabelValue::from("say \"hi\"",);
        assert_eq!(value.as_str(), "say \"hi\"");
        assert_eq!(value.to_string(), "say \"hi\"");
    }
}
