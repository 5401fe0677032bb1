use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::{RawLabel, RawMilestone, RawUser, deserialize_present, login_of, logins_of};
use crate::formatter::rfc3339_datetime_opt;
use crate::types::{IssueCommentInfo, IssueInfo, LabelInfo, MilestoneInfo, PullRequestInfo};

const CLOSED_STATE: &str = "closed";

/// Issue as returned by the issues and issue search endpoints
///
/// Both endpoints also return pull requests; those carry a `pull_request` object.
#[derive(Debug, Clone, Deserialize)]
pub struct RawIssue {
    pub number: u64,
    pub title: String,
    pub state: String,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub labels: Vec<RawLabel>,
    #[serde(default)]
    pub assignee: Option<RawUser>,
    #[serde(default)]
    pub assignees: Vec<RawUser>,
    #[serde(default)]
    pub milestone: Option<RawMilestone>,
    #[serde(default)]
    pub user: Option<RawUser>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub closed_at: Option<DateTime<Utc>>,
    pub url: String,
    #[serde(default)]
    pub html_url: Option<String>,
    #[serde(default)]
    pub comments: u64,
    #[serde(default)]
    pub draft: Option<bool>,
    #[serde(default)]
    pub pull_request: Option<RawPullRequestMarker>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawPullRequestMarker {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub html_url: Option<String>,
    /// `None` when the key is missing, `Some(None)` when the pull request is unmerged
    #[serde(default, deserialize_with = "deserialize_present")]
    pub merged_at: Option<Option<DateTime<Utc>>>,
}

impl RawIssue {
    pub fn is_pull_request(&self) -> bool {
        self.pull_request.is_some()
    }

    /// Maps a search hit that is a pull request into a pull request record
    ///
    /// When the response does not say whether the pull request was merged, a
    /// closed pull request whose title mentions "merge" is reported as merged
    /// and the record is flagged with `merged_is_estimated`.
    pub fn into_pull_request_info(self) -> PullRequestInfo {
        let marker_merged_at = self.pull_request.and_then(|marker| marker.merged_at);
        let (merged, merged_at, merged_is_estimated) = match marker_merged_at {
            Some(Some(merged_at)) => (true, Some(merged_at), false),
            Some(None) => (false, None, false),
            None => (
                self.state == CLOSED_STATE && self.title.to_lowercase().contains("merge"),
                None,
                true,
            ),
        };

        PullRequestInfo {
            number: self.number,
            title: self.title,
            state: self.state,
            body: self.body,
            labels: self.labels.into_iter().map(LabelInfo::from).collect(),
            assignee: login_of(self.assignee),
            assignees: logins_of(self.assignees),
            requested_reviewers: Vec::new(),
            milestone: self.milestone.map(MilestoneInfo::from),
            creator: login_of(self.user),
            created_at: rfc3339_datetime_opt(self.created_at.as_ref()),
            updated_at: rfc3339_datetime_opt(self.updated_at.as_ref()),
            closed_at: rfc3339_datetime_opt(self.closed_at.as_ref()),
            merged_at: rfc3339_datetime_opt(merged_at.as_ref()),
            url: self.url,
            html_url: self.html_url,
            comments: Some(self.comments),
            additions: None,
            deletions: None,
            changed_files: None,
            mergeable: None,
            mergeable_state: None,
            merged,
            merged_is_estimated,
            base_ref: None,
            head_ref: None,
            draft: self.draft.unwrap_or(false),
            review_comments: None,
            commits: None,
        }
    }
}

impl From<RawIssue> for IssueInfo {
    fn from(issue: RawIssue) -> Self {
        Self {
            number: issue.number,
            title: issue.title,
            state: issue.state,
            body: issue.body,
            labels: issue.labels.into_iter().map(LabelInfo::from).collect(),
            assignee: login_of(issue.assignee),
            assignees: logins_of(issue.assignees),
            milestone: issue.milestone.map(MilestoneInfo::from),
            creator: login_of(issue.user),
            created_at: rfc3339_datetime_opt(issue.created_at.as_ref()),
            updated_at: rfc3339_datetime_opt(issue.updated_at.as_ref()),
            closed_at: rfc3339_datetime_opt(issue.closed_at.as_ref()),
            url: issue.url,
            html_url: issue.html_url,
            comments: issue.comments,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawComment {
    pub id: u64,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub user: Option<RawUser>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    pub url: String,
    #[serde(default)]
    pub html_url: Option<String>,
}

impl From<RawComment> for IssueCommentInfo {
    fn from(comment: RawComment) -> Self {
        Self {
            id: comment.id,
            body: comment.body,
            user: login_of(comment.user),
            created_at: rfc3339_datetime_opt(comment.created_at.as_ref()),
            updated_at: rfc3339_datetime_opt(comment.updated_at.as_ref()),
            url: comment.url,
            html_url: comment.html_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue_json(state: &str, title: &str, pull_request: Option<serde_json::Value>) -> serde_json::Value {
        let mut issue = serde_json::json!({
            "number": 1347,
            "title": title,
            "state": state,
            "body": "I'm having a problem with this.",
            "labels": [{ "name": "bug", "color": "f29513", "description": "Something isn't working" }],
            "assignee": { "login": "octocat" },
            "assignees": [{ "login": "octocat" }, { "login": "hubot" }],
            "milestone": { "number": 1, "title": "v1.0", "state": "open", "due_on": null },
            "user": { "login": "monalisa" },
            "created_at": "2011-04-22T13:33:48Z",
            "updated_at": "2011-04-22T13:33:48Z",
            "closed_at": null,
            "url": "https://api.github.com/repos/octocat/Hello-World/issues/1347",
            "html_url": "https://github.com/octocat/Hello-World/issues/1347",
            "comments": 3
        });
        if let Some(pull_request) = pull_request {
            issue["pull_request"] = pull_request;
        }
        issue
    }

    #[test]
    fn test_issue_mapping() {
        let raw: RawIssue =
            serde_json::from_value(issue_json("open", "Found a bug", None)).unwrap();
        assert!(!raw.is_pull_request());

        let issue = IssueInfo::from(raw);
        assert_eq!(issue.number, 1347);
        assert_eq!(issue.labels[0].name, "bug");
        assert_eq!(issue.assignee.as_deref(), Some("octocat"));
        assert_eq!(issue.assignees, vec!["octocat".to_string(), "hubot".to_string()]);
        assert_eq!(issue.creator.as_deref(), Some("monalisa"));
        assert_eq!(issue.milestone.as_ref().map(|m| m.number), Some(1));
        assert_eq!(issue.created_at.as_deref(), Some("2011-04-22T13:33:48Z"));
        assert_eq!(issue.closed_at, None);
        assert_eq!(issue.comments, 3);
    }

    #[test]
    fn test_merged_read_from_merged_at() {
        let raw: RawIssue = serde_json::from_value(issue_json(
            "closed",
            "Add feature",
            Some(serde_json::json!({
                "url": "https://api.github.com/repos/o/r/pulls/1347",
                "merged_at": "2011-04-23T10:00:00Z"
            })),
        ))
        .unwrap();
        assert!(raw.is_pull_request());

        let pull_request = raw.into_pull_request_info();
        assert!(pull_request.merged);
        assert!(!pull_request.merged_is_estimated);
        assert_eq!(pull_request.merged_at.as_deref(), Some("2011-04-23T10:00:00Z"));
    }

    #[test]
    fn test_unmerged_when_merged_at_is_null() {
        let raw: RawIssue = serde_json::from_value(issue_json(
            "closed",
            "Merge upstream changes",
            Some(serde_json::json!({ "url": "u", "merged_at": null })),
        ))
        .unwrap();

        let pull_request = raw.into_pull_request_info();
        assert!(!pull_request.merged);
        assert!(!pull_request.merged_is_estimated);
    }

    #[test]
    fn test_merged_estimated_without_merged_at() {
        let closed_merge: RawIssue = serde_json::from_value(issue_json(
            "closed",
            "Merge branch 'dev'",
            Some(serde_json::json!({ "url": "u" })),
        ))
        .unwrap();
        let pull_request = closed_merge.into_pull_request_info();
        assert!(pull_request.merged);
        assert!(pull_request.merged_is_estimated);

        let closed_other: RawIssue = serde_json::from_value(issue_json(
            "closed",
            "Fix typo",
            Some(serde_json::json!({ "url": "u" })),
        ))
        .unwrap();
        assert!(!closed_other.into_pull_request_info().merged);

        let open_merge: RawIssue = serde_json::from_value(issue_json(
            "open",
            "Merge branch 'dev'",
            Some(serde_json::json!({ "url": "u" })),
        ))
        .unwrap();
        assert!(!open_merge.into_pull_request_info().merged);
    }

    #[test]
    fn test_comment_mapping() {
        let raw: RawComment = serde_json::from_value(serde_json::json!({
            "id": 1,
            "body": "Me too",
            "user": { "login": "octocat" },
            "created_at": "2011-04-14T16:00:49Z",
            "updated_at": "2011-04-14T16:00:49Z",
            "url": "https://api.github.com/repos/octocat/Hello-World/issues/comments/1",
            "html_url": "https://github.com/octocat/Hello-World/issues/1347#issuecomment-1"
        }))
        .unwrap();

        let comment = IssueCommentInfo::from(raw);
        assert_eq!(comment.id, 1);
        assert_eq!(comment.user.as_deref(), Some("octocat"));
        assert_eq!(comment.body.as_deref(), Some("Me too"));
    }
}
