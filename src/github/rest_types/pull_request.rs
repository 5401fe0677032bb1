use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::{RawLabel, RawMilestone, RawUser, login_of, logins_of};
use crate::formatter::rfc3339_datetime_opt;
use crate::types::{LabelInfo, MilestoneInfo, PullRequestInfo};

/// Pull request as returned by the pulls endpoints
///
/// The listing omits line counts, mergeability and review counts; only the
/// single pull request endpoint fills them.
#[derive(Debug, Clone, Deserialize)]
pub struct RawPullRequest {
    pub number: u64,
    #[serde(default)]
    pub title: Option<String>,
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
    pub requested_reviewers: Vec<RawUser>,
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
    #[serde(default)]
    pub merged_at: Option<DateTime<Utc>>,
    pub url: String,
    #[serde(default)]
    pub html_url: Option<String>,
    #[serde(default)]
    pub comments: Option<u64>,
    #[serde(default)]
    pub review_comments: Option<u64>,
    #[serde(default)]
    pub commits: Option<u64>,
    #[serde(default)]
    pub additions: Option<u64>,
    #[serde(default)]
    pub deletions: Option<u64>,
    #[serde(default)]
    pub changed_files: Option<u64>,
    #[serde(default)]
    pub mergeable: Option<bool>,
    #[serde(default)]
    pub mergeable_state: Option<String>,
    #[serde(default)]
    pub merged: Option<bool>,
    #[serde(default)]
    pub draft: Option<bool>,
    #[serde(default)]
    pub base: Option<RawBranchRef>,
    #[serde(default)]
    pub head: Option<RawBranchRef>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawBranchRef {
    #[serde(rename = "ref")]
    pub git_ref: String,
}

impl From<RawPullRequest> for PullRequestInfo {
    fn from(pull_request: RawPullRequest) -> Self {
        // The listing has no `merged` flag; a merge timestamp implies it.
        let merged = pull_request
            .merged
            .unwrap_or(pull_request.merged_at.is_some());

        Self {
            number: pull_request.number,
            title: pull_request.title.unwrap_or_default(),
            state: pull_request.state,
            body: pull_request.body,
            labels: pull_request.labels.into_iter().map(LabelInfo::from).collect(),
            assignee: login_of(pull_request.assignee),
            assignees: logins_of(pull_request.assignees),
            requested_reviewers: logins_of(pull_request.requested_reviewers),
            milestone: pull_request.milestone.map(MilestoneInfo::from),
            creator: login_of(pull_request.user),
            created_at: rfc3339_datetime_opt(pull_request.created_at.as_ref()),
            updated_at: rfc3339_datetime_opt(pull_request.updated_at.as_ref()),
            closed_at: rfc3339_datetime_opt(pull_request.closed_at.as_ref()),
            merged_at: rfc3339_datetime_opt(pull_request.merged_at.as_ref()),
            url: pull_request.url,
            html_url: pull_request.html_url,
            comments: pull_request.comments,
            additions: pull_request.additions,
            deletions: pull_request.deletions,
            changed_files: pull_request.changed_files,
            mergeable: pull_request.mergeable,
            mergeable_state: pull_request.mergeable_state,
            merged,
            merged_is_estimated: false,
            base_ref: pull_request.base.map(|base| base.git_ref),
            head_ref: pull_request.head.map(|head| head.git_ref),
            draft: pull_request.draft.unwrap_or(false),
            review_comments: pull_request.review_comments,
            commits: pull_request.commits,
        }
    }
}
