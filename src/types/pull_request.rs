//! Pull request records

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{LabelInfo, MilestoneInfo, SortDirection, StateFilter};

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct ListPullRequestsOptions {
    #[schemars(description = "Owner of the repository")]
    pub owner: String,
    #[schemars(description = "Name of the repository")]
    pub repository: String,
    #[serde(default)]
    #[schemars(description = "Pull request state: open, closed or all. Default open")]
    pub state: Option<StateFilter>,
    #[serde(default)]
    #[schemars(description = "Head branch filter in 'user:ref-name' or 'organization:ref-name' form")]
    pub head: Option<String>,
    #[serde(default)]
    #[schemars(description = "Base branch name filter")]
    pub base: Option<String>,
    #[serde(default)]
    #[schemars(description = "Sort field: created, updated, popularity or long-running")]
    pub sort: Option<String>,
    #[serde(default)]
    #[schemars(description = "Sort direction: asc or desc")]
    pub direction: Option<SortDirection>,
    #[serde(default)]
    #[schemars(description = "Results per page, default 10")]
    pub result_per_page: Option<u32>,
    #[serde(default)]
    #[schemars(description = "Page number starting from 1, default 1")]
    pub page: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct GetPullRequestOptions {
    #[schemars(description = "Owner of the repository")]
    pub owner: String,
    #[schemars(description = "Name of the repository")]
    pub repository: String,
    #[schemars(description = "Pull request number")]
    pub number: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct SearchPullRequestsOptions {
    #[schemars(
        description = "GitHub search query; 'is:pr' is added automatically. Examples: 'repo:rust-lang/rust is:open author:octocat'"
    )]
    pub query: String,
    #[serde(default)]
    #[schemars(description = "Sort field: comments, reactions, created, updated, ...")]
    pub sort: Option<String>,
    #[serde(default)]
    #[schemars(description = "Sort order: asc or desc. Default desc")]
    pub order: Option<SortDirection>,
    #[serde(default)]
    #[schemars(description = "Results per page, default 10")]
    pub result_per_page: Option<u32>,
    #[serde(default)]
    #[schemars(description = "Page number starting from 1, default 1")]
    pub page: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestListResult {
    pub total_count: u64,
    pub next_page: u32,
    pub last_page: u32,
    pub pull_requests: Vec<PullRequestInfo>,
}

/// Pull request record
///
/// Records built from listing or search responses leave the fields those
/// endpoints do not return (line counts, mergeability, review counts) as `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestInfo {
    pub number: u64,
    pub title: String,
    pub state: String,
    pub body: Option<String>,
    pub labels: Vec<LabelInfo>,
    pub assignee: Option<String>,
    pub assignees: Vec<String>,
    pub requested_reviewers: Vec<String>,
    pub milestone: Option<MilestoneInfo>,
    pub creator: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub closed_at: Option<String>,
    pub merged_at: Option<String>,
    pub url: String,
    pub html_url: Option<String>,
    pub comments: Option<u64>,
    pub additions: Option<u64>,
    pub deletions: Option<u64>,
    pub changed_files: Option<u64>,
    pub mergeable: Option<bool>,
    pub mergeable_state: Option<String>,
    pub merged: bool,
    /// True when `merged` was guessed from state and title instead of read from GitHub
    pub merged_is_estimated: bool,
    pub base_ref: Option<String>,
    pub head_ref: Option<String>,
    pub draft: bool,
    pub review_comments: Option<u64>,
    pub commits: Option<u64>,
}
