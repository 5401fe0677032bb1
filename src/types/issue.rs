//! Issue, issue comment and label listing records

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{LabelInfo, MilestoneInfo, SortDirection, StateFilter};

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct ListIssuesOptions {
    #[schemars(description = "Owner of the repository")]
    pub owner: String,
    #[schemars(description = "Name of the repository")]
    pub repository: String,
    #[serde(default)]
    #[schemars(description = "Issue state: open, closed or all. Default open")]
    pub state: Option<StateFilter>,
    #[serde(default)]
    #[schemars(description = "Only issues carrying all of these label names")]
    pub labels: Vec<String>,
    #[serde(default)]
    #[schemars(description = "Assignee login, or 'none' / '*'")]
    pub assignee: Option<String>,
    #[serde(default)]
    #[schemars(description = "Login of the issue creator")]
    pub creator: Option<String>,
    #[serde(default)]
    #[schemars(description = "Login mentioned in the issue")]
    pub mentioned: Option<String>,
    #[serde(default)]
    #[schemars(description = "Milestone number, or 'none' / '*'")]
    pub milestone: Option<String>,
    #[serde(default)]
    #[schemars(description = "Sort field: created, updated or comments. Default created")]
    pub sort: Option<String>,
    #[serde(default)]
    #[schemars(description = "Sort direction: asc or desc. Default desc")]
    pub direction: Option<SortDirection>,
    #[serde(default)]
    #[schemars(
        description = "Only issues updated at or after this RFC 3339 timestamp, e.g. '2024-01-01T00:00:00Z'"
    )]
    pub since: Option<String>,
    #[serde(default)]
    #[schemars(description = "Results per page, default 10")]
    pub result_per_page: Option<u32>,
    #[serde(default)]
    #[schemars(description = "Page number starting from 1, default 1")]
    pub page: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct SearchIssuesOptions {
    #[schemars(
        description = "GitHub issue search query. Examples: 'repo:tokio-rs/tokio is:open label:bug', 'memory leak in:title'"
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

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct GetIssueOptions {
    #[schemars(description = "Owner of the repository")]
    pub owner: String,
    #[schemars(description = "Name of the repository")]
    pub repository: String,
    #[schemars(description = "Issue number")]
    pub issue_number: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct ListIssueCommentsOptions {
    #[schemars(description = "Owner of the repository")]
    pub owner: String,
    #[schemars(description = "Name of the repository")]
    pub repository: String,
    #[schemars(description = "Issue number")]
    pub issue_number: u64,
    #[serde(default)]
    #[schemars(description = "Only comments updated at or after this RFC 3339 timestamp")]
    pub since: Option<String>,
    #[serde(default)]
    #[schemars(description = "Results per page, default 10")]
    pub result_per_page: Option<u32>,
    #[serde(default)]
    #[schemars(description = "Page number starting from 1, default 1")]
    pub page: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct ListIssueLabelsOptions {
    #[schemars(description = "Owner of the repository")]
    pub owner: String,
    #[schemars(description = "Name of the repository")]
    pub repository: String,
    #[serde(default)]
    #[schemars(description = "Results per page, default 10")]
    pub result_per_page: Option<u32>,
    #[serde(default)]
    #[schemars(description = "Page number starting from 1, default 1")]
    pub page: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuesListResult {
    pub total_count: u64,
    pub next_page: u32,
    pub last_page: u32,
    pub issues: Vec<IssueInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueInfo {
    pub number: u64,
    pub title: String,
    pub state: String,
    pub body: Option<String>,
    pub labels: Vec<LabelInfo>,
    pub assignee: Option<String>,
    pub assignees: Vec<String>,
    pub milestone: Option<MilestoneInfo>,
    pub creator: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub closed_at: Option<String>,
    pub url: String,
    pub html_url: Option<String>,
    pub comments: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueCommentsResult {
    pub next_page: u32,
    pub last_page: u32,
    pub comments: Vec<IssueCommentInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueCommentInfo {
    pub id: u64,
    pub body: Option<String>,
    pub user: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub url: String,
    pub html_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelListResult {
    pub next_page: u32,
    pub last_page: u32,
    pub labels: Vec<LabelInfo>,
}
