//! Commit, commit file and comparison records

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct CommitListOptions {
    #[schemars(description = "Owner of the repository")]
    pub owner: String,
    #[schemars(description = "Name of the repository")]
    pub repository: String,
    #[serde(default)]
    #[schemars(
        description = "Branch name or commit SHA to start listing from. The default branch when omitted"
    )]
    pub sha: Option<String>,
    #[serde(default)]
    #[schemars(description = "Only commits touching this file path")]
    pub path: Option<String>,
    #[serde(default)]
    #[schemars(description = "Only commits by this GitHub login or email address")]
    pub author: Option<String>,
    #[serde(default)]
    #[schemars(description = "Results per page, default 10")]
    pub result_per_page: Option<u32>,
    #[serde(default)]
    #[schemars(description = "Page number starting from 1, default 1")]
    pub page: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct GetCommitOptions {
    #[schemars(description = "Owner of the repository")]
    pub owner: String,
    #[schemars(description = "Name of the repository")]
    pub repository: String,
    #[schemars(description = "SHA of the commit")]
    pub sha: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct CompareCommitsOptions {
    #[schemars(description = "Owner of the repository")]
    pub owner: String,
    #[schemars(description = "Name of the repository")]
    pub repository: String,
    #[schemars(description = "Base commit SHA or branch name")]
    pub base: String,
    #[schemars(description = "Head commit SHA or branch name")]
    pub head: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitListResult {
    pub next_page: u32,
    pub last_page: u32,
    pub commits: Vec<CommitInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitInfo {
    pub sha: String,
    pub message: String,
    pub author: Option<String>,
    pub author_email: Option<String>,
    pub committer: Option<String>,
    pub committer_email: Option<String>,
    /// Author date
    pub date: Option<String>,
    pub url: Option<String>,
    pub parent_commit_hash: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitFilesResult {
    pub files: Vec<CommitFileInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitFileInfo {
    pub sha: Option<String>,
    pub filename: String,
    pub additions: u64,
    pub deletions: u64,
    pub changes: u64,
    /// `added`, `removed`, `modified`, `renamed`, `copied`, `changed` or `unchanged`
    pub status: String,
    pub patch: Option<String>,
    pub blob_url: Option<String>,
    pub raw_url: Option<String>,
    pub contents_url: Option<String>,
    pub previous_filename: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompareCommitsResult {
    pub total_commits: u64,
    pub ahead_by: u64,
    pub behind_by: u64,
    pub commits: Vec<CommitInfo>,
    pub files: Vec<CommitFileInfo>,
    pub html_url: Option<String>,
    pub permalink_url: Option<String>,
    pub diff_url: Option<String>,
    pub patch_url: Option<String>,
    /// `diverged`, `ahead`, `behind` or `identical`
    pub status: String,
}
