use serde::Deserialize;

use super::{RawCommitRef, RawGitActor};
use crate::formatter::rfc3339_datetime_opt;
use crate::types::{CommitFileInfo, CommitInfo, CompareCommitsResult};

/// Commit as returned by the commits and compare endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct RawCommit {
    pub sha: String,
    #[serde(default)]
    pub html_url: Option<String>,
    pub commit: RawGitCommit,
    #[serde(default)]
    pub parents: Vec<RawCommitRef>,
    /// Only present on the single commit endpoint
    #[serde(default)]
    pub files: Vec<RawCommitFile>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawGitCommit {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub author: Option<RawGitActor>,
    #[serde(default)]
    pub committer: Option<RawGitActor>,
}

impl From<RawCommit> for CommitInfo {
    fn from(commit: RawCommit) -> Self {
        let RawGitCommit {
            message,
            author,
            committer,
        } = commit.commit;
        let author = author.unwrap_or_else(empty_actor);
        let committer = committer.unwrap_or_else(empty_actor);

        Self {
            sha: commit.sha,
            message,
            author: author.name,
            author_email: author.email,
            committer: committer.name,
            committer_email: committer.email,
            date: rfc3339_datetime_opt(author.date.as_ref()),
            url: commit.html_url,
            parent_commit_hash: commit.parents.into_iter().map(|parent| parent.sha).collect(),
        }
    }
}

fn empty_actor() -> RawGitActor {
    RawGitActor {
        name: None,
        email: None,
        date: None,
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawCommitFile {
    #[serde(default)]
    pub sha: Option<String>,
    pub filename: String,
    #[serde(default)]
    pub additions: u64,
    #[serde(default)]
    pub deletions: u64,
    #[serde(default)]
    pub changes: u64,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub patch: Option<String>,
    #[serde(default)]
    pub blob_url: Option<String>,
    #[serde(default)]
    pub raw_url: Option<String>,
    #[serde(default)]
    pub contents_url: Option<String>,
    #[serde(default)]
    pub previous_filename: Option<String>,
}

impl From<RawCommitFile> for CommitFileInfo {
    fn from(file: RawCommitFile) -> Self {
        Self {
            sha: file.sha,
            filename: file.filename,
            additions: file.additions,
            deletions: file.deletions,
            changes: file.changes,
            status: file.status,
            patch: file.patch,
            blob_url: file.blob_url,
            raw_url: file.raw_url,
            contents_url: file.contents_url,
            previous_filename: file.previous_filename,
        }
    }
}

/// Response of `GET /repos/{owner}/{repo}/compare/{base}...{head}`
#[derive(Debug, Clone, Deserialize)]
pub struct RawComparison {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub ahead_by: u64,
    #[serde(default)]
    pub behind_by: u64,
    #[serde(default)]
    pub total_commits: u64,
    #[serde(default)]
    pub html_url: Option<String>,
    #[serde(default)]
    pub permalink_url: Option<String>,
    #[serde(default)]
    pub diff_url: Option<String>,
    #[serde(default)]
    pub patch_url: Option<String>,
    #[serde(default)]
    pub commits: Vec<RawCommit>,
    #[serde(default)]
    pub files: Vec<RawCommitFile>,
}

impl From<RawComparison> for CompareCommitsResult {
    fn from(comparison: RawComparison) -> Self {
        Self {
            total_commits: comparison.total_commits,
            ahead_by: comparison.ahead_by,
            behind_by: comparison.behind_by,
            commits: comparison.commits.into_iter().map(CommitInfo::from).collect(),
            files: comparison
                .files
                .into_iter()
                .map(CommitFileInfo::from)
                .collect(),
            html_url: comparison.html_url,
            permalink_url: comparison.permalink_url,
            diff_url: comparison.diff_url,
            patch_url: comparison.patch_url,
            status: comparison.status,
        }
    }
}
