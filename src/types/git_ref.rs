//! Tag and branch records

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct TagListOptions {
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

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct GetTagOptions {
    #[schemars(description = "Owner of the repository")]
    pub owner: String,
    #[schemars(description = "Name of the repository")]
    pub repository: String,
    #[schemars(description = "Name of the tag, e.g. 'v1.2.0'")]
    pub tag_name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct FindTagsOptions {
    #[schemars(description = "Owner of the repository")]
    pub owner: String,
    #[schemars(description = "Name of the repository")]
    pub repository: String,
    #[schemars(description = "Regular expression matched against tag names, e.g. '^v1\\.'")]
    pub pattern: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagListResult {
    pub next_page: u32,
    pub last_page: u32,
    pub tags: Vec<TagInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagInfo {
    pub name: String,
    pub commit_sha: Option<String>,
    pub zipball_url: Option<String>,
    pub tarball_url: Option<String>,
}

/// A tag resolved through the git references API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagDetail {
    pub name: String,
    /// Commit the tag finally points at (annotated tags are dereferenced)
    pub commit_sha: String,
    /// Whether the reference pointed at an annotated tag object
    pub annotated: bool,
    pub message: Option<String>,
    pub tagger: Option<String>,
    pub tagged_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FindTagsResult {
    pub tags: Vec<TagInfo>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct BranchListOptions {
    #[schemars(description = "Owner of the repository")]
    pub owner: String,
    #[schemars(description = "Name of the repository")]
    pub repository: String,
    #[serde(default)]
    #[schemars(description = "Only protected (true) or only unprotected (false) branches")]
    pub protected: Option<bool>,
    #[serde(default)]
    #[schemars(description = "Results per page, default 10")]
    pub result_per_page: Option<u32>,
    #[serde(default)]
    #[schemars(description = "Page number starting from 1, default 1")]
    pub page: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct GetBranchOptions {
    #[schemars(description = "Owner of the repository")]
    pub owner: String,
    #[schemars(description = "Name of the repository")]
    pub repository: String,
    #[schemars(description = "Name of the branch")]
    pub branch_name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct FindBranchesOptions {
    #[schemars(description = "Owner of the repository")]
    pub owner: String,
    #[schemars(description = "Name of the repository")]
    pub repository: String,
    #[schemars(
        description = "Regular expression matched against branch names, e.g. '^release/'"
    )]
    pub pattern: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchListResult {
    pub next_page: u32,
    pub last_page: u32,
    pub branches: Vec<BranchInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchInfo {
    pub name: String,
    pub commit_sha: Option<String>,
    pub protected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FindBranchesResult {
    pub branches: Vec<BranchInfo>,
}
