//! Readme, directory and file content records

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct ReadmeOptions {
    #[schemars(description = "Owner of the repository")]
    pub owner: String,
    #[schemars(description = "Name of the repository")]
    pub repository: String,
    #[serde(default, rename = "ref")]
    #[schemars(
        description = "Commit, branch or tag name. The repository's default branch when omitted"
    )]
    pub git_ref: Option<String>,
    #[serde(default)]
    #[schemars(description = "First line to return (1-based), default 1")]
    pub start_line: Option<u32>,
    #[serde(default)]
    #[schemars(description = "Last line to return, default the last line")]
    pub end_line: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadmeResult {
    pub content: String,
    pub start_line: u32,
    pub end_line: u32,
    pub total_lines: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct DirectoryListOptions {
    #[schemars(description = "Owner of the repository")]
    pub owner: String,
    #[schemars(description = "Name of the repository")]
    pub repository: String,
    #[serde(default)]
    #[schemars(description = "Directory path to list. The repository root when omitted")]
    pub path: Option<String>,
    #[serde(default, rename = "ref")]
    #[schemars(
        description = "Commit, branch or tag name. The repository's default branch when omitted"
    )]
    pub git_ref: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryListResult {
    pub infos: Vec<DirectoryOrFileInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryOrFileInfo {
    pub name: String,
    pub path: String,
    pub size: u64,
    /// `file`, `dir`, `symlink` or `submodule`
    #[serde(rename = "type")]
    pub entry_type: String,
    pub encoding: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct ReadFileOptions {
    #[schemars(description = "Owner of the repository")]
    pub owner: String,
    #[schemars(description = "Name of the repository")]
    pub repository: String,
    #[schemars(description = "Path of the file to read")]
    pub path: String,
    #[serde(default, rename = "ref")]
    #[schemars(
        description = "Commit, branch or tag name. The repository's default branch when omitted"
    )]
    pub git_ref: Option<String>,
    #[serde(default)]
    #[schemars(description = "First line to return (1-based), default 1")]
    pub start_line: Option<u32>,
    #[serde(default)]
    #[schemars(description = "Last line to return, default the last line")]
    pub end_line: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadFileResult {
    pub content: String,
    pub start_line: u32,
    pub end_line: u32,
    pub total_lines: u32,
    /// Transfer encoding reported by GitHub, usually `base64`
    pub encoding: Option<String>,
}
