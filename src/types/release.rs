//! Release records

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct ReleaseListOptions {
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
    #[serde(default)]
    #[schemars(
        description = "Maximum number of characters kept from each release description, default 1024"
    )]
    pub description_truncate_size: Option<usize>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct GetReleaseOptions {
    #[schemars(description = "Owner of the repository")]
    pub owner: String,
    #[schemars(description = "Name of the repository")]
    pub repository: String,
    #[serde(default)]
    #[schemars(description = "Tag name of the release. The latest release when omitted")]
    pub tag_name: Option<String>,
    #[serde(default)]
    #[schemars(description = "First description line to return (1-based), default 1")]
    pub start_line: Option<u32>,
    #[serde(default)]
    #[schemars(description = "Last description line to return, default the last line")]
    pub end_line: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReleaseListResult {
    pub next_page: u32,
    pub last_page: u32,
    pub releases: Vec<ReleaseInfo>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReleaseInfo {
    pub name: Option<String>,
    pub tag: String,
    pub author: Option<String>,
    pub is_draft: bool,
    pub is_prerelease: bool,
    pub description: Option<String>,
    pub created_at: Option<String>,
    pub published_at: Option<String>,
    pub assets: Vec<AssetInfo>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetInfo {
    pub id: u64,
    /// Browser download URL
    pub url: String,
    pub name: String,
    pub label: Option<String>,
    pub size: u64,
}

/// A single release whose description is cut to a line range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReleaseDetailResult {
    pub name: Option<String>,
    pub tag: String,
    pub author: Option<String>,
    pub is_draft: bool,
    pub is_prerelease: bool,
    pub description: String,
    pub start_line: u32,
    pub end_line: u32,
    pub total_lines: u32,
    pub created_at: Option<String>,
    pub published_at: Option<String>,
    pub html_url: Option<String>,
    pub assets: Vec<AssetInfo>,
}
