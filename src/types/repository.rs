//! Repository search records

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::SortDirection;

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct SearchRepositoryOptions {
    #[schemars(
        description = "GitHub repository search query. Examples: 'tokio language:rust', 'user:rust-lang stars:>1000'"
    )]
    pub query: String,
    #[serde(default)]
    #[schemars(
        description = "Sort field, default best match. One of: stars, forks, help-wanted-issues, updated"
    )]
    pub sort: Option<String>,
    #[serde(default)]
    #[schemars(description = "Sort order, default desc. One of: asc, desc")]
    pub order: Option<SortDirection>,
    #[serde(default)]
    #[schemars(description = "Results per page, default 10")]
    pub result_per_page: Option<u32>,
    #[serde(default)]
    #[schemars(description = "Page number starting from 1, default 1")]
    pub page: Option<u32>,
    #[serde(default)]
    #[schemars(
        description = "Maximum number of characters kept from each repository description, default 1024"
    )]
    pub description_truncate_size: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepositorySearchResult {
    pub total_repo_num: u64,
    pub next_page: u32,
    pub last_page: u32,
    pub repositories: Vec<RepositoryInfo>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepositoryInfo {
    /// Login of the owning user or organization
    pub owner: Option<String>,
    pub name: String,
    /// Login of the organization, when the repository belongs to one
    pub organization: Option<String>,
    pub full_name: Option<String>,
    pub default_branch: Option<String>,
    pub description: Option<String>,
    pub stargazers_count: u64,
    pub forks_count: u64,
    pub language: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub archived: bool,
}
