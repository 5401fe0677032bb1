//! Code search records

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::SortDirection;

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct SearchCodeOptions {
    #[schemars(
        description = "GitHub code search query. Examples: 'addClass in:file language:js repo:jquery/jquery', 'Octocrab user:XAMPPRocky'"
    )]
    pub query: String,
    #[serde(default)]
    #[schemars(description = "Sort field, default best match. Only 'indexed' is supported")]
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
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchCodeResult {
    pub total_count: u64,
    pub next_page: u32,
    pub last_page: u32,
    pub code_files: Vec<CodeFileInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeFileInfo {
    pub name: String,
    pub path: String,
    pub repository: String,
    pub owner: Option<String>,
    pub html_url: Option<String>,
    pub text_matches: Vec<TextMatch>,
}

/// A highlighted fragment of a search hit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextMatch {
    pub fragment: String,
    pub matches: Vec<MatchDetail>,
    pub object_type: Option<String>,
    pub object_url: Option<String>,
    pub property: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchDetail {
    /// Byte offsets of the match within the fragment
    pub indices: Vec<u64>,
    pub text: String,
}
