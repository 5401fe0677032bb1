//! Options and result records for every tool
//!
//! Options records are what a tool caller sends (deserialized from the tool
//! arguments, with a JSON schema for the host). Result records are what the
//! tool sends back, serialized to JSON text. Result records only hold scalars,
//! flat lists and small sub-records; they are built fresh per call.

use octocrab::Page;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::Display;

use crate::github::QueryParams;

pub mod code;
pub mod commit;
pub mod content;
pub mod git_ref;
pub mod issue;
pub mod label;
pub mod pull_request;
pub mod release;
pub mod repository;

pub use code::*;
pub use commit::*;
pub use content::*;
pub use git_ref::*;
pub use issue::*;
pub use label::*;
pub use pull_request::*;
pub use release::*;
pub use repository::*;

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_RESULT_PER_PAGE: u32 = 10;
pub const DEFAULT_DESCRIPTION_TRUNCATE_SIZE: usize = 1024;

/// Page size requested by the pattern search tools, which filter one broad page locally
pub const PATTERN_SEARCH_PAGE_SIZE: u32 = 1000;

/// Normalized pagination for an outbound list request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub per_page: u32,
}

impl PageRequest {
    /// Applies the defaults: a missing or zero page is 1, a missing or zero size is 10
    pub fn from_options(page: Option<u32>, result_per_page: Option<u32>) -> Self {
        Self {
            page: page.filter(|p| *p > 0).unwrap_or(DEFAULT_PAGE),
            per_page: result_per_page
                .filter(|p| *p > 0)
                .unwrap_or(DEFAULT_RESULT_PER_PAGE),
        }
    }

    /// The first page with an explicit size
    pub fn first_page(per_page: u32) -> Self {
        Self {
            page: DEFAULT_PAGE,
            per_page,
        }
    }

    pub fn to_query(self) -> QueryParams {
        QueryParams::new()
            .push("per_page", self.per_page)
            .push("page", self.page)
    }
}

/// Missing or zero truncation sizes fall back to 1024 characters
pub fn description_truncate_size(size: Option<usize>) -> usize {
    size.filter(|s| *s > 0)
        .unwrap_or(DEFAULT_DESCRIPTION_TRUNCATE_SIZE)
}

/// Continuation state of a list operation; 0 means there is no such page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PageEnvelope {
    pub next_page: u32,
    pub last_page: u32,
}

impl PageEnvelope {
    /// Reads the `next` and `last` relations octocrab parsed from the `Link` header
    pub fn from_page<T>(page: &Page<T>) -> Self {
        let next = page.next.as_ref().map(|uri| uri.to_string());
        let last = page.last.as_ref().map(|uri| uri.to_string());
        Self::from_links(next.as_deref(), last.as_deref())
    }

    pub fn from_links(next: Option<&str>, last: Option<&str>) -> Self {
        Self {
            next_page: next.map(page_number_of_link).unwrap_or(0),
            last_page: last.map(page_number_of_link).unwrap_or(0),
        }
    }
}

/// Extracts the `page` query parameter of a pagination link, 0 when absent
fn page_number_of_link(link: &str) -> u32 {
    let Some((_, query)) = link.split_once('?') else {
        return 0;
    };

    url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == "page")
        .and_then(|(_, value)| value.parse::<u32>().ok())
        .unwrap_or(0)
}

/// State filter for issue and pull request listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum StateFilter {
    Open,
    Closed,
    All,
}

/// Sort direction accepted by list and search endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}
