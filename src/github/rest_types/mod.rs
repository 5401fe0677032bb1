//! GitHub REST response shapes
//!
//! Each type deserializes only the fields the tools report, and maps into
//! the matching result record through an explicit conversion. Fields GitHub
//! may omit or send as `null` are `Option`s or `#[serde(default)]`.

pub mod code;
pub mod commit;
pub mod content;
pub mod git_ref;
pub mod issue;
pub mod pull_request;
pub mod release;
pub mod repository;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

use crate::formatter::rfc3339_datetime_opt;
use crate::types::{LabelInfo, MilestoneInfo};

pub use code::*;
pub use commit::*;
pub use content::*;
pub use git_ref::*;
pub use issue::*;
pub use pull_request::*;
pub use release::*;
pub use repository::*;

#[derive(Debug, Clone, Deserialize)]
pub struct RawUser {
    pub login: String,
    #[serde(rename = "type", default)]
    pub account_type: Option<String>,
}

/// Reduces an optional user object to its login
pub fn login_of(user: Option<RawUser>) -> Option<String> {
    user.map(|user| user.login)
}

pub fn logins_of(users: Vec<RawUser>) -> Vec<String> {
    users.into_iter().map(|user| user.login).collect()
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawLabel {
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl From<RawLabel> for LabelInfo {
    fn from(label: RawLabel) -> Self {
        Self {
            name: label.name,
            color: label.color,
            description: label.description,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawMilestone {
    pub number: u64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub due_on: Option<DateTime<Utc>>,
}

impl From<RawMilestone> for MilestoneInfo {
    fn from(milestone: RawMilestone) -> Self {
        Self {
            number: milestone.number,
            title: milestone.title,
            description: milestone.description,
            state: milestone.state,
            due_on: rfc3339_datetime_opt(milestone.due_on.as_ref()),
        }
    }
}

/// `{ "sha": ... }` pointer to a commit
#[derive(Debug, Clone, Deserialize)]
pub struct RawCommitRef {
    pub sha: String,
}

/// Author, committer or tagger of a git object
#[derive(Debug, Clone, Deserialize)]
pub struct RawGitActor {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
}

/// Distinguishes a key that is absent (`None`) from one that is `null` (`Some(None)`)
///
/// Use together with `#[serde(default)]`.
pub(crate) fn deserialize_present<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}
