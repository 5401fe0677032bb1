use serde::{Deserialize, Serialize};

/// Label attached to an issue or pull request, or defined in a repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelInfo {
    pub name: String,
    pub color: Option<String>,
    pub description: Option<String>,
}

/// Milestone an issue or pull request belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MilestoneInfo {
    pub number: u64,
    pub title: String,
    pub description: Option<String>,
    pub state: Option<String>,
    pub due_on: Option<String>,
}
