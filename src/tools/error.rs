//! Error type of the tool functions
//!
//! Every tool function returns `Result<_, ToolError>`. The tool shell turns
//! an error into a tool-level error result carrying its `Display` text.

use std::fmt;

use crate::github::error::{UpstreamErrorKind, upstream_error_detail};

#[derive(Debug)]
pub enum ToolError {
    /// The GitHub API request failed; the octocrab error is kept untouched
    Upstream(octocrab::Error),

    /// A name pattern is not a valid regular expression
    InvalidPattern {
        pattern: String,
        source: regex::Error,
    },

    /// The path exists but is not a regular file
    NotAFile(String),

    /// Inline file content could not be decoded
    ContentDecode(String),

    /// The result record could not be serialized
    Serialization(String),
}

impl ToolError {
    /// Classification of an upstream failure, `None` for local errors
    pub fn upstream_kind(&self) -> Option<UpstreamErrorKind> {
        match self {
            ToolError::Upstream(error) => Some(UpstreamErrorKind::classify(error)),
            _ => None,
        }
    }
}

impl fmt::Display for ToolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToolError::Upstream(error) => write!(
                f,
                "GitHub API error ({}): {}",
                UpstreamErrorKind::classify(error),
                upstream_error_detail(error)
            ),
            ToolError::InvalidPattern { pattern, source } => {
                write!(f, "Invalid pattern '{}': {}", pattern, source)
            }
            ToolError::NotAFile(path) => write!(f, "Path is not a file: {}", path),
            ToolError::ContentDecode(details) => {
                write!(f, "Failed to decode content: {}", details)
            }
            ToolError::Serialization(details) => write!(f, "Serialization error: {}", details),
        }
    }
}

impl std::error::Error for ToolError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ToolError::Upstream(error) => Some(error),
            ToolError::InvalidPattern { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<octocrab::Error> for ToolError {
    fn from(error: octocrab::Error) -> Self {
        ToolError::Upstream(error)
    }
}

impl From<serde_json::Error> for ToolError {
    fn from(error: serde_json::Error) -> Self {
        ToolError::Serialization(error.to_string())
    }
}

/// Convert from ToolError to a plain String for the MCP tool function result
impl From<ToolError> for String {
    fn from(error: ToolError) -> Self {
        error.to_string()
    }
}
