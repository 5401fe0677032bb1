//! Tool function implementations organized by functionality
//!
//! Each function issues one GitHub request (two for an annotated tag), maps
//! the response into a result record and returns it. Nothing is cached or
//! retried; upstream failures come back as `ToolError::Upstream`.

pub mod branch;
pub mod code;
pub mod commit;
pub mod content;
pub mod issue;
pub mod pull_request;
pub mod release;
pub mod repository;
pub mod tag;

use chrono::DateTime;
use regex::Regex;

use crate::tools::error::ToolError;

/// Compiles a name filter before any request is made
pub(crate) fn compile_pattern(pattern: &str) -> Result<Regex, ToolError> {
    Regex::new(pattern).map_err(|source| ToolError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}

/// Keeps a `since` filter only when it is a valid RFC 3339 timestamp
pub(crate) fn valid_since(since: Option<&str>) -> Option<&str> {
    let since = since.filter(|since| !since.is_empty())?;
    match DateTime::parse_from_rfc3339(since) {
        Ok(_) => Some(since),
        Err(e) => {
            tracing::warn!("Ignoring invalid since timestamp '{}': {}", since, e);
            None
        }
    }
}
