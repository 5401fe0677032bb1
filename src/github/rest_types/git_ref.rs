use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::{RawCommitRef, RawGitActor};
use crate::formatter::rfc3339_datetime_opt;
use crate::types::{BranchInfo, TagDetail, TagInfo};

/// Object type of a reference pointing at an annotated tag
pub const GIT_OBJECT_TYPE_TAG: &str = "tag";

#[derive(Debug, Clone, Deserialize)]
pub struct RawTag {
    pub name: String,
    #[serde(default)]
    pub commit: Option<RawCommitRef>,
    #[serde(default)]
    pub zipball_url: Option<String>,
    #[serde(default)]
    pub tarball_url: Option<String>,
}

impl From<RawTag> for TagInfo {
    fn from(tag: RawTag) -> Self {
        Self {
            name: tag.name,
            commit_sha: tag.commit.map(|commit| commit.sha),
            zipball_url: tag.zipball_url,
            tarball_url: tag.tarball_url,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawBranch {
    pub name: String,
    #[serde(default)]
    pub commit: Option<RawCommitRef>,
    #[serde(default)]
    pub protected: bool,
}

impl From<RawBranch> for BranchInfo {
    fn from(branch: RawBranch) -> Self {
        Self {
            name: branch.name,
            commit_sha: branch.commit.map(|commit| commit.sha),
            protected: branch.protected,
        }
    }
}

/// Response of `GET /repos/{owner}/{repo}/git/ref/{ref}`
#[derive(Debug, Clone, Deserialize)]
pub struct RawGitRef {
    #[serde(rename = "ref")]
    pub git_ref: String,
    pub object: RawGitObject,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawGitObject {
    pub sha: String,
    #[serde(rename = "type")]
    pub object_type: String,
}

impl RawGitRef {
    pub fn points_at_annotated_tag(&self) -> bool {
        self.object.object_type == GIT_OBJECT_TYPE_TAG
    }

    /// Detail of a lightweight tag, which points at its commit directly
    pub fn into_lightweight_tag_detail(self, name: &str) -> TagDetail {
        TagDetail {
            name: name.to_string(),
            commit_sha: self.object.sha,
            annotated: false,
            message: None,
            tagger: None,
            tagged_at: None,
        }
    }
}

/// Response of `GET /repos/{owner}/{repo}/git/tags/{sha}`
#[derive(Debug, Clone, Deserialize)]
pub struct RawAnnotatedTag {
    pub tag: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub tagger: Option<RawGitActor>,
    pub object: RawGitObject,
}

impl From<RawAnnotatedTag> for TagDetail {
    fn from(tag: RawAnnotatedTag) -> Self {
        let (tagger, tagged_at) = match tag.tagger {
            Some(tagger) => (tagger.name, tagger.date),
            None => (None, None::<DateTime<Utc>>),
        };

        Self {
            name: tag.tag,
            commit_sha: tag.object.sha,
            annotated: true,
            message: tag.message,
            tagger,
            tagged_at: rfc3339_datetime_opt(tagged_at.as_ref()),
        }
    }
}
