use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::{RawUser, login_of};
use crate::formatter::{LineSelection, display_datetime_opt, truncate_chars};
use crate::types::{AssetInfo, ReleaseDetailResult, ReleaseInfo};

#[derive(Debug, Clone, Deserialize)]
pub struct RawRelease {
    #[serde(default)]
    pub name: Option<String>,
    pub tag_name: String,
    #[serde(default)]
    pub author: Option<RawUser>,
    #[serde(default)]
    pub draft: bool,
    #[serde(default)]
    pub prerelease: bool,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub html_url: Option<String>,
    #[serde(default)]
    pub assets: Vec<RawAsset>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawAsset {
    pub id: u64,
    pub browser_download_url: String,
    pub name: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub size: u64,
}

impl From<RawAsset> for AssetInfo {
    fn from(asset: RawAsset) -> Self {
        Self {
            id: asset.id,
            url: asset.browser_download_url,
            name: asset.name,
            label: asset.label,
            size: asset.size,
        }
    }
}

impl RawRelease {
    /// Maps into a listing record, cutting the description to `description_truncate_size` characters
    pub fn into_release_info(self, description_truncate_size: usize) -> ReleaseInfo {
        ReleaseInfo {
            name: self.name,
            tag: self.tag_name,
            author: login_of(self.author),
            is_draft: self.draft,
            is_prerelease: self.prerelease,
            description: self
                .body
                .map(|body| truncate_chars(&body, description_truncate_size)),
            created_at: display_datetime_opt(self.created_at.as_ref()),
            published_at: display_datetime_opt(self.published_at.as_ref()),
            assets: self.assets.into_iter().map(AssetInfo::from).collect(),
        }
    }

    /// Maps into a detail record whose description is the given line selection of the body
    pub fn into_release_detail(
        self,
        select: impl FnOnce(&str) -> LineSelection,
    ) -> ReleaseDetailResult {
        let selection = select(self.body.as_deref().unwrap_or_default());

        ReleaseDetailResult {
            name: self.name,
            tag: self.tag_name,
            author: login_of(self.author),
            is_draft: self.draft,
            is_prerelease: self.prerelease,
            description: selection.content,
            start_line: selection.start_line,
            end_line: selection.end_line,
            total_lines: selection.total_lines,
            created_at: display_datetime_opt(self.created_at.as_ref()),
            published_at: display_datetime_opt(self.published_at.as_ref()),
            html_url: self.html_url,
            assets: self.assets.into_iter().map(AssetInfo::from).collect(),
        }
    }
}
