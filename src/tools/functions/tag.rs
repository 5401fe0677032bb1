use crate::github::client::{encode_path, repo_route};
use crate::github::rest_types::{RawAnnotatedTag, RawGitRef, RawTag};
use crate::github::{GitHubClient, QueryParams};
use crate::tools::error::ToolError;
use crate::types::{
    FindTagsOptions, FindTagsResult, GetTagOptions, PATTERN_SEARCH_PAGE_SIZE, PageEnvelope,
    PageRequest, TagDetail, TagInfo, TagListOptions, TagListResult,
};

use super::compile_pattern;

pub async fn get_tags(
    github_client: &GitHubClient,
    options: TagListOptions,
) -> Result<TagListResult, ToolError> {
    let params = PageRequest::from_options(options.page, options.result_per_page).to_query();
    let route = repo_route(&options.owner, &options.repository, "/tags");

    let page = github_client
        .get_page::<RawTag>("get_tags", &route, &params)
        .await?;
    let envelope = PageEnvelope::from_page(&page);

    Ok(TagListResult {
        next_page: envelope.next_page,
        last_page: envelope.last_page,
        tags: page.items.into_iter().map(TagInfo::from).collect(),
    })
}

/// Resolves a tag to the commit it names
///
/// A reference to an annotated tag object costs a second request to read the
/// tag object itself.
pub async fn get_tag(
    github_client: &GitHubClient,
    options: GetTagOptions,
) -> Result<TagDetail, ToolError> {
    let route = repo_route(
        &options.owner,
        &options.repository,
        &format!("/git/ref/tags/{}", encode_path(&options.tag_name)),
    );
    let git_ref = github_client
        .get_item::<RawGitRef>("get_tag", &route, &QueryParams::new())
        .await?;

    if !git_ref.points_at_annotated_tag() {
        return Ok(git_ref.into_lightweight_tag_detail(&options.tag_name));
    }

    let route = repo_route(
        &options.owner,
        &options.repository,
        &format!("/git/tags/{}", git_ref.object.sha),
    );
    let annotated = github_client
        .get_item::<RawAnnotatedTag>("get_tag", &route, &QueryParams::new())
        .await?;

    Ok(TagDetail::from(annotated))
}

/// Returns the tags whose name matches `pattern`, in the order GitHub lists them
///
/// Only the first page of up to 1000 tags is searched.
pub async fn find_tags(
    github_client: &GitHubClient,
    options: FindTagsOptions,
) -> Result<FindTagsResult, ToolError> {
    let pattern = compile_pattern(&options.pattern)?;
    let params = PageRequest::first_page(PATTERN_SEARCH_PAGE_SIZE).to_query();
    let route = repo_route(&options.owner, &options.repository, "/tags");

    let page = github_client
        .get_page::<RawTag>("find_tags", &route, &params)
        .await?;

    let tags: Vec<TagInfo> = page
        .items
        .into_iter()
        .filter(|tag| pattern.is_match(&tag.name))
        .map(TagInfo::from)
        .collect();
    tracing::debug!("{} tags matched '{}'", tags.len(), options.pattern);

    Ok(FindTagsResult { tags })
}
