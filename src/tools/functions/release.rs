use crate::formatter::select_lines;
use crate::github::client::{encode_path, repo_route};
use crate::github::rest_types::RawRelease;
use crate::github::{GitHubClient, QueryParams};
use crate::tools::error::ToolError;
use crate::types::{
    GetReleaseOptions, PageEnvelope, PageRequest, ReleaseDetailResult, ReleaseListOptions,
    ReleaseListResult, description_truncate_size,
};

pub async fn get_releases(
    github_client: &GitHubClient,
    options: ReleaseListOptions,
) -> Result<ReleaseListResult, ToolError> {
    let truncate_size = description_truncate_size(options.description_truncate_size);
    let params = PageRequest::from_options(options.page, options.result_per_page).to_query();
    let route = repo_route(&options.owner, &options.repository, "/releases");

    let page = github_client
        .get_page::<RawRelease>("get_releases", &route, &params)
        .await?;
    let envelope = PageEnvelope::from_page(&page);

    Ok(ReleaseListResult {
        next_page: envelope.next_page,
        last_page: envelope.last_page,
        releases: page
            .items
            .into_iter()
            .map(|release| release.into_release_info(truncate_size))
            .collect(),
    })
}

/// Fetches one release by tag, or the latest published release when no tag is given
pub async fn get_release(
    github_client: &GitHubClient,
    options: GetReleaseOptions,
) -> Result<ReleaseDetailResult, ToolError> {
    let suffix = match options.tag_name.as_deref().filter(|tag| !tag.is_empty()) {
        Some(tag) => format!("/releases/tags/{}", encode_path(tag)),
        None => "/releases/latest".to_string(),
    };
    let route = repo_route(&options.owner, &options.repository, &suffix);

    let release = github_client
        .get_item::<RawRelease>("get_release", &route, &QueryParams::new())
        .await?;

    Ok(release.into_release_detail(|body| {
        select_lines(body, options.start_line, options.end_line)
    }))
}
