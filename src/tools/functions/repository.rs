use crate::github::GitHubClient;
use crate::github::rest_types::RawRepository;
use crate::tools::error::ToolError;
use crate::types::{
    PageEnvelope, PageRequest, RepositorySearchResult, SearchRepositoryOptions,
    description_truncate_size,
};

pub async fn search_github_repository(
    github_client: &GitHubClient,
    options: SearchRepositoryOptions,
) -> Result<RepositorySearchResult, ToolError> {
    let truncate_size = description_truncate_size(options.description_truncate_size);
    let params = PageRequest::from_options(options.page, options.result_per_page)
        .to_query()
        .push("q", &options.query)
        .push_opt("sort", options.sort.as_deref())
        .push_opt("order", options.order);

    let page = github_client
        .get_page::<RawRepository>("search_github_repository", "/search/repositories", &params)
        .await?;
    let envelope = PageEnvelope::from_page(&page);

    Ok(RepositorySearchResult {
        total_repo_num: page.total_count.unwrap_or(0),
        next_page: envelope.next_page,
        last_page: envelope.last_page,
        repositories: page
            .items
            .into_iter()
            .map(|repository| repository.into_repository_info(truncate_size))
            .collect(),
    })
}
