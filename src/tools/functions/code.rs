use crate::github::GitHubClient;
use crate::github::rest_types::RawCodeItem;
use crate::tools::error::ToolError;
use crate::types::{CodeFileInfo, PageEnvelope, PageRequest, SearchCodeOptions, SearchCodeResult};

/// Searches code, asking GitHub for the matched fragments of every hit
pub async fn search_code(
    github_client: &GitHubClient,
    options: SearchCodeOptions,
) -> Result<SearchCodeResult, ToolError> {
    let params = PageRequest::from_options(options.page, options.result_per_page)
        .to_query()
        .push("q", &options.query)
        .push_opt("sort", options.sort.as_deref())
        .push_opt("order", options.order);

    let page = github_client
        .get_text_match_page::<RawCodeItem>("search_code", "/search/code", &params)
        .await?;
    let envelope = PageEnvelope::from_page(&page);

    Ok(SearchCodeResult {
        total_count: page.total_count.unwrap_or(0),
        next_page: envelope.next_page,
        last_page: envelope.last_page,
        code_files: page.items.into_iter().map(CodeFileInfo::from).collect(),
    })
}
