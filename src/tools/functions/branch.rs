use crate::github::client::{encode_path, repo_route};
use crate::github::rest_types::RawBranch;
use crate::github::{GitHubClient, QueryParams};
use crate::tools::error::ToolError;
use crate::types::{
    BranchInfo, BranchListOptions, BranchListResult, FindBranchesOptions, FindBranchesResult,
    GetBranchOptions, PATTERN_SEARCH_PAGE_SIZE, PageEnvelope, PageRequest,
};

use super::compile_pattern;

pub async fn list_branches(
    github_client: &GitHubClient,
    options: BranchListOptions,
) -> Result<BranchListResult, ToolError> {
    let params = PageRequest::from_options(options.page, options.result_per_page)
        .to_query()
        .push_opt("protected", options.protected);
    let route = repo_route(&options.owner, &options.repository, "/branches");

    let page = github_client
        .get_page::<RawBranch>("list_branches", &route, &params)
        .await?;
    let envelope = PageEnvelope::from_page(&page);

    Ok(BranchListResult {
        next_page: envelope.next_page,
        last_page: envelope.last_page,
        branches: page.items.into_iter().map(BranchInfo::from).collect(),
    })
}

pub async fn get_branch(
    github_client: &GitHubClient,
    options: GetBranchOptions,
) -> Result<BranchInfo, ToolError> {
    let route = repo_route(
        &options.owner,
        &options.repository,
        &format!("/branches/{}", encode_path(&options.branch_name)),
    );

    let branch = github_client
        .get_item::<RawBranch>("get_branch", &route, &QueryParams::new())
        .await?;

    Ok(BranchInfo::from(branch))
}

/// Returns the branches whose name matches `pattern`, in the order GitHub lists them
///
/// Only the first page of up to 1000 branches is searched.
pub async fn find_branches(
    github_client: &GitHubClient,
    options: FindBranchesOptions,
) -> Result<FindBranchesResult, ToolError> {
    let pattern = compile_pattern(&options.pattern)?;
    let params = PageRequest::first_page(PATTERN_SEARCH_PAGE_SIZE).to_query();
    let route = repo_route(&options.owner, &options.repository, "/branches");

    let page = github_client
        .get_page::<RawBranch>("find_branches", &route, &params)
        .await?;

    let branches: Vec<BranchInfo> = page
        .items
        .into_iter()
        .filter(|branch| pattern.is_match(&branch.name))
        .map(BranchInfo::from)
        .collect();
    tracing::debug!("{} branches matched '{}'", branches.len(), options.pattern);

    Ok(FindBranchesResult { branches })
}
