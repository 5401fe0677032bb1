use crate::github::client::repo_route;
use crate::github::rest_types::{RawIssue, RawPullRequest};
use crate::github::{GitHubClient, QueryParams};
use crate::tools::error::ToolError;
use crate::types::{
    GetPullRequestOptions, ListPullRequestsOptions, PageEnvelope, PageRequest,
    PullRequestInfo, PullRequestListResult, SearchPullRequestsOptions,
};

const PULL_REQUEST_QUALIFIER: &str = "is:pr";

/// Lists pull requests of a repository
///
/// `total_count` is the number of pull requests on the returned page.
pub async fn list_pull_requests(
    github_client: &GitHubClient,
    options: ListPullRequestsOptions,
) -> Result<PullRequestListResult, ToolError> {
    let params = PageRequest::from_options(options.page, options.result_per_page)
        .to_query()
        .push_opt("state", options.state)
        .push_opt("head", options.head.as_deref())
        .push_opt("base", options.base.as_deref())
        .push_opt("sort", options.sort.as_deref())
        .push_opt("direction", options.direction);
    let route = repo_route(&options.owner, &options.repository, "/pulls");

    let page = github_client
        .get_page::<RawPullRequest>("list_pull_requests", &route, &params)
        .await?;
    let envelope = PageEnvelope::from_page(&page);

    let pull_requests: Vec<PullRequestInfo> = page
        .items
        .into_iter()
        .map(PullRequestInfo::from)
        .collect();

    Ok(PullRequestListResult {
        total_count: pull_requests.len() as u64,
        next_page: envelope.next_page,
        last_page: envelope.last_page,
        pull_requests,
    })
}

pub async fn get_pull_request_by_number(
    github_client: &GitHubClient,
    options: GetPullRequestOptions,
) -> Result<PullRequestInfo, ToolError> {
    let route = repo_route(
        &options.owner,
        &options.repository,
        &format!("/pulls/{}", options.number),
    );

    let pull_request = github_client
        .get_item::<RawPullRequest>("get_pull_request_by_number", &route, &QueryParams::new())
        .await?;

    Ok(PullRequestInfo::from(pull_request))
}

/// Searches pull requests through the issue search endpoint
///
/// `is:pr` is prepended to the query, so every hit is a pull request. See
/// `RawIssue::into_pull_request_info` for how `merged` is determined.
pub async fn search_pull_requests(
    github_client: &GitHubClient,
    options: SearchPullRequestsOptions,
) -> Result<PullRequestListResult, ToolError> {
    let params = PageRequest::from_options(options.page, options.result_per_page)
        .to_query()
        .push("q", pull_request_query(&options.query))
        .push_opt("sort", options.sort.as_deref())
        .push_opt("order", options.order);

    let page = github_client
        .get_page::<RawIssue>("search_pull_requests", "/search/issues", &params)
        .await?;
    let envelope = PageEnvelope::from_page(&page);

    Ok(PullRequestListResult {
        total_count: page.total_count.unwrap_or(0),
        next_page: envelope.next_page,
        last_page: envelope.last_page,
        pull_requests: page
            .items
            .into_iter()
            .map(RawIssue::into_pull_request_info)
            .collect(),
    })
}

fn pull_request_query(query: &str) -> String {
    format!("{} {}", PULL_REQUEST_QUALIFIER, query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pull_request_query() {
        assert_eq!(
            pull_request_query("repo:rust-lang/rust author:octocat"),
            "is:pr repo:rust-lang/rust author:octocat"
        );
    }
}
