use crate::github::client::repo_route;
use crate::github::rest_types::{RawComment, RawIssue, RawLabel};
use crate::github::{GitHubClient, QueryParams};
use crate::tools::error::ToolError;
use crate::types::{
    GetIssueOptions, IssueCommentInfo, IssueCommentsResult, IssueInfo, IssuesListResult,
    LabelInfo, LabelListResult, ListIssueCommentsOptions, ListIssueLabelsOptions,
    ListIssuesOptions, PageEnvelope, PageRequest, SearchIssuesOptions, StateFilter,
};

use super::valid_since;

/// Lists issues of a repository, leaving out the pull requests GitHub mixes in
///
/// `total_count` is the number of issues returned after that filtering.
pub async fn list_issues(
    github_client: &GitHubClient,
    options: ListIssuesOptions,
) -> Result<IssuesListResult, ToolError> {
    let labels = options
        .labels
        .iter()
        .map(|label| label.trim())
        .filter(|label| !label.is_empty())
        .collect::<Vec<_>>()
        .join(",");

    let params = PageRequest::from_options(options.page, options.result_per_page)
        .to_query()
        .push("state", options.state.unwrap_or(StateFilter::Open))
        .push_opt("labels", Some(labels))
        .push_opt("assignee", options.assignee.as_deref())
        .push_opt("creator", options.creator.as_deref())
        .push_opt("mentioned", options.mentioned.as_deref())
        .push_opt("milestone", options.milestone.as_deref())
        .push_opt("sort", options.sort.as_deref())
        .push_opt("direction", options.direction)
        .push_opt("since", valid_since(options.since.as_deref()));
    let route = repo_route(&options.owner, &options.repository, "/issues");

    let page = github_client
        .get_page::<RawIssue>("list_issues", &route, &params)
        .await?;
    let envelope = PageEnvelope::from_page(&page);

    let issues = issues_only(page.items);

    Ok(IssuesListResult {
        total_count: issues.len() as u64,
        next_page: envelope.next_page,
        last_page: envelope.last_page,
        issues,
    })
}

/// Searches issues, leaving out pull request hits
///
/// `total_count` is GitHub's count for the query, which includes pull requests
/// unless the query says `is:issue`.
pub async fn search_issues(
    github_client: &GitHubClient,
    options: SearchIssuesOptions,
) -> Result<IssuesListResult, ToolError> {
    let params = PageRequest::from_options(options.page, options.result_per_page)
        .to_query()
        .push("q", &options.query)
        .push_opt("sort", options.sort.as_deref())
        .push_opt("order", options.order);

    let page = github_client
        .get_page::<RawIssue>("search_issues", "/search/issues", &params)
        .await?;
    let envelope = PageEnvelope::from_page(&page);

    Ok(IssuesListResult {
        total_count: page.total_count.unwrap_or(0),
        next_page: envelope.next_page,
        last_page: envelope.last_page,
        issues: issues_only(page.items),
    })
}

pub async fn get_issue(
    github_client: &GitHubClient,
    options: GetIssueOptions,
) -> Result<IssueInfo, ToolError> {
    let route = repo_route(
        &options.owner,
        &options.repository,
        &format!("/issues/{}", options.issue_number),
    );

    let issue = github_client
        .get_item::<RawIssue>("get_issue", &route, &QueryParams::new())
        .await?;

    Ok(IssueInfo::from(issue))
}

pub async fn list_issue_comments(
    github_client: &GitHubClient,
    options: ListIssueCommentsOptions,
) -> Result<IssueCommentsResult, ToolError> {
    let params = PageRequest::from_options(options.page, options.result_per_page)
        .to_query()
        .push_opt("since", valid_since(options.since.as_deref()));
    let route = repo_route(
        &options.owner,
        &options.repository,
        &format!("/issues/{}/comments", options.issue_number),
    );

    let page = github_client
        .get_page::<RawComment>("list_issue_comments", &route, &params)
        .await?;
    let envelope = PageEnvelope::from_page(&page);

    Ok(IssueCommentsResult {
        next_page: envelope.next_page,
        last_page: envelope.last_page,
        comments: page.items.into_iter().map(IssueCommentInfo::from).collect(),
    })
}

pub async fn list_issue_labels(
    github_client: &GitHubClient,
    options: ListIssueLabelsOptions,
) -> Result<LabelListResult, ToolError> {
    let params = PageRequest::from_options(options.page, options.result_per_page).to_query();
    let route = repo_route(&options.owner, &options.repository, "/labels");

    let page = github_client
        .get_page::<RawLabel>("list_issue_labels", &route, &params)
        .await?;
    let envelope = PageEnvelope::from_page(&page);

    Ok(LabelListResult {
        next_page: envelope.next_page,
        last_page: envelope.last_page,
        labels: page.items.into_iter().map(LabelInfo::from).collect(),
    })
}

fn issues_only(items: Vec<RawIssue>) -> Vec<IssueInfo> {
    let total = items.len();
    let issues: Vec<IssueInfo> = items
        .into_iter()
        .filter(|item| !item.is_pull_request())
        .map(IssueInfo::from)
        .collect();

    if issues.len() < total {
        tracing::debug!("Dropped {} pull requests from issue results", total - issues.len());
    }
    issues
}
