use crate::github::client::{encode_path, repo_route};
use crate::github::rest_types::{RawCommit, RawComparison};
use crate::github::{GitHubClient, QueryParams};
use crate::tools::error::ToolError;
use crate::types::{
    CommitFileInfo, CommitFilesResult, CommitInfo, CommitListOptions, CommitListResult,
    CompareCommitsOptions, CompareCommitsResult, GetCommitOptions, PageEnvelope, PageRequest,
};

pub async fn list_commits(
    github_client: &GitHubClient,
    options: CommitListOptions,
) -> Result<CommitListResult, ToolError> {
    let params = PageRequest::from_options(options.page, options.result_per_page)
        .to_query()
        .push_opt("sha", options.sha.as_deref())
        .push_opt("path", options.path.as_deref())
        .push_opt("author", options.author.as_deref());
    let route = repo_route(&options.owner, &options.repository, "/commits");

    let page = github_client
        .get_page::<RawCommit>("list_commits", &route, &params)
        .await?;
    let envelope = PageEnvelope::from_page(&page);

    Ok(CommitListResult {
        next_page: envelope.next_page,
        last_page: envelope.last_page,
        commits: page.items.into_iter().map(CommitInfo::from).collect(),
    })
}

pub async fn get_commit(
    github_client: &GitHubClient,
    options: GetCommitOptions,
) -> Result<CommitInfo, ToolError> {
    let commit = fetch_commit(github_client, "get_commit", &options).await?;
    Ok(CommitInfo::from(commit))
}

pub async fn get_commit_files(
    github_client: &GitHubClient,
    options: GetCommitOptions,
) -> Result<CommitFilesResult, ToolError> {
    let commit = fetch_commit(github_client, "get_commit_files", &options).await?;

    Ok(CommitFilesResult {
        files: commit.files.into_iter().map(CommitFileInfo::from).collect(),
    })
}

pub async fn compare_commits(
    github_client: &GitHubClient,
    options: CompareCommitsOptions,
) -> Result<CompareCommitsResult, ToolError> {
    let route = repo_route(
        &options.owner,
        &options.repository,
        &format!(
            "/compare/{}...{}",
            encode_path(&options.base),
            encode_path(&options.head)
        ),
    );

    let comparison = github_client
        .get_item::<RawComparison>("compare_commits", &route, &QueryParams::new())
        .await?;

    Ok(CompareCommitsResult::from(comparison))
}

async fn fetch_commit(
    github_client: &GitHubClient,
    operation: &str,
    options: &GetCommitOptions,
) -> Result<RawCommit, ToolError> {
    let route = repo_route(
        &options.owner,
        &options.repository,
        &format!("/commits/{}", urlencoding::encode(&options.sha)),
    );

    Ok(github_client
        .get_item::<RawCommit>(operation, &route, &QueryParams::new())
        .await?)
}
