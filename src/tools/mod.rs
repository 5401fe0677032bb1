//! MCP (Model Context Protocol) tool implementations for GitHub Explorer
//!
//! This module exposes read-only GitHub repository exploration as tools that
//! can be used by AI assistants and other MCP clients.
//!
//! ## Features
//!
//! - Search repositories, code, issues and pull requests
//! - Browse releases, tags, branches, commits and repository contents
//! - Read README and file contents by line range
//! - Find tags and branches by regular expression

use crate::github::GitHubClient;
use crate::types::{
    BranchListOptions, CommitListOptions, CompareCommitsOptions, DirectoryListOptions,
    FindBranchesOptions, FindTagsOptions, GetBranchOptions, GetCommitOptions, GetIssueOptions,
    GetPullRequestOptions, GetReleaseOptions, GetTagOptions, ListIssueCommentsOptions,
    ListIssueLabelsOptions, ListIssuesOptions, ListPullRequestsOptions, ReadFileOptions,
    ReadmeOptions, ReleaseListOptions, SearchCodeOptions, SearchIssuesOptions,
    SearchPullRequestsOptions, SearchRepositoryOptions, TagListOptions,
};
use rmcp::{Error as McpError, ServerHandler, model::*, tool};
use serde::Serialize;

use self::error::ToolError;

/// Error types specific to tool operations
pub mod error;

/// Tool function implementations organized by functionality
pub mod functions;

/// GitHub exploration tools exposed through the MCP protocol
#[derive(Clone)]
pub struct GitHubExplorerTools {
    github_client: GitHubClient,
}

impl GitHubExplorerTools {
    pub fn new(github_client: GitHubClient) -> Self {
        Self { github_client }
    }

    /// Logs whether requests will carry a token
    pub fn log_auth_status(&self) {
        if self.github_client.is_authenticated() {
            tracing::info!("GitHub client uses a personal access token");
        } else {
            tracing::info!("GitHub client is unauthenticated; lower rate limits apply");
        }
    }
}

/// Serializes a tool outcome into a single text content item
///
/// Failures are reported to the caller as a tool-level error result rather
/// than a protocol error, so the message reaches the model.
fn into_call_tool_result<T: Serialize>(
    tool_name: &str,
    result: Result<T, ToolError>,
) -> Result<CallToolResult, McpError> {
    let serialized =
        result.and_then(|record| serde_json::to_string_pretty(&record).map_err(ToolError::from));

    match serialized {
        Ok(text) => Ok(CallToolResult {
            content: vec![Content::text(text)],
            is_error: Some(false),
        }),
        Err(e) => {
            tracing::warn!("Tool {} failed: {}", tool_name, e);
            Ok(CallToolResult {
                content: vec![Content::text(e.to_string())],
                is_error: Some(true),
            })
        }
    }
}

#[tool(tool_box)]
impl GitHubExplorerTools {
    #[tool(
        description = "Search GitHub repositories. Returns total count, pagination and repositories with owner, description (truncated), stars, forks, language and timestamps. Example: `{\"query\": \"tokio language:rust\", \"sort\": \"stars\"}`"
    )]
    async fn search_github_repository(
        &self,
        #[tool(aggr)] options: SearchRepositoryOptions,
    ) -> Result<CallToolResult, McpError> {
        let result =
            functions::repository::search_github_repository(&self.github_client, options).await;
        into_call_tool_result("search_github_repository", result)
    }

    #[tool(
        description = "List releases of a repository with author, flags, truncated description and assets. Example: `{\"owner\": \"tokio-rs\", \"repository\": \"tokio\"}`"
    )]
    async fn get_releases(
        &self,
        #[tool(aggr)] options: ReleaseListOptions,
    ) -> Result<CallToolResult, McpError> {
        let result = functions::release::get_releases(&self.github_client, options).await;
        into_call_tool_result("get_releases", result)
    }

    #[tool(
        description = "Get one release by tag name, or the latest release when no tag is given. The release notes can be limited to a line range. Example: `{\"owner\": \"tokio-rs\", \"repository\": \"tokio\", \"tag_name\": \"tokio-1.38.0\"}`"
    )]
    async fn get_release(
        &self,
        #[tool(aggr)] options: GetReleaseOptions,
    ) -> Result<CallToolResult, McpError> {
        let result = functions::release::get_release(&self.github_client, options).await;
        into_call_tool_result("get_release", result)
    }

    #[tool(
        description = "Read the README of a repository, optionally at a ref and limited to a line range. Example: `{\"owner\": \"rust-lang\", \"repository\": \"rust\", \"start_line\": 1, \"end_line\": 40}`"
    )]
    async fn get_readme(
        &self,
        #[tool(aggr)] options: ReadmeOptions,
    ) -> Result<CallToolResult, McpError> {
        let result = functions::content::get_readme(&self.github_client, options).await;
        into_call_tool_result("get_readme", result)
    }

    #[tool(
        description = "List tags of a repository with their commit SHA and archive URLs. Example: `{\"owner\": \"rust-lang\", \"repository\": \"rust\", \"page\": 2}`"
    )]
    async fn get_tags(
        &self,
        #[tool(aggr)] options: TagListOptions,
    ) -> Result<CallToolResult, McpError> {
        let result = functions::tag::get_tags(&self.github_client, options).await;
        into_call_tool_result("get_tags", result)
    }

    #[tool(
        description = "Get one tag by name, resolving annotated tags to their commit, message and tagger. Example: `{\"owner\": \"rust-lang\", \"repository\": \"rust\", \"tag_name\": \"1.80.0\"}`"
    )]
    async fn get_tag(
        &self,
        #[tool(aggr)] options: GetTagOptions,
    ) -> Result<CallToolResult, McpError> {
        let result = functions::tag::get_tag(&self.github_client, options).await;
        into_call_tool_result("get_tag", result)
    }

    #[tool(
        description = "Find tags whose name matches a regular expression, searching up to 1000 tags. Example: `{\"owner\": \"rust-lang\", \"repository\": \"rust\", \"pattern\": \"^1\\\\.8\"}`"
    )]
    async fn find_tags(
        &self,
        #[tool(aggr)] options: FindTagsOptions,
    ) -> Result<CallToolResult, McpError> {
        let result = functions::tag::find_tags(&self.github_client, options).await;
        into_call_tool_result("find_tags", result)
    }

    #[tool(
        description = "List commits of a repository, optionally from a branch or SHA, touching a path, or by an author. Example: `{\"owner\": \"tokio-rs\", \"repository\": \"tokio\", \"path\": \"tokio/src/lib.rs\"}`"
    )]
    async fn list_commits(
        &self,
        #[tool(aggr)] options: CommitListOptions,
    ) -> Result<CallToolResult, McpError> {
        let result = functions::commit::list_commits(&self.github_client, options).await;
        into_call_tool_result("list_commits", result)
    }

    #[tool(
        description = "Get one commit by SHA with message, author, committer and parent hashes. Example: `{\"owner\": \"tokio-rs\", \"repository\": \"tokio\", \"sha\": \"a1b2c3d\"}`"
    )]
    async fn get_commit(
        &self,
        #[tool(aggr)] options: GetCommitOptions,
    ) -> Result<CallToolResult, McpError> {
        let result = functions::commit::get_commit(&self.github_client, options).await;
        into_call_tool_result("get_commit", result)
    }

    #[tool(
        description = "List the files changed by a commit with status, line counts and patch. Example: `{\"owner\": \"tokio-rs\", \"repository\": \"tokio\", \"sha\": \"a1b2c3d\"}`"
    )]
    async fn get_commit_files(
        &self,
        #[tool(aggr)] options: GetCommitOptions,
    ) -> Result<CallToolResult, McpError> {
        let result = functions::commit::get_commit_files(&self.github_client, options).await;
        into_call_tool_result("get_commit_files", result)
    }

    #[tool(
        description = "Compare two commits or branches: ahead/behind counts, commits and changed files. Example: `{\"owner\": \"tokio-rs\", \"repository\": \"tokio\", \"base\": \"tokio-1.37.0\", \"head\": \"tokio-1.38.0\"}`"
    )]
    async fn compare_commits(
        &self,
        #[tool(aggr)] options: CompareCommitsOptions,
    ) -> Result<CallToolResult, McpError> {
        let result = functions::commit::compare_commits(&self.github_client, options).await;
        into_call_tool_result("compare_commits", result)
    }

    #[tool(
        description = "List branches of a repository, optionally only protected or unprotected ones. Example: `{\"owner\": \"rust-lang\", \"repository\": \"rust\", \"protected\": true}`"
    )]
    async fn list_branches(
        &self,
        #[tool(aggr)] options: BranchListOptions,
    ) -> Result<CallToolResult, McpError> {
        let result = functions::branch::list_branches(&self.github_client, options).await;
        into_call_tool_result("list_branches", result)
    }

    #[tool(
        description = "Get one branch by name with its head commit and protection flag. Example: `{\"owner\": \"rust-lang\", \"repository\": \"rust\", \"branch_name\": \"master\"}`"
    )]
    async fn get_branch(
        &self,
        #[tool(aggr)] options: GetBranchOptions,
    ) -> Result<CallToolResult, McpError> {
        let result = functions::branch::get_branch(&self.github_client, options).await;
        into_call_tool_result("get_branch", result)
    }

    #[tool(
        description = "Find branches whose name matches a regular expression, searching up to 1000 branches. Example: `{\"owner\": \"rust-lang\", \"repository\": \"rust\", \"pattern\": \"^beta\"}`"
    )]
    async fn find_branches(
        &self,
        #[tool(aggr)] options: FindBranchesOptions,
    ) -> Result<CallToolResult, McpError> {
        let result = functions::branch::find_branches(&self.github_client, options).await;
        into_call_tool_result("find_branches", result)
    }

    #[tool(
        description = "List the entries of a repository directory, the root when no path is given. Example: `{\"owner\": \"tokio-rs\", \"repository\": \"tokio\", \"path\": \"tokio/src\"}`"
    )]
    async fn list_directory(
        &self,
        #[tool(aggr)] options: DirectoryListOptions,
    ) -> Result<CallToolResult, McpError> {
        let result = functions::content::list_directory(&self.github_client, options).await;
        into_call_tool_result("list_directory", result)
    }

    #[tool(
        description = "Read a file of a repository, optionally at a ref and limited to a line range. Example: `{\"owner\": \"tokio-rs\", \"repository\": \"tokio\", \"path\": \"Cargo.toml\", \"end_line\": 20}`"
    )]
    async fn read_file(
        &self,
        #[tool(aggr)] options: ReadFileOptions,
    ) -> Result<CallToolResult, McpError> {
        let result = functions::content::read_file(&self.github_client, options).await;
        into_call_tool_result("read_file", result)
    }

    #[tool(
        description = "Search code on GitHub. Returns matching files with highlighted text fragments. Example: `{\"query\": \"spawn_blocking repo:tokio-rs/tokio\"}`"
    )]
    async fn search_code(
        &self,
        #[tool(aggr)] options: SearchCodeOptions,
    ) -> Result<CallToolResult, McpError> {
        let result = functions::code::search_code(&self.github_client, options).await;
        into_call_tool_result("search_code", result)
    }

    #[tool(
        description = "List issues of a repository (pull requests excluded). Filters: state (default open), labels, assignee, creator, mentioned, milestone, sort, direction, since. Example: `{\"owner\": \"tokio-rs\", \"repository\": \"tokio\", \"labels\": [\"C-bug\"]}`"
    )]
    async fn list_issues(
        &self,
        #[tool(aggr)] options: ListIssuesOptions,
    ) -> Result<CallToolResult, McpError> {
        let result = functions::issue::list_issues(&self.github_client, options).await;
        into_call_tool_result("list_issues", result)
    }

    #[tool(
        description = "Search issues with GitHub search syntax (pull requests excluded). Example: `{\"query\": \"repo:tokio-rs/tokio is:open deadlock\"}`"
    )]
    async fn search_issues(
        &self,
        #[tool(aggr)] options: SearchIssuesOptions,
    ) -> Result<CallToolResult, McpError> {
        let result = functions::issue::search_issues(&self.github_client, options).await;
        into_call_tool_result("search_issues", result)
    }

    #[tool(
        description = "Get one issue by number. Example: `{\"owner\": \"tokio-rs\", \"repository\": \"tokio\", \"issue_number\": 1234}`"
    )]
    async fn get_issue(
        &self,
        #[tool(aggr)] options: GetIssueOptions,
    ) -> Result<CallToolResult, McpError> {
        let result = functions::issue::get_issue(&self.github_client, options).await;
        into_call_tool_result("get_issue", result)
    }

    #[tool(
        description = "List comments of an issue or pull request, optionally only those updated since a timestamp. Example: `{\"owner\": \"tokio-rs\", \"repository\": \"tokio\", \"issue_number\": 1234}`"
    )]
    async fn list_issue_comments(
        &self,
        #[tool(aggr)] options: ListIssueCommentsOptions,
    ) -> Result<CallToolResult, McpError> {
        let result = functions::issue::list_issue_comments(&self.github_client, options).await;
        into_call_tool_result("list_issue_comments", result)
    }

    #[tool(
        description = "List the labels defined in a repository. Example: `{\"owner\": \"tokio-rs\", \"repository\": \"tokio\"}`"
    )]
    async fn list_issue_labels(
        &self,
        #[tool(aggr)] options: ListIssueLabelsOptions,
    ) -> Result<CallToolResult, McpError> {
        let result = functions::issue::list_issue_labels(&self.github_client, options).await;
        into_call_tool_result("list_issue_labels", result)
    }

    #[tool(
        description = "List pull requests of a repository. Filters: state, head, base, sort, direction. Example: `{\"owner\": \"tokio-rs\", \"repository\": \"tokio\", \"state\": \"closed\"}`"
    )]
    async fn list_pull_requests(
        &self,
        #[tool(aggr)] options: ListPullRequestsOptions,
    ) -> Result<CallToolResult, McpError> {
        let result = functions::pull_request::list_pull_requests(&self.github_client, options).await;
        into_call_tool_result("list_pull_requests", result)
    }

    #[tool(
        description = "Get one pull request by number with line counts, mergeability, branches and review counts. Example: `{\"owner\": \"tokio-rs\", \"repository\": \"tokio\", \"number\": 6000}`"
    )]
    async fn get_pull_request_by_number(
        &self,
        #[tool(aggr)] options: GetPullRequestOptions,
    ) -> Result<CallToolResult, McpError> {
        let result =
            functions::pull_request::get_pull_request_by_number(&self.github_client, options)
                .await;
        into_call_tool_result("get_pull_request_by_number", result)
    }

    #[tool(
        description = "Search pull requests with GitHub search syntax ('is:pr' is added). Example: `{\"query\": \"repo:tokio-rs/tokio is:merged runtime\"}`"
    )]
    async fn search_pull_requests(
        &self,
        #[tool(aggr)] options: SearchPullRequestsOptions,
    ) -> Result<CallToolResult, McpError> {
        let result =
            functions::pull_request::search_pull_requests(&self.github_client, options).await;
        into_call_tool_result("search_pull_requests", result)
    }
}

#[tool(tool_box)]
impl ServerHandler for GitHubExplorerTools {
    /// Provides information about this MCP server
    fn get_info(&self) -> ServerInfo {
        let auth_status = if self.github_client.is_authenticated() {
            "Authenticated with GitHub token"
        } else {
            "Not authenticated (rate limits apply)"
        };

        let instructions = format!(
            r#"GitHub Explorer MCP Server - {}

## Overview
Read-only access to public (and, with a token, private) GitHub repositories through the GitHub REST API. Every tool returns a JSON document.

## Available Tools

### Search
- search_github_repository: search repositories
- search_code: search code, with matched fragments
- search_issues: search issues (pull requests excluded)
- search_pull_requests: search pull requests

### Repository contents
- get_readme: README content by line range
- list_directory: entries of a directory
- read_file: file content by line range

### History
- list_commits, get_commit, get_commit_files, compare_commits
- get_releases, get_release
- get_tags, get_tag, find_tags
- list_branches, get_branch, find_branches

### Issues and pull requests
- list_issues, get_issue, list_issue_comments, list_issue_labels
- list_pull_requests, get_pull_request_by_number

Examples:
```json
{{"name": "search_github_repository", "arguments": {{"query": "mcp language:rust", "sort": "stars"}}}}
{{"name": "read_file", "arguments": {{"owner": "tokio-rs", "repository": "tokio", "path": "README.md", "start_line": 1, "end_line": 30}}}}
{{"name": "find_tags", "arguments": {{"owner": "rust-lang", "repository": "rust", "pattern": "^1\\.8"}}}}
```

## Pagination
List tools accept `page` (default 1) and `result_per_page` (default 10) and return `next_page` and `last_page`, which are 0 when there is no such page.
"#,
            auth_status
        );

        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(instructions),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_becomes_tool_error_result() {
        let result: Result<Vec<u32>, ToolError> =
            Err(ToolError::NotAFile("src".to_string()));

        let call_result = into_call_tool_result("read_file", result).unwrap();
        assert_eq!(call_result.is_error, Some(true));
        assert_eq!(call_result.content.len(), 1);
    }

    #[test]
    fn test_success_becomes_text_result() {
        let call_result = into_call_tool_result("get_tags", Ok(vec![1, 2, 3])).unwrap();
        assert_eq!(call_result.is_error, Some(false));
        assert_eq!(call_result.content.len(), 1);
    }
}
