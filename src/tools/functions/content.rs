use crate::formatter::select_lines;
use crate::github::client::{encode_path, repo_route};
use crate::github::rest_types::{RawContent, RawContents};
use crate::github::{GitHubClient, QueryParams};
use crate::tools::error::ToolError;
use crate::types::{
    DirectoryListOptions, DirectoryListResult, DirectoryOrFileInfo, ReadFileOptions,
    ReadFileResult, ReadmeOptions, ReadmeResult,
};

pub async fn get_readme(
    github_client: &GitHubClient,
    options: ReadmeOptions,
) -> Result<ReadmeResult, ToolError> {
    let route = repo_route(&options.owner, &options.repository, "/readme");
    let params = QueryParams::new().push_opt("ref", options.git_ref.as_deref());

    let readme = github_client
        .get_item::<RawContent>("get_readme", &route, &params)
        .await?;
    let content = decode(&readme)?;
    let selection = select_lines(&content, options.start_line, options.end_line);

    Ok(ReadmeResult {
        content: selection.content,
        start_line: selection.start_line,
        end_line: selection.end_line,
        total_lines: selection.total_lines,
    })
}

/// Lists a directory; a path naming a single entry yields a one-entry listing
pub async fn list_directory(
    github_client: &GitHubClient,
    options: DirectoryListOptions,
) -> Result<DirectoryListResult, ToolError> {
    let route = contents_route(
        &options.owner,
        &options.repository,
        options.path.as_deref().unwrap_or_default(),
    );
    let params = QueryParams::new().push_opt("ref", options.git_ref.as_deref());

    let contents = github_client
        .get_item::<RawContents>("list_directory", &route, &params)
        .await?;

    let infos = match contents {
        RawContents::Listing(entries) => entries
            .into_iter()
            .map(DirectoryOrFileInfo::from)
            .collect(),
        RawContents::Entry(entry) => vec![DirectoryOrFileInfo::from(entry)],
    };

    Ok(DirectoryListResult { infos })
}

pub async fn read_file(
    github_client: &GitHubClient,
    options: ReadFileOptions,
) -> Result<ReadFileResult, ToolError> {
    let route = contents_route(&options.owner, &options.repository, &options.path);
    let params = QueryParams::new().push_opt("ref", options.git_ref.as_deref());

    let contents = github_client
        .get_item::<RawContents>("read_file", &route, &params)
        .await?;

    let file = match contents {
        RawContents::Entry(entry) if entry.is_file() => entry,
        _ => return Err(ToolError::NotAFile(options.path)),
    };

    let content = decode(&file)?;
    let selection = select_lines(&content, options.start_line, options.end_line);

    Ok(ReadFileResult {
        content: selection.content,
        start_line: selection.start_line,
        end_line: selection.end_line,
        total_lines: selection.total_lines,
        encoding: file.encoding,
    })
}

fn contents_route(owner: &str, repository: &str, path: &str) -> String {
    let path = encode_path(path);
    if path.is_empty() {
        repo_route(owner, repository, "/contents")
    } else {
        repo_route(owner, repository, &format!("/contents/{}", path))
    }
}

fn decode(content: &RawContent) -> Result<String, ToolError> {
    content
        .decoded_content()
        .map_err(|e| {
            ToolError::ContentDecode(format!("{} ({} bytes): {}", content.path, content.size, e))
        })
}
