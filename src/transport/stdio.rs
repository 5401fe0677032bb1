use crate::github::GitHubClient;
use crate::tools::GitHubExplorerTools;
use anyhow::Result;
use rmcp::ServiceExt;
use rmcp::transport::stdio;

/// Runs the MCP server in STDIN/STDOUT mode.
///
/// This mode is used when the server is launched as a subprocess by an MCP client,
/// communicating through standard input/output streams. Returns when the client
/// closes the connection.
///
/// # Example
/// ```no_run
/// # use github_explorer::github::GitHubClient;
/// # use github_explorer::transport::stdio::run_stdio_server;
/// # async fn example() -> anyhow::Result<()> {
/// let github_client = GitHubClient::new(Some("ghp_xxxxxxxxxxxx".to_string()), None)?;
/// run_stdio_server(github_client).await?;
/// # Ok(())
/// # }
/// ```
pub async fn run_stdio_server(github_client: GitHubClient) -> Result<()> {
    let service = GitHubExplorerTools::new(github_client);
    service.log_auth_status();

    let server = service.serve(stdio()).await?;

    let quit_reason = server.waiting().await?;
    tracing::info!("MCP server shut down: {:?}", quit_reason);
    Ok(())
}
