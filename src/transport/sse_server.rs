use crate::github::GitHubClient;
use crate::tools::GitHubExplorerTools;
use anyhow::{Context, Result};
use rmcp::transport::sse_server::SseServer;
use std::net::SocketAddr;

pub struct SseServerApp {
    bind_addr: SocketAddr,
    github_client: GitHubClient,
}

impl SseServerApp {
    /// Creates a new SSE server application instance.
    ///
    /// # Arguments
    ///
    /// * `bind_addr` - The socket address to bind the server to
    /// * `github_client` - GitHub client shared by every connection
    pub fn new(bind_addr: SocketAddr, github_client: GitHubClient) -> Self {
        Self {
            bind_addr,
            github_client,
        }
    }

    /// Starts the SSE server and serves GitHubExplorerTools over Server-Sent Events.
    ///
    /// This method starts the server and waits for a Ctrl+C signal to shutdown gracefully.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The server fails to bind to the specified address
    /// - Waiting for the shutdown signal fails
    pub async fn serve(self) -> Result<()> {
        GitHubExplorerTools::new(self.github_client.clone()).log_auth_status();

        let sse_server = SseServer::serve(self.bind_addr)
            .await
            .with_context(|| format!("Failed to bind SSE server to {}", self.bind_addr))?;
        let github_client = self.github_client;
        let cancellation_token =
            sse_server.with_service(move || GitHubExplorerTools::new(github_client.clone()));

        // Wait for Ctrl+C signal to gracefully shutdown
        tokio::signal::ctrl_c().await?;
        tracing::info!("Shutting down SSE server");

        cancellation_token.cancel();

        Ok(())
    }
}
