use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::net::SocketAddr;
use std::time::Duration;
use tracing_subscriber::{self, layer::SubscriberExt, util::SubscriberInitExt};

use github_explorer::github::GitHubClient;

const GITHUB_TOKEN_ENV: &str = "GITHUB_TOKEN";
const GITHUB_API_URL_ENV: &str = "GITHUB_API_URL";

#[derive(Parser)]
#[command(author, version = env!("CARGO_PKG_VERSION"))]
#[command(
    about = "GitHub Explorer MCP Server - Model Context Protocol server for read-only GitHub repository exploration"
)]
#[command(
    long_about = "GitHub Explorer MCP Server exposes GitHub repository exploration through the Model Context Protocol: repository, code, issue and pull request search, releases, tags, branches, commits and comparisons, and README, directory and file reading by line range. Supports both stdio and HTTP/SSE interfaces for integration with MCP clients like Claude Desktop."
)]
#[command(propagate_version = true)]
#[command(disable_version_flag = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the server in stdin/stdout mode for MCP client integration like Claude Desktop
    Stdio {
        #[command(flatten)]
        options: ServerOptions,
    },
    /// Run the server with HTTP/SSE interface for web-based access and testing
    Http {
        /// Address to bind the HTTP server to for web interface access
        #[arg(short, long, default_value = "0.0.0.0:8080")]
        address: String,

        #[command(flatten)]
        options: ServerOptions,
    },
}

#[derive(Args)]
struct ServerOptions {
    /// Enable debug logging for troubleshooting and development
    #[arg(short, long)]
    debug: bool,

    /// GitHub personal access token for API authentication (overrides GITHUB_TOKEN environment variable)
    #[arg(short = 't', long)]
    github_token: Option<String>,

    /// GitHub API base URL, e.g. for GitHub Enterprise (overrides GITHUB_API_URL environment variable)
    #[arg(long)]
    api_url: Option<String>,

    /// Timeout in seconds for GitHub API requests
    #[arg(long, default_value_t = 10)]
    timeout_secs: u64,
}

impl ServerOptions {
    fn github_client(self) -> Result<GitHubClient> {
        let github_token = self
            .github_token
            .or_else(|| std::env::var(GITHUB_TOKEN_ENV).ok())
            .filter(|token| !token.is_empty());
        let api_url = self
            .api_url
            .or_else(|| std::env::var(GITHUB_API_URL_ENV).ok())
            .filter(|url| !url.is_empty());
        let timeout = Some(Duration::from_secs(self.timeout_secs));

        match api_url {
            Some(api_url) => {
                tracing::info!("Using GitHub API at {}", api_url);
                GitHubClient::with_base_uri(github_token, timeout, &api_url)
            }
            None => GitHubClient::new(github_token, timeout),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize rustls crypto provider early to prevent "no process-level CryptoProvider available" panics
    rustls::crypto::ring::default_provider()
        .install_default()
        .map_err(|_| anyhow::anyhow!("Failed to install rustls crypto provider"))?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Stdio { options } => {
            // stdout carries the protocol, so logs go to stderr
            init_tracing(options.debug, true);

            let github_client = options.github_client()?;
            github_explorer::transport::stdio::run_stdio_server(github_client).await
        }
        Commands::Http { address, options } => {
            init_tracing(options.debug, false);

            run_http_server(address, options).await
        }
    }
}

fn init_tracing(debug: bool, to_stderr: bool) {
    let level = if debug { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("{},{}", level, env!("CARGO_CRATE_NAME")).into());

    if to_stderr {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_ansi(false)) // Disable ANSI color codes
            .init();
    }
}

async fn run_http_server(address: String, options: ServerOptions) -> Result<()> {
    let addr: SocketAddr = address
        .parse()
        .with_context(|| format!("Invalid bind address: {}", address))?;

    tracing::info!("Access the GitHub Explorer MCP Server at http://{}/sse", addr);

    let github_client = options.github_client()?;
    let app = github_explorer::transport::sse_server::SseServerApp::new(addr, github_client);
    app.serve().await?;

    Ok(())
}
