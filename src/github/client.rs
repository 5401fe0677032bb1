use anyhow::{Context, Result};
use http::header::ACCEPT;
use octocrab::{Octocrab, Page};
use serde::de::DeserializeOwned;
use tokio::time::Duration;
use tracing::{debug, info, warn};

use crate::github::error::{UpstreamErrorKind, upstream_error_detail};

/// Media type that makes the search API include `text_matches` in its items
const TEXT_MATCH_MEDIA_TYPE: &str = "application/vnd.github.text-match+json";

/// Query string parameters for a GitHub REST request, in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(Vec<(&'static str, String)>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a parameter
    pub fn push(mut self, key: &'static str, value: impl ToString) -> Self {
        self.0.push((key, value.to_string()));
        self
    }

    /// Appends a parameter only when a non-empty value is present
    pub fn push_opt<T: ToString>(self, key: &'static str, value: Option<T>) -> Self {
        match value.map(|v| v.to_string()) {
            Some(value) if !value.is_empty() => self.push(key, value),
            _ => self,
        }
    }

    #[cfg(test)]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn pairs(&self) -> &[(&'static str, String)] {
        &self.0
    }
}

#[derive(Clone)]
pub struct GitHubClient {
    pub(crate) client: octocrab::Octocrab,
    /// Same configuration as `client`, but requesting the text-match media type
    pub(crate) text_match_client: octocrab::Octocrab,
    authenticated: bool,
}

impl GitHubClient {
    /// Creates a client for the public GitHub API
    pub fn new(token: Option<String>, timeout: Option<Duration>) -> Result<Self> {
        Self::build(token, timeout, None)
    }

    /// Creates a client for a GitHub Enterprise (or test) API base URI
    pub fn with_base_uri(
        token: Option<String>,
        timeout: Option<Duration>,
        base_uri: &str,
    ) -> Result<Self> {
        Self::build(token, timeout, Some(base_uri))
    }

    fn build(
        token: Option<String>,
        timeout: Option<Duration>,
        base_uri: Option<&str>,
    ) -> Result<Self> {
        let authenticated = token.is_some();
        let client = build_octocrab(token.clone(), timeout, base_uri, false)
            .context("Failed to build GitHub client")?;
        let text_match_client = build_octocrab(token, timeout, base_uri, true)
            .context("Failed to build GitHub text-match client")?;

        Ok(Self {
            client,
            text_match_client,
            authenticated,
        })
    }

    /// Whether requests carry a personal access token
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// GETs a paginated collection (plain array or search envelope)
    ///
    /// Failures come back as the untouched `octocrab::Error` so the tool layer
    /// can surface them verbatim.
    pub async fn get_page<R: DeserializeOwned>(
        &self,
        operation: &str,
        route: &str,
        params: &QueryParams,
    ) -> std::result::Result<Page<R>, octocrab::Error> {
        send(&self.client, operation, route, params).await
    }

    /// GETs a single JSON document
    pub async fn get_item<R: DeserializeOwned>(
        &self,
        operation: &str,
        route: &str,
        params: &QueryParams,
    ) -> std::result::Result<R, octocrab::Error> {
        send(&self.client, operation, route, params).await
    }

    /// GETs a search endpoint asking for `text_matches` in every item
    pub async fn get_text_match_page<R: DeserializeOwned>(
        &self,
        operation: &str,
        route: &str,
        params: &QueryParams,
    ) -> std::result::Result<Page<R>, octocrab::Error> {
        send(&self.text_match_client, operation, route, params).await
    }
}

fn build_octocrab(
    token: Option<String>,
    timeout: Option<Duration>,
    base_uri: Option<&str>,
    text_match: bool,
) -> Result<Octocrab> {
    let mut builder = Octocrab::builder();

    if let Some(token) = token {
        builder = builder.personal_token(token);
    }

    if let Some(base_uri) = base_uri {
        builder = builder
            .base_uri(base_uri)
            .with_context(|| format!("Invalid GitHub API base URI: {}", base_uri))?;
    }

    if text_match {
        builder = builder.add_header(ACCEPT, TEXT_MATCH_MEDIA_TYPE.to_string());
    }

    let timeout_duration = timeout.unwrap_or_else(|| Duration::from_secs(10));
    let connection_timeout = if timeout_duration < Duration::from_secs(10) {
        std::cmp::max(timeout_duration, Duration::from_secs(1))
    } else {
        Duration::from_secs(30)
    };

    let read_write_timeout = std::cmp::max(timeout_duration, Duration::from_secs(1));

    builder = builder
        .set_connect_timeout(Some(connection_timeout))
        .set_read_timeout(Some(read_write_timeout))
        .set_write_timeout(Some(read_write_timeout));

    Ok(builder.build()?)
}

async fn send<R: octocrab::FromResponse>(
    client: &Octocrab,
    operation: &str,
    route: &str,
    params: &QueryParams,
) -> std::result::Result<R, octocrab::Error> {
    debug!(
        "Starting GitHub request {}: GET {} {:?}",
        operation,
        route,
        params.pairs()
    );
    let start_time = std::time::Instant::now();

    let query = if params.pairs().is_empty() {
        None
    } else {
        Some(params.pairs())
    };

    match client.get::<R, _, _>(route, query).await {
        Ok(response) => {
            info!(
                "GitHub request {} completed in {:?}",
                operation,
                start_time.elapsed()
            );
            Ok(response)
        }
        Err(error) => {
            warn!(
                "GitHub request {} failed after {:?} ({}): {}",
                operation,
                start_time.elapsed(),
                UpstreamErrorKind::classify(&error),
                upstream_error_detail(&error)
            );
            Err(error)
        }
    }
}

/// Builds `/repos/{owner}/{repo}{suffix}` with percent-encoded owner and repository
pub fn repo_route(owner: &str, repository: &str, suffix: &str) -> String {
    format!(
        "/repos/{}/{}{}",
        urlencoding::encode(owner),
        urlencoding::encode(repository),
        suffix
    )
}

/// Percent-encodes every segment of a slash separated path, keeping the slashes
pub fn encode_path(path: &str) -> String {
    path.trim_matches('/')
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}
