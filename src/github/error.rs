/// Classification of GitHub API failures
///
/// Errors are never retried; the classification only drives logging and the
/// message reported back to the tool caller. The underlying `octocrab::Error`
/// is always kept intact by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpstreamErrorKind {
    /// 429, or a 403 whose message mentions the rate limit
    RateLimited,
    /// 401
    Unauthorized,
    /// 403 that is not a rate limit
    Forbidden,
    /// 404
    NotFound,
    /// Any other 4xx
    ClientError(u16),
    /// 5xx
    ServerError(u16),
    /// Connection, TLS or timeout failure below the HTTP layer
    Transport,
    /// Response body did not match the expected shape
    Decode,
    /// Anything octocrab reports that fits none of the above
    Other,
}

impl UpstreamErrorKind {
    /// Classify an octocrab error by status code and error variant
    pub fn classify(error: &octocrab::Error) -> Self {
        let kind = match error {
            octocrab::Error::GitHub { source, .. } => {
                let status = source.status_code.as_u16();
                match status {
                    429 => Self::RateLimited,
                    401 => Self::Unauthorized,
                    403 => {
                        if source.message.contains("rate limit")
                            || source.message.contains("API rate limit")
                        {
                            Self::RateLimited
                        } else {
                            Self::Forbidden
                        }
                    }
                    404 => Self::NotFound,
                    400..=499 => Self::ClientError(status),
                    500..=599 => Self::ServerError(status),
                    _ => Self::Other,
                }
            }
            octocrab::Error::Http { .. } | octocrab::Error::Hyper { .. } => Self::Transport,
            octocrab::Error::Json { .. } | octocrab::Error::Serde { .. } => Self::Decode,
            _ => Self::Other,
        };

        tracing::debug!("Classified GitHub API error as {}: {:?}", kind, error);
        kind
    }
}

impl std::fmt::Display for UpstreamErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RateLimited => write!(f, "rate limited"),
            Self::Unauthorized => write!(f, "unauthorized"),
            Self::Forbidden => write!(f, "forbidden"),
            Self::NotFound => write!(f, "not found"),
            Self::ClientError(status) => write!(f, "client error {}", status),
            Self::ServerError(status) => write!(f, "server error {}", status),
            Self::Transport => write!(f, "transport error"),
            Self::Decode => write!(f, "unexpected response body"),
            Self::Other => write!(f, "request failed"),
        }
    }
}

/// Human readable detail of an octocrab error
///
/// GitHub API errors carry a status code and message that are far more useful
/// to the tool caller than octocrab's generic display text.
pub fn upstream_error_detail(error: &octocrab::Error) -> String {
    match error {
        octocrab::Error::GitHub { source, .. } => match &source.documentation_url {
            Some(documentation_url) => format!(
                "status {}: {} ({})",
                source.status_code.as_u16(),
                source.message,
                documentation_url
            ),
            None => format!("status {}: {}", source.status_code.as_u16(), source.message),
        },
        other => other.to_string(),
    }
}
