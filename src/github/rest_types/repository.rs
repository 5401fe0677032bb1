use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::RawUser;
use crate::formatter::{display_datetime_opt, truncate_chars};
use crate::types::RepositoryInfo;

const ORGANIZATION_ACCOUNT_TYPE: &str = "Organization";

#[derive(Debug, Clone, Deserialize)]
pub struct RawRepository {
    pub name: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub owner: Option<RawUser>,
    #[serde(default)]
    pub organization: Option<RawUser>,
    #[serde(default)]
    pub default_branch: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub forks_count: u64,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub archived: bool,
}

impl RawRepository {
    /// Maps into a record, cutting the description to `description_truncate_size` characters
    pub fn into_repository_info(self, description_truncate_size: usize) -> RepositoryInfo {
        // Search results carry no `organization` object; an organization owner stands in for it.
        let organization = match self.organization {
            Some(organization) => Some(organization.login),
            None => self
                .owner
                .as_ref()
                .filter(|owner| owner.account_type.as_deref() == Some(ORGANIZATION_ACCOUNT_TYPE))
                .map(|owner| owner.login.clone()),
        };

        RepositoryInfo {
            owner: self.owner.map(|owner| owner.login),
            name: self.name,
            organization,
            full_name: self.full_name,
            default_branch: self.default_branch,
            description: self
                .description
                .map(|description| truncate_chars(&description, description_truncate_size)),
            stargazers_count: self.stargazers_count,
            forks_count: self.forks_count,
            language: self.language,
            created_at: display_datetime_opt(self.created_at.as_ref()),
            updated_at: display_datetime_opt(self.updated_at.as_ref()),
            archived: self.archived,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_repository(description: &str, owner_type: &str) -> RawRepository {
        serde_json::from_value(serde_json::json!({
            "id": 1,
            "name": "tokio",
            "full_name": "tokio-rs/tokio",
            "owner": { "login": "tokio-rs", "id": 2, "type": owner_type },
            "description": description,
            "default_branch": "master",
            "stargazers_count": 25000,
            "forks_count": 2300,
            "language": "Rust",
            "created_at": "2016-09-09T17:07:34Z",
            "updated_at": "2024-05-01T12:00:00Z",
            "archived": false
        }))
        .unwrap()
    }

    #[test]
    fn test_repository_mapping() {
        let info = raw_repository("A runtime", "Organization").into_repository_info(1024);

        assert_eq!(info.owner.as_deref(), Some("tokio-rs"));
        assert_eq!(info.organization.as_deref(), Some("tokio-rs"));
        assert_eq!(info.full_name.as_deref(), Some("tokio-rs/tokio"));
        assert_eq!(info.default_branch.as_deref(), Some("master"));
        assert_eq!(info.description.as_deref(), Some("A runtime"));
        assert_eq!(info.stargazers_count, 25000);
        assert_eq!(info.created_at.as_deref(), Some("2016-09-09 17:07:34"));
        assert!(!info.archived);
    }

    #[test]
    fn test_user_owned_repository_has_no_organization() {
        let info = raw_repository("x", "User").into_repository_info(1024);
        assert_eq!(info.organization, None);
    }

    #[test]
    fn test_description_truncation() {
        let info = raw_repository("0123456789ABCDE", "User").into_repository_info(10);
        assert_eq!(info.description.as_deref(), Some("0123456789"));

        let info = raw_repository("short", "User").into_repository_info(10);
        assert_eq!(info.description.as_deref(), Some("short"));
    }
}
