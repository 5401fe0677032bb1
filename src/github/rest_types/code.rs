use serde::Deserialize;

use super::RawUser;
use crate::types::{CodeFileInfo, MatchDetail, TextMatch};

/// Item of a code search response
#[derive(Debug, Clone, Deserialize)]
pub struct RawCodeItem {
    pub name: String,
    pub path: String,
    #[serde(default)]
    pub html_url: Option<String>,
    pub repository: RawCodeRepository,
    /// Only sent when the text-match media type was requested
    #[serde(default)]
    pub text_matches: Vec<RawTextMatch>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawCodeRepository {
    pub name: String,
    #[serde(default)]
    pub owner: Option<RawUser>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawTextMatch {
    #[serde(default)]
    pub fragment: String,
    #[serde(default)]
    pub matches: Vec<RawMatchDetail>,
    #[serde(default)]
    pub object_type: Option<String>,
    #[serde(default)]
    pub object_url: Option<String>,
    #[serde(default)]
    pub property: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawMatchDetail {
    #[serde(default)]
    pub indices: Vec<u64>,
    #[serde(default)]
    pub text: String,
}

impl From<RawCodeItem> for CodeFileInfo {
    fn from(item: RawCodeItem) -> Self {
        Self {
            name: item.name,
            path: item.path,
            repository: item.repository.name,
            owner: item.repository.owner.map(|owner| owner.login),
            html_url: item.html_url,
            text_matches: item.text_matches.into_iter().map(TextMatch::from).collect(),
        }
    }
}

impl From<RawTextMatch> for TextMatch {
    fn from(text_match: RawTextMatch) -> Self {
        Self {
            fragment: text_match.fragment,
            matches: text_match
                .matches
                .into_iter()
                .map(|detail| MatchDetail {
                    indices: detail.indices,
                    text: detail.text,
                })
                .collect(),
            object_type: text_match.object_type,
            object_url: text_match.object_url,
            property: text_match.property,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_item_with_text_matches() {
        let raw: RawCodeItem = serde_json::from_value(serde_json::json!({
            "name": "classes.js",
            "path": "src/attributes/classes.js",
            "sha": "d7212f9dee2dcc18f084d7df8f417b80846ded5a",
            "html_url": "https://github.com/jquery/jquery/blob/825ac3773694e0cd23ee74895fd5aeb535b27da4/src/attributes/classes.js",
            "repository": {
                "name": "jquery",
                "full_name": "jquery/jquery",
                "owner": { "login": "jquery", "type": "Organization" }
            },
            "score": 1.0,
            "text_matches": [{
                "object_url": "https://api.github.com/repositories/167174/contents/src/attributes/classes.js",
                "object_type": "FileContent",
                "property": "content",
                "fragment": "addClass: function( value ) {",
                "matches": [{ "text": "addClass", "indices": [0, 8] }]
            }]
        }))
        .unwrap();

        let file = CodeFileInfo::from(raw);
        assert_eq!(file.name, "classes.js");
        assert_eq!(file.repository, "jquery");
        assert_eq!(file.owner.as_deref(), Some("jquery"));
        assert_eq!(file.text_matches.len(), 1);
        assert_eq!(file.text_matches[0].matches[0].text, "addClass");
        assert_eq!(file.text_matches[0].matches[0].indices, vec![0, 8]);
    }

    #[test]
    fn test_code_item_without_text_matches() {
        let raw: RawCodeItem = serde_json::from_value(serde_json::json!({
            "name": "lib.rs",
            "path": "src/lib.rs",
            "repository": { "name": "octocrab" }
        }))
        .unwrap();

        let file = CodeFileInfo::from(raw);
        assert!(file.text_matches.is_empty());
        assert_eq!(file.owner, None);
    }
}
