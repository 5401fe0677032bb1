use std::fmt;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::Deserialize;

use crate::types::DirectoryOrFileInfo;

pub const CONTENT_TYPE_FILE: &str = "file";
const BASE64_ENCODING: &str = "base64";

/// Why an entry's inline content could not be turned into text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentDecodeError {
    InvalidBase64(base64::DecodeError),
    /// GitHub sent no inline payload in a form we can read (`none` is used for files over 1 MB)
    UnsupportedEncoding(String),
}

impl fmt::Display for ContentDecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentDecodeError::InvalidBase64(e) => write!(f, "invalid base64 content: {}", e),
            ContentDecodeError::UnsupportedEncoding(encoding) => write!(
                f,
                "content is not available inline (encoding '{}')",
                encoding
            ),
        }
    }
}

impl std::error::Error for ContentDecodeError {}

/// Response of the contents endpoint: a listing for directories, a single entry otherwise
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawContents {
    Listing(Vec<RawContent>),
    Entry(RawContent),
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawContent {
    pub name: String,
    pub path: String,
    #[serde(default)]
    pub size: u64,
    /// `file`, `dir`, `symlink` or `submodule`
    #[serde(rename = "type")]
    pub content_type: String,
    #[serde(default)]
    pub encoding: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

impl RawContent {
    pub fn is_file(&self) -> bool {
        self.content_type == CONTENT_TYPE_FILE
    }

    /// Decodes the inline content
    ///
    /// Base64 payloads are wrapped at 60 columns by GitHub, so whitespace is
    /// dropped before decoding. Bytes that are not valid UTF-8 are replaced.
    /// Content without an encoding is taken as is; any other encoding is an error.
    pub fn decoded_content(&self) -> Result<String, ContentDecodeError> {
        let content = self.content.as_deref().unwrap_or_default();

        match self.encoding.as_deref() {
            Some(BASE64_ENCODING) => {
                let compact: String = content.split_whitespace().collect();
                let bytes = STANDARD
                    .decode(compact)
                    .map_err(ContentDecodeError::InvalidBase64)?;
                Ok(String::from_utf8_lossy(&bytes).into_owned())
            }
            None => Ok(content.to_string()),
            Some(other) => Err(ContentDecodeError::UnsupportedEncoding(other.to_string())),
        }
    }
}

impl From<RawContent> for DirectoryOrFileInfo {
    fn from(content: RawContent) -> Self {
        Self {
            name: content.name,
            path: content.path,
            size: content.size,
            entry_type: content.content_type,
            encoding: content.encoding,
        }
    }
}
