use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::media_type::MediaType;

/// A response definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub description: String,

    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub content: IndexMap<String, MediaType>,
}

impl Response {
    /// A response carrying a single content type with an empty media type.
    pub fn with_content(description: impl Into<String>, content_type: impl Into<String>) -> Self {
        let mut content = IndexMap::new();
        content.insert(content_type.into(), MediaType::default());
        Self {
            description: description.into(),
            content,
        }
    }
}
