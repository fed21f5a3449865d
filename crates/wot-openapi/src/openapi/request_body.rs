use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::media_type::MediaType;

/// A request body definition.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RequestBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub content: IndexMap<String, MediaType>,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub required: bool,
}

impl RequestBody {
    /// An optional body accepting one content type.
    pub fn for_content_type(content_type: impl Into<String>) -> Self {
        let mut content = IndexMap::new();
        content.insert(content_type.into(), MediaType::default());
        Self {
            content,
            ..Default::default()
        }
    }
}
