use serde::{Deserialize, Serialize};

/// A media type object. Generated documents leave it empty since TDs carry
/// data schemas in a format OpenAPI cannot reference directly.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MediaType {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<serde_json::Value>,
}
