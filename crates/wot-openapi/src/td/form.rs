use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The `op` member of a form: a single operation type or a list of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OpValue {
    Single(String),
    Multiple(Vec<String>),
}

impl OpValue {
    /// Iterate the operation names in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        let slice = match self {
            OpValue::Single(op) => std::slice::from_ref(op),
            OpValue::Multiple(ops) => ops.as_slice(),
        };
        slice.iter().map(String::as_str)
    }

    /// Space-joined operation names.
    pub fn joined(&self) -> String {
        self.iter().collect::<Vec<_>>().join(" ")
    }
}

/// Expected response of a form.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ExpectedResponse {
    #[serde(rename = "contentType", skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
}

/// A protocol binding of an affordance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Form {
    pub href: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub op: Option<OpValue>,

    #[serde(rename = "contentType", skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<ExpectedResponse>,

    /// HTTP binding method hint.
    #[serde(rename = "htv:methodName", skip_serializing_if = "Option::is_none")]
    pub method_name: Option<String>,

    #[serde(flatten)]
    pub extra: IndexMap<String, serde_json::Value>,
}

impl Form {
    /// A bare form with only an `href`.
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            op: None,
            content_type: None,
            response: None,
            method_name: None,
            extra: IndexMap::new(),
        }
    }

    /// `response.contentType`, falling back to `contentType`.
    pub fn response_content_type(&self) -> Option<&str> {
        self.response
            .as_ref()
            .and_then(|r| r.content_type.as_deref())
            .or(self.content_type.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn op_accepts_string_or_list() {
        let single: Form = serde_json::from_str(r#"{"href": "/a", "op": "readproperty"}"#).unwrap();
        assert_eq!(single.op, Some(OpValue::Single("readproperty".into())));

        let many: Form =
            serde_json::from_str(r#"{"href": "/a", "op": ["readproperty", "writeproperty"]}"#)
                .unwrap();
        assert_eq!(many.op.unwrap().joined(), "readproperty writeproperty");
    }

    #[test]
    fn response_content_type_prefers_response_member() {
        let form: Form = serde_json::from_str(
            r#"{"href": "/a", "contentType": "text/plain", "response": {"contentType": "image/png"}}"#,
        )
        .unwrap();
        assert_eq!(form.response_content_type(), Some("image/png"));

        let form: Form =
            serde_json::from_str(r#"{"href": "/a", "contentType": "text/plain"}"#).unwrap();
        assert_eq!(form.response_content_type(), Some("text/plain"));

        assert_eq!(Form::new("/a").response_content_type(), None);
    }

    #[test]
    fn method_hint_is_read_from_htv_member() {
        let form: Form =
            serde_json::from_str(r#"{"href": "/a", "htv:methodName": "DELETE"}"#).unwrap();
        assert_eq!(form.method_name.as_deref(), Some("DELETE"));
    }
}
