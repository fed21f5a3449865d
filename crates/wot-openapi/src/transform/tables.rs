//! Fixed lookup data shared by the mapping stages.

use crate::openapi::HttpMethod;
use crate::td::AffordanceKind;

/// TD root members copied into `info` as `x-<member>`.
pub const INFO_PASSTHROUGH: [&str; 9] = [
    "@context",
    "@type",
    "created",
    "descriptions",
    "id",
    "links",
    "modified",
    "name",
    "titles",
];

/// Accepted `htv:methodName` values. Matching is case-sensitive.
const METHOD_HINTS: [(&str, HttpMethod); 5] = [
    ("GET", HttpMethod::Get),
    ("PUT", HttpMethod::Put),
    ("POST", HttpMethod::Post),
    ("DELETE", HttpMethod::Delete),
    ("PATCH", HttpMethod::Patch),
];

/// TD operation types with an HTTP method binding.
const OP_METHODS: [(&str, HttpMethod); 7] = [
    ("readproperty", HttpMethod::Get),
    ("writeproperty", HttpMethod::Put),
    ("invokeaction", HttpMethod::Post),
    ("readallproperties", HttpMethod::Get),
    ("writeallproperties", HttpMethod::Put),
    ("readmultipleproperties", HttpMethod::Get),
    ("writemultipleproperties", HttpMethod::Put),
];

/// Method for an `htv:methodName` hint, `None` if the hint is not recognized.
pub fn method_hint(hint: &str) -> Option<HttpMethod> {
    METHOD_HINTS
        .iter()
        .find(|(name, _)| *name == hint)
        .map(|(_, method)| *method)
}

/// Method bound to a TD operation type. Event operations and unknown
/// names have no binding and yield `None`.
pub fn op_method(op: &str) -> Option<HttpMethod> {
    OP_METHODS
        .iter()
        .find(|(name, _)| *name == op)
        .map(|(_, method)| *method)
}

/// Operation types assumed for a form that declares no `op`.
pub fn default_ops(kind: AffordanceKind) -> &'static [&'static str] {
    match kind {
        AffordanceKind::Property => &["readproperty", "writeproperty"],
        AffordanceKind::Action => &["invokeaction"],
        AffordanceKind::Event => &[],
    }
}

/// Documentation attached to the tag of an affordance group.
pub struct TagInfo {
    pub description: &'static str,
    pub docs_url: &'static str,
    pub docs_description: &'static str,
}

pub fn tag_info(kind: AffordanceKind) -> &'static TagInfo {
    match kind {
        AffordanceKind::Property => &TagInfo {
            description: "A property can expose a variable of a Thing, this variable might be readable, writable and/or observable.",
            docs_url: "https://www.w3.org/TR/wot-thing-description/#propertyaffordance",
            docs_description: "Find out more about Property Affordances.",
        },
        AffordanceKind::Action => &TagInfo {
            description: "An action can expose something to be executed by a Thing, an action can be invoked.",
            docs_url: "https://www.w3.org/TR/wot-thing-description/#actionaffordance",
            docs_description: "Find out more about Action Affordances.",
        },
        AffordanceKind::Event => &TagInfo {
            description: "An event can expose a notification by a Thing, this notification can be subscribed and/or unsubscribed.",
            docs_url: "https://www.w3.org/TR/wot-thing-description/#eventaffordance",
            docs_description: "Find out more about Event Affordances.",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_hints_are_case_sensitive() {
        assert_eq!(method_hint("PATCH"), Some(HttpMethod::Patch));
        assert_eq!(method_hint("patch"), None);
        assert_eq!(method_hint("HEAD"), None);
    }

    #[test]
    fn event_ops_have_no_method() {
        assert_eq!(op_method("subscribeevent"), None);
        assert_eq!(op_method("observeproperty"), None);
        assert_eq!(op_method("writemultipleproperties"), Some(HttpMethod::Put));
    }
}
