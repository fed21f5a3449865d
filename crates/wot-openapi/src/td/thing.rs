use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::form::Form;

/// The three interaction affordance groups of a Thing Description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AffordanceKind {
    Property,
    Action,
    Event,
}

impl AffordanceKind {
    /// All groups, in the order they are crawled.
    pub const ALL: [AffordanceKind; 3] = [
        AffordanceKind::Property,
        AffordanceKind::Action,
        AffordanceKind::Event,
    ];

    /// The TD member name of the group, e.g. `properties`.
    pub fn group(&self) -> &'static str {
        match self {
            AffordanceKind::Property => "properties",
            AffordanceKind::Action => "actions",
            AffordanceKind::Event => "events",
        }
    }

    /// The singular name, used as the OpenAPI tag.
    pub fn singular(&self) -> &'static str {
        match self {
            AffordanceKind::Property => "property",
            AffordanceKind::Action => "action",
            AffordanceKind::Event => "event",
        }
    }
}

/// The `version` member of a TD.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct VersionInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,

    #[serde(flatten)]
    pub extra: IndexMap<String, serde_json::Value>,
}

/// A property, action or event exposed by a Thing.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Affordance {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub titles: Option<serde_json::Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub descriptions: Option<serde_json::Value>,

    #[serde(default)]
    pub forms: Vec<Form>,

    /// Data schema and other members not used by the translator.
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_json::Value>,
}

/// A Web of Things Thing Description.
///
/// Only the members the OpenAPI translator reads are typed; everything else
/// lands in `extra` so vendor-extension passthrough can copy it verbatim.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ThingDescription {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<VersionInfo>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub support: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<IndexMap<String, Affordance>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub actions: Option<IndexMap<String, Affordance>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub events: Option<IndexMap<String, Affordance>>,

    /// Root-level forms, e.g. `readallproperties`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forms: Option<Vec<Form>>,

    #[serde(flatten)]
    pub extra: IndexMap<String, serde_json::Value>,
}

impl ThingDescription {
    /// The affordances of one group, or `None` when the group key is absent.
    pub fn affordances(&self, kind: AffordanceKind) -> Option<&IndexMap<String, Affordance>> {
        match kind {
            AffordanceKind::Property => self.properties.as_ref(),
            AffordanceKind::Action => self.actions.as_ref(),
            AffordanceKind::Event => self.events.as_ref(),
        }
    }

    /// Whether `base` is an HTTP(S) URL that relative hrefs can hang off.
    pub fn has_http_base(&self) -> bool {
        self.base.as_deref().is_some_and(is_http_url)
    }
}

pub(crate) fn is_http_url(s: &str) -> bool {
    s.starts_with("http://") || s.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_members_are_kept() {
        let td: ThingDescription = serde_json::from_str(
            r#"{"title": "Lamp", "@context": "https://www.w3.org/2019/wot/td/v1", "id": "urn:lamp"}"#,
        )
        .unwrap();
        assert_eq!(td.title.as_deref(), Some("Lamp"));
        assert_eq!(td.extra.len(), 2);
        assert_eq!(td.extra["id"], "urn:lamp");
    }

    #[test]
    fn http_base_detection() {
        let mut td = ThingDescription {
            base: Some("coap://lamp.local".into()),
            ..Default::default()
        };
        assert!(!td.has_http_base());
        td.base = Some("https://lamp.local".into());
        assert!(td.has_http_base());
        td.base = None;
        assert!(!td.has_http_base());
    }

    #[test]
    fn absent_group_is_none_but_empty_group_is_some() {
        let td: ThingDescription = serde_json::from_str(r#"{"actions": {}}"#).unwrap();
        assert!(td.affordances(AffordanceKind::Property).is_none());
        assert!(td.affordances(AffordanceKind::Action).unwrap().is_empty());
    }
}
