use crate::openapi::{Contact, Extensions, Info};
use crate::td::ThingDescription;
use crate::td::thing::is_http_url;

use super::tables::INFO_PASSTHROUGH;

/// Title used when the TD carries none.
pub const FALLBACK_TITLE: &str = "Thing Description Playground autogenerated OpenAPI object";

/// Version used when the TD carries no `version.instance`.
pub const UNKNOWN_VERSION: &str = "unknown";

/// Build the `info` object from the TD root members.
pub fn build_info(td: &ThingDescription) -> Info {
    // TDs are not validated before conversion, so the title may be missing.
    let title = td
        .title
        .clone()
        .unwrap_or_else(|| FALLBACK_TITLE.to_string());

    let version = td
        .version
        .as_ref()
        .and_then(|v| v.instance.as_deref())
        .filter(|instance| !instance.is_empty())
        .unwrap_or(UNKNOWN_VERSION)
        .to_string();

    let contact = td
        .support
        .as_deref()
        .filter(|support| !support.is_empty())
        .map(contact_from_support);

    Info {
        title,
        version,
        description: td.description.clone(),
        contact,
        extensions: passthrough(td),
    }
}

fn contact_from_support(support: &str) -> Contact {
    if let Some(email) = support.strip_prefix("mailto:") {
        Contact {
            email: Some(email.to_string()),
            ..Default::default()
        }
    } else if is_http_url(support) {
        Contact {
            url: Some(support.to_string()),
            ..Default::default()
        }
    } else {
        let mut extensions = Extensions::new();
        extensions.insert("x-uri".to_string(), support.into());
        Contact {
            extensions,
            ..Default::default()
        }
    }
}

fn passthrough(td: &ThingDescription) -> Extensions {
    INFO_PASSTHROUGH
        .iter()
        .filter_map(|member| {
            td.extra
                .get(*member)
                .map(|value| (format!("x-{member}"), value.clone()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::td;

    fn info_for(json: &str) -> Info {
        build_info(&td::from_json(json).unwrap())
    }

    #[test]
    fn missing_title_and_version_use_fallbacks() {
        let info = info_for("{}");
        assert_eq!(info.title, FALLBACK_TITLE);
        assert_eq!(info.version, "unknown");
        assert!(info.description.is_none());
        assert!(info.contact.is_none());
        assert!(info.extensions.is_empty());
    }

    #[test]
    fn version_instance_is_used() {
        let info = info_for(r#"{"title": "Lamp", "version": {"instance": "1.2.0"}}"#);
        assert_eq!(info.title, "Lamp");
        assert_eq!(info.version, "1.2.0");

        let info = info_for(r#"{"version": {"model": "x"}}"#);
        assert_eq!(info.version, "unknown");
    }

    #[test]
    fn mailto_support_becomes_email() {
        let info = info_for(r#"{"support": "mailto:ops@example.com"}"#);
        let contact = info.contact.unwrap();
        assert_eq!(contact.email.as_deref(), Some("ops@example.com"));
        assert!(contact.url.is_none());
    }

    #[test]
    fn http_support_becomes_url() {
        let info = info_for(r#"{"support": "https://example.com/contact"}"#);
        assert_eq!(
            serde_json::to_value(info.contact.unwrap()).unwrap(),
            serde_json::json!({"url": "https://example.com/contact"})
        );
    }

    #[test]
    fn other_support_becomes_extension() {
        let info = info_for(r#"{"support": "tel:+49123"}"#);
        assert_eq!(
            serde_json::to_value(info.contact.unwrap()).unwrap(),
            serde_json::json!({"x-uri": "tel:+49123"})
        );
    }

    #[test]
    fn empty_title_is_kept() {
        assert_eq!(info_for(r#"{"title": ""}"#).title, "");
    }

    #[test]
    fn empty_support_yields_no_contact() {
        assert!(info_for(r#"{"support": ""}"#).contact.is_none());
    }

    #[test]
    fn known_members_are_passed_through_in_table_order() {
        let info = info_for(
            r#"{"id": "urn:lamp", "@context": "https://www.w3.org/2019/wot/td/v1", "security": ["nosec_sc"]}"#,
        );
        let keys: Vec<&str> = info.extensions.keys().map(String::as_str).collect();
        assert_eq!(keys, ["x-@context", "x-id"]);
        assert_eq!(info.extensions["x-id"], "urn:lamp");
    }
}
