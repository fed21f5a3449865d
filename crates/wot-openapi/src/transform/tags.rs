use crate::openapi::{ExternalDocs, Tag};
use crate::td::{AffordanceKind, ThingDescription};

use super::tables::tag_info;

/// One tag per affordance group whose key is present, empty or not.
pub fn build_tags(td: &ThingDescription) -> Vec<Tag> {
    AffordanceKind::ALL
        .into_iter()
        .filter(|kind| td.affordances(*kind).is_some())
        .map(group_tag)
        .collect()
}

fn group_tag(kind: AffordanceKind) -> Tag {
    let info = tag_info(kind);
    Tag {
        name: kind.singular().to_string(),
        description: Some(info.description.to_string()),
        external_docs: Some(
            ExternalDocs::new(info.docs_url).with_description(info.docs_description),
        ),
    }
}
