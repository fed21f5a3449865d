use crate::error::ConvertError;
use crate::openapi::{OPENAPI_VERSION, OpenApiDocument};
use crate::td::ThingDescription;
use crate::validate::validate;

use super::info::build_info;
use super::paths::crawl_paths;
use super::servers::collect_servers;
use super::tags::build_tags;

/// A validated OpenAPI document together with its YAML rendering.
#[derive(Debug, Clone)]
pub struct Conversion {
    pub json: OpenApiDocument,
    pub yaml: String,
}

/// Assemble the OpenAPI document for a TD without validating it.
pub fn build_document(td: &ThingDescription) -> OpenApiDocument {
    OpenApiDocument {
        openapi: OPENAPI_VERSION.to_string(),
        info: build_info(td),
        paths: crawl_paths(td),
        servers: collect_servers(td),
        tags: build_tags(td),
    }
}

/// Translate a Thing Description into a validated OpenAPI 3.0 document.
///
/// A document failing validation is logged before the error is returned.
pub fn to_openapi(td: &ThingDescription) -> Result<Conversion, ConvertError> {
    let doc = build_document(td);

    if let Err(err) = validate(&doc) {
        match serde_json::to_string_pretty(&doc) {
            Ok(dump) => log::error!("generated document is invalid:\n{dump}"),
            Err(_) => log::error!("generated document is invalid: {doc:?}"),
        }
        return Err(err.into());
    }

    let yaml = serde_yaml_ng::to_string(&doc)?;
    Ok(Conversion { json: doc, yaml })
}
