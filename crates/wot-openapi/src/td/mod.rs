pub mod form;
pub mod thing;

use crate::error::ParseError;
pub use form::{ExpectedResponse, Form, OpValue};
pub use thing::{Affordance, AffordanceKind, ThingDescription, VersionInfo};

/// Parse a Thing Description from JSON.
pub fn from_json(input: &str) -> Result<ThingDescription, ParseError> {
    let td: ThingDescription = serde_json::from_str(input)?;
    Ok(td)
}

/// Parse a Thing Description from YAML.
pub fn from_yaml(input: &str) -> Result<ThingDescription, ParseError> {
    let td: ThingDescription = serde_yaml_ng::from_str(input)?;
    Ok(td)
}
