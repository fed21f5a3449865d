use std::sync::LazyLock;

use serde_json::Value;

use crate::error::{ValidationError, Violation};
use crate::openapi::OpenApiDocument;

/// Official OpenAPI 3.0 JSON Schema (2021-09-28 revision).
const OPENAPI_30_SCHEMA: &str = include_str!("../schemas/openapi-3.0.json");

static VALIDATOR: LazyLock<jsonschema::Validator> = LazyLock::new(|| {
    let schema: Value =
        serde_json::from_str(OPENAPI_30_SCHEMA).expect("embedded OpenAPI schema should be JSON");
    jsonschema::options()
        .should_validate_formats(true)
        .build(&schema)
        .expect("embedded OpenAPI schema should compile")
});

/// Check a document against the OpenAPI 3.0 JSON Schema.
///
/// Every schema error is collected, located by the JSON pointer of the
/// offending value.
pub fn validate(doc: &OpenApiDocument) -> Result<(), ValidationError> {
    let value = serde_json::to_value(doc).map_err(ValidationError::Schema)?;
    validate_value(&value)
}

/// Check an already serialized document.
pub fn validate_value(value: &Value) -> Result<(), ValidationError> {
    let violations: Vec<Violation> = VALIDATOR
        .iter_errors(value)
        .map(|err| Violation {
            location: err.instance_path.to_string(),
            message: err.to_string(),
        })
        .collect();

    if violations.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::Invalid(violations))
    }
}
