use std::fmt;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// A single schema error, located by the JSON pointer of the offending value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub location: String,
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.location, self.message)
    }
}

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("invalid OpenAPI document: {}", join_violations(.0))]
    Invalid(Vec<Violation>),

    #[error("failed to serialize document for validation: {0}")]
    Schema(#[source] serde_json::Error),
}

fn join_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("failed to render YAML: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}
