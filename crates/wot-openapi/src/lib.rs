//! Translate Web of Things Thing Descriptions into OpenAPI 3.0 documents.

pub mod error;
pub mod openapi;
pub mod td;
pub mod transform;
pub mod validate;

pub use error::{ConvertError, ParseError, ValidationError};
pub use transform::{Conversion, to_openapi};
