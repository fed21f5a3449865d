pub mod info;
pub mod paths;
pub mod servers;
pub mod tables;
pub mod tags;
pub mod td_to_openapi;

pub use td_to_openapi::{Conversion, build_document, to_openapi};
