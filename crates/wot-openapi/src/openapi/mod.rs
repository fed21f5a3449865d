pub mod media_type;
pub mod operation;
pub mod request_body;
pub mod response;
pub mod server;
pub mod spec;

pub use media_type::MediaType;
pub use operation::{HttpMethod, Operation, PathItem};
pub use request_body::RequestBody;
pub use response::Response;
pub use server::Server;
pub use spec::{Contact, Extensions, ExternalDocs, Info, OPENAPI_VERSION, OpenApiDocument, Tag};
