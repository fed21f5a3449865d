use crate::openapi::Server;
use crate::td::ThingDescription;

pub const BASE_SERVER_DESCRIPTION: &str = "TD base url";

/// The Thing's `base`, if any, as the document-level server.
pub fn collect_servers(td: &ThingDescription) -> Vec<Server> {
    td.base
        .iter()
        .map(|base| Server::new(base.as_str()).with_description(BASE_SERVER_DESCRIPTION))
        .collect()
}
