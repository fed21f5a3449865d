use indexmap::IndexMap;

use crate::openapi::{Extensions, HttpMethod, Operation, PathItem, RequestBody, Response, Server};
use crate::td::thing::is_http_url;
use crate::td::{Affordance, AffordanceKind, Form, OpValue, ThingDescription};

use super::tables::{default_ops, method_hint, op_method};

/// Content type assumed when a form declares none.
pub const DEFAULT_CONTENT_TYPE: &str = "application/json";

/// Description of the `default` response of every generated operation.
pub const DEFAULT_RESPONSE_DESCRIPTION: &str = "the default Thing response";

/// Operation metadata shared by every form of one affordance.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationInfo {
    pub tags: Vec<String>,
    pub summary: String,
    pub description: Option<String>,
    pub extensions: Extensions,
}

impl OperationInfo {
    /// Metadata for an affordance of the given group.
    pub fn for_affordance(kind: AffordanceKind, name: &str, affordance: &Affordance) -> Self {
        let headline = format!("TD Interaction: {}{}", kind.group(), name);
        let mut description = String::new();

        let summary = match affordance.title.as_deref().filter(|t| !t.is_empty()) {
            Some(title) => {
                description.push_str(&headline);
                description.push('\n');
                title.to_string()
            }
            None => headline,
        };
        if let Some(text) = &affordance.description {
            description.push_str(text);
        }

        let mut extensions = Extensions::new();
        if let Some(descriptions) = &affordance.descriptions {
            extensions.insert("x-descriptions".to_string(), descriptions.clone());
        }
        if let Some(titles) = &affordance.titles {
            extensions.insert("x-titles".to_string(), titles.clone());
        }

        Self {
            tags: vec![kind.singular().to_string()],
            summary,
            description: Some(description),
            extensions,
        }
    }

    /// Metadata for a root-level form, summarized by its operation types.
    pub fn for_root_form(op: &OpValue) -> Self {
        Self {
            tags: vec![AffordanceKind::Property.singular().to_string()],
            summary: op.joined(),
            description: None,
            extensions: Extensions::new(),
        }
    }
}

/// Where a form's `href` points once split into server and path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub path: String,
    pub server: Option<String>,
}

/// Forms are only translated when they can be reached over HTTP: either the
/// href is an absolute `http(s)://` URL, or it carries no scheme at all and the
/// TD has an HTTP(S) `base` to resolve it against. Every other form (CoAP,
/// MQTT, relative hrefs without a usable base) is skipped without error.
pub fn is_eligible(href: &str, http_base: bool) -> bool {
    is_http_url(href) || (http_base && !href.contains("://"))
}

/// Split an href into its server (scheme + authority) and path.
///
/// `http://example.com/asdf/1` yields server `http://example.com` and path
/// `/asdf/1`. Relative hrefs yield no server and the href as path.
pub fn resolve_target(href: &str) -> Target {
    let scheme = ["http://", "https://"]
        .into_iter()
        .find(|scheme| href.starts_with(scheme));

    match scheme {
        Some(scheme) => {
            let rest = &href[scheme.len()..];
            let (authority, remainder) = rest.split_once('/').unwrap_or((rest, ""));
            Target {
                path: format!("/{remainder}"),
                server: Some(format!("{scheme}{authority}")),
            }
        }
        None if href.starts_with('/') => Target {
            path: href.to_string(),
            server: None,
        },
        None => Target {
            path: format!("/{href}"),
            server: None,
        },
    }
}

/// Methods a form binds to. A recognized `htv:methodName` wins; otherwise each
/// operation type is looked up and those without an HTTP binding are dropped.
pub fn resolve_methods<'a>(
    form: &Form,
    ops: impl IntoIterator<Item = &'a str>,
) -> Vec<HttpMethod> {
    if let Some(method) = form.method_name.as_deref().and_then(method_hint) {
        return vec![method];
    }
    ops.into_iter().filter_map(op_method).collect()
}

/// The `op` of a form, treating an empty string as undeclared.
fn declared_op(form: &Form) -> Option<&OpValue> {
    form.op
        .as_ref()
        .filter(|op| !matches!(op, OpValue::Single(s) if s.is_empty()))
}

/// Accumulates path items, merging forms that land on the same path and method.
pub struct PathCrawler {
    paths: IndexMap<String, PathItem>,
    http_base: bool,
}

impl PathCrawler {
    pub fn new(http_base: bool) -> Self {
        Self {
            paths: IndexMap::new(),
            http_base,
        }
    }

    /// Register one form under the given operation metadata.
    pub fn add_form<'a>(
        &mut self,
        form: &Form,
        info: &OperationInfo,
        ops: impl IntoIterator<Item = &'a str>,
    ) {
        if !is_eligible(&form.href, self.http_base) {
            log::debug!("skipping form with non-HTTP href {}", form.href);
            return;
        }

        let methods = resolve_methods(form, ops);
        if methods.is_empty() {
            log::debug!("skipping form {} without an HTTP method", form.href);
            return;
        }

        let target = resolve_target(&form.href);
        let response_type = form
            .response_content_type()
            .unwrap_or(DEFAULT_CONTENT_TYPE);
        let request_type = form.content_type.as_deref().unwrap_or(DEFAULT_CONTENT_TYPE);

        let item = self.paths.entry(target.path).or_default();
        for method in methods {
            let slot = item.slot_mut(method);
            match slot {
                // Already reached, e.g. through the https variant of the same
                // href: keep the body, only record the extra server.
                Some(existing) => {
                    if let Some(server) = &target.server {
                        existing.servers.push(Server::new(server.as_str()));
                    }
                }
                None => {
                    *slot = Some(new_operation(
                        info,
                        response_type,
                        request_type,
                        target.server.as_deref(),
                    ));
                }
            }
        }
    }

    pub fn finish(self) -> IndexMap<String, PathItem> {
        self.paths
    }
}

fn new_operation(
    info: &OperationInfo,
    response_type: &str,
    request_type: &str,
    server: Option<&str>,
) -> Operation {
    let mut responses = IndexMap::new();
    responses.insert(
        "default".to_string(),
        Response::with_content(DEFAULT_RESPONSE_DESCRIPTION, response_type),
    );

    Operation {
        tags: info.tags.clone(),
        summary: Some(info.summary.clone()),
        description: info.description.clone(),
        request_body: Some(RequestBody::for_content_type(request_type)),
        responses,
        servers: server.map(Server::new).into_iter().collect(),
        extensions: info.extensions.clone(),
    }
}

/// Crawl every affordance form, then the root-level forms, into OpenAPI paths.
pub fn crawl_paths(td: &ThingDescription) -> IndexMap<String, PathItem> {
    let mut crawler = PathCrawler::new(td.has_http_base());

    for kind in AffordanceKind::ALL {
        let Some(affordances) = td.affordances(kind) else {
            continue;
        };
        for (name, affordance) in affordances {
            let info = OperationInfo::for_affordance(kind, name, affordance);
            for form in &affordance.forms {
                match declared_op(form) {
                    Some(op) => crawler.add_form(form, &info, op.iter()),
                    None => crawler.add_form(form, &info, default_ops(kind).iter().copied()),
                }
            }
        }
    }

    // Root-level forms must say what they do.
    for form in td.forms.iter().flatten() {
        if let Some(op) = declared_op(form) {
            let info = OperationInfo::for_root_form(op);
            crawler.add_form(form, &info, op.iter());
        }
    }

    crawler.finish()
}
