//! Netlify/Lambda style single-invocation surface.
//!
//! One event in, one response out. Routing and every status code come from
//! the same endpoint contract the HTTP server uses.

use std::collections::{BTreeMap, HashMap};

use recetario_core::domain::{
    assistant::ports::AssistantService,
    catalog::ports::CatalogService,
    contract::{
        entities::{ContractRequest, ContractResponse, Endpoint, RequestMethod},
        handle, route_not_found,
    },
};
use serde::{Deserialize, Serialize};
use tracing::info;

const FUNCTIONS_PREFIX: &str = ".netlify/functions/";

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionEvent {
    pub http_method: String,
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub query_string_parameters: Option<HashMap<String, String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionResponse {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

impl From<ContractResponse> for FunctionResponse {
    fn from(response: ContractResponse) -> Self {
        Self {
            status_code: response.status,
            headers: response
                .headers()
                .into_iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
            body: response.body_text(),
        }
    }
}

/// Resolves the endpoint from either an `/api/...` path (redirected
/// requests) or a function path such as `/.netlify/functions/recipe/1`.
/// The recipe id may also come from the `id` query parameter.
pub fn resolve_endpoint(path: &str, query: &HashMap<String, String>) -> Option<Endpoint> {
    if let Some(endpoint) = Endpoint::from_path(path) {
        return Some(endpoint);
    }

    let trimmed = path.trim_matches('/');
    let rest = trimmed.strip_prefix(FUNCTIONS_PREFIX).unwrap_or(trimmed);
    let (name, id) = match rest.split_once('/') {
        Some((name, id)) if !id.is_empty() => (name, Some(id)),
        Some((name, _)) => (name, None),
        None => (rest, None),
    };

    Endpoint::from_function_name(name, id.or_else(|| query.get("id").map(String::as_str)))
}

pub async fn handle_event<S>(service: &S, event: FunctionEvent) -> FunctionResponse
where
    S: AssistantService + CatalogService,
{
    let method = RequestMethod::parse(&event.http_method);
    let query = event.query_string_parameters.unwrap_or_default();

    info!(method = %event.http_method, path = %event.path, "function invocation");

    let Some(endpoint) = resolve_endpoint(&event.path, &query) else {
        return route_not_found(method).into();
    };

    let mut request = ContractRequest::new(method).with_query(query);
    request.body = event.body;

    handle(service, &endpoint, request).await.into()
}
