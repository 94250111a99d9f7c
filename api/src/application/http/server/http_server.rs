use std::{collections::HashMap, sync::Arc};

use axum::{
    Json, Router,
    body::Bytes,
    extract::{Query, State},
    http::{Method, Uri},
    routing::get,
};
use recetario_core::{
    application::create_service,
    domain::{
        common::RecetarioConfig,
        contract::{
            entities::{Endpoint, RequestMethod},
            route_not_found,
        },
    },
};
use tracing::info_span;
use utoipa::OpenApi;

use crate::application::http::{
    ai::router::ai_routes,
    recipes::router::recipe_routes,
    server::{
        api_entities::{request::contract_request, response::ContractReply},
        app_state::AppState,
        openapi::ApiDoc,
    },
};
use crate::args::Args;

pub fn state(args: Arc<Args>) -> AppState {
    let config = RecetarioConfig::from(args.as_ref().clone());
    let service = create_service(config);

    AppState::new(args, service)
}

/// Paths the router has no exact route for, such as `/api/ai/meal-plan/`,
/// still resolve the way the function adapter resolves them.
async fn resolve_fallback(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    Query(query): Query<HashMap<String, String>>,
    body: Bytes,
) -> ContractReply {
    let endpoint = uri
        .path()
        .strip_prefix(state.args.server.root_path.as_str())
        .and_then(Endpoint::from_path);

    match endpoint {
        Some(endpoint) => {
            state
                .dispatch(endpoint, contract_request(&method, &body, query))
                .await
        }
        None => route_not_found(RequestMethod::parse(method.as_str())).into(),
    }
}

///  Returns the [`Router`] of this application.
pub fn router(state: AppState) -> Result<Router, anyhow::Error> {
    let trace_layer = tower_http::trace::TraceLayer::new_for_http().make_span_with(
        |request: &axum::extract::Request| {
            let uri: String = request.uri().to_string();
            info_span!("http_request", method = ?request.method(), uri)
        },
    );

    let root_path = state.args.server.root_path.clone();

    let mut openapi = ApiDoc::openapi();
    let mut paths = openapi.paths.clone();
    paths.paths = openapi
        .paths
        .paths
        .into_iter()
        .map(|(path, item)| (format!("{}{path}", root_path), item))
        .collect();
    openapi.paths = paths;

    let router = axum::Router::new()
        .route(
            &format!("{}/api-docs/openapi.json", root_path),
            get(move || {
                let openapi = openapi.clone();
                async move { Json(openapi) }
            }),
        )
        .merge(ai_routes(state.clone()))
        .merge(recipe_routes(state.clone()))
        .fallback(resolve_fallback)
        .layer(trace_layer)
        .with_state(state);
    Ok(router)
}
