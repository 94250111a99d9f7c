use std::collections::HashMap;

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::Method,
};
use recetario_core::domain::{catalog::entities::RecipeSummary, contract::entities::Endpoint};

use crate::application::http::server::{
    api_entities::{request::contract_request, response::ContractReply},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/search",
    tag = "recipes",
    summary = "Search recipes",
    description = "Case-insensitive match on recipe name, description or ingredients. An empty query lists every recipe.",
    params(
        ("q" = Option<String>, Query, description = "Search text"),
    ),
    responses(
        (status = 200, body = Vec<RecipeSummary>)
    ),
)]
pub async fn search_recipes(
    State(state): State<AppState>,
    method: Method,
    Query(query): Query<HashMap<String, String>>,
    body: Bytes,
) -> ContractReply {
    state
        .dispatch(
            Endpoint::RecipeSearch,
            contract_request(&method, &body, query),
        )
        .await
}
