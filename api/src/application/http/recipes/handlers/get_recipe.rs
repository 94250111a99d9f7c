use axum::{
    body::Bytes,
    extract::{Path, State},
    http::Method,
};
use recetario_core::domain::{
    catalog::entities::RecipeDetail,
    contract::entities::{Endpoint, ErrorResponse},
};

use crate::application::http::server::{
    api_entities::{request::contract_request, response::ContractReply},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/{recipe_id}",
    tag = "recipes",
    summary = "Get recipe",
    description = "Full preparation details for one recipe.",
    params(
        ("recipe_id" = String, Path, description = "Recipe ID"),
    ),
    responses(
        (status = 200, body = RecipeDetail),
        (status = 404, body = ErrorResponse),
    ),
)]
pub async fn get_recipe(
    Path(recipe_id): Path<String>,
    State(state): State<AppState>,
    method: Method,
    body: Bytes,
) -> ContractReply {
    state
        .dispatch(
            Endpoint::Recipe { id: recipe_id },
            contract_request(&method, &body, Default::default()),
        )
        .await
}
