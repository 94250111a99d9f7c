use axum::{body::Bytes, extract::State, http::Method};
use recetario_core::domain::contract::entities::{Endpoint, ErrorResponse, SubstitutionResponse};

use crate::application::http::{
    ai::validators::IngredientSubstitutionRequest,
    server::{
        api_entities::{request::contract_request, response::ContractReply},
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/ingredient-substitution",
    tag = "ai",
    summary = "Suggest ingredient substitutions",
    description = "Asks the model for 3-5 substitutes suited to Chilean cooking. Falls back to a fixed suggestion when the model is unreachable.",
    request_body = IngredientSubstitutionRequest,
    responses(
        (status = 200, body = SubstitutionResponse),
        (status = 400, body = ErrorResponse),
        (status = 503, body = ErrorResponse),
    ),
)]
pub async fn ingredient_substitution(
    State(state): State<AppState>,
    method: Method,
    body: Bytes,
) -> ContractReply {
    state
        .dispatch(
            Endpoint::IngredientSubstitution,
            contract_request(&method, &body, Default::default()),
        )
        .await
}
