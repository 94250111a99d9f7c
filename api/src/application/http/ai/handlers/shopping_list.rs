use axum::{body::Bytes, extract::State, http::Method};
use recetario_core::domain::contract::entities::{Endpoint, ErrorResponse, ShoppingListResponse};

use crate::application::http::{
    ai::validators::ShoppingListRequest,
    server::{
        api_entities::{request::contract_request, response::ContractReply},
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/shopping-list",
    tag = "ai",
    summary = "Generate a shopping list",
    description = "Consolidates the ingredients of the given recipes into a list organised by store section.",
    request_body = ShoppingListRequest,
    responses(
        (status = 200, body = ShoppingListResponse),
        (status = 400, body = ErrorResponse),
        (status = 503, body = ErrorResponse),
    ),
)]
pub async fn shopping_list(
    State(state): State<AppState>,
    method: Method,
    body: Bytes,
) -> ContractReply {
    state
        .dispatch(
            Endpoint::ShoppingList,
            contract_request(&method, &body, Default::default()),
        )
        .await
}
