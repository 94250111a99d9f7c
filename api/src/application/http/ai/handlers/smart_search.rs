use axum::{body::Bytes, extract::State, http::Method};
use recetario_core::domain::contract::entities::{Endpoint, ErrorResponse, SmartSearchResponse};

use crate::application::http::{
    ai::validators::SmartSearchRequest,
    server::{
        api_entities::{request::contract_request, response::ContractReply},
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/smart-search",
    tag = "ai",
    summary = "Smart recipe search",
    description = "Turns a free-form cooking problem into dish suggestions.",
    request_body = SmartSearchRequest,
    responses(
        (status = 200, body = SmartSearchResponse),
        (status = 400, body = ErrorResponse),
        (status = 503, body = ErrorResponse),
    ),
)]
pub async fn smart_search(
    State(state): State<AppState>,
    method: Method,
    body: Bytes,
) -> ContractReply {
    state
        .dispatch(
            Endpoint::SmartSearch,
            contract_request(&method, &body, Default::default()),
        )
        .await
}
