use axum::{body::Bytes, extract::State, http::Method};
use recetario_core::domain::contract::entities::{AiStatusResponse, Endpoint};

use crate::application::http::server::{
    api_entities::{request::contract_request, response::ContractReply},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/status",
    tag = "ai",
    summary = "AI service status",
    description = "Reports whether a usable Gemini API key is configured.",
    responses(
        (status = 200, body = AiStatusResponse)
    ),
)]
pub async fn ai_status(
    State(state): State<AppState>,
    method: Method,
    body: Bytes,
) -> ContractReply {
    state
        .dispatch(
            Endpoint::AiStatus,
            contract_request(&method, &body, Default::default()),
        )
        .await
}
