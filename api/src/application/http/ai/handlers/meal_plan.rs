use axum::{body::Bytes, extract::State, http::Method};
use recetario_core::domain::contract::entities::{Endpoint, ErrorResponse, MealPlanResponse};

use crate::application::http::{
    ai::validators::MealPlanRequest,
    server::{
        api_entities::{request::contract_request, response::ContractReply},
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/meal-plan",
    tag = "ai",
    summary = "Create a weekly meal plan",
    request_body = MealPlanRequest,
    responses(
        (status = 200, body = MealPlanResponse),
        (status = 400, body = ErrorResponse),
        (status = 503, body = ErrorResponse),
    ),
)]
pub async fn meal_plan(State(state): State<AppState>, method: Method, body: Bytes) -> ContractReply {
    state
        .dispatch(
            Endpoint::MealPlan,
            contract_request(&method, &body, Default::default()),
        )
        .await
}
