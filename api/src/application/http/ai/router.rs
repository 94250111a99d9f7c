use super::handlers::{
    ai_status::{__path_ai_status, ai_status},
    ingredient_substitution::{__path_ingredient_substitution, ingredient_substitution},
    meal_plan::{__path_meal_plan, meal_plan},
    shopping_list::{__path_shopping_list, shopping_list},
    smart_search::{__path_smart_search, smart_search},
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::any};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(ai_status, ingredient_substitution, shopping_list, meal_plan, smart_search))]
pub struct AiApiDoc;

/// Every verb is routed to the handler; preflight and method checks belong
/// to the endpoint contract.
pub fn ai_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&format!("{}/api/ai/status", root_path), any(ai_status))
        .route(
            &format!("{}/api/ai/ingredient-substitution", root_path),
            any(ingredient_substitution),
        )
        .route(
            &format!("{}/api/ai/shopping-list", root_path),
            any(shopping_list),
        )
        .route(&format!("{}/api/ai/meal-plan", root_path), any(meal_plan))
        .route(
            &format!("{}/api/ai/smart-search", root_path),
            any(smart_search),
        )
}
