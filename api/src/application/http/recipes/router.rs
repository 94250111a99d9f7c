use super::handlers::{
    get_recipe::{__path_get_recipe, get_recipe},
    search_recipes::{__path_search_recipes, search_recipes},
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::any};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(search_recipes, get_recipe))]
pub struct RecipesApiDoc;

pub fn recipe_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{}/api/recipes/search", root_path),
            any(search_recipes),
        )
        .route(
            &format!("{}/api/recipes/{{recipe_id}}", root_path),
            any(get_recipe),
        )
}
