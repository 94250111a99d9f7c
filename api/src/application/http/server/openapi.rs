use crate::application::http::{ai::router::AiApiDoc, recipes::router::RecipesApiDoc};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Recetario API",
        description = "Chilean recipe catalog and Gemini-backed cooking assistant"
    ),
    nest(
        (path = "/api/ai", api = AiApiDoc),
        (path = "/api/recipes", api = RecipesApiDoc),
    )
)]
pub struct ApiDoc;
