//! Documented request bodies. Handlers read raw bytes so that malformed
//! input reaches the endpoint contract unchanged; these types only describe
//! the expected shape in the OpenAPI document.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IngredientSubstitutionRequest {
    pub ingredient: String,
    #[serde(default)]
    pub dietary_restrictions: Vec<String>,
    pub recipe_context: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct RecipeRequest {
    pub name: String,
    pub ingredients: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingPreferencesRequest {
    pub store_layout: Option<String>,
    pub budget: Option<String>,
    #[serde(default)]
    pub dietary_restrictions: Vec<String>,
    pub servings: Option<u32>,
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct ShoppingListRequest {
    pub recipes: Vec<RecipeRequest>,
    pub preferences: Option<ShoppingPreferencesRequest>,
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MealPlanPreferencesRequest {
    /// `beginner`, `intermediate` or `advanced`
    pub skill_level: Option<String>,
    /// `quick`, `moderate` or `elaborate`
    pub prep_time: Option<String>,
    pub budget: Option<String>,
    #[serde(default)]
    pub dietary_goals: Vec<String>,
    #[serde(default)]
    pub dietary_restrictions: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct MealPlanRequest {
    pub preferences: Option<MealPlanPreferencesRequest>,
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct SmartSearchRequest {
    pub query: String,
}
