use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecipeSummary {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub cooking_time: String,
    pub difficulty: String,
}

impl RecipeSummary {
    /// Case-insensitive substring match on name, description or any
    /// ingredient. `needle` must already be lowercase.
    pub fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self
                .ingredients
                .iter()
                .any(|ingredient| ingredient.to_lowercase().contains(needle))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDetail {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub cooking_time: String,
    pub difficulty: String,
    pub servings: u32,
}
