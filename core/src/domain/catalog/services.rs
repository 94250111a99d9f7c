use tracing::instrument;

use crate::domain::{
    catalog::{
        entities::{RecipeDetail, RecipeSummary},
        ports::{CatalogService, RecipeCatalog},
    },
    common::{entities::app_errors::CoreError, services::Service},
    gateway::ports::LLMClient,
};

impl<LLM, RC> CatalogService for Service<LLM, RC>
where
    LLM: LLMClient,
    RC: RecipeCatalog,
{
    #[instrument(skip(self))]
    async fn search_recipes(&self, query: String) -> Result<Vec<RecipeSummary>, CoreError> {
        let needle = query.to_lowercase();
        let recipes = self.recipe_catalog.list_recipes().await?;

        Ok(recipes
            .into_iter()
            .filter(|recipe| recipe.matches(&needle))
            .collect())
    }

    #[instrument(skip(self))]
    async fn get_recipe(&self, id: String) -> Result<RecipeDetail, CoreError> {
        let not_found = || CoreError::NotFound("Recipe not found".to_string());
        let id: u32 = id.trim().parse().map_err(|_| not_found())?;

        self.recipe_catalog
            .get_recipe_by_id(id)
            .await?
            .ok_or_else(not_found)
    }
}
