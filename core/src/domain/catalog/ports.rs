use std::future::Future;

use crate::domain::{
    catalog::entities::{RecipeDetail, RecipeSummary},
    common::entities::app_errors::CoreError,
};

/// Read-only source of recipes.
#[cfg_attr(test, mockall::automock)]
pub trait RecipeCatalog: Send + Sync {
    fn list_recipes(&self) -> impl Future<Output = Result<Vec<RecipeSummary>, CoreError>> + Send;

    fn get_recipe_by_id(
        &self,
        id: u32,
    ) -> impl Future<Output = Result<Option<RecipeDetail>, CoreError>> + Send;
}

pub trait CatalogService: Send + Sync {
    fn search_recipes(
        &self,
        query: String,
    ) -> impl Future<Output = Result<Vec<RecipeSummary>, CoreError>> + Send;

    /// `id` is taken verbatim from the request path; anything that is not a
    /// known numeric id is reported as `NotFound`.
    fn get_recipe(&self, id: String)
    -> impl Future<Output = Result<RecipeDetail, CoreError>> + Send;
}
