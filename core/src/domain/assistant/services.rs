use tracing::instrument;

use crate::domain::{
    assistant::{
        entities::{MealPlan, SearchSuggestions, ShoppingList, Substitution},
        interpreter::interpret,
        ports::AssistantService,
        prompts::{
            build_meal_plan_prompt, build_shopping_list_prompt, build_smart_search_prompt,
            build_substitution_prompt,
        },
        schema::{
            get_meal_plan_schema, get_shopping_list_schema, get_smart_search_schema,
            get_substitution_schema,
        },
        value_objects::{
            MealPlanPreferences, ShoppingListInput, SmartSearchInput, SubstitutionInput,
        },
    },
    catalog::ports::RecipeCatalog,
    common::{entities::app_errors::CoreError, services::Service},
    gateway::{entities::GatewayState, ports::LLMClient},
};

impl<LLM, RC> AssistantService for Service<LLM, RC>
where
    LLM: LLMClient,
    RC: RecipeCatalog,
{
    fn gateway_state(&self) -> GatewayState {
        *self.gateway.state()
    }

    #[instrument(skip_all, fields(ingredient = %input.ingredient))]
    async fn substitute_ingredient(
        &self,
        input: SubstitutionInput,
    ) -> Result<Vec<Substitution>, CoreError> {
        let prompt = build_substitution_prompt(&input);
        let raw = self.gateway.call(prompt, get_substitution_schema()).await;

        Ok(interpret(raw, Substitution::fallback()))
    }

    #[instrument(skip_all)]
    async fn create_meal_plan(
        &self,
        preferences: MealPlanPreferences,
    ) -> Result<MealPlan, CoreError> {
        let prompt = build_meal_plan_prompt(&preferences);
        let raw = self.gateway.call(prompt, get_meal_plan_schema()).await;

        Ok(interpret(raw, MealPlan::fallback()))
    }

    #[instrument(skip_all, fields(recipe_count = input.recipe_count))]
    async fn generate_shopping_list(
        &self,
        input: ShoppingListInput,
    ) -> Result<ShoppingList, CoreError> {
        let prompt = build_shopping_list_prompt(&input.recipes, &input.preferences);
        let raw = self.gateway.call(prompt, get_shopping_list_schema()).await;

        Ok(interpret(raw, ShoppingList::fallback(&input.recipes)))
    }

    #[instrument(skip_all)]
    async fn smart_search(&self, input: SmartSearchInput) -> Result<SearchSuggestions, CoreError> {
        let prompt = build_smart_search_prompt(&input);
        let raw = self.gateway.call(prompt, get_smart_search_schema()).await;

        Ok(interpret(raw, SearchSuggestions::fallback()))
    }
}
