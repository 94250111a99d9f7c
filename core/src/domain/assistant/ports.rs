use std::future::Future;

use crate::domain::{
    assistant::{
        entities::{MealPlan, SearchSuggestions, ShoppingList, Substitution},
        value_objects::{MealPlanPreferences, ShoppingListInput, SmartSearchInput, SubstitutionInput},
    },
    common::entities::app_errors::CoreError,
    gateway::entities::GatewayState,
};

/// Cooking assistant features backed by the model gateway.
///
/// Model failures never surface here: every operation degrades to its fixed
/// fallback result. An `Err` means something unexpected went wrong around the
/// call.
pub trait AssistantService: Send + Sync {
    fn gateway_state(&self) -> GatewayState;

    fn substitute_ingredient(
        &self,
        input: SubstitutionInput,
    ) -> impl Future<Output = Result<Vec<Substitution>, CoreError>> + Send;

    fn create_meal_plan(
        &self,
        preferences: MealPlanPreferences,
    ) -> impl Future<Output = Result<MealPlan, CoreError>> + Send;

    fn generate_shopping_list(
        &self,
        input: ShoppingListInput,
    ) -> impl Future<Output = Result<ShoppingList, CoreError>> + Send;

    fn smart_search(
        &self,
        input: SmartSearchInput,
    ) -> impl Future<Output = Result<SearchSuggestions, CoreError>> + Send;
}
