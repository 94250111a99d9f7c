use serde_json::{Map, Value};

use crate::domain::{
    assistant::sanitizer::{
        MAX_INGREDIENT_LENGTH, MAX_LIST_ENTRIES, MAX_LIST_ENTRY_LENGTH, MAX_PREFERENCE_LENGTH,
        MAX_RECIPE_CONTEXT_LENGTH, MAX_RECIPE_INGREDIENTS, MAX_RECIPE_NAME_LENGTH,
        MAX_SEARCH_QUERY_LENGTH, sanitize, sanitize_list_value, sanitize_value,
    },
    common::entities::app_errors::CoreError,
};

/// A request body field counts as absent when it is missing or holds an
/// "empty" value: `null`, `false`, `0` or `""`.
fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(Value::Number(n)) => n.as_f64() == Some(0.0),
        Some(_) => false,
    }
}

fn as_object(value: Option<&Value>) -> Map<String, Value> {
    value
        .and_then(Value::as_object)
        .cloned()
        .unwrap_or_default()
}

/// Preference scalars may arrive as numbers (`"servings": 6`); those are kept
/// as their decimal text.
fn sanitize_preference(value: Option<&Value>) -> String {
    match value {
        Some(Value::Number(n)) => sanitize(&n.to_string(), MAX_PREFERENCE_LENGTH),
        other => sanitize_value(other, MAX_PREFERENCE_LENGTH),
    }
}

fn sanitize_restrictions(value: Option<&Value>) -> Vec<String> {
    sanitize_list_value(value, MAX_LIST_ENTRY_LENGTH, MAX_LIST_ENTRIES)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstitutionInput {
    pub ingredient: String,
    pub dietary_restrictions: Vec<String>,
    pub recipe_context: String,
}

impl SubstitutionInput {
    pub fn from_body(body: &Map<String, Value>) -> Result<Self, CoreError> {
        let ingredient = body.get("ingredient");
        if is_blank(ingredient) {
            return Err(CoreError::InvalidInput("Ingredient is required".to_string()));
        }

        let ingredient = ingredient
            .and_then(Value::as_str)
            .ok_or_else(|| CoreError::Unexpected("Invalid ingredient provided".to_string()))?;

        Ok(Self {
            ingredient: sanitize(ingredient, MAX_INGREDIENT_LENGTH),
            dietary_restrictions: sanitize_restrictions(body.get("dietaryRestrictions")),
            recipe_context: sanitize_value(body.get("recipeContext"), MAX_RECIPE_CONTEXT_LENGTH),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeInput {
    pub name: String,
    pub ingredients: Vec<String>,
}

impl RecipeInput {
    fn from_value(value: &Value) -> Option<Self> {
        let recipe = value.as_object()?;

        Some(Self {
            name: sanitize_value(recipe.get("name"), MAX_RECIPE_NAME_LENGTH),
            ingredients: sanitize_list_value(
                recipe.get("ingredients"),
                MAX_LIST_ENTRY_LENGTH,
                MAX_RECIPE_INGREDIENTS,
            ),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShoppingPreferences {
    pub store_layout: String,
    pub budget: String,
    pub dietary_restrictions: Vec<String>,
    pub servings: String,
}

impl ShoppingPreferences {
    pub fn from_value(value: Option<&Value>) -> Self {
        let preferences = as_object(value);

        Self {
            store_layout: sanitize_preference(preferences.get("storeLayout")),
            budget: sanitize_preference(preferences.get("budget")),
            dietary_restrictions: sanitize_restrictions(preferences.get("dietaryRestrictions")),
            servings: sanitize_preference(preferences.get("servings")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShoppingListInput {
    pub recipes: Vec<RecipeInput>,
    /// Number of recipes the caller submitted, including entries that were
    /// not objects and got dropped.
    pub recipe_count: usize,
    pub preferences: ShoppingPreferences,
}

impl ShoppingListInput {
    pub fn from_body(body: &Map<String, Value>) -> Result<Self, CoreError> {
        let submitted = match body.get("recipes").and_then(Value::as_array) {
            Some(recipes) if !recipes.is_empty() => recipes,
            _ => {
                return Err(CoreError::InvalidInput(
                    "At least one recipe is required".to_string(),
                ));
            }
        };

        Ok(Self {
            recipes: submitted.iter().filter_map(RecipeInput::from_value).collect(),
            recipe_count: submitted.len(),
            preferences: ShoppingPreferences::from_value(body.get("preferences")),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MealPlanPreferences {
    pub skill_level: String,
    pub prep_time: String,
    pub budget: String,
    pub dietary_goals: Vec<String>,
    pub dietary_restrictions: Vec<String>,
}

impl MealPlanPreferences {
    pub fn from_body(body: &Map<String, Value>) -> Self {
        let preferences = as_object(body.get("preferences"));

        Self {
            skill_level: sanitize_preference(preferences.get("skillLevel")),
            prep_time: sanitize_preference(preferences.get("prepTime")),
            budget: sanitize_preference(preferences.get("budget")),
            dietary_goals: sanitize_restrictions(preferences.get("dietaryGoals")),
            dietary_restrictions: sanitize_restrictions(preferences.get("dietaryRestrictions")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmartSearchInput {
    pub query: String,
}

impl SmartSearchInput {
    pub fn from_body(body: &Map<String, Value>) -> Result<Self, CoreError> {
        let query = body.get("query");
        if is_blank(query) {
            return Err(CoreError::InvalidInput("Search query is required".to_string()));
        }

        let query = query
            .and_then(Value::as_str)
            .ok_or_else(|| CoreError::Unexpected("Invalid search query provided".to_string()))?;

        if query.trim().is_empty() {
            return Err(CoreError::InvalidInput("Search query is required".to_string()));
        }

        Ok(Self {
            query: sanitize(query, MAX_SEARCH_QUERY_LENGTH),
        })
    }
}
