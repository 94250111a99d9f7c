use serde::{Deserialize, Deserializer, Serialize, de::DeserializeOwned};
use serde_json::Value;
use utoipa::ToSchema;

use crate::domain::assistant::value_objects::RecipeInput;

/// Model output is trusted for its top-level shape only. Below that every
/// decoder is total: scalar slots stringify whatever arrives, record slots
/// default on a wrong shape, and missing fields default to empty.
fn lenient_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    }
}

fn deserialize_lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_text(Value::deserialize(deserializer)?).unwrap_or_default())
}

/// A single entry where a list is expected becomes a one-element list.
fn deserialize_lenient_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Array(entries) => Ok(entries.into_iter().filter_map(lenient_text).collect()),
        entry => Ok(lenient_text(entry).into_iter().collect()),
    }
}

fn deserialize_lenient_record<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    if !value.is_object() {
        return Ok(T::default());
    }

    Ok(T::deserialize(value).unwrap_or_default())
}

/// Keeps the object entries of a list; anything else reads as an empty list.
fn lenient_records<T: DeserializeOwned>(value: Value) -> Vec<T> {
    let Value::Array(entries) = value else {
        return Vec::new();
    };

    entries
        .into_iter()
        .filter(Value::is_object)
        .filter_map(|entry| T::deserialize(entry).ok())
        .collect()
}

fn deserialize_lenient_records<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(lenient_records(Value::deserialize(deserializer)?))
}

const UNAVAILABLE: &str = "AI service temporarily unavailable";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Substitution {
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub substitute: String,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub ratio: String,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub reason: String,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub notes: String,
}

impl Substitution {
    pub fn fallback() -> Vec<Substitution> {
        vec![Substitution {
            substitute: "Check recipe notes".to_string(),
            ratio: "1:1".to_string(),
            reason: UNAVAILABLE.to_string(),
            notes: "Please consult traditional cooking resources".to_string(),
        }]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Meal {
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub dish: String,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub prep_time: String,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub difficulty: String,
    #[serde(default, deserialize_with = "deserialize_lenient_list")]
    pub key_ingredients: Vec<String>,
}

impl Meal {
    fn new(dish: &str, prep_time: &str, difficulty: &str, key_ingredients: &[&str]) -> Self {
        Self {
            dish: dish.to_string(),
            prep_time: prep_time.to_string(),
            difficulty: difficulty.to_string(),
            key_ingredients: key_ingredients.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DayPlan {
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub day: String,
    #[serde(default, deserialize_with = "deserialize_lenient_record")]
    pub breakfast: Meal,
    #[serde(default, deserialize_with = "deserialize_lenient_record")]
    pub lunch: Meal,
    #[serde(default, deserialize_with = "deserialize_lenient_record")]
    pub dinner: Meal,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub prep_notes: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ShoppingStrategy {
    #[serde(default, deserialize_with = "deserialize_lenient_list")]
    pub ingredient_overlap: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_list")]
    pub prep_ahead_items: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub skill_progression: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MealPlan {
    #[serde(default, deserialize_with = "deserialize_lenient_records")]
    pub week_plan: Vec<DayPlan>,
    #[serde(default, deserialize_with = "deserialize_lenient_record")]
    pub shopping_strategy: ShoppingStrategy,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub weekly_nutrition_balance: String,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub estimated_total_cost: String,
}

pub const WEEK_DAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

impl MealPlan {
    /// Same three basic dishes for every day of the week.
    pub fn fallback() -> Self {
        let week_plan = WEEK_DAYS
            .iter()
            .map(|day| DayPlan {
                day: day.to_string(),
                breakfast: Meal::new(
                    "Traditional Chilean Breakfast",
                    "15 minutes",
                    "easy",
                    &["bread", "avocado", "tomato"],
                ),
                lunch: Meal::new(
                    "Simple Empanadas",
                    "45 minutes",
                    "medium",
                    &["ground beef", "onions", "empanada dough"],
                ),
                dinner: Meal::new(
                    "Cazuela",
                    "90 minutes",
                    "medium",
                    &["beef", "pumpkin", "corn", "potatoes"],
                ),
                prep_notes: format!("{UNAVAILABLE} - using basic meal suggestions"),
            })
            .collect();

        Self {
            week_plan,
            shopping_strategy: ShoppingStrategy {
                ingredient_overlap: vec!["Basic ingredients".to_string()],
                prep_ahead_items: vec!["Prepare vegetables in advance".to_string()],
                skill_progression: "Start with simple dishes".to_string(),
            },
            weekly_nutrition_balance:
                "Aim for balanced meals with proteins, vegetables, and grains".to_string(),
            estimated_total_cost: "Moderate budget required".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ShoppingItem {
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub item: String,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub quantity: String,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub notes: String,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub estimated_cost: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ShoppingSection {
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_lenient_records")]
    pub items: Vec<ShoppingItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ShoppingList {
    #[serde(default, deserialize_with = "deserialize_lenient_records")]
    pub sections: Vec<ShoppingSection>,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub total_estimated_cost: String,
    #[serde(default, deserialize_with = "deserialize_lenient_list")]
    pub money_saving_tips: Vec<String>,
}

impl ShoppingList {
    /// Lists every submitted ingredient, in order, under a single section.
    pub fn fallback(recipes: &[RecipeInput]) -> Self {
        let items = recipes
            .iter()
            .flat_map(|recipe| recipe.ingredients.iter())
            .map(|ingredient| ShoppingItem {
                item: ingredient.clone(),
                quantity: "As needed".to_string(),
                notes: UNAVAILABLE.to_string(),
                estimated_cost: "Variable".to_string(),
            })
            .collect();

        Self {
            sections: vec![ShoppingSection {
                name: "All Items".to_string(),
                items,
            }],
            total_estimated_cost: "Variable".to_string(),
            money_saving_tips: vec!["Check local markets for fresh ingredients".to_string()],
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PrimarySuggestion {
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub dish_name: String,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub description: String,
    #[serde(default, deserialize_with = "deserialize_lenient_list")]
    pub ingredients_needed: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub prep_time: String,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub difficulty: String,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub cooking_tips: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AlternativeOption {
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub option: String,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub explanation: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SearchSuggestions {
    #[serde(default, deserialize_with = "deserialize_lenient_records")]
    pub primary_suggestions: Vec<PrimarySuggestion>,
    #[serde(default, deserialize_with = "deserialize_lenient_records")]
    pub alternative_options: Vec<AlternativeOption>,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub general_advice: String,
}

impl SearchSuggestions {
    pub fn fallback() -> Self {
        Self {
            primary_suggestions: vec![PrimarySuggestion {
                dish_name: "Basic Chilean Dish".to_string(),
                description: UNAVAILABLE.to_string(),
                ingredients_needed: vec!["Check traditional recipes".to_string()],
                prep_time: "Variable".to_string(),
                difficulty: "medium".to_string(),
                cooking_tips: "Consult Chilean cooking resources".to_string(),
            }],
            alternative_options: vec![AlternativeOption {
                option: "Traditional approach".to_string(),
                explanation: "Use classic Chilean cooking methods".to_string(),
            }],
            general_advice: format!(
                "{UNAVAILABLE}. Please consult traditional Chilean cooking resources."
            ),
        }
    }
}
