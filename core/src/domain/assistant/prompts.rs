//! Prompt templates for the four assistant features.
//!
//! Every builder is a pure function of already sanitized input, so the same
//! request always renders the same prompt.

use crate::domain::assistant::value_objects::{
    MealPlanPreferences, RecipeInput, ShoppingPreferences, SmartSearchInput, SubstitutionInput,
};

fn or_default<'a>(value: &'a str, default: &'a str) -> &'a str {
    if value.is_empty() { default } else { value }
}

fn join_or<'a>(values: &[String], default: &'a str) -> std::borrow::Cow<'a, str> {
    if values.is_empty() {
        default.into()
    } else {
        values.join(", ").into()
    }
}

/// Render the ingredient substitution prompt.
pub fn build_substitution_prompt(input: &SubstitutionInput) -> String {
    format!(
        r#"As a culinary expert, suggest 3-5 ingredient substitutions for "{ingredient}" in Chilean cuisine.

Context: {context}
Dietary restrictions: {restrictions}

Consider:
- Flavor profiles and how they complement Chilean dishes
- Cooking chemistry and how substitutes behave when cooked
- Availability and cost-effectiveness
- Dietary restrictions provided
- Traditional Chilean cooking methods

Format your response as a JSON array with this structure:
[
    {{
        "substitute": "ingredient name",
        "ratio": "1:1 or specific ratio",
        "reason": "why this works well",
        "notes": "any cooking adjustments needed"
    }}
]

Only return the JSON array, no additional text."#,
        ingredient = input.ingredient,
        context = or_default(&input.recipe_context, "General cooking"),
        restrictions = join_or(&input.dietary_restrictions, "None"),
    )
}

/// Render the weekly meal plan prompt.
pub fn build_meal_plan_prompt(preferences: &MealPlanPreferences) -> String {
    format!(
        r#"Create a balanced 7-day Chilean cuisine meal plan with the following preferences:

- Cooking skill level: {skill_level}
- Prep time preference: {prep_time} (quick: <30min, moderate: 30-60min, elaborate: >60min)
- Dietary goals: {goals}
- Dietary restrictions: {restrictions}
- Budget: {budget}

Requirements:
1. Include traditional Chilean dishes with modern variations
2. Balance prep times throughout the week
3. Minimize ingredient waste by reusing ingredients across meals
4. Progress cooking skills from simple to more complex dishes
5. Include prep-ahead tips for busy days
6. Balance nutrition across the week
7. Consider seasonal Chilean ingredients

Format as JSON:
{{
    "week_plan": [
        {{
            "day": "Monday",
            "breakfast": {{
                "dish": "dish name",
                "prep_time": "time in minutes",
                "difficulty": "easy/medium/hard",
                "key_ingredients": ["ingredient1", "ingredient2"]
            }},
            "lunch": {{ ... }},
            "dinner": {{ ... }},
            "prep_notes": "what to prepare ahead"
        }}
    ],
    "shopping_strategy": {{
        "ingredient_overlap": ["ingredients used multiple times"],
        "prep_ahead_items": ["items to prep in advance"],
        "skill_progression": "how skills build through the week"
    }},
    "weekly_nutrition_balance": "summary of nutritional considerations",
    "estimated_total_cost": "weekly budget estimate"
}}

Only return the JSON, no additional text."#,
        skill_level = or_default(&preferences.skill_level, "intermediate"),
        prep_time = or_default(&preferences.prep_time, "moderate"),
        goals = join_or(&preferences.dietary_goals, "balanced nutrition"),
        restrictions = join_or(&preferences.dietary_restrictions, "none"),
        budget = or_default(&preferences.budget, "moderate"),
    )
}

/// Render the shopping list prompt. Each recipe goes on its own line as
/// `name: ingredient, ingredient`.
pub fn build_shopping_list_prompt(
    recipes: &[RecipeInput],
    preferences: &ShoppingPreferences,
) -> String {
    let recipe_list = recipes
        .iter()
        .map(|recipe| format!("{}: {}", recipe.name, recipe.ingredients.join(", ")))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"Create an optimized shopping list for these Chilean recipes:

{recipe_list}

Preferences:
- Store layout preference: {store_layout}
- Budget consideration: {budget}
- Dietary restrictions: {restrictions}

Requirements:
1. Consolidate duplicate ingredients and calculate total quantities
2. Organize by store sections (Produce, Meat, Dairy, Pantry, etc.)
3. Suggest bulk buying opportunities for cost savings
4. Include estimated quantities for {servings} servings
5. Add notes for ingredient quality tips (especially for Chilean specialties)

Format as JSON:
{{
    "sections": [
        {{
            "name": "section name",
            "items": [
                {{
                    "item": "ingredient name",
                    "quantity": "amount needed",
                    "notes": "quality tips or alternatives",
                    "estimated_cost": "price range"
                }}
            ]
        }}
    ],
    "total_estimated_cost": "price range",
    "money_saving_tips": ["tip1", "tip2"]
}}

Only return the JSON, no additional text."#,
        recipe_list = recipe_list,
        store_layout = or_default(&preferences.store_layout, "category-based"),
        budget = or_default(&preferences.budget, "moderate"),
        restrictions = join_or(&preferences.dietary_restrictions, "None"),
        servings = or_default(&preferences.servings, "4"),
    )
}

/// Render the smart search prompt.
pub fn build_smart_search_prompt(input: &SmartSearchInput) -> String {
    format!(
        r#"As a Chilean cuisine expert, help solve this cooking problem: "{query}"

Provide practical, actionable suggestions that focus on Chilean dishes and cooking techniques.
Consider:
- Traditional Chilean recipes that match available ingredients
- Cooking techniques suitable for the situation
- Time constraints and skill level implied in the query
- Seasonal availability of ingredients in Chile
- Regional variations of Chilean dishes
- Modern adaptations of traditional recipes

Format your response as a JSON object:
{{
    "primary_suggestions": [
        {{
            "dish_name": "recipe name",
            "description": "brief description",
            "ingredients_needed": ["additional ingredients if any"],
            "prep_time": "estimated time",
            "difficulty": "easy/medium/hard",
            "cooking_tips": "helpful tips specific to this situation"
        }}
    ],
    "alternative_options": [
        {{
            "option": "alternative approach",
            "explanation": "why this works"
        }}
    ],
    "general_advice": "overall cooking advice for this situation"
}}

Only return the JSON, no additional text."#,
        query = input.query,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substitution_prompt_uses_defaults() {
        let prompt = build_substitution_prompt(&SubstitutionInput {
            ingredient: "merkén".to_string(),
            dietary_restrictions: vec![],
            recipe_context: String::new(),
        });

        assert!(prompt.contains(r#"substitutions for "merkén" in Chilean cuisine"#));
        assert!(prompt.contains("Context: General cooking"));
        assert!(prompt.contains("Dietary restrictions: None"));
        assert!(prompt.ends_with("Only return the JSON array, no additional text."));
    }

    #[test]
    fn test_substitution_prompt_is_deterministic() {
        let input = SubstitutionInput {
            ingredient: "huevo".to_string(),
            dietary_restrictions: vec!["vegano".to_string(), "sin gluten".to_string()],
            recipe_context: "Sopaipillas".to_string(),
        };

        let prompt = build_substitution_prompt(&input);

        assert_eq!(prompt, build_substitution_prompt(&input));
        assert!(prompt.contains("Dietary restrictions: vegano, sin gluten"));
        assert!(prompt.contains("Context: Sopaipillas"));
    }

    #[test]
    fn test_meal_plan_prompt_defaults() {
        let prompt = build_meal_plan_prompt(&MealPlanPreferences::default());

        assert!(prompt.contains("- Cooking skill level: intermediate"));
        assert!(prompt.contains("- Prep time preference: moderate (quick"));
        assert!(prompt.contains("- Dietary goals: balanced nutrition"));
        assert!(prompt.contains("- Dietary restrictions: none"));
        assert!(prompt.contains("- Budget: moderate"));
        assert!(prompt.ends_with("Only return the JSON, no additional text."));
    }

    #[test]
    fn test_shopping_list_prompt_lists_recipes() {
        let recipes = vec![
            RecipeInput {
                name: "Cazuela".to_string(),
                ingredients: vec!["zapallo".to_string(), "choclo".to_string()],
            },
            RecipeInput {
                name: "Pebre".to_string(),
                ingredients: vec!["tomate".to_string()],
            },
        ];

        let prompt = build_shopping_list_prompt(&recipes, &ShoppingPreferences::default());

        assert!(prompt.contains("Cazuela: zapallo, choclo\nPebre: tomate"));
        assert!(prompt.contains("- Store layout preference: category-based"));
        assert!(prompt.contains("quantities for 4 servings"));
    }

    #[test]
    fn test_smart_search_prompt_embeds_query() {
        let prompt = build_smart_search_prompt(&SmartSearchInput {
            query: "tengo papas y cebolla".to_string(),
        });

        assert!(prompt.contains(r#"cooking problem: "tengo papas y cebolla""#));
        assert!(prompt.contains("\"general_advice\""));
    }
}
