use serde_json::json;

/// Returns the JSON schema for ingredient substitution responses
pub fn get_substitution_schema() -> serde_json::Value {
    json!({
        "type": "array",
        "items": {
            "type": "object",
            "properties": {
                "substitute": { "type": "string" },
                "ratio": { "type": "string" },
                "reason": { "type": "string" },
                "notes": { "type": "string" }
            },
            "required": ["substitute", "ratio", "reason", "notes"]
        }
    })
}

fn meal_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "dish": { "type": "string" },
            "prep_time": { "type": "string" },
            "difficulty": { "type": "string" },
            "key_ingredients": {
                "type": "array",
                "items": { "type": "string" }
            }
        },
        "required": ["dish", "prep_time", "difficulty", "key_ingredients"]
    })
}

/// Returns the JSON schema for weekly meal plan responses
pub fn get_meal_plan_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "week_plan": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "day": { "type": "string" },
                        "breakfast": meal_schema(),
                        "lunch": meal_schema(),
                        "dinner": meal_schema(),
                        "prep_notes": { "type": "string" }
                    },
                    "required": ["day", "breakfast", "lunch", "dinner", "prep_notes"]
                }
            },
            "shopping_strategy": {
                "type": "object",
                "properties": {
                    "ingredient_overlap": {
                        "type": "array",
                        "items": { "type": "string" }
                    },
                    "prep_ahead_items": {
                        "type": "array",
                        "items": { "type": "string" }
                    },
                    "skill_progression": { "type": "string" }
                },
                "required": ["ingredient_overlap", "prep_ahead_items", "skill_progression"]
            },
            "weekly_nutrition_balance": { "type": "string" },
            "estimated_total_cost": { "type": "string" }
        },
        "required": [
            "week_plan", "shopping_strategy",
            "weekly_nutrition_balance", "estimated_total_cost"
        ]
    })
}

/// Returns the JSON schema for shopping list responses
pub fn get_shopping_list_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "sections": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "name": { "type": "string" },
                        "items": {
                            "type": "array",
                            "items": {
                                "type": "object",
                                "properties": {
                                    "item": { "type": "string" },
                                    "quantity": { "type": "string" },
                                    "notes": { "type": "string" },
                                    "estimated_cost": { "type": "string" }
                                },
                                "required": ["item", "quantity", "notes", "estimated_cost"]
                            }
                        }
                    },
                    "required": ["name", "items"]
                }
            },
            "total_estimated_cost": { "type": "string" },
            "money_saving_tips": {
                "type": "array",
                "items": { "type": "string" }
            }
        },
        "required": ["sections", "total_estimated_cost", "money_saving_tips"]
    })
}

/// Returns the JSON schema for smart search responses
pub fn get_smart_search_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "primary_suggestions": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "dish_name": { "type": "string" },
                        "description": { "type": "string" },
                        "ingredients_needed": {
                            "type": "array",
                            "items": { "type": "string" }
                        },
                        "prep_time": { "type": "string" },
                        "difficulty": { "type": "string" },
                        "cooking_tips": { "type": "string" }
                    },
                    "required": [
                        "dish_name", "description", "ingredients_needed",
                        "prep_time", "difficulty", "cooking_tips"
                    ]
                }
            },
            "alternative_options": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "option": { "type": "string" },
                        "explanation": { "type": "string" }
                    },
                    "required": ["option", "explanation"]
                }
            },
            "general_advice": { "type": "string" }
        },
        "required": ["primary_suggestions", "alternative_options", "general_advice"]
    })
}
