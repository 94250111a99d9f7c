pub mod ai_status;
pub mod ingredient_substitution;
pub mod meal_plan;
pub mod shopping_list;
pub mod smart_search;
