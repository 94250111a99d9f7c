use crate::domain::{
    catalog::{
        entities::{RecipeDetail, RecipeSummary},
        ports::RecipeCatalog,
    },
    common::entities::app_errors::CoreError,
};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

fn summary(
    id: u32,
    name: &str,
    description: &str,
    ingredients: &[&str],
    cooking_time: &str,
    difficulty: &str,
) -> RecipeSummary {
    RecipeSummary {
        id,
        name: name.to_string(),
        description: description.to_string(),
        ingredients: strings(ingredients),
        cooking_time: cooking_time.to_string(),
        difficulty: difficulty.to_string(),
    }
}

/// In-memory catalog of classic Chilean recipes. Only the first recipe has
/// full preparation details.
#[derive(Debug, Clone)]
pub struct StaticRecipeCatalog {
    recipes: Vec<RecipeSummary>,
    details: Vec<RecipeDetail>,
}

impl StaticRecipeCatalog {
    pub fn new() -> Self {
        let recipes = vec![
            summary(
                1,
                "Empanadas de Pino",
                "Traditional Chilean pastries filled with seasoned ground beef, onions, hard-boiled eggs, black olives, and raisins.",
                &["Ground beef", "Onions", "Hard-boiled eggs", "Black olives", "Raisins", "Pastry dough"],
                "45 minutes",
                "Medium",
            ),
            summary(
                2,
                "Pastel de Choclo",
                "A beloved corn casserole featuring layers of seasoned ground meat, chicken, hard-boiled eggs, and olives.",
                &["Corn", "Ground meat", "Chicken", "Hard-boiled eggs", "Olives", "Milk", "Butter"],
                "60 minutes",
                "Medium",
            ),
            summary(
                3,
                "Cazuela",
                "A traditional Chilean stew with meat, vegetables, and potatoes, slow-cooked to perfection.",
                &["Beef or chicken", "Potatoes", "Pumpkin", "Corn", "Green beans", "Rice"],
                "90 minutes",
                "Easy",
            ),
            summary(
                4,
                "Completo Italiano",
                "Chilean hot dog topped with avocado, tomato, and mayonnaise, representing the Italian flag colors.",
                &["Hot dog", "Bread", "Avocado", "Tomato", "Mayonnaise"],
                "10 minutes",
                "Easy",
            ),
            summary(
                5,
                "Sopaipillas",
                "Traditional Chilean fried pastries, perfect with pebre or honey.",
                &["Flour", "Pumpkin puree", "Oil", "Salt", "Baking powder"],
                "30 minutes",
                "Easy",
            ),
        ];

        let details = vec![RecipeDetail {
            id: 1,
            name: "Empanadas de Pino".to_string(),
            description: recipes[0].description.clone(),
            ingredients: strings(&[
                "500g ground beef",
                "2 large onions, diced",
                "4 hard-boiled eggs, chopped",
                "1 cup black olives, pitted",
                "1/2 cup raisins",
                "2 packages empanada dough",
                "Salt, pepper, cumin to taste",
            ]),
            instructions: strings(&[
                "Sauté onions until golden brown",
                "Add ground beef and cook until browned",
                "Season with salt, pepper, and cumin",
                "Let mixture cool, then add eggs, olives, and raisins",
                "Fill empanada dough with mixture",
                "Seal edges and brush with egg wash",
                "Bake at 375°F for 25-30 minutes until golden",
            ]),
            cooking_time: "45 minutes".to_string(),
            difficulty: "Medium".to_string(),
            servings: 12,
        }];

        Self { recipes, details }
    }
}

impl Default for StaticRecipeCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl RecipeCatalog for StaticRecipeCatalog {
    async fn list_recipes(&self) -> Result<Vec<RecipeSummary>, CoreError> {
        Ok(self.recipes.clone())
    }

    async fn get_recipe_by_id(&self, id: u32) -> Result<Option<RecipeDetail>, CoreError> {
        Ok(self.details.iter().find(|detail| detail.id == id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_lists_five_recipes_in_order() {
        let recipes = StaticRecipeCatalog::new().list_recipes().await.unwrap();

        let ids: Vec<_> = recipes.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[tokio::test]
    async fn test_only_first_recipe_has_details() {
        let catalog = StaticRecipeCatalog::new();

        let detail = catalog.get_recipe_by_id(1).await.unwrap().unwrap();
        assert_eq!(detail.servings, 12);
        assert_eq!(detail.instructions.len(), 7);

        assert_eq!(catalog.get_recipe_by_id(2).await.unwrap(), None);
    }
}
