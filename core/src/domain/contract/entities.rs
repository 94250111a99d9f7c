use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

use crate::domain::assistant::entities::{MealPlan, SearchSuggestions, ShoppingList, Substitution};

/// Sent with every response, including errors and preflight.
pub const CORS_HEADERS: [(&str, &str); 3] = [
    ("Access-Control-Allow-Origin", "*"),
    ("Access-Control-Allow-Headers", "Content-Type"),
    ("Access-Control-Allow-Methods", "GET, POST, OPTIONS"),
];

pub const JSON_CONTENT_TYPE: (&str, &str) = ("Content-Type", "application/json");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestMethod {
    Get,
    Post,
    Options,
    Other,
}

impl RequestMethod {
    pub fn parse(method: &str) -> Self {
        match method.to_ascii_uppercase().as_str() {
            "GET" => RequestMethod::Get,
            "POST" => RequestMethod::Post,
            "OPTIONS" => RequestMethod::Options,
            _ => RequestMethod::Other,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    AiStatus,
    IngredientSubstitution,
    ShoppingList,
    MealPlan,
    SmartSearch,
    RecipeSearch,
    Recipe { id: String },
}

impl Endpoint {
    /// Maps a server path such as `/api/ai/meal-plan` to its endpoint.
    /// A trailing slash is ignored.
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.trim_end_matches('/');

        match path {
            "/api/ai/status" => Some(Endpoint::AiStatus),
            "/api/ai/ingredient-substitution" => Some(Endpoint::IngredientSubstitution),
            "/api/ai/shopping-list" => Some(Endpoint::ShoppingList),
            "/api/ai/meal-plan" => Some(Endpoint::MealPlan),
            "/api/ai/smart-search" => Some(Endpoint::SmartSearch),
            "/api/recipes/search" => Some(Endpoint::RecipeSearch),
            _ => path
                .strip_prefix("/api/recipes/")
                .filter(|id| !id.is_empty() && !id.contains('/'))
                .map(|id| Endpoint::Recipe { id: id.to_string() }),
        }
    }

    /// Maps a deployed function name to its endpoint. Only `recipe` takes
    /// an id; a missing one is looked up as the empty id.
    pub fn from_function_name(name: &str, id: Option<&str>) -> Option<Self> {
        match name {
            "ai-status" => Some(Endpoint::AiStatus),
            "ai-ingredient-substitution" => Some(Endpoint::IngredientSubstitution),
            "ai-shopping-list" => Some(Endpoint::ShoppingList),
            "ai-meal-plan" => Some(Endpoint::MealPlan),
            "ai-smart-search" => Some(Endpoint::SmartSearch),
            "recipes-search" => Some(Endpoint::RecipeSearch),
            "recipe" => Some(Endpoint::Recipe {
                id: id.unwrap_or_default().to_string(),
            }),
            _ => None,
        }
    }

    pub fn allowed_method(&self) -> RequestMethod {
        match self {
            Endpoint::AiStatus | Endpoint::RecipeSearch | Endpoint::Recipe { .. } => {
                RequestMethod::Get
            }
            Endpoint::IngredientSubstitution
            | Endpoint::ShoppingList
            | Endpoint::MealPlan
            | Endpoint::SmartSearch => RequestMethod::Post,
        }
    }

    /// Endpoints that call the model and are refused while it is unconfigured.
    pub fn requires_model(&self) -> bool {
        self.failure_label().is_some()
    }

    pub fn failure_label(&self) -> Option<&'static str> {
        match self {
            Endpoint::IngredientSubstitution => Some("Failed to generate ingredient substitutions"),
            Endpoint::ShoppingList => Some("Failed to generate shopping list"),
            Endpoint::MealPlan => Some("Failed to generate meal plan"),
            Endpoint::SmartSearch => Some("Failed to generate smart suggestions"),
            Endpoint::AiStatus | Endpoint::RecipeSearch | Endpoint::Recipe { .. } => None,
        }
    }
}

/// Transport-neutral view of one incoming request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractRequest {
    pub method: RequestMethod,
    pub body: Option<String>,
    pub query: HashMap<String, String>,
}

impl ContractRequest {
    pub fn new(method: RequestMethod) -> Self {
        Self {
            method,
            body: None,
            query: HashMap::new(),
        }
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn with_query(mut self, query: HashMap<String, String>) -> Self {
        self.query = query;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    Empty,
    Json(Value),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContractResponse {
    pub status: u16,
    pub body: ResponseBody,
}

impl ContractResponse {
    pub fn empty(status: u16) -> Self {
        Self {
            status,
            body: ResponseBody::Empty,
        }
    }

    pub fn json<T: Serialize>(status: u16, body: &T) -> Self {
        match serde_json::to_value(body) {
            Ok(value) => Self {
                status,
                body: ResponseBody::Json(value),
            },
            Err(e) => Self::error_with_message(500, "Internal server error", e.to_string()),
        }
    }

    pub fn error(status: u16, error: impl Into<String>) -> Self {
        Self::json(
            status,
            &ErrorResponse {
                error: error.into(),
                message: None,
            },
        )
    }

    pub fn error_with_message(
        status: u16,
        error: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::json(
            status,
            &ErrorResponse {
                error: error.into(),
                message: Some(message.into()),
            },
        )
    }

    /// CORS headers always, plus `Content-Type` when there is a JSON body.
    pub fn headers(&self) -> Vec<(&'static str, &'static str)> {
        let mut headers = CORS_HEADERS.to_vec();
        if matches!(self.body, ResponseBody::Json(_)) {
            headers.push(JSON_CONTENT_TYPE);
        }
        headers
    }

    pub fn body_text(&self) -> String {
        match &self.body {
            ResponseBody::Empty => String::new(),
            ResponseBody::Json(value) => value.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct AiStatusResponse {
    pub configured: bool,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct SubstitutionResponse {
    /// The ingredient exactly as submitted.
    pub ingredient: Value,
    pub substitutions: Vec<Substitution>,
    pub generated_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ShoppingListResponse {
    pub shopping_list: ShoppingList,
    pub recipe_count: usize,
    pub generated_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct MealPlanResponse {
    pub meal_plan: MealPlan,
    /// The preferences exactly as submitted, `{}` when absent.
    pub preferences_used: Value,
    pub generated_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct SmartSearchResponse {
    /// The query exactly as submitted, before trimming.
    pub query: Value,
    pub suggestions: SearchSuggestions,
    pub generated_at: String,
}
