use serde_json::{Map, Value};
use tracing::{instrument, warn};

use crate::domain::{
    assistant::{
        ports::AssistantService,
        value_objects::{
            MealPlanPreferences, ShoppingListInput, SmartSearchInput, SubstitutionInput,
        },
    },
    catalog::ports::CatalogService,
    common::{entities::app_errors::CoreError, format_generated_at, generate_timestamp},
    contract::entities::{
        AiStatusResponse, ContractRequest, ContractResponse, Endpoint, MealPlanResponse,
        RequestMethod, ShoppingListResponse, SmartSearchResponse, SubstitutionResponse,
    },
};

const NOT_CONFIGURED_MESSAGE: &str = "Please configure your Gemini API key";
const INTERNAL_ERROR_LABEL: &str = "Internal server error";

/// An empty or whitespace-only body reads as `{}`, and so does valid JSON
/// that is not an object.
fn parse_body(body: Option<&str>) -> Result<Map<String, Value>, CoreError> {
    let Some(text) = body.map(str::trim).filter(|text| !text.is_empty()) else {
        return Ok(Map::new());
    };

    match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Ok(Map::new()),
        Err(_) => Err(CoreError::InvalidJsonBody),
    }
}

fn generated_at() -> String {
    format_generated_at(generate_timestamp())
}

fn error_response(endpoint: &Endpoint, error: CoreError) -> ContractResponse {
    match error {
        CoreError::InvalidInput(message) => ContractResponse::error(400, message),
        CoreError::InvalidJsonBody => ContractResponse::error(400, error.to_string()),
        CoreError::NotConfigured => {
            ContractResponse::error_with_message(503, error.to_string(), NOT_CONFIGURED_MESSAGE)
        }
        CoreError::NotFound(message) => ContractResponse::error(404, message),
        CoreError::ExternalServiceError(_) | CoreError::Unexpected(_) => {
            let label = endpoint.failure_label().unwrap_or(INTERNAL_ERROR_LABEL);
            tracing::error!(error = %error, "{}", label);
            ContractResponse::error_with_message(500, label, error.to_string())
        }
    }
}

async fn dispatch<S>(
    service: &S,
    endpoint: &Endpoint,
    request: ContractRequest,
) -> Result<ContractResponse, CoreError>
where
    S: AssistantService + CatalogService,
{
    match endpoint {
        Endpoint::AiStatus => {
            let state = service.gateway_state();
            Ok(ContractResponse::json(
                200,
                &AiStatusResponse {
                    configured: state.is_configured(),
                    message: state.status_message().to_string(),
                },
            ))
        }
        Endpoint::IngredientSubstitution => {
            let body = parse_body(request.body.as_deref())?;
            let input = SubstitutionInput::from_body(&body)?;
            let substitutions = service.substitute_ingredient(input).await?;

            Ok(ContractResponse::json(
                200,
                &SubstitutionResponse {
                    ingredient: body.get("ingredient").cloned().unwrap_or_default(),
                    substitutions,
                    generated_at: generated_at(),
                },
            ))
        }
        Endpoint::ShoppingList => {
            let body = parse_body(request.body.as_deref())?;
            let input = ShoppingListInput::from_body(&body)?;
            let recipe_count = input.recipe_count;
            let shopping_list = service.generate_shopping_list(input).await?;

            Ok(ContractResponse::json(
                200,
                &ShoppingListResponse {
                    shopping_list,
                    recipe_count,
                    generated_at: generated_at(),
                },
            ))
        }
        Endpoint::MealPlan => {
            let body = parse_body(request.body.as_deref())?;
            let preferences = MealPlanPreferences::from_body(&body);
            let meal_plan = service.create_meal_plan(preferences).await?;

            Ok(ContractResponse::json(
                200,
                &MealPlanResponse {
                    meal_plan,
                    preferences_used: body
                        .get("preferences")
                        .cloned()
                        .unwrap_or_else(|| Value::Object(Map::new())),
                    generated_at: generated_at(),
                },
            ))
        }
        Endpoint::SmartSearch => {
            let body = parse_body(request.body.as_deref())?;
            let input = SmartSearchInput::from_body(&body)?;
            let suggestions = service.smart_search(input).await?;

            Ok(ContractResponse::json(
                200,
                &SmartSearchResponse {
                    query: body.get("query").cloned().unwrap_or_default(),
                    suggestions,
                    generated_at: generated_at(),
                },
            ))
        }
        Endpoint::RecipeSearch => {
            let query = request.query.get("q").cloned().unwrap_or_default();
            let recipes = service.search_recipes(query).await?;

            Ok(ContractResponse::json(200, &recipes))
        }
        Endpoint::Recipe { id } => {
            let recipe = service.get_recipe(id.clone()).await?;

            Ok(ContractResponse::json(200, &recipe))
        }
    }
}

/// Runs one request through the endpoint contract. Both the HTTP server and
/// the function adapter call this, so they answer identically.
///
/// Checks happen in a fixed order: preflight, method, model configuration,
/// input validation, execution.
#[instrument(skip(service, request), fields(method = ?request.method))]
pub async fn handle<S>(
    service: &S,
    endpoint: &Endpoint,
    request: ContractRequest,
) -> ContractResponse
where
    S: AssistantService + CatalogService,
{
    if request.method == RequestMethod::Options {
        return ContractResponse::empty(200);
    }

    if request.method != endpoint.allowed_method() {
        return ContractResponse::error(405, "Method not allowed");
    }

    if endpoint.requires_model() && !service.gateway_state().is_configured() {
        warn!("model endpoint called while the AI service is not configured");
        return error_response(endpoint, CoreError::NotConfigured);
    }

    match dispatch(service, endpoint, request).await {
        Ok(response) => response,
        Err(e) => error_response(endpoint, e),
    }
}

/// Answer for a path or function name that maps to no endpoint.
pub fn route_not_found(method: RequestMethod) -> ContractResponse {
    if method == RequestMethod::Options {
        return ContractResponse::empty(200);
    }
    ContractResponse::error(404, "Not found")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{
            common::services::Service,
            contract::entities::ResponseBody,
            gateway::{ports::MockLLMClient, services::Gateway},
        },
        infrastructure::catalog::static_catalog::StaticRecipeCatalog,
    };
    use serde_json::json;

    type TestService = Service<MockLLMClient, StaticRecipeCatalog>;

    fn unconfigured() -> TestService {
        Service::new(
            Gateway::configure(None, |_| MockLLMClient::new()),
            StaticRecipeCatalog::new(),
        )
    }

    fn answering(text: &'static str) -> TestService {
        let gateway = Gateway::configure(Some("a-valid-gemini-key"), |_| {
            let mut client = MockLLMClient::new();
            client
                .expect_generate_with_text()
                .returning(move |_, _| Box::pin(async move { Ok(text.to_string()) }));
            client
        });
        Service::new(gateway, StaticRecipeCatalog::new())
    }

    fn failing() -> TestService {
        let gateway = Gateway::configure(Some("a-valid-gemini-key"), |_| {
            let mut client = MockLLMClient::new();
            client.expect_generate_with_text().returning(|_, _| {
                Box::pin(async {
                    Err(CoreError::ExternalServiceError("401 Unauthorized".to_string()))
                })
            });
            client
        });
        Service::new(gateway, StaticRecipeCatalog::new())
    }

    fn post(body: &str) -> ContractRequest {
        ContractRequest::new(RequestMethod::Post).with_body(body)
    }

    fn json_body(response: &ContractResponse) -> Value {
        match &response.body {
            ResponseBody::Json(value) => value.clone(),
            ResponseBody::Empty => panic!("expected a JSON body"),
        }
    }

    const MODEL_ENDPOINTS: [Endpoint; 4] = [
        Endpoint::IngredientSubstitution,
        Endpoint::ShoppingList,
        Endpoint::MealPlan,
        Endpoint::SmartSearch,
    ];

    #[tokio::test]
    async fn test_preflight_always_succeeds() {
        for service in [unconfigured(), failing()] {
            for endpoint in MODEL_ENDPOINTS {
                let response =
                    handle(&service, &endpoint, ContractRequest::new(RequestMethod::Options)).await;

                assert_eq!(response.status, 200);
                assert_eq!(response.body, ResponseBody::Empty);
                assert_eq!(response.headers().len(), 3);
            }
        }
    }

    #[tokio::test]
    async fn test_wrong_method_is_rejected_before_configuration_check() {
        let service = unconfigured();

        let response = handle(
            &service,
            &Endpoint::SmartSearch,
            ContractRequest::new(RequestMethod::Get),
        )
        .await;

        assert_eq!(response.status, 405);
        assert_eq!(json_body(&response), json!({"error": "Method not allowed"}));
    }

    #[tokio::test]
    async fn test_unconfigured_model_endpoints_return_503() {
        let service = unconfigured();

        for endpoint in MODEL_ENDPOINTS {
            let response = handle(&service, &endpoint, post(r#"{"query": "x"}"#)).await;

            assert_eq!(response.status, 503);
            assert_eq!(
                json_body(&response),
                json!({
                    "error": "AI service not configured",
                    "message": "Please configure your Gemini API key"
                })
            );
        }
    }

    #[tokio::test]
    async fn test_configuration_is_checked_before_validation() {
        let response = handle(&unconfigured(), &Endpoint::SmartSearch, post("{}")).await;
        assert_eq!(response.status, 503);
    }

    #[tokio::test]
    async fn test_status_reports_configuration() {
        let response = handle(
            &unconfigured(),
            &Endpoint::AiStatus,
            ContractRequest::new(RequestMethod::Get),
        )
        .await;

        assert_eq!(response.status, 200);
        assert_eq!(
            json_body(&response),
            json!({
                "configured": false,
                "message": "GEMINI_API_KEY environment variable not set"
            })
        );
    }

    #[tokio::test]
    async fn test_validation_errors() {
        let service = failing();

        let cases = [
            (Endpoint::SmartSearch, "{}", "Search query is required"),
            (Endpoint::SmartSearch, "", "Search query is required"),
            (Endpoint::ShoppingList, r#"{"recipes": []}"#, "At least one recipe is required"),
            (Endpoint::IngredientSubstitution, r#"{"ingredient": ""}"#, "Ingredient is required"),
            (Endpoint::MealPlan, "{not json", "Invalid JSON body"),
        ];

        for (endpoint, body, message) in cases {
            let response = handle(&service, &endpoint, post(body)).await;

            assert_eq!(response.status, 400, "{endpoint:?} {body}");
            assert_eq!(json_body(&response), json!({ "error": message }));
        }
    }

    #[tokio::test]
    async fn test_unexpected_error_uses_feature_label() {
        let response = handle(
            &failing(),
            &Endpoint::IngredientSubstitution,
            post(r#"{"ingredient": 12}"#),
        )
        .await;

        assert_eq!(response.status, 500);
        assert_eq!(
            json_body(&response),
            json!({
                "error": "Failed to generate ingredient substitutions",
                "message": "Invalid ingredient provided"
            })
        );
    }

    #[tokio::test]
    async fn test_upstream_failure_degrades_to_fallback() {
        let response = handle(
            &failing(),
            &Endpoint::IngredientSubstitution,
            post(r#"{"ingredient": "palta"}"#),
        )
        .await;

        assert_eq!(response.status, 200);
        let body = json_body(&response);
        assert_eq!(body["ingredient"], "palta");
        assert_eq!(
            body["substitutions"],
            json!([{
                "substitute": "Check recipe notes",
                "ratio": "1:1",
                "reason": "AI service temporarily unavailable",
                "notes": "Please consult traditional cooking resources"
            }])
        );
        assert!(body["generated_at"].as_str().unwrap().ends_with('Z'));
    }

    #[tokio::test]
    async fn test_non_json_answer_degrades_to_fallback() {
        let response = handle(
            &answering("I would suggest a nice cazuela."),
            &Endpoint::SmartSearch,
            post(r#"{"query": "  algo rico  "}"#),
        )
        .await;

        assert_eq!(response.status, 200);
        let body = json_body(&response);
        assert_eq!(body["query"], "  algo rico  ");
        assert_eq!(
            body["suggestions"]["primary_suggestions"][0]["dish_name"],
            "Basic Chilean Dish"
        );
    }

    #[tokio::test]
    async fn test_meal_plan_with_empty_body() {
        let response = handle(
            &answering(r#"{"week_plan": [{"day": "Lunes"}]}"#),
            &Endpoint::MealPlan,
            post("{}"),
        )
        .await;

        assert_eq!(response.status, 200);
        let body = json_body(&response);
        assert!(body["meal_plan"]["week_plan"].is_array());
        assert_eq!(body["meal_plan"]["week_plan"][0]["day"], "Lunes");
        assert_eq!(body["preferences_used"], json!({}));
    }

    #[tokio::test]
    async fn test_shopping_list_counts_recipes() {
        let response = handle(
            &failing(),
            &Endpoint::ShoppingList,
            post(r#"{"recipes": [{"name": "Cazuela", "ingredients": ["papas"]}, {"name": "Pebre", "ingredients": []}]}"#),
        )
        .await;

        assert_eq!(response.status, 200);
        let body = json_body(&response);
        assert_eq!(body["recipe_count"], 2);
        assert_eq!(
            body["shopping_list"]["sections"][0]["items"][0]["item"],
            "papas"
        );
    }

    #[tokio::test]
    async fn test_recipe_lookup() {
        let service = unconfigured();
        let get = || ContractRequest::new(RequestMethod::Get);

        let found = handle(&service, &Endpoint::Recipe { id: "1".to_string() }, get()).await;
        assert_eq!(found.status, 200);
        assert_eq!(json_body(&found)["name"], "Empanadas de Pino");

        let missing = handle(&service, &Endpoint::Recipe { id: "99".to_string() }, get()).await;
        assert_eq!(missing.status, 404);
        assert_eq!(json_body(&missing), json!({"error": "Recipe not found"}));
    }

    #[tokio::test]
    async fn test_recipe_search_uses_q_parameter() {
        let request = ContractRequest::new(RequestMethod::Get)
            .with_query([("q".to_string(), "pumpkin".to_string())].into());

        let response = handle(&unconfigured(), &Endpoint::RecipeSearch, request).await;

        let names: Vec<_> = json_body(&response)
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["name"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["Cazuela", "Sopaipillas"]);
    }

    #[test]
    fn test_route_not_found() {
        let response = route_not_found(RequestMethod::Post);
        assert_eq!(response.status, 404);
        assert_eq!(json_body(&response), json!({"error": "Not found"}));
        assert_eq!(route_not_found(RequestMethod::Options).status, 200);
    }
}
