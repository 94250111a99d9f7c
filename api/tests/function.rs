mod common;

use std::collections::HashMap;

use axum::http::Method;
use common::{
    ConfiguredApp, GeminiReply, UnconfiguredApp, test_args, test_service, without_timestamp,
};
use recetario_api::application::function::{FunctionEvent, handle_event};
use serde_json::{Value, json};
use test_context::test_context;

fn event(method: &str, path: &str, body: Option<Value>) -> FunctionEvent {
    FunctionEvent {
        http_method: method.to_string(),
        path: path.to_string(),
        body: body.map(|body| body.to_string()),
        query_string_parameters: None,
    }
}

#[tokio::test]
async fn test_status_function_without_key() {
    let service = test_service(test_args(None, "http://127.0.0.1:9/v1beta", ""));

    let response = handle_event(
        &service,
        event("GET", "/.netlify/functions/ai-status", None),
    )
    .await;

    assert_eq!(response.status_code, 200);
    assert_eq!(response.headers["Access-Control-Allow-Origin"], "*");
    assert_eq!(response.headers["Content-Type"], "application/json");
    assert_eq!(
        serde_json::from_str::<Value>(&response.body).unwrap(),
        json!({
            "configured": false,
            "message": "GEMINI_API_KEY environment variable not set"
        })
    );
}

#[tokio::test]
async fn test_preflight_and_unknown_function() {
    let service = test_service(test_args(None, "http://127.0.0.1:9/v1beta", ""));

    let preflight = handle_event(
        &service,
        event("OPTIONS", "/.netlify/functions/ai-meal-plan", None),
    )
    .await;
    assert_eq!(preflight.status_code, 200);
    assert_eq!(preflight.body, "");
    assert!(!preflight.headers.contains_key("Content-Type"));

    let unknown = handle_event(&service, event("GET", "/.netlify/functions/nope", None)).await;
    assert_eq!(unknown.status_code, 404);
}

#[tokio::test]
async fn test_recipe_id_from_query_parameter() {
    let service = test_service(test_args(None, "http://127.0.0.1:9/v1beta", ""));

    let mut request = event("GET", "/.netlify/functions/recipe", None);
    request.query_string_parameters = Some(HashMap::from([("id".to_string(), "1".to_string())]));

    let response = handle_event(&service, request).await;

    assert_eq!(response.status_code, 200);
    let body: Value = serde_json::from_str(&response.body).unwrap();
    assert_eq!(body["name"], "Empanadas de Pino");
}

#[test_context(ConfiguredApp)]
#[tokio::test]
async fn test_function_and_server_agree(ctx: &mut ConfiguredApp) {
    ctx.gemini.reply_with(GeminiReply::Status(500));
    let service = test_service(ctx.args.clone());

    let cases = [
        ("POST", "ai-smart-search", "/api/ai/smart-search", json!({ "query": "  " })),
        ("POST", "ai-smart-search", "/api/ai/smart-search", json!({ "query": "cena rápida" })),
        ("POST", "ai-meal-plan", "/api/ai/meal-plan", json!({ "preferences": { "budget": "low" } })),
        ("POST", "ai-shopping-list", "/api/ai/shopping-list", json!({ "recipes": [{ "name": "Pebre", "ingredients": ["tomate"] }] })),
        ("POST", "ai-ingredient-substitution", "/api/ai/ingredient-substitution", json!({ "ingredient": 42 })),
        ("GET", "ai-ingredient-substitution", "/api/ai/ingredient-substitution", json!({})),
        ("GET", "recipe/1", "/api/recipes/1", json!({})),
        ("POST", "/api/ai/meal-plan/", "/api/ai/meal-plan/", json!({})),
        ("GET", "/api/recipes/1/", "/api/recipes/1/", json!({})),
    ];

    for (method, function, path, body) in cases {
        let function_path = if function.starts_with('/') {
            function.to_string()
        } else {
            format!("/.netlify/functions/{function}")
        };
        let function_response =
            handle_event(&service, event(method, &function_path, Some(body.clone()))).await;

        let server_response = ctx
            .server
            .method(Method::from_bytes(method.as_bytes()).unwrap(), path)
            .json(&body)
            .await;

        assert_eq!(
            function_response.status_code,
            server_response.status_code().as_u16(),
            "{function}"
        );
        assert_eq!(
            without_timestamp(serde_json::from_str(&function_response.body).unwrap()),
            without_timestamp(server_response.json::<Value>()),
            "{function}"
        );
    }
}

#[test_context(UnconfiguredApp)]
#[tokio::test]
async fn test_unconfigured_function_refuses_model_work(ctx: &mut UnconfiguredApp) {
    let service = test_service(ctx.args.clone());

    let response = handle_event(
        &service,
        event(
            "POST",
            "/.netlify/functions/ai-shopping-list",
            Some(json!({ "recipes": [] })),
        ),
    )
    .await;

    assert_eq!(response.status_code, 503);
}
