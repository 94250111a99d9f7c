#![allow(dead_code)]

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
};
use axum_test::TestServer;
use recetario_api::{
    application::http::server::http_server::{router, state},
    args::{Args, DEFAULT_LOG_FILTER, GeminiArgs, LogArgs, ServerArgs},
};
use recetario_core::{
    application::{RecetarioService, create_service},
    domain::common::RecetarioConfig,
};
use serde_json::{Value, json};
use test_context::AsyncTestContext;
use tokio::task::JoinHandle;

pub const TEST_API_KEY: &str = "test-gemini-key-0123456789";

#[derive(Debug, Clone)]
pub enum GeminiReply {
    Text(String),
    Status(u16),
}

#[derive(Clone)]
struct FakeGeminiState {
    reply: Arc<Mutex<GeminiReply>>,
    calls: Arc<AtomicUsize>,
    last_api_key: Arc<Mutex<Option<String>>>,
    last_request: Arc<Mutex<Option<Value>>>,
}

/// Local stand-in for the Gemini `generateContent` endpoint.
pub struct FakeGemini {
    pub base_url: String,
    state: FakeGeminiState,
    handle: JoinHandle<()>,
}

async fn generate_content(
    State(state): State<FakeGeminiState>,
    headers: HeaderMap,
    Json(request): Json<Value>,
) -> Response {
    state.calls.fetch_add(1, Ordering::SeqCst);
    *state.last_api_key.lock().unwrap() = headers
        .get("x-goog-api-key")
        .and_then(|value| value.to_str().ok())
        .map(String::from);
    *state.last_request.lock().unwrap() = Some(request);

    let reply = state.reply.lock().unwrap().clone();
    match reply {
        GeminiReply::Text(text) => Json(json!({
            "candidates": [{ "content": { "parts": [{ "text": text }] } }]
        }))
        .into_response(),
        GeminiReply::Status(code) => (
            StatusCode::from_u16(code).unwrap(),
            Json(json!({ "error": { "message": "fake gemini failure" } })),
        )
            .into_response(),
    }
}

impl FakeGemini {
    pub async fn start() -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let state = FakeGeminiState {
            reply: Arc::new(Mutex::new(GeminiReply::Status(500))),
            calls: Arc::new(AtomicUsize::new(0)),
            last_api_key: Arc::new(Mutex::new(None)),
            last_request: Arc::new(Mutex::new(None)),
        };

        let app = Router::new()
            .route("/v1beta/models/{*rest}", post(generate_content))
            .with_state(state.clone());

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{addr}/v1beta"),
            state,
            handle,
        }
    }

    pub fn reply_with(&self, reply: GeminiReply) {
        *self.state.reply.lock().unwrap() = reply;
    }

    pub fn reply_with_json(&self, value: Value) {
        self.reply_with(GeminiReply::Text(value.to_string()));
    }

    pub fn calls(&self) -> usize {
        self.state.calls.load(Ordering::SeqCst)
    }

    pub fn last_api_key(&self) -> Option<String> {
        self.state.last_api_key.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> Option<Value> {
        self.state.last_request.lock().unwrap().clone()
    }
}

impl Drop for FakeGemini {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

pub fn test_args(api_key: Option<&str>, base_url: &str, root_path: &str) -> Args {
    Args {
        server: ServerArgs {
            host: "127.0.0.1".to_string(),
            port: 0,
            root_path: root_path.to_string(),
        },
        gemini: GeminiArgs {
            api_key: api_key.map(String::from),
            model: "gemini-1.5-flash".to_string(),
            base_url: base_url.to_string(),
        },
        log: LogArgs {
            filter: DEFAULT_LOG_FILTER.to_string(),
            json: false,
        },
    }
}

pub fn test_server(args: Args) -> TestServer {
    let app = router(state(Arc::new(args))).unwrap();
    TestServer::new(app).unwrap()
}

pub fn test_service(args: Args) -> RecetarioService {
    create_service(RecetarioConfig::from(args))
}

/// Server whose Gemini key is missing; model endpoints must refuse work.
pub struct UnconfiguredApp {
    pub server: TestServer,
    pub args: Args,
}

impl AsyncTestContext for UnconfiguredApp {
    async fn setup() -> Self {
        let args = test_args(None, "http://127.0.0.1:9/v1beta", "");

        Self {
            server: test_server(args.clone()),
            args,
        }
    }
}

/// Server with a valid-looking key pointed at a [`FakeGemini`].
pub struct ConfiguredApp {
    pub server: TestServer,
    pub gemini: FakeGemini,
    pub args: Args,
}

impl AsyncTestContext for ConfiguredApp {
    async fn setup() -> Self {
        let gemini = FakeGemini::start().await;
        let args = test_args(Some(TEST_API_KEY), &gemini.base_url, "");

        Self {
            server: test_server(args.clone()),
            gemini,
            args,
        }
    }
}

/// Drops the timestamp so two envelopes can be compared.
pub fn without_timestamp(mut body: Value) -> Value {
    if let Some(object) = body.as_object_mut() {
        object.remove("generated_at");
    }
    body
}
