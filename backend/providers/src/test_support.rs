//! In-process stand-in for the chat completions endpoint.

use std::sync::{Arc, Mutex};

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    routing::post,
    Router,
};
use tokio::net::TcpListener;

#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: String,
}

struct StubState {
    status: StatusCode,
    body: String,
    requests: Mutex<Vec<CapturedRequest>>,
}

pub struct Stub {
    pub url: String,
    state: Arc<StubState>,
}

impl Stub {
    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.state.requests.lock().unwrap().clone()
    }
}

/// Serve `body` with `status` for every POST to `/v1/chat/completions`.
pub async fn spawn_stub(status: StatusCode, body: impl Into<String>) -> Stub {
    let state = Arc::new(StubState {
        status,
        body: body.into(),
        requests: Mutex::new(Vec::new()),
    });

    let app = Router::new()
        .route("/v1/chat/completions", post(handle))
        .with_state(state.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    Stub {
        url: format!("http://{addr}/v1/chat/completions"),
        state,
    }
}

/// A completion body whose first choice carries `content`.
pub fn completion_body(content: &str) -> String {
    serde_json::json!({
        "choices": [{ "message": { "role": "assistant", "content": content } }]
    })
    .to_string()
}

async fn handle(
    State(state): State<Arc<StubState>>,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, String) {
    let header_str = |name: header::HeaderName| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };
    state.requests.lock().unwrap().push(CapturedRequest {
        authorization: header_str(header::AUTHORIZATION),
        content_type: header_str(header::CONTENT_TYPE),
        body,
    });
    (state.status, state.body.clone())
}
