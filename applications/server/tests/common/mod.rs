/// Shared test utilities
use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use roster_server::{create_router, AppState, GraphqlSettings, ServerConfig};
use roster_storage::{shared, SharedStore, UserStore};
use serde_json::{json, Value};
use tower::util::ServiceExt;

/// Router over a freshly seeded store, plus a handle on that store
pub fn create_test_app() -> (Router, SharedStore) {
    create_test_app_with(&ServerConfig::default().graphql)
}

pub fn create_test_app_with(settings: &GraphqlSettings) -> (Router, SharedStore) {
    let store = shared(UserStore::seeded());
    let app_state = AppState::new(store.clone(), settings);
    (create_router(app_state, settings), store)
}

/// POST a GraphQL document and return the status and decoded body
#[allow(dead_code)]
pub async fn graphql(app: &Router, query: &str, variables: Value) -> (StatusCode, Value) {
    let body = json!({ "query": query, "variables": variables });
    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    send(app, request).await
}

#[allow(dead_code)]
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(&bytes).into_owned())
        })
    };
    (status, value)
}
