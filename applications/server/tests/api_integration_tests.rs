/// API integration tests
/// Drives the router with complete GraphQL request/response cycles
mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use common::{create_test_app, create_test_app_with, graphql, send};
use roster_server::{GraphqlSettings, ServerConfig};
use serde_json::{json, Value};

const USER_FIELDS: &str = "id name email role status birthdate";

fn get_users() -> String {
    format!("query {{ getUsers {{ {USER_FIELDS} }} }}")
}

fn get_user_by_id() -> String {
    format!("query ($id: ID!) {{ getUserById(id: $id) {{ {USER_FIELDS} }} }}")
}

fn create_user() -> String {
    format!(
        "mutation ($name: String!, $email: String!, $role: Role!, $status: UserStatus!, $birthdate: Date!) {{
            createUser(name: $name, email: $email, role: $role, status: $status, birthdate: $birthdate) {{ {USER_FIELDS} }}
        }}"
    )
}

fn update_user() -> String {
    format!(
        "mutation ($id: ID!, $name: String!, $email: String!, $role: Role!, $status: UserStatus!, $birthdate: Date!) {{
            updateUser(id: $id, name: $name, email: $email, role: $role, status: $status, birthdate: $birthdate) {{ {USER_FIELDS} }}
        }}"
    )
}

fn delete_user() -> String {
    format!("mutation ($id: ID!) {{ deleteUser(id: $id) {{ {USER_FIELDS} }} }}")
}

fn frank() -> Value {
    json!({
        "name": "Frank",
        "email": "frank@example.com",
        "role": "moderator",
        "status": "active",
        "birthdate": "1995-07-20"
    })
}

fn first_error(body: &Value) -> &str {
    body["errors"][0]["message"].as_str().unwrap_or_default()
}

#[tokio::test]
async fn test_get_users_returns_seeds_in_order() {
    let (app, _store) = create_test_app();

    let (status, body) = graphql(&app, &get_users(), json!({})).await;

    assert_eq!(status, StatusCode::OK);
    let users = body["data"]["getUsers"].as_array().unwrap();
    assert_eq!(users.len(), 5);
    let ids: Vec<_> = users.iter().map(|u| u["id"].as_str().unwrap()).collect();
    assert_eq!(ids, ["1", "2", "3", "4", "5"]);
    assert_eq!(users[0]["name"], "Alice Johnson");
    assert_eq!(users[0]["role"], "admin");
    assert_eq!(users[0]["birthdate"], "1990-05-14T00:00:00.000Z");
}

#[tokio::test]
async fn test_get_users_is_idempotent() {
    let (app, _store) = create_test_app();

    let (_, first) = graphql(&app, &get_users(), json!({})).await;
    let (_, second) = graphql(&app, &get_users(), json!({})).await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_get_user_by_id() {
    let (app, _store) = create_test_app();

    let (_, body) = graphql(&app, &get_user_by_id(), json!({ "id": "3" })).await;
    assert_eq!(body["data"]["getUserById"]["name"], "Carol Martinez");

    let (status, body) = graphql(&app, &get_user_by_id(), json!({ "id": "999" })).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["data"]["getUserById"].is_null());
    assert!(body.get("errors").is_none());
}

#[tokio::test]
async fn test_create_user_assigns_next_id() {
    let (app, store) = create_test_app();

    let (status, body) = graphql(&app, &create_user(), frank()).await;

    assert_eq!(status, StatusCode::OK);
    let created = &body["data"]["createUser"];
    assert_eq!(created["id"], "6");
    assert_eq!(created["name"], "Frank");
    assert_eq!(created["role"], "moderator");
    assert_eq!(created["birthdate"], "1995-07-20T00:00:00.000Z");

    let (_, body) = graphql(&app, &get_users(), json!({})).await;
    let users = body["data"]["getUsers"].as_array().unwrap();
    assert_eq!(users.len(), 6);
    assert_eq!(users[5]["id"], "6");
    assert_eq!(store.read().await.len(), 6);
}

#[tokio::test]
async fn test_create_user_keeps_full_timestamp() {
    let (app, _store) = create_test_app();
    let mut vars = frank();
    vars["birthdate"] = json!("1995-07-20T13:45:10.250Z");

    let (_, body) = graphql(&app, &create_user(), vars).await;
    let id = body["data"]["createUser"]["id"].as_str().unwrap().to_string();

    let (_, body) = graphql(&app, &get_user_by_id(), json!({ "id": id })).await;
    assert_eq!(
        body["data"]["getUserById"]["birthdate"],
        "1995-07-20T13:45:10.250Z"
    );
}

#[tokio::test]
async fn test_ids_are_not_reused_after_delete() {
    let (app, _store) = create_test_app();

    graphql(&app, &delete_user(), json!({ "id": "5" })).await;
    let (_, body) = graphql(&app, &create_user(), frank()).await;

    assert_eq!(body["data"]["createUser"]["id"], "6");
}

#[tokio::test]
async fn test_update_user_replaces_fields() {
    let (app, _store) = create_test_app();
    let vars = json!({
        "id": "2",
        "name": "Bob Smith",
        "email": "bob.smith@example.com",
        "role": "admin",
        "status": "active",
        "birthdate": "1985-11-23"
    });

    let (_, body) = graphql(&app, &update_user(), vars).await;
    assert_eq!(body["data"]["updateUser"]["role"], "admin");
    assert_eq!(body["data"]["updateUser"]["status"], "active");

    let (_, body) = graphql(&app, &get_users(), json!({})).await;
    let users = body["data"]["getUsers"].as_array().unwrap();
    assert_eq!(users.len(), 5);
    assert_eq!(users[1]["id"], "2");
    assert_eq!(users[1]["role"], "admin");
    assert_eq!(users[0]["role"], "admin");
    assert_eq!(users[2]["role"], "moderator");
    assert_eq!(users[3]["role"], "user");
}

#[tokio::test]
async fn test_update_unknown_user_is_error() {
    let (app, store) = create_test_app();
    let mut vars = frank();
    vars["id"] = json!("999");

    let (status, body) = graphql(&app, &update_user(), vars).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(first_error(&body), "User not found");
    assert!(body["data"].is_null());
    assert_eq!(store.read().await.len(), 5);
}

#[tokio::test]
async fn test_delete_user_returns_removed_record() {
    let (app, _store) = create_test_app();

    let (_, body) = graphql(&app, &delete_user(), json!({ "id": "3" })).await;
    assert_eq!(body["data"]["deleteUser"]["name"], "Carol Martinez");

    let (_, body) = graphql(&app, &get_user_by_id(), json!({ "id": "3" })).await;
    assert!(body["data"]["getUserById"].is_null());

    let (_, body) = graphql(&app, &get_users(), json!({})).await;
    let ids: Vec<_> = body["data"]["getUsers"]
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(ids, ["1", "2", "4", "5"]);
}

#[tokio::test]
async fn test_delete_unknown_user_is_error() {
    let (app, store) = create_test_app();

    let (_, body) = graphql(&app, &delete_user(), json!({ "id": "999" })).await;

    assert_eq!(first_error(&body), "User not found");
    assert_eq!(store.read().await.len(), 5);
}

#[tokio::test]
async fn test_invalid_date_is_rejected() {
    let (app, store) = create_test_app();
    let mut vars = frank();
    vars["birthdate"] = json!("not-a-date");

    let (_, body) = graphql(&app, &create_user(), vars).await;

    assert!(body["errors"].as_array().is_some_and(|e| !e.is_empty()));
    assert_eq!(store.read().await.len(), 5);
}

#[tokio::test]
async fn test_negative_year_is_rejected_and_list_stays_readable() {
    let (app, store) = create_test_app();
    let mut vars = frank();
    vars["birthdate"] = json!("-0001-01-01");

    let (_, body) = graphql(&app, &create_user(), vars).await;

    assert!(first_error(&body).contains("Invalid date"));
    assert_eq!(store.read().await.len(), 5);

    let (_, body) = graphql(&app, &get_users(), json!({})).await;
    for user in body["data"]["getUsers"].as_array().unwrap() {
        let birthdate = user["birthdate"].as_str().unwrap();
        assert!(roster_core::Birthdate::parse(birthdate).is_ok(), "{birthdate}");
    }
}

#[tokio::test]
async fn test_unknown_role_is_rejected() {
    let (app, store) = create_test_app();
    let mut vars = frank();
    vars["role"] = json!("owner");

    let (_, body) = graphql(&app, &create_user(), vars).await;

    assert!(body["errors"].as_array().is_some_and(|e| !e.is_empty()));
    assert_eq!(store.read().await.len(), 5);
}

#[tokio::test]
async fn test_missing_argument_is_rejected() {
    let (app, store) = create_test_app();

    let (_, body) = graphql(
        &app,
        "mutation { createUser(name: \"Frank\", email: \"frank@example.com\") { id } }",
        json!({}),
    )
    .await;

    assert!(body["errors"].as_array().is_some_and(|e| !e.is_empty()));
    assert_eq!(store.read().await.len(), 5);
}

#[tokio::test]
async fn test_health_reports_user_count() {
    let (app, _store) = create_test_app();

    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["users"], 5);
}

#[tokio::test]
async fn test_graphiql_served_when_enabled() {
    let (app, _store) = create_test_app();

    let request = Request::builder()
        .uri("/")
        .header(header::ACCEPT, "text/html")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.as_str().unwrap().to_lowercase().contains("graphiql"));
}

#[tokio::test]
async fn test_graphiql_absent_when_disabled() {
    let settings = GraphqlSettings {
        playground: false,
        ..ServerConfig::default().graphql
    };
    let (app, _store) = create_test_app_with(&settings);

    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let (status, _) = send(&app, request).await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let (app, _store) = create_test_app();

    let request = Request::builder()
        .uri("/api/users")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "No route for /api/users");
}
