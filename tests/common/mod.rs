// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::{
    body::Body,
    http::{header, Request},
};
use postboard::config::Config;
use postboard::db::{FirestoreDb, MemoryDb};
use postboard::routes::create_router;
use postboard::AppState;
use serde_json::{json, Value};
use std::path::PathBuf;
use std::sync::Arc;
use tower::ServiceExt;

/// Check if emulator is available via environment variable.
#[allow(dead_code)]
pub fn emulator_available() -> bool {
    std::env::var("FIRESTORE_EMULATOR_HOST").is_ok()
}

/// Skip test with message if emulator not available.
#[macro_export]
macro_rules! require_emulator {
    () => {
        if !crate::common::emulator_available() {
            eprintln!("⚠️  Skipping: FIRESTORE_EMULATOR_HOST not set");
            return;
        }
    };
}

/// Create a test database connection.
#[allow(dead_code)]
pub async fn test_db() -> FirestoreDb {
    FirestoreDb::new("test-project")
        .await
        .expect("Failed to connect to Firestore emulator")
}

/// Fresh image directory for one test.
#[allow(dead_code)]
pub fn scratch_image_root() -> PathBuf {
    let dir = std::env::temp_dir().join(format!("postboard-test-{}", uuid::Uuid::new_v4()));
    std::fs::create_dir_all(dir.join("images")).unwrap();
    dir
}

/// Create a test app backed by an in-memory store.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    let mut config = Config::test_default();
    config.image_root = scratch_image_root();

    let state = Arc::new(AppState::new(config, Arc::new(MemoryDb::new())));
    (create_router(state.clone()), state)
}

/// POST a GraphQL document and return the decoded JSON response.
#[allow(dead_code)]
pub async fn graphql(app: &axum::Router, token: Option<&str>, query: &str, variables: Value) -> Value {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/graphql")
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    let body = json!({ "query": query, "variables": variables }).to_string();
    let response = app
        .clone()
        .oneshot(builder.body(Body::from(body)).unwrap())
        .await
        .unwrap();

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// `extensions.code` of the first error in a GraphQL response.
#[allow(dead_code)]
pub fn error_code(response: &Value) -> u64 {
    response["errors"][0]["extensions"]["code"]
        .as_u64()
        .unwrap_or_else(|| panic!("expected an error, got {}", response))
}

/// Tokens and ID for a registered, logged-in user.
#[allow(dead_code)]
pub struct TestUser {
    pub user_id: String,
    pub token: String,
    pub refresh_token: String,
}

#[allow(dead_code)]
pub async fn register(app: &axum::Router, email: &str, password: &str) -> Value {
    graphql(
        app,
        None,
        r#"mutation($input: userInputData!) {
            createUser(userInput: $input) { _id email name status }
        }"#,
        json!({ "input": { "email": email, "name": "Tester", "password": password } }),
    )
    .await
}

#[allow(dead_code)]
pub async fn login(app: &axum::Router, email: &str, password: &str) -> Value {
    graphql(
        app,
        None,
        r#"query($email: String!, $password: String!) {
            login(email: $email, password: $password) { token expiresIn refreshToken userId }
        }"#,
        json!({ "email": email, "password": password }),
    )
    .await
}

/// Register then log in.
#[allow(dead_code)]
pub async fn signed_in_user(app: &axum::Router, email: &str) -> TestUser {
    let created = register(app, email, "secret123").await;
    assert!(created["errors"].is_null(), "register failed: {}", created);

    let session = login(app, email, "secret123").await;
    let data = &session["data"]["login"];
    TestUser {
        user_id: data["userId"].as_str().unwrap().to_string(),
        token: data["token"].as_str().unwrap().to_string(),
        refresh_token: data["refreshToken"].as_str().unwrap().to_string(),
    }
}

#[allow(dead_code)]
pub async fn create_post(app: &axum::Router, token: &str, title: &str, image_url: &str) -> Value {
    graphql(
        app,
        Some(token),
        r#"mutation($input: postInputData!) {
            createPost(postInput: $input) { _id title content imageUrl createdAt creator { _id } }
        }"#,
        json!({ "input": { "title": title, "imageUrl": image_url, "content": "Post body text" } }),
    )
    .await
}
