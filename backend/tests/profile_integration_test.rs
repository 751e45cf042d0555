//! Integration tests for profile endpoints

mod common;

use axum::http::StatusCode;
use serde_json::Value;

#[tokio::test]
async fn test_get_profile_requires_auth() {
    let app = common::TestApp::new().await;

    let (status, _) = app.get("/api/v1/profile").await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_get_profile_success() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;

    let (status, response) = app.get_auth("/api/v1/profile", &user.token).await;

    assert_eq!(status, StatusCode::OK);

    let response: Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["email"], user.email.as_str());
    assert_eq!(response["name"], user.name.as_str());
    assert!(response["laptops"].as_array().unwrap().is_empty());
    assert!(response.get("password_hash").is_none());
}

#[tokio::test]
async fn test_profile_lists_only_own_laptops() {
    let app = common::TestApp::new().await;
    let alice = app.register("Alice", "alice@x.com", "p1").await;
    let bob = app.register("Bob", "bob@x.com", "p2").await;

    app.create_laptop(&alice.token, "L1", "D1").await;
    app.create_laptop(&alice.token, "L2", "D2").await;
    app.create_laptop(&bob.token, "B1", "BD1").await;

    let (status, response) = app.get_auth("/api/v1/profile", &alice.token).await;
    assert_eq!(status, StatusCode::OK);

    let response: Value = serde_json::from_str(&response).unwrap();
    let names: Vec<_> = response["laptops"]
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["L1", "L2"]);
}
