//! Common test utilities for integration tests
//!
//! Each `TestApp` owns a private in-memory SQLite database with the schema
//! applied, so tests never share state.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::Name;
use fake::Fake;
use laptop_inventory_backend::{
    auth::{BcryptHasher, PasswordService},
    config::AppConfig,
    db, routes,
    state::AppState,
};
use serde_json::{json, Value};
use sqlx::SqlitePool;
use std::sync::Arc;
use tower::ServiceExt;

/// Test application wrapper
pub struct TestApp {
    pub app: Router,
    pub pool: SqlitePool,
}

/// A registered user and the token returned at registration
pub struct TestUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub token: String,
}

impl TestApp {
    /// Create a new test application backed by a fresh in-memory database
    pub async fn new() -> Self {
        let config = test_config();
        let pool = db::create_pool(&config.database.url, config.database.max_connections)
            .await
            .expect("Failed to create test database pool");
        db::run_migrations(&pool)
            .await
            .expect("Failed to run migrations");

        // Minimum bcrypt cost keeps the suite fast
        let passwords = PasswordService::with_hasher(Arc::new(BcryptHasher::new(4)));
        let state = AppState::with_password_service(pool.clone(), config, passwords);
        let app = routes::create_router(state);

        Self { app, pool }
    }

    async fn send(
        &self,
        method: &str,
        path: &str,
        token: Option<&str>,
        body: Option<&Value>,
    ) -> (StatusCode, String) {
        let mut builder = Request::builder().method(method).uri(path);
        if let Some(token) = token {
            builder = builder.header("Authorization", format!("Bearer {}", token));
        }
        let body = match body {
            Some(json) => {
                builder = builder.header("Content-Type", "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        let response = self
            .app
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> (StatusCode, String) {
        self.send("GET", path, None, None).await
    }

    /// Make a POST request with JSON body
    pub async fn post(&self, path: &str, body: &Value) -> (StatusCode, String) {
        self.send("POST", path, None, Some(body)).await
    }

    /// Make an authenticated GET request
    pub async fn get_auth(&self, path: &str, token: &str) -> (StatusCode, String) {
        self.send("GET", path, Some(token), None).await
    }

    /// Make an authenticated POST request with JSON body
    pub async fn post_auth(&self, path: &str, token: &str, body: &Value) -> (StatusCode, String) {
        self.send("POST", path, Some(token), Some(body)).await
    }

    /// Make an authenticated PUT request with JSON body
    pub async fn put_auth(&self, path: &str, token: &str, body: &Value) -> (StatusCode, String) {
        self.send("PUT", path, Some(token), Some(body)).await
    }

    /// Make an authenticated DELETE request
    pub async fn delete_auth(&self, path: &str, token: &str) -> (StatusCode, String) {
        self.send("DELETE", path, Some(token), None).await
    }

    /// Register a user with the given credentials
    pub async fn register(&self, name: &str, email: &str, password: &str) -> TestUser {
        let (status, body) = self
            .post(
                "/api/v1/auth/register",
                &json!({ "name": name, "email": email, "password": password }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "registration failed: {}", body);

        let body: Value = serde_json::from_str(&body).unwrap();
        TestUser {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            token: body["access_token"].as_str().unwrap().to_string(),
        }
    }

    /// Register a user with generated name and email
    pub async fn create_test_user(&self) -> TestUser {
        let name: String = Name().fake();
        let email: String = SafeEmail().fake();
        self.register(&name, &email, "SecurePassword123!").await
    }

    /// Create a laptop and return its JSON representation
    pub async fn create_laptop(&self, token: &str, name: &str, description: &str) -> Value {
        let (status, body) = self
            .post_auth(
                "/api/v1/laptops",
                token,
                &json!({ "name": name, "description": description }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "create failed: {}", body);
        serde_json::from_str(&body).unwrap()
    }
}

fn test_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.server.port = 0;
    config.database.url = "sqlite::memory:".to_string();
    config.database.max_connections = 1;
    config.jwt.secret = "test-secret-key-for-testing-only-32chars".to_string();
    config.jwt.token_expiry_secs = 3600;
    config
}
