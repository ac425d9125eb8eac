//! Common test utilities for integration tests
//!
//! This module provides shared infrastructure for integration tests:
//! - A private in-memory database with the schema applied
//! - The full router built over it
//! - Request helpers driving the router with `oneshot`

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use todo_api::{
    app::{build_router, AppState},
    config::{ApiConfig, Config, DatabaseConfig, JwtConfig},
};
use todo_shared::db::{pool, schema};
use tower::ServiceExt;

pub const TEST_SECRET: &str = "integration-test-secret-0123456789abcdef";

/// Test context containing all necessary resources
pub struct TestContext {
    pub db: sqlx::SqlitePool,
    pub app: Router,
}

impl TestContext {
    /// Creates a new test context with a fresh database
    pub async fn new() -> anyhow::Result<Self> {
        let db = pool::create_pool(pool::DatabaseConfig::in_memory()).await?;
        schema::ensure_schema(&db).await?;

        let config = Config {
            api: ApiConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                cors_origins: vec!["*".to_string()],
            },
            database: DatabaseConfig {
                url: "sqlite::memory:".to_string(),
                max_connections: 1,
            },
            jwt: JwtConfig {
                secret: TEST_SECRET.to_string(),
            },
        };

        let app = build_router(AppState::new(db.clone(), config));

        Ok(Self { db, app })
    }

    /// Sends a request and returns the status and parsed JSON body
    ///
    /// Bodies that are not JSON come back as `Value::Null`.
    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);

        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }

        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        self.send_request(request).await
    }

    /// Sends a prebuilt request
    pub async fn send_request(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        (status, body)
    }

    /// Registers a user and asserts success
    pub async fn register(&self, username: &str, password: &str) {
        let (status, body) = self
            .send(
                Method::POST,
                "/register",
                None,
                Some(json!({ "username": username, "password": password })),
            )
            .await;

        assert_eq!(status, StatusCode::OK, "register failed: {}", body);
    }

    /// Registers and logs in a user, returning `(user_id, token)`
    pub async fn login_new_user(&self, username: &str) -> (i64, String) {
        self.register(username, "password").await;

        let (status, body) = self
            .send(
                Method::POST,
                "/login",
                None,
                Some(json!({ "username": username, "password": "password" })),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "login failed: {}", body);

        let user_id = body["userId"].as_i64().unwrap();
        let token = body["token"].as_str().unwrap().to_string();
        (user_id, token)
    }

    /// Creates a todo through the API
    pub async fn create_todo(&self, token: &str, description: &str, status: &str) {
        let (code, body) = self
            .send(
                Method::POST,
                "/todos",
                Some(token),
                Some(json!({ "description": description, "status": status })),
            )
            .await;

        assert_eq!(code, StatusCode::OK, "create todo failed: {}", body);
    }

    /// Lists the caller's todos through the API
    pub async fn list_todos(&self, token: &str) -> Vec<Value> {
        let (status, body) = self.send(Method::GET, "/todos", Some(token), None).await;
        assert_eq!(status, StatusCode::OK, "list todos failed: {}", body);

        body["todos"].as_array().cloned().unwrap_or_default()
    }
}
