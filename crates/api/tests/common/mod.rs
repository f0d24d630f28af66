//! Common test utilities for integration tests.
//!
//! These tests run against a real PostgreSQL database. Set the
//! `TEST_DATABASE_URL` environment variable to enable them; without it every
//! test skips itself rather than failing.

// Allow dead code in this module - these are helper utilities that may not be
// used by all integration tests.
#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Method, Request, Response, StatusCode},
    Router,
};
use fake::faker::internet::en::SafeEmail;
use fake::Fake;
use sqlx::{postgres::PgPoolOptions, PgPool};
use stackhouse_api::{
    app::create_app,
    config::{
        CommunityConfig, Config, DatabaseConfig, EmailConfig, LoggingConfig, SecurityConfig,
        ServerConfig,
    },
};
use std::time::Duration;
use tower::ServiceExt;

/// Shared admin password used by the test configuration.
pub const TEST_ADMIN_PASSWORD: &str = "test-admin-password";

/// Community URL the join endpoint redirects to in tests.
pub const TEST_JOIN_URL: &str = "https://chat.example.com/test-community";

/// Connects to the test database, or returns `None` (skipping the test)
/// when `TEST_DATABASE_URL` is not set.
pub async fn try_test_pool() -> Option<PgPool> {
    let Ok(database_url) = std::env::var("TEST_DATABASE_URL") else {
        eprintln!("TEST_DATABASE_URL not set; skipping integration test");
        return None;
    };

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .min_connections(1)
        .acquire_timeout(Duration::from_secs(30))
        .connect(&database_url)
        .await
        .expect("Failed to connect to test database");

    sqlx::migrate!("../persistence/src/migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations on test database");

    Some(pool)
}

/// Test configuration built entirely in memory, no config files.
pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            request_timeout_secs: 30,
        },
        database: DatabaseConfig {
            url: String::new(),
            max_connections: 10,
            min_connections: 1,
            connect_timeout_secs: 10,
            idle_timeout_secs: 600,
        },
        logging: LoggingConfig {
            level: "warn".to_string(),
            format: "pretty".to_string(),
        },
        security: SecurityConfig {
            admin_password: TEST_ADMIN_PASSWORD.to_string(),
            cors_origins: vec![],
        },
        community: CommunityConfig {
            join_url: TEST_JOIN_URL.to_string(),
        },
        email: EmailConfig::default(),
    }
}

/// Builds the application router over the given pool.
pub fn create_test_app(pool: PgPool) -> Router {
    create_app(test_config(), pool)
}

/// Sends a JSON request without admin credentials.
pub async fn send_json(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    send_request(app, method, uri, body, None).await
}

/// Sends a JSON request with the shared admin password attached.
pub async fn send_admin_json(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    send_request(app, method, uri, body, Some(TEST_ADMIN_PASSWORD)).await
}

async fn send_request(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
    admin_password: Option<&str>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(password) = admin_password {
        builder = builder.header("X-Admin-Password", password);
    }

    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("Failed to build request");

    app.clone()
        .oneshot(request)
        .await
        .expect("Request failed")
}

/// Parses a response body as JSON, panicking with the raw body on failure.
pub async fn parse_response_body(response: Response<Body>) -> serde_json::Value {
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap_or_else(|_| {
        panic!(
            "Failed to parse response body. Status: {}, Body: {:?}",
            status,
            String::from_utf8_lossy(&body)
        )
    })
}

/// Generates a unique applicant email for this test run.
pub fn unique_email() -> String {
    let base: String = SafeEmail().fake();
    format!("it-{}-{}", uuid::Uuid::new_v4().simple(), base)
}

/// Submits an application and returns its JSON record.
pub async fn submit_application(app: &Router, name: &str, email: &str) -> serde_json::Value {
    let response = send_json(
        app,
        Method::POST,
        "/api/applications",
        Some(serde_json::json!({
            "name": name,
            "email": email,
            "portfolioUrl": "example.dev",
            "reason": "building a tool",
        })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    parse_response_body(response).await
}

/// Removes integration-test applications created by `unique_email`.
pub async fn cleanup_test_applications(pool: &PgPool) {
    sqlx::query("DELETE FROM applications WHERE email LIKE 'it-%'")
        .execute(pool)
        .await
        .expect("Failed to clean up test applications");
}
