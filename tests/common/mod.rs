//! Shared test fixtures
//!
//! Provides an in-memory test database with the full schema, a test
//! server with cookie persistence, and helpers for seeding users and
//! walking redirects.

#![allow(dead_code)]

use std::str::FromStr;

use axum_test::{TestResponse, TestServer, TestServerConfig};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use warbler::auth::service;
use warbler::db::schema;
use warbler::models::User;
use warbler::server::init::create_app;

/// Create an in-memory database with the schema applied.
///
/// A single connection keeps the in-memory database alive for the whole
/// test; foreign keys are on so cascade deletes behave as in production.
pub async fn test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .expect("valid sqlite options")
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("Failed to create test database pool");

    schema::create_all(&pool).await.expect("Failed to create schema");
    pool
}

/// Create a test server over the app, with a cookie jar so sessions and
/// flash messages survive across requests like in a browser.
pub fn test_server(pool: &SqlitePool) -> TestServer {
    let app = create_app(pool.clone());
    let config = TestServerConfig {
        save_cookies: true,
        ..TestServerConfig::default()
    };
    TestServer::new_with_config(app, config).expect("Failed to start test server")
}

/// Sign up a user directly through the authentication service.
pub async fn signup_user(
    pool: &SqlitePool,
    username: &str,
    email: &str,
    password: &str,
) -> User {
    service::signup(pool, username, email, password, None)
        .await
        .expect("Failed to sign up test user")
}

/// Log in through the login view so the server sets the session cookie.
pub async fn login_as(server: &TestServer, username: &str, password: &str) -> TestResponse {
    server
        .post("/login")
        .form(&[("username", username), ("password", password)])
        .await
}

/// Follow a single redirect response to its destination page.
pub async fn follow_redirect(server: &TestServer, response: &TestResponse) -> TestResponse {
    let location = response
        .headers()
        .get("location")
        .expect("response has no Location header")
        .to_str()
        .expect("Location header is not valid UTF-8")
        .to_string();
    server.get(&location).await
}

/// Count the rows in the likes table.
pub async fn count_likes(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM likes")
        .fetch_one(pool)
        .await
        .expect("Failed to count likes")
}
