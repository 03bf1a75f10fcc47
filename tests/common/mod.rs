//! Shared helpers for black-box router tests.
//!
//! Each test server runs against its own in-memory SQLite database and
//! keeps a cookie jar across requests, so session and flash cookies behave
//! as they would in a browser.

use axum_test::{TestResponse, TestServer, TestServerConfig};
use inkpress::server::config::AppConfig;
use inkpress::server::init::create_app;
use serde_json::json;

pub fn test_config() -> AppConfig {
    AppConfig {
        secret_key: "test-secret".to_string(),
        database_url: "sqlite::memory:".to_string(),
        port: 0,
        smtp: None,
    }
}

pub async fn test_server() -> TestServer {
    let app = create_app(test_config()).await.expect("app should build");
    let config = TestServerConfig {
        save_cookies: true,
        ..TestServerConfig::default()
    };
    TestServer::new_with_config(app, config).expect("test server should start")
}

pub async fn register(server: &TestServer, name: &str, email: &str, password: &str) -> TestResponse {
    server
        .post("/register")
        .form(&json!({ "name": name, "email": email, "password": password }))
        .await
}

pub async fn login(server: &TestServer, email: &str, password: &str) -> TestResponse {
    server
        .post("/login")
        .form(&json!({ "email": email, "password": password }))
        .await
}

pub async fn logout(server: &TestServer) {
    server.get("/logout").await;
}

/// Register the first account, which gets user id 1 and with it admin
/// rights.
pub async fn register_admin(server: &TestServer) -> TestResponse {
    register(server, "Admin", "admin@x.com", "admin-pw").await
}

pub fn post_form(title: &str) -> serde_json::Value {
    json!({
        "title": title,
        "subtitle": "A subtitle",
        "body": "<p>Some rich text body</p>",
        "img_url": "https://example.com/cover.png",
    })
}
