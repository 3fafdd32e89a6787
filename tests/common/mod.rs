//! Shared test fixtures: application construction and request helpers.
//!
//! Router-level tests use a lazily connected pool so that paths which
//! never reach the repository (authentication failures, validation
//! errors) run without a live database. DB-backed tests build the state
//! around a real pool instead.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use sqlx::PgPool;
use tower::ServiceExt;

use devgram::auth::create_token;
use devgram::routes::create_router;
use devgram::server::{AppConfig, AppState};

pub const TEST_SECRET: &str = "test-secret";

pub fn test_config() -> AppConfig {
    AppConfig {
        port: 9000,
        database_url: "postgres://localhost/devgram_test".to_string(),
        secret_key: TEST_SECRET.to_string(),
    }
}

/// App over a lazy pool: no connection is made until a repository call.
pub fn app_without_database() -> Router {
    let pool = PgPool::connect_lazy(&test_config().database_url).expect("lazy pool");
    create_router(AppState::new(pool, test_config()))
}

/// App over a live pool, for DB-backed tests.
pub fn app_with_pool(pool: PgPool) -> Router {
    create_router(AppState::new(pool, test_config()))
}

/// A valid `Authorization` header value for the given user id.
pub fn bearer(user_id: i64) -> String {
    let token = create_token(user_id, TEST_SECRET.as_bytes()).expect("token");
    format!("Bearer {token}")
}

/// Send one request through the router and return status plus decoded
/// JSON body (`Value::Null` for empty bodies).
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    auth: Option<&str>,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(value) = auth {
        builder = builder.header(header::AUTHORIZATION, value);
    }

    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("request");

    let response = app.clone().oneshot(request).await.expect("response");
    let status = response.status();

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null)
    };

    (status, json)
}
