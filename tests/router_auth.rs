//! Router-level tests that need no database: the authentication
//! middleware and handler-side validation both reject before any
//! repository call, so a lazily connected pool is never touched.

mod common;

use axum::http::StatusCode;
use jsonwebtoken::{encode, EncodingKey, Header};
use pretty_assertions::assert_eq;
use serde_json::json;

use common::{app_without_database, bearer, send, TEST_SECRET};
use devgram::auth::Claims;

#[tokio::test]
async fn test_missing_token_is_401() {
    let app = app_without_database();
    let (status, body) = send(&app, "GET", "/publicacoes", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_header_without_bearer_prefix_is_401() {
    let app = app_without_database();
    let (status, _) = send(&app, "GET", "/publicacoes", Some("Token abc"), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_garbage_token_is_401() {
    let app = app_without_database();
    let (status, _) = send(
        &app,
        "GET",
        "/usuarios?usuario=a",
        Some("Bearer not.a.token"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_expired_token_is_401() {
    let now = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_secs();
    let claims = Claims {
        sub: "1".to_string(),
        exp: now - 3600,
        iat: now - 7200,
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .unwrap();

    let app = app_without_database();
    let (status, _) = send(
        &app,
        "GET",
        "/publicacoes",
        Some(&format!("Bearer {token}")),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_token_signed_with_other_secret_is_401() {
    let token = devgram::auth::create_token(1, b"another-secret").unwrap();
    let app = app_without_database();
    let (status, _) = send(
        &app,
        "DELETE",
        "/publicacoes/1",
        Some(&format!("Bearer {token}")),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_registration_with_blank_name_is_400() {
    let app = app_without_database();
    let body = json!({"nome": "", "nick": "maria", "email": "m@x.com", "senha": "s"});
    let (status, response) = send(&app, "POST", "/usuarios", None, Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["error"], "o nome não pode estar em branco");
}

#[tokio::test]
async fn test_registration_with_invalid_email_is_400() {
    let app = app_without_database();
    let body = json!({"nome": "Maria", "nick": "maria", "email": "nope", "senha": "s"});
    let (status, response) = send(&app, "POST", "/usuarios", None, Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(response["error"].as_str().unwrap().contains("email"));
}

#[tokio::test]
async fn test_unreadable_body_is_422() {
    let app = app_without_database();
    let request = axum::http::Request::builder()
        .method("POST")
        .uri("/login")
        .header("Content-Type", "application/json")
        .body(axum::body::Body::from("{not json"))
        .unwrap();

    let response = tower::ServiceExt::oneshot(app, request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_blank_post_title_is_400_with_valid_token() {
    // A valid token passes the middleware; model validation then rejects
    // before the repository (and thus the database) is reached.
    let app = app_without_database();
    let body = json!({"titulo": "", "conteudo": "x"});
    let (status, response) = send(&app, "POST", "/publicacoes", Some(&bearer(1)), Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["error"], "o titulo não pode estar em branco");
}

#[tokio::test]
async fn test_non_numeric_path_id_is_400() {
    let app = app_without_database();
    let (status, _) = send(&app, "GET", "/usuarios/abc", Some(&bearer(1)), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let app = app_without_database();
    let (status, _) = send(&app, "GET", "/nada", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
