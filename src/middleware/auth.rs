/**
 * Authentication Middleware
 *
 * Protects routes that require a caller identity. The middleware:
 *
 * 1. Extracts the token from the `Authorization: Bearer <token>` header
 * 2. Verifies signature and expiration against the server secret
 * 3. Parses the user id from the `sub` claim
 * 4. Attaches `AuthenticatedUser` to the request extensions
 *
 * Any failure short-circuits with 401 before the handler (and therefore
 * before any repository call) runs. Handlers on protected routes read
 * the identity back through the `AuthUser` extractor.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::auth::verify_token;
use crate::error::ApiError;
use crate::server::state::AppState;

/// Caller identity extracted from a verified token
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user_id: i64,
}

fn unauthorized(reason: &str) -> ApiError {
    tracing::warn!("authentication failed: {}", reason);
    ApiError::Unauthorized("token de autenticação inválido".to_string())
}

/// Authentication middleware for protected routes.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| unauthorized("missing Authorization header"))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| unauthorized("malformed Authorization header"))?;

    let claims = verify_token(token, state.config.secret_key.as_bytes())
        .map_err(|_| unauthorized("invalid or expired token"))?;

    let user_id = claims
        .sub
        .parse::<i64>()
        .map_err(|_| unauthorized("non-numeric subject claim"))?;

    request
        .extensions_mut()
        .insert(AuthenticatedUser { user_id });

    Ok(next.run(request).await)
}

/// Extractor for the authenticated caller's id.
///
/// Only meaningful on routes behind `auth_middleware`; elsewhere it
/// rejects with 401.
#[derive(Clone, Debug)]
pub struct AuthUser(pub i64);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| unauthorized("no identity attached to request"))?;

        Ok(AuthUser(user.user_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::FromRequestParts;

    fn test_state() -> AppState {
        let config = crate::server::config::AppConfig {
            port: 9000,
            database_url: "postgres://localhost/devgram_test".to_string(),
            secret_key: "test-secret".to_string(),
        };
        let pool = sqlx::PgPool::connect_lazy(&config.database_url).unwrap();
        AppState::new(pool, config)
    }

    #[tokio::test]
    async fn test_extract_attached_identity() {
        let request = axum::http::Request::builder().uri("/").body(()).unwrap();
        let (mut parts, _) = request.into_parts();
        parts.extensions.insert(AuthenticatedUser { user_id: 42 });

        let AuthUser(user_id) = AuthUser::from_request_parts(&mut parts, &test_state())
            .await
            .unwrap();
        assert_eq!(user_id, 42);
    }

    #[tokio::test]
    async fn test_extract_without_identity_rejects() {
        let request = axum::http::Request::builder().uri("/").body(()).unwrap();
        let (mut parts, _) = request.into_parts();

        let result = AuthUser::from_request_parts(&mut parts, &test_state()).await;
        assert!(result.is_err());
    }
}
