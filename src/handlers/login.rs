/**
 * Login Handler
 *
 * `POST /login`: look the user up by email, verify the submitted
 * password against the stored bcrypt hash, and answer with the user's id
 * and a signed token.
 *
 * # Security
 *
 * A missing user and a wrong password produce the same generic 401 so
 * the endpoint cannot be used to enumerate registered emails.
 */

use axum::{extract::State, response::Json};

use crate::auth::{create_token, verify_password};
use crate::error::ApiError;
use crate::handlers::extract::ApiJson;
use crate::handlers::types::{AuthResponse, LoginRequest};
use crate::repository::UserRepository;
use crate::server::state::AppState;

pub async fn login(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let repository = UserRepository::new(state.pool.clone());

    let credentials = repository
        .find_by_email(&request.email)
        .await?
        .ok_or_else(ApiError::invalid_credentials)?;

    if !verify_password(&request.senha, &credentials.senha)? {
        tracing::warn!("failed login attempt for user {}", credentials.id);
        return Err(ApiError::invalid_credentials());
    }

    let token = create_token(credentials.id, state.config.secret_key.as_bytes())?;

    tracing::info!("user {} logged in", credentials.id);

    Ok(Json(AuthResponse {
        id: credentials.id,
        token,
    }))
}
