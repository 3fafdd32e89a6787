/**
 * User Handlers
 *
 * Registration, profile reads/updates, the follow graph and the
 * change-password flow.
 */

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};

use crate::auth::{hash_password, verify_password};
use crate::error::ApiError;
use crate::handlers::extract::ApiJson;
use crate::handlers::types::{
    CreateUserRequest, UpdatePasswordRequest, UpdateUserRequest, UserSearchQuery,
};
use crate::middleware::AuthUser;
use crate::models::{Stage, User};
use crate::repository::UserRepository;
use crate::server::state::AppState;

fn user_not_found() -> ApiError {
    ApiError::NotFound("usuário não encontrado".to_string())
}

/// `POST /usuarios` - register a new user.
///
/// Validation and password hashing happen before the repository call;
/// the response carries the stored record with its generated id and
/// without the password.
pub async fn create_user(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateUserRequest>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let mut user = User {
        id: 0,
        nome: request.nome,
        nick: request.nick,
        email: request.email,
        senha: request.senha,
        criado_em: None,
    };
    user.prepare(Stage::Registration)?;

    let repository = UserRepository::new(state.pool.clone());
    user.id = repository.create(&user).await?;

    tracing::info!("user {} registered", user.id);

    Ok((StatusCode::CREATED, Json(user)))
}

/// `GET /usuarios?usuario=<term>` - list users matching a name or nick
/// substring.
pub async fn search_users(
    State(state): State<AppState>,
    Query(query): Query<UserSearchQuery>,
) -> Result<Json<Vec<User>>, ApiError> {
    let repository = UserRepository::new(state.pool.clone());
    let users = repository.search(&query.usuario).await?;

    Ok(Json(users))
}

/// `GET /usuarios/{id}` - fetch one user.
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<User>, ApiError> {
    let repository = UserRepository::new(state.pool.clone());
    let user = repository
        .find_by_id(user_id)
        .await?
        .ok_or_else(user_not_found)?;

    Ok(Json(user))
}

/// `PUT /usuarios/{id}` - overwrite a user's name, nick and email.
//
// TODO: compare the caller's id against `user_id` and reject mismatches
// here and in `delete_user`; today any authenticated user can modify any
// profile.
pub async fn update_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
    ApiJson(request): ApiJson<UpdateUserRequest>,
) -> Result<StatusCode, ApiError> {
    let mut user = User {
        id: user_id,
        nome: request.nome,
        nick: request.nick,
        email: request.email,
        senha: String::new(),
        criado_em: None,
    };
    user.prepare(Stage::Update)?;

    let repository = UserRepository::new(state.pool.clone());
    repository.update(user_id, &user).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// `DELETE /usuarios/{id}` - remove a user.
pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let repository = UserRepository::new(state.pool.clone());
    repository.delete(user_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// `POST /usuarios/{id}/seguir` - follow a user. Idempotent.
pub async fn follow_user(
    State(state): State<AppState>,
    AuthUser(follower_id): AuthUser,
    Path(user_id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let repository = UserRepository::new(state.pool.clone());
    repository.follow(user_id, follower_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// `POST /usuarios/{id}/parar-de-seguir` - unfollow a user.
pub async fn unfollow_user(
    State(state): State<AppState>,
    AuthUser(follower_id): AuthUser,
    Path(user_id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let repository = UserRepository::new(state.pool.clone());
    repository.unfollow(user_id, follower_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// `GET /usuarios/{id}/seguidores` - list a user's followers.
pub async fn list_followers(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<Vec<User>>, ApiError> {
    let repository = UserRepository::new(state.pool.clone());
    let users = repository.followers(user_id).await?;

    Ok(Json(users))
}

/// `GET /usuarios/{id}/seguindo` - list the users someone follows.
pub async fn list_following(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<Vec<User>>, ApiError> {
    let repository = UserRepository::new(state.pool.clone());
    let users = repository.following(user_id).await?;

    Ok(Json(users))
}

/// `POST /usuarios/{id}/atualizar-senha` - change the caller's own
/// password after verifying the current one.
pub async fn update_password(
    State(state): State<AppState>,
    AuthUser(caller_id): AuthUser,
    Path(user_id): Path<i64>,
    ApiJson(request): ApiJson<UpdatePasswordRequest>,
) -> Result<StatusCode, ApiError> {
    if caller_id != user_id {
        return Err(ApiError::Forbidden(
            "não é possível atualizar a senha de outro usuário".to_string(),
        ));
    }

    if request.nova.is_empty() {
        return Err(ApiError::blank_field("senha"));
    }

    let repository = UserRepository::new(state.pool.clone());

    let stored_hash = repository
        .find_password_hash(user_id)
        .await?
        .ok_or_else(user_not_found)?;

    if !verify_password(&request.atual, &stored_hash)? {
        return Err(ApiError::Unauthorized(
            "a senha atual não confere".to_string(),
        ));
    }

    let new_hash = hash_password(&request.nova)?;
    repository.update_password(user_id, &new_hash).await?;

    Ok(StatusCode::NO_CONTENT)
}
