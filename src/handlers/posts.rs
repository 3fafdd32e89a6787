/**
 * Publication Handlers
 *
 * Publication CRUD, the feed and the like counters.
 *
 * # Ownership
 *
 * Update and delete require the authenticated caller to be the
 * publication's author; a mismatch answers 403 and leaves the record
 * unchanged. The author id of a new publication always comes from the
 * verified token, never from the request body.
 */

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};

use crate::error::ApiError;
use crate::handlers::extract::ApiJson;
use crate::handlers::types::PostRequest;
use crate::middleware::AuthUser;
use crate::models::Post;
use crate::repository::PostRepository;
use crate::server::state::AppState;

fn post_not_found() -> ApiError {
    ApiError::NotFound("publicação não encontrada".to_string())
}

/// `POST /publicacoes` - create a publication authored by the caller.
pub async fn create_post(
    State(state): State<AppState>,
    AuthUser(author_id): AuthUser,
    ApiJson(request): ApiJson<PostRequest>,
) -> Result<(StatusCode, Json<Post>), ApiError> {
    let mut post = Post {
        id: 0,
        titulo: request.titulo,
        conteudo: request.conteudo,
        autor_id: author_id,
        autor_nick: String::new(),
        curtidas: 0,
        criada_em: None,
    };
    post.prepare()?;

    let repository = PostRepository::new(state.pool.clone());
    post.id = repository.create(&post).await?;

    Ok((StatusCode::CREATED, Json(post)))
}

/// `GET /publicacoes` - the caller's feed: own publications plus those
/// of followed users, newest first.
pub async fn feed(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<Vec<Post>>, ApiError> {
    let repository = PostRepository::new(state.pool.clone());
    let posts = repository.feed(user_id).await?;

    Ok(Json(posts))
}

/// `GET /publicacoes/{id}` - fetch one publication.
pub async fn get_post(
    State(state): State<AppState>,
    Path(post_id): Path<i64>,
) -> Result<Json<Post>, ApiError> {
    let repository = PostRepository::new(state.pool.clone());
    let post = repository
        .find_by_id(post_id)
        .await?
        .ok_or_else(post_not_found)?;

    Ok(Json(post))
}

/// `PUT /publicacoes/{id}` - overwrite a publication's title and
/// content. Owner only.
pub async fn update_post(
    State(state): State<AppState>,
    AuthUser(caller_id): AuthUser,
    Path(post_id): Path<i64>,
    ApiJson(request): ApiJson<PostRequest>,
) -> Result<StatusCode, ApiError> {
    let repository = PostRepository::new(state.pool.clone());

    let stored = repository
        .find_by_id(post_id)
        .await?
        .ok_or_else(post_not_found)?;

    if stored.autor_id != caller_id {
        return Err(ApiError::Forbidden(
            "não é possível atualizar uma publicação que não é sua".to_string(),
        ));
    }

    let mut post = Post {
        titulo: request.titulo,
        conteudo: request.conteudo,
        ..stored
    };
    post.prepare()?;

    repository.update(post_id, &post).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// `DELETE /publicacoes/{id}` - remove a publication. Owner only.
pub async fn delete_post(
    State(state): State<AppState>,
    AuthUser(caller_id): AuthUser,
    Path(post_id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let repository = PostRepository::new(state.pool.clone());

    let stored = repository
        .find_by_id(post_id)
        .await?
        .ok_or_else(post_not_found)?;

    if stored.autor_id != caller_id {
        return Err(ApiError::Forbidden(
            "não é possível deletar uma publicação que não é sua".to_string(),
        ));
    }

    repository.delete(post_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// `GET /usuarios/{id}/publicacoes` - all publications by one user.
pub async fn posts_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<Vec<Post>>, ApiError> {
    let repository = PostRepository::new(state.pool.clone());
    let posts = repository.by_author(user_id).await?;

    Ok(Json(posts))
}

/// `POST /publicacoes/{id}/curtir` - increment the like counter.
pub async fn like_post(
    State(state): State<AppState>,
    Path(post_id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let repository = PostRepository::new(state.pool.clone());
    repository.like(post_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// `POST /publicacoes/{id}/descurtir` - decrement the like counter,
/// never below zero.
pub async fn unlike_post(
    State(state): State<AppState>,
    Path(post_id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let repository = PostRepository::new(state.pool.clone());
    repository.unlike(post_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
