/**
 * Router Assembly
 *
 * Two static route tables merged into one router:
 *
 * - public routes: login, registration, single-publication reads and the
 *   like counters
 * - protected routes: everything else, behind `auth_middleware` - an
 *   authentication failure short-circuits with 401 and the handler never
 *   runs
 *
 * A `TraceLayer` wraps the whole router for per-request logging.
 */

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::handlers::{login, posts, users};
use crate::middleware::auth_middleware;
use crate::server::state::AppState;

/// Build the application router around the shared state.
pub fn create_router(state: AppState) -> Router {
    let public = Router::new()
        .route("/login", post(login::login))
        .route("/usuarios", post(users::create_user))
        .route("/usuarios/{id}/publicacoes", get(posts::posts_by_user))
        .route("/publicacoes/{id}", get(posts::get_post))
        .route("/publicacoes/{id}/curtir", post(posts::like_post))
        .route("/publicacoes/{id}/descurtir", post(posts::unlike_post));

    let protected = Router::new()
        .route("/usuarios", get(users::search_users))
        .route(
            "/usuarios/{id}",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
        .route("/usuarios/{id}/seguir", post(users::follow_user))
        .route(
            "/usuarios/{id}/parar-de-seguir",
            post(users::unfollow_user),
        )
        .route("/usuarios/{id}/seguidores", get(users::list_followers))
        .route("/usuarios/{id}/seguindo", get(users::list_following))
        .route(
            "/usuarios/{id}/atualizar-senha",
            post(users::update_password),
        )
        .route("/publicacoes", post(posts::create_post).get(posts::feed))
        .route(
            "/publicacoes/{id}",
            axum::routing::put(posts::update_post).delete(posts::delete_post),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    public
        .merge(protected)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
