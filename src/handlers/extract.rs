/**
 * JSON Body Extractor
 *
 * `ApiJson<T>` wraps `axum::Json<T>` and maps every body rejection
 * (unreadable body, syntax error, type mismatch) to a single 422
 * `ApiError::UnreadableBody`, keeping the error shape consistent with
 * the rest of the API.
 */

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::Json;

use crate::error::ApiError;

pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::UnreadableBody(rejection.body_text()))?;

        Ok(ApiJson(value))
    }
}
