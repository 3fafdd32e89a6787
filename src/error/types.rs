/**
 * API Error Types
 *
 * This module defines the error enum used by handlers, repositories and
 * middleware. Each variant maps to exactly one HTTP status code.
 *
 * # Propagation
 *
 * Validation and authorization errors are produced inside handlers and
 * models. Infrastructure errors (`sqlx::Error`, `bcrypt::BcryptError`,
 * `jsonwebtoken::errors::Error`) propagate unchanged via `?` thanks to the
 * `#[from]` conversions and surface as 500 responses.
 */

use axum::http::StatusCode;
use thiserror::Error;

/// All errors a request can terminate with.
///
/// Error messages are in Portuguese because they are part of the wire
/// format consumed by existing clients.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A request field failed validation (blank field, invalid email,
    /// malformed path parameter).
    #[error("{0}")]
    Validation(String),

    /// Authentication failure: missing/invalid/expired token or bad
    /// login credentials.
    #[error("{0}")]
    Unauthorized(String),

    /// Ownership violation: the caller is authenticated but does not own
    /// the resource being mutated.
    #[error("{0}")]
    Forbidden(String),

    /// Single-row read found no matching entity.
    #[error("{0}")]
    NotFound(String),

    /// The request body could not be read or decoded as JSON.
    #[error("corpo da requisição inválido: {0}")]
    UnreadableBody(String),

    /// Database error, propagated unchanged from the repository layer.
    #[error("erro de banco de dados: {0}")]
    Database(#[from] sqlx::Error),

    /// Password hashing or verification failed.
    #[error("erro ao processar a senha: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),

    /// Token signing failed. Verification failures are mapped to
    /// `Unauthorized` at the call site instead.
    #[error("erro ao gerar o token: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),
}

impl ApiError {
    /// Shorthand for a blank-field validation error.
    pub fn blank_field(field: &str) -> Self {
        Self::Validation(format!("o {field} não pode estar em branco"))
    }

    /// Generic login failure. Deliberately does not say whether the email
    /// or the password was wrong.
    pub fn invalid_credentials() -> Self {
        Self::Unauthorized("credenciais inválidas".to_string())
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::UnreadableBody(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Database(_) | Self::PasswordHash(_) | Self::Token(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_mapping() {
        assert_eq!(
            ApiError::Validation("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Unauthorized("x".into()).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::Forbidden("x".into()).status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            ApiError::NotFound("x".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::UnreadableBody("x".into()).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ApiError::Database(sqlx::Error::RowNotFound).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_blank_field_message() {
        let err = ApiError::blank_field("nome");
        assert_eq!(err.to_string(), "o nome não pode estar em branco");
    }

    #[test]
    fn test_invalid_credentials_is_generic() {
        let err = ApiError::invalid_credentials();
        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
        assert!(!err.to_string().contains("email"));
        assert!(!err.to_string().contains("senha"));
    }
}
