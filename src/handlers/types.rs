/**
 * Handler Types
 *
 * Typed request and response schemas, one per endpoint. Bodies are
 * decoded into these explicit shapes instead of duck-typed JSON; fields
 * a client may omit carry `#[serde(default)]` and are validated by the
 * models afterwards.
 */

use serde::{Deserialize, Serialize};

/// Login request body
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub senha: String,
}

/// Registration request body
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateUserRequest {
    pub nome: String,
    pub nick: String,
    pub email: String,
    pub senha: String,
}

/// Profile update request body; the password is never updated through
/// this shape.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UpdateUserRequest {
    pub nome: String,
    pub nick: String,
    pub email: String,
}

/// Change-password request body
#[derive(Debug, Deserialize)]
pub struct UpdatePasswordRequest {
    #[serde(default)]
    pub nova: String,
    #[serde(default)]
    pub atual: String,
}

/// Publication create/update request body
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PostRequest {
    pub titulo: String,
    pub conteudo: String,
}

/// Query string for `GET /usuarios`
#[derive(Debug, Deserialize)]
pub struct UserSearchQuery {
    #[serde(default)]
    pub usuario: String,
}

/// Login response: the caller's id and a signed token
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub id: i64,
    pub token: String,
}
