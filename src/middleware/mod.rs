//! Middleware Module
//!
//! Request-processing middleware. Currently only authentication.

/// Authentication middleware and the `AuthUser` extractor
pub mod auth;

pub use auth::{auth_middleware, AuthUser, AuthenticatedUser};
