//! devgram - REST backend for a minimal social network
//!
//! User registration and authentication, follow relationships, and
//! publication CRUD with like/unlike counters, served over HTTP as JSON.
//!
//! # Request Lifecycle
//!
//! ```text
//! request → router dispatch → (optional) auth middleware → handler
//!         → model validation → repository → PostgreSQL → JSON response
//! ```
//!
//! # Module Structure
//!
//! - **`server`** - configuration and shared application state
//! - **`routes`** - static route table and router assembly
//! - **`middleware`** - token verification on protected routes
//! - **`handlers`** - one function per route
//! - **`models`** - entity records and validation rules
//! - **`repository`** - parameterized SQL per entity
//! - **`auth`** - JWT issuance/verification and password hashing
//! - **`error`** - the error taxonomy and its HTTP mapping
//!
//! Requests are handled independently: the only cross-request state is
//! the connection pool and the read-only configuration.

/// JWT and password primitives
pub mod auth;

/// Error types and HTTP conversion
pub mod error;

/// HTTP handlers
pub mod handlers;

/// Authentication middleware
pub mod middleware;

/// Data models
pub mod models;

/// Repository layer
pub mod repository;

/// Route configuration
pub mod routes;

/// Server configuration and state
pub mod server;

pub use error::ApiError;
pub use routes::create_router;
pub use server::{AppConfig, AppState};
