//! HTTP Handlers
//!
//! One async function per route. Each handler is a deterministic
//! sequence: extract path/auth parameters, decode and validate the JSON
//! body, invoke exactly one repository operation (or an ownership read
//! followed by the mutation), write the response.
//!
//! # Status Contract
//!
//! - 200/201 with body for successful reads/creates
//! - 204 without body for update/delete/like/unlike/follow/unfollow
//! - 400 for validation or malformed-input errors
//! - 401 for authentication failure
//! - 403 for ownership violation
//! - 404 for an absent entity
//! - 422 for an unreadable request body
//! - 500 for database errors

/// Request/response types shared by handlers
pub mod types;

/// JSON body extractor with the 422 rejection mapping
pub mod extract;

/// Login handler
pub mod login;

/// User handlers (CRUD, follow graph, password change)
pub mod users;

/// Publication handlers (CRUD, feed, like counters)
pub mod posts;
