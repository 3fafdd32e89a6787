//! API Error Module
//!
//! This module defines the error types used across the backend and their
//! conversion into HTTP responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - Error conversion implementations (IntoResponse)
//! ```
//!
//! # Error Taxonomy
//!
//! - Validation errors (empty/malformed fields) - 400
//! - Authentication errors (missing/invalid/expired token, bad credentials) - 401
//! - Authorization errors (ownership mismatch) - 403
//! - Not found (absent entity on single-row reads) - 404
//! - Unreadable request body - 422
//! - Infrastructure errors (database, hashing, token signing) - 500
//!
//! All errors terminate the request with a JSON body containing the error
//! message and the status code, and no internal stack detail.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

pub use types::ApiError;
