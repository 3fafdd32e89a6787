//! Authentication Module
//!
//! JWT issuance/verification and password hashing. The HTTP side of
//! authentication (header parsing, request extensions) lives in
//! `crate::middleware`.

/// JWT creation and verification
pub mod tokens;

/// Password hashing and verification (bcrypt)
pub mod password;

pub use password::{hash_password, verify_password};
pub use tokens::{create_token, verify_token, Claims};
