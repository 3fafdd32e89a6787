//! Route Configuration Module
//!
//! Static route table: each entry maps (path, method) to a handler, and
//! membership in the protected sub-router is the auth-required flag.

/// Main router creation
pub mod router;

pub use router::create_router;
