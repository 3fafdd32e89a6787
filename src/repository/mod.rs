//! Repository Layer
//!
//! One type per entity, issuing parameterized SQL against PostgreSQL and
//! mapping rows to records. Repositories are request-scoped: handlers
//! build one per request around a clone of the shared pool.
//!
//! Single-row reads return `Option<T>` so handlers can distinguish an
//! absent entity (404) from an infrastructure failure. Database errors
//! propagate unchanged as `sqlx::Error`.

/// User repository (accounts, follow edges, credentials)
pub mod users;

/// Publication repository (posts, feed, like counters)
pub mod posts;

pub use posts::PostRepository;
pub use users::UserRepository;
