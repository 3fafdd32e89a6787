//! Data Models
//!
//! Plain records for the two entities plus their validation/formatting
//! rules. Models are transient: built per request, persisted through the
//! repository layer and discarded once the response is written.

/// User record and registration/update validation
pub mod user;

/// Publication record and validation
pub mod post;

pub use post::Post;
pub use user::{Stage, User};
