//! Server Module
//!
//! Startup-time concerns: configuration loading and the shared
//! application state handed to the router.

/// Environment-backed configuration
pub mod config;

/// Shared application state
pub mod state;

pub use config::AppConfig;
pub use state::AppState;
