/**
 * Server Configuration
 *
 * Configuration is read from environment variables once at startup into
 * an immutable `AppConfig` that is threaded through the application via
 * `AppState`. A `.env` file is honored when present.
 *
 * # Variables
 *
 * - `API_PORT` - listen port; falls back to 9000 when unset or
 *   unparseable
 * - `DATABASE_URL` - PostgreSQL connection string (required)
 * - `SECRET_KEY` - token signing secret (required)
 */

use std::env;

const DEFAULT_PORT: u16 = 9000;

/// Immutable runtime configuration, loaded once at process start.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub database_url: String,
    pub secret_key: String,
}

impl AppConfig {
    /// Load configuration from the environment.
    ///
    /// # Errors
    ///
    /// Fails when `DATABASE_URL` or `SECRET_KEY` is missing. A missing or
    /// unparseable `API_PORT` is not an error; the default port applies.
    pub fn from_env() -> Result<Self, env::VarError> {
        dotenv::dotenv().ok();

        let port = env::var("API_PORT")
            .ok()
            .and_then(|v| v.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        Ok(Self {
            port,
            database_url: env::var("DATABASE_URL")?,
            secret_key: env::var("SECRET_KEY")?,
        })
    }
}
