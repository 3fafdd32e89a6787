/**
 * devgram Server Entry Point
 *
 * Loads configuration, connects the database pool, runs migrations and
 * serves the router.
 */

use sqlx::PgPool;

use devgram::routes::create_router;
use devgram::server::{AppConfig, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    let config = AppConfig::from_env()?;

    tracing::info!("connecting to database");
    let pool = PgPool::connect(&config.database_url).await?;

    tracing::info!("running migrations");
    sqlx::migrate!().run(&pool).await?;

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.port));
    let app = create_router(AppState::new(pool, config));

    tracing::info!("listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
