/**
 * Portfolio API Server Entry Point
 *
 * Loads configuration, connects to PostgreSQL and serves the API. Any
 * startup failure is logged and the process exits with status 1.
 */

use std::net::SocketAddr;

use portfolio_api::backend::server::{create_app, AppConfig, StartupError};

async fn run() -> Result<(), StartupError> {
    let config = AppConfig::from_env()?;
    let port = config.port;

    let app = create_app(config).await?;

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server running on port {}", port);

    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    if let Err(e) = run().await {
        tracing::error!("Server failed to start: {}", e);
        std::process::exit(1);
    }
}
