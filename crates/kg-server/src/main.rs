//! Binary entrypoint for the knowledge graph HTTP server.
//!
//! Reads configuration from environment variables:
//! - `DATABASE_FILE`: SQLite database file path (default: "./knowledge_graph.db")
//! - `PORT`: Server listen port (default: "3001")
//! - `RUST_LOG`: tracing filter (default: "info")

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use kg_server::config::ServerConfig;
use kg_server::router::build_router;
use kg_server::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env()?;

    let state = AppState::new(&config.database_file).with_context(|| {
        format!("failed to open database {}", config.database_file)
    })?;
    tracing::info!(database = %config.database_file, "database ready");

    let app = build_router(state);

    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("Server running on port {}", config.port);

    axum::serve(listener, app).await?;
    Ok(())
}
