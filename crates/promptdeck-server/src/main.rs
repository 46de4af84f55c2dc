use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use promptdeck_server::{app, AppState, PromptRepository, ServerConfig};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    let config = ServerConfig::from_env()?;
    tracing::info!("🗂️  PromptDeck backend initializing...");

    let repo = match &config.db_path {
        Some(path) => PromptRepository::open(path)
            .await
            .context("Failed to open prompt database")?,
        None => {
            tracing::warn!("⚠️  No PROMPTDECK_DB set - prompts are kept in memory only");
            PromptRepository::in_memory()
        }
    };

    let addr = config.addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("✅ PromptDeck backend listening on http://{}", addr);

    axum::serve(listener, app(AppState::new(repo)))
        .await
        .context("Server error")?;

    Ok(())
}
