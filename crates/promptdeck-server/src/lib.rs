//! PromptDeck Server - Development backend
//!
//! A json-server style REST API over a single `prompts` collection, kept in
//! memory and optionally mirrored to a JSON file.
//!
//! - GET    /health
//! - GET    /prompts
//! - POST   /prompts
//! - GET    /prompts/:id
//! - PATCH  /prompts/:id
//! - DELETE /prompts/:id

use axum::{routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod routes;

pub use config::ServerConfig;
pub use error::ServerError;
pub use repository::PromptRepository;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<PromptRepository>,
}

impl AppState {
    pub fn new(repo: PromptRepository) -> Self {
        Self {
            repo: Arc::new(repo),
        }
    }
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "PromptDeck backend is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Build the router with shared state
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .merge(routes::prompts::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
