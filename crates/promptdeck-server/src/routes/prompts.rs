//! Prompt Routes - json-server style CRUD on the prompts collection

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use promptdeck::Prompt;

use crate::error::ServerError;
use crate::models::{CreatePromptRequest, Empty, PatchPromptRequest};
use crate::AppState;

/// List prompts in insertion order
pub async fn list_prompts(State(state): State<AppState>) -> Json<Vec<Prompt>> {
    Json(state.repo.list().await)
}

/// Get one prompt
pub async fn get_prompt(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Prompt>, ServerError> {
    Ok(Json(state.repo.get(&id).await?))
}

/// Create a prompt, generating an id when the body has none
pub async fn create_prompt(
    State(state): State<AppState>,
    Json(payload): Json<CreatePromptRequest>,
) -> Result<(StatusCode, Json<Prompt>), ServerError> {
    let prompt = state.repo.insert(payload.into_prompt()).await?;
    tracing::info!(id = %prompt.id, "Prompt created");
    Ok((StatusCode::CREATED, Json(prompt)))
}

/// Merge the present fields into a prompt
pub async fn patch_prompt(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<PatchPromptRequest>,
) -> Result<Json<Prompt>, ServerError> {
    let prompt = state.repo.patch(&id, payload).await?;
    tracing::info!(id = %prompt.id, "Prompt updated");
    Ok(Json(prompt))
}

/// Delete a prompt
pub async fn delete_prompt(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Empty>, ServerError> {
    let removed = state.repo.remove(&id).await?;
    tracing::info!(id = %removed.id, "Prompt removed");
    Ok(Json(Empty::default()))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/prompts", get(list_prompts).post(create_prompt))
        .route(
            "/prompts/:id",
            get(get_prompt).patch(patch_prompt).delete(delete_prompt),
        )
}
