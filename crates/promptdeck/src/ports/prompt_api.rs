//! Prompt API Port
//!
//! One method per call the remote operations make. Implementations only
//! move data; sorting, id generation and timestamps belong to the
//! operations.

use async_trait::async_trait;

use crate::domain::{ApiError, Prompt, PromptPatch};

/// Interface to the `/prompts` resource
#[async_trait]
pub trait PromptApi: Send + Sync {
    /// GET /prompts
    async fn list(&self) -> Result<Vec<Prompt>, ApiError>;

    /// POST /prompts, returning the record as the server stored it
    async fn create(&self, prompt: &Prompt) -> Result<Prompt, ApiError>;

    /// PATCH /prompts/{id}; the response body is ignored
    async fn patch(&self, id: &str, patch: &PromptPatch) -> Result<(), ApiError>;

    /// DELETE /prompts/{id}; the response body is ignored
    async fn delete(&self, id: &str) -> Result<(), ApiError>;
}
