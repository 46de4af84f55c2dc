//! Request/response models
//!
//! Bodies use the same camelCase wire names as `promptdeck::Prompt`. Unlike
//! the client record, a created record may arrive without an id.

use promptdeck::{Prompt, PromptId};
use serde::{Deserialize, Serialize};

/// POST /prompts body
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePromptRequest {
    #[serde(default)]
    pub id: Option<String>,
    pub title: String,
    pub prompt: String,
    #[serde(default)]
    pub created_at: Option<i64>,
    #[serde(default)]
    pub updated_at: Option<i64>,
}

impl CreatePromptRequest {
    pub fn into_prompt(self) -> Prompt {
        let id = self
            .id
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| PromptId::generate().into_string());
        Prompt {
            id,
            title: self.title,
            body: self.prompt,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// PATCH /prompts/:id body; absent fields are left alone
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatchPromptRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub prompt: Option<String>,
    #[serde(default)]
    pub updated_at: Option<i64>,
}

impl PatchPromptRequest {
    pub fn apply(self, prompt: &mut Prompt) {
        if let Some(title) = self.title {
            prompt.title = title;
        }
        if let Some(body) = self.prompt {
            prompt.body = body;
        }
        if let Some(updated_at) = self.updated_at {
            prompt.updated_at = Some(updated_at);
        }
    }
}

/// DELETE /prompts/:id response, an empty object
#[derive(Debug, Default, Serialize)]
pub struct Empty {}

/// On-disk layout of the database file
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Database {
    #[serde(default)]
    pub prompts: Vec<Prompt>,
}
