//! Prompt - A titled piece of prompt text
//!
//! Wire names follow the REST collaborator: the body travels as `prompt`,
//! timestamps as camelCase milliseconds.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{now_millis, PromptId};

/// Prompt - The persisted record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prompt {
    pub id: String,
    pub title: String,
    /// The prompt text itself
    #[serde(rename = "prompt")]
    pub body: String,
    /// Milliseconds since epoch, set once at creation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
    /// Milliseconds since epoch, set on every successful update
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
}

impl Prompt {
    /// Build a fresh record from user input with a generated id and
    /// the current time as `created_at`
    pub fn from_new(input: NewPrompt) -> Self {
        Self {
            id: PromptId::generate().into_string(),
            title: input.title,
            body: input.body,
            created_at: Some(now_millis()),
            updated_at: None,
        }
    }

    /// Sort key used for listing; a missing timestamp counts as 0
    pub fn created_at_or_zero(&self) -> i64 {
        self.created_at.unwrap_or(0)
    }

    /// The most recent of `updated_at` / `created_at`, if any
    pub fn last_modified(&self) -> Option<i64> {
        self.updated_at.or(self.created_at)
    }
}

/// PromptInState - Prompt plus presentation-only flags
///
/// `expanded` is never sent to the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptInState {
    pub prompt: Prompt,
    pub expanded: bool,
}

impl PromptInState {
    pub fn id(&self) -> &str {
        &self.prompt.id
    }
}

impl From<Prompt> for PromptInState {
    fn from(prompt: Prompt) -> Self {
        Self {
            prompt,
            expanded: false,
        }
    }
}

/// Input for creating a prompt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPrompt {
    pub title: String,
    #[serde(rename = "prompt")]
    pub body: String,
}

impl NewPrompt {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

/// Input for updating an existing prompt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptUpdate {
    pub id: String,
    pub title: String,
    #[serde(rename = "prompt")]
    pub body: String,
    /// `created_at` of the record being updated; the new `updated_at` never precedes it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
}

impl PromptUpdate {
    pub fn new(id: impl Into<String>, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            body: body.into(),
            created_at: None,
        }
    }

    /// Update `prompt` to the given title and body
    pub fn for_prompt(prompt: &Prompt, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            created_at: prompt.created_at,
            ..Self::new(prompt.id.clone(), title, body)
        }
    }

    /// Start an update from an existing record, keeping its current values
    pub fn from_prompt(prompt: &Prompt) -> Self {
        Self::for_prompt(prompt, prompt.title.clone(), prompt.body.clone())
    }
}

/// PATCH body sent for an update
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptPatch {
    pub title: String,
    #[serde(rename = "prompt")]
    pub body: String,
    pub updated_at: i64,
}

/// Fields an update merges into the stored record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptChanges {
    pub id: String,
    pub title: String,
    pub body: String,
    pub updated_at: i64,
}

impl PromptChanges {
    /// `updated_at` is raised to the record's `created_at` if the clock is behind it
    pub fn new(update: PromptUpdate, updated_at: i64) -> Self {
        let floor = update.created_at.unwrap_or(i64::MIN);
        Self {
            id: update.id,
            title: update.title,
            body: update.body,
            updated_at: updated_at.max(floor),
        }
    }

    pub fn patch(&self) -> PromptPatch {
        PromptPatch {
            title: self.title.clone(),
            body: self.body.clone(),
            updated_at: self.updated_at,
        }
    }

    /// Shallow-merge into `prompt`; `created_at` is never touched and
    /// `updated_at` is kept at or after it
    pub fn merge_into(&self, prompt: &mut Prompt) {
        prompt.title = self.title.clone();
        prompt.body = self.body.clone();
        let floor = prompt.created_at.unwrap_or(i64::MIN);
        prompt.updated_at = Some(self.updated_at.max(floor));
    }
}
