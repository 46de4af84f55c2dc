//! Field rules for prompt forms
//!
//! Applied by the presentation layer before an operation is triggered.
//! The store and the remote operations accept whatever they are given.

use crate::domain::entities::{NewPrompt, Prompt, PromptUpdate};
use crate::domain::errors::{Field, ValidationError};

pub const TITLE_MIN: usize = 3;
pub const TITLE_MAX: usize = 64;
pub const PROMPT_MIN: usize = 3;
pub const PROMPT_MAX: usize = 256;

/// Check a single field value against its length rules
pub fn validate_field(field: Field, value: &str) -> Result<(), ValidationError> {
    let (min, max) = match field {
        Field::Title => (TITLE_MIN, TITLE_MAX),
        Field::Prompt => (PROMPT_MIN, PROMPT_MAX),
    };

    let len = value.chars().count();
    if len < min {
        return Err(ValidationError::TooShort { field, min });
    }
    if len > max {
        return Err(ValidationError::TooLong { field, max });
    }
    Ok(())
}

impl NewPrompt {
    /// First failing rule, title before prompt
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_field(Field::Title, &self.title)?;
        validate_field(Field::Prompt, &self.body)
    }
}

impl PromptUpdate {
    /// An update must change something and the new values must pass
    /// the same rules as a new prompt
    pub fn validate_against(&self, original: &Prompt) -> Result<(), ValidationError> {
        if self.title == original.title && self.body == original.body {
            return Err(ValidationError::Unchanged);
        }
        validate_field(Field::Title, &self.title)?;
        validate_field(Field::Prompt, &self.body)
    }
}
