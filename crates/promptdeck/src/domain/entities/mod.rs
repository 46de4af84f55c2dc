//! Domain Entities
//!
//! - Prompt: persisted title + body record
//! - PromptInState: Prompt plus presentation flags
//! - NewPrompt / PromptUpdate: operation inputs
//! - PromptPatch / PromptChanges: update wire body and merge result

mod prompt;

pub use prompt::*;
