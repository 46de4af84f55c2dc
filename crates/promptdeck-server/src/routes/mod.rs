//! PromptDeck API Routes
//!
//! - /prompts - Prompt collection
//! - /prompts/:id - Single prompt

pub mod prompts;
