//! Prompt Store
//!
//! Single source of truth for the prompt collection and its
//! loading/error status.

mod prompt_store;
mod state;

pub use prompt_store::*;
pub use state::*;
