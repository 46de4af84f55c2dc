//! Application Layer
//!
//! Remote operations, the dispatcher that reduces them into the store,
//! and the generic runner UI triggers go through.

pub mod client;
pub mod operations;
pub mod runner;

pub use client::PromptClient;
pub use operations::{AddPrompt, FetchPrompts, RemoteOperation, RemovePrompt, UpdatePrompt};
pub use runner::{OperationRunner, RunCallbacks, RunnerStatus};
