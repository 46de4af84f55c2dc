//! PromptDeck Core Library
//!
//! Client-side state container for managing short text prompts against
//! a REST backend.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain/`): Prompt records, validation and errors
//!   - `entities/`: Prompt, PromptInState and operation inputs
//!   - `value_objects/`: Identifier and timestamp helpers
//!   - `validation`: Field rules applied at the UI edge
//!
//! - **Ports** (`ports/`): The `PromptApi` interface to the REST collaborator
//!
//! - **Adapters** (`adapters/`): `HttpPromptApi`, the reqwest implementation
//!
//! - **Store** (`store/`): `PromptStore`, the single source of truth
//!
//! - **Application** (`application/`): Remote operations, the dispatcher
//!   and the generic `OperationRunner`
//!
//! # Usage
//!
//! ```rust,ignore
//! use promptdeck::{HttpPromptApi, PromptClient, PromptStore, NewPrompt};
//!
//! let api = HttpPromptApi::new("http://localhost:3005")?;
//! let client = PromptClient::new(api, PromptStore::new());
//! client.fetch_prompts().await?;
//! client.add_prompt(NewPrompt::new("Greeting", "Say hello")).await?;
//! println!("{:?}", client.store().snapshot().data);
//! ```

pub mod adapters;
pub mod application;
pub mod domain;
pub mod ports;
pub mod store;

// Re-export commonly used types
pub use adapters::HttpPromptApi;
pub use application::{
    AddPrompt, FetchPrompts, OperationRunner, PromptClient, RemoteOperation, RemovePrompt,
    RunCallbacks, RunnerStatus, UpdatePrompt,
};
pub use domain::{
    ApiError, Field, NewPrompt, Prompt, PromptChanges, PromptId, PromptInState, PromptPatch,
    PromptUpdate, ValidationError,
};
pub use ports::PromptApi;
pub use store::{ErrorState, OperationKind, Outcome, PromptStore, PromptsState, StoreEvent, Ticket};
