//! Ports (Interfaces)
//!
//! Abstract interface to the REST collaborator. The reqwest
//! implementation lives in `adapters/`; tests substitute their own.

mod prompt_api;

pub use prompt_api::*;
