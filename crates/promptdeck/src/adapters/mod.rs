//! Infrastructure Adapters
//!
//! Concrete implementations of the ports.

mod http_api;

pub use http_api::HttpPromptApi;
