//! Domain Layer
//!
//! Prompt records and the rules around them, free of transport concerns.

pub mod entities;
pub mod errors;
pub mod validation;
pub mod value_objects;

// Re-exports for convenience
pub use entities::*;
pub use errors::*;
pub use validation::*;
pub use value_objects::*;
