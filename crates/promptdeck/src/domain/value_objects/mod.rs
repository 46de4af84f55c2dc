//! Value Objects
//!
//! Immutable value types shared across the domain.

mod prompt_id;
mod timestamp;

pub use prompt_id::*;
pub use timestamp::*;
