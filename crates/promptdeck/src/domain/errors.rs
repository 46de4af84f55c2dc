//! Domain Errors
//!
//! Failure details for remote operations and UI-edge validation.

use thiserror::Error;

/// Normalized failure of a remote operation
///
/// The `Display` output is the human-readable message shown to users.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Network Error: {0}")]
    Network(String),

    #[error("Request failed with status code {status}")]
    Status { status: u16, body: String },

    #[error("Invalid response body: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// HTTP status when the backend answered with a non-2xx code
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            return Self::Decode(e.to_string());
        }
        match e.status() {
            Some(status) => Self::Status {
                status: status.as_u16(),
                body: String::new(),
            },
            None => Self::Network(e.to_string()),
        }
    }
}

/// Field a validation rule applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Prompt,
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Field::Title => write!(f, "title"),
            Field::Prompt => write!(f, "prompt"),
        }
    }
}

/// Form validation failures; these never reach the store
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Provide at least {min} characters for {field}")]
    TooShort { field: Field, min: usize },

    #[error("Provide at most {max} characters for {field}")]
    TooLong { field: Field, max: usize },

    #[error("Nothing to update")]
    Unchanged,
}
