//! PromptId - Client-generated record identifier

use rand::Rng;

/// Characters that cannot be confused with each other when read back
/// (no 0/O, 1/l/I)
const ALPHABET: &[u8] = b"23456789abcdefghijkmnpqrstuvwxyzABCDEFGHJKLMNPQRSTUVWXYZ";

/// Short random token used as a prompt id
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PromptId(String);

impl PromptId {
    pub const LEN: usize = 13;

    /// Generate a new random id
    pub fn generate() -> Self {
        let mut rng = rand::rng();
        let id = (0..Self::LEN)
            .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
            .collect();
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for PromptId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
