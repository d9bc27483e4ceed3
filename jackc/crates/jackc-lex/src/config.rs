//! Tokenizer configuration.

use serde::{Deserialize, Serialize};

use crate::buffer::DEFAULT_CAPACITY;

/// Settings for a [`Tokenizer`](crate::Tokenizer).
///
/// Deserializable so that drivers can embed it in their own configuration
/// files.
///
/// # Example
///
/// ```
/// use jackc_lex::TokenizerConfig;
///
/// let config = TokenizerConfig::default().buffer_capacity(16);
/// assert_eq!(config.buffer_capacity, 16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenizerConfig {
    /// Size of the read buffer in bytes. Values below 4 are raised to 4.
    #[serde(default = "default_buffer_capacity")]
    pub buffer_capacity: usize,
}

fn default_buffer_capacity() -> usize {
    DEFAULT_CAPACITY
}

impl TokenizerConfig {
    /// Set the read buffer size.
    pub fn buffer_capacity(mut self, capacity: usize) -> Self {
        self.buffer_capacity = capacity;
        self
    }
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            buffer_capacity: default_buffer_capacity(),
        }
    }
}
