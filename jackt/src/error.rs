//! Error handling module for the jackt CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use std::path::PathBuf;

use jackc_lex::LexError;
use thiserror::Error;

/// Main error type for the jackt CLI application.
#[derive(Error, Debug)]
pub enum JacktError {
    /// Error when the configuration cannot be found or parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when an input file cannot be opened or read.
    #[error("Cannot read {}: {source}", path.display())]
    Read {
        /// The file being read
        path: PathBuf,
        /// The underlying failure
        source: std::io::Error,
    },

    /// Error when tokenizing a file fails.
    #[error("{}: {source}", path.display())]
    Lex {
        /// The file being tokenized
        path: PathBuf,
        /// The lexical or read error
        source: LexError,
    },

    /// Error when one or more files failed; details were already reported.
    #[error("{0} file(s) failed to tokenize")]
    Failed(usize),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using JacktError.
pub type Result<T> = std::result::Result<T, JacktError>;
