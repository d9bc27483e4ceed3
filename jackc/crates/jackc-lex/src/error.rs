//! Error types for the tokenizer.
//!
//! Reading the input and recognising tokens fail in two disjoint ways:
//! the reader itself fails ([`LexError::Io`]) or the characters at some
//! position do not form a token ([`LexError::Lexical`]). Reaching the end of
//! the input is not an error.

use std::io;

use jackc_util::{Diagnostic, Position, Span};
use thiserror::Error;

/// Error returned by [`Tokenizer::advance`](crate::Tokenizer::advance).
#[derive(Debug, Error)]
pub enum LexError {
    /// The underlying reader failed.
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),

    /// Malformed lexical content.
    #[error("{reason} at {position}")]
    Lexical {
        /// Where the offending lexeme starts
        position: Position,
        /// What is wrong with it
        reason: LexicalErrorKind,
    },
}

/// Why a character sequence could not be tokenized.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LexicalErrorKind {
    /// End of line or input reached before the closing quote.
    #[error("unterminated string constant")]
    UnterminatedString,

    /// End of input reached before `*/`.
    #[error("unterminated block comment")]
    UnterminatedBlockComment,

    /// Character that starts no token.
    #[error("unrecognized character '{}'", .0.escape_debug())]
    UnrecognizedCharacter(char),

    /// Digit run that does not fit the integer constant type.
    #[error("integer constant {0} is out of range")]
    IntegerOutOfRange(String),
}

impl LexError {
    /// Create a lexical error
    pub fn lexical(position: Position, reason: LexicalErrorKind) -> Self {
        LexError::Lexical { position, reason }
    }

    /// Position of a lexical error, `None` for I/O failures.
    pub fn position(&self) -> Option<Position> {
        match self {
            LexError::Lexical { position, .. } => Some(*position),
            LexError::Io(_) => None,
        }
    }

    /// Reason of a lexical error, `None` for I/O failures.
    pub fn reason(&self) -> Option<&LexicalErrorKind> {
        match self {
            LexError::Lexical { reason, .. } => Some(reason),
            LexError::Io(_) => None,
        }
    }

    /// Returns true for lexical errors.
    pub fn is_lexical(&self) -> bool {
        matches!(self, LexError::Lexical { .. })
    }

    /// Convert into a diagnostic for display.
    ///
    /// Lexical errors point at the offending lexeme; I/O failures carry no
    /// location.
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            LexError::Lexical { position, reason } => {
                let len = match reason {
                    LexicalErrorKind::UnrecognizedCharacter(c) => c.len_utf8(),
                    LexicalErrorKind::IntegerOutOfRange(digits) => digits.len(),
                    LexicalErrorKind::UnterminatedString
                    | LexicalErrorKind::UnterminatedBlockComment => 1,
                };
                Diagnostic::error(reason.to_string()).with_span(Span::new(*position, len))
            },
            LexError::Io(_) => Diagnostic::error(self.to_string()),
        }
    }
}

/// Result type alias for tokenizer operations
pub type LexResult<T> = std::result::Result<T, LexError>;
