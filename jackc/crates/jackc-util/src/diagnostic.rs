//! Diagnostic module - Error and warning reporting infrastructure.
//!
//! Diagnostics are plain values: a severity [`Level`], a message, an
//! optional source location and any number of notes. [`Diagnostic::render`]
//! formats them for a terminal, quoting the offending source line when the
//! source text is available.
//!
//! # Examples
//!
//! ```
//! use jackc_util::diagnostic::{Diagnostic, Level};
//! use jackc_util::span::{Position, Span};
//!
//! let diag = Diagnostic::error("unrecognized character '@'")
//!     .with_span(Span::new(Position::new(4, 1, 5), 1))
//!     .with_origin("Main.jack");
//!
//! let text = diag.render(Some("let @ = 1;"));
//! assert!(text.starts_with("error: unrecognized character '@'"));
//! assert!(text.contains("--> Main.jack:1:5"));
//! ```

use std::fmt;
use std::fmt::Write as _;

use crate::span::Span;

/// Diagnostic severity level
///
/// # Examples
///
/// ```
/// use jackc_util::diagnostic::Level;
///
/// assert_eq!(format!("{}", Level::Error), "error");
/// assert_eq!(format!("{}", Level::Warning), "warning");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    /// An error that aborts the current run
    Error,
    /// A warning that doesn't abort the run
    Warning,
    /// Additional information about a diagnostic
    Note,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Warning => write!(f, "warning"),
            Level::Note => write!(f, "note"),
        }
    }
}

/// A diagnostic message with severity and location
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Main diagnostic message
    pub message: String,
    /// Source location, if the problem has one
    pub span: Option<Span>,
    /// Name of the input the span refers to (usually a file path)
    pub origin: Option<String>,
    /// Additional notes for context
    pub notes: Vec<String>,
}

impl Diagnostic {
    /// Create a diagnostic with the given level and message
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            span: None,
            origin: None,
            notes: Vec::new(),
        }
    }

    /// Create an error diagnostic
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    /// Create a warning diagnostic
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Level::Warning, message)
    }

    /// Attach a source location
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// Attach the name of the input the span refers to
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    /// Append a note
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Returns true for [`Level::Error`] diagnostics
    pub fn is_error(&self) -> bool {
        self.level == Level::Error
    }

    /// Format the diagnostic for display.
    ///
    /// With a span the output carries a `--> origin:line:column` pointer.
    /// When `source` is given and the span's line exists in it, the line is
    /// quoted with a caret under the reported column.
    pub fn render(&self, source: Option<&str>) -> String {
        let mut out = String::new();
        let _ = write!(out, "{}: {}", self.level, self.message);

        if let Some(span) = self.span {
            let origin = self.origin.as_deref().unwrap_or("<input>");
            let _ = write!(out, "\n --> {}:{}", origin, span.start);

            let line = source.and_then(|src| {
                let index = (span.start.line as usize).checked_sub(1)?;
                src.lines().nth(index)
            });
            if let Some(line) = line {
                let gutter = span.start.line.to_string();
                let pad = " ".repeat(gutter.len());
                let caret_pad = " ".repeat(span.start.column.saturating_sub(1) as usize);
                let _ = write!(out, "\n{} |", pad);
                let _ = write!(out, "\n{} | {}", gutter, line);
                let _ = write!(out, "\n{} | {}^", pad, caret_pad);
            }
        }

        for note in &self.notes {
            let _ = write!(out, "\n  = {}: {}", Level::Note, note);
        }

        out
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(None))
    }
}
