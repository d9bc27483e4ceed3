//! Span module - Source location tracking.
//!
//! This module provides the types used to point into source text: a
//! [`Position`] for a single character and a [`Span`] for the byte range of
//! a lexeme.
//!
//! # Examples
//!
//! ```
//! use jackc_util::span::{Position, Span};
//!
//! let start = Position::new(4, 1, 5);
//! let span = Span::new(start, 3);
//! assert_eq!(span.end(), 7);
//! ```

use std::fmt;

use serde::Serialize;

/// Location of a single character in source text.
///
/// `offset` counts bytes from the start of the input, `line` and `column`
/// are 1-based and count characters, so they are suitable for display.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Position {
    /// Byte offset from the start of the input
    pub offset: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based, in characters)
    pub column: u32,
}

impl Position {
    /// The position of the first character of any input.
    ///
    /// # Examples
    ///
    /// ```
    /// use jackc_util::span::Position;
    ///
    /// assert_eq!(Position::START.line, 1);
    /// assert_eq!(Position::START.column, 1);
    /// ```
    pub const START: Position = Position {
        offset: 0,
        line: 1,
        column: 1,
    };

    /// Create a new position
    #[inline]
    pub const fn new(offset: usize, line: u32, column: u32) -> Self {
        Self {
            offset,
            line,
            column,
        }
    }

    /// Returns the position directly after `c`, which must be the character
    /// located at `self`.
    ///
    /// A newline moves to column 1 of the next line.
    ///
    /// # Examples
    ///
    /// ```
    /// use jackc_util::span::Position;
    ///
    /// let p = Position::START.advance('a');
    /// assert_eq!((p.offset, p.line, p.column), (1, 1, 2));
    ///
    /// let p = p.advance('\n');
    /// assert_eq!((p.offset, p.line, p.column), (2, 2, 1));
    ///
    /// let p = p.advance('é');
    /// assert_eq!((p.offset, p.line, p.column), (4, 2, 2));
    /// ```
    #[inline]
    pub fn advance(self, c: char) -> Self {
        let offset = self.offset + c.len_utf8();
        if c == '\n' {
            Self {
                offset,
                line: self.line + 1,
                column: 1,
            }
        } else {
            Self {
                offset,
                line: self.line,
                column: self.column + 1,
            }
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Source location span
///
/// A `Span` covers the bytes of one lexeme: it starts at a [`Position`] and
/// extends `len` bytes from there.
///
/// # Examples
///
/// ```
/// use jackc_util::span::{Position, Span};
///
/// let span = Span::new(Position::new(10, 2, 3), 5);
/// assert_eq!(span.start.offset, 10);
/// assert_eq!(span.end(), 15);
/// assert!(!span.is_empty());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Span {
    /// Position of the first character
    pub start: Position,
    /// Length in bytes
    pub len: usize,
}

impl Span {
    /// Create a new span
    #[inline]
    pub const fn new(start: Position, len: usize) -> Self {
        Self { start, len }
    }

    /// Create a span between two positions.
    ///
    /// # Examples
    ///
    /// ```
    /// use jackc_util::span::{Position, Span};
    ///
    /// let start = Position::new(2, 1, 3);
    /// let end = Position::new(6, 1, 7);
    /// assert_eq!(Span::between(start, end).len, 4);
    /// ```
    #[inline]
    pub fn between(start: Position, end: Position) -> Self {
        Self {
            start,
            len: end.offset.saturating_sub(start.offset),
        }
    }

    /// Create an empty span at a single point
    #[inline]
    pub const fn point(start: Position) -> Self {
        Self { start, len: 0 }
    }

    /// Byte offset one past the last byte of the span
    #[inline]
    pub fn end(&self) -> usize {
        self.start.offset + self.len
    }

    /// Returns true if this span is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.start)
    }
}
