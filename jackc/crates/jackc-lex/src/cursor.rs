//! Character cursor with one-character lookahead.
//!
//! The [`Cursor`] sits on a *current* character and can look at the
//! character after it without consuming it. It starts before the first
//! character, so the first [`Cursor::next`] makes the first character
//! current. Line and column tracking follow the current character for error
//! reporting.

use std::io::{self, Read};

use jackc_util::Position;

use crate::buffer::CharBuffer;

/// A cursor for traversing an input stream character by character.
///
/// End of input is a normal, repeatable state: once the input is exhausted
/// both [`peek`](Cursor::peek) and [`next`](Cursor::next) keep returning
/// `Ok(None)`.
///
/// # Example
///
/// ```
/// use jackc_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::with_capacity("let".as_bytes(), 4);
///
/// assert_eq!(cursor.current(), None);
/// assert_eq!(cursor.next().unwrap(), Some('l'));
/// assert_eq!(cursor.peek().unwrap(), Some('e'));
/// assert_eq!(cursor.peek().unwrap(), Some('e'));
/// assert_eq!(cursor.current(), Some('l'));
/// ```
pub struct Cursor<R> {
    buffer: CharBuffer<R>,

    /// The character most recently returned by `next`.
    current: Option<char>,

    /// Position of `current`.
    position: Position,

    /// Position of the character `peek` returns.
    next_position: Position,
}

impl<R: Read> Cursor<R> {
    /// Creates a cursor with the default buffer capacity.
    pub fn new(reader: R) -> Self {
        Self::from_buffer(CharBuffer::new(reader))
    }

    /// Creates a cursor whose read buffer holds `capacity` bytes.
    pub fn with_capacity(reader: R, capacity: usize) -> Self {
        Self::from_buffer(CharBuffer::with_capacity(reader, capacity))
    }

    fn from_buffer(buffer: CharBuffer<R>) -> Self {
        Self {
            buffer,
            current: None,
            position: Position::START,
            next_position: Position::START,
        }
    }

    /// Returns the character after the current one without consuming it.
    ///
    /// Repeated calls without an intervening [`next`](Cursor::next) return
    /// the same character.
    pub fn peek(&mut self) -> io::Result<Option<char>> {
        self.buffer.peek_char()
    }

    /// Advances by exactly one character and returns the new current
    /// character, or `None` once the input is exhausted.
    ///
    /// A read error leaves the cursor where it was.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> io::Result<Option<char>> {
        let next = self.buffer.next_char()?;
        self.position = self.next_position;
        if let Some(c) = next {
            self.next_position = self.next_position.advance(c);
        }
        self.current = next;
        Ok(next)
    }

    /// Consumes the next character if it equals `expected`.
    ///
    /// # Example
    ///
    /// ```
    /// use jackc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("*/".as_bytes());
    /// assert!(cursor.next_if_eq('*').unwrap());
    /// assert!(!cursor.next_if_eq('*').unwrap());
    /// assert!(cursor.next_if_eq('/').unwrap());
    /// ```
    pub fn next_if_eq(&mut self, expected: char) -> io::Result<bool> {
        if self.peek()? == Some(expected) {
            self.next()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// The current character: the one most recently returned by
    /// [`next`](Cursor::next).
    pub fn current(&self) -> Option<char> {
        self.current
    }

    /// Position of the current character.
    ///
    /// Once the input is exhausted this is the position just past the last
    /// character.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Position of the character [`peek`](Cursor::peek) returns.
    pub fn next_position(&self) -> Position {
        self.next_position
    }

    /// Capacity of the underlying read buffer in bytes.
    pub fn buffer_capacity(&self) -> usize {
        self.buffer.capacity()
    }
}
