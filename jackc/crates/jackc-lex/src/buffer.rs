//! Refilling read buffer with incremental UTF-8 decoding.
//!
//! [`CharBuffer`] pulls bytes from any [`Read`] into a fixed-size buffer and
//! hands them out one `char` at a time. Unconsumed bytes are moved to the
//! front of the buffer before each refill, so a character whose bytes are
//! split across two reads is decoded whole and nothing is skipped or
//! duplicated at the boundary.

use std::io::{self, ErrorKind, Read};

use tracing::{debug, trace};

/// Smallest usable capacity: the width of the longest UTF-8 sequence.
pub const MIN_CAPACITY: usize = 4;

/// Capacity used when none is configured.
pub const DEFAULT_CAPACITY: usize = 4096;

/// A forward-only character source over a byte reader.
///
/// # Example
///
/// ```
/// use jackc_lex::buffer::CharBuffer;
///
/// let mut buffer = CharBuffer::with_capacity("añb".as_bytes(), 4);
/// assert_eq!(buffer.peek_char().unwrap(), Some('a'));
/// assert_eq!(buffer.next_char().unwrap(), Some('a'));
/// assert_eq!(buffer.next_char().unwrap(), Some('ñ'));
/// assert_eq!(buffer.next_char().unwrap(), Some('b'));
/// assert_eq!(buffer.next_char().unwrap(), None);
/// assert_eq!(buffer.next_char().unwrap(), None);
/// ```
pub struct CharBuffer<R> {
    reader: R,
    buf: Box<[u8]>,
    /// First unconsumed byte.
    start: usize,
    /// One past the last buffered byte.
    end: usize,
    /// The reader reported end of input; it is never read again.
    eof: bool,
    refills: usize,
}

impl<R: Read> CharBuffer<R> {
    /// Creates a buffer with [`DEFAULT_CAPACITY`].
    pub fn new(reader: R) -> Self {
        Self::with_capacity(reader, DEFAULT_CAPACITY)
    }

    /// Creates a buffer holding up to `capacity` bytes.
    ///
    /// Capacities below [`MIN_CAPACITY`] are raised to it.
    pub fn with_capacity(reader: R, capacity: usize) -> Self {
        let capacity = capacity.max(MIN_CAPACITY);
        Self {
            reader,
            buf: vec![0; capacity].into_boxed_slice(),
            start: 0,
            end: 0,
            eof: false,
            refills: 0,
        }
    }

    /// Buffer size in bytes.
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Number of successful reads performed so far.
    pub fn refills(&self) -> usize {
        self.refills
    }

    /// Returns the next character without consuming it.
    ///
    /// Repeated calls return the same character. `Ok(None)` means the input
    /// is exhausted.
    pub fn peek_char(&mut self) -> io::Result<Option<char>> {
        Ok(self.decode()?.map(|(c, _)| c))
    }

    /// Consumes and returns the next character.
    ///
    /// `Ok(None)` means the input is exhausted; further calls keep
    /// returning it.
    pub fn next_char(&mut self) -> io::Result<Option<char>> {
        match self.decode()? {
            Some((c, width)) => {
                self.start += width;
                Ok(Some(c))
            },
            None => Ok(None),
        }
    }

    /// Decodes the character at `start` and returns it with its byte width.
    fn decode(&mut self) -> io::Result<Option<(char, usize)>> {
        if !self.fill(1)? {
            return Ok(None);
        }

        let width = utf8_width(self.buf[self.start])
            .ok_or_else(|| invalid_data("invalid UTF-8 lead byte"))?;

        if !self.fill(width)? {
            return Err(invalid_data("truncated UTF-8 sequence at end of input"));
        }

        let bytes = &self.buf[self.start..self.start + width];
        let text =
            std::str::from_utf8(bytes).map_err(|e| io::Error::new(ErrorKind::InvalidData, e))?;
        match text.chars().next() {
            Some(c) => Ok(Some((c, width))),
            None => Err(invalid_data("empty UTF-8 sequence")),
        }
    }

    /// Ensures at least `want` unconsumed bytes are buffered.
    ///
    /// Returns `false` when the reader is exhausted first. A failed read
    /// leaves every buffered byte in place, so the call can be retried.
    fn fill(&mut self, want: usize) -> io::Result<bool> {
        while self.end - self.start < want {
            if self.eof {
                return Ok(false);
            }

            if self.end == self.buf.len() {
                self.compact();
            }

            match self.reader.read(&mut self.buf[self.end..]) {
                Ok(0) => {
                    debug!(refills = self.refills, "input exhausted");
                    self.eof = true;
                },
                Ok(n) => {
                    self.end += n;
                    self.refills += 1;
                    trace!(bytes = n, buffered = self.end - self.start, "buffer refilled");
                },
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
        Ok(true)
    }

    /// Moves the unconsumed bytes to the front of the buffer.
    fn compact(&mut self) {
        self.buf.copy_within(self.start..self.end, 0);
        self.end -= self.start;
        self.start = 0;
    }
}

/// Byte width of the UTF-8 sequence introduced by `lead`.
fn utf8_width(lead: u8) -> Option<usize> {
    match lead {
        0x00..=0x7F => Some(1),
        0xC2..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF4 => Some(4),
        _ => None,
    }
}

fn invalid_data(message: &str) -> io::Error {
    io::Error::new(ErrorKind::InvalidData, message.to_string())
}
