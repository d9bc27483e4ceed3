//! Core tokenizer implementation.
//!
//! This module contains the Tokenizer struct, its public `advance` protocol
//! and the dispatch from the first significant character to the lexing
//! method of each token category.

use std::io::{self, Read};

use jackc_util::{Position, Span};
use tracing::{debug, trace};

use crate::chars::{is_digit, is_ident_start};
use crate::config::TokenizerConfig;
use crate::cursor::Cursor;
use crate::error::{LexError, LexResult, LexicalErrorKind};
use crate::token::Token;

/// Tokenizer for Jack source text.
///
/// The tokenizer reads its input lazily, one token per
/// [`advance`](Tokenizer::advance), and keeps only the most recent token.
/// It is single-pass: once the input is exhausted every further `advance`
/// reports end of input again.
///
/// # Example
///
/// ```
/// use jackc_lex::{Keyword, Symbol, Token, Tokenizer};
///
/// let mut tokenizer = Tokenizer::for_str("let x = 3;");
///
/// assert_eq!(tokenizer.advance().unwrap(), Some(&Token::Keyword(Keyword::Let)));
/// assert_eq!(tokenizer.advance().unwrap(), Some(&Token::Identifier("x".into())));
/// assert_eq!(tokenizer.advance().unwrap(), Some(&Token::Symbol(Symbol::Equal)));
/// assert_eq!(tokenizer.advance().unwrap(), Some(&Token::IntegerConstant(3)));
/// assert_eq!(tokenizer.advance().unwrap(), Some(&Token::Symbol(Symbol::Semicolon)));
/// assert_eq!(tokenizer.advance().unwrap(), None);
/// assert_eq!(tokenizer.current_token(), None);
/// ```
pub struct Tokenizer<R> {
    /// Character cursor over the input.
    pub(super) cursor: Cursor<R>,

    /// The most recently produced token.
    current: Option<Token>,

    /// Source span of `current`.
    span: Option<Span>,

    /// Token read ahead by `peek_token`, not yet current.
    peeked: Option<(Token, Span)>,

    /// End of input has been reached.
    exhausted: bool,

    /// The first error; every later call reports it again.
    failure: Option<Failure>,
}

/// A recorded tokenizer failure.
///
/// `LexError` is not `Clone` because of its `io::Error`, so I/O failures
/// keep their kind and message.
#[derive(Debug, Clone)]
enum Failure {
    Lexical(Position, LexicalErrorKind),
    Io(io::ErrorKind, String),
}

impl Failure {
    fn record(err: &LexError) -> Self {
        match err {
            LexError::Lexical { position, reason } => Failure::Lexical(*position, reason.clone()),
            LexError::Io(e) => Failure::Io(e.kind(), e.to_string()),
        }
    }

    fn to_error(&self) -> LexError {
        match self {
            Failure::Lexical(position, reason) => LexError::lexical(*position, reason.clone()),
            Failure::Io(kind, message) => LexError::Io(io::Error::new(*kind, message.clone())),
        }
    }
}

impl<'a> Tokenizer<&'a [u8]> {
    /// Creates a tokenizer over an in-memory string.
    pub fn for_str(source: &'a str) -> Self {
        Tokenizer::new(source.as_bytes())
    }
}

impl<R: Read> Tokenizer<R> {
    /// Creates a tokenizer with the default configuration.
    pub fn new(reader: R) -> Self {
        Self::with_config(reader, TokenizerConfig::default())
    }

    /// Creates a tokenizer with the given configuration.
    pub fn with_config(reader: R, config: TokenizerConfig) -> Self {
        Self {
            cursor: Cursor::with_capacity(reader, config.buffer_capacity),
            current: None,
            span: None,
            peeked: None,
            exhausted: false,
            failure: None,
        }
    }

    /// Advances to the next token and makes it the current token.
    ///
    /// Skips whitespace and comments, then consumes exactly one token.
    /// Returns `Ok(None)` at end of input, and keeps returning it on later
    /// calls without reading again. A token already read by
    /// [`peek_token`](Tokenizer::peek_token) is taken without reading.
    ///
    /// # Errors
    ///
    /// [`LexError::Lexical`] when the input at the current position forms
    /// no token, [`LexError::Io`] when the reader fails. A failure is final:
    /// the partly consumed lexeme is lost, so every later call returns the
    /// same error instead of resuming mid-token.
    pub fn advance(&mut self) -> LexResult<Option<&Token>> {
        self.current = None;
        self.span = None;

        let next = match self.peeked.take() {
            Some(next) => Some(next),
            None => self.lex_next()?,
        };

        match next {
            Some((token, span)) => {
                self.span = Some(span);
                Ok(Some(&*self.current.insert(token)))
            },
            None => Ok(None),
        }
    }

    /// Returns the token after the current one without advancing.
    ///
    /// The current token and its span are unchanged, and repeated calls
    /// return the same token. `Ok(None)` means no token follows.
    ///
    /// # Errors
    ///
    /// As for [`advance`](Tokenizer::advance); the error is also reported by
    /// the next `advance`.
    ///
    /// # Example
    ///
    /// ```
    /// use jackc_lex::{Symbol, Token, Tokenizer};
    ///
    /// let mut tokenizer = Tokenizer::for_str("a[i]");
    /// tokenizer.advance().unwrap();
    /// assert_eq!(tokenizer.peek_token().unwrap(), Some(&Token::Symbol(Symbol::LeftBracket)));
    /// assert_eq!(tokenizer.current_token(), Some(&Token::Identifier("a".into())));
    /// ```
    pub fn peek_token(&mut self) -> LexResult<Option<&Token>> {
        if self.peeked.is_none() {
            self.peeked = self.lex_next()?;
        }
        Ok(self.peeked.as_ref().map(|(token, _)| token))
    }

    /// The most recently produced token.
    ///
    /// `None` before the first [`advance`](Tokenizer::advance), after end of
    /// input and after an error.
    pub fn current_token(&self) -> Option<&Token> {
        self.current.as_ref()
    }

    /// Source span of the current token.
    pub fn token_span(&self) -> Option<Span> {
        self.span
    }

    /// Returns true once end of input has been reached.
    pub fn is_exhausted(&self) -> bool {
        self.exhausted && self.peeked.is_none()
    }

    /// Returns true once a call has failed.
    pub fn has_failed(&self) -> bool {
        self.failure.is_some()
    }

    /// Position of the cursor's current character.
    pub fn position(&self) -> Position {
        self.cursor.position()
    }

    /// Builds a lexical error at `position`.
    pub(super) fn error(&self, position: Position, reason: LexicalErrorKind) -> LexError {
        LexError::lexical(position, reason)
    }

    /// Reads the next token from the input, honouring end of input and a
    /// recorded failure.
    fn lex_next(&mut self) -> LexResult<Option<(Token, Span)>> {
        if let Some(failure) = &self.failure {
            return Err(failure.to_error());
        }
        if self.exhausted {
            return Ok(None);
        }

        match self.scan_token() {
            Ok(None) => {
                debug!(position = %self.cursor.position(), "end of input");
                self.exhausted = true;
                Ok(None)
            },
            Ok(token) => Ok(token),
            Err(err) => {
                debug!(error = %err, "tokenizer stopped");
                self.failure = Some(Failure::record(&err));
                Err(err)
            },
        }
    }

    /// Skips insignificant input and scans one token with its span.
    fn scan_token(&mut self) -> LexResult<Option<(Token, Span)>> {
        let first = match self.skip_whitespace_and_comments()? {
            Some(c) => c,
            None => return Ok(None),
        };

        let start = self.cursor.position();
        let token = match first {
            c if is_ident_start(c) => self.lex_identifier(c)?,
            '"' => self.lex_string(start)?,
            c if is_digit(c) => self.lex_integer(c, start)?,
            c => self.lex_symbol(c, start)?,
        };

        let span = Span::between(start, self.cursor.next_position());
        trace!(kind = %token.kind(), token = %token, at = %start, "token");
        Ok(Some((token, span)))
    }
}

impl<R: Read> Iterator for Tokenizer<R> {
    type Item = LexResult<Token>;

    /// Yields owned tokens until end of input or the first error.
    fn next(&mut self) -> Option<Self::Item> {
        if self.has_failed() {
            return None;
        }

        match self.advance().map(|token| token.cloned()) {
            Ok(Some(token)) => Some(Ok(token)),
            Ok(None) => None,
            Err(e) => Some(Err(e)),
        }
    }
}
