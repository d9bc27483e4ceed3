//! Identifier and keyword lexing.
//!
//! This module handles lexing of identifiers and keywords.

use std::io::Read;

use super::core::Tokenizer;
use crate::chars::is_ident_continue;
use crate::error::LexResult;
use crate::token::{keyword_from_ident, Token};

impl<R: Read> Tokenizer<R> {
    /// Lexes an identifier or keyword starting with `first`.
    ///
    /// Reads the maximal run of letters, digits and underscores, then checks
    /// whether it matches a reserved keyword.
    ///
    /// # Returns
    ///
    /// Either `Token::Keyword(..)` or `Token::Identifier(name)`
    pub(super) fn lex_identifier(&mut self, first: char) -> LexResult<Token> {
        let mut text = String::from(first);

        loop {
            match self.cursor.peek()? {
                Some(c) if is_ident_continue(c) => {
                    self.cursor.next()?;
                    text.push(c);
                },
                _ => break,
            }
        }

        Ok(keyword_from_ident(&text).unwrap_or(Token::Identifier(text)))
    }
}
