//! String constant lexing.
//!
//! Jack strings have no escape sequences: everything between the quotes is
//! taken literally, except that a newline may not appear inside.

use std::io::Read;

use jackc_util::Position;

use super::core::Tokenizer;
use crate::error::{LexResult, LexicalErrorKind};
use crate::token::Token;

impl<R: Read> Tokenizer<R> {
    /// Lexes a string constant whose opening quote, at `start`, is the
    /// cursor's current character.
    ///
    /// Consumes the closing quote. Reaching a newline or the end of input
    /// first is a lexical error reported at the opening quote.
    pub(super) fn lex_string(&mut self, start: Position) -> LexResult<Token> {
        let mut content = String::new();

        loop {
            match self.cursor.peek()? {
                Some('"') => {
                    self.cursor.next()?;
                    return Ok(Token::StringConstant(content));
                },
                Some('\n') | None => {
                    return Err(self.error(start, LexicalErrorKind::UnterminatedString));
                },
                Some(c) => {
                    self.cursor.next()?;
                    content.push(c);
                },
            }
        }
    }
}
