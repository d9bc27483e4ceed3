//! Integer constant lexing.

use std::io::Read;

use jackc_util::Position;

use super::core::Tokenizer;
use crate::chars::is_digit;
use crate::error::{LexResult, LexicalErrorKind};
use crate::token::Token;

impl<R: Read> Tokenizer<R> {
    /// Lexes a decimal integer constant starting with `first`.
    ///
    /// Reads the maximal run of digits; the run ends at the first
    /// non-digit, which is left for the next token. A value that does not
    /// fit in `u32` is a lexical error at `start`.
    pub(super) fn lex_integer(&mut self, first: char, start: Position) -> LexResult<Token> {
        let mut digits = String::from(first);

        loop {
            match self.cursor.peek()? {
                Some(c) if is_digit(c) => {
                    self.cursor.next()?;
                    digits.push(c);
                },
                _ => break,
            }
        }

        match digits.parse::<u32>() {
            Ok(value) => Ok(Token::IntegerConstant(value)),
            Err(_) => Err(self.error(start, LexicalErrorKind::IntegerOutOfRange(digits))),
        }
    }
}
