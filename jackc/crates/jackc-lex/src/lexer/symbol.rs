//! Symbol lexing.
//!
//! Every Jack symbol is a single character, so no lookahead is needed once
//! the skip phase has ruled out comments.

use std::io::Read;

use jackc_util::Position;

use super::core::Tokenizer;
use crate::error::{LexResult, LexicalErrorKind};
use crate::token::{Symbol, Token};

impl<R: Read> Tokenizer<R> {
    /// Lexes the symbol `c` at `start`, or reports it as unrecognized.
    pub(super) fn lex_symbol(&mut self, c: char, start: Position) -> LexResult<Token> {
        Symbol::from_char(c)
            .map(Token::Symbol)
            .ok_or_else(|| self.error(start, LexicalErrorKind::UnrecognizedCharacter(c)))
    }
}
