//! Whitespace and comment skipping.
//!
//! Runs before every token as a small state machine. Block comments do not
//! nest: the first `*/` closes the comment.

use std::io::Read;

use jackc_util::Position;

use super::core::Tokenizer;
use crate::chars::is_whitespace;
use crate::error::{LexResult, LexicalErrorKind};

/// State of the skip phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SkipState {
    /// Between tokens, looking at whitespace or the start of a comment.
    Scanning,
    /// Inside `// ...`, until end of line.
    InLineComment,
    /// Inside `/* ... */`, opened at the given position.
    InBlockComment(Position),
}

impl<R: Read> Tokenizer<R> {
    /// Skips whitespace and comments.
    ///
    /// On success the cursor's current character is the first significant
    /// character, which is returned; `None` means the input ended first.
    /// A `/` that opens no comment is significant and ends the skip phase.
    pub(super) fn skip_whitespace_and_comments(&mut self) -> LexResult<Option<char>> {
        let mut state = SkipState::Scanning;

        loop {
            let c = self.cursor.next()?;

            state = match (state, c) {
                (SkipState::Scanning | SkipState::InLineComment, None) => return Ok(None),
                (SkipState::InBlockComment(opened_at), None) => {
                    return Err(self.error(opened_at, LexicalErrorKind::UnterminatedBlockComment));
                },

                (SkipState::Scanning, Some(c)) if is_whitespace(c) => SkipState::Scanning,
                (SkipState::Scanning, Some('/')) => {
                    let opened_at = self.cursor.position();
                    if self.cursor.next_if_eq('/')? {
                        SkipState::InLineComment
                    } else if self.cursor.next_if_eq('*')? {
                        SkipState::InBlockComment(opened_at)
                    } else {
                        return Ok(Some('/'));
                    }
                },
                (SkipState::Scanning, Some(c)) => return Ok(Some(c)),

                (SkipState::InLineComment, Some('\n')) => SkipState::Scanning,
                (SkipState::InLineComment, Some(_)) => SkipState::InLineComment,

                (SkipState::InBlockComment(opened_at), Some('*')) => {
                    if self.cursor.next_if_eq('/')? {
                        SkipState::Scanning
                    } else {
                        SkipState::InBlockComment(opened_at)
                    }
                },
                (SkipState::InBlockComment(opened_at), Some(_)) => {
                    SkipState::InBlockComment(opened_at)
                },
            };
        }
    }
}
