//! jackc-lex - Lexical Analyzer for the Jack Programming Language
//!
//! This crate provides the tokenizer for Jack, the small object-based
//! language of the nand2tetris course. It reads source text from any
//! [`std::io::Read`] and produces tokens one at a time, on demand.
//!
//! # Example Usage
//!
//! ```
//! use jackc_lex::{Keyword, Token, Tokenizer};
//!
//! let source = "// entry point\nclass Main { }";
//! let mut tokenizer = Tokenizer::for_str(source);
//!
//! // Pull tokens one at a time
//! assert_eq!(tokenizer.advance().unwrap(), Some(&Token::Keyword(Keyword::Class)));
//! assert_eq!(tokenizer.current_token(), Some(&Token::Keyword(Keyword::Class)));
//!
//! // Or iterate over the rest
//! let rest: Vec<String> = tokenizer.map(|t| t.unwrap().to_string()).collect();
//! assert_eq!(rest, vec!["Main", "{", "}"]);
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token type definitions
//! - [`lexer`] - Tokenizer implementation
//! - [`cursor`] - Character cursor with one character of lookahead
//! - [`buffer`] - Fixed-capacity UTF-8 read buffer
//! - [`chars`] - Character classes
//! - [`error`] - Lexical and I/O errors
//! - [`config`] - Tokenizer settings
//!
//! # Token Categories
//!
//! ## Keywords
//!
//! `class`, `constructor`, `function`, `method`, `field`, `static`, `var`,
//! `int`, `char`, `boolean`, `void`, `true`, `false`, `null`, `this`,
//! `let`, `do`, `if`, `else`, `while`, `return`
//!
//! ## Symbols
//!
//! `{ } ( ) [ ] . , ; + - * / & | < > = ~`
//!
//! Every symbol is one character; there are no compound operators.
//!
//! ## Identifiers
//!
//! Pattern: `[a-zA-Z_][a-zA-Z0-9_]*`, excluding keywords.
//!
//! ## Constants
//!
//! - **Integer**: decimal digits, `0` to `4294967295`
//! - **String**: `"text"`, no escapes, no newlines
//!
//! ## Skipped
//!
//! Whitespace, `// line comments` and `/* block comments */`. Block comments
//! do not nest.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod buffer;
pub mod chars;
pub mod config;
pub mod cursor;
pub mod error;
pub mod lexer;
pub mod token;

mod edge_cases;

// Re-export main types for convenience
pub use buffer::CharBuffer;
pub use config::TokenizerConfig;
pub use cursor::Cursor;
pub use error::{LexError, LexResult, LexicalErrorKind};
pub use lexer::Tokenizer;
pub use token::{keyword_from_ident, Keyword, Symbol, Token, TokenKind};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::tests::ChunkedReader;
    use jackc_util::Position;

    /// Helper to collect all tokens from source.
    fn lex_all(source: &str) -> Vec<Token> {
        Tokenizer::for_str(source)
            .collect::<LexResult<_>>()
            .unwrap()
    }

    fn lex_with(source: &str, capacity: usize, chunk: usize) -> Vec<Token> {
        let config = TokenizerConfig::default().buffer_capacity(capacity);
        Tokenizer::with_config(ChunkedReader::new(source.as_bytes(), chunk), config)
            .collect::<LexResult<_>>()
            .unwrap()
    }

    const SQUARE_GAME: &str = r#"
        /** Implements the Square game. */
        class SquareGame {
            field Square square; // the square
            field int direction;

            constructor SquareGame new() {
                let square = Square.new(0, 0, 30);
                let direction = 0;
                return this;
            }

            method void moveSquare() {
                if (direction = 1) { do square.moveUp(); }
                if (~(direction < 2)) { do square.moveDown(); }
                do Sys.wait(5);  // delays the next movement
                return;
            }

            function void main() {
                var Array a;
                let a[2] = "score: ";
                while (true) { do Output.printString(a[2]); }
                return;
            }
        }
    "#;

    #[test]
    fn test_let_statement_after_comment() {
        assert_eq!(
            lex_all("// a comment\nlet x = 3;"),
            vec![
                Token::Keyword(Keyword::Let),
                Token::Identifier("x".into()),
                Token::Symbol(Symbol::Equal),
                Token::IntegerConstant(3),
                Token::Symbol(Symbol::Semicolon),
            ]
        );
    }

    #[test]
    fn test_string_after_block_comment() {
        assert_eq!(
            lex_all("/* multi\nline */\"hi\""),
            vec![Token::StringConstant("hi".into())]
        );
    }

    #[test]
    fn test_unterminated_string_is_error() {
        let err = Tokenizer::for_str("\"unterminated").advance().unwrap_err();
        assert!(err.is_lexical());
        assert_eq!(err.reason(), Some(&LexicalErrorKind::UnterminatedString));
    }

    #[test]
    fn test_integer_then_identifier() {
        assert_eq!(
            lex_all("123abc"),
            vec![Token::IntegerConstant(123), Token::Identifier("abc".into())]
        );
    }

    #[test]
    fn test_unrecognized_character_is_error() {
        let err = Tokenizer::for_str("@").advance().unwrap_err();
        assert_eq!(err.reason(), Some(&LexicalErrorKind::UnrecognizedCharacter('@')));
        assert_eq!(err.position(), Some(Position::START));
    }

    #[test]
    fn test_whitespace_and_comments_only() {
        let mut tokenizer = Tokenizer::for_str("  \n\t// only\n/* comments */  ");
        assert_eq!(tokenizer.advance().unwrap(), None);
        assert!(tokenizer.is_exhausted());
    }

    #[test]
    fn test_empty_source() {
        assert!(lex_all("").is_empty());
    }

    #[test]
    fn test_square_game_program() {
        let tokens = lex_all(SQUARE_GAME);

        assert_eq!(tokens[0], Token::Keyword(Keyword::Class));
        assert_eq!(tokens[1], Token::Identifier("SquareGame".into()));
        assert_eq!(tokens.last(), Some(&Token::Symbol(Symbol::RightBrace)));

        assert!(tokens.contains(&Token::Keyword(Keyword::Constructor)));
        assert!(tokens.contains(&Token::Keyword(Keyword::Method)));
        assert!(tokens.contains(&Token::Keyword(Keyword::Function)));
        assert!(tokens.contains(&Token::Keyword(Keyword::This)));
        assert!(tokens.contains(&Token::Symbol(Symbol::Tilde)));
        assert!(tokens.contains(&Token::Symbol(Symbol::LeftBracket)));
        assert!(tokens.contains(&Token::IntegerConstant(30)));
        assert!(tokens.contains(&Token::StringConstant("score: ".into())));
        assert!(!tokens.contains(&Token::Identifier("the".into())));
    }

    #[test]
    fn test_small_buffer_matches_default() {
        let expected = lex_all(SQUARE_GAME);
        for capacity in [1, 4, 5, 7, 16] {
            assert_eq!(lex_with(SQUARE_GAME, capacity, 3), expected);
        }
    }

    #[test]
    fn test_io_error_is_reported() {
        use crate::buffer::tests::FlakyReader;
        use std::io::ErrorKind;

        let mut tokenizer = Tokenizer::new(FlakyReader::new(b"x", ErrorKind::BrokenPipe));
        let err = tokenizer.advance().unwrap_err();
        assert!(matches!(err, LexError::Io(ref e) if e.kind() == ErrorKind::BrokenPipe));
        assert!(!err.is_lexical());
    }

    // ------------------------------------------------------------------------
    // PROPERTY-BASED TESTS
    // ------------------------------------------------------------------------

    #[test]
    fn test_property_buffer_size_does_not_change_tokens() {
        use proptest::prelude::*;

        proptest!(|(
            source in "[a-z0-9 (){};=+\"/*\n]{0,80}",
            capacity in 1usize..64,
            chunk in 1usize..9
        )| {
            let expected: Vec<String> = Tokenizer::for_str(&source)
                .map(|t| format!("{:?}", t))
                .collect();
            let config = TokenizerConfig::default().buffer_capacity(capacity);
            let actual: Vec<String> =
                Tokenizer::with_config(ChunkedReader::new(source.as_bytes(), chunk), config)
                    .map(|t| format!("{:?}", t))
                    .collect();
            prop_assert_eq!(actual, expected);
        });
    }

    #[test]
    fn test_property_identifier_or_keyword() {
        use proptest::prelude::*;

        proptest!(|(input in "[a-zA-Z_][a-zA-Z0-9_]{0,30}")| {
            let tokens = lex_all(&input);
            prop_assert_eq!(tokens.len(), 1);
            let expected = match Keyword::from_ident(&input) {
                Some(keyword) => Token::Keyword(keyword),
                None => Token::Identifier(input.clone()),
            };
            prop_assert_eq!(&tokens[0], &expected);
        });
    }

    #[test]
    fn test_property_arbitrary_string_constants() {
        use proptest::prelude::*;

        proptest!(|(input in "[^\"\\n]{0,100}")| {
            let tokens = lex_all(&format!("\"{}\"", input));
            prop_assert_eq!(tokens, vec![Token::StringConstant(input.clone())]);
        });
    }

    #[test]
    fn test_property_adjacent_symbols_split() {
        use proptest::prelude::*;

        proptest!(|(indices in prop::collection::vec(0usize..Symbol::ALL.len(), 1..20))| {
            let symbols: Vec<Symbol> = indices.iter().map(|&i| Symbol::ALL[i]).collect();
            let source: String = symbols.iter().map(|s| s.as_char()).collect();
            // "//" and "/*" open comments rather than forming two slashes
            prop_assume!(!source.contains("//") && !source.contains("/*"));
            let expected: Vec<Token> = symbols.into_iter().map(Token::Symbol).collect();
            prop_assert_eq!(lex_all(&source), expected);
        });
    }

    #[test]
    fn test_property_decimal_in_range() {
        use proptest::prelude::*;

        proptest!(|(value in any::<u32>())| {
            prop_assert_eq!(lex_all(&value.to_string()), vec![Token::IntegerConstant(value)]);
        });
    }
}
