//! Lexer module.
//!
//! This module organizes the tokenizer into smaller, focused components:
//! - `core` - Tokenizer struct, `advance` and dispatch
//! - `comment` - whitespace and comment skipping
//! - `identifier` - identifier and keyword lexing
//! - `number` - integer constant lexing
//! - `string` - string constant lexing
//! - `symbol` - single-character symbol lexing

mod comment;
mod core;
mod identifier;
mod number;
mod string;
mod symbol;

pub use self::core::Tokenizer;
