//! Edge case tests for jackc-lex
