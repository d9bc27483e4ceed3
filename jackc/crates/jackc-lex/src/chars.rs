//! Character classes used by the tokenizer.
//!
//! Jack identifiers are restricted to ASCII: letters `a-z`, `A-Z`, digits
//! and the underscore. Non-ASCII letters are not identifier characters and
//! are reported as unrecognized when they start a token.

/// Checks if a character may start an identifier or keyword.
///
/// # Example
///
/// ```
/// use jackc_lex::chars::is_ident_start;
///
/// assert!(is_ident_start('a'));
/// assert!(is_ident_start('Z'));
/// assert!(is_ident_start('_'));
/// assert!(!is_ident_start('1'));
/// assert!(!is_ident_start('é'));
/// ```
#[inline]
pub fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Checks if a character may continue an identifier.
///
/// # Example
///
/// ```
/// use jackc_lex::chars::is_ident_continue;
///
/// assert!(is_ident_continue('a'));
/// assert!(is_ident_continue('7'));
/// assert!(is_ident_continue('_'));
/// assert!(!is_ident_continue('-'));
/// ```
#[inline]
pub fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Checks if a character is a decimal digit.
#[inline]
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Checks if a character is insignificant whitespace.
///
/// Only space, tab, carriage return and newline count; other Unicode
/// whitespace is not skipped.
#[inline]
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}
