//! Token type definitions.
//!
//! A [`Token`] is one of five lexical categories. Keywords and symbols carry
//! a closed enum identity; identifiers, integer and string constants carry
//! their value.

use std::borrow::Cow;
use std::fmt;

use serde::{Serialize, Serializer};

/// A classified lexical unit.
///
/// Tokens are self-contained values: they hold no reference back to the
/// tokenizer or its input.
///
/// Serialized as `{"kind": "<tag>", "value": ...}` where the tag is the
/// [`TokenKind`] name.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum Token {
    /// Reserved word
    Keyword(Keyword),
    /// Single-character punctuation or operator
    Symbol(Symbol),
    /// Name: letters, digits and underscores, not starting with a digit
    Identifier(String),
    /// Non-negative decimal integer
    IntegerConstant(u32),
    /// Text between two double quotes, quotes excluded
    StringConstant(String),
}

impl Token {
    /// Returns the category of this token.
    ///
    /// # Example
    ///
    /// ```
    /// use jackc_lex::{Token, TokenKind};
    ///
    /// assert_eq!(Token::IntegerConstant(7).kind(), TokenKind::IntegerConstant);
    /// ```
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Keyword(_) => TokenKind::Keyword,
            Token::Symbol(_) => TokenKind::Symbol,
            Token::Identifier(_) => TokenKind::Identifier,
            Token::IntegerConstant(_) => TokenKind::IntegerConstant,
            Token::StringConstant(_) => TokenKind::StringConstant,
        }
    }

    /// Returns the token's value as text.
    ///
    /// Unlike `Display`, string constants are returned without their quotes.
    ///
    /// # Example
    ///
    /// ```
    /// use jackc_lex::Token;
    ///
    /// let token = Token::StringConstant("hi".to_string());
    /// assert_eq!(token.text(), "hi");
    /// assert_eq!(token.to_string(), "\"hi\"");
    /// ```
    pub fn text(&self) -> Cow<'_, str> {
        match self {
            Token::Keyword(keyword) => Cow::Borrowed(keyword.as_str()),
            Token::Symbol(symbol) => Cow::Owned(symbol.as_char().to_string()),
            Token::Identifier(name) => Cow::Borrowed(name),
            Token::IntegerConstant(value) => Cow::Owned(value.to_string()),
            Token::StringConstant(value) => Cow::Borrowed(value),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Keyword(keyword) => write!(f, "{}", keyword),
            Token::Symbol(symbol) => write!(f, "{}", symbol),
            Token::Identifier(name) => f.write_str(name),
            Token::IntegerConstant(value) => write!(f, "{}", value),
            Token::StringConstant(value) => write!(f, "\"{}\"", value),
        }
    }
}

/// The category tag of a [`Token`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TokenKind {
    /// Reserved word
    Keyword,
    /// Punctuation or operator
    Symbol,
    /// Name
    Identifier,
    /// Integer literal
    IntegerConstant,
    /// String literal
    StringConstant,
}

impl TokenKind {
    /// Tag name used by the XML and JSON token listings.
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::Keyword => "keyword",
            TokenKind::Symbol => "symbol",
            TokenKind::Identifier => "identifier",
            TokenKind::IntegerConstant => "integerConstant",
            TokenKind::StringConstant => "stringConstant",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reserved words of the Jack language.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Keyword {
    /// `class`
    Class,
    /// `constructor`
    Constructor,
    /// `function`
    Function,
    /// `method`
    Method,
    /// `field`
    Field,
    /// `static`
    Static,
    /// `var`
    Var,
    /// `int`
    Int,
    /// `char`
    Char,
    /// `boolean`
    Boolean,
    /// `void`
    Void,
    /// `true`
    True,
    /// `false`
    False,
    /// `null`
    Null,
    /// `this`
    This,
    /// `let`
    Let,
    /// `do`
    Do,
    /// `if`
    If,
    /// `else`
    Else,
    /// `while`
    While,
    /// `return`
    Return,
}

impl Keyword {
    /// Every keyword, in declaration order.
    pub const ALL: [Keyword; 21] = [
        Keyword::Class,
        Keyword::Constructor,
        Keyword::Function,
        Keyword::Method,
        Keyword::Field,
        Keyword::Static,
        Keyword::Var,
        Keyword::Int,
        Keyword::Char,
        Keyword::Boolean,
        Keyword::Void,
        Keyword::True,
        Keyword::False,
        Keyword::Null,
        Keyword::This,
        Keyword::Let,
        Keyword::Do,
        Keyword::If,
        Keyword::Else,
        Keyword::While,
        Keyword::Return,
    ];

    /// The keyword as written in source.
    pub fn as_str(self) -> &'static str {
        match self {
            Keyword::Class => "class",
            Keyword::Constructor => "constructor",
            Keyword::Function => "function",
            Keyword::Method => "method",
            Keyword::Field => "field",
            Keyword::Static => "static",
            Keyword::Var => "var",
            Keyword::Int => "int",
            Keyword::Char => "char",
            Keyword::Boolean => "boolean",
            Keyword::Void => "void",
            Keyword::True => "true",
            Keyword::False => "false",
            Keyword::Null => "null",
            Keyword::This => "this",
            Keyword::Let => "let",
            Keyword::Do => "do",
            Keyword::If => "if",
            Keyword::Else => "else",
            Keyword::While => "while",
            Keyword::Return => "return",
        }
    }

    /// Looks up a keyword by its exact, case-sensitive spelling.
    pub fn from_ident(ident: &str) -> Option<Self> {
        let keyword = match ident {
            "class" => Keyword::Class,
            "constructor" => Keyword::Constructor,
            "function" => Keyword::Function,
            "method" => Keyword::Method,
            "field" => Keyword::Field,
            "static" => Keyword::Static,
            "var" => Keyword::Var,
            "int" => Keyword::Int,
            "char" => Keyword::Char,
            "boolean" => Keyword::Boolean,
            "void" => Keyword::Void,
            "true" => Keyword::True,
            "false" => Keyword::False,
            "null" => Keyword::Null,
            "this" => Keyword::This,
            "let" => Keyword::Let,
            "do" => Keyword::Do,
            "if" => Keyword::If,
            "else" => Keyword::Else,
            "while" => Keyword::While,
            "return" => Keyword::Return,
            _ => return None,
        };
        Some(keyword)
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Single-character symbols of the Jack language.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `[`
    LeftBracket,
    /// `]`
    RightBracket,
    /// `.`
    Dot,
    /// `,`
    Comma,
    /// `;`
    Semicolon,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `&`
    Amp,
    /// `|`
    Pipe,
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// `=`
    Equal,
    /// `~`
    Tilde,
}

impl Symbol {
    /// Every symbol, in declaration order.
    pub const ALL: [Symbol; 19] = [
        Symbol::LeftBrace,
        Symbol::RightBrace,
        Symbol::LeftParen,
        Symbol::RightParen,
        Symbol::LeftBracket,
        Symbol::RightBracket,
        Symbol::Dot,
        Symbol::Comma,
        Symbol::Semicolon,
        Symbol::Plus,
        Symbol::Minus,
        Symbol::Star,
        Symbol::Slash,
        Symbol::Amp,
        Symbol::Pipe,
        Symbol::Lt,
        Symbol::Gt,
        Symbol::Equal,
        Symbol::Tilde,
    ];

    /// The symbol's character.
    pub fn as_char(self) -> char {
        match self {
            Symbol::LeftBrace => '{',
            Symbol::RightBrace => '}',
            Symbol::LeftParen => '(',
            Symbol::RightParen => ')',
            Symbol::LeftBracket => '[',
            Symbol::RightBracket => ']',
            Symbol::Dot => '.',
            Symbol::Comma => ',',
            Symbol::Semicolon => ';',
            Symbol::Plus => '+',
            Symbol::Minus => '-',
            Symbol::Star => '*',
            Symbol::Slash => '/',
            Symbol::Amp => '&',
            Symbol::Pipe => '|',
            Symbol::Lt => '<',
            Symbol::Gt => '>',
            Symbol::Equal => '=',
            Symbol::Tilde => '~',
        }
    }

    /// Maps a character to its symbol, if it is one.
    pub fn from_char(c: char) -> Option<Self> {
        let symbol = match c {
            '{' => Symbol::LeftBrace,
            '}' => Symbol::RightBrace,
            '(' => Symbol::LeftParen,
            ')' => Symbol::RightParen,
            '[' => Symbol::LeftBracket,
            ']' => Symbol::RightBracket,
            '.' => Symbol::Dot,
            ',' => Symbol::Comma,
            ';' => Symbol::Semicolon,
            '+' => Symbol::Plus,
            '-' => Symbol::Minus,
            '*' => Symbol::Star,
            '/' => Symbol::Slash,
            '&' => Symbol::Amp,
            '|' => Symbol::Pipe,
            '<' => Symbol::Lt,
            '>' => Symbol::Gt,
            '=' => Symbol::Equal,
            '~' => Symbol::Tilde,
            _ => return None,
        };
        Some(symbol)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl Serialize for Symbol {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_char(self.as_char())
    }
}

/// Classifies an identifier-shaped lexeme as a keyword token.
///
/// Returns `None` when `ident` is not a reserved word, in which case the
/// lexeme is an identifier.
///
/// # Example
///
/// ```
/// use jackc_lex::token::{keyword_from_ident, Keyword, Token};
///
/// assert_eq!(keyword_from_ident("while"), Some(Token::Keyword(Keyword::While)));
/// assert_eq!(keyword_from_ident("While"), None);
/// ```
pub fn keyword_from_ident(ident: &str) -> Option<Token> {
    Keyword::from_ident(ident).map(Token::Keyword)
}
