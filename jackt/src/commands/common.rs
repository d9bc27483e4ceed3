//! Common types and utilities for jackt commands.
//!
//! This module provides the output formats, the token writers and the
//! per-file tokenizing and error reporting shared by all commands.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use clap::ValueEnum;
use jackc_lex::{LexError, Token, Tokenizer, TokenizerConfig};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{JacktError, Result};

// ============================================================================
// Output Format
// ============================================================================

/// Supported output formats for token listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `kind<TAB>lexeme` line per token
    #[default]
    Text,
    /// nand2tetris `<tokens>` document
    Xml,
    /// JSON array of `{"kind", "value"}` objects
    Json,
}

// ============================================================================
// Tokenizing
// ============================================================================

/// Tokenizes the file at `path`, streaming it through the tokenizer.
///
/// Stops at the first error. A file that cannot be opened is reported as
/// [`JacktError::Read`]; any failure after that as [`JacktError::Lex`].
pub fn tokenize_file(path: &Path, config: TokenizerConfig) -> Result<Vec<Token>> {
    let file = File::open(path).map_err(|source| JacktError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let tokens = Tokenizer::with_config(file, config)
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|source| JacktError::Lex {
            path: path.to_path_buf(),
            source,
        })?;

    debug!(path = %path.display(), tokens = tokens.len(), "tokenized");
    Ok(tokens)
}

/// Prints a failed file's error to stderr.
///
/// Lexical errors are rendered as a diagnostic with the offending source
/// line when the file can be read again.
pub fn report_error(err: &JacktError) {
    match err {
        JacktError::Lex { path, source } => eprintln!("{}", render_lex_error(path, source)),
        other => eprintln!("error: {}", other),
    }
}

/// Renders a tokenizer error for `path` as a diagnostic.
pub fn render_lex_error(path: &Path, err: &LexError) -> String {
    let source = std::fs::read_to_string(path).ok();
    err.to_diagnostic()
        .with_origin(path.display().to_string())
        .render(source.as_deref())
}

// ============================================================================
// Writers
// ============================================================================

/// Writes `tokens` to `out` in the given format.
pub fn write_tokens<W: Write>(out: &mut W, tokens: &[Token], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => write_text(out, tokens),
        OutputFormat::Xml => write_xml(out, tokens),
        OutputFormat::Json => write_json(out, tokens),
    }
}

fn write_text<W: Write>(out: &mut W, tokens: &[Token]) -> Result<()> {
    for token in tokens {
        writeln!(out, "{}\t{}", token.kind(), token.text())?;
    }
    Ok(())
}

fn write_xml<W: Write>(out: &mut W, tokens: &[Token]) -> Result<()> {
    writeln!(out, "<tokens>")?;
    for token in tokens {
        let tag = token.kind();
        writeln!(out, "<{tag}> {} </{tag}>", escape_xml(&token.text()))?;
    }
    writeln!(out, "</tokens>")?;
    Ok(())
}

fn write_json<W: Write>(out: &mut W, tokens: &[Token]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, tokens)?;
    writeln!(out)?;
    Ok(())
}

/// Escapes the characters XML reserves in text content.
pub fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            c => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use jackc_lex::{Keyword, LexicalErrorKind, Symbol};
    use std::io::Write as _;
    use tempfile::NamedTempFile;

    fn sample() -> Vec<Token> {
        vec![
            Token::Keyword(Keyword::Let),
            Token::Identifier("s".into()),
            Token::Symbol(Symbol::Equal),
            Token::StringConstant("a<b".into()),
            Token::Symbol(Symbol::Amp),
            Token::IntegerConstant(7),
        ]
    }

    fn render(format: OutputFormat) -> String {
        let mut out = Vec::new();
        write_tokens(&mut out, &sample(), format).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn temp_source(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_text_output() {
        assert_eq!(
            render(OutputFormat::Text),
            "keyword\tlet\nidentifier\ts\nsymbol\t=\nstringConstant\ta<b\nsymbol\t&\nintegerConstant\t7\n"
        );
    }

    #[test]
    fn test_xml_output() {
        let expected = concat!(
            "<tokens>\n",
            "<keyword> let </keyword>\n",
            "<identifier> s </identifier>\n",
            "<symbol> = </symbol>\n",
            "<stringConstant> a&lt;b </stringConstant>\n",
            "<symbol> &amp; </symbol>\n",
            "<integerConstant> 7 </integerConstant>\n",
            "</tokens>\n",
        );
        assert_eq!(render(OutputFormat::Xml), expected);
    }

    #[test]
    fn test_json_output() {
        let value: serde_json::Value = serde_json::from_str(&render(OutputFormat::Json)).unwrap();
        assert_eq!(value[0], serde_json::json!({"kind": "keyword", "value": "let"}));
        assert_eq!(value[2], serde_json::json!({"kind": "symbol", "value": "="}));
        assert_eq!(value[3], serde_json::json!({"kind": "stringConstant", "value": "a<b"}));
        assert_eq!(value[5], serde_json::json!({"kind": "integerConstant", "value": 7}));
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("<>&\"x'"), "&lt;&gt;&amp;&quot;x'");
    }

    #[test]
    fn test_tokenize_file() {
        let file = temp_source("do Main.run();");
        let tokens = tokenize_file(file.path(), TokenizerConfig::default()).unwrap();
        assert_eq!(tokens.len(), 7);
    }

    #[test]
    fn test_tokenize_missing_file() {
        let result = tokenize_file(Path::new("/nonexistent/Main.jack"), TokenizerConfig::default());
        assert!(matches!(result, Err(JacktError::Read { .. })));
    }

    #[test]
    fn test_tokenize_file_lex_error() {
        let file = temp_source("let x = 1;\nlet y = #;");
        match tokenize_file(file.path(), TokenizerConfig::default()) {
            Err(JacktError::Lex { source, .. }) => {
                assert_eq!(source.reason(), Some(&LexicalErrorKind::UnrecognizedCharacter('#')));
            },
            other => panic!("expected lex error, got {:?}", other),
        }
    }

    #[test]
    fn test_render_lex_error_has_snippet() {
        let file = temp_source("let x = 1;\nlet y = #;");
        let err = match tokenize_file(file.path(), TokenizerConfig::default()) {
            Err(JacktError::Lex { source, .. }) => source,
            other => panic!("expected lex error, got {:?}", other),
        };
        let rendered = render_lex_error(file.path(), &err);
        assert!(rendered.starts_with("error: unrecognized character '#'"));
        assert!(rendered.contains(":2:9"));
        assert!(rendered.contains("2 | let y = #;"));
        assert!(rendered.ends_with("|         ^"));
    }
}
