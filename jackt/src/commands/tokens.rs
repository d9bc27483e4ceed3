//! Tokens command implementation.
//!
//! Tokenizes each input file and writes its tokens to stdout.

use std::io::{self, Write};
use std::path::PathBuf;

use tracing::info;

use crate::commands::common::{report_error, tokenize_file, write_tokens, OutputFormat};
use crate::config::Config;
use crate::error::{JacktError, Result};

/// Arguments for the tokens command.
#[derive(Debug, Clone)]
pub struct TokensArgs {
    /// Source files, tokenized in order.
    pub files: Vec<PathBuf>,
    /// Output format; falls back to the configured one.
    pub format: Option<OutputFormat>,
    /// Read buffer size; falls back to the configured one.
    pub buffer_size: Option<usize>,
}

/// Tokens command handler.
pub struct TokensCommand {
    args: TokensArgs,
    config: Config,
}

impl TokensCommand {
    /// Create a new TokensCommand.
    pub fn new(args: TokensArgs, config: Config) -> Self {
        Self { args, config }
    }

    /// Effective output format.
    pub fn format(&self) -> OutputFormat {
        self.args.format.unwrap_or(self.config.format)
    }

    /// Run against stdout.
    pub fn run(&self) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.run_to(&mut out)
    }

    /// Tokenize every file, writing listings to `out` and errors to stderr.
    ///
    /// A file that fails produces no listing; the remaining files are still
    /// processed.
    pub fn run_to<W: Write>(&self, out: &mut W) -> Result<()> {
        let mut tokenizer_config = self.config.tokenizer;
        if let Some(size) = self.args.buffer_size {
            tokenizer_config = tokenizer_config.buffer_capacity(size);
        }
        let format = self.format();

        let mut failed = 0;
        for path in &self.args.files {
            info!(path = %path.display(), ?format, "tokenizing");
            match tokenize_file(path, tokenizer_config) {
                Ok(tokens) => write_tokens(out, &tokens, format)?,
                Err(err) => {
                    report_error(&err);
                    failed += 1;
                },
            }
        }
        out.flush()?;

        if failed > 0 {
            return Err(JacktError::Failed(failed));
        }
        Ok(())
    }
}

/// Run the tokens command.
pub fn run_tokens(args: TokensArgs, config: Config) -> Result<()> {
    TokensCommand::new(args, config).run()
}
