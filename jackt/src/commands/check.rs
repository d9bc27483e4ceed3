//! Check command implementation.
//!
//! Tokenizes each input file without printing tokens, reporting a token
//! count for clean files and a diagnostic for failing ones.

use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;

use tracing::info;

use crate::commands::common::{report_error, tokenize_file};
use crate::config::Config;
use crate::error::{JacktError, Result};

/// Arguments for the check command.
#[derive(Debug, Clone)]
pub struct CheckArgs {
    /// Source files to check.
    pub files: Vec<PathBuf>,
}

/// Check command handler.
pub struct CheckCommand {
    args: CheckArgs,
    config: Config,
}

impl CheckCommand {
    /// Create a new CheckCommand.
    pub fn new(args: CheckArgs, config: Config) -> Self {
        Self { args, config }
    }

    /// Run against stdout.
    pub fn run(&self) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.run_to(&mut out)
    }

    /// Check every file, writing `path: N tokens` lines to `out`.
    pub fn run_to<W: Write>(&self, out: &mut W) -> Result<()> {
        let start_time = Instant::now();
        let mut failed = 0;

        for path in &self.args.files {
            match tokenize_file(path, self.config.tokenizer) {
                Ok(tokens) => writeln!(out, "{}: {} tokens", path.display(), tokens.len())?,
                Err(err) => {
                    report_error(&err);
                    failed += 1;
                },
            }
        }
        out.flush()?;

        info!(
            files = self.args.files.len(),
            failed,
            elapsed_ms = start_time.elapsed().as_millis() as u64,
            "check finished"
        );

        if failed > 0 {
            return Err(JacktError::Failed(failed));
        }
        Ok(())
    }
}

/// Run the check command.
pub fn run_check(args: CheckArgs, config: Config) -> Result<()> {
    CheckCommand::new(args, config).run()
}
