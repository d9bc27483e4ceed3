//! Jackt CLI - A command-line driver for the Jack tokenizer.
//!
//! This is the main entry point for the jackt CLI application.
//! It uses clap for argument parsing and dispatches to the command
//! handlers based on user input.

mod commands;
mod config;
mod error;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{common::OutputFormat, run_check, run_tokens, CheckArgs, TokensArgs};
use config::Config;
use error::{JacktError, Result};

/// Jackt - Tokenize Jack source files
///
/// Jackt lists the tokens of Jack source files in several formats, or
/// checks that they tokenize cleanly.
#[derive(Parser, Debug)]
#[command(name = "jackt")]
#[command(author = "Jack Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Tokenize Jack source files", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "JACKT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "JACKT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "JACKT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the jackt CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the tokens of each file
    ///
    /// Files are tokenized in order and their listings written to stdout.
    /// Files that fail are reported on stderr.
    Tokens(TokensCommand),

    /// Check that each file tokenizes
    ///
    /// Prints a token count per clean file and a diagnostic per failing
    /// one. Exits with status 1 if any file fails.
    Check(CheckCommand),
}

/// Arguments for the tokens subcommand.
#[derive(Parser, Debug)]
struct TokensCommand {
    /// Jack source files
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short = 'F', long, value_enum)]
    format: Option<OutputFormat>,

    /// Read buffer size in bytes (minimum 4)
    #[arg(short, long)]
    buffer_size: Option<usize>,
}

/// Arguments for the check subcommand.
#[derive(Parser, Debug)]
struct CheckCommand {
    /// Jack source files
    #[arg(required = true)]
    files: Vec<PathBuf>,
}

/// Main entry point for the jackt CLI.
///
/// Parses command-line arguments, initializes logging, loads configuration,
/// and dispatches to the appropriate command handler. Any failure gives
/// exit status 1.
fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        },
    }
}

fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose, cli.no_color)?;

    let config = load_config(cli.config.as_deref())?;

    execute_command(cli.command, config)
}

/// Initialize the logging system.
///
/// Logs go to stderr so that token listings on stdout stay clean. The
/// default level is `warn`, `debug` with `--verbose`; `RUST_LOG` is not
/// consulted.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| JacktError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Tokens(args) => run_tokens(
            TokensArgs {
                files: args.files,
                format: args.format,
                buffer_size: args.buffer_size,
            },
            config,
        ),
        Commands::Check(args) => run_check(CheckArgs { files: args.files }, config),
    }
}
