//! Parse CLI Example
//!
//! Parses a command line or a JSON-encoded rich message with the Argot lexer
//! and prints the resulting `ParsedCommand` as JSON.
//!
//! # Usage
//!
//! ```bash
//! # Plain text
//! cargo run --package parse-cli -- 'backup "my files" --dest=/backup -xvf'
//!
//! # A rich message, segments encoded as {"type": ..., "data": ...}
//! cargo run --package parse-cli -- --message \
//!   '[{"type":"text","data":"deploy --preview=[]"},{"type":"image","data":"shot.png"}]'
//!
//! # Only the token stream
//! cargo run --package parse-cli -- --tokens 'say "hi there" -v'
//! ```
//!
//! Configuration is read from `argot.toml` and `ARGOT_*` variables, e.g.
//! `ARGOT_LOGGING__LEVEL=trace` shows every tokenized text run.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use argot::prelude::*;
use argot::runtime::config::LogOutput;
use clap::Parser;
use tracing::{debug, error};

#[derive(Debug, Parser)]
#[command(name = "parse-cli", version, about)]
struct Cli {
    /// Command text; multiple arguments are joined with spaces.
    text: Vec<String>,

    /// Parse a JSON array of message segments instead of plain text.
    #[arg(short, long, conflicts_with = "text")]
    message: Option<String>,

    /// Configuration file (defaults to argot.toml in the usual places).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the raw token stream instead of the parsed command.
    #[arg(long)]
    tokens: bool,

    /// Pretty-print the JSON output.
    #[arg(short, long)]
    pretty: bool,
}

fn print_json<T: serde::Serialize>(value: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{json}");
    Ok(())
}

fn run(cli: &Cli, lexer: &CommandLexer) -> Result<()> {
    if let Some(raw) = &cli.message {
        let message: RichText =
            serde_json::from_str(raw).context("--message must be a JSON array of segments")?;
        debug!(segments = message.len(), "parsing rich message");

        if cli.tokens {
            print_json(&lexer.tokenize_message(&message)?, cli.pretty)
        } else {
            print_json(&lexer.parse_message(&message)?, cli.pretty)
        }
    } else {
        if cli.text.is_empty() {
            bail!("nothing to parse: pass command text or --message");
        }
        let text = cli.text.join(" ");

        if cli.tokens {
            print_json(&lexer.tokenize_string(&text)?, cli.pretty)
        } else {
            print_json(&lexer.parse_command(&text)?, cli.pretty)
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.file(path);
    }
    let mut config = loader.load()?;

    // stdout carries the JSON result.
    if config.logging.output == LogOutput::Stdout {
        config.logging.output = LogOutput::Stderr;
    }
    init_from_config(&config.logging);

    let lexer = CommandLexer::new(config.lexer);
    if let Err(e) = run(&cli, &lexer) {
        if let Some(lex) = e.downcast_ref::<LexError>() {
            error!(kind = lex.kind(), position = %lex.position(), "{lex}");
        }
        return Err(e);
    }

    Ok(())
}
