//! strsafe command-line front end
//!
//! Applies one string operation to a TEXT argument, or to each line of stdin
//! when TEXT is omitted.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::borrow::Cow;
use std::io::{BufRead, Write};
use tracing::{debug, warn};

use crate::charset::{removing_characters, CharSet};
use crate::config::Config;
use crate::errors::StrsafeError;
use crate::reverse::{reversed_string_with, ReverseMode};
use crate::substring::{
    length_in, safe_substring_from_index_in, safe_substring_to_index_in, IndexUnit,
};
use crate::suffix::{removing_prefix, removing_suffix};
use crate::telemetry::{init_tracing, init_tracing_with_filter, log_preview};

#[derive(Parser, Debug)]
#[command(name = "strsafe")]
#[command(about = "Bounds-safe string operations: substrings, reversal, affix and character stripping")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value = "text", global = true)]
    output_format: OutputFormat,

    /// Verbose mode (debug logging on stderr)
    #[arg(short = 'v', long, global = true)]
    verbose: bool,
}

/// Output format for results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One result per line (default)
    #[default]
    Text,
    /// One JSON object per line: {"input": .., "output": ..}
    Json,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Keep the first INDEX units of the text
    #[command(alias = "to")]
    Prefix {
        index: usize,
        #[arg(allow_hyphen_values = true)]
        text: Option<String>,
        /// What INDEX counts (default from config, else chars)
        #[arg(short, long, value_enum)]
        unit: Option<IndexUnit>,
    },

    /// Drop the first INDEX units of the text
    #[command(alias = "from")]
    Suffix {
        index: usize,
        #[arg(allow_hyphen_values = true)]
        text: Option<String>,
        #[arg(short, long, value_enum)]
        unit: Option<IndexUnit>,
    },

    /// Reverse the text
    #[command(alias = "rev")]
    Reverse {
        #[arg(allow_hyphen_values = true)]
        text: Option<String>,
        /// Keep chars or grapheme clusters intact (default from config, else chars)
        #[arg(short, long, value_enum)]
        mode: Option<ReverseMode>,
    },

    /// Remove SUFFIX from the end of the text if present
    StripSuffix {
        #[arg(allow_hyphen_values = true)]
        suffix: String,
        #[arg(allow_hyphen_values = true)]
        text: Option<String>,
    },

    /// Remove PREFIX from the start of the text if present
    StripPrefix {
        #[arg(allow_hyphen_values = true)]
        prefix: String,
        #[arg(allow_hyphen_values = true)]
        text: Option<String>,
    },

    /// Delete every character matching SET, e.g. 'a-z', '[:digit:]', '^[:alnum:]'
    StripChars {
        #[arg(allow_hyphen_values = true)]
        set: String,
        #[arg(allow_hyphen_values = true)]
        text: Option<String>,
    },

    /// Print the length of the text
    #[command(alias = "len")]
    Length {
        #[arg(allow_hyphen_values = true)]
        text: Option<String>,
        #[arg(short, long, value_enum)]
        unit: Option<IndexUnit>,
    },
}

impl Commands {
    fn resolve(self, config: &Config) -> Result<(Operation, Option<String>)> {
        let defaults = &config.defaults;
        let resolved = match self {
            Commands::Prefix { index, text, unit } => (
                Operation::Prefix {
                    index,
                    unit: unit.unwrap_or(defaults.index_unit),
                },
                text,
            ),
            Commands::Suffix { index, text, unit } => (
                Operation::Suffix {
                    index,
                    unit: unit.unwrap_or(defaults.index_unit),
                },
                text,
            ),
            Commands::Reverse { text, mode } => (
                Operation::Reverse(mode.unwrap_or(defaults.reverse_mode)),
                text,
            ),
            Commands::StripSuffix { suffix, text } => (Operation::StripSuffix(suffix), text),
            Commands::StripPrefix { prefix, text } => (Operation::StripPrefix(prefix), text),
            Commands::StripChars { set, text } => {
                let parsed = CharSet::parse(&set)
                    .map_err(StrsafeError::from)
                    .with_context(|| format!("Failed to parse character set '{}'", set))?;
                (Operation::StripChars(parsed), text)
            }
            Commands::Length { text, unit } => {
                (Operation::Length(unit.unwrap_or(defaults.index_unit)), text)
            }
        };
        Ok(resolved)
    }
}

/// A fully resolved string operation.
#[derive(Debug, Clone)]
pub enum Operation {
    Prefix { index: usize, unit: IndexUnit },
    Suffix { index: usize, unit: IndexUnit },
    Reverse(ReverseMode),
    StripSuffix(String),
    StripPrefix(String),
    StripChars(CharSet),
    Length(IndexUnit),
}

impl Operation {
    pub fn apply(&self, text: &str) -> Outcome {
        match self {
            Operation::Prefix { index, unit } => {
                Outcome::Text(safe_substring_to_index_in(text, *index, *unit).to_string())
            }
            Operation::Suffix { index, unit } => {
                Outcome::Text(safe_substring_from_index_in(text, *index, *unit).to_string())
            }
            Operation::Reverse(mode) => Outcome::Text(reversed_string_with(text, *mode)),
            Operation::StripSuffix(suffix) => {
                Outcome::Text(removing_suffix(text, suffix).to_string())
            }
            Operation::StripPrefix(prefix) => {
                Outcome::Text(removing_prefix(text, prefix).to_string())
            }
            Operation::StripChars(set) => {
                Outcome::Text(removing_characters(text, set).into_owned())
            }
            Operation::Length(unit) => Outcome::Count(length_in(text, *unit)),
        }
    }
}

/// Result of applying an [`Operation`] to one input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Outcome {
    Text(String),
    Count(usize),
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Text(text) => f.write_str(text),
            Outcome::Count(n) => write!(f, "{}", n),
        }
    }
}

#[derive(Serialize)]
struct Record<'a> {
    input: &'a str,
    output: &'a Outcome,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    if cli.verbose {
        init_tracing_with_filter("debug", config.logging.json);
    } else {
        init_tracing(&config.logging.level, config.logging.json);
    }

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    execute(cli, &config, stdin.lock(), &mut stdout.lock())
}

/// Run a parsed command against `input` (used when TEXT is omitted), writing
/// results to `out`.
pub fn execute<R: BufRead, W: Write>(
    cli: Cli,
    config: &Config,
    input: R,
    out: &mut W,
) -> Result<()> {
    let format = cli.output_format;
    let (operation, text) = cli.command.resolve(config)?;
    debug!(?operation, ?format, "Resolved operation");

    match text {
        Some(text) => emit(out, format, &text, &operation.apply(&text))?,
        None => {
            let mut count = 0usize;
            for chunk in input.split(b'\n') {
                let mut bytes = chunk
                    .map_err(StrsafeError::from)
                    .context("Failed to read from stdin")?;
                if bytes.last() == Some(&b'\r') {
                    bytes.pop();
                }
                let line = String::from_utf8_lossy(&bytes);
                if let Cow::Owned(_) = line {
                    warn!(line = count + 1, "Invalid UTF-8 on stdin, replaced with U+FFFD");
                }
                debug!(input = %log_preview(&line), "Processing line");
                emit(out, format, &line, &operation.apply(&line))?;
                count += 1;
            }
            debug!(lines = count, "Finished reading stdin");
        }
    }

    out.flush()
        .map_err(StrsafeError::from)
        .context("Failed to flush output")?;
    Ok(())
}

fn emit<W: Write>(out: &mut W, format: OutputFormat, input: &str, outcome: &Outcome) -> Result<()> {
    let line = match format {
        OutputFormat::Text => outcome.to_string(),
        OutputFormat::Json => serde_json::to_string(&Record {
            input,
            output: outcome,
        })
        .context("Failed to serialize result")?,
    };
    writeln!(out, "{}", line)
        .map_err(StrsafeError::from)
        .context("Failed to write output")?;
    Ok(())
}
