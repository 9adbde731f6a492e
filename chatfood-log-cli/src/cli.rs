//! CLI argument parsing using clap derive API
//!
//! This module defines the command-line interface structure using clap's derive macros.
//! It is purely declarative with no side effects or I/O.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// ChatFood log analyzer -- classify, aggregate and report on a structured log file.
#[derive(Parser, Debug)]
#[command(name = "chatfood-log", version, about, long_about = None)]
pub struct Cli {
    /// Log file to analyze (`-` reads standard input).
    pub log_file: PathBuf,

    /// Emit the structured JSON snapshot instead of the text report.
    #[arg(long, conflicts_with = "output")]
    pub json: bool,

    /// Output format.
    #[arg(long, default_value = "text")]
    pub output: OutputFormat,

    /// Path to a chatfood-log.toml configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override log level (trace, debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,
}

impl Cli {
    /// Effective output format (`--json` wins over `--output`).
    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            self.output
        }
    }
}

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable sectioned report.
    Text,
    /// Machine-readable JSON.
    Json,
}
