//! CLI definition and parsing.
//! Defines Args and provides parse() for command-line handling.
//!
//! Notes:
//! - SOURCE and DEST are positional and required; both must already exist.
//! - --debug is a shorthand for --log-level debug.
//! - --depth counts directory levels below SOURCE (children are level 1) and
//!   only takes effect together with --recursive.

use clap::{Parser, ValueHint};
use std::path::PathBuf;

use randcp::{LogLevel, RunConfig};

/// Copy a random selection of files from SOURCE into DEST.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Copy random files")]
pub struct Args {
    /// Directory to sample files from.
    #[arg(value_name = "SOURCE", value_hint = ValueHint::DirPath)]
    pub source: PathBuf,

    /// Directory the selected files are copied into (flat, never nested).
    #[arg(value_name = "DEST", value_hint = ValueHint::DirPath)]
    pub dest: PathBuf,

    /// Limit the number of copied files.
    #[arg(short = 'l', long, value_name = "LIMIT", default_value_t = 1)]
    pub limit: usize,

    /// Copy only files whose name matches PATTERN (a regular expression).
    #[arg(short = 'p', long, value_name = "PATTERN")]
    pub pattern: Option<String>,

    /// Case insensitive match.
    #[arg(short = 'i', long)]
    pub insensitive: bool,

    /// Copy files by scanning directories recursively.
    #[arg(short = 'r', long)]
    pub recursive: bool,

    /// Descend at most DEPTH levels below SOURCE (0 = unlimited). Only
    /// effective together with --recursive.
    #[arg(short = 'd', long, value_name = "DEPTH", default_value_t = 0)]
    pub depth: usize,

    /// Do not copy files -- useful to test patterns.
    #[arg(long)]
    pub dry_run: bool,

    /// Echo files being copied instead of rendering a percentage.
    #[arg(short = 'e', long)]
    pub echo: bool,

    /// Enable debug logging (shorthand for --log-level debug).
    #[arg(long)]
    pub debug: bool,

    /// Set log level. One of: quiet, normal, info, debug.
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Emit logs in structured JSON.
    #[arg(long)]
    pub json: bool,
}

impl Args {
    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > Normal.
    pub fn effective_log_level(&self) -> LogLevel {
        if self.debug {
            return LogLevel::Debug;
        }
        self.log_level
            .as_deref()
            .and_then(LogLevel::parse)
            .unwrap_or_default()
    }

    /// Freeze the parsed flags into the immutable per-run configuration.
    pub fn to_config(&self) -> RunConfig {
        RunConfig {
            source: self.source.clone(),
            dest: self.dest.clone(),
            limit: self.limit,
            pattern: self.pattern.clone(),
            insensitive: self.insensitive,
            recursive: self.recursive,
            max_depth: self.depth,
            dry_run: self.dry_run,
            echo: self.echo,
            log_level: self.effective_log_level(),
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}
