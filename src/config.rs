//! Runtime configuration.
//! - RunConfig holds the immutable per-run parameters.
//! - LogLevel represents verbosity with simple parsing helpers.

use anyhow::{Context, Result, bail};
use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::{debug, error, warn};

use crate::errors::RandcpError;

/// Program-defined verbosity levels exposed to users.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Only errors
    Quiet,
    /// Informational output (default)
    #[default]
    Normal,
    /// More info (like verbose)
    Info,
    /// Debug/trace
    Debug,
}

impl LogLevel {
    /// Parse common string names into our LogLevel (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "quiet" | "error" | "none" => Some(LogLevel::Quiet),
            "normal" => Some(LogLevel::Normal),
            "info" | "verbose" | "detailed" => Some(LogLevel::Info),
            "debug" | "trace" => Some(LogLevel::Debug),
            _ => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Quiet => "quiet",
            LogLevel::Normal => "normal",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        };
        f.write_str(s)
    }
}

impl FromStr for LogLevel {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid log level: '{s}'"))
    }
}

/// Immutable parameters for one sampling run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Directory to sample files from
    pub source: PathBuf,
    /// Directory the selected files are copied into (flat, one level)
    pub dest: PathBuf,
    /// Maximum number of files to copy
    pub limit: usize,
    /// Optional filter applied to candidate base names
    pub pattern: Option<String>,
    /// Case-insensitive pattern matching
    pub insensitive: bool,
    /// Descend into subdirectories
    pub recursive: bool,
    /// Traversal depth bound; 0 = unlimited. Only meaningful with `recursive`.
    pub max_depth: usize,
    /// Select and report, but do not copy
    pub dry_run: bool,
    /// Print each selected path instead of a percentage
    pub echo: bool,
    /// Console verbosity
    pub log_level: LogLevel,
}

impl RunConfig {
    /// Validate source and destination before any traversal begins.
    ///
    /// - source must exist, be a directory and be readable.
    /// - dest must exist and be a directory.
    /// - source and dest must not resolve to the same path.
    pub fn validate(&self) -> Result<()> {
        for dir in [&self.source, &self.dest] {
            if !dir.is_dir() {
                error!("Not a directory: {}", dir.display());
                bail!(RandcpError::NotADirectory(dir.clone()));
            }
        }

        // readability probe; an unreadable source root is fatal up front
        fs::read_dir(&self.source).with_context(|| {
            format!(
                "Cannot read source directory '{}'; check permissions",
                self.source.display()
            )
        })?;
        debug!("Source readable: {}", self.source.display());

        // account for symlinks when comparing the two
        let src_real = fs::canonicalize(&self.source).unwrap_or_else(|_| self.source.clone());
        let dst_real = fs::canonicalize(&self.dest).unwrap_or_else(|_| self.dest.clone());
        if src_real == dst_real {
            error!("Source and destination resolve to same path: {}", src_real.display());
            bail!(
                "Source and destination must be different directories; both resolve to '{}'",
                src_real.display()
            );
        }

        if self.max_depth > 0 && !self.recursive {
            warn!("--depth has no effect without --recursive");
        }

        Ok(())
    }
}
