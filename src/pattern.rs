//! Candidate name filtering.
//!
//! The pattern is compiled exactly once, before traversal, so an invalid
//! expression aborts the run before any filesystem work happens. Matching is
//! applied to a file's base name, never its full path.

use regex::{Regex, RegexBuilder};

use crate::errors::RandcpError;

/// Compiled name filter. With no pattern configured, everything matches.
#[derive(Debug, Clone)]
pub struct PatternMatcher {
    regex: Option<Regex>,
}

impl PatternMatcher {
    /// Compile the optional pattern. Invalid syntax is a fatal configuration
    /// error; the caller must not start traversal on `Err`.
    pub fn compile(pattern: Option<&str>, insensitive: bool) -> Result<Self, RandcpError> {
        let regex = match pattern {
            Some(p) => Some(
                RegexBuilder::new(p)
                    .case_insensitive(insensitive)
                    .build()
                    .map_err(|source| RandcpError::InvalidPattern {
                        pattern: p.to_string(),
                        source,
                    })?,
            ),
            None => None,
        };
        Ok(Self { regex })
    }

    pub fn matches(&self, name: &str) -> bool {
        match &self.regex {
            Some(re) => re.is_match(name),
            None => true,
        }
    }
}
