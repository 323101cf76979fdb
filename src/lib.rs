//! Core library for `randcp`.
//!
//! Pipeline: build an in-memory tree of the source directory, shuffle the
//! regular-file leaves, then copy up to a configured number of them to the
//! destination while a reporter thread renders progress. The library keeps
//! each stage small and separately testable; the binary wires them together.

pub mod config;
pub mod engine;
pub mod errors;
pub mod fs_ops;
pub mod output;
pub mod pattern;
pub mod progress;
pub mod shuffle;
pub mod shutdown;
pub mod tree;

pub use config::{LogLevel, RunConfig};
pub use errors::RandcpError;
pub use pattern::PatternMatcher;
pub use progress::ProgressState;
pub use tree::{LeafSet, NodeId, NodeKind, Tree};
