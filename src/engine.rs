//! The copy engine.
//!
//! Walks the shuffled leaf list front to back and copies candidates until
//! the configured limit is reached or the list runs out. Copies are issued
//! sequentially; only progress reporting happens on another thread. Pattern
//! mismatches and already-present destinations are skipped without counting
//! against the limit; a failed copy is logged, still counts as an attempt
//! for progress, and the run moves on.

use tracing::{debug, info, warn};

use crate::config::RunConfig;
use crate::fs_ops;
use crate::output;
use crate::pattern::PatternMatcher;
use crate::progress::ProgressState;
use crate::shutdown;
use crate::tree::{LeafSet, Tree};

#[derive(Debug, Clone, Copy, Default)]
pub struct CopyOutcome {
    /// Candidates actually tried (bounds the loop, drives the percentage).
    pub attempted: usize,
    /// Successful copies, or would-be copies under --dry-run.
    pub copied: usize,
}

pub fn run(
    tree: &Tree,
    leaves: &LeafSet,
    cfg: &RunConfig,
    matcher: &PatternMatcher,
    progress: &ProgressState,
) -> CopyOutcome {
    let mut outcome = CopyOutcome::default();

    for &leaf in leaves {
        if outcome.attempted >= cfg.limit {
            break;
        }
        if shutdown::is_requested() {
            info!("Shutdown requested; stopping after {} copies", outcome.copied);
            break;
        }

        let node = tree.node(leaf);
        let name = node.name.to_string_lossy();
        if !matcher.matches(&name) {
            continue;
        }

        // destination layout is flat regardless of source nesting
        let dest = cfg.dest.join(&node.name);
        if dest.exists() {
            debug!(dest = %dest.display(), "Destination exists; skipping candidate");
            continue;
        }

        let rel = tree.path_of(leaf);
        if cfg.echo {
            output::print_user(&rel.display().to_string());
        }

        if cfg.dry_run {
            outcome.copied += 1;
        } else {
            let src = cfg.source.join(&rel);
            match fs_ops::copy_file(&src, &dest) {
                Ok(bytes) => {
                    debug!(src = %src.display(), dest = %dest.display(), bytes, "Copied");
                    outcome.copied += 1;
                }
                Err(e) => {
                    warn!(src = %src.display(), error = %e, "Copy failed; skipping");
                }
            }
        }

        outcome.attempted += 1;
        progress.record_attempt();
    }

    outcome
}
