//! Application orchestrator.
//! Initializes logging, installs the signal handler, validates the run
//! configuration, compiles the pattern, builds and shuffles the source tree,
//! then runs the copy engine alongside the progress reporter thread.

use anyhow::Result;
use std::sync::Arc;
use std::thread;
use tracing::{debug, error};

use randcp::progress::{self, ProgressState};
use randcp::{PatternMatcher, RandcpError, engine, output, shuffle, shutdown, tree};

use crate::cli::Args;
use crate::logging::init_tracing;

/// Run the CLI application.
pub fn run(args: Args) -> Result<()> {
    let cfg = args.to_config();
    init_tracing(&cfg.log_level, args.json)?;

    ctrlc::set_handler(|| {
        shutdown::request();
        output::print_warn("Received interrupt; stopping after the current copy...");
    })
    .expect("failed to install signal handler");

    debug!("Starting randcp: {:?}", cfg);

    // Configuration errors are fatal before any traversal begins.
    cfg.validate().inspect_err(|e| {
        output::print_error(&format!("{e:#}"));
    })?;
    let matcher =
        PatternMatcher::compile(cfg.pattern.as_deref(), cfg.insensitive).inspect_err(|e| {
            output::print_error(&e.to_string());
        })?;

    let (file_tree, mut leaves) = tree::build(&cfg.source, cfg.recursive, cfg.max_depth)
        .inspect_err(|e| match e {
            RandcpError::SourceUnreadable { path, source } => {
                error!(path = %path.display(), error = %source, "Source traversal failed");
                output::print_error(&e.to_string());
            }
            _ => output::print_error(&e.to_string()),
        })?;
    debug!(candidates = leaves.len(), "Traversal complete");

    shuffle::shuffle(&mut leaves);

    // The reporter owns rendering unless --echo prints names from the engine.
    let state = Arc::new(ProgressState::new(cfg.limit));
    let reporter = {
        let state = Arc::clone(&state);
        let render = !cfg.echo;
        thread::spawn(move || progress::run_reporter(&state, render))
    };

    let outcome = engine::run(&file_tree, &leaves, &cfg, &matcher, &state);

    // Short runs would leave the reporter waiting on a count that will never
    // arrive; wake it with the cancel flag. Either way it is joined, so the
    // final percentage is on screen before the summary prints.
    if outcome.attempted < cfg.limit {
        state.cancel();
    }
    if reporter.join().is_err() {
        output::print_warn("progress reporter thread panicked");
    }

    output::print_summary(outcome.copied);
    Ok(())
}
