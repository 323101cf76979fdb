//! Shared progress state and the reporter loop.
//!
//! The copy engine and the reporter thread share one `ProgressState` behind
//! an `Arc`: a mutex-guarded attempt counter plus a condvar. Every increment
//! notifies while holding the lock, so the reporter never misses an update,
//! though it may coalesce several into one rendered percentage if scheduled
//! late. Rendering is a UI, not a ledger.
//!
//! Cancellation is cooperative: the orchestrator flips the `cancelled` flag
//! and notifies; the reporter observes it at its wait point and exits, so it
//! can always be joined. No thread is ever killed.

use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};

use crate::output;

#[derive(Debug, Default)]
struct Counters {
    attempted: usize,
    cancelled: bool,
}

/// Per-run progress counters shared between the engine and the reporter.
#[derive(Debug)]
pub struct ProgressState {
    counters: Mutex<Counters>,
    cond: Condvar,
    target: usize,
}

impl ProgressState {
    pub fn new(target: usize) -> Self {
        Self {
            counters: Mutex::new(Counters::default()),
            cond: Condvar::new(),
            target,
        }
    }

    pub fn target(&self) -> usize {
        self.target
    }

    fn lock(&self) -> MutexGuard<'_, Counters> {
        self.counters.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Record one copy attempt and wake the reporter.
    pub fn record_attempt(&self) {
        let mut counters = self.lock();
        counters.attempted += 1;
        self.cond.notify_all();
    }

    pub fn attempted(&self) -> usize {
        self.lock().attempted
    }

    /// Ask the reporter to stop; used when the run ends short of the target.
    pub fn cancel(&self) {
        let mut counters = self.lock();
        counters.cancelled = true;
        self.cond.notify_all();
    }

    pub fn is_cancelled(&self) -> bool {
        self.lock().cancelled
    }
}

/// Reporter loop: block on the condvar, render the percentage on each wake,
/// exit once the target is reached or cancellation is requested. With
/// `render` off (echo mode) the loop still consumes updates so the shutdown
/// protocol is identical either way.
pub fn run_reporter(state: &ProgressState, render: bool) {
    let mut counters = state.lock();
    loop {
        if counters.cancelled || counters.attempted >= state.target() {
            return;
        }
        counters = state
            .cond
            .wait(counters)
            .unwrap_or_else(PoisonError::into_inner);
        if render && !counters.cancelled {
            output::print_progress_line(counters.attempted, state.target());
        }
    }
}
