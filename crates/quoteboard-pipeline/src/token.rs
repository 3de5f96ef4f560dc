//! Latest-run-wins coordination.
//!
//! When the user changes the baseline date while a run is still in flight,
//! the stale run's result must be discarded rather than applied. Each run
//! takes a token minted from a shared generation counter; starting a new run
//! invalidates every earlier token, and a finished run checks its token
//! before its result is allowed to land.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Mints run tokens. Clone freely; clones share the generation counter.
#[derive(Debug, Clone, Default)]
pub struct RunCoordinator {
    latest: Arc<AtomicU64>,
}

impl RunCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new run, invalidating all tokens minted before this call.
    pub fn begin_run(&self) -> RunToken {
        let id = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        RunToken {
            latest: self.latest.clone(),
            id,
        }
    }
}

/// Token identifying one run against the coordinator that minted it.
#[derive(Debug, Clone)]
pub struct RunToken {
    latest: Arc<AtomicU64>,
    id: u64,
}

impl RunToken {
    /// True while no newer run has been started.
    pub fn is_current(&self) -> bool {
        self.latest.load(Ordering::SeqCst) == self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_token_is_current() {
        let coordinator = RunCoordinator::new();
        let token = coordinator.begin_run();
        assert!(token.is_current());
    }

    #[test]
    fn test_newer_run_invalidates_older_token() {
        let coordinator = RunCoordinator::new();
        let first = coordinator.begin_run();
        let second = coordinator.begin_run();
        assert!(!first.is_current());
        assert!(second.is_current());
    }

    #[test]
    fn test_clone_shares_generation() {
        let coordinator = RunCoordinator::new();
        let token = coordinator.begin_run();
        let elsewhere = coordinator.clone();
        elsewhere.begin_run();
        assert!(!token.is_current());
    }
}
