//! Run tracking port
//!
//! Defines the three-operation contract with the external metrics/run sink:
//! start a run, log a named numeric metric, log a named text artifact.
//!
//! Tracking is best-effort by design: the methods are synchronous and
//! non-fallible so a sink failure can never disturb document assembly.
//! Implementations log a warning and carry on.

use openprop_domain::RunId;
use std::sync::atomic::{AtomicU64, Ordering};

/// Port for recording runs, metrics, and artifacts
pub trait RunTracker: Send + Sync {
    /// Open a new tracking run and return its identifier
    fn start_run(&self, template_id: &str) -> RunId;

    /// Record a named numeric metric against a run
    fn log_metric(&self, run: &RunId, name: &str, value: f64);

    /// Record a named text artifact against a run
    fn log_artifact(&self, run: &RunId, name: &str, contents: &str);

    /// Mark a run as finished
    fn finish_run(&self, _run: &RunId) {}
}

/// No-op tracker for tests and when tracking is disabled
///
/// Still hands out unique run ids so callers can display one.
#[derive(Default)]
pub struct NoRunTracker {
    counter: AtomicU64,
}

impl NoRunTracker {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RunTracker for NoRunTracker {
    fn start_run(&self, _template_id: &str) -> RunId {
        let n = self.counter.fetch_add(1, Ordering::Relaxed);
        RunId::new(format!("untracked-{}", n))
    }

    fn log_metric(&self, _run: &RunId, _name: &str, _value: f64) {}

    fn log_artifact(&self, _run: &RunId, _name: &str, _contents: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_tracker_ids_are_unique() {
        let tracker = NoRunTracker::new();
        let a = tracker.start_run("startup_seed");
        let b = tracker.start_run("startup_seed");
        assert_ne!(a, b);
    }

    #[test]
    fn test_no_tracker_logging_is_silent() {
        let tracker = NoRunTracker::new();
        let run = tracker.start_run("t");
        tracker.log_metric(&run, "latency_solution", 1.0);
        tracker.log_artifact(&run, "proposal.md", "# T");
        tracker.finish_run(&run);
    }
}
