//! Global atomic counters for pipesim observability.
//!
//! Counters are incremented silently at the call site. Call
//! [`Metrics::flush`] to emit current values as a single
//! `tracing::info!` event (e.g. at the end of a run).

use std::sync::atomic::{AtomicU64, Ordering};

/// Global metrics singleton.
pub static METRICS: Metrics = Metrics::new();

/// Lightweight atomic counters.
pub struct Metrics {
    tests_simulated: AtomicU64,
    forced_outcomes: AtomicU64,
    pipelines_run: AtomicU64,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    pub const fn new() -> Self {
        Self {
            tests_simulated: AtomicU64::new(0),
            forced_outcomes: AtomicU64::new(0),
            pipelines_run: AtomicU64::new(0),
        }
    }

    /// Increment the tests-simulated counter by one.
    pub fn inc_tests_simulated(&self) {
        self.tests_simulated.fetch_add(1, Ordering::Relaxed);
        tracing::trace!(metric = "tests_simulated", "counter incremented");
    }

    /// Increment the forced-outcomes counter by one.
    pub fn inc_forced_outcomes(&self) {
        self.forced_outcomes.fetch_add(1, Ordering::Relaxed);
        tracing::trace!(metric = "forced_outcomes", "counter incremented");
    }

    /// Increment the pipelines-run counter by one.
    pub fn inc_pipelines_run(&self) {
        self.pipelines_run.fetch_add(1, Ordering::Relaxed);
        tracing::trace!(metric = "pipelines_run", "counter incremented");
    }

    /// Emit all current counter values as a single `info!` event.
    pub fn flush(&self) {
        tracing::info!(
            metric = "flush",
            tests_simulated = self.tests_simulated(),
            forced_outcomes = self.forced_outcomes(),
            pipelines_run = self.pipelines_run(),
        );
    }

    pub fn tests_simulated(&self) -> u64 {
        self.tests_simulated.load(Ordering::Relaxed)
    }

    pub fn forced_outcomes(&self) -> u64 {
        self.forced_outcomes.load(Ordering::Relaxed)
    }

    pub fn pipelines_run(&self) -> u64 {
        self.pipelines_run.load(Ordering::Relaxed)
    }
}
