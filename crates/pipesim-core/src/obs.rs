//! Structured observability hooks for the simulated pipeline lifecycle.
//!
//! Emission functions for lifecycle events: start, stage change, simulated
//! test, aggregation, finish. The run-scoped `pipesim.run` span is opened by
//! the pipeline orchestrator, so these events carry its `run_id`.
//!
//! Events are emitted at `info!`/`debug!` level; filter with `RUST_LOG`.

use tracing::{debug, info};

use crate::domain::{AggregateReport, TestOutcome};

/// Emit event: pipeline started.
pub fn emit_pipeline_started(run_id: &str, groups: usize, seed: Option<u64>) {
    info!(event = "pipeline.started", run_id = %run_id, groups = groups, seed = ?seed);
}

/// Emit event: a stage changed status.
pub fn emit_stage_changed(stage: &str, status: &str) {
    debug!(event = "stage.changed", stage = %stage, status = %status);
}

/// Emit event: one test identifier was simulated.
pub fn emit_test_simulated(group: &str, outcome: &TestOutcome) {
    debug!(
        event = "test.simulated",
        group = %group,
        test_id = %outcome.test_id,
        status = %outcome.status,
        duration_secs = outcome.duration_secs,
    );
}

/// Emit event: outcomes were reduced into a report.
pub fn emit_report_aggregated(report: &AggregateReport) {
    info!(
        event = "report.aggregated",
        total = report.total,
        passed = report.passed,
        failed = report.failed,
        pass_rate = report.pass_rate,
        risk_level = %report.risk_level,
    );
}

/// Emit event: pipeline finished.
pub fn emit_pipeline_finished(run_id: &str, elapsed_ms: u64, overall: &str) {
    info!(
        event = "pipeline.finished",
        run_id = %run_id,
        elapsed_ms = elapsed_ms,
        overall = %overall,
    );
}
