//! pipesim Core Library
//!
//! Domain model, synthetic result aggregation and shared plumbing for the
//! pipesim CI pipeline simulator.

pub mod aggregator;
pub mod config;
pub mod domain;
pub mod metrics;
pub mod narrative;
pub mod obs;
pub mod overrides;
pub mod reporting;
pub mod telemetry;

pub use aggregator::{
    aggregate, run_aggregation, seeded_rng, simulate, simulate_group, simulate_test,
};
pub use config::{ConfigError, ConfigResult, OutcomePolicy, PacingConfig, SimulatorConfig};
pub use domain::{
    default_groups, AggregateReport, RiskLevel, TestGroup, TestOutcome, TestStatus,
    RISK_THRESHOLD_PERCENT,
};
pub use narrative::{Insights, StrategyBrief, CONFIDENCE_SCORE};
pub use overrides::OverrideTable;
pub use reporting::{
    write_run_report_json, GroupOutcomes, ReportError, RiskAssessment, RunReportArtifact,
};

pub use metrics::METRICS;
pub use obs::{
    emit_pipeline_finished, emit_pipeline_started, emit_report_aggregated, emit_stage_changed,
    emit_test_simulated,
};
pub use telemetry::init_tracing;

/// pipesim version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
