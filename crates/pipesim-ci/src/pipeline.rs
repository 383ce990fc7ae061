//! Simulated pipeline orchestration.

use std::time::{Duration, Instant};

use pipesim_core::narrative::{DASHBOARD_FEATURES, DASHBOARD_FILE, ENVIRONMENT_CHECKS};
use pipesim_core::{
    aggregate, emit_pipeline_finished, emit_pipeline_started, emit_report_aggregated,
    emit_stage_changed, AggregateReport, GroupOutcomes, Insights, RunReportArtifact,
    SimulatorConfig, StrategyBrief, TestOutcome, CONFIDENCE_SCORE, METRICS,
};
use rand::Rng;
use tracing::Instrument;

use crate::gate::{GateVerdict, PipelineGate};
use crate::pacing::Pacer;
use crate::runner::GroupRunner;
use crate::sink::{EventSink, PipelineEvent};
use crate::spec::PipelineSpec;
use crate::stage::{PipelineStage, StageStatus};

/// Result of a complete simulated run.
#[derive(Debug, Clone)]
pub struct PipelineResult {
    /// Identity of the run.
    pub spec: PipelineSpec,

    /// Scripted strategy shown by the analysis stage.
    pub strategy: StrategyBrief,

    /// Per-group outcomes, in execution order.
    pub groups: Vec<GroupOutcomes>,

    /// Aggregate over every outcome.
    pub report: AggregateReport,

    /// Final verdict and recommendations.
    pub verdict: GateVerdict,

    /// Wall-clock time of the run, pacing included.
    pub elapsed: Duration,
}

impl PipelineResult {
    /// All outcomes, flattened in execution order.
    pub fn outcomes(&self) -> impl Iterator<Item = &TestOutcome> {
        self.groups.iter().flat_map(|g| g.outcomes.iter())
    }

    /// Build the JSON artifact for this run.
    pub fn to_artifact(&self) -> RunReportArtifact {
        RunReportArtifact::new(
            self.spec.run_id,
            self.spec.seed,
            self.spec.groups_digest.clone(),
            self.groups.clone(),
            self.report.clone(),
        )
    }
}

/// Simulated pipeline orchestrator.
pub struct SimulatedPipeline;

impl SimulatedPipeline {
    /// Run every stage once and return the result.
    ///
    /// Stages run in a fixed order: analysis, environment setup, one
    /// execution stage per group, aggregation. Recommendations and the
    /// dashboard notice follow. Each status-bearing stage emits `Running`
    /// then `Success`.
    ///
    /// `rng` drives outcome draws only; `pacer` has its own jitter source.
    pub async fn run<R, S>(
        config: &SimulatorConfig,
        spec: &PipelineSpec,
        rng: &mut R,
        pacer: &mut Pacer,
        sink: &mut S,
    ) -> PipelineResult
    where
        R: Rng + ?Sized,
        S: EventSink + ?Sized,
    {
        let span = tracing::info_span!("pipesim.run", run_id = %spec.run_id);
        Self::run_stages(config, spec, rng, pacer, sink)
            .instrument(span)
            .await
    }

    async fn run_stages<R, S>(
        config: &SimulatorConfig,
        spec: &PipelineSpec,
        rng: &mut R,
        pacer: &mut Pacer,
        sink: &mut S,
    ) -> PipelineResult
    where
        R: Rng + ?Sized,
        S: EventSink + ?Sized,
    {
        let start = Instant::now();
        let run_id = spec.run_id.to_string();
        METRICS.inc_pipelines_run();
        emit_pipeline_started(&run_id, config.groups.len(), spec.seed);

        sink.emit(&PipelineEvent::RunStarted {
            run_id: spec.run_id,
            started_at: spec.started_at,
            target_application: config.target_application.clone(),
            framework: config.framework.clone(),
        });

        // Stage 1: scripted analysis
        let stage = PipelineStage::AiAnalysis;
        stage_changed(sink, &stage, StageStatus::Running);
        progress(sink, "🤖 Analyzing test requirements with AI...");
        if stage.has_stage_delay() {
            pacer.stage_pause().await;
        }
        let strategy = StrategyBrief::scripted();
        sink.emit(&PipelineEvent::StrategyReady {
            strategy: strategy.clone(),
        });
        stage_changed(sink, &stage, StageStatus::Success);

        // Stage 2: scripted environment checks
        let stage = PipelineStage::EnvironmentSetup;
        stage_changed(sink, &stage, StageStatus::Running);
        progress(sink, "🔧 Setting up intelligent test environment...");
        if stage.has_stage_delay() {
            pacer.stage_pause().await;
        }
        for check in ENVIRONMENT_CHECKS {
            sink.emit(&PipelineEvent::EnvironmentChecked {
                check: (*check).to_string(),
            });
        }
        stage_changed(sink, &stage, StageStatus::Success);

        // Stage 3: one execution stage per group
        let mut per_group: Vec<Vec<TestOutcome>> = Vec::with_capacity(config.groups.len());
        for group in &config.groups {
            let stage = PipelineStage::ExecuteGroup(group.name.clone());
            stage_changed(sink, &stage, StageStatus::Running);
            let outcomes = GroupRunner::execute(
                group,
                &config.overrides,
                &config.outcome,
                rng,
                pacer,
                sink,
            )
            .await;
            stage_changed(sink, &stage, StageStatus::Success);
            per_group.push(outcomes);
        }

        // Stage 4: aggregation
        let stage = PipelineStage::Aggregation;
        stage_changed(sink, &stage, StageStatus::Running);
        progress(sink, "🤖 Starting AI-powered test results aggregation...");
        if stage.has_stage_delay() {
            pacer.stage_pause().await;
        }
        let report = aggregate(&per_group);
        emit_report_aggregated(&report);
        sink.emit(&PipelineEvent::ReportAggregated {
            report: report.clone(),
            insights: Insights::scripted(),
            confidence_score: CONFIDENCE_SCORE,
        });
        stage_changed(sink, &stage, StageStatus::Success);

        let verdict = PipelineGate::evaluate(&report);
        sink.emit(&PipelineEvent::RecommendationsReady {
            verdict: verdict.clone(),
        });

        sink.emit(&PipelineEvent::DashboardReady {
            features: DASHBOARD_FEATURES.iter().map(|f| (*f).to_string()).collect(),
            file: DASHBOARD_FILE.to_string(),
        });

        let groups = config
            .groups
            .iter()
            .zip(per_group)
            .map(|(group, outcomes)| GroupOutcomes {
                group: group.name.clone(),
                outcomes,
            })
            .collect();

        let elapsed = start.elapsed();
        emit_pipeline_finished(
            &run_id,
            elapsed.as_millis() as u64,
            &verdict.overall.to_string(),
        );
        METRICS.flush();

        PipelineResult {
            spec: spec.clone(),
            strategy,
            groups,
            report,
            verdict,
            elapsed,
        }
    }
}

fn stage_changed<S: EventSink + ?Sized>(sink: &mut S, stage: &PipelineStage, status: StageStatus) {
    emit_stage_changed(&stage.name(), &status.to_string());
    sink.emit(&PipelineEvent::StageChanged {
        stage: stage.clone(),
        status,
    });
}

fn progress<S: EventSink + ?Sized>(sink: &mut S, message: &str) {
    sink.emit(&PipelineEvent::Progress {
        message: message.to_string(),
    });
}
