//! Event seam between the simulated pipeline and its presentation.
//!
//! The pipeline only emits [`PipelineEvent`]s; printing, coloring and
//! headers live in whatever [`EventSink`] the caller passes in.

use chrono::{DateTime, Utc};
use pipesim_core::{AggregateReport, Insights, StrategyBrief, TestOutcome};
use serde::Serialize;
use uuid::Uuid;

use crate::gate::GateVerdict;
use crate::stage::{PipelineStage, StageStatus};

/// Everything the pipeline reports while it runs, in emission order.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PipelineEvent {
    RunStarted {
        run_id: Uuid,
        started_at: DateTime<Utc>,
        target_application: String,
        framework: String,
    },
    StageChanged {
        stage: PipelineStage,
        status: StageStatus,
    },
    /// A line of scripted progress text inside the current stage.
    Progress { message: String },
    StrategyReady { strategy: StrategyBrief },
    EnvironmentChecked { check: String },
    TestStarted { group: String, test_id: String },
    TestFinished { group: String, outcome: TestOutcome },
    ReportAggregated {
        report: AggregateReport,
        insights: Insights,
        confidence_score: f64,
    },
    RecommendationsReady { verdict: GateVerdict },
    DashboardReady {
        features: Vec<String>,
        file: String,
    },
}

/// Receives pipeline events as they happen.
pub trait EventSink {
    fn emit(&mut self, event: &PipelineEvent);
}

/// Drops every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: &PipelineEvent) {}
}

/// Keeps every event in memory.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    events: Vec<PipelineEvent>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[PipelineEvent] {
        &self.events
    }

    /// Stage transitions in emission order.
    pub fn stage_transitions(&self) -> Vec<(PipelineStage, StageStatus)> {
        self.events
            .iter()
            .filter_map(|event| match event {
                PipelineEvent::StageChanged { stage, status } => Some((stage.clone(), *status)),
                _ => None,
            })
            .collect()
    }

    /// Outcomes in emission order.
    pub fn outcomes(&self) -> Vec<&TestOutcome> {
        self.events
            .iter()
            .filter_map(|event| match event {
                PipelineEvent::TestFinished { outcome, .. } => Some(outcome),
                _ => None,
            })
            .collect()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &PipelineEvent) {
        self.events.push(event.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pipesim_core::TestStatus;

    #[test]
    fn test_recording_sink_collects_in_order() {
        let mut sink = RecordingSink::new();
        sink.emit(&PipelineEvent::StageChanged {
            stage: PipelineStage::AiAnalysis,
            status: StageStatus::Running,
        });
        sink.emit(&PipelineEvent::TestFinished {
            group: "Authentication".to_string(),
            outcome: TestOutcome::new("TC001", TestStatus::Passed, 40.0),
        });
        sink.emit(&PipelineEvent::StageChanged {
            stage: PipelineStage::AiAnalysis,
            status: StageStatus::Success,
        });

        assert_eq!(sink.events().len(), 3);
        assert_eq!(
            sink.stage_transitions(),
            vec![
                (PipelineStage::AiAnalysis, StageStatus::Running),
                (PipelineStage::AiAnalysis, StageStatus::Success),
            ]
        );
        assert_eq!(sink.outcomes()[0].test_id, "TC001");
    }

    #[test]
    fn test_null_sink_accepts_events() {
        let mut sink = NullSink;
        sink.emit(&PipelineEvent::Progress {
            message: "ignored".to_string(),
        });
    }

    #[test]
    fn test_event_serializes_with_type_tag() {
        let event = PipelineEvent::TestStarted {
            group: "Authentication".to_string(),
            test_id: "TC002".to_string(),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "test_started");
        assert_eq!(json["test_id"], "TC002");
    }
}
