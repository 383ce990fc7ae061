//! Pipeline stage definitions.

use serde::{Deserialize, Serialize};

/// Stages that print a RUNNING/SUCCESS status line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(tag = "kind", content = "group", rename_all = "snake_case")]
pub enum PipelineStage {
    /// Scripted strategy analysis.
    AiAnalysis,

    /// Scripted environment readiness checks.
    EnvironmentSetup,

    /// Simulated execution of one test group.
    ExecuteGroup(String),

    /// Reduction of all outcomes into the aggregate report.
    Aggregation,
}

impl PipelineStage {
    /// Get the stage's display name.
    pub fn name(&self) -> String {
        match self {
            PipelineStage::AiAnalysis => "AI Test Strategy Analysis".to_string(),
            PipelineStage::EnvironmentSetup => "Smart Environment Setup".to_string(),
            PipelineStage::ExecuteGroup(group) => format!("Execute {group} Tests"),
            PipelineStage::Aggregation => "AI Results Aggregation & Analysis".to_string(),
        }
    }

    /// Whether the stage pauses for the fixed stage delay when paced.
    pub fn has_stage_delay(&self) -> bool {
        !matches!(self, PipelineStage::ExecuteGroup(_))
    }
}

impl std::fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name())
    }
}

/// Status shown next to a stage.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum StageStatus {
    Running,
    Success,
    Failed,
}

impl std::fmt::Display for StageStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StageStatus::Running => write!(f, "RUNNING"),
            StageStatus::Success => write!(f, "SUCCESS"),
            StageStatus::Failed => write!(f, "FAILED"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_names() {
        assert_eq!(PipelineStage::AiAnalysis.name(), "AI Test Strategy Analysis");
        assert_eq!(PipelineStage::EnvironmentSetup.name(), "Smart Environment Setup");
        assert_eq!(
            PipelineStage::ExecuteGroup("Banking Operations".to_string()).name(),
            "Execute Banking Operations Tests"
        );
        assert_eq!(
            PipelineStage::Aggregation.to_string(),
            "AI Results Aggregation & Analysis"
        );
    }

    #[test]
    fn test_stage_delay() {
        assert!(PipelineStage::AiAnalysis.has_stage_delay());
        assert!(PipelineStage::Aggregation.has_stage_delay());
        assert!(!PipelineStage::ExecuteGroup("x".to_string()).has_stage_delay());
    }

    #[test]
    fn test_status_display() {
        assert_eq!(StageStatus::Running.to_string(), "RUNNING");
        assert_eq!(StageStatus::Success.to_string(), "SUCCESS");
        assert_eq!(StageStatus::Failed.to_string(), "FAILED");
    }
}
