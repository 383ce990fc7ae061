//! JSON artifact describing one simulated run.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{AggregateReport, RiskLevel, TestOutcome};
use crate::narrative::{Insights, CONFIDENCE_SCORE};

/// Current artifact schema version.
pub const RUN_REPORT_SCHEMA_VERSION: &str = "1.0";

/// Errors produced while writing report artifacts.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("failed to write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Outcomes of one group, in execution order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GroupOutcomes {
    pub group: String,
    pub outcomes: Vec<TestOutcome>,
}

/// Risk label plus the scripted confidence score.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    pub level: RiskLevel,
    pub confidence_score: f64,
}

impl RiskAssessment {
    pub fn for_report(report: &AggregateReport) -> Self {
        Self {
            level: report.risk_level,
            confidence_score: CONFIDENCE_SCORE,
        }
    }
}

/// Canonical run report written on request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RunReportArtifact {
    pub schema_version: String,
    pub generated_at: DateTime<Utc>,
    pub run_id: Uuid,
    /// Seed used for the outcome draw, when the run was seeded.
    pub seed: Option<u64>,
    /// SHA-256 over the ordered group definitions.
    pub groups_digest: String,
    pub groups: Vec<GroupOutcomes>,
    pub report: AggregateReport,
    pub pass_rate_display: String,
    pub risk_assessment: RiskAssessment,
    pub insights: Insights,
}

impl RunReportArtifact {
    /// Assemble an artifact from a finished run.
    pub fn new(
        run_id: Uuid,
        seed: Option<u64>,
        groups_digest: String,
        groups: Vec<GroupOutcomes>,
        report: AggregateReport,
    ) -> Self {
        Self {
            schema_version: RUN_REPORT_SCHEMA_VERSION.to_string(),
            generated_at: Utc::now(),
            run_id,
            seed,
            groups_digest,
            groups,
            pass_rate_display: report.pass_rate_display(),
            risk_assessment: RiskAssessment::for_report(&report),
            report,
            insights: Insights::scripted(),
        }
    }
}

/// Write the artifact as pretty JSON.
pub fn write_run_report_json(path: &Path, artifact: &RunReportArtifact) -> Result<(), ReportError> {
    let content = serde_json::to_string_pretty(artifact)?;
    std::fs::write(path, content).map_err(|source| ReportError::Io {
        path: path.display().to_string(),
        source,
    })?;
    tracing::debug!(path = %path.display(), run_id = %artifact.run_id, "wrote run report");
    Ok(())
}
