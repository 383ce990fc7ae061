//! Final verdict and recommendations for a simulated run.

use pipesim_core::{AggregateReport, RiskLevel};
use serde::{Deserialize, Serialize};

/// Overall status printed in the final summary.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OverallStatus {
    Success,
    PartialSuccess,
}

impl std::fmt::Display for OverallStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OverallStatus::Success => write!(f, "SUCCESS"),
            OverallStatus::PartialSuccess => write!(f, "PARTIAL SUCCESS"),
        }
    }
}

/// How a recommendation line should be presented.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AdviceTone {
    Positive,
    Caution,
    Info,
}

/// One recommendation line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Advice {
    pub tone: AdviceTone,
    pub message: String,
}

impl Advice {
    fn new(tone: AdviceTone, message: impl Into<String>) -> Self {
        Self {
            tone,
            message: message.into(),
        }
    }
}

/// Gate evaluation verdict.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GateVerdict {
    /// `Success` for low risk, `PartialSuccess` otherwise.
    pub overall: OverallStatus,

    /// Recommendation lines, in display order.
    pub recommendations: Vec<Advice>,
}

impl GateVerdict {
    pub fn passed(&self) -> bool {
        self.overall == OverallStatus::Success
    }
}

/// Gate rules over the aggregate report.
pub struct PipelineGate;

impl PipelineGate {
    /// Derive the verdict from the report's risk level.
    ///
    /// Gate rule:
    /// - `Low` risk: success, with three deployment-ready lines
    /// - `Medium` risk: partial success, with the failed count and a review
    ///   reminder
    /// - Both end with the same two informational lines
    pub fn evaluate(report: &AggregateReport) -> GateVerdict {
        let mut recommendations = match report.risk_level {
            RiskLevel::Low => vec![
                Advice::new(
                    AdviceTone::Positive,
                    format!(
                        "✅ Pipeline executed successfully with {} pass rate",
                        report.pass_rate_display()
                    ),
                ),
                Advice::new(
                    AdviceTone::Positive,
                    "🚀 Framework demonstrates excellent stability and reliability",
                ),
                Advice::new(
                    AdviceTone::Positive,
                    "🔄 Ready for production deployment with current test coverage",
                ),
            ],
            RiskLevel::Medium => vec![
                Advice::new(
                    AdviceTone::Caution,
                    format!("⚠️  {} test(s) require attention", report.failed),
                ),
                Advice::new(AdviceTone::Caution, "🔧 Review failed tests before deployment"),
            ],
        };

        recommendations.push(Advice::new(
            AdviceTone::Info,
            "📈 Performance metrics indicate optimal resource utilization",
        ));
        recommendations.push(Advice::new(
            AdviceTone::Info,
            "🛡️ Security tests passing - application security posture good",
        ));

        let overall = match report.risk_level {
            RiskLevel::Low => OverallStatus::Success,
            RiskLevel::Medium => OverallStatus::PartialSuccess,
        };

        GateVerdict {
            overall,
            recommendations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pipesim_core::{TestOutcome, TestStatus};

    fn report(passed: usize, failed: usize) -> AggregateReport {
        let outcomes: Vec<TestOutcome> = (0..passed)
            .map(|i| TestOutcome::new(format!("P{i}"), TestStatus::Passed, 40.0))
            .chain((0..failed).map(|i| TestOutcome::new(format!("F{i}"), TestStatus::Failed, 40.0)))
            .collect();
        AggregateReport::from_outcomes(&outcomes)
    }

    #[test]
    fn test_low_risk_is_success() {
        let verdict = PipelineGate::evaluate(&report(11, 1));
        assert!(verdict.passed());
        assert_eq!(verdict.overall.to_string(), "SUCCESS");
        assert_eq!(verdict.recommendations.len(), 5);
        assert!(verdict.recommendations[0].message.contains("91.7%"));
        assert_eq!(verdict.recommendations[0].tone, AdviceTone::Positive);
    }

    #[test]
    fn test_medium_risk_is_partial_success() {
        let verdict = PipelineGate::evaluate(&report(10, 2));
        assert!(!verdict.passed());
        assert_eq!(verdict.overall.to_string(), "PARTIAL SUCCESS");
        assert_eq!(verdict.recommendations.len(), 4);
        assert!(verdict.recommendations[0].message.contains("2 test(s) require attention"));
        assert!(verdict
            .recommendations
            .iter()
            .all(|a| a.tone != AdviceTone::Positive));
    }

    #[test]
    fn test_informational_lines_always_last() {
        for r in [report(12, 0), report(0, 3), report(0, 0)] {
            let verdict = PipelineGate::evaluate(&r);
            let tail: Vec<AdviceTone> = verdict
                .recommendations
                .iter()
                .rev()
                .take(2)
                .map(|a| a.tone)
                .collect();
            assert_eq!(tail, vec![AdviceTone::Info, AdviceTone::Info]);
        }
    }

    #[test]
    fn test_empty_report_is_partial_success() {
        let verdict = PipelineGate::evaluate(&report(0, 0));
        assert_eq!(verdict.overall, OverallStatus::PartialSuccess);
        assert!(verdict.recommendations[0].message.contains("0 test(s)"));
    }
}
