//! Aggregate report over all simulated outcomes.

use serde::{Deserialize, Serialize};

use super::outcome::TestOutcome;

/// Pass rate (percent) that must be exceeded for a `Low` risk label.
pub const RISK_THRESHOLD_PERCENT: f64 = 90.0;

/// Coarse risk label derived from the pass rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
}

impl RiskLevel {
    /// `Low` iff `pass_rate` is strictly above [`RISK_THRESHOLD_PERCENT`].
    pub fn from_pass_rate(pass_rate: f64) -> Self {
        if pass_rate > RISK_THRESHOLD_PERCENT {
            Self::Low
        } else {
            Self::Medium
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
        }
    }
}

/// Reduction of all outcomes into totals, pass rate and risk label.
///
/// # Invariants
///
/// `passed + failed == total`, and `risk_level` is always
/// `RiskLevel::from_pass_rate(pass_rate)`. Build it with
/// [`AggregateReport::from_outcomes`] to keep both true.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AggregateReport {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    /// Percentage in `0.0..=100.0`; `0.0` when `total == 0`.
    pub pass_rate: f64,
    pub risk_level: RiskLevel,
}

impl AggregateReport {
    /// Reduce a flat list of outcomes.
    pub fn from_outcomes<'a, I>(outcomes: I) -> Self
    where
        I: IntoIterator<Item = &'a TestOutcome>,
    {
        let (total, passed) = outcomes
            .into_iter()
            .fold((0usize, 0usize), |(total, passed), o| {
                (total + 1, passed + usize::from(o.passed()))
            });
        let failed = total - passed;
        let pass_rate = if total == 0 {
            0.0
        } else {
            passed as f64 / total as f64 * 100.0
        };

        Self {
            total,
            passed,
            failed,
            pass_rate,
            risk_level: RiskLevel::from_pass_rate(pass_rate),
        }
    }

    /// Pass rate rendered with one decimal place, e.g. `"91.7%"`.
    pub fn pass_rate_display(&self) -> String {
        format!("{:.1}%", self.pass_rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::outcome::TestStatus;

    fn outcomes(passed: usize, failed: usize) -> Vec<TestOutcome> {
        let mut out = Vec::new();
        for i in 0..passed {
            out.push(TestOutcome::new(format!("P{i}"), TestStatus::Passed, 40.0));
        }
        for i in 0..failed {
            out.push(TestOutcome::new(format!("F{i}"), TestStatus::Failed, 40.0));
        }
        out
    }

    #[test]
    fn test_eleven_of_twelve_is_low_risk() {
        let report = AggregateReport::from_outcomes(&outcomes(11, 1));
        assert_eq!(report.total, 12);
        assert_eq!(report.passed, 11);
        assert_eq!(report.failed, 1);
        assert_eq!(report.pass_rate_display(), "91.7%");
        assert_eq!(report.risk_level, RiskLevel::Low);
    }

    #[test]
    fn test_exactly_ninety_is_medium_risk() {
        let report = AggregateReport::from_outcomes(&outcomes(9, 1));
        assert_eq!(report.pass_rate_display(), "90.0%");
        assert_eq!(report.risk_level, RiskLevel::Medium);
    }

    #[test]
    fn test_empty_outcomes_guarded() {
        let report = AggregateReport::from_outcomes(&outcomes(0, 0));
        assert_eq!(report.total, 0);
        assert_eq!(report.pass_rate, 0.0);
        assert_eq!(report.pass_rate_display(), "0.0%");
        assert_eq!(report.risk_level, RiskLevel::Medium);
    }

    #[test]
    fn test_no_failures_is_low_risk() {
        let report = AggregateReport::from_outcomes(&outcomes(12, 0));
        assert_eq!(report.pass_rate_display(), "100.0%");
        assert_eq!(report.failed, 0);
        assert_eq!(report.risk_level, RiskLevel::Low);
    }

    #[test]
    fn test_risk_level_display_and_serde() {
        assert_eq!(RiskLevel::Low.to_string(), "low");
        assert_eq!(RiskLevel::Medium.to_string(), "medium");
        assert_eq!(serde_json::to_string(&RiskLevel::Medium).unwrap(), "\"medium\"");
    }
}
