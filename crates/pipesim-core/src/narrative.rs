//! Scripted narrative values shown during a simulated run.
//!
//! Everything here is a fixed literal. None of it is computed from
//! outcomes, and nothing should be.

use serde::{Deserialize, Serialize};

/// Confidence score printed next to the analysis and risk assessment.
pub const CONFIDENCE_SCORE: f64 = 0.95;

/// Environment readiness lines printed during setup.
pub const ENVIRONMENT_CHECKS: &[&str] = &[
    "🌐 Checking ParaBank availability... ✅",
    "🎭 Playwright installation check... ✅",
    "📊 System resources: CPU: 4 cores, Memory: 8GB ✅",
];

/// Feature bullets printed with the dashboard notice.
pub const DASHBOARD_FEATURES: &[&str] = &[
    "Real-time test execution metrics",
    "AI-powered insights and recommendations",
    "Performance and coverage analytics",
    "Interactive charts and visualizations",
];

/// Dashboard file name announced at the end of the run. Never written.
pub const DASHBOARD_FILE: &str = "Complete_Test_Execution_Report.html";

/// Scripted output of the "AI test strategy analysis" stage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StrategyBrief {
    pub strategy: String,
    pub priority: Vec<String>,
    pub execution_order: Vec<String>,
    pub parallel_groups: Vec<Vec<String>>,
    pub confidence_score: f64,
    pub estimated_duration: String,
}

impl StrategyBrief {
    pub fn scripted() -> Self {
        Self {
            strategy: "risk-based-testing".to_string(),
            priority: strings(&["authentication", "banking-operations", "security"]),
            execution_order: strings(&[
                "TC001", "TC002", "TC003", "TC004", "TC005", "TC006", "TC007", "TC008",
            ]),
            parallel_groups: vec![
                strings(&["TC001", "TC002", "TC003", "TC004"]),
                strings(&["TC005", "TC006", "TC007", "TC008"]),
                strings(&["TC013", "TC014", "TC015", "TC018"]),
            ],
            confidence_score: CONFIDENCE_SCORE,
            estimated_duration: "15-20 minutes".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceMetrics {
    pub average_test_duration: String,
    pub parallelization_efficiency: String,
    pub resource_utilization: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct QualityIndicators {
    pub code_stability: String,
    pub test_reliability: String,
    pub framework_maturity: String,
}

/// Scripted "AI insights" attached to the aggregation stage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Insights {
    pub performance_metrics: PerformanceMetrics,
    pub quality_indicators: QualityIndicators,
}

impl Insights {
    pub fn scripted() -> Self {
        Self {
            performance_metrics: PerformanceMetrics {
                average_test_duration: "45 seconds".to_string(),
                parallelization_efficiency: "85%".to_string(),
                resource_utilization: "optimal".to_string(),
            },
            quality_indicators: QualityIndicators {
                code_stability: "high".to_string(),
                test_reliability: "excellent".to_string(),
                framework_maturity: "production-ready".to_string(),
            },
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_is_fixed() {
        let brief = StrategyBrief::scripted();
        assert_eq!(brief, StrategyBrief::scripted());
        assert_eq!(brief.strategy, "risk-based-testing");
        assert_eq!(brief.parallel_groups.len(), 3);
        assert_eq!(brief.confidence_score, CONFIDENCE_SCORE);
    }

    #[test]
    fn test_insights_serialize_camel_case() {
        let json = serde_json::to_value(Insights::scripted()).unwrap();
        assert_eq!(json["performanceMetrics"]["averageTestDuration"], "45 seconds");
        assert_eq!(json["qualityIndicators"]["frameworkMaturity"], "production-ready");
    }
}
