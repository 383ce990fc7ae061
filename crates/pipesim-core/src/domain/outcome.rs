//! Per-test simulated outcomes.

use serde::{Deserialize, Serialize};

/// Status of a simulated test.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum TestStatus {
    Passed,
    Failed,
}

impl TestStatus {
    /// Map a boolean pass decision to a status.
    pub fn from_passed(passed: bool) -> Self {
        if passed {
            Self::Passed
        } else {
            Self::Failed
        }
    }

    /// Whether this status counts as a pass.
    pub fn is_passed(self) -> bool {
        matches!(self, Self::Passed)
    }
}

impl std::fmt::Display for TestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Passed => write!(f, "PASSED"),
            Self::Failed => write!(f, "FAILED"),
        }
    }
}

/// Simulated result for one test identifier.
///
/// Created once during simulated execution and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TestOutcome {
    /// Test identifier (e.g. "TC007").
    pub test_id: String,

    /// Pass/fail status.
    pub status: TestStatus,

    /// Simulated duration in seconds. Display only.
    pub duration_secs: f64,
}

impl TestOutcome {
    /// Create a new outcome.
    pub fn new(test_id: impl Into<String>, status: TestStatus, duration_secs: f64) -> Self {
        Self {
            test_id: test_id.into(),
            status,
            duration_secs,
        }
    }

    /// Whether this outcome passed.
    pub fn passed(&self) -> bool {
        self.status.is_passed()
    }
}
