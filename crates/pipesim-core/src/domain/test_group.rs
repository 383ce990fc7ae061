//! Test group definitions.

use serde::{Deserialize, Serialize};

/// A named bundle of test identifiers simulated together.
///
/// Groups are defined once at start and never mutated; execution order
/// follows `tests`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TestGroup {
    /// Human-readable group name (e.g. "Authentication").
    pub name: String,

    /// Ordered test identifiers.
    pub tests: Vec<String>,
}

impl TestGroup {
    /// Create a group from an explicit list of identifiers.
    pub fn new(name: impl Into<String>, tests: Vec<String>) -> Self {
        Self {
            name: name.into(),
            tests,
        }
    }

    /// Create a group from a comma-separated identifier list.
    ///
    /// Entries are trimmed and empty entries are dropped, so
    /// `"TC001, TC002,"` yields two identifiers.
    pub fn parse(name: impl Into<String>, tests: &str) -> Self {
        let tests = tests
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect();
        Self::new(name, tests)
    }

    /// Number of identifiers in this group.
    pub fn len(&self) -> usize {
        self.tests.len()
    }

    /// Whether the group holds no identifiers.
    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }
}

/// The three fixed groups of the demo pipeline (12 identifiers in total).
pub fn default_groups() -> Vec<TestGroup> {
    vec![
        TestGroup::parse("Authentication", "TC001,TC002,TC003,TC004"),
        TestGroup::parse("Banking Operations", "TC005,TC006,TC007,TC008"),
        TestGroup::parse("Navigation & UI", "TC013,TC014,TC015,TC019"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_splits_and_trims() {
        let group = TestGroup::parse("Smoke", " TC001, TC002 ,,TC003,");
        assert_eq!(group.name, "Smoke");
        assert_eq!(group.tests, vec!["TC001", "TC002", "TC003"]);
        assert_eq!(group.len(), 3);
    }

    #[test]
    fn test_parse_empty_list() {
        let group = TestGroup::parse("Empty", "");
        assert!(group.is_empty());
    }

    #[test]
    fn test_default_groups_shape() {
        let groups = default_groups();
        assert_eq!(groups.len(), 3);
        assert!(groups.iter().all(|g| g.len() == 4));
        assert_eq!(groups.iter().map(TestGroup::len).sum::<usize>(), 12);
        assert!(groups[1].tests.contains(&"TC007".to_string()));
        assert_eq!(groups[2].tests.last().map(String::as_str), Some("TC019"));
    }
}
