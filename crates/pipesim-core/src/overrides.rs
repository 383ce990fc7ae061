//! Explicit override table for forced test outcomes.
//!
//! Forced outcomes are data, not branches: the aggregator consults the table
//! after drawing from the random source, so the draw sequence is the same
//! whether or not an identifier is overridden.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::TestStatus;

/// Ordered map of test identifier to forced status.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct OverrideTable {
    entries: BTreeMap<String, TestStatus>,
}

impl OverrideTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// The demo table: `TC007` always fails.
    pub fn demo() -> Self {
        Self::new().with_forced_failure("TC007")
    }

    /// Builder-style helper forcing `test_id` to fail.
    pub fn with_forced_failure(mut self, test_id: impl Into<String>) -> Self {
        self.insert(test_id, TestStatus::Failed);
        self
    }

    /// Force `test_id` to `status`, returning the previous entry if any.
    pub fn insert(&mut self, test_id: impl Into<String>, status: TestStatus) -> Option<TestStatus> {
        self.entries.insert(test_id.into(), status)
    }

    /// Forced status for `test_id`, if the table has one.
    pub fn get(&self, test_id: &str) -> Option<TestStatus> {
        self.entries.get(test_id).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, TestStatus)> {
        self.entries.iter().map(|(id, status)| (id.as_str(), *status))
    }
}
