//! Run identity.

use chrono::{DateTime, Utc};
use pipesim_core::TestGroup;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Identity of one simulated pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PipelineSpec {
    /// Unique run id.
    pub run_id: Uuid,

    /// Seed of the outcome draw, if the run was seeded.
    pub seed: Option<u64>,

    /// SHA-256 digest of the ordered group definitions (deterministic).
    pub groups_digest: String,

    /// When the run started.
    pub started_at: DateTime<Utc>,
}

impl PipelineSpec {
    /// Create a new run identity for `groups`.
    pub fn new(groups: &[TestGroup], seed: Option<u64>) -> Self {
        Self {
            run_id: Uuid::new_v4(),
            seed,
            groups_digest: compute_groups_digest(groups),
            started_at: Utc::now(),
        }
    }
}

/// Compute deterministic digest of ordered group names and identifiers.
fn compute_groups_digest(groups: &[TestGroup]) -> String {
    let mut hasher = Sha256::new();
    for group in groups {
        hasher.update(group.name.as_bytes());
        hasher.update(b"\0");
        for test in &group.tests {
            hasher.update(test.as_bytes());
            hasher.update(b"\x1f");
        }
        hasher.update(b"\x1e");
    }
    hex::encode(hasher.finalize())
}
