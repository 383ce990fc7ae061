//! Synthetic result aggregator.
//!
//! Generates a biased pass/fail outcome and a uniform duration for every
//! test identifier, then reduces the flattened outcomes into an
//! [`AggregateReport`]. The random source is always passed in, so a seeded
//! [`StdRng`] reproduces the same report.
//!
//! Draw order per identifier is fixed: one uniform `[0, 1)` status draw,
//! then one duration draw. The status draw is consumed even when the
//! override table forces the result.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::OutcomePolicy;
use crate::domain::{AggregateReport, TestGroup, TestOutcome, TestStatus};
use crate::overrides::OverrideTable;

/// Build the random source for one run.
///
/// With a seed the stream is reproducible; without one it is seeded from OS
/// entropy.
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Simulate a single test identifier.
pub fn simulate_test<R: Rng + ?Sized>(
    test_id: &str,
    overrides: &OverrideTable,
    policy: &OutcomePolicy,
    rng: &mut R,
) -> TestOutcome {
    let draw: f64 = rng.gen();
    let drawn = TestStatus::from_passed(draw > policy.failure_probability);
    let status = overrides.get(test_id).unwrap_or(drawn);
    // gen_range panics on an empty range; unvalidated policies degrade to the lower bound.
    let duration_secs = if policy.min_duration_secs < policy.max_duration_secs {
        rng.gen_range(policy.min_duration_secs..policy.max_duration_secs)
    } else {
        policy.min_duration_secs
    };

    if status != drawn {
        tracing::trace!(test_id, %drawn, forced = %status, "override applied");
    }

    TestOutcome::new(test_id, status, duration_secs)
}

/// Simulate every identifier of one group, in order.
pub fn simulate_group<R: Rng + ?Sized>(
    group: &TestGroup,
    overrides: &OverrideTable,
    policy: &OutcomePolicy,
    rng: &mut R,
) -> Vec<TestOutcome> {
    group
        .tests
        .iter()
        .map(|test_id| simulate_test(test_id, overrides, policy, rng))
        .collect()
}

/// Simulate all groups, keeping per-group structure.
pub fn simulate<R: Rng + ?Sized>(
    groups: &[TestGroup],
    overrides: &OverrideTable,
    policy: &OutcomePolicy,
    rng: &mut R,
) -> Vec<Vec<TestOutcome>> {
    groups
        .iter()
        .map(|group| simulate_group(group, overrides, policy, rng))
        .collect()
}

/// Reduce per-group outcomes into one report.
pub fn aggregate(outcomes: &[Vec<TestOutcome>]) -> AggregateReport {
    AggregateReport::from_outcomes(outcomes.iter().flatten())
}

/// Simulate and aggregate in one step.
pub fn run_aggregation<R: Rng + ?Sized>(
    groups: &[TestGroup],
    overrides: &OverrideTable,
    policy: &OutcomePolicy,
    rng: &mut R,
) -> AggregateReport {
    aggregate(&simulate(groups, overrides, policy, rng))
}
