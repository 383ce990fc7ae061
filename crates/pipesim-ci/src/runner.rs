//! Simulated execution of one test group.

use pipesim_core::{
    emit_test_simulated, simulate_test, OutcomePolicy, OverrideTable, TestGroup, TestOutcome,
    METRICS,
};
use rand::Rng;

use crate::pacing::Pacer;
use crate::sink::{EventSink, PipelineEvent};

/// Runs a group's identifiers one after another.
pub struct GroupRunner;

impl GroupRunner {
    /// Simulate every identifier of `group`, in order.
    ///
    /// Emits `TestStarted`, pauses, then emits `TestFinished` per identifier.
    /// Outcome draws use the same order as [`pipesim_core::simulate_group`],
    /// so both produce identical outcomes from equally seeded sources.
    pub async fn execute<R, S>(
        group: &TestGroup,
        overrides: &OverrideTable,
        policy: &OutcomePolicy,
        rng: &mut R,
        pacer: &mut Pacer,
        sink: &mut S,
    ) -> Vec<TestOutcome>
    where
        R: Rng + ?Sized,
        S: EventSink + ?Sized,
    {
        let mut outcomes = Vec::with_capacity(group.len());

        for test_id in &group.tests {
            sink.emit(&PipelineEvent::TestStarted {
                group: group.name.clone(),
                test_id: test_id.clone(),
            });
            pacer.test_pause().await;

            let outcome = simulate_test(test_id, overrides, policy, rng);
            METRICS.inc_tests_simulated();
            if overrides.get(test_id).is_some() {
                METRICS.inc_forced_outcomes();
            }
            emit_test_simulated(&group.name, &outcome);

            sink.emit(&PipelineEvent::TestFinished {
                group: group.name.clone(),
                outcome: outcome.clone(),
            });
            outcomes.push(outcome);
        }

        outcomes
    }
}
