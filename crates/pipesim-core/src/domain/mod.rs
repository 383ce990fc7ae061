//! Domain models for pipesim.
//!
//! Canonical definitions for the simulated entities:
//! - `TestGroup`: Named bundle of test identifiers executed together
//! - `TestOutcome`: Simulated result of one test identifier
//! - `AggregateReport`: Reduction of all outcomes into totals and a risk label

pub mod outcome;
pub mod report;
pub mod test_group;

pub use outcome::{TestOutcome, TestStatus};
pub use report::{AggregateReport, RiskLevel, RISK_THRESHOLD_PERCENT};
pub use test_group::{default_groups, TestGroup};
